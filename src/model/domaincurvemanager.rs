use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::model::domaincurve::{
    CurveDomain,
    DomainCurve
};


#[derive(Deserialize)]
struct DomainCurveJsonProp {
    name: String,
    samples: String
}


fn get_domain_curve_from_json<D>(json_value: serde_json::Value) -> Result<DomainCurve<D>, ManagerError> where
    D: CurveDomain {
    let json_prop: DomainCurveJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    json_prop.samples
        .parse::<DomainCurve<D>>()
        .map_err(|source| ManagerError::SampleParseError { name: json_prop.name, source })
}


pub struct DomainCurveManager;


impl DomainCurveManager {
    pub fn new<D>() -> Manager<DomainCurve<D>> where
        D: CurveDomain {
        Manager::new(get_domain_curve_from_json::<D>)
    }
}
