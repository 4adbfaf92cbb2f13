use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::model::domaincurvemanager::DomainCurveManager;
use crate::model::signal::errorprobability::{
    ErrorProbability,
    ErrorProbabilityCurve
};
use crate::model::visual::visualangle::{
    VisualAngle,
    VisualAngleCurve
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    visual_angle: Vec<serde_json::Value>,
    #[serde(default)]
    error_probability: Vec<serde_json::Value>
}

/// Named lookup curves loaded from a JSON document of the form
///
/// ```json
/// {
///     "visual_angle": [{"name": "urban", "samples": "0,180;50,90"}],
///     "error_probability": [{"name": "default", "samples": "0,0;200,0.5"}]
/// }
/// ```
///
/// Loading is all-or-nothing: if any entry fails, no curve of the document
/// is registered.
pub struct Configuration {
    visual_angle_curve_manager_cell: RefCell<Manager<VisualAngleCurve>>,
    error_probability_curve_manager_cell: RefCell<Manager<ErrorProbabilityCurve>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            visual_angle_curve_manager_cell: RefCell::new(DomainCurveManager::new::<VisualAngle>()),
            error_probability_curve_manager_cell: RefCell::new(DomainCurveManager::new::<ErrorProbability>())
        }
    }

    pub fn visual_angle_curve_manager(&self) -> RefMut<'_, Manager<VisualAngleCurve>> {
        self.visual_angle_curve_manager_cell.borrow_mut()
    }

    pub fn error_probability_curve_manager(&self) -> RefMut<'_, Manager<ErrorProbabilityCurve>> {
        self.error_probability_curve_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        info!("loading configuration from {}", file_path.display());
        self.insert_json_prop(json_prop)
    }

    pub fn from_json_str(&self, json_str: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json_str)?;
        self.insert_json_prop(json_prop)
    }

    fn insert_json_prop(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let staged_visual_angle = DomainCurveManager::new::<VisualAngle>();
        staged_visual_angle.insert_obj_from_json_vec(&json_prop.visual_angle)?;
        let staged_error_probability = DomainCurveManager::new::<ErrorProbability>();
        staged_error_probability.insert_obj_from_json_vec(&json_prop.error_probability)?;
        self.visual_angle_curve_manager().merge(staged_visual_angle);
        self.error_probability_curve_manager().merge(staged_error_probability);
        info!(
            "configuration holds {} visual angle curve(s), {} error probability curve(s)",
            self.visual_angle_curve_manager().len(),
            self.error_probability_curve_manager().len()
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
