use crate::model::domaincurve::{
    CurveDomain,
    DomainCurve
};

/// Returned when no sample has been configured: predictions are never wrong.
pub const UNDEFINED_ERROR_PROBABILITY: f64 = 0.0;

/// Distance to the signal in meters to the probability (0 to 1) that a
/// signal state prediction is wrong.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorProbability;

impl CurveDomain for ErrorProbability {
    const EMPTY_VALUE: f64 = UNDEFINED_ERROR_PROBABILITY;
}

pub type ErrorProbabilityCurve = DomainCurve<ErrorProbability>;

impl DomainCurve<ErrorProbability> {
    pub fn error_probability(&self, distance_m: f64) -> f64 {
        self.evaluate(distance_m)
    }
}
