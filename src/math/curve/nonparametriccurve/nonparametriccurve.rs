use std::fmt;

/// One `(key, value)` observation of a sampled function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    key: f64,
    value: f64
}

impl Sample {
    pub fn new(key: f64, value: f64) -> Sample {
        Sample { key, value }
    }

    pub fn key(&self) -> f64 {
        self.key
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn slope(lhs: &Sample, rhs: &Sample) -> f64 {
        (rhs.value - lhs.value) / (rhs.key - lhs.key)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.key, self.value)
    }
}

pub trait NonparametricCurve {
    fn samples(&self) -> &[Sample];

    fn min_key(&self) -> Option<f64> {
        self.samples().first().map(|sample| sample.key())
    }

    fn max_key(&self) -> Option<f64> {
        self.samples().last().map(|sample| sample.key())
    }
}
