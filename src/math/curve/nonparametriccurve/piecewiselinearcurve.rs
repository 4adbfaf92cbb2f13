use std::fmt;

use log::debug;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Sample
};
use crate::math::curve::nonparametriccurve::sampletext::{
    parse_samples,
    render_samples,
    ParseSampleError
};

/// Piecewise-linear lookup table with flat extrapolation at both ends.
///
/// Samples are kept sorted ascending by key and keys are unique: inserting a
/// key that is already present is ignored, so the first value wins. The
/// sample list is private, every mutation goes through `add_sample` or one
/// of the parse functions.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    samples: Vec<Sample>,
    empty_value: f64
}

impl SampledCurve {
    /// `empty_value` is returned by `evaluate` while the curve has no samples.
    pub fn new(empty_value: f64) -> SampledCurve {
        SampledCurve { samples: Vec::new(), empty_value }
    }

    pub fn empty_value(&self) -> f64 {
        self.empty_value
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Exact floating-point comparison on the key.
    pub fn exists(&self, key: f64) -> bool {
        self.samples.iter().any(|sample| sample.key() == key)
    }

    pub fn add_sample(&mut self, sample: Sample) {
        if !self.exists(sample.key()) {
            self.samples.push(sample);
        }
        self.samples.sort_by(|lhs, rhs| lhs.key().total_cmp(&rhs.key()));
    }

    /// Index of the first sample whose key is not below `key`, or `len()`
    /// if every key is below it.
    fn upper_index(&self, key: f64) -> usize {
        self.samples
            .iter()
            .position(|sample| sample.key() >= key)
            .unwrap_or(self.samples.len())
    }

    pub fn evaluate(&self, key: f64) -> f64 {
        match self.samples.len() {
            0 => self.empty_value,
            1 => self.samples[0].value(),
            len => {
                let i = self.upper_index(key);
                if i == 0 {
                    self.samples[0].value()
                } else if i == len {
                    self.samples[len - 1].value()
                } else {
                    let prev = &self.samples[i - 1];
                    let curr = &self.samples[i];
                    prev.value() + Sample::slope(prev, curr) * (key - prev.key())
                }
            }
        }
    }

    pub fn serialize(&self) -> String {
        render_samples(&self.samples)
    }

    pub fn can_parse(text: &str) -> bool {
        parse_samples(text).is_ok()
    }

    /// Replaces the content with the samples in `text`. Nothing changes when
    /// `text` is empty or malformed.
    pub fn try_parse(&mut self, text: &str) -> Result<(), ParseSampleError> {
        let parsed = parse_samples(text)?;
        if parsed.is_empty() {
            return Ok(());
        }
        self.samples.clear();
        for sample in parsed {
            self.add_sample(sample);
        }
        Ok(())
    }

    pub fn parse(&mut self, text: &str) {
        if let Err(error) = self.try_parse(text) {
            debug!("ignoring malformed sample table '{}': {}", text, error);
        }
    }
}

impl Curve for SampledCurve {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        let len = self.samples.len();
        if len < 2 {
            return 0.0;
        }
        let i = self.upper_index(x);
        if i == 0 || i == len {
            0.0
        } else {
            Sample::slope(&self.samples[i - 1], &self.samples[i])
        }
    }
}

impl NonparametricCurve for SampledCurve {
    fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl fmt::Display for SampledCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
