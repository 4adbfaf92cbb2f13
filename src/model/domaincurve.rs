use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Sample
};
use crate::math::curve::nonparametriccurve::piecewiselinearcurve::SampledCurve;
use crate::math::curve::nonparametriccurve::sampletext::ParseSampleError;

/// Physical meaning of a lookup curve's keys and values.
pub trait CurveDomain: Clone + fmt::Debug + PartialEq {
    /// Value reported while the curve has no samples.
    const EMPTY_VALUE: f64;
}

/// A `SampledCurve` tied to one domain. Serialized as its `key,value;...`
/// text form.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainCurve<D> where
    D: CurveDomain {
    curve: SampledCurve,
    domain: PhantomData<D>
}

impl <D> DomainCurve<D> where
    D: CurveDomain {
    pub fn new() -> DomainCurve<D> {
        DomainCurve { curve: SampledCurve::new(D::EMPTY_VALUE), domain: PhantomData }
    }

    pub fn exists(&self, key: f64) -> bool {
        self.curve.exists(key)
    }

    pub fn add_sample(&mut self, key: f64, value: f64) {
        self.curve.add_sample(Sample::new(key, value));
    }

    pub fn evaluate(&self, key: f64) -> f64 {
        self.curve.evaluate(key)
    }

    pub fn serialize(&self) -> String {
        self.curve.serialize()
    }

    pub fn can_parse(text: &str) -> bool {
        SampledCurve::can_parse(text)
    }

    pub fn parse(&mut self, text: &str) {
        self.curve.parse(text);
    }

    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }
}

impl <D> Default for DomainCurve<D> where
    D: CurveDomain {
    fn default() -> Self {
        DomainCurve::new()
    }
}

impl <D> Curve for DomainCurve<D> where
    D: CurveDomain {
    fn value(&self, x: f64) -> f64 {
        self.curve.value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.curve.derivative(x)
    }
}

impl <D> NonparametricCurve for DomainCurve<D> where
    D: CurveDomain {
    fn samples(&self) -> &[Sample] {
        self.curve.samples()
    }
}

impl <D> FromStr for DomainCurve<D> where
    D: CurveDomain {
    type Err = ParseSampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut domain_curve = DomainCurve::new();
        domain_curve.curve.try_parse(s)?;
        Ok(domain_curve)
    }
}

impl <D> fmt::Display for DomainCurve<D> where
    D: CurveDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.curve, f)
    }
}

impl <D> Serialize for DomainCurve<D> where
    D: CurveDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer {
        serializer.serialize_str(&self.curve.serialize())
    }
}

impl <'de, D> Deserialize<'de> for DomainCurve<D> where
    D: CurveDomain {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error> where
        De: Deserializer<'de> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
