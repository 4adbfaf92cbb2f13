use crate::model::domaincurve::{
    CurveDomain,
    DomainCurve
};

/// Returned when no sample has been configured: a full circle, i.e. the
/// driver sees everything.
pub const UNDEFINED_VISUAL_ANGLE_DEG: f64 = 360.0;

/// Velocity in km/h to visual angle in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualAngle;

impl CurveDomain for VisualAngle {
    const EMPTY_VALUE: f64 = UNDEFINED_VISUAL_ANGLE_DEG;
}

pub type VisualAngleCurve = DomainCurve<VisualAngle>;

impl DomainCurve<VisualAngle> {
    pub fn angle_deg(&self, velocity_kmh: f64) -> f64 {
        self.evaluate(velocity_kmh)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;

    use super::*;

    #[test]
    fn unconfigured_curve_sees_full_circle() {
        let visual_angle_curve = VisualAngleCurve::new();
        assert_eq!(visual_angle_curve.angle_deg(50.0), UNDEFINED_VISUAL_ANGLE_DEG);
    }

    #[test]
    fn narrows_with_velocity() {
        let visual_angle_curve: VisualAngleCurve = "0,180;50,90;100,40".parse().unwrap();
        assert_relative_eq!(visual_angle_curve.angle_deg(25.0), 135.0);
        assert_relative_eq!(visual_angle_curve.angle_deg(75.0), 65.0);
        assert_eq!(visual_angle_curve.angle_deg(130.0), 40.0);
        assert_eq!(visual_angle_curve.min_key(), Some(0.0));
        assert_eq!(visual_angle_curve.max_key(), Some(100.0));
    }
}
