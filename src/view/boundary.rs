use nalgebra::Point2;

/// Axis-aligned 2D region in network coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64
}

impl Boundary {
    /// Corners may be given in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Boundary {
        Boundary {
            x_min: x1.min(x2),
            y_min: y1.min(y2),
            x_max: x1.max(x2),
            y_max: y1.max(y2)
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_corners() {
        let boundary = Boundary::new(10.0, 4.0, -2.0, 8.0);
        assert_eq!(boundary.x_min(), -2.0);
        assert_eq!(boundary.y_max(), 8.0);
        assert_eq!(boundary.width(), 12.0);
        assert_eq!(boundary.height(), 4.0);
        assert_eq!(boundary.center(), Point2::new(4.0, 6.0));
    }
}
