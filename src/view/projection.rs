use nalgebra::{
    Matrix4,
    Perspective3
};

/// Perspective parameters of the scene camera. The field of view is the
/// vertical one, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    fovy_deg: f64,
    aspect: f64,
    z_near: f64,
    z_far: f64
}

impl Projection {
    pub fn new(fovy_deg: f64, aspect: f64, z_near: f64, z_far: f64) -> Projection {
        Projection { fovy_deg, aspect, z_near, z_far }
    }

    /// A canvas without height (or width) gets a square aspect.
    pub fn from_canvas(width: u32, height: u32, fovy_deg: f64, z_near: f64, z_far: f64) -> Projection {
        let aspect = Self::canvas_aspect(width, height).unwrap_or(1.0);
        Projection::new(fovy_deg, aspect, z_near, z_far)
    }

    /// Keeps the current aspect while the canvas is collapsed.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(aspect) = Self::canvas_aspect(width, height) {
            self.aspect = aspect;
        }
    }

    fn canvas_aspect(width: u32, height: u32) -> Option<f64> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(width as f64 / height as f64)
        }
    }

    pub fn fovy_deg(&self) -> f64 {
        self.fovy_deg
    }

    pub fn half_fovy_rad(&self) -> f64 {
        (0.5 * self.fovy_deg).to_radians()
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn z_near(&self) -> f64 {
        self.z_near
    }

    pub fn z_far(&self) -> f64 {
        self.z_far
    }

    pub fn matrix(&self) -> Matrix4<f64> {
        Perspective3::new(self.aspect, self.fovy_deg.to_radians(), self.z_near, self.z_far).to_homogeneous()
    }
}
