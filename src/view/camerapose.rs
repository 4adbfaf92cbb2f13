use nalgebra::{
    Matrix3,
    Matrix4,
    Point3,
    Vector3
};

/// Camera placement as look-from, look-at and up vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    eye: Point3<f64>,
    center: Point3<f64>,
    up: Vector3<f64>
}

impl CameraPose {
    pub fn new(eye: Point3<f64>, center: Point3<f64>, up: Vector3<f64>) -> CameraPose {
        CameraPose { eye, center, up }
    }

    /// Recovers the pose from a rigid world-to-eye transform. The look-at
    /// point is placed one unit in front of the eye.
    pub fn from_view_matrix(view_matrix: &Matrix4<f64>) -> CameraPose {
        let rotation: Matrix3<f64> = view_matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let translation: Vector3<f64> = view_matrix.fixed_view::<3, 1>(0, 3).into_owned();
        let inverse_rotation = rotation.transpose();
        let eye = Point3::from(-(inverse_rotation * translation));
        let forward = (inverse_rotation * -Vector3::z()).normalize();
        let up = inverse_rotation * Vector3::y();
        CameraPose { eye, center: eye + forward, up }
    }

    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.eye, &self.center, &self.up)
    }

    pub fn eye(&self) -> Point3<f64> {
        self.eye
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn up(&self) -> Vector3<f64> {
        self.up
    }

    /// Look-at minus look-from, not normalized.
    pub fn direction(&self) -> Vector3<f64> {
        self.center - self.eye
    }

    pub fn translate(&mut self, shift: &Vector3<f64>) {
        self.eye += *shift;
        self.center += *shift;
    }
}
