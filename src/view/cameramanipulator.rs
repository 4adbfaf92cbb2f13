use nalgebra::{
    Matrix4,
    Point3,
    Vector3
};

use crate::view::camerapose::CameraPose;
use crate::view::projection::Projection;

/// Camera handle owned by a 3D view. The perspective changer only talks to
/// the camera through this trait.
pub trait CameraManipulator {
    /// Current world-to-eye transform.
    fn view_matrix(&self) -> Matrix4<f64>;

    fn set_by_view_matrix(&mut self, view_matrix: Matrix4<f64>);

    fn set_home_position(&mut self, eye: Point3<f64>, center: Point3<f64>, up: Vector3<f64>);

    /// Moves the camera to the home position.
    fn home(&mut self);

    fn projection(&self) -> Projection;

    fn pose(&self) -> CameraPose {
        CameraPose::from_view_matrix(&self.view_matrix())
    }
}
