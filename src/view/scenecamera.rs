use log::trace;
use nalgebra::{
    Matrix4,
    Point3,
    Vector3
};

use crate::view::cameramanipulator::CameraManipulator;
use crate::view::camerapose::CameraPose;
use crate::view::projection::Projection;

/// In-memory camera with a home position, for views that keep the camera
/// transform themselves.
#[derive(Clone, Debug)]
pub struct SceneCamera {
    view_matrix: Matrix4<f64>,
    home_pose: CameraPose,
    projection: Projection
}

impl SceneCamera {
    /// Starts at `pose`, which is also the initial home position.
    pub fn new(pose: CameraPose, projection: Projection) -> SceneCamera {
        SceneCamera {
            view_matrix: pose.view_matrix(),
            home_pose: pose,
            projection
        }
    }

    pub fn home_pose(&self) -> &CameraPose {
        &self.home_pose
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f64> {
        self.projection.matrix() * self.view_matrix
    }
}

impl CameraManipulator for SceneCamera {
    fn view_matrix(&self) -> Matrix4<f64> {
        self.view_matrix
    }

    fn set_by_view_matrix(&mut self, view_matrix: Matrix4<f64>) {
        self.view_matrix = view_matrix;
    }

    fn set_home_position(&mut self, eye: Point3<f64>, center: Point3<f64>, up: Vector3<f64>) {
        self.home_pose = CameraPose::new(eye, center, up);
    }

    fn home(&mut self) {
        trace!("camera home: eye {:?}, center {:?}", self.home_pose.eye(), self.home_pose.center());
        self.view_matrix = self.home_pose.view_matrix();
    }

    fn projection(&self) -> Projection {
        self.projection
    }
}
