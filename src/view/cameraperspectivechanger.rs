use log::{
    debug,
    trace
};
use nalgebra::{
    Point3,
    Vector3
};

use crate::view::boundary::Boundary;
use crate::view::cameramanipulator::CameraManipulator;
use crate::view::camerapose::CameraPose;
use crate::view::perspectivechanger::PerspectiveChanger;

/// Zoom reported for every camera position until zoom levels are mapped to
/// camera distances.
pub const PLACEHOLDER_ZOOM: f64 = 100.0;

const PARALLEL_EPS: f64 = 1e-9;

/// Drives a 3D camera from 2D viewport requests.
pub struct CameraPerspectiveChanger<M> where
    M: CameraManipulator {
    manipulator: M,
    original_width: f64,
    original_height: f64,
    rotation: f64
}

impl <M> CameraPerspectiveChanger<M> where
    M: CameraManipulator {
    pub fn new(manipulator: M, viewport: &Boundary) -> CameraPerspectiveChanger<M> {
        CameraPerspectiveChanger {
            manipulator,
            original_width: viewport.width(),
            original_height: viewport.height(),
            rotation: 0.0
        }
    }

    pub fn manipulator(&self) -> &M {
        &self.manipulator
    }

    pub fn manipulator_mut(&mut self) -> &mut M {
        &mut self.manipulator
    }

    pub fn into_manipulator(self) -> M {
        self.manipulator
    }

    pub fn original_width(&self) -> f64 {
        self.original_width
    }

    pub fn original_height(&self) -> f64 {
        self.original_height
    }

    /// Up vector for a camera looking straight down. Keeps `up` unless it is
    /// vertical, then falls back to the previous heading or +Y.
    fn bird_view_up(up: Vector3<f64>, previous_direction: &Vector3<f64>) -> Vector3<f64> {
        if up.cross(&Vector3::z()).norm() > PARALLEL_EPS * up.norm() {
            return up;
        }
        let heading = Vector3::new(previous_direction.x, previous_direction.y, 0.0);
        if heading.norm() > PARALLEL_EPS {
            heading.normalize()
        } else {
            Vector3::y()
        }
    }
}

impl <M> PerspectiveChanger for CameraPerspectiveChanger<M> where
    M: CameraManipulator {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    fn x_pos(&self) -> f64 {
        self.manipulator.pose().eye().x
    }

    fn y_pos(&self) -> f64 {
        self.manipulator.pose().eye().y
    }

    fn z_pos(&self) -> f64 {
        self.manipulator.pose().eye().z
    }

    fn zoom(&self) -> f64 {
        PLACEHOLDER_ZOOM
    }

    fn zpos_to_zoom(&self, _z_pos: f64) -> f64 {
        PLACEHOLDER_ZOOM
    }

    fn zoom_to_zpos(&self, _zoom: f64) -> f64 {
        PLACEHOLDER_ZOOM
    }

    /// Keeps the view direction and backs the camera off along it until the
    /// circle of `radius` around `position` fits the vertical field of view.
    /// A direction with any vertical component is measured against the X
    /// axis instead of its own horizontal normal. Requests that would put the
    /// eye onto `position` (non-positive radius, degenerate field of view)
    /// leave the camera untouched.
    fn center_to(&mut self, position: Point3<f64>, radius: f64, _apply_zoom: bool) {
        let pose = self.manipulator.pose();
        let dir = pose.direction();
        let mut ortho_dir = if dir.dot(&Vector3::z()) != 0.0 {
            -Vector3::x()
        } else {
            Vector3::new(-dir.y, dir.x, 0.0)
        };
        ortho_dir.normalize_mut();

        let radius_vec = ortho_dir * radius;
        let half_fovy = self.manipulator.projection().half_fovy_rad();
        let outer_fov = dir * half_fovy.cos() + ortho_dir * half_fovy.sin();
        let fov_cross_radius = outer_fov.cross(&radius_vec);
        let fov_cross_dir = outer_fov.cross(&dir);
        let sign = if fov_cross_radius.dot(&fov_cross_dir) > 0.0 { 1.0 } else { -1.0 };
        let distance = fov_cross_radius.norm() / fov_cross_dir.norm();
        if !(radius > 0.0 && distance.is_finite() && distance > 0.0) {
            debug!("ignoring center request on {:?} with radius {}", position, radius);
            return;
        }
        let eye = position + dir * sign * distance;

        debug!("centering on {:?} with radius {}, new eye {:?}", position, radius, eye);
        self.manipulator.set_home_position(eye, position, pose.up());
        self.manipulator.home();
    }

    fn set_viewport(&mut self, _zoom: f64, x_pos: f64, y_pos: f64) {
        self.set_viewport_from(x_pos, y_pos, 0.0);
    }

    /// Points the camera at `(x_pos, y_pos, 0)`. A camera looking down at the
    /// ground is shifted horizontally so its line of sight hits that point;
    /// a horizontal camera, or one above ground looking up, is turned into a
    /// bird's-eye view right above it. `z_pos` is not used.
    fn set_viewport_from(&mut self, x_pos: f64, y_pos: f64, _z_pos: f64) {
        let pose = self.manipulator.pose();
        let dir = pose.direction();
        let look_from = pose.eye();
        let new_pose = if (dir.z > 0.0 && look_from.z >= 0.0) || dir.z == 0.0 {
            debug!("bird's-eye viewport at ({}, {})", x_pos, y_pos);
            let eye = Point3::new(x_pos, y_pos, look_from.z);
            let center = eye - Vector3::z();
            CameraPose::new(eye, center, Self::bird_view_up(pose.up(), &dir))
        } else {
            let factor = -look_from.z / dir.z;
            let ground_target = look_from + dir * factor;
            let shift = Vector3::new(x_pos - ground_target.x, y_pos - ground_target.y, 0.0);
            debug!("shifting viewport by ({}, {}) to ({}, {})", shift.x, shift.y, x_pos, y_pos);
            let mut shifted = pose;
            shifted.translate(&shift);
            shifted
        };
        trace!("camera set to eye {:?}, center {:?}", new_pose.eye(), new_pose.center());
        self.manipulator.set_by_view_matrix(new_pose.view_matrix());
    }

    fn set_viewport_boundary(&mut self, viewport: &Boundary) {
        let center = viewport.center();
        self.set_viewport(PLACEHOLDER_ZOOM, center.x, center.y);
    }

    fn change_canvas_size_left(&mut self, _change: i32) {}
}
