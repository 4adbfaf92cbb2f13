use approx::assert_relative_eq;
use nalgebra::{
    Matrix4,
    Point3,
    Vector3
};

use sightline::view::boundary::Boundary;
use sightline::view::cameramanipulator::CameraManipulator;
use sightline::view::camerapose::CameraPose;
use sightline::view::cameraperspectivechanger::CameraPerspectiveChanger;
use sightline::view::perspectivechanger::PerspectiveChanger;
use sightline::view::projection::Projection;

/// Counts the calls the changer makes instead of moving a real camera.
struct RecordingManipulator {
    view_matrix: Matrix4<f64>,
    projection: Projection,
    home_position: Option<CameraPose>,
    home_calls: usize,
    matrix_updates: usize
}

impl RecordingManipulator {
    fn looking_from(eye: Point3<f64>, center: Point3<f64>, up: Vector3<f64>) -> RecordingManipulator {
        RecordingManipulator {
            view_matrix: CameraPose::new(eye, center, up).view_matrix(),
            projection: Projection::new(60.0, 4.0 / 3.0, 1.0, 5000.0),
            home_position: None,
            home_calls: 0,
            matrix_updates: 0
        }
    }
}

impl CameraManipulator for RecordingManipulator {
    fn view_matrix(&self) -> Matrix4<f64> {
        self.view_matrix
    }

    fn set_by_view_matrix(&mut self, view_matrix: Matrix4<f64>) {
        self.view_matrix = view_matrix;
        self.matrix_updates += 1;
    }

    fn set_home_position(&mut self, eye: Point3<f64>, center: Point3<f64>, up: Vector3<f64>) {
        self.home_position = Some(CameraPose::new(eye, center, up));
    }

    fn home(&mut self) {
        self.home_calls += 1;
        if let Some(pose) = self.home_position {
            self.view_matrix = pose.view_matrix();
        }
    }

    fn projection(&self) -> Projection {
        self.projection
    }
}

#[test]
fn center_to_goes_through_home_position() {
    let manipulator = RecordingManipulator::looking_from(Point3::new(0.0, 0.0, 500.0), Point3::origin(), Vector3::y());
    let mut changer = CameraPerspectiveChanger::new(manipulator, &Boundary::new(0.0, 0.0, 1000.0, 1000.0));
    changer.center_to(Point3::new(100.0, 200.0, 0.0), 50.0, true);

    let manipulator = changer.into_manipulator();
    assert_eq!(manipulator.home_calls, 1);
    assert_eq!(manipulator.matrix_updates, 0);
    let home = manipulator.home_position.unwrap();
    assert_eq!(home.center(), Point3::new(100.0, 200.0, 0.0));
    // 60 degree fov: the radius subtends 30 degrees from the eye
    let expected_height = 50.0 / 30.0_f64.to_radians().tan();
    assert_relative_eq!(home.eye(), Point3::new(100.0, 200.0, expected_height), epsilon = 1e-9);
}

#[test]
fn set_viewport_updates_matrix_once() {
    let manipulator = RecordingManipulator::looking_from(Point3::new(0.0, -300.0, 400.0), Point3::origin(), Vector3::z());
    let mut changer = CameraPerspectiveChanger::new(manipulator, &Boundary::new(0.0, 0.0, 1000.0, 1000.0));
    changer.set_viewport_boundary(&Boundary::new(100.0, 100.0, 300.0, 500.0));

    assert_eq!(changer.manipulator().matrix_updates, 1);
    assert_eq!(changer.manipulator().home_calls, 0);
    let pose = changer.manipulator().pose();
    let factor = -pose.eye().z / pose.direction().z;
    let ground_target = pose.eye() + pose.direction() * factor;
    assert_relative_eq!(ground_target, Point3::new(200.0, 300.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(pose.eye().z, 400.0, epsilon = 1e-9);
}
