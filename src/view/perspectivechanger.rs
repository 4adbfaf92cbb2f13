use nalgebra::Point3;

use crate::view::boundary::Boundary;

/// Viewport requests a view hands to whatever owns its camera.
pub trait PerspectiveChanger {
    fn rotation(&self) -> f64;

    fn set_rotation(&mut self, rotation: f64);

    fn x_pos(&self) -> f64;

    fn y_pos(&self) -> f64;

    fn z_pos(&self) -> f64;

    fn zoom(&self) -> f64;

    fn zpos_to_zoom(&self, z_pos: f64) -> f64;

    fn zoom_to_zpos(&self, zoom: f64) -> f64;

    /// Moves the camera so that `position` and the `radius` around it are
    /// in view.
    fn center_to(&mut self, position: Point3<f64>, radius: f64, apply_zoom: bool);

    fn set_viewport(&mut self, zoom: f64, x_pos: f64, y_pos: f64);

    fn set_viewport_from(&mut self, x_pos: f64, y_pos: f64, z_pos: f64);

    fn set_viewport_boundary(&mut self, viewport: &Boundary);

    fn change_canvas_size_left(&mut self, change: i32);
}
