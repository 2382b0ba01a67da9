//! Rendering collaborators consumed by the synchronizer.
//!
//! The engine never draws anything itself: a 2D tile map widget and a 3D
//! engine are driven through these traits, each handing back an opaque marker
//! handle that is later passed back for removal.

use catalog::Fragment;
use foundation::Vec3;

use crate::symbology::{GlobeMarkerStyle, MapMarkerStyle};

/// Pixel size of a view container.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a collapsed container reads as square.
    pub fn aspect(self) -> f64 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

pub trait MapView {
    type Marker;

    /// Adds a circle marker at `(lat, lon)` with `popup` bound to it.
    fn add_marker(
        &mut self,
        lat_deg: f64,
        lon_deg: f64,
        style: &MapMarkerStyle,
        popup: &Fragment,
    ) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn set_center(&mut self, lat_deg: f64, lon_deg: f64, zoom: u8);

    /// Shows the popup bound to `marker`.
    fn open_popup(&mut self, marker: &Self::Marker);

    /// Re-measures the container after a layout change.
    fn invalidate_layout(&mut self);
}

pub trait GlobeView {
    type Marker;

    /// Adds a sphere marker attached to the rotating body, at `position` in
    /// body-local coordinates.
    fn add_marker(
        &mut self,
        position: Vec3,
        style: &GlobeMarkerStyle,
        popup: &Fragment,
    ) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn camera_position(&self) -> Vec3;

    fn set_camera_position(&mut self, position: Vec3);

    fn look_at(&mut self, target: Vec3);

    fn set_camera_aspect(&mut self, size: ViewportSize);

    /// Rotates the body (and every attached marker) by the given Euler deltas.
    fn rotate_body(&mut self, pitch_rad: f64, yaw_rad: f64);

    /// Draws exactly one frame.
    fn render(&mut self);
}
