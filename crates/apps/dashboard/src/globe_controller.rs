//! Idle rotation and pointer interaction for one globe.

use layers::GlobeView;

use crate::config::DashboardConfig;

#[derive(Debug, Clone)]
pub struct GlobeController {
    auto_rotate_rad: f64,
    drag_rotate_rad_per_px: f64,
    zoom_per_wheel_unit: f64,
    min_distance: f64,
    max_distance: f64,
    dragging: bool,
    last_pos_px: [f64; 2],
}

impl Default for GlobeController {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl GlobeController {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            auto_rotate_rad: config.auto_rotate_rad_per_frame,
            drag_rotate_rad_per_px: config.drag_rotate_rad_per_px,
            zoom_per_wheel_unit: config.zoom_per_wheel_unit,
            min_distance: config.min_camera_distance,
            max_distance: config.max_camera_distance,
            dragging: false,
            last_pos_px: [0.0, 0.0],
        }
    }

    pub fn on_pointer_down(&mut self, pos_px: [f64; 2]) {
        self.dragging = true;
        self.last_pos_px = pos_px;
    }

    /// Rotates the body by the pointer delta while dragging: horizontal motion
    /// yaws, vertical motion pitches.
    pub fn on_pointer_move<G: GlobeView>(&mut self, pos_px: [f64; 2], globe: &mut G) {
        if !self.dragging {
            return;
        }
        let dx = pos_px[0] - self.last_pos_px[0];
        let dy = pos_px[1] - self.last_pos_px[1];
        globe.rotate_body(
            dy * self.drag_rotate_rad_per_px,
            dx * self.drag_rotate_rad_per_px,
        );
        self.last_pos_px = pos_px;
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Moves the camera along its line of sight, keeping it within the
    /// configured distance range. Returns the new distance.
    pub fn on_wheel<G: GlobeView>(&mut self, delta_y: f64, globe: &mut G) -> f64 {
        let camera = globe.camera_position();
        let distance = (camera.length() + delta_y * self.zoom_per_wheel_unit)
            .clamp(self.min_distance, self.max_distance);
        globe.set_camera_position(camera.with_length(distance));
        distance
    }

    /// One animation frame: idle rotation unless a drag is active, then draw.
    pub fn step<G: GlobeView>(&mut self, globe: &mut G) {
        if !self.dragging {
            globe.rotate_body(0.0, self.auto_rotate_rad);
        }
        globe.render();
    }
}
