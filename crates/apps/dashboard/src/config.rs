use std::env;
use std::path::PathBuf;

use serde::Deserialize;

/// Tunables of the dashboard. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding `<kind>.geojson` files.
    pub data_dir: PathBuf,
    pub initial_map_zoom: u8,
    pub focus_map_zoom: u8,
    pub globe_radius: f64,
    pub marker_radius: f64,
    /// Camera distance from the globe center, at start and after a focus.
    pub camera_distance: f64,
    pub focus_steps: u32,
    pub auto_rotate_rad_per_frame: f64,
    pub drag_rotate_rad_per_px: f64,
    pub zoom_per_wheel_unit: f64,
    pub min_camera_distance: f64,
    pub max_camera_distance: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            initial_map_zoom: 2,
            focus_map_zoom: 6,
            globe_radius: 5.0,
            marker_radius: 5.1,
            camera_distance: 15.0,
            focus_steps: 60,
            auto_rotate_rad_per_frame: 0.002,
            drag_rotate_rad_per_px: 0.01,
            zoom_per_wheel_unit: 0.01,
            min_camera_distance: 8.0,
            max_camera_distance: 50.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "invalid dashboard config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl DashboardConfig {
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Defaults with `DASHBOARD_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("DASHBOARD_DATA_DIR").filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self.focus_steps = parsed_or(&lookup, "DASHBOARD_FOCUS_STEPS", self.focus_steps);
        self.camera_distance =
            parsed_or(&lookup, "DASHBOARD_CAMERA_DISTANCE", self.camera_distance);
        self
    }
}

fn parsed_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::DashboardConfig;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.focus_steps, 60);
        assert_eq!(cfg.marker_radius, 5.1);
    }

    #[test]
    fn json_overrides_selected_fields() {
        let cfg =
            DashboardConfig::from_json_str(r#"{"data_dir": "/srv/data", "focus_steps": 30}"#)
                .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(cfg.focus_steps, 30);
        assert_eq!(cfg.camera_distance, 15.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DashboardConfig::from_json_str("{\"focus_steps\": \"many\"}").unwrap_err();
        assert!(err.to_string().starts_with("invalid dashboard config"));
    }

    #[test]
    fn env_overrides_ignore_unparseable_values() {
        let vars: HashMap<&str, &str> = [
            ("DASHBOARD_DATA_DIR", "/tmp/geo"),
            ("DASHBOARD_FOCUS_STEPS", "lots"),
            ("DASHBOARD_CAMERA_DISTANCE", "20.5"),
        ]
        .into_iter()
        .collect();
        let cfg = DashboardConfig::default()
            .with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/geo"));
        assert_eq!(cfg.focus_steps, 60);
        assert_eq!(cfg.camera_distance, 20.5);
    }
}
