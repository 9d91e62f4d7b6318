//! Application settings structs.
//!
//! Camera poses, animation durations, tour cadence and idle-rotation rate.
//! Loaded from a JSON file by [`crate::config_manager::ConfigManager`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geodata source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Camera motion settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Autoplay tour settings
    #[serde(default)]
    pub tour: TourConfig,
}

impl AppConfig {
    /// Built-in defaults (also written on first run).
    pub fn default_config() -> Self {
        Self {
            data: DataConfig::default(),
            camera: CameraConfig::default(),
            tour: TourConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Geodata source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the career-event JSON file.
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data/career.json")
}

/// Camera motion settings.
///
/// The overview values and the fly-to approach (duration, tilt, elevation,
/// panel offset) are fixed products constants; they live in config so demos
/// and tests can shrink the durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Fixed overview pose shown at startup and after reset.
    #[serde(default = "default_overview")]
    pub overview: OverviewConfig,
    /// Directed-move duration for fly-to (milliseconds)
    #[serde(default = "default_fly_duration_ms")]
    pub fly_duration_ms: u64,
    /// Directed-move duration for reset (milliseconds)
    #[serde(default = "default_reset_duration_ms")]
    pub reset_duration_ms: u64,
    /// Camera tilt when approaching a marker (degrees from nadir)
    #[serde(default = "default_fly_tilt_deg")]
    pub fly_tilt_deg: f64,
    /// Camera elevation when approaching a marker (meters)
    #[serde(default = "default_fly_elevation_m")]
    pub fly_elevation_m: f64,
    /// Latitude nudge keeping the marker clear of the docked detail panel
    /// (degrees; applied toward the panel-free half of the viewport)
    #[serde(default = "default_panel_latitude_offset_deg")]
    pub panel_latitude_offset_deg: f64,
    /// Idle rotation per tick (degrees; the controller negates it)
    #[serde(default = "default_idle_step_deg")]
    pub idle_step_deg: f64,
    /// Idle rotation tick period (milliseconds, ~one animation frame)
    #[serde(default = "default_idle_frame_ms")]
    pub idle_frame_ms: u64,
}

impl CameraConfig {
    /// Fly-to duration as a [`Duration`].
    pub fn fly_duration(&self) -> Duration {
        Duration::from_millis(self.fly_duration_ms)
    }

    /// Reset duration as a [`Duration`].
    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }

    /// Idle tick period as a [`Duration`].
    pub fn idle_frame(&self) -> Duration {
        Duration::from_millis(self.idle_frame_ms)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            overview: default_overview(),
            fly_duration_ms: default_fly_duration_ms(),
            reset_duration_ms: default_reset_duration_ms(),
            fly_tilt_deg: default_fly_tilt_deg(),
            fly_elevation_m: default_fly_elevation_m(),
            panel_latitude_offset_deg: default_panel_latitude_offset_deg(),
            idle_step_deg: default_idle_step_deg(),
            idle_frame_ms: default_idle_frame_ms(),
        }
    }
}

/// Fixed overview pose (tilt and heading are zero by definition).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverviewConfig {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation_m: f64,
}

fn default_overview() -> OverviewConfig {
    OverviewConfig {
        longitude: -10.0,
        latitude: 20.0,
        elevation_m: 18_000_000.0,
    }
}

fn default_fly_duration_ms() -> u64 {
    3_500
}

fn default_reset_duration_ms() -> u64 {
    2_000
}

fn default_fly_tilt_deg() -> f64 {
    65.0
}

fn default_fly_elevation_m() -> f64 {
    1_200.0
}

fn default_panel_latitude_offset_deg() -> f64 {
    0.006
}

fn default_idle_step_deg() -> f64 {
    0.03
}

fn default_idle_frame_ms() -> u64 {
    33
}

/// Autoplay tour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourConfig {
    /// Seconds between tour steps
    #[serde(default = "default_step_interval_secs")]
    pub step_interval_secs: u64,
}

impl TourConfig {
    /// Step cadence as a [`Duration`].
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs(self.step_interval_secs)
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            step_interval_secs: default_step_interval_secs(),
        }
    }
}

fn default_step_interval_secs() -> u64 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "tour": { "step_interval_secs": 2 } }"#).unwrap();
        assert_eq!(config.tour.step_interval_secs, 2);
        assert_eq!(config.camera.fly_duration_ms, 3_500);
        assert_eq!(config.camera.overview.latitude, 20.0);
    }

    #[test]
    fn durations() {
        let config = AppConfig::default_config();
        assert_eq!(config.camera.fly_duration(), Duration::from_millis(3_500));
        assert_eq!(config.tour.step_interval(), Duration::from_secs(8));
        assert_eq!(config.camera.idle_frame(), Duration::from_millis(33));
    }
}
