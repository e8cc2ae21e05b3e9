use std::path::Path;

use framecore_common::DisplayConfig;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating an engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported dimension count {0} (expected 2 or 3)")]
    InvalidDimensions(u8),
    #[error("invalid display size {width}x{height}")]
    InvalidDisplay { width: u32, height: u32 },
}

/// Camera tuning shared by both camera kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub speed: f32,
    /// Free-look degrees per pixel of mouse travel (3D only).
    pub sensitivity: f64,
    /// Per-frame smoothing fraction at 60 Hz (2D only).
    pub smooth_speed: f32,
    pub start_position: [f32; 3],
    /// Fixed seed for shake jitter. Entropy-seeded when absent.
    pub shake_seed: Option<u64>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            speed: framecore_camera::DEFAULT_SPEED,
            sensitivity: framecore_camera::DEFAULT_SENSITIVITY,
            smooth_speed: framecore_camera::DEFAULT_SMOOTH_SPEED,
            start_position: [0.0, 0.0, 0.0],
            shake_seed: None,
        }
    }
}

/// Engine configuration, loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// 2 selects the side-scrolling camera, 3 the free-look camera.
    pub dimensions: u8,
    pub show_fps: bool,
    /// Collect collider bounds every frame for debug line drawing.
    pub collision_lines: bool,
    /// Apply the camera's default key/mouse controls each frame.
    pub default_controls: bool,
    /// Global copy render distance in world units.
    pub render_distance: f32,
    pub camera: CameraSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            dimensions: 3,
            show_fps: false,
            collision_lines: false,
            default_controls: true,
            render_distance: 500.0,
            camera: CameraSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.dimensions, 2 | 3) {
            return Err(ConfigError::InvalidDimensions(self.dimensions));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::InvalidDisplay {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }

    pub fn display(&self) -> DisplayConfig {
        DisplayConfig::new(self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!((config.screen_width, config.screen_height), (800, 600));
        assert_eq!(config.dimensions, 3);
        assert_eq!(config.camera.speed, 0.05);
        assert_eq!(config.camera.sensitivity, 0.2);
        assert_eq!(config.render_distance, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = EngineConfig::from_yaml("dimensions: 2\nshow_fps: true\ncamera:\n  speed: 0.5\n").unwrap();
        assert_eq!(config.dimensions, 2);
        assert!(config.show_fps);
        assert_eq!(config.camera.speed, 0.5);
        assert_eq!(config.camera.smooth_speed, 0.1);
        assert_eq!(config.screen_width, 800);
    }

    #[test]
    fn json_config() {
        let config =
            EngineConfig::from_json(r#"{"screen_width": 1024, "screen_height": 768}"#).unwrap();
        assert_eq!(config.display(), DisplayConfig::new(1024, 768));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = EngineConfig::from_yaml("dimensions: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions(4)));
    }

    #[test]
    fn rejects_zero_display() {
        let err = EngineConfig::from_json(r#"{"screen_height": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDisplay { width: 800, height: 0 }));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = EngineConfig::from_yaml("dimensions: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut config = EngineConfig::default();
        config.dimensions = 2;
        config.camera.shake_seed = Some(42);
        config.save(tmp.path()).unwrap();

        let loaded = EngineConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
