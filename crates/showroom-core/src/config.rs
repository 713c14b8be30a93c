//! Configuration loading and validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{Result, ShowroomError};
use crate::loading::LoadingSettings;
use crate::presentation::DragSettings;
use crate::responsive::ScaleThresholds;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowroomConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub responsive: ScaleThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// glTF/GLB asset path, relative to the asset root
    #[serde(default = "default_model_path")]
    pub path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> String {
    "toyota_corolla_ps1.glb".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Vertical field of view in degrees
    #[serde(default = "default_fov")]
    pub fov_degrees: f32,
    #[serde(default = "default_camera_position")]
    pub camera_position: [f32; 3],
    /// Clear color as `#rrggbb`
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_ambient_brightness")]
    pub ambient_brightness: f32,
    #[serde(default = "default_drag_speed")]
    pub drag_speed: f32,
    /// Allowed tilt of the presentation rig, radians
    #[serde(default = "default_polar_range")]
    pub polar_range: [f32; 2],
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            fov_degrees: default_fov(),
            camera_position: default_camera_position(),
            background: default_background(),
            ambient_brightness: default_ambient_brightness(),
            drag_speed: default_drag_speed(),
            polar_range: default_polar_range(),
        }
    }
}

fn default_fov() -> f32 {
    45.0
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 1.0, 5.0]
}

fn default_background() -> String {
    "#101010".to_string()
}

fn default_ambient_brightness() -> f32 {
    // Bevy ambient units; roughly an intensity of 2 in a physically based viewer
    1500.0
}

fn default_drag_speed() -> f32 {
    2.0
}

fn default_polar_range() -> [f32; 2] {
    [0.0, std::f32::consts::FRAC_PI_4]
}

impl StageConfig {
    /// Parse `background` into RGB bytes
    pub fn background_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.background)
    }

    pub fn drag_settings(&self) -> DragSettings {
        DragSettings {
            speed: self.drag_speed,
            polar_min: self.polar_range[0],
            polar_max: self.polar_range[1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_audio_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub looping: bool,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            path: default_audio_path(),
            looping: true,
            volume: default_volume(),
        }
    }
}

fn default_audio_path() -> String {
    "ambient.mp3".to_string()
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Interval between progress bar bumps
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Percent added per tick
    #[serde(default = "default_step")]
    pub step: u8,
    /// Time until the loading overlay is dismissed
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step: default_step(),
            duration_ms: default_duration_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    60
}

fn default_step() -> u8 {
    2
}

fn default_duration_ms() -> u64 {
    3200
}

impl LoadingConfig {
    pub fn settings(&self) -> LoadingSettings {
        LoadingSettings {
            tick: Duration::from_millis(self.tick_ms),
            step: self.step,
            duration: Duration::from_millis(self.duration_ms),
        }
    }
}

impl ShowroomConfig {
    /// Reject values that would stall or invert the showcase behavior
    pub fn validate(&self) -> Result<()> {
        if self.loading.tick_ms == 0 {
            return Err(invalid("loading.tick_ms must be greater than zero"));
        }
        if self.loading.step == 0 {
            return Err(invalid("loading.step must be greater than zero"));
        }
        if self.loading.duration_ms == 0 {
            return Err(invalid("loading.duration_ms must be greater than zero"));
        }

        let r = &self.responsive;
        if r.compact_below >= r.medium_below {
            return Err(invalid(format!(
                "responsive.compact_below ({}) must be below responsive.medium_below ({})",
                r.compact_below, r.medium_below
            )));
        }
        for (name, scale) in [
            ("compact_scale", r.compact_scale),
            ("medium_scale", r.medium_scale),
            ("full_scale", r.full_scale),
        ] {
            if !(scale > 0.0) {
                return Err(invalid(format!("responsive.{name} must be positive")));
            }
        }

        let [polar_min, polar_max] = self.stage.polar_range;
        if polar_min > polar_max {
            return Err(invalid("stage.polar_range must be [min, max]"));
        }
        if !(self.stage.fov_degrees > 0.0 && self.stage.fov_degrees < 180.0) {
            return Err(invalid("stage.fov_degrees must be within (0, 180)"));
        }
        self.stage.background_rgb()?;

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ShowroomError {
    ShowroomError::InvalidConfig(message.into())
}

fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(format!("color must be #rrggbb, got {value:?}")));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| invalid(format!("color must be #rrggbb, got {value:?}")))?;
    }
    Ok(rgb)
}

/// Load configuration from file, falling back to defaults when it is missing
pub fn load_config(path: &Path) -> Result<ShowroomConfig> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: ShowroomConfig = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        config
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        ShowroomConfig::default()
    };

    config.validate()?;
    Ok(config)
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&ShowroomConfig::default())?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responsive::ViewportScale;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = ShowroomConfig::default();
        config.validate().unwrap();
        assert_eq!(config.stage.background_rgb().unwrap(), [0x10, 0x10, 0x10]);
        assert_eq!(config.loading.settings(), LoadingSettings::default());
        assert_eq!(config.stage.drag_settings(), DragSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShowroomConfig::default());
    }

    #[test]
    fn test_saved_defaults_load_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("showroom.toml");
        save_default_config(&path).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config, ShowroomConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("showroom.toml");
        std::fs::write(
            &path,
            "[loading]\nduration_ms = 5000\n\n[responsive]\ncompact_below = 480.0\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.loading.duration_ms, 5000);
        assert_eq!(config.loading.tick_ms, 60);
        assert_eq!(config.responsive.compact_below, 480.0);
        assert_eq!(config.responsive.medium_below, 900.0);
        assert_eq!(config.model.path, "toyota_corolla_ps1.glb");
    }

    #[test]
    fn test_rejects_zero_tick() {
        let mut config = ShowroomConfig::default();
        config.loading.tick_ms = 0;
        assert!(matches!(config.validate(), Err(ShowroomError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_inverted_breakpoints() {
        let mut config = ShowroomConfig::default();
        config.responsive.compact_below = 1000.0;
        assert!(matches!(config.validate(), Err(ShowroomError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_background() {
        let mut config = ShowroomConfig::default();
        config.stage.background = "#10101".to_string();
        assert!(config.validate().is_err());
        config.stage.background = "#zz1010".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_signed_color_channels() {
        assert!(parse_hex_color("#+1+1+1").is_err());
        assert!(parse_hex_color("-10101").is_err());
        assert_eq!(parse_hex_color("#A0b1C2").unwrap(), [0xa0, 0xb1, 0xc2]);
        assert_eq!(parse_hex_color("101010").unwrap(), [0x10, 0x10, 0x10]);
    }

    #[test]
    fn test_model_scale_comes_from_responsive_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("showroom.toml");
        std::fs::write(
            &path,
            "[model]\npath = \"cars/coupe.glb\"\n\n[responsive]\nfull_scale = 0.3\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.model.path, "cars/coupe.glb");
        assert_eq!(config.responsive.factor(ViewportScale::Full), 0.3);
        assert_eq!(config.responsive.factor(ViewportScale::Compact), 0.12);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("showroom.toml");
        std::fs::write(&path, "[loading\n").unwrap();
        assert!(matches!(load_config(&path), Err(ShowroomError::ConfigParse(_))));
    }
}
