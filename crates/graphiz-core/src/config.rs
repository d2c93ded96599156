//! Runtime configuration.
//!
//! Built from three layers merged in order: compiled-in defaults, a TOML
//! file (`graphiz.toml` in the working directory, or an explicit path) and
//! `GRAPHIZ_*` environment variables. Later layers override earlier ones,
//! and nested keys use a double underscore in the environment, so
//! `GRAPHIZ_PLAYBACK__STEP_SECONDS=0.5` overrides `playback.step_seconds`.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::Color;

/// Configuration file name looked up in the working directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "graphiz.toml";

/// Errors produced while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed to read or deserialize its layer.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),
    /// A loaded value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Canvas geometry and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels. Default: 800.
    pub width: u32,
    /// Canvas height in pixels. Default: 600.
    pub height: u32,
    /// Target frames per second. Default: 60.
    pub fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

/// Vertex rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexConfig {
    /// Vertex radius in pixels. Default: 30.0.
    pub radius: f32,
    /// Fill for placed vertices. Default: black.
    pub fill: Color,
    /// Fill for the ghost vertex drawn under the cursor. Default: gray.
    pub ghost_fill: Color,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            fill: Color::BLACK,
            ghost_fill: Color::GRAY,
        }
    }
}

/// Playback pacing and highlight colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Seconds between frames. Default: 1.0.
    pub step_seconds: f32,
    /// Seconds the final frame stays up before control returns. Default: 5.0.
    pub hold_seconds: f32,
    /// Highlight for the current vertex. Default: red.
    pub current: Color,
    /// Highlight for frontier vertices. Default: yellow.
    pub frontier: Color,
    /// Highlight for visited vertices. Default: green.
    pub visited: Color,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_seconds: 1.0,
            hold_seconds: 5.0,
            current: Color::RED,
            frontier: Color::YELLOW,
            visited: Color::GREEN,
        }
    }
}

/// Full configuration tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphizConfig {
    /// Canvas geometry and timing.
    pub canvas: CanvasConfig,
    /// Vertex rendering parameters.
    pub vertex: VertexConfig,
    /// Playback pacing and highlight colors.
    pub playback: PlaybackConfig,
}

impl GraphizConfig {
    /// Loads the configuration, merging defaults, a TOML file and the
    /// environment.
    ///
    /// A missing file is not an error; its layer simply contributes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a layer fails to read or
    /// deserialize, and [`ConfigError::Invalid`] when a merged value fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = path.map_or_else(|| Toml::file(DEFAULT_CONFIG_FILE), Toml::file);
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed("GRAPHIZ_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Invalid(
                "canvas dimensions must be positive".to_string(),
            ));
        }
        if self.canvas.fps == 0 {
            return Err(ConfigError::Invalid(
                "canvas.fps must be positive".to_string(),
            ));
        }
        if self.vertex.radius <= 0.0 {
            return Err(ConfigError::Invalid(
                "vertex.radius must be positive".to_string(),
            ));
        }
        if self.playback.step_seconds <= 0.0 {
            return Err(ConfigError::Invalid(
                "playback.step_seconds must be positive".to_string(),
            ));
        }
        if self.playback.hold_seconds < 0.0 {
            return Err(ConfigError::Invalid(
                "playback.hold_seconds must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
