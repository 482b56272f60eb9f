//! Demo configuration: named joystick instances plus a sample trace.
//!
//! Loading validates every control area up front, so a bad configuration
//! fails at startup rather than mid-replay.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::area::ControlArea;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub joysticks: Vec<JoystickConfig>,
    /// Trace file replayed into every joystick; overridable on the command
    /// line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// One named joystick instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JoystickConfig {
    pub name: String,
    #[serde(flatten)]
    pub area: ControlArea,
}

impl AppConfig {
    /// Parse and validate configuration from YAML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?;
        for joystick in &config.joysticks {
            joystick.area.validate().with_context(|| {
                format!("Invalid control area for joystick '{}'", joystick.name)
            })?;
        }
        Ok(config)
    }

    /// Load configuration from a file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
