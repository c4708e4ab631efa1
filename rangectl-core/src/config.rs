//! Control configuration: variant selection and TOML-described control sets.
//!
//! A control set is stored as a TOML file listing the controls to mount,
//! each with its variant and initial attributes:
//!
//! ```toml
//! [[controls]]
//! id = "volume"
//! variant = "dual"
//!
//! [controls.attributes]
//! label = "Volume"
//! unit = "%"
//! value = "0.25"
//! handle-value = "0.75"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attributes::Attributes;
use crate::geometry::HANDLE_WIDTH_PX;

/// Errors loading a control set.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read control set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse control set TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize control set: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("duplicate control id `{0}`")]
    DuplicateId(String),
}

/// Single-channel (fill only) or dual-channel (fill + handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Single,
    #[default]
    Dual,
}

impl Variant {
    pub fn has_handle(self) -> bool {
        self == Variant::Dual
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Single => "single-channel",
            Variant::Dual => "dual-channel",
        })
    }
}

fn default_handle_width() -> f64 {
    HANDLE_WIDTH_PX
}

/// Per-control configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_handle_width")]
    pub handle_width: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::dual()
    }
}

impl ControlConfig {
    pub fn single() -> Self {
        Self {
            variant: Variant::Single,
            handle_width: HANDLE_WIDTH_PX,
        }
    }

    pub fn dual() -> Self {
        Self {
            variant: Variant::Dual,
            handle_width: HANDLE_WIDTH_PX,
        }
    }
}

/// A control to mount: identity, configuration and initial attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountSpec {
    pub id: String,
    #[serde(flatten)]
    pub config: ControlConfig,
    #[serde(default)]
    pub attributes: Attributes,
}

/// An ordered list of controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSet {
    pub controls: Vec<MountSpec>,
}

impl ControlSet {
    /// Load a control set from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a control set from a TOML string. Control ids must be unique.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let set: ControlSet = toml::from_str(content)?;
        let mut seen = std::collections::HashSet::new();
        for spec in &set.controls {
            if !seen.insert(spec.id.as_str()) {
                return Err(ConfigError::DuplicateId(spec.id.clone()));
            }
        }
        Ok(set)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Built-in set: one single-channel and one dual-channel control.
    pub fn demo() -> Self {
        Self {
            controls: vec![
                MountSpec {
                    id: "brightness".into(),
                    config: ControlConfig::single(),
                    attributes: Attributes::new()
                        .with("label", "Brightness")
                        .with("min", "0")
                        .with("max", "100")
                        .with("unit", "%")
                        .with("value", "0.6"),
                },
                MountSpec {
                    id: "temperature".into(),
                    config: ControlConfig::dual(),
                    attributes: Attributes::new()
                        .with("label", "Temperature")
                        .with("min", "-20")
                        .with("max", "40")
                        .with("unit", "°C")
                        .with("value", "0.25")
                        .with("handle-value", "0.75"),
                },
            ],
        }
    }
}
