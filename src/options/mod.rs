//! Centralized explainer options with TOML preset support.
//!
//! All tweakable settings (animation timing, camera, effects, display,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! deployment can ship presets (for example a reduced-effects preset for
//! low-power devices).

mod animation;
mod camera;
mod display;
mod effects;
mod keybindings;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use effects::EffectOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NitrosoError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Step-transition timing.
    pub animation: AnimationOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Particle and glow parameters.
    pub effects: EffectOptions,
    /// Geometry and frame-loop toggles.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NitrosoError> {
        toml::from_str(content)
            .map_err(|e| NitrosoError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NitrosoError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NitrosoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NitrosoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(NitrosoError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
