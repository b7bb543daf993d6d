//! Run configuration with TOML preset support.
//!
//! Everything the driver collects at startup (sequence length and values,
//! playback rate, fast mode, window size, palette, key bindings) lives in
//! [`Options`]. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so partial files work.

mod colors;
mod display;
mod playback;
mod sequence;

use std::path::Path;

pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sequence::SequenceOptions;

use crate::{error::SortvisError, input::KeyBindings};

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Values to sort.
    pub sequence: SequenceOptions,
    /// Tick rate and run mode.
    pub playback: PlaybackOptions,
    /// Viewport dimensions handed to the renderer.
    pub display: DisplayOptions,
    /// Bar and background palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Key → command bindings.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failures reading `path`, or malformed TOML.
    pub fn load(path: &Path) -> Result<Self, SortvisError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// [`SortvisError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, SortvisError> {
        toml::from_str(content)
            .map_err(|e| SortvisError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failures.
    pub fn save(&self, path: &Path) -> Result<(), SortvisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortvisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(SortvisError::Io)
    }

    /// Reject configurations the core must never see.
    ///
    /// # Errors
    ///
    /// [`SortvisError::Config`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), SortvisError> {
        self.sequence.validate()?;
        self.playback.validate()?;
        self.display.validate()
    }
}
