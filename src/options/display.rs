use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SortvisError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Viewport the renderer lays bars out in.
pub struct DisplayOptions {
    /// Width in pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Height in pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl DisplayOptions {
    pub(crate) fn validate(&self) -> Result<(), SortvisError> {
        if self.width == 0 || self.height == 0 {
            return Err(SortvisError::Config(format!(
                "display must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
