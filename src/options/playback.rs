use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{engine::Algorithm, error::SortvisError};

/// Tick pacing and run mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Target ticks per second when not in fast mode.
    #[schemars(title = "FPS", range(min = 1, max = 1000))]
    pub fps: u32,
    /// Run to structural boundaries each tick, without frame pacing.
    #[schemars(title = "Fast Mode")]
    pub fast_mode: bool,
    /// Begin paused; single-step still advances.
    #[schemars(title = "Start Paused")]
    pub start_paused: bool,
    /// Algorithm to start right away.
    #[schemars(title = "Algorithm")]
    pub algorithm: Option<Algorithm>,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            fast_mode: false,
            start_paused: false,
            algorithm: None,
        }
    }
}

impl PlaybackOptions {
    pub(crate) fn validate(&self) -> Result<(), SortvisError> {
        if self.fps == 0 {
            return Err(SortvisError::Config("fps must be positive".to_owned()));
        }
        Ok(())
    }
}
