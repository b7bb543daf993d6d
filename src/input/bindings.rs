use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::command::Command;
use crate::engine::Algorithm;

/// Serializable tag for every [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Shuffle the values.
    Shuffle,
    /// Start bubble sort.
    BubbleSort,
    /// Start insertion sort.
    InsertionSort,
    /// Start quicksort.
    QuickSort,
    /// Pause or resume.
    TogglePause,
    /// Advance a single step.
    SingleStep,
    /// Toggle fast mode.
    ToggleFastMode,
    /// Exit.
    Quit,
}

impl KeyCommandTag {
    /// Convert to the corresponding [`Command`].
    #[must_use]
    pub fn to_command(self) -> Command {
        match self {
            Self::Shuffle => Command::Shuffle,
            Self::BubbleSort => Command::Start(Algorithm::Bubble),
            Self::InsertionSort => Command::Start(Algorithm::Insertion),
            Self::QuickSort => Command::Start(Algorithm::Quick),
            Self::TogglePause => Command::TogglePause,
            Self::SingleStep => Command::SingleStep,
            Self::ToggleFastMode => Command::ToggleFastMode,
            Self::Quit => Command::Quit,
        }
    }
}

/// Maps key strings to [`Command`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyS"`, `"Space"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyS".into(), KeyCommandTag::Shuffle),
            ("KeyZ".into(), KeyCommandTag::BubbleSort),
            ("KeyX".into(), KeyCommandTag::InsertionSort),
            ("KeyC".into(), KeyCommandTag::QuickSort),
            ("Space".into(), KeyCommandTag::TogglePause),
            ("KeyP".into(), KeyCommandTag::SingleStep),
            ("KeyF".into(), KeyCommandTag::ToggleFastMode),
            ("Escape".into(), KeyCommandTag::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Command> {
        self.bindings.get(key.trim()).map(|tag| tag.to_command())
    }
}
