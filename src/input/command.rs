//! The controller's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a
//! scripted sequence or a programmatic call, is a [`Command`] passed to
//! [`Controller::execute`](crate::controller::Controller::execute).

use crate::engine::Algorithm;

/// A discrete operation the controller can perform.
///
/// ```
/// # use sortvis::{controller::Controller, engine::Algorithm, input::Command};
/// let mut controller = Controller::new(vec![3, 1, 2].into());
/// controller.execute(Command::Start(Algorithm::Bubble));
/// controller.execute(Command::TogglePause);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shuffle the values. Ignored while a sort is running.
    Shuffle,
    /// Start `algorithm`, discarding any run in progress.
    Start(Algorithm),
    /// Stop or resume ticking.
    TogglePause,
    /// Advance exactly one step on the next tick, even while paused.
    SingleStep,
    /// Switch between one-operation and fast-forward steps.
    ToggleFastMode,
    /// Ask the driver to exit.
    Quit,
}
