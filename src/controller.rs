//! Tick-driven driver state around a [`Dispatcher`].
//!
//! The controller applies [`Command`]s (pause, single step, fast mode,
//! shuffle, algorithm selection) and decides each tick whether the active
//! engine advances. It also tracks when the sequence comes to rest, either
//! after a finished sort or after a shuffle, so the driver can report the
//! values once per settle.

use crate::{
    dispatcher::Dispatcher, error::SortvisError, frame::Frame, input::Command,
    options::Options, sequence::SequenceStore,
};

/// What happened during one [`Controller::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The active engine advanced.
    pub stepped: bool,
    /// The sequence came to rest on this tick.
    pub settled_now: bool,
}

/// Pause/step/fast-mode state plus the dispatcher it drives.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controller {
    dispatcher: Dispatcher,
    paused: bool,
    step_requested: bool,
    fast_mode: bool,
    settled: bool,
    quit_requested: bool,
}

impl Controller {
    /// Running (unpaused, normal speed) controller over `seq`.
    #[must_use]
    pub fn new(seq: SequenceStore) -> Self {
        Self::with_dispatcher(Dispatcher::new(seq))
    }

    /// Wrap an existing dispatcher.
    #[must_use]
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            paused: false,
            step_requested: false,
            fast_mode: false,
            settled: false,
            quit_requested: false,
        }
    }

    /// Build from options, starting the configured algorithm if any.
    ///
    /// # Errors
    ///
    /// [`SortvisError::Config`] when the options fail validation.
    pub fn from_options(options: &Options) -> Result<Self, SortvisError> {
        let mut controller =
            Self::with_dispatcher(Dispatcher::from_options(options)?);
        controller.paused = options.playback.start_paused;
        controller.fast_mode = options.playback.fast_mode;
        if let Some(algorithm) = options.playback.algorithm {
            controller.execute(Command::Start(algorithm));
        }
        Ok(controller)
    }

    /// Apply one command.
    pub fn execute(&mut self, command: Command) {
        log::debug!("command {command:?}");
        match command {
            Command::Shuffle => {
                if self.dispatcher.shuffle() {
                    self.settled = false;
                }
            }
            Command::Start(algorithm) => {
                self.dispatcher.start(algorithm);
                self.settled = false;
            }
            Command::TogglePause => self.paused = !self.paused,
            Command::SingleStep => self.step_requested = true,
            Command::ToggleFastMode => self.fast_mode = !self.fast_mode,
            Command::Quit => self.quit_requested = true,
        }
    }

    /// Advance one frame: step the engine unless paused (a pending single
    /// step overrides the pause), then update the settled flag.
    pub fn tick(&mut self) -> TickOutcome {
        let mut stepped = false;
        if self.step_requested || !self.paused {
            self.step_requested = false;
            stepped = self.dispatcher.step(self.fast_mode);
        }
        let settled_now = !self.settled && !stepped;
        self.settled = !stepped;
        TickOutcome {
            stepped,
            settled_now,
        }
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.dispatcher, self.paused, self.fast_mode)
    }

    /// The dispatcher being driven.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Whether ticking is paused.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Whether steps run in fast mode.
    #[must_use]
    pub fn fast_mode(&self) -> bool {
        self.fast_mode
    }

    /// Whether a [`Command::Quit`] has been received.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
