//! Owns the sequence and the active engine and forwards `start`, `step`,
//! `reset` and `shuffle` to them.
//!
//! A finished run is observed as one `step` returning `true` (the call that
//! lands on Idle) followed by the next returning `false`.

use rand::Rng;

use crate::{
    engine::{Algorithm, EngineState, StepOutcome, StepStats},
    error::SortvisError,
    highlight::{self, Highlights},
    options::Options,
    sequence::SequenceStore,
};

/// Totals for the current (or last finished) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// `step` calls that reached an engine.
    pub ticks: u64,
    /// Value comparisons.
    pub comparisons: u64,
    /// Swaps, self swaps included.
    pub swaps: u64,
    /// Structural boundaries crossed.
    pub boundaries: u64,
}

impl RunStats {
    fn record(&mut self, step: StepStats) {
        self.ticks += 1;
        self.comparisons += u64::from(step.comparisons);
        self.swaps += u64::from(step.swaps);
        self.boundaries += u64::from(step.boundary);
    }
}

/// Selects the active engine and drives it one tick at a time.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    seq: SequenceStore,
    state: EngineState,
    stats: RunStats,
}

impl Dispatcher {
    /// Idle dispatcher over `seq`.
    #[must_use]
    pub fn new(seq: SequenceStore) -> Self {
        Self {
            seq,
            state: EngineState::Idle,
            stats: RunStats::default(),
        }
    }

    /// Build from validated options: explicit values or `0..length`,
    /// shuffled once if requested. Does not start an algorithm.
    ///
    /// # Errors
    ///
    /// [`SortvisError::Config`] when the options fail validation.
    pub fn from_options(options: &Options) -> Result<Self, SortvisError> {
        options.validate()?;
        let mut dispatcher =
            Self::new(SequenceStore::new(options.sequence.initial_values()));
        if options.sequence.shuffle_on_start {
            let _ = dispatcher.shuffle();
        }
        Ok(dispatcher)
    }

    /// Install `algorithm`'s initial state over the current values,
    /// discarding any run in progress. Values are left untouched.
    pub fn start(&mut self, algorithm: Algorithm) {
        if let Some(previous) = self.state.algorithm() {
            log::debug!(
                "{previous} sort discarded after {} ticks",
                self.stats.ticks
            );
        }
        log::debug!("starting {algorithm} sort over {} values", self.seq.len());
        self.state = EngineState::start(algorithm, &self.seq);
        self.stats = RunStats::default();
    }

    /// Drop the active engine without finishing it.
    pub fn reset(&mut self) {
        if !self.state.is_idle() {
            log::debug!("run reset");
        }
        self.state = EngineState::Idle;
    }

    /// Advance the active engine once. `false` (and no change) when idle.
    pub fn step(&mut self, fast: bool) -> bool {
        let Some(algorithm) = self.state.algorithm() else {
            return false;
        };
        match self.state.step(&mut self.seq, fast) {
            StepOutcome::Progressed(step) => {
                self.stats.record(step);
                log::trace!("{algorithm} tick {}: {step:?}", self.stats.ticks);
            }
            StepOutcome::Done => {
                self.stats.record(StepStats::default());
                let RunStats {
                    ticks,
                    comparisons,
                    swaps,
                    ..
                } = self.stats;
                log::info!(
                    "{algorithm} sort finished: {ticks} ticks, \
                     {comparisons} comparisons, {swaps} swaps"
                );
            }
        }
        true
    }

    /// Shuffle with the thread-local RNG. Refused (returns `false`) while a
    /// sort is running.
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::rng())
    }

    /// Shuffle with `rng`. Refused (returns `false`) while a sort is
    /// running.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.state.is_idle() {
            log::debug!("shuffle ignored while sorting");
            return false;
        }
        self.seq.shuffle_with(rng);
        log::debug!("shuffled {} values", self.seq.len());
        true
    }

    /// Current values.
    #[must_use]
    pub fn sequence(&self) -> &SequenceStore {
        &self.seq
    }

    /// Active engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Algorithm being run, if any.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.state.algorithm()
    }

    /// Whether no sort is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Totals since the last `start`.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Indices to draw with special colors this frame.
    #[must_use]
    pub fn highlights(&self) -> Highlights {
        highlight::highlights(&self.state, &self.seq)
    }
}
