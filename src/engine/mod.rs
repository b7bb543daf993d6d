//! Resumable step engines, one per sorting algorithm.
//!
//! Each engine carries exactly the cursors needed to resume its algorithm
//! and advances it by one primitive operation per [`EngineState::step`]
//! call (or to the next structural boundary in fast mode). The active engine
//! lives in the [`EngineState`] tagged union; dispatch is a `match` over it.

mod bubble;
mod insertion;
mod quick;

use std::{fmt, str::FromStr};

pub use bubble::BubbleEngine;
pub use insertion::InsertionEngine;
pub use quick::QuickEngine;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::SortvisError, sequence::SequenceStore};

/// Sorting algorithm selectable at `start`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent-exchange bubble sort.
    Bubble,
    /// Shift-back insertion sort.
    Insertion,
    /// Iterative Hoare-partition quicksort.
    Quick,
}

impl Algorithm {
    /// All algorithms, in key-binding order.
    pub const ALL: [Self; 3] = [Self::Bubble, Self::Insertion, Self::Quick];

    /// Lowercase name used in configs and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortvisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                SortvisError::InvalidValue(format!("unknown algorithm: {s}"))
            })
    }
}

/// Work done by a single step call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Value comparisons evaluated.
    pub comparisons: u32,
    /// Swaps performed (no-op self swaps included).
    pub swaps: u32,
    /// Whether the call crossed a structural boundary: a finished bubble
    /// pass, a placed insertion element, or a newly popped partition.
    pub boundary: bool,
}

impl StepStats {
    /// A call that only crossed a boundary.
    #[must_use]
    pub fn boundary() -> Self {
        Self {
            boundary: true,
            ..Self::default()
        }
    }
}

/// Result of advancing an engine by one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The engine advanced and can be stepped again.
    Progressed(StepStats),
    /// The engine reached its terminal condition on this call.
    Done,
}

impl StepOutcome {
    /// Whether this call finished the run.
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Stats for a progressing call; zero for `Done`.
    #[must_use]
    pub fn stats(self) -> StepStats {
        match self {
            Self::Progressed(stats) => stats,
            Self::Done => StepStats::default(),
        }
    }
}

/// The active engine, or `Idle` when no sort is running.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No algorithm active.
    #[default]
    Idle,
    /// Bubble sort in progress.
    Bubble(BubbleEngine),
    /// Insertion sort in progress.
    Insertion(InsertionEngine),
    /// Quicksort in progress.
    Quick(QuickEngine),
}

impl EngineState {
    /// Initial state of `algorithm` over `seq`.
    #[must_use]
    pub fn start(algorithm: Algorithm, seq: &SequenceStore) -> Self {
        match algorithm {
            Algorithm::Bubble => Self::Bubble(BubbleEngine::new(seq.len())),
            Algorithm::Insertion => Self::Insertion(InsertionEngine::new()),
            Algorithm::Quick => Self::Quick(QuickEngine::new(seq)),
        }
    }

    /// Algorithm of the active engine, `None` when idle.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Self::Idle => None,
            Self::Bubble(_) => Some(Algorithm::Bubble),
            Self::Insertion(_) => Some(Algorithm::Insertion),
            Self::Quick(_) => Some(Algorithm::Quick),
        }
    }

    /// Whether no engine is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Advance the active engine once. Lands on `Idle` when the engine
    /// reports `Done`.
    ///
    /// Sequences shorter than two elements finish on the first call
    /// without touching any element. Stepping `Idle` reports `Done` and
    /// changes nothing.
    pub fn step(&mut self, seq: &mut SequenceStore, fast: bool) -> StepOutcome {
        if seq.len() < 2 {
            *self = Self::Idle;
            return StepOutcome::Done;
        }
        let outcome = match self {
            Self::Idle => return StepOutcome::Done,
            Self::Bubble(engine) => engine.step(seq, fast),
            Self::Insertion(engine) => engine.step(seq, fast),
            Self::Quick(engine) => engine.step(seq, fast),
        };
        if outcome.is_done() {
            *self = Self::Idle;
        }
        outcome
    }
}

/// Slice index for a cursor the engine has already proven non-negative.
#[inline]
fn slot(cursor: isize) -> usize {
    debug_assert!(cursor >= 0, "negative cursor {cursor}");
    cursor as usize
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::sequence::Value;

    /// Step `algorithm` to completion, returning the final values and the
    /// number of calls that progressed (including the one landing on Idle).
    pub(crate) fn run_to_end(
        values: &[Value],
        algorithm: Algorithm,
        fast: bool,
    ) -> (Vec<Value>, usize) {
        let mut seq = SequenceStore::new(values.to_vec());
        let mut state = EngineState::start(algorithm, &seq);
        let mut calls = 0;
        while !state.is_idle() {
            let _ = state.step(&mut seq, fast);
            calls += 1;
            assert!(calls < 100_000, "engine did not terminate");
        }
        (seq.values().to_vec(), calls)
    }

    fn random_values(rng: &mut StdRng) -> Vec<Value> {
        let len = rng.random_range(0..40);
        (0..len).map(|_| rng.random_range(-6..=6)).collect()
    }

    fn sorted(values: &[Value]) -> Vec<Value> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn algorithm_parses_names() {
        assert_eq!("bubble".parse::<Algorithm>().ok(), Some(Algorithm::Bubble));
        assert_eq!(
            " Insertion ".parse::<Algorithm>().ok(),
            Some(Algorithm::Insertion)
        );
        assert_eq!("QUICK".parse::<Algorithm>().ok(), Some(Algorithm::Quick));
        assert!("merge".parse::<Algorithm>().is_err());
    }

    #[test]
    fn every_algorithm_sorts_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let values = random_values(&mut rng);
            for algorithm in Algorithm::ALL {
                let (normal, _) = run_to_end(&values, algorithm, false);
                assert_eq!(normal, sorted(&values), "{algorithm} {values:?}");
            }
        }
    }

    #[test]
    fn fast_and_normal_modes_agree() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let values = random_values(&mut rng);
            for algorithm in Algorithm::ALL {
                let (normal, normal_calls) =
                    run_to_end(&values, algorithm, false);
                let (fast, fast_calls) = run_to_end(&values, algorithm, true);
                assert_eq!(normal, fast, "{algorithm} {values:?}");
                assert!(fast_calls <= normal_calls);
            }
        }
    }

    #[test]
    fn permutation_holds_after_every_step() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let values = random_values(&mut rng);
            let expected = sorted(&values);
            for algorithm in Algorithm::ALL {
                let mut seq = SequenceStore::new(values.clone());
                let mut state = EngineState::start(algorithm, &seq);
                while !state.is_idle() {
                    let fast = rng.random_bool(0.3);
                    let _ = state.step(&mut seq, fast);
                    assert_eq!(sorted(seq.values()), expected);
                }
            }
        }
    }

    #[test]
    fn short_sequences_finish_on_first_step() {
        for algorithm in Algorithm::ALL {
            for values in [vec![], vec![7]] {
                let mut seq = SequenceStore::new(values.clone());
                let mut state = EngineState::start(algorithm, &seq);
                assert_eq!(state.algorithm(), Some(algorithm));
                assert_eq!(state.step(&mut seq, false), StepOutcome::Done);
                assert!(state.is_idle());
                assert_eq!(seq.values(), values.as_slice());
            }
        }
    }

    #[test]
    fn idle_step_is_noop() {
        let mut seq = SequenceStore::new(vec![3, 1, 2]);
        let mut state = EngineState::Idle;
        assert_eq!(state.step(&mut seq, true), StepOutcome::Done);
        assert_eq!(seq.values(), &[3, 1, 2]);
        assert!(state.is_idle());
    }
}
