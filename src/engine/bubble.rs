//! Stepwise bubble sort.

use super::{slot, StepOutcome, StepStats};
use crate::sequence::SequenceStore;

/// Bubble sort resumable between calls.
///
/// `i` bounds the unsorted prefix and counts down from the length; `j`
/// scans that prefix. Each pass ends with `i` decremented and `j` rewound.
/// The run finishes on the call after `i` has dropped below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleEngine {
    i: isize,
    j: isize,
}

impl BubbleEngine {
    /// Fresh engine over a sequence of `len` values.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            i: len as isize,
            j: 0,
        }
    }

    /// Rewind to the first pass over `len` values.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Unsorted-prefix boundary.
    #[must_use]
    pub fn i(&self) -> isize {
        self.i
    }

    /// Scan index within the current pass.
    #[must_use]
    pub fn j(&self) -> isize {
        self.j
    }

    /// One comparison (or, in fast mode, the rest of the current pass).
    pub fn step(&mut self, seq: &mut SequenceStore, fast: bool) -> StepOutcome {
        if self.i < 0 {
            return StepOutcome::Done;
        }
        if self.j + 1 >= self.i {
            self.end_pass();
            return StepOutcome::Progressed(StepStats::boundary());
        }

        let mut stats = StepStats::default();
        loop {
            let j = slot(self.j);
            stats.comparisons += 1;
            if seq.get(j) > seq.get(j + 1) {
                seq.swap(j, j + 1);
                stats.swaps += 1;
            }
            self.j += 1;

            if !fast {
                return StepOutcome::Progressed(stats);
            }
            if self.j + 1 >= self.i {
                break;
            }
        }

        self.end_pass();
        stats.boundary = true;
        StepOutcome::Progressed(stats)
    }

    fn end_pass(&mut self) {
        self.j = 0;
        self.i -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{tests::run_to_end, Algorithm};

    #[test]
    fn first_step_compares_and_swaps_front_pair() {
        let mut seq = SequenceStore::new(vec![3, 1, 2]);
        let mut engine = BubbleEngine::new(seq.len());
        let outcome = engine.step(&mut seq, false);
        assert_eq!(
            outcome,
            StepOutcome::Progressed(StepStats {
                comparisons: 1,
                swaps: 1,
                boundary: false,
            })
        );
        assert_eq!(seq.values(), &[1, 3, 2]);
        assert_eq!((engine.i(), engine.j()), (3, 1));
    }

    #[test]
    fn full_normal_run_trace() {
        let mut seq = SequenceStore::new(vec![3, 1, 2]);
        let mut engine = BubbleEngine::new(seq.len());
        let mut cursors = Vec::new();
        while !engine.step(&mut seq, false).is_done() {
            cursors.push((engine.i(), engine.j()));
        }
        assert_eq!(
            cursors,
            vec![(3, 1), (3, 2), (2, 0), (2, 1), (1, 0), (0, 0), (-1, 0)]
        );
        assert_eq!(seq.values(), &[1, 2, 3]);
    }

    #[test]
    fn fast_step_runs_a_whole_pass() {
        let mut seq = SequenceStore::new(vec![5, 1, 4, 2, 3]);
        let mut engine = BubbleEngine::new(seq.len());
        let outcome = engine.step(&mut seq, true);
        assert_eq!(
            outcome,
            StepOutcome::Progressed(StepStats {
                comparisons: 4,
                swaps: 4,
                boundary: true,
            })
        );
        assert_eq!(seq.values(), &[1, 4, 2, 3, 5]);
        assert_eq!((engine.i(), engine.j()), (4, 0));
    }

    #[test]
    fn pass_boundary_does_not_compare() {
        let mut seq = SequenceStore::new(vec![2, 1]);
        let mut engine = BubbleEngine::new(seq.len());
        let _ = engine.step(&mut seq, false);
        assert_eq!(
            engine.step(&mut seq, false),
            StepOutcome::Progressed(StepStats::boundary())
        );
        assert_eq!(seq.values(), &[1, 2]);
    }

    #[test]
    fn reset_rewinds_cursors() {
        let mut seq = SequenceStore::new(vec![2, 1, 0]);
        let mut engine = BubbleEngine::new(seq.len());
        let _ = engine.step(&mut seq, true);
        engine.reset(seq.len());
        assert_eq!(engine, BubbleEngine::new(3));
    }

    #[test]
    fn call_counts_match_reference() {
        assert_eq!(run_to_end(&[3, 1, 2], Algorithm::Bubble, false).1, 8);
        assert_eq!(run_to_end(&[3, 1, 2], Algorithm::Bubble, true).1, 5);
        assert_eq!(
            run_to_end(&[5, 1, 4, 2, 3], Algorithm::Bubble, false),
            (vec![1, 2, 3, 4, 5], 17)
        );
    }
}
