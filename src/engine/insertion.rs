//! Stepwise insertion sort.

use super::{slot, StepOutcome, StepStats};
use crate::sequence::SequenceStore;

/// Insertion sort resumable between calls.
///
/// `i` is the first index past the sorted prefix and `j` walks the element
/// being inserted back toward the front, one adjacent swap per call. `j`
/// reaches `-1` when the element lands at the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionEngine {
    i: isize,
    j: isize,
}

impl Default for InsertionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertionEngine {
    /// Fresh engine: the first element alone is the sorted prefix.
    #[must_use]
    pub fn new() -> Self {
        Self { i: 1, j: 0 }
    }

    /// Rewind to the start of the run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// First index past the sorted prefix.
    #[must_use]
    pub fn i(&self) -> isize {
        self.i
    }

    /// Left index of the pair under comparison.
    #[must_use]
    pub fn j(&self) -> isize {
        self.j
    }

    /// One swap (or, in fast mode, every swap needed to place the current
    /// element followed by the advance to the next one).
    pub fn step(&mut self, seq: &mut SequenceStore, fast: bool) -> StepOutcome {
        if self.i >= seq.len() as isize {
            return StepOutcome::Done;
        }

        let mut stats = StepStats::default();
        loop {
            if !self.out_of_order(seq, &mut stats) {
                self.i += 1;
                self.j = self.i - 1;
                stats.boundary = true;
                return StepOutcome::Progressed(stats);
            }

            let j = slot(self.j);
            seq.swap(j, j + 1);
            stats.swaps += 1;
            self.j -= 1;

            if !fast {
                return StepOutcome::Progressed(stats);
            }
        }
    }

    /// Whether `value[j + 1] < value[j]`. Short-circuits once `j` has run
    /// off the front so no negative index is ever compared.
    fn out_of_order(&self, seq: &SequenceStore, stats: &mut StepStats) -> bool {
        if self.j < 0 {
            return false;
        }
        let j = slot(self.j);
        stats.comparisons += 1;
        seq.get(j + 1) < seq.get(j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{tests::run_to_end, Algorithm};

    #[test]
    fn reversed_input_swaps_one_pair_per_swapping_step() {
        let mut seq = SequenceStore::new(vec![5, 4, 3, 2, 1]);
        let mut engine = InsertionEngine::new();
        let mut swapping_steps = 0;
        let mut trace = Vec::new();
        while swapping_steps < 4 {
            let before = seq.values().to_vec();
            let stats = engine.step(&mut seq, false).stats();
            if stats.swaps > 0 {
                assert_eq!(stats.swaps, 1);
                let moved =
                    before.iter().zip(seq.values()).filter(|(a, b)| a != b);
                assert_eq!(moved.count(), 2);
                swapping_steps += 1;
            } else {
                assert!(stats.boundary);
            }
            trace.push(seq.values().to_vec());
        }
        assert_eq!(
            trace,
            vec![
                vec![4, 5, 3, 2, 1],
                vec![4, 5, 3, 2, 1],
                vec![4, 3, 5, 2, 1],
                vec![3, 4, 5, 2, 1],
                vec![3, 4, 5, 2, 1],
                vec![3, 4, 2, 5, 1],
            ]
        );
    }

    #[test]
    fn advance_happens_once_element_hits_front() {
        let mut seq = SequenceStore::new(vec![2, 1, 3]);
        let mut engine = InsertionEngine::new();
        let _ = engine.step(&mut seq, false);
        assert_eq!((engine.i(), engine.j()), (1, -1));
        let outcome = engine.step(&mut seq, false);
        assert_eq!(outcome, StepOutcome::Progressed(StepStats::boundary()));
        assert_eq!((engine.i(), engine.j()), (2, 1));
    }

    #[test]
    fn fast_step_places_element_and_advances() {
        let mut seq = SequenceStore::new(vec![2, 3, 4, 1]);
        let mut engine = InsertionEngine::new();
        let _ = engine.step(&mut seq, true);
        let _ = engine.step(&mut seq, true);
        assert_eq!((engine.i(), engine.j()), (3, 2));
        let outcome = engine.step(&mut seq, true);
        assert_eq!(
            outcome,
            StepOutcome::Progressed(StepStats {
                comparisons: 3,
                swaps: 3,
                boundary: true,
            })
        );
        assert_eq!(seq.values(), &[1, 2, 3, 4]);
        assert_eq!((engine.i(), engine.j()), (4, 3));
        assert_eq!(engine.step(&mut seq, true), StepOutcome::Done);
    }

    #[test]
    fn equal_neighbours_are_not_swapped() {
        let mut seq = SequenceStore::new(vec![1, 1]);
        let mut engine = InsertionEngine::new();
        let outcome = engine.step(&mut seq, false);
        assert_eq!(
            outcome,
            StepOutcome::Progressed(StepStats {
                comparisons: 1,
                swaps: 0,
                boundary: true,
            })
        );
    }

    #[test]
    fn call_counts_match_reference() {
        assert_eq!(
            run_to_end(&[5, 1, 4, 2, 3], Algorithm::Insertion, false),
            (vec![1, 2, 3, 4, 5], 11)
        );
        assert_eq!(
            run_to_end(&[5, 1, 4, 2, 3], Algorithm::Insertion, true),
            (vec![1, 2, 3, 4, 5], 5)
        );
    }
}
