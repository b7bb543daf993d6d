//! Stepwise quicksort with Hoare partitioning and an explicit work stack.

use super::{slot, StepOutcome, StepStats};
use crate::sequence::{SequenceStore, Value};

/// Quicksort resumable between calls.
///
/// `left`/`right` are the partition scan pointers over `begin..=end`.
/// `pivot` is a value, picked once per partition from its middle slot.
/// Sub-ranges waiting to be partitioned sit on `pending` in place of the
/// recursive call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickEngine {
    left: isize,
    right: isize,
    begin: isize,
    end: isize,
    pivot: Value,
    pending: Vec<(isize, isize)>,
}

impl QuickEngine {
    /// Fresh engine over `seq`. The scan starts out crossed so the first
    /// call pops the whole range.
    #[must_use]
    pub fn new(seq: &SequenceStore) -> Self {
        let len = seq.len();
        Self {
            left: 1,
            right: 0,
            begin: 0,
            end: 0,
            pivot: seq.values().get(len / 2).copied().unwrap_or_default(),
            pending: vec![(0, len as isize - 1)],
        }
    }

    /// Rewind to the start of a run over `seq`.
    pub fn reset(&mut self, seq: &SequenceStore) {
        *self = Self::new(seq);
    }

    /// Left scan pointer.
    #[must_use]
    pub fn left(&self) -> isize {
        self.left
    }

    /// Right scan pointer.
    #[must_use]
    pub fn right(&self) -> isize {
        self.right
    }

    /// Bounds of the partition being scanned.
    #[must_use]
    pub fn bounds(&self) -> (isize, isize) {
        (self.begin, self.end)
    }

    /// Pivot value of the current partition.
    #[must_use]
    pub fn pivot(&self) -> Value {
        self.pivot
    }

    /// Ranges still waiting to be partitioned, top of stack last.
    #[must_use]
    pub fn pending(&self) -> &[(isize, isize)] {
        &self.pending
    }

    /// One scan micro-step (or, in fast mode, scan to the next swap or
    /// crossing). Crossed pointers instead push the two halves and pop the
    /// next partition.
    pub fn step(&mut self, seq: &mut SequenceStore, fast: bool) -> StepOutcome {
        if self.left > self.right {
            return self.next_partition(seq);
        }
        let stats = if fast {
            self.scan_to_swap(seq)
        } else {
            self.scan_once(seq)
        };
        StepOutcome::Progressed(stats)
    }

    fn next_partition(&mut self, seq: &SequenceStore) -> StepOutcome {
        if self.left < self.end {
            self.pending.push((self.left, self.end));
        }
        if self.begin < self.right {
            self.pending.push((self.begin, self.right));
        }

        let Some((begin, end)) = self.pending.pop() else {
            return StepOutcome::Done;
        };
        self.begin = begin;
        self.end = end;
        self.left = begin;
        self.right = end;
        self.pivot = seq.get(slot((begin + end) / 2));
        log::trace!(
            "partition {begin}..={end} pivot {} ({} pending)",
            self.pivot,
            self.pending.len()
        );
        StepOutcome::Progressed(StepStats::boundary())
    }

    fn scan_once(&mut self, seq: &mut SequenceStore) -> StepStats {
        let mut stats = StepStats {
            comparisons: 1,
            ..StepStats::default()
        };
        if seq.get(slot(self.left)) < self.pivot {
            self.left += 1;
            return stats;
        }
        stats.comparisons += 1;
        if seq.get(slot(self.right)) > self.pivot {
            self.right -= 1;
            return stats;
        }
        self.swap_and_close_in(seq, &mut stats);
        stats
    }

    fn scan_to_swap(&mut self, seq: &mut SequenceStore) -> StepStats {
        let mut stats = StepStats::default();
        loop {
            stats.comparisons += 1;
            if seq.get(slot(self.left)) >= self.pivot {
                break;
            }
            self.left += 1;
        }
        loop {
            stats.comparisons += 1;
            if seq.get(slot(self.right)) <= self.pivot {
                break;
            }
            self.right -= 1;
        }
        if self.left <= self.right {
            self.swap_and_close_in(seq, &mut stats);
        }
        stats
    }

    /// Swap the values under both pointers and step each inward. Values
    /// equal to the pivot stop both scans, so a self swap is possible and
    /// counted like any other.
    fn swap_and_close_in(
        &mut self,
        seq: &mut SequenceStore,
        stats: &mut StepStats,
    ) {
        seq.swap(slot(self.left), slot(self.right));
        stats.swaps += 1;
        self.left += 1;
        self.right -= 1;
    }
}
