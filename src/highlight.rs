//! Maps the active engine's cursors to highlighted bar indices.
//!
//! The quicksort pivot is located by value: the first index holding the
//! pivot value is highlighted. With duplicate values this may not be the
//! slot the pivot was read from.

use rustc_hash::FxHashMap;

use crate::{engine::EngineState, sequence::SequenceStore};

/// Rendering role of a highlighted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Main cursor (`i` or `left`).
    Primary,
    /// Secondary cursor (`j`, `j + 1` or `right`).
    Secondary,
    /// Quicksort pivot value.
    Pivot,
}

/// Index → role mapping for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    roles: FxHashMap<usize, Role>,
}

impl Highlights {
    /// Role of `index`, if highlighted.
    #[must_use]
    pub fn role(&self, index: usize) -> Option<Role> {
        self.roles.get(&index).copied()
    }

    /// Number of highlighted indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Highlighted `(index, role)` pairs sorted by index.
    #[must_use]
    pub fn sorted(&self) -> Vec<(usize, Role)> {
        let mut pairs: Vec<_> =
            self.roles.iter().map(|(&i, &r)| (i, r)).collect();
        pairs.sort_unstable_by_key(|&(i, _)| i);
        pairs
    }

    /// Assign `role` to `cursor` when it names a slot of a sequence of
    /// `len` values. Later assignments win.
    fn mark(&mut self, cursor: isize, len: usize, role: Role) {
        let Ok(index) = usize::try_from(cursor) else {
            return;
        };
        if index < len {
            let _ = self.roles.insert(index, role);
        }
    }
}

/// Highlights for `state` over the current contents of `seq`.
#[must_use]
pub fn highlights(state: &EngineState, seq: &SequenceStore) -> Highlights {
    let len = seq.len();
    let mut out = Highlights::default();
    match state {
        EngineState::Idle => {}
        EngineState::Bubble(engine) => {
            out.mark(engine.i(), len, Role::Primary);
            out.mark(engine.j(), len, Role::Secondary);
        }
        EngineState::Insertion(engine) => {
            out.mark(engine.i(), len, Role::Primary);
            out.mark(engine.j() + 1, len, Role::Secondary);
        }
        EngineState::Quick(engine) => {
            out.mark(engine.left(), len, Role::Primary);
            out.mark(engine.right(), len, Role::Secondary);
            if let Some(index) = seq.position_of(engine.pivot()) {
                out.mark(index as isize, len, Role::Pivot);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Algorithm;

    #[test]
    fn idle_has_no_highlights() {
        let seq = SequenceStore::new(vec![1, 2, 3]);
        assert!(highlights(&EngineState::Idle, &seq).is_empty());
    }

    #[test]
    fn bubble_marks_i_and_j() {
        let mut seq = SequenceStore::new(vec![3, 1, 2]);
        let mut state = EngineState::start(Algorithm::Bubble, &seq);
        // i == len is off the end and not drawn
        assert_eq!(
            highlights(&state, &seq).sorted(),
            vec![(0, Role::Secondary)]
        );
        for _ in 0..3 {
            let _ = state.step(&mut seq, false);
        }
        // i = 2, j = 0
        assert_eq!(
            highlights(&state, &seq).sorted(),
            vec![(0, Role::Secondary), (2, Role::Primary)]
        );
    }

    #[test]
    fn insertion_marks_i_and_j_plus_one() {
        let mut seq = SequenceStore::new(vec![1, 2, 3]);
        let mut state = EngineState::start(Algorithm::Insertion, &seq);
        // i = 1, j + 1 = 1: the later secondary role wins
        assert_eq!(
            highlights(&state, &seq).sorted(),
            vec![(1, Role::Secondary)]
        );
        let _ = state.step(&mut seq, false);
        // i = 2, j = 1
        assert_eq!(
            highlights(&state, &seq).sorted(),
            vec![(2, Role::Secondary)]
        );
    }

    #[test]
    fn quick_marks_pointers_and_first_pivot_occurrence() {
        let mut seq = SequenceStore::new(vec![4, 2, 9, 2, 4]);
        let mut state = EngineState::start(Algorithm::Quick, &seq);
        let _ = state.step(&mut seq, false);
        // left = 0, right = 4, pivot value 9 at index 2
        let marks = highlights(&state, &seq);
        assert_eq!(marks.role(0), Some(Role::Primary));
        assert_eq!(marks.role(4), Some(Role::Secondary));
        assert_eq!(marks.role(2), Some(Role::Pivot));
        assert_eq!(marks.len(), 3);
    }

    #[test]
    fn quick_pivot_found_by_value_not_slot() {
        let mut seq = SequenceStore::new(vec![5, 1, 7, 1, 6]);
        let mut state = EngineState::start(Algorithm::Quick, &seq);
        let _ = state.step(&mut seq, false);
        let _ = state.step(&mut seq, false);
        // pivot read from slot 2 (value 7); left moved to 1
        let EngineState::Quick(engine) = &state else {
            unreachable!("quick engine expected");
        };
        assert_eq!(engine.pivot(), 7);
        assert_eq!(highlights(&state, &seq).role(2), Some(Role::Pivot));

        let mut dup = SequenceStore::new(vec![3, 8, 3, 9]);
        let mut state = EngineState::start(Algorithm::Quick, &dup);
        let _ = state.step(&mut dup, false);
        // pivot value 8 sits at slot 1 only
        assert_eq!(highlights(&state, &dup).role(1), Some(Role::Pivot));
        for _ in 0..4 {
            let _ = state.step(&mut dup, false);
        }
        // now partitioning 0..=1 = [3, 3] around 3: the pivot role overrides
        // the left pointer at the first 3
        let marks = highlights(&state, &dup);
        assert_eq!(marks.role(0), Some(Role::Pivot));
        assert_eq!(marks.role(1), Some(Role::Secondary));
        assert_eq!(marks.len(), 2);
    }

    #[test]
    fn negative_cursor_is_skipped() {
        let mut seq = SequenceStore::new(vec![1, 2]);
        let mut state = EngineState::start(Algorithm::Quick, &seq);
        for _ in 0..3 {
            let _ = state.step(&mut seq, false);
        }
        let EngineState::Quick(engine) = &state else {
            unreachable!("quick engine expected");
        };
        assert_eq!(engine.right(), -1);
        let marks = highlights(&state, &seq);
        assert!(marks.sorted().iter().all(|&(i, _)| i < seq.len()));
    }
}
