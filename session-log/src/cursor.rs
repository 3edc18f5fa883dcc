//! Bounded step cursor backing the timeline controls.
//!
//! The whole navigation state of the viewer is one counter constrained to
//! `[0, total)`: a guarded decrement, a guarded increment, and a direct
//! jump. Keeping it here, away from any rendering, makes the bounds logic
//! testable on its own.

/// Current selection within a fixed-length step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    total: usize,
}

impl StepCursor {
    /// Cursor over `total` steps, selecting index 0.
    ///
    /// Returns `None` for an empty sequence: nothing is selectable and the
    /// details panel stays in its placeholder state.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { index: 0, total })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// False exactly at index 0.
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// False exactly at the last index.
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    /// Guarded decrement; a no-op at the first step.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Guarded increment; a no-op at the last step.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Direct jump; out-of-range targets are rejected and leave the
    /// selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.total {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_cursor() {
        assert!(StepCursor::new(0).is_none());
    }

    #[test]
    fn test_new_cursor_selects_first_step() {
        let cursor = StepCursor::new(3).unwrap();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_prev());
        assert!(cursor.has_next());
    }

    #[test]
    fn test_single_step_disables_both_directions() {
        let cursor = StepCursor::new(1).unwrap();
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_prev_at_first_step_is_a_noop() {
        let mut cursor = StepCursor::new(3).unwrap();
        assert!(!cursor.prev());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_next_at_last_step_is_a_noop() {
        let mut cursor = StepCursor::new(2).unwrap();
        assert!(cursor.next());
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.next());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_select_jumps_to_valid_index() {
        let mut cursor = StepCursor::new(5).unwrap();
        assert!(cursor.select(4));
        assert_eq!(cursor.index(), 4);
        assert!(cursor.has_prev());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_select_rejects_out_of_range_index() {
        let mut cursor = StepCursor::new(5).unwrap();
        cursor.select(2);
        assert!(!cursor.select(5));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_reselecting_current_index_is_stable() {
        let mut cursor = StepCursor::new(3).unwrap();
        cursor.select(1);
        let before = cursor;
        assert!(cursor.select(1));
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_walk_across_full_range() {
        let mut cursor = StepCursor::new(3).unwrap();
        assert!(cursor.next());
        assert!(cursor.next());
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.has_next());
        assert!(cursor.prev());
        assert!(cursor.prev());
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_prev());
    }
}
