//! Open/highlight state machine for the results dropdown.
//!
//! The highlight invariant: after every event the index is within
//! `[0, results.len() - 1]`, or 0 when the list is empty. Shrinking the
//! result set (further typing) must re-clamp synchronously, not only on
//! the next navigation key.

/// Dropdown visibility plus the highlighted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub is_open: bool,
    pub highlight: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Typing reopens the list and resets the highlight to the top.
    pub fn query_edited(&mut self) {
        self.is_open = true;
        self.highlight = 0;
    }

    /// Focusing the query field opens the list without touching the highlight.
    pub fn focus_gained(&mut self) {
        self.is_open = true;
    }

    /// ArrowDown. No-op when the list is closed or empty.
    pub fn move_down(&mut self, result_count: usize) {
        if !self.is_open || result_count == 0 {
            return;
        }
        self.highlight = (self.highlight + 1).min(result_count - 1);
    }

    /// ArrowUp. No-op when the list is closed.
    pub fn move_up(&mut self) {
        if !self.is_open {
            return;
        }
        self.highlight = self.highlight.saturating_sub(1);
    }

    /// Escape or outside interaction: close, keeping query text and
    /// highlight for the next open.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Re-clamp the highlight after the result set changed size.
    pub fn clamp_to(&mut self, result_count: usize) {
        self.highlight = self.highlight.min(result_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_at_top() {
        let state = SelectionState::new();
        assert!(!state.is_open);
        assert_eq!(state.highlight, 0);
    }

    #[test]
    fn test_query_edit_opens_and_resets() {
        let mut state = SelectionState {
            is_open: false,
            highlight: 3,
        };
        state.query_edited();
        assert!(state.is_open);
        assert_eq!(state.highlight, 0);
    }

    #[test]
    fn test_focus_opens_without_reset() {
        let mut state = SelectionState {
            is_open: false,
            highlight: 2,
        };
        state.focus_gained();
        assert!(state.is_open);
        assert_eq!(state.highlight, 2);
    }

    #[test]
    fn test_arrows_clamp_at_both_ends() {
        let mut state = SelectionState::new();
        state.focus_gained();
        state.move_up();
        assert_eq!(state.highlight, 0);
        // three downs past the end of a 2-row list stay at 1
        state.move_down(2);
        state.move_down(2);
        state.move_down(2);
        assert_eq!(state.highlight, 1);
    }

    #[test]
    fn test_arrows_are_noops_when_closed() {
        let mut state = SelectionState::new();
        state.move_down(5);
        assert_eq!(state.highlight, 0);
        state.highlight = 2;
        state.move_up();
        assert_eq!(state.highlight, 2);
    }

    #[test]
    fn test_move_down_on_empty_list() {
        let mut state = SelectionState::new();
        state.focus_gained();
        state.move_down(0);
        assert_eq!(state.highlight, 0);
    }

    #[test]
    fn test_close_preserves_highlight() {
        let mut state = SelectionState::new();
        state.focus_gained();
        state.move_down(4);
        state.move_down(4);
        state.close();
        assert!(!state.is_open);
        assert_eq!(state.highlight, 2);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = SelectionState {
            is_open: true,
            highlight: 7,
        };
        state.clamp_to(3);
        assert_eq!(state.highlight, 2);
        state.clamp_to(0);
        assert_eq!(state.highlight, 0);
    }
}
