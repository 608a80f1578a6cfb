//! Outside-interaction dismissal for the search dropdown.
//!
//! The document-level pointer-down listener routes through here. A click
//! on a result row must select, not dismiss: closing the list first would
//! swallow the click, so selection takes precedence for the same
//! interaction.

use crate::selection::SelectionState;

/// Where a document-level pointer-down landed, relative to the search control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the control's subtree but not on a result row (the input
    /// itself, padding, the icon).
    Control,
    /// On the result row at this index.
    ResultRow(usize),
    /// Anywhere else in the document.
    Outside,
}

/// Route a pointer-down. Returns the row index to select, if any. Query
/// text is never cleared here; dismissal only hides the list.
pub fn on_pointer_down(selection: &mut SelectionState, target: PointerTarget) -> Option<usize> {
    match target {
        PointerTarget::ResultRow(index) if selection.is_open => Some(index),
        // Rows do not exist while the list is closed.
        PointerTarget::ResultRow(_) => None,
        PointerTarget::Control => None,
        PointerTarget::Outside => {
            selection.close();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_closes_the_list() {
        let mut selection = SelectionState {
            is_open: true,
            highlight: 1,
        };
        assert_eq!(on_pointer_down(&mut selection, PointerTarget::Outside), None);
        assert!(!selection.is_open);
        // highlight survives for the next open
        assert_eq!(selection.highlight, 1);
    }

    #[test]
    fn test_row_click_selects_instead_of_dismissing() {
        let mut selection = SelectionState {
            is_open: true,
            highlight: 0,
        };
        assert_eq!(
            on_pointer_down(&mut selection, PointerTarget::ResultRow(2)),
            Some(2)
        );
        // dismissal did not run; the commit path closes the list itself
        assert!(selection.is_open);
    }

    #[test]
    fn test_control_click_is_inert() {
        let mut selection = SelectionState {
            is_open: true,
            highlight: 0,
        };
        assert_eq!(on_pointer_down(&mut selection, PointerTarget::Control), None);
        assert!(selection.is_open);
    }

    #[test]
    fn test_row_click_while_closed_is_ignored() {
        let mut selection = SelectionState::new();
        assert_eq!(
            on_pointer_down(&mut selection, PointerTarget::ResultRow(0)),
            None
        );
    }
}
