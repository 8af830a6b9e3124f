#![forbid(unsafe_code)]

//! Open/highlight lifecycle.
//!
//! # Invariants
//!
//! - Every closed → open transition resets the highlight to 0.
//! - Navigation never moves the highlight outside `[0, option_count)`;
//!   requests that would are dropped, there is no wraparound.

/// Open flag and keyboard highlight of a select widget.
///
/// The highlight indexes the option list, not the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectState {
    open: bool,
    highlighted: usize,
}

impl SelectState {
    /// Closed, highlight at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            highlighted: 0,
        }
    }

    /// Whether the option list is shown.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted option index.
    #[inline]
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        if open {
            self.highlighted = 0;
        }
        true
    }

    /// Flip the open flag. Always a change.
    pub fn toggle_open(&mut self) -> bool {
        self.set_open(!self.open)
    }

    /// Open the list. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    /// Close the list. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// Move the highlight by `delta` if the target stays in range.
    ///
    /// Returns whether the highlight moved.
    pub fn move_highlight(&mut self, delta: isize, option_count: usize) -> bool {
        let Some(target) = self.highlighted.checked_add_signed(delta) else {
            return false;
        };
        if target >= option_count || target == self.highlighted {
            return false;
        }
        self.highlighted = target;
        true
    }

    /// Highlight `index` (pointer hover) if it is in range.
    pub fn hover(&mut self, index: usize, option_count: usize) -> bool {
        if index >= option_count || index == self.highlighted {
            return false;
        }
        self.highlighted = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_at_zero() {
        let state = SelectState::default();
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), 0);
        assert_eq!(state, SelectState::new());
    }

    #[test]
    fn opening_resets_highlight() {
        let mut state = SelectState::new();
        state.open();
        state.move_highlight(2, 5);
        assert_eq!(state.highlighted(), 2);

        state.close();
        assert_eq!(state.highlighted(), 2, "closing keeps the highlight");
        state.toggle_open();
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn reopening_while_open_does_not_reset() {
        let mut state = SelectState::new();
        state.open();
        state.move_highlight(1, 3);
        assert!(!state.open());
        assert_eq!(state.highlighted(), 1);
    }

    #[test]
    fn move_is_clamped_without_wrap() {
        let mut state = SelectState::new();
        assert!(!state.move_highlight(-1, 3));
        assert_eq!(state.highlighted(), 0);

        assert!(state.move_highlight(1, 3));
        assert!(state.move_highlight(1, 3));
        assert!(!state.move_highlight(1, 3));
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn move_with_no_options_is_noop() {
        let mut state = SelectState::new();
        assert!(!state.move_highlight(1, 0));
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn hover_out_of_range_ignored() {
        let mut state = SelectState::new();
        assert!(state.hover(2, 3));
        assert!(!state.hover(3, 3));
        assert!(!state.hover(2, 3));
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn open_close_report_changes() {
        let mut state = SelectState::new();
        assert!(!state.close());
        assert!(state.open());
        assert!(!state.open());
        assert!(state.close());
        assert!(state.toggle_open());
        assert!(state.is_open());
    }
}
