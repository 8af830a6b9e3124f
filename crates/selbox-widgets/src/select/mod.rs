#![forbid(unsafe_code)]

//! Select widget.
//!
//! A controlled single- or multiple-choice select box. The widget owns only
//! its open flag, keyboard highlight, and focus flag. The selection itself
//! belongs to the caller: every handler receives the current value by
//! reference and answers with a [`SelectOutcome`], which may carry a proposed
//! next value. The widget never applies a proposal; the caller decides and
//! passes the (possibly unchanged) value back on the next call.
//!
//! # Keyboard
//!
//! Keys are handled only when the event targets the container itself and the
//! widget owns focus.
//!
//! | Key           | Closed                  | Open                              |
//! |---------------|-------------------------|-----------------------------------|
//! | Enter / Space | open, highlight 0       | select highlighted option, close  |
//! | Up / Down     | open, highlight 0       | move highlight, clamped           |
//! | Escape        | nothing                 | close                             |
//!
//! # Pointer
//!
//! Each click is delivered to exactly one [`SelectTarget`]. The clear button,
//! badges, and options handle their own clicks; they never toggle the
//! container.
//!
//! # Example
//!
//! ```
//! use selbox_core::event::{KeyCode, KeyEvent};
//! use selbox_widgets::select::{
//!     OptionList, OptionValue, Select, SelectOption, SelectOutcome, SelectTarget, Single,
//! };
//!
//! let options = OptionList::new([
//!     SelectOption::new("first", 1),
//!     SelectOption::new("second", 2),
//! ])
//! .unwrap();
//! let mut select = Select::<Single>::new(options);
//! let value = Some(OptionValue::from(1));
//!
//! let _ = select.handle_focus(true);
//! let enter = KeyEvent::new(KeyCode::Enter);
//! let down = KeyEvent::new(KeyCode::Down);
//! let _ = select.handle_key(&enter, &SelectTarget::Container, &value);
//! let _ = select.handle_key(&down, &SelectTarget::Container, &value);
//! let outcome = select.handle_key(&enter, &SelectTarget::Container, &value);
//! assert_eq!(outcome, SelectOutcome::Proposed(Some(OptionValue::from(2))));
//! assert!(!select.is_open());
//! ```

pub mod mode;
pub mod option;
pub mod render;
pub mod state;
pub mod view;

pub use mode::{Multiple, SelectionMode, Single};
pub use option::{OptionError, OptionList, OptionValue, SelectOption};
pub use render::render_lines;
pub use state::SelectState;
pub use view::{Badge, DisplayValue, OptionView, SelectView};

use selbox_core::event::{Event, KeyCode, KeyEvent, MouseEventKind};
use std::marker::PhantomData;

/// Construction-time behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectConfig {
    close_on_select: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            close_on_select: true,
        }
    }
}

impl SelectConfig {
    /// Default configuration: the list closes after every pick.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a multiple-choice list closes after a pointer pick or badge
    /// removal.
    ///
    /// Single-choice lists always close, and so does Enter / Space on an open
    /// list.
    #[must_use]
    pub const fn close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Current close-on-select policy.
    #[must_use]
    pub const fn closes_on_select(&self) -> bool {
        self.close_on_select
    }
}

/// Part of the widget an input event was delivered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectTarget {
    /// The focusable container (the closed box itself).
    Container,
    /// An entry in the open list, by index.
    Option(usize),
    /// The remove control of a selected badge (multiple mode).
    Badge(OptionValue),
    /// The clear-all button.
    ClearButton,
}

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a proposal is lost unless the caller inspects the outcome"]
pub enum SelectOutcome<V> {
    /// Nothing happened.
    Ignored,
    /// Open, highlight, or focus state changed. No proposal.
    StateChanged,
    /// The user asked for this selection. The widget has not applied it.
    Proposed(V),
}

impl<V> SelectOutcome<V> {
    fn from_change(changed: bool) -> Self {
        if changed {
            Self::StateChanged
        } else {
            Self::Ignored
        }
    }

    /// Whether the event had no effect at all.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Borrow the proposal, if any.
    #[must_use]
    pub const fn as_proposal(&self) -> Option<&V> {
        match self {
            Self::Proposed(value) => Some(value),
            _ => None,
        }
    }

    /// Take the proposal, if any.
    #[must_use]
    pub fn into_proposal(self) -> Option<V> {
        match self {
            Self::Proposed(value) => Some(value),
            _ => None,
        }
    }
}

/// A controlled select box over a fixed [`OptionList`].
#[derive(Debug, Clone)]
pub struct Select<M: SelectionMode> {
    options: OptionList,
    config: SelectConfig,
    state: SelectState,
    focused: bool,
    _mode: PhantomData<M>,
}

impl<M: SelectionMode> Select<M> {
    /// Create a closed, unfocused widget.
    #[must_use]
    pub fn new(options: OptionList) -> Self {
        Self {
            options,
            config: SelectConfig::default(),
            state: SelectState::new(),
            focused: false,
            _mode: PhantomData,
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// The option list.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn settings(&self) -> SelectConfig {
        self.config
    }

    /// Open/highlight state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> SelectState {
        self.state
    }

    /// Whether the option list is shown.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Highlighted option index.
    #[inline]
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.state.highlighted()
    }

    /// Whether the container owns keyboard focus.
    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether `option` is part of `value`.
    #[must_use]
    pub fn is_selected(&self, option: &SelectOption, value: &M::Value) -> bool {
        M::is_selected(value, option.value())
    }

    /// Flip the open flag.
    pub fn toggle_open(&mut self) -> SelectOutcome<M::Value> {
        let changed = self.state.toggle_open();
        #[cfg(feature = "tracing")]
        self.log_state("toggle");
        SelectOutcome::from_change(changed)
    }

    /// Force the list closed.
    pub fn close(&mut self) -> SelectOutcome<M::Value> {
        let changed = self.state.close();
        #[cfg(feature = "tracing")]
        if changed {
            self.log_state("close");
        }
        SelectOutcome::from_change(changed)
    }

    /// Pick the option at `index`.
    ///
    /// Single mode proposes the option unless it is already the value, and
    /// always closes. Multiple mode proposes the value with the option
    /// toggled, and closes when the config says so (keyboard commits close
    /// regardless). Out-of-range indices are
    /// ignored.
    pub fn select_option(&mut self, index: usize, value: &M::Value) -> SelectOutcome<M::Value> {
        let Some(option) = self.options.get(index) else {
            return SelectOutcome::Ignored;
        };
        let proposal = M::propose_select(value, option.value());
        self.finish_pick(proposal, "select")
    }

    /// Propose the empty selection, whatever the current value is.
    ///
    /// Open state is left alone.
    pub fn clear_selection(&self) -> SelectOutcome<M::Value> {
        let cleared = M::cleared();
        #[cfg(feature = "tracing")]
        self.log_proposal("clear", &cleared);
        SelectOutcome::Proposed(cleared)
    }

    /// Remove `key` through its badge. Multiple mode only.
    ///
    /// Follows the same path as picking an already-selected option. Removing
    /// a key that is not selected proposes nothing.
    pub fn remove_badge(&mut self, key: &OptionValue, value: &M::Value) -> SelectOutcome<M::Value> {
        if !M::MULTIPLE {
            return SelectOutcome::Ignored;
        }
        let proposal = M::propose_remove(value, key);
        self.finish_pick(proposal, "remove_badge")
    }

    fn finish_pick(
        &mut self,
        proposal: Option<M::Value>,
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))] action: &'static str,
    ) -> SelectOutcome<M::Value> {
        let closed = if !M::MULTIPLE || self.config.close_on_select {
            self.state.close()
        } else {
            false
        };
        match proposal {
            Some(next) => {
                #[cfg(feature = "tracing")]
                self.log_proposal(action, &next);
                SelectOutcome::Proposed(next)
            }
            None => {
                #[cfg(feature = "tracing")]
                self.log_state(action);
                SelectOutcome::from_change(closed)
            }
        }
    }

    /// Pointer click on `target`.
    pub fn handle_click(
        &mut self,
        target: &SelectTarget,
        value: &M::Value,
    ) -> SelectOutcome<M::Value> {
        match target {
            SelectTarget::Container => self.toggle_open(),
            SelectTarget::Option(index) => self.select_option(*index, value),
            SelectTarget::Badge(key) => self.remove_badge(key, value),
            SelectTarget::ClearButton => self.clear_selection(),
        }
    }

    /// Pointer entered the option at `index`.
    pub fn handle_hover(&mut self, index: usize) -> SelectOutcome<M::Value> {
        SelectOutcome::from_change(self.state.hover(index, self.options.len()))
    }

    /// Focus gained (`true`) or lost (`false`). Losing focus closes the list.
    pub fn handle_focus(&mut self, gained: bool) -> SelectOutcome<M::Value> {
        let mut changed = self.focused != gained;
        self.focused = gained;
        if !gained {
            changed |= self.state.close();
        }
        #[cfg(feature = "tracing")]
        if changed {
            self.log_state(if gained { "focus" } else { "blur" });
        }
        SelectOutcome::from_change(changed)
    }

    /// Key-down while the container may own focus.
    ///
    /// Events whose target is not the container, events arriving while the
    /// widget is unfocused, key releases, and unmapped keys are ignored.
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        target: &SelectTarget,
        value: &M::Value,
    ) -> SelectOutcome<M::Value> {
        if !key.is_down() || *target != SelectTarget::Container || !self.focused {
            return SelectOutcome::Ignored;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.state.is_open() {
                    return self.open_from_keyboard();
                }
                let index = self.state.highlighted();
                if index >= self.options.len() {
                    return self.close();
                }
                // Committing from the keyboard always closes, whatever the
                // pointer close policy says.
                let picked = self.select_option(index, value);
                let _ = self.close();
                match picked {
                    SelectOutcome::Proposed(next) => SelectOutcome::Proposed(next),
                    _ => SelectOutcome::StateChanged,
                }
            }
            KeyCode::Up | KeyCode::Down => {
                if !self.state.is_open() {
                    return self.open_from_keyboard();
                }
                let delta = if key.code == KeyCode::Down { 1 } else { -1 };
                let moved = self.state.move_highlight(delta, self.options.len());
                #[cfg(feature = "tracing")]
                if moved {
                    self.log_state("navigate");
                }
                SelectOutcome::from_change(moved)
            }
            KeyCode::Escape => self.close(),
            _ => SelectOutcome::Ignored,
        }
    }

    fn open_from_keyboard(&mut self) -> SelectOutcome<M::Value> {
        let opened = self.state.open();
        #[cfg(feature = "tracing")]
        self.log_state("open");
        SelectOutcome::from_change(opened)
    }

    /// Dispatch a raw event delivered to `target`.
    ///
    /// Left clicks go to [`handle_click`](Self::handle_click), pointer moves
    /// over an option to [`handle_hover`](Self::handle_hover).
    pub fn handle_event(
        &mut self,
        event: &Event,
        target: &SelectTarget,
        value: &M::Value,
    ) -> SelectOutcome<M::Value> {
        match event {
            Event::Key(key) => self.handle_key(key, target, value),
            Event::Mouse(mouse) if mouse.is_left_click() => self.handle_click(target, value),
            Event::Mouse(mouse) => match (mouse.kind, target) {
                (MouseEventKind::Moved, SelectTarget::Option(index)) => self.handle_hover(*index),
                _ => SelectOutcome::Ignored,
            },
            Event::Focus(gained) => self.handle_focus(*gained),
        }
    }

    /// Project the widget for rendering against the caller's current value.
    #[must_use]
    pub fn view(&self, value: &M::Value) -> SelectView {
        SelectView::build::<M>(&self.options, self.state, self.focused, value)
    }

    #[cfg(feature = "tracing")]
    fn log_state(&self, action: &'static str) {
        tracing::debug!(
            message = "select.state",
            action,
            open = self.state.is_open(),
            highlighted = self.state.highlighted(),
            focused = self.focused,
            multiple = M::MULTIPLE
        );
    }

    #[cfg(feature = "tracing")]
    fn log_proposal(&self, action: &'static str, proposal: &M::Value) {
        tracing::debug!(
            message = "select.proposal",
            action,
            proposal = ?proposal,
            open = self.state.is_open(),
            multiple = M::MULTIPLE
        );
    }
}
