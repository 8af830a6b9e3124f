#![forbid(unsafe_code)]

//! selbox public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the event and widget types from the internal crates, adds a
//! unified error type, option-list loading, and a [`Form`] host that owns
//! values and focus for a set of select widgets.

pub mod config;
pub mod error;
pub mod form;

// --- Core re-exports -------------------------------------------------------

pub use selbox_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use selbox_core::focus::{FocusChange, FocusHandle, FocusId, FocusRing};

// --- Widget re-exports -----------------------------------------------------

pub use selbox_widgets::select::{
    Badge, DisplayValue, Multiple, OptionError, OptionList, OptionValue, OptionView, Select,
    SelectConfig, SelectOption, SelectOutcome, SelectState, SelectTarget, SelectView,
    SelectionMode, Single, render_lines,
};

// --- Facade ----------------------------------------------------------------

pub use config::{load_options, options_from_json};
pub use error::{ConfigError, Error, Result};
pub use form::{ChangeHook, Form, Hit};

/// Prelude for day-to-day usage.
pub mod prelude {
    pub use crate::{
        Error, Event, Form, Hit, KeyCode, KeyEvent, Multiple, OptionList, OptionValue, Result,
        Select, SelectConfig, SelectOption, SelectOutcome, SelectTarget, Single,
    };

    pub use crate::{core, widgets};
}

pub use selbox_core as core;
pub use selbox_widgets as widgets;
