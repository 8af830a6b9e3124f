#![forbid(unsafe_code)]

//! Select widget for selbox.
//!
//! The [`select`] module holds the whole interaction model: the option list,
//! the two selection modes, open/highlight state, and the keyboard and
//! pointer handlers. Rendering is a pure projection ([`select::SelectView`])
//! plus a plain-text renderer for hosts that just want lines of text.

pub mod select;

pub use select::{
    Multiple, OptionError, OptionList, OptionValue, Select, SelectConfig, SelectOption,
    SelectOutcome, SelectState, SelectTarget, SelectView, SelectionMode, Single,
};
