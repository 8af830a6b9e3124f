#![forbid(unsafe_code)]

//! Option lists from configuration documents.
//!
//! The document is a JSON array of `{ "label": ..., "value": ... }` objects,
//! where `value` is a string or an integer:
//!
//! ```json
//! [
//!   { "label": "first", "value": 1 },
//!   { "label": "second", "value": "two" }
//! ]
//! ```

use crate::error::Result;
use selbox_widgets::select::OptionList;
use std::path::Path;

/// Parse and validate an option list from JSON text.
#[cfg(feature = "json")]
pub fn options_from_json(text: &str) -> Result<OptionList> {
    use selbox_widgets::select::SelectOption;

    let options: Vec<SelectOption> = serde_json::from_str(text)?;
    Ok(OptionList::new(options)?)
}

/// Parse and validate an option list from JSON text.
#[cfg(not(feature = "json"))]
pub fn options_from_json(_text: &str) -> Result<OptionList> {
    Err(crate::error::ConfigError::Unsupported("json").into())
}

/// Read and validate an option list from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> Result<OptionList> {
    let text = std::fs::read_to_string(path)?;
    options_from_json(&text)
}
