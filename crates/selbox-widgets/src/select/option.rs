#![forbid(unsafe_code)]

//! Option model.
//!
//! An option is identified by its [`OptionValue`], never by its label or by
//! where it lives in memory. [`OptionList`] enforces that every value occurs
//! once, which is what makes value equality a sound stand-in for "the same
//! option".

use std::fmt;

/// Stable identity key of an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// Numeric key.
    Number(i64),
    /// Text key.
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    label: String,
    value: OptionValue,
}

impl SelectOption {
    /// Create an option from a display label and an identity value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Display label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identity value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &OptionValue {
        &self.value
    }
}

/// Errors raised while building an [`OptionList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// Two options share the same value, so identity would be ambiguous.
    DuplicateValue {
        /// The repeated value.
        value: OptionValue,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeat.
        second: usize,
    },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateValue {
                value,
                first,
                second,
            } => write!(
                f,
                "duplicate option value '{value}' at indices {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for OptionError {}

/// Immutable, ordered list of options with unique values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Build a list, rejecting repeated values.
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Result<Self, OptionError> {
        let options: Vec<SelectOption> = options.into_iter().collect();
        for (second, option) in options.iter().enumerate() {
            if let Some(first) = options[..second]
                .iter()
                .position(|earlier| earlier.value == option.value)
            {
                return Err(OptionError::DuplicateValue {
                    value: option.value.clone(),
                    first,
                    second,
                });
            }
        }
        Ok(Self { options })
    }

    /// Number of options.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the list has no options.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Iterate options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// Index of the option with `value`.
    #[must_use]
    pub fn position(&self, value: &OptionValue) -> Option<usize> {
        self.options.iter().position(|o| &o.value == value)
    }

    /// Option with `value`.
    #[must_use]
    pub fn find(&self, value: &OptionValue) -> Option<&SelectOption> {
        self.options.iter().find(|o| &o.value == value)
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionList {
        OptionList::new([
            SelectOption::new("first", 1),
            SelectOption::new("second", 2),
            SelectOption::new("third", 3),
        ])
        .expect("unique values")
    }

    #[test]
    fn list_preserves_order() {
        let list = sample();
        let labels: Vec<_> = list.iter().map(SelectOption::label).collect();
        assert_eq!(labels, ["first", "second", "third"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn duplicate_values_rejected() {
        let err = OptionList::new([
            SelectOption::new("a", "x"),
            SelectOption::new("b", "y"),
            SelectOption::new("c", "x"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            OptionError::DuplicateValue {
                value: OptionValue::from("x"),
                first: 0,
                second: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "duplicate option value 'x' at indices 0 and 2"
        );
    }

    #[test]
    fn same_label_different_value_is_fine() {
        let list = OptionList::new([SelectOption::new("same", 1), SelectOption::new("same", 2)]);
        assert!(list.is_ok());
    }

    #[test]
    fn number_and_text_keys_are_distinct() {
        let list = OptionList::new([SelectOption::new("n", 1), SelectOption::new("t", "1")]);
        assert!(list.is_ok());
        assert_ne!(OptionValue::from(1), OptionValue::from("1"));
    }

    #[test]
    fn empty_list_allowed() {
        let list = OptionList::new(Vec::new()).expect("empty");
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn lookup_by_value() {
        let list = sample();
        let two = OptionValue::from(2);
        assert_eq!(list.position(&two), Some(1));
        assert_eq!(list.find(&two).map(SelectOption::label), Some("second"));
        assert_eq!(list.position(&OptionValue::from(9)), None);
    }

    #[test]
    fn option_value_display() {
        assert_eq!(OptionValue::from(42).to_string(), "42");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn option_value_is_untagged_in_json() {
        let option: SelectOption =
            serde_json::from_str(r#"{"label":"first","value":1}"#).expect("parse");
        assert_eq!(option, SelectOption::new("first", 1));
        let option: SelectOption =
            serde_json::from_str(r#"{"label":"red","value":"r"}"#).expect("parse");
        assert_eq!(option.value(), &OptionValue::from("r"));
    }
}
