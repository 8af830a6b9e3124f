#![forbid(unsafe_code)]

//! Selection modes.
//!
//! The mode is a type parameter of [`Select`](super::Select), so the shape of
//! the caller's value is fixed at compile time: a single-mode widget can only
//! ever be handed an `Option<OptionValue>` and a multiple-mode widget a
//! `Vec<OptionValue>`.
//!
//! Every function here is pure. They compute proposals from the current value
//! and never touch widget state.

use super::option::OptionValue;
use std::fmt::Debug;

/// Selection discipline of a widget.
pub trait SelectionMode {
    /// Caller-owned selection shape.
    type Value: Clone + Debug + Default + PartialEq;

    /// `true` for multiple-choice widgets.
    const MULTIPLE: bool;

    /// Whether `key` is part of `value`.
    fn is_selected(value: &Self::Value, key: &OptionValue) -> bool;

    /// Proposed next value after the user picks `key`.
    ///
    /// `None` means there is nothing to propose.
    fn propose_select(value: &Self::Value, key: &OptionValue) -> Option<Self::Value>;

    /// Proposed next value after the user removes `key`.
    ///
    /// `None` when `key` is not selected.
    fn propose_remove(value: &Self::Value, key: &OptionValue) -> Option<Self::Value>;

    /// The empty selection.
    fn cleared() -> Self::Value {
        Self::Value::default()
    }

    /// Selected keys in value order.
    fn selected_keys(value: &Self::Value) -> Vec<&OptionValue>;
}

/// Single-choice mode: zero or one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Single;

/// Multiple-choice mode: an ordered set of options, in pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Multiple;

impl SelectionMode for Single {
    type Value = Option<OptionValue>;

    const MULTIPLE: bool = false;

    fn is_selected(value: &Self::Value, key: &OptionValue) -> bool {
        value.as_ref() == Some(key)
    }

    fn propose_select(value: &Self::Value, key: &OptionValue) -> Option<Self::Value> {
        if Self::is_selected(value, key) {
            None
        } else {
            Some(Some(key.clone()))
        }
    }

    fn propose_remove(value: &Self::Value, key: &OptionValue) -> Option<Self::Value> {
        Self::is_selected(value, key).then_some(None)
    }

    fn selected_keys(value: &Self::Value) -> Vec<&OptionValue> {
        value.iter().collect()
    }
}

impl SelectionMode for Multiple {
    type Value = Vec<OptionValue>;

    const MULTIPLE: bool = true;

    fn is_selected(value: &Self::Value, key: &OptionValue) -> bool {
        value.contains(key)
    }

    fn propose_select(value: &Self::Value, key: &OptionValue) -> Option<Self::Value> {
        if let Some(removed) = Self::propose_remove(value, key) {
            return Some(removed);
        }
        let mut next = Vec::with_capacity(value.len() + 1);
        next.extend(value.iter().cloned());
        next.push(key.clone());
        Some(next)
    }

    fn propose_remove(value: &Self::Value, key: &OptionValue) -> Option<Self::Value> {
        if !Self::is_selected(value, key) {
            return None;
        }
        Some(value.iter().filter(|v| *v != key).cloned().collect())
    }

    fn selected_keys(value: &Self::Value) -> Vec<&OptionValue> {
        value.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: i64) -> OptionValue {
        OptionValue::from(n)
    }

    #[test]
    fn single_select_new_option_proposes_it() {
        assert_eq!(Single::propose_select(&None, &key(1)), Some(Some(key(1))));
        assert_eq!(
            Single::propose_select(&Some(key(1)), &key(2)),
            Some(Some(key(2)))
        );
    }

    #[test]
    fn single_select_current_option_proposes_nothing() {
        assert_eq!(Single::propose_select(&Some(key(1)), &key(1)), None);
    }

    #[test]
    fn single_remove_only_when_selected() {
        assert_eq!(Single::propose_remove(&Some(key(1)), &key(1)), Some(None));
        assert_eq!(Single::propose_remove(&Some(key(1)), &key(2)), None);
        assert_eq!(Single::propose_remove(&None, &key(1)), None);
    }

    #[test]
    fn multiple_select_toggles_membership() {
        let value = vec![key(1)];
        assert_eq!(
            Multiple::propose_select(&value, &key(2)),
            Some(vec![key(1), key(2)])
        );
        assert_eq!(Multiple::propose_select(&value, &key(1)), Some(vec![]));
    }

    #[test]
    fn multiple_remove_keeps_order_of_rest() {
        let value = vec![key(3), key(1), key(2)];
        assert_eq!(
            Multiple::propose_remove(&value, &key(1)),
            Some(vec![key(3), key(2)])
        );
        assert_eq!(Multiple::propose_remove(&value, &key(9)), None);
    }

    #[test]
    fn cleared_is_empty() {
        assert_eq!(Single::cleared(), None);
        assert!(Multiple::cleared().is_empty());
    }

    #[test]
    fn selected_keys_follow_value_order() {
        let value = vec![key(2), key(1)];
        assert_eq!(Multiple::selected_keys(&value), vec![&key(2), &key(1)]);
        assert_eq!(Single::selected_keys(&Some(key(5))), vec![&key(5)]);
        assert!(Single::selected_keys(&None).is_empty());
    }
}
