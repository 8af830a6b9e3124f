#![forbid(unsafe_code)]

//! Render projection.
//!
//! [`SelectView`] is everything a presentation layer needs to draw the widget,
//! computed from the widget state and the caller's current value. It owns its
//! strings so it can outlive both.

use super::mode::SelectionMode;
use super::option::{OptionList, OptionValue};
use super::state::SelectState;

/// One row of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    /// Display label.
    pub label: String,
    /// Identity value.
    pub value: OptionValue,
    /// Part of the current selection.
    pub selected: bool,
    /// Under the keyboard/pointer cursor.
    pub highlighted: bool,
}

/// A removable chip for one selected option (multiple mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Display label.
    pub label: String,
    /// Identity value, used as the remove target.
    pub value: OptionValue,
}

/// What the closed box shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Label of the single selection, if any.
    Single(Option<String>),
    /// Badges in selection order.
    Badges(Vec<Badge>),
}

/// Snapshot of a select widget for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Whether the option list is shown.
    pub open: bool,
    /// Whether the container owns focus.
    pub focused: bool,
    /// Every option, in list order.
    pub options: Vec<OptionView>,
    /// Current display value.
    pub display: DisplayValue,
}

impl SelectView {
    pub(crate) fn build<M: SelectionMode>(
        options: &OptionList,
        state: SelectState,
        focused: bool,
        value: &M::Value,
    ) -> Self {
        let rows = options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                label: option.label().to_owned(),
                value: option.value().clone(),
                selected: M::is_selected(value, option.value()),
                highlighted: index == state.highlighted(),
            })
            .collect();

        // Keys the caller holds that are not in the list have nothing to show.
        let mut labelled = M::selected_keys(value)
            .into_iter()
            .filter_map(|key| options.find(key));
        let display = if M::MULTIPLE {
            DisplayValue::Badges(
                labelled
                    .map(|option| Badge {
                        label: option.label().to_owned(),
                        value: option.value().clone(),
                    })
                    .collect(),
            )
        } else {
            DisplayValue::Single(labelled.next().map(|option| option.label().to_owned()))
        };

        Self {
            open: state.is_open(),
            focused,
            options: rows,
            display,
        }
    }

    /// Whether anything is selected (and known to the list).
    #[must_use]
    pub fn has_value(&self) -> bool {
        match &self.display {
            DisplayValue::Single(label) => label.is_some(),
            DisplayValue::Badges(badges) => !badges.is_empty(),
        }
    }

    /// Index of the highlighted row, if the list has one.
    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.options.iter().position(|row| row.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use crate::select::{
        DisplayValue, Multiple, OptionList, OptionValue, Select, SelectOption, Single,
    };

    fn options() -> OptionList {
        OptionList::new([
            SelectOption::new("first", 1),
            SelectOption::new("second", 2),
            SelectOption::new("third", 3),
        ])
        .expect("unique values")
    }

    #[test]
    fn single_view_shows_label() {
        let select = Select::<Single>::new(options());
        let view = select.view(&Some(OptionValue::from(2)));
        assert_eq!(view.display, DisplayValue::Single(Some("second".into())));
        assert!(view.has_value());
        assert!(!view.open);
        let selected: Vec<bool> = view.options.iter().map(|row| row.selected).collect();
        assert_eq!(selected, [false, true, false]);
    }

    #[test]
    fn empty_single_view() {
        let select = Select::<Single>::new(options());
        let view = select.view(&None);
        assert_eq!(view.display, DisplayValue::Single(None));
        assert!(!view.has_value());
    }

    #[test]
    fn multiple_view_badges_follow_value_order() {
        let select = Select::<Multiple>::new(options());
        let view = select.view(&vec![OptionValue::from(3), OptionValue::from(1)]);
        let DisplayValue::Badges(badges) = &view.display else {
            panic!("multiple mode renders badges");
        };
        let labels: Vec<&str> = badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["third", "first"]);
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let select = Select::<Multiple>::new(options());
        let view = select.view(&vec![OptionValue::from(9)]);
        assert!(!view.has_value());
        assert!(view.options.iter().all(|row| !row.selected));
    }

    #[test]
    fn highlight_is_projected() {
        let mut select = Select::<Single>::new(options());
        let _ = select.toggle_open();
        let _ = select.handle_hover(1);
        let view = select.view(&None);
        assert!(view.open);
        assert_eq!(view.highlighted_index(), Some(1));
    }

    #[test]
    fn empty_list_has_no_highlight_row() {
        let select = Select::<Single>::new(OptionList::default());
        assert_eq!(select.view(&None).highlighted_index(), None);
    }
}
