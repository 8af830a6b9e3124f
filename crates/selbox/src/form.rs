#![forbid(unsafe_code)]

//! A host for several select widgets.
//!
//! [`Form`] plays the caller's role for each widget: it owns the committed
//! value, asks an optional change hook whether to accept each proposal, and
//! routes input. Focus lives in a [`FocusRing`]; every field holds the
//! [`FocusHandle`] of its registration, so removing a field drops the handle
//! and no further input can reach it.
//!
//! # Routing
//!
//! - `Tab` / `BackTab` move focus through the ring; the fields that lose and
//!   gain focus receive `Event::Focus(false)` / `Event::Focus(true)`.
//! - Other keys go to the focused field's container.
//! - A left click focuses the field under the pointer first, then delivers
//!   the click to the hit target.
//! - Pointer moves go to the field under the pointer without moving focus.
//! - `Event::Focus(false)` (the host lost focus) blurs the focused field.

use selbox_core::event::{Event, KeyCode};
use selbox_core::focus::{FocusChange, FocusHandle, FocusId, FocusRing};
use selbox_widgets::select::{
    Select, SelectOutcome, SelectTarget, SelectView, SelectionMode, render_lines,
};
use std::any::Any;

/// Change hook: return `false` to reject a proposal.
pub type ChangeHook<V> = Box<dyn FnMut(&V) -> bool>;

/// Where a pointer event landed, as resolved by the host's hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Field under the pointer.
    pub field: FocusId,
    /// Part of that field.
    pub target: SelectTarget,
}

impl Hit {
    /// Construct a hit.
    #[must_use]
    pub fn new(field: FocusId, target: SelectTarget) -> Self {
        Self { field, target }
    }
}

trait FormField {
    fn id(&self) -> FocusId;
    fn deliver(&mut self, event: &Event, target: &SelectTarget) -> bool;
    fn view(&self) -> SelectView;
    fn as_any(&self) -> &dyn Any;
}

struct SelectField<M: SelectionMode> {
    select: Select<M>,
    value: M::Value,
    on_change: Option<ChangeHook<M::Value>>,
    handle: FocusHandle,
}

impl<M> FormField for SelectField<M>
where
    M: SelectionMode + 'static,
    M::Value: 'static,
{
    fn id(&self) -> FocusId {
        self.handle.id()
    }

    fn deliver(&mut self, event: &Event, target: &SelectTarget) -> bool {
        match self.select.handle_event(event, target, &self.value) {
            SelectOutcome::Ignored => false,
            SelectOutcome::StateChanged => true,
            SelectOutcome::Proposed(next) => {
                let accepted = self.on_change.as_mut().is_none_or(|hook| hook(&next));
                if accepted {
                    self.value = next;
                }
                true
            }
        }
    }

    fn view(&self) -> SelectView {
        self.select.view(&self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ordered set of select widgets sharing one focus ring.
pub struct Form {
    ring: FocusRing,
    fields: Vec<Box<dyn FormField>>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields.len())
            .field("focused", &self.ring.focused())
            .finish()
    }
}

impl Form {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: FocusRing::new(),
            fields: Vec::new(),
        }
    }

    /// Add a widget with its initial value. Proposals are always accepted.
    pub fn add<M>(&mut self, select: Select<M>, value: M::Value) -> FocusId
    where
        M: SelectionMode + 'static,
        M::Value: 'static,
    {
        self.insert(select, value, None)
    }

    /// Add a widget whose proposals pass through `on_change` first.
    pub fn add_with<M, F>(&mut self, select: Select<M>, value: M::Value, on_change: F) -> FocusId
    where
        M: SelectionMode + 'static,
        M::Value: 'static,
        F: FnMut(&M::Value) -> bool + 'static,
    {
        self.insert(select, value, Some(Box::new(on_change)))
    }

    fn insert<M>(
        &mut self,
        select: Select<M>,
        value: M::Value,
        on_change: Option<ChangeHook<M::Value>>,
    ) -> FocusId
    where
        M: SelectionMode + 'static,
        M::Value: 'static,
    {
        let handle = self.ring.register();
        let id = handle.id();
        self.fields.push(Box::new(SelectField {
            select,
            value,
            on_change,
            handle,
        }));
        id
    }

    /// Remove a field. Its focus registration ends with it.
    pub fn remove(&mut self, id: FocusId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.id() != id);
        self.fields.len() != before
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ids in tab order.
    #[must_use]
    pub fn ids(&self) -> Vec<FocusId> {
        self.fields.iter().map(|field| field.id()).collect()
    }

    /// Field that owns keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.ring.focused()
    }

    /// Committed value of a field, if `id` exists and has mode `M`.
    #[must_use]
    pub fn value<M>(&self, id: FocusId) -> Option<&M::Value>
    where
        M: SelectionMode + 'static,
        M::Value: 'static,
    {
        self.field(id)?
            .as_any()
            .downcast_ref::<SelectField<M>>()
            .map(|field| &field.value)
    }

    /// Render projection of a field.
    #[must_use]
    pub fn view(&self, id: FocusId) -> Option<SelectView> {
        self.field(id).map(|field| field.view())
    }

    /// Render every field as text, separated by blank lines.
    #[must_use]
    pub fn render(&self, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(render_lines(&field.view(), width));
        }
        lines
    }

    /// Move focus directly to `id`.
    pub fn focus(&mut self, id: FocusId) -> bool {
        let change = self.ring.focus(id);
        self.apply_focus_change(change)
    }

    /// Route one input event. Returns whether anything visible changed.
    ///
    /// `hit` is where a pointer event landed; it is ignored for keys and
    /// focus events.
    pub fn dispatch(&mut self, event: &Event, hit: Option<&Hit>) -> bool {
        match event {
            Event::Key(key) if key.is_down() && key.code == KeyCode::Tab && !key.shift() => {
                let change = self.ring.focus_next();
                self.apply_focus_change(change)
            }
            Event::Key(key)
                if key.is_down()
                    && (key.code == KeyCode::BackTab
                        || (key.code == KeyCode::Tab && key.shift())) =>
            {
                let change = self.ring.focus_prev();
                self.apply_focus_change(change)
            }
            Event::Key(_) => match self.ring.focused() {
                Some(id) => self.deliver(id, event, &SelectTarget::Container),
                None => false,
            },
            Event::Mouse(mouse) => {
                let Some(hit) = hit else {
                    return false;
                };
                let mut changed = false;
                if mouse.is_left_click() {
                    let change = self.ring.focus(hit.field);
                    changed |= self.apply_focus_change(change);
                }
                changed | self.deliver(hit.field, event, &hit.target)
            }
            Event::Focus(true) => false,
            Event::Focus(false) => {
                let change = self.ring.blur();
                self.apply_focus_change(change)
            }
        }
    }

    fn apply_focus_change(&mut self, change: Option<FocusChange>) -> bool {
        let Some(change) = change else {
            return false;
        };
        let mut changed = false;
        if let Some(lost) = change.lost {
            changed |= self.deliver(lost, &Event::Focus(false), &SelectTarget::Container);
        }
        if let Some(gained) = change.gained {
            changed |= self.deliver(gained, &Event::Focus(true), &SelectTarget::Container);
        }
        changed
    }

    fn deliver(&mut self, id: FocusId, event: &Event, target: &SelectTarget) -> bool {
        match self.fields.iter_mut().find(|field| field.id() == id) {
            Some(field) => field.deliver(event, target),
            None => false,
        }
    }

    fn field(&self, id: FocusId) -> Option<&dyn FormField> {
        self.fields
            .iter()
            .find(|field| field.id() == id)
            .map(|field| field.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selbox_core::event::{KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
    use selbox_widgets::select::{
        Multiple, OptionList, OptionValue, SelectConfig, SelectOption, Single,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options() -> OptionList {
        OptionList::new([
            SelectOption::new("first", 1),
            SelectOption::new("second", 2),
            SelectOption::new("third", 3),
        ])
        .expect("unique values")
    }

    fn key(n: i64) -> OptionValue {
        OptionValue::from(n)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn click() -> Event {
        Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            0,
            0,
        ))
    }

    #[test]
    fn keys_go_to_focused_field() {
        let mut form = Form::new();
        let multi = form.add(Select::<Multiple>::new(options()), vec![key(1)]);
        let single = form.add(Select::<Single>::new(options()), Some(key(1)));

        assert!(form.dispatch(&press(KeyCode::Tab), None));
        assert_eq!(form.focused(), Some(multi));
        form.dispatch(&press(KeyCode::Tab), None);
        assert_eq!(form.focused(), Some(single));

        form.dispatch(&press(KeyCode::Enter), None);
        form.dispatch(&press(KeyCode::Down), None);
        form.dispatch(&press(KeyCode::Enter), None);

        assert_eq!(form.value::<Single>(single), Some(&Some(key(2))));
        assert_eq!(form.value::<Multiple>(multi), Some(&vec![key(1)]));
    }

    #[test]
    fn keys_without_focus_are_dropped() {
        let mut form = Form::new();
        let id = form.add(Select::<Single>::new(options()), None);
        assert!(!form.dispatch(&press(KeyCode::Enter), None));
        assert!(!form.view(id).expect("view").open);
    }

    #[test]
    fn tab_away_closes_open_list() {
        let mut form = Form::new();
        let a = form.add(Select::<Single>::new(options()), None);
        let _b = form.add(Select::<Single>::new(options()), None);
        form.focus(a);
        form.dispatch(&press(KeyCode::Enter), None);
        assert!(form.view(a).expect("view").open);

        form.dispatch(&press(KeyCode::Tab), None);
        assert!(!form.view(a).expect("view").open);
    }

    #[test]
    fn shift_tab_moves_backwards() {
        let mut form = Form::new();
        let a = form.add(Select::<Single>::new(options()), None);
        let b = form.add(Select::<Single>::new(options()), None);
        form.dispatch(&press(KeyCode::BackTab), None);
        assert_eq!(form.focused(), Some(b));
        let shift_tab = Event::Key(KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT));
        form.dispatch(&shift_tab, None);
        assert_eq!(form.focused(), Some(a));
    }

    #[test]
    fn click_focuses_and_toggles() {
        let mut form = Form::new();
        let id = form.add(Select::<Multiple>::new(options()), vec![]);
        let hit = Hit::new(id, SelectTarget::Container);

        assert!(form.dispatch(&click(), Some(&hit)));
        assert_eq!(form.focused(), Some(id));
        assert!(form.view(id).expect("view").open);
    }

    #[test]
    fn clear_click_keeps_list_state() {
        let mut form = Form::new();
        let id = form.add(Select::<Multiple>::new(options()), vec![key(1), key(2)]);
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Container)));
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::ClearButton)));

        assert_eq!(form.value::<Multiple>(id), Some(&vec![]));
        assert!(form.view(id).expect("view").open);
    }

    #[test]
    fn hover_does_not_move_focus() {
        let mut form = Form::new();
        let id = form.add(Select::<Single>::new(options()), None);
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Container)));
        form.dispatch(&Event::Focus(false), None);
        assert_eq!(form.focused(), None);

        let hover = Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 0, 2));
        form.dispatch(&hover, Some(&Hit::new(id, SelectTarget::Option(1))));
        assert_eq!(form.focused(), None);
        assert_eq!(form.view(id).expect("view").highlighted_index(), Some(1));
    }

    #[test]
    fn rejected_proposal_keeps_value() {
        let mut form = Form::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let id = form.add_with(Select::<Multiple>::new(options()), vec![key(1)], move |next| {
            log.borrow_mut().push(next.clone());
            next.len() <= 1
        });

        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Option(1))));
        assert_eq!(form.value::<Multiple>(id), Some(&vec![key(1)]));

        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Badge(key(1)))));
        assert_eq!(form.value::<Multiple>(id), Some(&vec![]));

        assert_eq!(*seen.borrow(), vec![vec![key(1), key(2)], vec![]]);
    }

    #[test]
    fn keep_open_config_survives_pointer_picks() {
        let mut form = Form::new();
        let select =
            Select::<Multiple>::new(options()).config(SelectConfig::new().close_on_select(false));
        let id = form.add(select, vec![]);
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Container)));
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Option(0))));
        form.dispatch(&click(), Some(&Hit::new(id, SelectTarget::Option(1))));
        assert_eq!(form.value::<Multiple>(id), Some(&vec![key(1), key(2)]));
        assert!(form.view(id).expect("view").open);

        // A keyboard commit closes the list even under this policy.
        form.dispatch(&press(KeyCode::Down), None);
        form.dispatch(&press(KeyCode::Enter), None);
        assert_eq!(form.value::<Multiple>(id), Some(&vec![key(1)]));
        assert!(!form.view(id).expect("view").open);
    }

    #[test]
    fn removed_field_receives_nothing() {
        let mut form = Form::new();
        let a = form.add(Select::<Single>::new(options()), None);
        let b = form.add(Select::<Single>::new(options()), None);
        form.focus(a);
        assert!(form.remove(a));
        assert!(!form.remove(a));

        assert_eq!(form.focused(), None);
        assert!(!form.dispatch(&press(KeyCode::Enter), None));
        assert!(!form.focus(a));
        assert_eq!(form.ids(), vec![b]);
    }

    #[test]
    fn value_with_wrong_mode_is_none() {
        let mut form = Form::new();
        let id = form.add(Select::<Single>::new(options()), None);
        assert!(form.value::<Multiple>(id).is_none());
        assert_eq!(form.value::<Single>(id), Some(&None));
    }

    #[test]
    fn render_separates_fields() {
        let mut form = Form::new();
        form.add(Select::<Multiple>::new(options()), vec![key(1)]);
        form.add(Select::<Single>::new(options()), Some(key(1)));
        let lines = form.render(16);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[first x   ] x v");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "[first     ] x v");
    }
}
