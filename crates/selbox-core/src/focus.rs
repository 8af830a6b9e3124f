#![forbid(unsafe_code)]

//! Focus ownership.
//!
//! A [`FocusRing`] keeps the ordered set of focusable widgets and which one
//! currently owns keyboard input. Widgets join the ring by calling
//! [`FocusRing::register`], which hands back a [`FocusHandle`]. The handle is
//! the registration: dropping it removes the widget from the ring (and drops
//! focus if it held it), so a torn-down widget can never be handed input.
//!
//! # Invariants
//!
//! - At most one id is focused at a time.
//! - The focused id, if any, is always registered.
//! - Tab order is registration order.
//!
//! The ring is single-threaded (`Rc<RefCell<_>>`); every event handler runs
//! to completion before the next one starts, so no borrow is held across
//! calls.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Opaque identifier of a focusable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusId(u64);

impl FocusId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "focus#{}", self.0)
    }
}

/// Result of a focus transition.
///
/// The host delivers `Event::Focus(false)` to `lost` and `Event::Focus(true)`
/// to `gained`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Widget that lost focus.
    pub lost: Option<FocusId>,
    /// Widget that gained focus.
    pub gained: Option<FocusId>,
}

#[derive(Debug, Default)]
struct RingInner {
    next_id: u64,
    order: Vec<FocusId>,
    focused: Option<FocusId>,
}

impl RingInner {
    fn set_focus(&mut self, target: Option<FocusId>) -> Option<FocusChange> {
        if self.focused == target {
            return None;
        }
        let lost = self.focused;
        self.focused = target;
        Some(FocusChange {
            lost,
            gained: target,
        })
    }

    fn step(&mut self, forward: bool) -> Option<FocusChange> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused.and_then(|id| self.order.iter().position(|&o| o == id)) {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        let target = self.order[next];
        self.set_focus(Some(target))
    }
}

/// Ordered focus registry shared between a host and its widgets.
///
/// Cloning a `FocusRing` yields another reference to the same ring.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    inner: Rc<RefCell<RingInner>>,
}

impl FocusRing {
    /// Create an empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new focusable widget at the end of the tab order.
    #[must_use = "dropping the handle unregisters the widget immediately"]
    pub fn register(&self) -> FocusHandle {
        let mut inner = self.inner.borrow_mut();
        let id = FocusId(inner.next_id);
        inner.next_id += 1;
        inner.order.push(id);
        FocusHandle {
            id,
            ring: Rc::downgrade(&self.inner),
        }
    }

    /// Move focus to `id`.
    ///
    /// Returns `None` if `id` is not registered or already focused.
    pub fn focus(&self, id: FocusId) -> Option<FocusChange> {
        let mut inner = self.inner.borrow_mut();
        if !inner.order.contains(&id) {
            return None;
        }
        inner.set_focus(Some(id))
    }

    /// Drop focus entirely (e.g. the host window lost focus).
    pub fn blur(&self) -> Option<FocusChange> {
        self.inner.borrow_mut().set_focus(None)
    }

    /// Move focus to the next widget in tab order, wrapping at the end.
    pub fn focus_next(&self) -> Option<FocusChange> {
        self.inner.borrow_mut().step(true)
    }

    /// Move focus to the previous widget in tab order, wrapping at the start.
    pub fn focus_prev(&self) -> Option<FocusChange> {
        self.inner.borrow_mut().step(false)
    }

    /// Currently focused widget.
    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.inner.borrow().focused
    }

    /// Whether `id` currently owns focus.
    #[must_use]
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.focused() == Some(id)
    }

    /// Number of registered widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().order.len()
    }

    /// Whether no widget is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration of one widget in a [`FocusRing`].
///
/// Unregisters on drop.
#[derive(Debug)]
pub struct FocusHandle {
    id: FocusId,
    ring: Weak<RefCell<RingInner>>,
}

impl FocusHandle {
    /// The registered id.
    #[must_use]
    pub const fn id(&self) -> FocusId {
        self.id
    }

    /// Whether this widget currently owns focus.
    ///
    /// Always `false` once the ring itself has been dropped.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.ring
            .upgrade()
            .is_some_and(|ring| ring.borrow().focused == Some(self.id))
    }
}

impl Drop for FocusHandle {
    fn drop(&mut self) {
        let Some(ring) = self.ring.upgrade() else {
            return;
        };
        let mut inner = ring.borrow_mut();
        inner.order.retain(|&id| id != self.id);
        if inner.focused == Some(self.id) {
            inner.focused = None;
        }
    }
}
