//! Property-based invariant tests for the focus ring.
//!
//! 1. The focused id, if any, is always one of the live handles.
//! 2. At most one live handle reports focus.
//! 3. Dropping a handle never leaves focus pointing at it.

use proptest::prelude::*;
use selbox_core::focus::{FocusHandle, FocusRing};

#[derive(Debug, Clone)]
enum Op {
    Register,
    Drop(usize),
    Focus(usize),
    Next,
    Prev,
    Blur,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Register),
        (0usize..8).prop_map(Op::Drop),
        (0usize..8).prop_map(Op::Focus),
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::Blur),
    ]
}

proptest! {
    #[test]
    fn focus_always_points_at_live_handle(ops in proptest::collection::vec(op(), 0..64)) {
        let ring = FocusRing::new();
        let mut handles: Vec<FocusHandle> = Vec::new();

        for op in ops {
            match op {
                Op::Register => handles.push(ring.register()),
                Op::Drop(i) if !handles.is_empty() => {
                    let i = i % handles.len();
                    let id = handles.remove(i).id();
                    prop_assert!(!ring.is_focused(id));
                }
                Op::Drop(_) => {}
                Op::Focus(i) if !handles.is_empty() => {
                    let id = handles[i % handles.len()].id();
                    ring.focus(id);
                    prop_assert!(ring.is_focused(id));
                }
                Op::Focus(_) => {}
                Op::Next => { ring.focus_next(); }
                Op::Prev => { ring.focus_prev(); }
                Op::Blur => { ring.blur(); }
            }

            prop_assert_eq!(ring.len(), handles.len());
            let focused: Vec<_> = handles.iter().filter(|h| h.is_focused()).collect();
            prop_assert!(focused.len() <= 1);
            if let Some(id) = ring.focused() {
                prop_assert!(handles.iter().any(|h| h.id() == id));
            }
        }
    }
}
