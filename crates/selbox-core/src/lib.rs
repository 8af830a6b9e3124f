#![forbid(unsafe_code)]

//! Core: input events and focus ownership.
//!
//! # Role in selbox
//! `selbox-core` is the input layer. It defines the normalized event types the
//! widgets consume and the focus ring that decides which widget owns keyboard
//! input at any moment.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, mouse, focus).
//! - **FocusRing**: ordered focus registry with RAII registration handles.
//! - **Logging**: optional `tracing` re-exports behind the `tracing` feature.
//!
//! The widget crate (`selbox-widgets`) depends only on these types, so the
//! selection state machine stays testable without any host toolkit.

pub mod event;
pub mod focus;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
