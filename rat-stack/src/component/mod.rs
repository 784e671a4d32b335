//! Component module.
//!
//! Defines the `Component` trait, the `Event` stream it consumes and the
//! `Action`s it hands back to the host.

pub mod action;
pub mod event;
pub mod traits;

pub use action::{Action, BoxFuture};
pub use event::{Event, PopEvent, PushEvent};
pub use traits::Component;
