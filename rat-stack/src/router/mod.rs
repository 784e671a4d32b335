//! Router module.
//!
//! Provides the stack-based [`Router`] and the [`Observer`] hooks it reports to.

pub mod dispatch;
pub mod observer;

pub use dispatch::Router;
pub use observer::{Observer, TracingObserver, Transition};
