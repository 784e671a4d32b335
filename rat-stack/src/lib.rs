//! Stack-based control transfer between ratatui components.
//!
//! A [`Router`] keeps exactly one active [`Component`] and a stack of dormant
//! ones. Components hand control around by returning [`Action::push`] and
//! [`Action::pop`]; the [`Host`] resolves those actions and feeds the
//! resulting events back through the router.

pub mod application;
pub mod component;
pub mod config;
pub mod error;
pub mod host;
pub mod router;
pub mod stack;
pub mod task;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::Application;
pub use component::{Action, BoxFuture, Component, Event, PopEvent, PushEvent};
pub use config::AppConfig;
pub use host::{EventSender, Flow, Host};
pub use router::{Observer, Router, TracingObserver, Transition};
pub use stack::Stack;
pub use task::{TaskHandle, TaskTracker};
