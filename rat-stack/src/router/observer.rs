//! Diagnostic hooks for the router.
//!
//! An [`Observer`] is attached per router with
//! [`Router::with_observer`](super::Router::with_observer). Observers see
//! every trace point but cannot influence dispatch.

use crate::component::Event;

/// A completed control transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Push {
        from: &'static str,
        to: &'static str,
        /// Dormant depth after the push.
        depth: usize,
    },
    Pop {
        from: &'static str,
        to: &'static str,
        /// Dormant depth after the pop.
        depth: usize,
        /// Number of replay events delivered to `to`.
        replayed: usize,
    },
}

/// Receives the router's trace points. All methods default to no-ops.
pub trait Observer: Send + Sync {
    /// The active component is being initialized.
    fn on_init(&self, component: &'static str) {
        let _ = component;
    }

    fn on_render(&self, component: &'static str) {
        let _ = component;
    }

    /// Entry to dispatch, before the router looks at the event.
    fn on_event(&self, event: &Event) {
        let _ = event;
    }

    /// The event is about to be handed to the active component unchanged.
    fn on_forward(&self, component: &'static str, event: &Event) {
        let _ = (component, event);
    }

    fn on_transition(&self, transition: &Transition) {
        let _ = transition;
    }
}

/// Forwards trace points to `tracing`.
///
/// Renders and forwards are logged at TRACE, transitions at DEBUG.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_init(&self, component: &'static str) {
        tracing::trace!(component, "init called");
    }

    fn on_render(&self, component: &'static str) {
        tracing::trace!(component, "render called");
    }

    fn on_event(&self, event: &Event) {
        tracing::trace!(kind = event.kind(), ?event, "handle_event called");
    }

    fn on_forward(&self, component: &'static str, event: &Event) {
        tracing::trace!(component, kind = event.kind(), "passing through event");
    }

    fn on_transition(&self, transition: &Transition) {
        match transition {
            Transition::Push { from, to, depth } => {
                tracing::debug!(from, to, depth, "pushed component onto stack");
            }
            Transition::Pop { from, to, depth, replayed } => {
                tracing::debug!(from, to, depth, replayed, "popped component off stack");
            }
        }
    }
}
