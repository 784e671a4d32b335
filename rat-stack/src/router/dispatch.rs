//! The control router.

use super::observer::{Observer, Transition};
use crate::component::{Action, Component, Event, PopEvent, PushEvent};
use crate::error::{Result, StackUnderflowSnafu};
use crate::stack::Stack;
use ratatui::layout::{Rect, Size};
use snafu::OptionExt;
use std::sync::Arc;

/// Passes control between components using a stack.
///
/// Exactly one component is active at any time. [`Event::Push`] parks the
/// active component on the dormant stack and activates a new one;
/// [`Event::Pop`] drops the active component and resumes the one below it.
/// Every other event goes to the active component as is.
///
/// On every transfer the newly active component is re-initialized and, if a
/// resize has been seen, receives the latest [`Event::Resize`] before anything
/// else.
///
/// # Example
/// ```ignore
/// use rat_stack::{Event, PopEvent, PushEvent, Router};
///
/// let mut router = Router::new(Home::default());
/// router.handle_event(Event::resize(80, 24))?;
///
/// // Usually arrives through the host after a component returned
/// // `Action::push(Settings::default())`.
/// router.handle_event(PushEvent::new(Settings::default()).into())?;
/// assert_eq!(router.depth(), 1);
///
/// router.handle_event(PopEvent::new([Event::custom("saved")]).into())?;
/// assert_eq!(router.depth(), 0);
/// ```
pub struct Router {
    active: Box<dyn Component>,
    dormant: Stack<Box<dyn Component>>,
    last_resize: Option<Size>,
    observer: Option<Arc<dyn Observer>>,
}

impl Router {
    /// Create a router with `seed` as the active component.
    pub fn new(seed: impl Component) -> Self {
        Self::from_boxed(Box::new(seed))
    }

    pub fn from_boxed(seed: Box<dyn Component>) -> Self {
        Self {
            active: seed,
            dormant: Stack::new(),
            last_resize: None,
            observer: None,
        }
    }

    /// Attach a diagnostic observer. Dispatch behaves the same with or
    /// without one.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Same as [`with_observer`](Self::with_observer) for an observer that is
    /// shared elsewhere.
    pub fn with_shared_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Initialize the active component.
    ///
    /// Not guarded: each call runs the active component's `init` again.
    pub fn init(&mut self) -> Option<Action> {
        self.init_active()
    }

    /// Render the active component.
    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(observer) = &self.observer {
            observer.on_render(self.active.name());
        }
        self.active.render(frame, area);
    }

    /// Dispatch one event.
    ///
    /// Push and pop events are consumed by the router. A pop with nothing
    /// dormant fails with [`Error::StackUnderflow`](crate::Error) and leaves
    /// the router unchanged.
    pub fn handle_event(&mut self, event: Event) -> Result<Option<Action>> {
        if let Some(observer) = &self.observer {
            observer.on_event(&event);
        }

        match event {
            Event::Push(push) => Ok(self.push(push)),
            Event::Pop(pop) => self.pop(pop),
            event => {
                if let Event::Resize(size) = &event {
                    self.last_resize = Some(*size);
                }
                Ok(self.forward(event))
            }
        }
    }

    /// Number of dormant components.
    pub fn depth(&self) -> usize {
        self.dormant.len()
    }

    /// The most recent resize seen by the router.
    pub fn last_resize(&self) -> Option<Size> {
        self.last_resize
    }

    pub fn active_name(&self) -> &'static str {
        self.active.name()
    }

    fn push(&mut self, push: PushEvent) -> Option<Action> {
        let from = self.active.name();
        let previous = std::mem::replace(&mut self.active, push.component);
        self.dormant.push(previous);
        self.notify(Transition::Push {
            from,
            to: self.active.name(),
            depth: self.dormant.len(),
        });

        let init = self.init_active();
        let resize = self.replay_resize();
        Action::batch([init, resize])
    }

    fn pop(&mut self, pop: PopEvent) -> Result<Option<Action>> {
        let resumed = self.dormant.pop().context(StackUnderflowSnafu)?;
        let discarded = std::mem::replace(&mut self.active, resumed);
        self.notify(Transition::Pop {
            from: discarded.name(),
            to: self.active.name(),
            depth: self.dormant.len(),
            replayed: pop.replay.len(),
        });
        drop(discarded);

        let mut actions = Vec::with_capacity(pop.replay.len() + 2);
        actions.push(self.init_active());
        actions.push(self.replay_resize());
        for event in pop.replay {
            actions.push(self.forward(event));
        }
        Ok(Action::batch(actions))
    }

    fn init_active(&mut self) -> Option<Action> {
        if let Some(observer) = &self.observer {
            observer.on_init(self.active.name());
        }
        self.active.init()
    }

    fn replay_resize(&mut self) -> Option<Action> {
        let size = self.last_resize?;
        self.forward(Event::Resize(size))
    }

    fn forward(&mut self, event: Event) -> Option<Action> {
        if let Some(observer) = &self.observer {
            observer.on_forward(self.active.name(), &event);
        }
        self.active.handle_event(event)
    }

    fn notify(&self, transition: Transition) {
        if let Some(observer) = &self.observer {
            observer.on_transition(&transition);
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("active", &self.active.name())
            .field(
                "dormant",
                &self.dormant.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("last_resize", &self.last_resize)
            .finish()
    }
}
