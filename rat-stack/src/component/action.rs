use super::event::{Event, PopEvent, PushEvent};
use super::traits::Component;
use std::future::Future;
use std::pin::Pin;

/// A boxed, sendable future.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Deferred work returned by components and resolved by the host.
///
/// Whatever event an action yields goes back through the host queue and is
/// delivered to the component that is active *when it resolves*, which is
/// not necessarily the one that returned the action.
pub enum Action {
    /// An event that is already known. Still queued, never delivered inline.
    Message(Event),
    /// Async work yielding at most one event.
    Task(BoxFuture<Option<Event>>),
    /// Several actions, kept in order.
    Batch(Vec<Action>),
    /// Ask the host to stop.
    Quit,
}

impl Action {
    pub fn message(event: Event) -> Self {
        Action::Message(event)
    }

    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = Option<Event>> + Send + 'static,
    {
        Action::Task(Box::pin(future))
    }

    /// An action yielding [`Event::Push`] for `component`.
    pub fn push(component: impl Component) -> Self {
        Action::Message(PushEvent::new(component).into())
    }

    /// An action yielding [`Event::Pop`]; `replay` reaches the resumed
    /// component after its `init` and the resize replay.
    pub fn pop<I>(replay: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        Action::Message(PopEvent::new(replay).into())
    }

    /// Combine optional actions, keeping their order.
    ///
    /// Absent entries are skipped. Nothing left gives `None`, a single entry
    /// is returned unwrapped.
    pub fn batch<I>(actions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Action>>,
    {
        let mut actions: Vec<Action> = actions.into_iter().flatten().collect();
        match actions.len() {
            0 => None,
            1 => actions.pop(),
            _ => Some(Action::Batch(actions)),
        }
    }

    /// Number of leaf actions, looking through batches.
    pub fn count(&self) -> usize {
        match self {
            Action::Batch(actions) => actions.iter().map(Action::count).sum(),
            _ => 1,
        }
    }

    /// Resolve every member in order and collect the events they yield.
    ///
    /// Hosts run tasks concurrently instead; this is for tests and simple
    /// drivers.
    pub fn resolve(self) -> BoxFuture<Vec<Event>> {
        Box::pin(async move {
            match self {
                Action::Message(event) => vec![event],
                Action::Task(future) => future.await.into_iter().collect(),
                Action::Batch(actions) => {
                    let mut events = Vec::new();
                    for action in actions {
                        events.extend(action.resolve().await);
                    }
                    events
                }
                Action::Quit => Vec::new(),
            }
        })
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Message(event) => f.debug_tuple("Message").field(event).finish(),
            Action::Task(_) => write!(f, "Task(..)"),
            Action::Batch(actions) => f.debug_tuple("Batch").field(actions).finish(),
            Action::Quit => write!(f, "Quit"),
        }
    }
}
