use super::traits::Component;
use ratatui::layout::Size;

/// Event type delivered to the router and forwarded to components.
///
/// Only [`Event::Push`], [`Event::Pop`] and [`Event::Resize`] mean anything to
/// the [`Router`](crate::Router); every other variant is passed through
/// untouched.
#[derive(Debug)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(Size),
    FocusGained,
    FocusLost,
    Paste(String),
    Custom(String),
    /// Hand control to a new component.
    Push(PushEvent),
    /// Return control to the most recently pushed-over component.
    Pop(PopEvent),
}

impl Event {
    pub fn resize(width: u16, height: u16) -> Self {
        Event::Resize(Size::new(width, height))
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Event::Custom(message.into())
    }

    /// A stable name for the variant, for logs and traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Key(_) => "Key",
            Event::Mouse(_) => "Mouse",
            Event::Resize(_) => "Resize",
            Event::FocusGained => "FocusGained",
            Event::FocusLost => "FocusLost",
            Event::Paste(_) => "Paste",
            Event::Custom(_) => "Custom",
            Event::Push(_) => "Push",
            Event::Pop(_) => "Pop",
        }
    }
}

/// Instructs the router to park the active component and activate `component`.
pub struct PushEvent {
    pub component: Box<dyn Component>,
}

impl PushEvent {
    pub fn new(component: impl Component) -> Self {
        Self {
            component: Box::new(component),
        }
    }
}

impl std::fmt::Debug for PushEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushEvent")
            .field("component", &self.component.name())
            .finish()
    }
}

/// Instructs the router to drop the active component and resume the one
/// below it.
#[derive(Debug, Default)]
pub struct PopEvent {
    /// Events handed to the resumed component, in order, right after its
    /// `init` and the resize replay.
    pub replay: Vec<Event>,
}

impl PopEvent {
    pub fn new<I>(replay: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        Self {
            replay: replay.into_iter().collect(),
        }
    }
}

impl From<PushEvent> for Event {
    fn from(event: PushEvent) -> Self {
        Event::Push(event)
    }
}

impl From<PopEvent> for Event {
    fn from(event: PopEvent) -> Self {
        Event::Pop(event)
    }
}
