//! Test doubles shared by the unit tests.

use crate::component::{Action, Component, Event};
use crate::router::{Observer, Router, Transition};
use ratatui::backend::TestBackend;
use ratatui::layout::{Rect, Size};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What a [`Probe`] observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Seen {
    Init,
    Resize(Size),
    Custom(String),
    Other(&'static str),
}

/// Shared view of a probe's history, kept by the test after the probe
/// itself has been moved into a router.
#[derive(Clone, Default)]
pub(crate) struct Journal(Arc<Mutex<Vec<Seen>>>);

impl Journal {
    fn record(&self, seen: Seen) {
        self.0.lock().unwrap().push(seen);
    }

    pub(crate) fn entries(&self) -> Vec<Seen> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn inits(&self) -> usize {
        self.entries().iter().filter(|s| **s == Seen::Init).count()
    }
}

/// A component that renders a fixed label and records everything it gets.
pub(crate) struct Probe {
    label: &'static str,
    journal: Journal,
    on_init: Option<fn() -> Action>,
    replies: VecDeque<Action>,
}

impl Probe {
    pub(crate) fn new(label: &'static str) -> (Self, Journal) {
        let journal = Journal::default();
        let probe = Self {
            label,
            journal: journal.clone(),
            on_init: None,
            replies: VecDeque::new(),
        };
        (probe, journal)
    }

    /// Return `make()` from every `init` call.
    pub(crate) fn init_with(mut self, make: fn() -> Action) -> Self {
        self.on_init = Some(make);
        self
    }

    /// Queue an action to be returned from the next unanswered `handle_event`.
    pub(crate) fn reply_with(mut self, action: Action) -> Self {
        self.replies.push_back(action);
        self
    }
}

impl Component for Probe {
    fn init(&mut self) -> Option<Action> {
        self.journal.record(Seen::Init);
        self.on_init.map(|make| make())
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        let seen = match event {
            Event::Resize(size) => Seen::Resize(size),
            Event::Custom(message) => Seen::Custom(message),
            other => Seen::Other(other.kind()),
        };
        self.journal.record(seen);
        self.replies.pop_front()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.label), area);
    }
}

/// Draw the router into a small off-screen buffer and return the text.
pub(crate) fn rendered(router: &Router) -> String {
    let mut terminal = Terminal::new(TestBackend::new(16, 1)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            router.render(frame, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[derive(Default)]
struct Recorded {
    inits: usize,
    renders: usize,
    events: Vec<&'static str>,
    transitions: Vec<Transition>,
}

/// An observer that remembers every trace point.
#[derive(Clone, Default)]
pub(crate) struct RecordingObserver(Arc<Mutex<Recorded>>);

impl RecordingObserver {
    pub(crate) fn inits(&self) -> usize {
        self.0.lock().unwrap().inits
    }

    pub(crate) fn renders(&self) -> usize {
        self.0.lock().unwrap().renders
    }

    pub(crate) fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().events.clone()
    }

    pub(crate) fn transitions(&self) -> Vec<Transition> {
        self.0.lock().unwrap().transitions.clone()
    }
}

impl Observer for RecordingObserver {
    fn on_init(&self, _component: &'static str) {
        self.0.lock().unwrap().inits += 1;
    }

    fn on_render(&self, _component: &'static str) {
        self.0.lock().unwrap().renders += 1;
    }

    fn on_event(&self, event: &Event) {
        self.0.lock().unwrap().events.push(event.kind());
    }

    fn on_transition(&self, transition: &Transition) {
        self.0.lock().unwrap().transitions.push(transition.clone());
    }
}
