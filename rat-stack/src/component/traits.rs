use super::action::Action;
use super::event::Event;
use ratatui::layout::Rect;

/// The core Component trait for implementers.
///
/// Components hosted by a [`Router`](crate::Router) differ from a plain
/// single-view app in a few ways:
///
/// - `init` runs every time the component (re)gains control, not once.
/// - While another component is active this one receives no events.
/// - An event produced by an [`Action`] goes to whichever component is active
///   when it resolves, regardless of who returned the action.
/// - A resumed component is the same value that was pushed over, with its
///   state intact; only `init` is called again.
pub trait Component: Send + 'static {
    /// Called whenever the component becomes active, and whenever the host
    /// re-initializes the router. Start ticks and other recurring work here.
    fn init(&mut self) -> Option<Action> {
        None
    }

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event) -> Option<Action> {
        let _ = event;
        None
    }

    /// Render the component into the given area.
    fn render(&self, frame: &mut ratatui::Frame, area: Rect);

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
