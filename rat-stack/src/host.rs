//! The event loop core, without a terminal.
//!
//! [`Host`] owns a [`Router`], a queue of pending events and the tasks
//! spawned for deferred actions. Events produced by actions land on the same
//! queue as input events, so they reach whichever component is active when
//! they are dequeued.

use crate::component::{Action, Event};
use crate::error::Result;
use crate::router::Router;
use crate::task::TaskTracker;
use tokio::sync::mpsc;

/// Whether the loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Feeds events into a host's queue from elsewhere (input readers, timers).
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<Event>);

impl EventSender {
    /// Queue an event. Returns `false` once the host is gone.
    pub fn send(&self, event: Event) -> bool {
        self.0.send(event).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }
}

pub struct Host {
    router: Router,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    tasks: TaskTracker,
}

impl Host {
    pub fn new(router: Router) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            router,
            tx,
            rx,
            tasks: TaskTracker::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.tx.clone())
    }

    /// Initialize the active component and schedule whatever it returns.
    pub fn start(&mut self) -> Flow {
        let action = self.router.init();
        self.schedule(action)
    }

    /// Hand one event to the router and schedule the resulting action.
    ///
    /// Router errors are returned as is; a stack underflow is fatal.
    pub fn dispatch(&mut self, event: Event) -> Result<Flow> {
        let kind = event.kind();
        let action = self.router.handle_event(event).inspect_err(|err| {
            tracing::error!(kind, error = %err, "dispatch failed");
        })?;
        Ok(self.schedule(action))
    }

    /// Schedule an action.
    ///
    /// Messages are queued right away, tasks are spawned on the current
    /// tokio runtime and queue their event when they finish. Every member of
    /// a batch is scheduled, in order, even if one of them asks to quit.
    pub fn schedule(&mut self, action: Option<Action>) -> Flow {
        let Some(action) = action else {
            return Flow::Continue;
        };

        match action {
            Action::Message(event) => {
                let _ = self.tx.send(event);
                Flow::Continue
            }
            Action::Task(future) => {
                let tx = self.tx.clone();
                self.tasks.spawn(async move {
                    if let Some(event) = future.await {
                        let _ = tx.send(event);
                    }
                });
                tracing::debug!(pending = self.tasks.active_count(), "spawned action task");
                Flow::Continue
            }
            Action::Batch(actions) => {
                let mut flow = Flow::Continue;
                for action in actions {
                    if self.schedule(Some(action)) == Flow::Quit {
                        flow = Flow::Quit;
                    }
                }
                flow
            }
            Action::Quit => Flow::Quit,
        }
    }

    /// Wait for the next queued event.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<Event> {
        self.rx.try_recv().ok()
    }

    /// Dispatch everything already queued, including events queued while
    /// doing so. Stops early on quit.
    pub fn process_pending(&mut self) -> Result<Flow> {
        while let Some(event) = self.try_next_event() {
            if self.dispatch(event)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Start, then dispatch events as they arrive until a component quits.
    pub async fn run(&mut self) -> Result<()> {
        if self.start() == Flow::Quit {
            return Ok(());
        }
        while let Some(event) = self.next_event().await {
            if self.dispatch(event)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Number of action tasks still running.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.active_count()
    }

    /// Abort every action task still running.
    pub fn shutdown(&mut self) {
        let pending = self.tasks.active_count();
        if pending > 0 {
            tracing::debug!(pending, "aborting action tasks");
        }
        self.tasks.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, PopEvent, PushEvent};
    use crate::testing::{Probe, Seen};
    use crate::Error;
    use ratatui::layout::Rect;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_start_schedules_init_action() {
        let (home, journal) = Probe::new("home");
        let home = home.init_with(|| Action::message(Event::custom("ready")));
        let mut host = Host::new(Router::new(home));

        assert_eq!(host.start(), Flow::Continue);
        assert_eq!(host.process_pending().unwrap(), Flow::Continue);

        assert_eq!(journal.entries(), vec![Seen::Init, Seen::Custom("ready".into())]);
    }

    #[tokio::test]
    async fn test_message_is_queued_not_inlined() {
        let (home, journal) = Probe::new("home");
        let home = home.reply_with(Action::message(Event::custom("echo")));
        let mut host = Host::new(Router::new(home));

        host.dispatch(Event::custom("ping")).unwrap();
        assert_eq!(journal.entries(), vec![Seen::Custom("ping".into())]);

        let queued = host.try_next_event();
        assert!(matches!(queued, Some(Event::Custom(ref s)) if s == "echo"));
    }

    #[tokio::test]
    async fn test_push_and_pop_actions_round_trip() {
        let (home, home_journal) = Probe::new("home");
        let (child, _) = Probe::new("child");
        let child = child.reply_with(Action::pop([Event::custom("result")]));
        let home = home.reply_with(Action::push(child));
        let mut host = Host::new(Router::new(home));

        host.dispatch(Event::custom("open")).unwrap();
        host.process_pending().unwrap();
        assert_eq!(host.router().depth(), 1);

        host.dispatch(Event::custom("close")).unwrap();
        host.process_pending().unwrap();
        assert_eq!(host.router().depth(), 0);

        assert_eq!(
            home_journal.entries(),
            vec![
                Seen::Custom("open".into()),
                Seen::Init,
                Seen::Custom("result".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_task_result_goes_to_current_component() {
        let (done_tx, done_rx) = oneshot::channel::<String>();
        let (home, home_journal) = Probe::new("home");
        let home = home.reply_with(Action::task(async move {
            done_rx.await.ok().map(Event::Custom)
        }));
        let (child, child_journal) = Probe::new("child");
        let mut host = Host::new(Router::new(home));

        host.dispatch(Event::custom("start")).unwrap();
        assert_eq!(host.pending_tasks(), 1);

        host.dispatch(PushEvent::new(child).into()).unwrap();
        done_tx.send("done".to_string()).unwrap();

        let event = host.next_event().await.unwrap();
        host.dispatch(event).unwrap();

        assert_eq!(home_journal.entries(), vec![Seen::Custom("start".into())]);
        assert_eq!(child_journal.entries(), vec![Seen::Init, Seen::Custom("done".into())]);
    }

    #[tokio::test]
    async fn test_quit_inside_batch() {
        let mut host = Host::new(Router::new(Probe::new("home").0));

        let flow = host.schedule(Action::batch([
            Some(Action::message(Event::custom("still queued"))),
            Some(Action::Quit),
        ]));

        assert_eq!(flow, Flow::Quit);
        assert!(host.try_next_event().is_some());
    }

    #[tokio::test]
    async fn test_underflow_is_returned() {
        let mut host = Host::new(Router::new(Probe::new("home").0));
        host.sender().send(PopEvent::default().into());

        let result = host.process_pending();
        assert!(matches!(result, Err(Error::StackUnderflow)));
    }

    #[tokio::test]
    async fn test_run_stops_on_quit() {
        struct Quitter;

        impl Component for Quitter {
            fn init(&mut self) -> Option<Action> {
                Some(Action::message(Event::custom("bye")))
            }

            fn handle_event(&mut self, _event: Event) -> Option<Action> {
                Some(Action::Quit)
            }

            fn render(&self, _frame: &mut ratatui::Frame, _area: Rect) {}
        }

        let mut host = Host::new(Router::new(Quitter));
        host.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_aborts_tasks() {
        let (home, _) = Probe::new("home");
        let home = home.reply_with(Action::task(std::future::pending()));
        let mut host = Host::new(Router::new(home));

        host.dispatch(Event::custom("hang")).unwrap();
        assert_eq!(host.pending_tasks(), 1);

        host.shutdown();
        assert_eq!(host.pending_tasks(), 0);
    }

    #[tokio::test]
    async fn test_sender_feeds_same_queue() {
        let (home, journal) = Probe::new("home");
        let mut host = Host::new(Router::new(home));
        let sender = host.sender();

        assert!(sender.send(Event::resize(80, 24)));
        host.process_pending().unwrap();

        assert_eq!(host.router().last_resize(), Some(ratatui::layout::Size::new(80, 24)));
        assert_eq!(journal.entries().len(), 1);

        drop(host);
        assert!(sender.is_closed());
    }
}
