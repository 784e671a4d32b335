//! Terminal host for a [`Router`].

use crate::component::Event;
use crate::config::AppConfig;
use crate::error::{RuntimeSnafu, TerminalSnafu};
use crate::host::{EventSender, Flow, Host};
use crate::router::Router;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Size;
use ratatui::prelude::*;
use snafu::ResultExt;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Main application handle.
///
/// # Example
/// ```ignore
/// let router = Router::new(Menu::default()).with_observer(TracingObserver);
/// Application::new().run(router)?;
/// ```
#[derive(Debug, Default)]
pub struct Application {
    config: AppConfig,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Take over the terminal and drive `router` until a component quits.
    ///
    /// The terminal is restored on every exit path. Errors from the router,
    /// such as a stack underflow, end the run and are returned here.
    pub fn run(self, router: Router) -> anyhow::Result<()> {
        let rt = Runtime::new().context(RuntimeSnafu)?;
        rt.block_on(self.run_loop(router))?;
        Ok(())
    }

    async fn run_loop(&self, router: Router) -> crate::Result<()> {
        if let Err(err) = self.setup_terminal() {
            let _ = self.restore_terminal();
            return Err(err);
        }

        let result = self.run_app_loop(router).await;
        let restored = self.restore_terminal();
        result.and(restored)
    }

    fn setup_terminal(&self) -> crate::Result<()> {
        enable_raw_mode().context(TerminalSnafu)?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context(TerminalSnafu)?;
        if self.config.mouse_capture {
            execute!(stdout, EnableMouseCapture).context(TerminalSnafu)?;
        }
        if self.config.focus_change {
            execute!(stdout, event::EnableFocusChange).context(TerminalSnafu)?;
        }
        Ok(())
    }

    fn restore_terminal(&self) -> crate::Result<()> {
        disable_raw_mode().context(TerminalSnafu)?;
        let mut stdout = stdout();
        if self.config.focus_change {
            execute!(stdout, event::DisableFocusChange).context(TerminalSnafu)?;
        }
        if self.config.mouse_capture {
            execute!(stdout, DisableMouseCapture).context(TerminalSnafu)?;
        }
        execute!(stdout, LeaveAlternateScreen, cursor::Show).context(TerminalSnafu)
    }

    async fn run_app_loop(&self, router: Router) -> crate::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        let mut host = Host::new(router);
        let sender = host.sender();
        let poll_interval = self.config.poll_interval;
        let mut reader = tokio::task::spawn_blocking(move || read_input(sender, poll_interval));

        let mut flow = host.start();
        if self.config.initial_resize && flow == Flow::Continue {
            let size = terminal.size().context(TerminalSnafu)?;
            flow = host.dispatch(Event::Resize(size))?;
        }

        while flow == Flow::Continue {
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    host.router().render(frame, area);
                })
                .context(TerminalSnafu)?;

            tokio::select! {
                event = host.next_event() => {
                    let Some(event) = event else { break };
                    flow = host.dispatch(event)?;
                }
                joined = &mut reader => {
                    match joined {
                        Ok(result) => result.context(TerminalSnafu)?,
                        Err(err) => tracing::error!(error = %err, "input reader stopped"),
                    }
                    break;
                }
            }
        }

        host.shutdown();
        Ok(())
    }
}

/// Blocking loop forwarding terminal input to the host until it goes away.
fn read_input(sender: EventSender, poll_interval: Duration) -> io::Result<()> {
    while !sender.is_closed() {
        if !event::poll(poll_interval)? {
            continue;
        }
        if let Some(event) = translate(event::read()?) {
            if !sender.send(event) {
                break;
            }
        }
    }
    Ok(())
}

/// Map a crossterm event onto an [`Event`]. Key releases and repeats are
/// dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(Size::new(w, h))),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
        _ => None,
    }
}
