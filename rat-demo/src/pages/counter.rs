use crossterm::event::KeyCode;
use rat_stack::{Action, Component, Event};
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Duration;

use super::size_line;

#[derive(Default)]
pub struct CounterPage {
    count: i32,
    size: Option<Size>,
    status: String,
}

impl Component for CounterPage {
    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Resize(size) => {
                self.size = Some(size);
                None
            }
            Event::Custom(message) => {
                self.status = message;
                None
            }
            Event::Key(key) if key.code == KeyCode::Char('j') => {
                self.count += 1;
                None
            }
            Event::Key(key) if key.code == KeyCode::Char('k') => {
                self.count -= 1;
                None
            }
            Event::Key(key) if key.code == KeyCode::Char('w') => {
                self.status = "Working...".to_string();
                // Lands on whichever page is active when it finishes.
                Some(Action::task(async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    Some(Event::custom("Background work finished"))
                }))
            }
            Event::Key(key) if key.code == KeyCode::Esc => Some(Action::pop([Event::custom(
                format!("counter closed at {}", self.count),
            )])),
            Event::Key(key) if key.code == KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let text = vec![
            Line::from(format!("Counter: {}", self.count)),
            Line::from(""),
            Line::from(size_line(self.size)),
            Line::from(self.status.as_str()),
            Line::from(""),
            Line::from("j/k change  w background work  Esc back  q quit"),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().title(" Counter ").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}
