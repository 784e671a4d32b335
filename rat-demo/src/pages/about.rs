use crossterm::event::KeyCode;
use rat_stack::{Action, Component, Event};
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::size_line;

pub struct AboutPage {
    level: u32,
    size: Option<Size>,
}

impl AboutPage {
    pub fn new(level: u32) -> Self {
        Self { level, size: None }
    }
}

impl Component for AboutPage {
    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Resize(size) => {
                self.size = Some(size);
                None
            }
            Event::Key(key) if key.code == KeyCode::Char('n') => {
                Some(Action::push(AboutPage::new(self.level + 1)))
            }
            Event::Key(key) if key.code == KeyCode::Esc => Some(Action::pop(Vec::new())),
            Event::Key(key) if key.code == KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let text = vec![
            Line::from(format!("About page, level {}", self.level)),
            Line::from(""),
            Line::from("Each page is pushed onto a stack; Esc pops back to the one below."),
            Line::from("A pushed page learns the terminal size straight away:"),
            Line::from(size_line(self.size)),
            Line::from(""),
            Line::from("n push another  Esc back  q quit"),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" About ").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}
