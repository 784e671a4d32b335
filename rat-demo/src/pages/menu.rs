use crossterm::event::KeyCode;
use rat_stack::{Action, Component, Event};
use ratatui::layout::{Constraint, Direction, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

use super::{size_line, AboutPage, CounterPage};

const OPTIONS: [(&str, &str); 3] = [
    ("Counter", "Push a counter page; Esc pops back with a summary"),
    ("About", "Push a page that can push copies of itself"),
    ("Exit", "Quit application"),
];

#[derive(Default)]
pub struct Menu {
    selected: usize,
    size: Option<Size>,
    activations: u32,
    last_result: Option<String>,
}

impl Component for Menu {
    fn init(&mut self) -> Option<Action> {
        self.activations += 1;
        None
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Resize(size) => {
                self.size = Some(size);
                None
            }
            Event::Custom(message) => {
                self.last_result = Some(message);
                None
            }
            Event::Key(key) if key.code == KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Event::Key(key) if key.code == KeyCode::Down => {
                if self.selected < OPTIONS.len() - 1 {
                    self.selected += 1;
                }
                None
            }
            Event::Key(key) if key.code == KeyCode::Enter => match self.selected {
                0 => Some(Action::push(CounterPage::default())),
                1 => Some(Action::push(AboutPage::new(1))),
                _ => Some(Action::Quit),
            },
            Event::Key(key) if key.code == KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let items: Vec<ListItem> = OPTIONS
            .iter()
            .enumerate()
            .map(|(i, (label, description))| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{label:<10} {description}")).style(style)
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(" Main Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[0]);

        let status = vec![
            Line::from(size_line(self.size)),
            Line::from(format!(
                "Activated {} time(s). Last result: {}",
                self.activations,
                self.last_result.as_deref().unwrap_or("none")
            )),
        ];
        let footer = Paragraph::new(status).block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[1]);
    }
}
