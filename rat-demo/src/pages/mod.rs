pub mod about;
pub mod counter;
pub mod menu;

pub use about::AboutPage;
pub use counter::CounterPage;
pub use menu::Menu;

use ratatui::layout::Size;

/// Status line showing the last size a page was told about.
pub fn size_line(size: Option<Size>) -> String {
    match size {
        Some(size) => format!("Terminal: {}x{}", size.width, size.height),
        None => "Terminal: unknown".to_string(),
    }
}
