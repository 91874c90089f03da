//! Log panel
//!
//! Displays log entries, newest at the top.

use linkscope_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BORDER_SIZE: u16 = 2;

/// Render the log panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Log ");

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let items: Vec<ListItem> = app
        .log_panel()
        .entries()
        .take(visible_height)
        .map(|entry| ListItem::new(Line::from(Span::styled(entry.to_owned(), style_for(entry)))))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn style_for(entry: &str) -> Style {
    if entry.contains("AUTH FAIL") || entry.starts_with("Error") || entry.contains("corrupt") {
        Style::default().fg(Color::Red)
    } else if entry.starts_with("Decrypt:") {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}
