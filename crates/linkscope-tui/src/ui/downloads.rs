//! Download list
//!
//! Displays decrypted files waiting to be saved, newest first.

use linkscope_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the download list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Downloads (/save <n> [path]) ");

    let items: Vec<ListItem> = if app.downloads().is_empty() {
        vec![ListItem::new(Line::from(Span::styled("No downloads", Style::default().fg(Color::DarkGray))))]
    } else {
        app.downloads()
            .iter()
            .enumerate()
            .map(|(i, download)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::raw(download.name.clone()),
                    Span::styled(
                        format!(" ({} bytes)", download.bytes.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
