//! Frame preview panel
//!
//! Displays the formatted telemetry of the last frame.

use linkscope_app::PreviewPanel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: usize = 14;

/// Render a preview panel.
pub fn render(frame: &mut Frame, title: &str, panel: &PreviewPanel, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(title.to_owned());

    let headline = Line::from(vec![
        Span::raw("Scheme: "),
        Span::styled(panel.scheme.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(panel.snr.clone()),
        Span::raw("  "),
        Span::raw(panel.ber.clone()),
        Span::raw("  "),
        Span::raw(panel.fec.clone()),
    ]);

    let lines = vec![
        headline,
        field("cipher raw", &panel.cipher_raw),
        field("cipher clean", &panel.cipher_clean),
        field("cipher noisy", &panel.cipher_noisy),
        field("bits raw", &panel.bits_raw),
        field("bits clean", &panel.bits_clean),
        field("bits noisy", &panel.bits_noisy),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_owned()),
    ])
}
