//! Status bar
//!
//! Displays connection status, room, and the SNR readout.

use linkscope_app::{App, ConnectionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let style = match app.connection_state() {
        ConnectionState::Disconnected => Style::default().fg(Color::Red),
        ConnectionState::Connecting => Style::default().fg(Color::Yellow),
        ConnectionState::Connected { .. } => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        },
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(app.status(), style),
        Span::styled(details(app), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Room, role, SNR, and password state after the connection status.
fn details(app: &App) -> String {
    let room = app.room().unwrap_or("-");
    let password = if app.password().is_empty() { "unset" } else { "set" };
    let mut text = format!(
        " | Room: {room} | Role: {} | SNR: {} | Password: {password}",
        app.role().label(),
        app.snr_display()
    );
    if app.pending_decrypts() > 0 {
        text.push_str(&format!(" | Decrypting: {}", app.pending_decrypts()));
    }
    text
}

#[cfg(test)]
mod tests {
    use linkscope_app::AppEvent;
    use linkscope_proto::{Inbound, Role};

    use super::*;

    #[test]
    fn details_line() {
        let mut app = App::new(Role::Sender);
        app.join("lab");
        app.handle(AppEvent::Inbound(Inbound::Joined { room: "lab".into(), role: Role::Sender, snr: Some(12.0) }));
        app.set_password("x");

        insta::assert_snapshot!(details(&app), @" | Room: lab | Role: TX | SNR: 12 dB | Password: set");
    }
}
