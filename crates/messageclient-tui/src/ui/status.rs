//! Status bar
//!
//! Connection status and the latest diagnostic.

use messageclient_app::{App, ConnectionState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        ConnectionState::Connected { address } => Span::styled(
            format!("Connected to {address}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Closed => {
            Span::styled("Connection closed", Style::default().fg(Color::Yellow))
        },
    };

    let diagnostic =
        app.status_message().map_or_else(String::new, |message| format!(" | {message}"));

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(diagnostic, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
