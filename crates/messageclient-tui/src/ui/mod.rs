//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod input;
mod status;
mod transcript;

use messageclient_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const TRANSCRIPT_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    if !app.visible() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(TRANSCRIPT_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [transcript_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    transcript::render(frame, app, *transcript_area);
    input::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}
