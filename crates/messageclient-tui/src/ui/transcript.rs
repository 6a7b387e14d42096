//! Transcript view
//!
//! Append-only text region with the newest content pinned into view.

use messageclient_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

const BORDER_SIZE: u16 = 2;

/// Render the transcript area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" MessageClient ");

    let items: Vec<ListItem> = app
        .transcript()
        .as_str()
        .lines()
        .map(|line| ListItem::new(Line::from(line.to_owned())))
        .collect();

    // Keep the tail visible: drop lines that scrolled past the top.
    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
