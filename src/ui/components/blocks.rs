//! Block components for UI rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::model::Notification;

use super::build_notification_title;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block with a colored border
pub fn colored_block<'a>(title: Line<'a>, border: Color) -> Block<'a> {
    bordered_block(title).border_style(Style::default().fg(border))
}

/// Bordered block whose top border also carries a notification (right side)
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let block = bordered_block(title);
    match notification {
        Some(line) => block.title_top(line.right_aligned()),
        None => block,
    }
}

/// Title block for a view, with the live notification squeezed into the
/// remaining border width
pub fn view_block<'a>(
    title: Line<'a>,
    area: Rect,
    notification: Option<&Notification>,
) -> Block<'a> {
    let available = area.width.saturating_sub(title.width() as u16 + 4) as usize;
    let notif_line = notification
        .filter(|n| !n.is_expired())
        .map(|n| build_notification_title(n, Some(available)))
        .filter(|line| !line.spans.is_empty());
    bordered_block_with_notification(title, notif_line)
}
