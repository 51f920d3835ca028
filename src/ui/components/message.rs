//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Error banner line: `[white on red] Error: [/] [red] message [/]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Label and colors of a notification kind
pub(crate) fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Notification line for a title bar
///
/// With `max_width` the message is cut to fit and ends in `…`. Returns an
/// empty line when not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    const SEPARATOR: &str = " | ";

    let (label, color) = notification_style(notification.kind);
    let message = &notification.message;
    let fixed = SEPARATOR.len() + label.len() + 1;
    let full = fixed + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full > max => {
            let available = max.saturating_sub(fixed + 2);
            if available == 0 {
                return Line::default();
            }
            let cut: String = message.chars().take(available).collect();
            format!("{}… ", cut)
        }
        _ => format!("{} ", message),
    };

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}
