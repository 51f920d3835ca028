//! Notification banner widget
//!
//! Shown above the status bar in views without a title bar of their own
//! (editor, fullscreen media).

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components::notification_style;

/// Render a notification banner just above the status bar
pub fn render_notification_banner(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };

    frame.render_widget(
        Paragraph::new(build_notification_line(notification)),
        banner_area,
    );
}

fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);
    Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(color),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_line_labels() {
        let line = build_notification_line(&Notification::success("Пост обновлен"));
        assert_eq!(line.spans[0].content, " Success: ");
        assert_eq!(line.spans[1].content, " Пост обновлен ");

        let line = build_notification_line(&Notification::warning("Выберите модель ИИ"));
        assert_eq!(line.spans[0].content, " Warning: ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Yellow));
    }
}
