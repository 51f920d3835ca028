//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::i18n::Locale;
use crate::keys::KeyHint;

fn hint_span(hint: &KeyHint, locale: Locale) -> Span<'static> {
    Span::styled(
        format!(" [{}] {} ", hint.key, hint.label(locale)),
        Style::default().fg(Color::Black).bg(hint.color),
    )
}

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint], locale: Locale) -> Line<'static> {
    build_status_bar_with_prefix(Vec::new(), hints, locale)
}

/// Status bar line with context spans before the hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
    locale: Locale,
) -> Line<'static> {
    let mut spans = prefix;
    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(hint_span(hint, locale));
    }
    Line::from(spans)
}

/// Bottom row of the frame, if there is room for one
pub fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render a status bar line in the bottom row
pub fn render_status_line(frame: &mut Frame, line: Line<'static>) {
    if let Some(area) = status_bar_area(frame) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
