//! Help panel widget

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys::{self, KeyBindEntry};

/// All help lines, section by section
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Posts", keys::POSTS_KEYS);
    push_section(&mut lines, "Post", keys::POST_KEYS);
    push_section(&mut lines, "Editor", keys::EDITOR_KEYS);
    push_section(&mut lines, "Media", keys::MEDIA_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }
    lines.push(Line::from(""));
}

/// Render the key binding reference; `scroll` is clamped by the paragraph
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" postdesk - Help ").bold().white().centered();
    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
