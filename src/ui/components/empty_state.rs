//! Empty state components

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

use crate::i18n::Locale;

/// Centered message with an optional gray hint below it
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}

/// Empty post list
pub fn no_posts_state(locale: Locale) -> Paragraph<'static> {
    match locale {
        Locale::Ru => empty_state("Посты не найдены", Some("[f] фильтр  [r] обновить")),
        Locale::En => empty_state("No posts found", Some("[f] filter  [r] refresh")),
    }
}
