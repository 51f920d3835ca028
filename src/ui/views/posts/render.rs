//! Posts View rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::PostsView;
use crate::i18n::Locale;
use crate::model::{Notification, Post, format_timestamp};
use crate::ui::{components, navigation, symbols, theme};

/// Width of the status column (chars)
const STATUS_WIDTH: usize = 13;

impl PostsView {
    /// Render the list with the notification in the title bar
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        locale: Locale,
    ) {
        let heading = match locale {
            Locale::Ru => "Посты",
            Locale::En => "Posts",
        };
        let title = Line::from(format!(
            " {} · {} ({}) ",
            heading,
            self.filter_label(locale),
            self.posts.len()
        ))
        .bold()
        .cyan()
        .centered();
        let block = components::view_block(title, area, notification);

        if self.posts.is_empty() {
            frame.render_widget(components::no_posts_state(locale).block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }
        self.scroll_offset = navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let lines: Vec<Line> = self
            .posts
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(idx, post)| build_post_line(post, idx == self.selected, locale))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One list row: id, status, created, source, markers, first text line
fn build_post_line(post: &Post, is_selected: bool, locale: Locale) -> Line<'static> {
    let status = post.status.label(locale);
    let status_cell: String = format!("{:<width$}", status, width = STATUS_WIDTH)
        .chars()
        .take(STATUS_WIDTH)
        .collect();

    let mut markers = String::new();
    if post.has_media() {
        markers.push(symbols::markers::MEDIA);
    }
    if post.is_manual {
        markers.push(symbols::markers::MANUAL);
    }

    let preview = post.preview_line();
    let preview_span = if preview.is_empty() {
        Span::styled(
            symbols::empty::NO_TEXT,
            Style::default().fg(theme::posts_view::EMPTY_LABEL),
        )
    } else {
        Span::raw(preview.to_string())
    };

    let mut line = Line::from(vec![
        Span::styled(
            format!("#{:<5}", post.id),
            Style::default().fg(theme::posts_view::POST_ID),
        ),
        Span::raw(" "),
        Span::styled(
            status_cell,
            Style::default().fg(theme::status_color(&post.status)),
        ),
        Span::raw(" "),
        Span::styled(
            format_timestamp(&post.created_at),
            Style::default().fg(theme::posts_view::TIMESTAMP),
        ),
        Span::raw("  "),
        Span::styled(
            post.source_name().unwrap_or_default().to_string(),
            Style::default().fg(theme::posts_view::SOURCE),
        ),
        Span::raw(" "),
        Span::styled(markers, Style::default().fg(theme::posts_view::MARKER)),
        Span::raw(" "),
        preview_span,
    ]);

    if is_selected {
        line = line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    line
}
