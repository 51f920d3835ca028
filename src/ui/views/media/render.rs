//! Media View rendering
//!
//! Terminals cannot show the files themselves; each item is listed with
//! its kind and download URL.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::MediaView;
use crate::i18n::Locale;
use crate::model::{MediaItem, Notification, overflow_note};
use crate::ui::{components, symbols, theme};

fn gallery_line(item: &MediaItem, base_url: &str, selected: bool, locale: Locale) -> Line<'static> {
    let marker = if item.is_video() {
        symbols::markers::VIDEO
    } else {
        symbols::markers::FILE
    };
    let url = item
        .url(base_url)
        .unwrap_or_else(|| symbols::empty::NONE.to_string());

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {:<9}", marker, item.kind.label(locale)),
            Style::default().fg(theme::posts_view::MARKER),
        ),
        Span::raw(url),
    ]);
    if selected {
        line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}

/// Detail lines for the fullscreen item
pub(super) fn detail_lines(item: &MediaItem, base_url: &str, locale: Locale) -> Vec<Line<'static>> {
    let (kind, path, url) = match locale {
        Locale::Ru => ("Тип", "Путь", "Ссылка"),
        Locale::En => ("Kind", "Path", "URL"),
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", kind), Style::default().fg(theme::post_view::FIELD_LABEL)),
            Span::raw(item.kind.label(locale)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", path), Style::default().fg(theme::post_view::FIELD_LABEL)),
            Span::raw(item.media_path().unwrap_or(symbols::empty::NONE).to_string()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", url), Style::default().fg(theme::post_view::FIELD_LABEL)),
            Span::raw(
                item.url(base_url)
                    .unwrap_or_else(|| symbols::empty::NONE.to_string()),
            ),
        ]),
    ];
    if let Some(file_id) = item.file_id.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("file_id: ", Style::default().fg(theme::post_view::FIELD_LABEL)),
            Span::raw(file_id.to_string()),
        ]));
    }
    lines
}

impl MediaView {
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        locale: Locale,
    ) {
        let heading = match locale {
            Locale::Ru => "Медиа",
            Locale::En => "Media",
        };
        let title = Line::from(format!(" {} · #{} ({}) ", heading, self.post_id, self.total))
            .bold()
            .cyan()
            .centered();
        let block = components::view_block(title, area, notification);

        if self.fullscreen {
            if let Some(item) = self.selected_item() {
                let position = format!(" {}/{} ", self.selected + 1, self.items.len());
                frame.render_widget(
                    Paragraph::new(detail_lines(item, &self.base_url, locale))
                        .block(block.title_bottom(Line::from(position).right_aligned()))
                        .wrap(Wrap { trim: false }),
                    area,
                );
                return;
            }
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| gallery_line(item, &self.base_url, idx == self.selected, locale))
            .collect();
        if self.hidden() > 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(format!(" {}", overflow_note(self.total, locale))).dark_gray());
        }

        let [list_area, _] =
            Layout::vertical([Constraint::Length(lines.len() as u16), Constraint::Min(0)])
                .areas(inner);
        frame.render_widget(Paragraph::new(lines), list_area);
    }
}
