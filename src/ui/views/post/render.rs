//! Post View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{PostView, TABS};
use crate::i18n::Locale;
use crate::model::{Notification, Post, TextVariant, format_timestamp, overflow_note};
use crate::ui::widgets::render_markdown_panel;
use crate::ui::{components, symbols, theme};

struct FieldLabels {
    source: &'static str,
    target: &'static str,
    created: &'static str,
    classification: &'static str,
    scheduled: &'static str,
    published: &'static str,
    notes: &'static str,
    media: &'static str,
    no_suggestion: &'static str,
}

fn field_labels(locale: Locale) -> FieldLabels {
    match locale {
        Locale::Ru => FieldLabels {
            source: "Источник",
            target: "Канал",
            created: "Создан",
            classification: "Классификация",
            scheduled: "Запланирован на",
            published: "Опубликован",
            notes: "Заметки",
            media: "Медиа",
            no_suggestion: "Нет улучшенного текста. Нажмите [i], чтобы улучшить текст с помощью ИИ.",
        },
        Locale::En => FieldLabels {
            source: "Source",
            target: "Channel",
            created: "Created",
            classification: "Classification",
            scheduled: "Scheduled for",
            published: "Published",
            notes: "Notes",
            media: "Media",
            no_suggestion: "No improved text yet. Press [i] to improve the text with AI.",
        },
    }
}

fn field(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(theme::post_view::FIELD_LABEL),
        ),
        Span::styled(value, Style::default().fg(theme::post_view::FIELD_VALUE)),
        Span::raw("   "),
    ]
}

/// Metadata header lines
pub(super) fn build_metadata_lines(post: &Post, locale: Locale) -> Vec<Line<'static>> {
    let l = field_labels(locale);

    let mut first = vec![
        Span::styled(
            format!("#{} ", post.id),
            Style::default().fg(theme::posts_view::POST_ID).bold(),
        ),
        Span::styled(
            format!(" {} ", post.status.label(locale)),
            Style::default()
                .fg(theme::post_view::ACTIVE_TAB)
                .bg(theme::status_color(&post.status)),
        ),
        Span::raw("   "),
    ];
    first.extend(field(l.created, format_timestamp(&post.created_at)));

    let target = post
        .target_channel
        .as_ref()
        .map(|c| c.display_name())
        .or_else(|| post.target_channel_id.map(|id| format!("#{}", id)))
        .unwrap_or_else(|| symbols::empty::NONE.to_string());
    let mut second = field(
        l.source,
        post.source_name().unwrap_or(symbols::empty::NONE).to_string(),
    );
    second.extend(field(l.target, target));

    let mut lines = vec![Line::from(first), Line::from(second)];

    let mut third = Vec::new();
    if let Some(result) = post.llm_classification_result.as_deref() {
        let value = match post.llm_classification_confidence {
            Some(confidence) => format!("{} ({}%)", result, confidence),
            None => result.to_string(),
        };
        third.extend(field(l.classification, value));
    }
    if let Some(at) = post.scheduled_at.as_deref() {
        third.extend(field(l.scheduled, format_timestamp(at)));
    }
    if let Some(at) = post.published_at.as_deref() {
        third.extend(field(l.published, format_timestamp(at)));
    }
    if !third.is_empty() {
        lines.push(Line::from(third));
    }

    if let Some(notes) = post.admin_notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(Line::from(field(l.notes, notes.to_string())));
    }

    lines
}

/// Tab bar: active tab highlighted in its own color
fn build_tab_line(active: TextVariant, locale: Locale) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tab) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {}. {} ", i + 1, tab.label(locale));
        let color = theme::variant_color(*tab);
        spans.push(if *tab == active {
            Span::styled(
                label,
                Style::default().fg(theme::post_view::ACTIVE_TAB).bg(color).bold(),
            )
        } else {
            Span::styled(label, Style::default().fg(color))
        });
    }
    Line::from(spans)
}

/// Media summary lines: gallery items and overflow note
pub(super) fn build_media_lines(post: &Post, media_base: &str, locale: Locale) -> Vec<Line<'static>> {
    let Some(media) = post.original_media.as_ref() else {
        return Vec::new();
    };
    let (shown, hidden) = media.gallery();

    let mut lines: Vec<Line<'static>> = shown
        .iter()
        .map(|item| {
            let marker = if item.is_video() {
                symbols::markers::VIDEO
            } else {
                symbols::markers::FILE
            };
            let url = item
                .url(media_base)
                .unwrap_or_else(|| symbols::empty::NONE.to_string());
            Line::from(vec![
                Span::styled(
                    format!("{} {} ", marker, item.kind.label(locale)),
                    Style::default().fg(theme::posts_view::MARKER),
                ),
                Span::raw(url),
            ])
        })
        .collect();

    if hidden > 0 {
        lines.push(Line::from(overflow_note(media.items().len(), locale)).dark_gray());
    }
    lines
}

impl PostView {
    /// Render metadata, the current text tab, the lint panel and media
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        locale: Locale,
        media_base: &str,
    ) {
        let title = Line::from(format!(" Post #{} ", self.post.id))
            .bold()
            .cyan()
            .centered();
        let block = components::view_block(title, area, notification);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let metadata = build_metadata_lines(&self.post, locale);
        let [meta_area, tabs_area, body_area] = Layout::vertical([
            Constraint::Length(metadata.len() as u16),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(metadata), meta_area);
        frame.render_widget(Paragraph::new(build_tab_line(self.tab, locale)), tabs_area);

        let [text_area, side_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);

        self.render_text(frame, text_area, locale);

        let media = build_media_lines(&self.post, media_base, locale);
        if media.is_empty() {
            render_markdown_panel(frame, side_area, self.current_text(), locale);
        } else {
            let media_height = (media.len() as u16 + 2).min(side_area.height / 2);
            let [lint_area, media_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(media_height)])
                    .areas(side_area);
            render_markdown_panel(frame, lint_area, self.current_text(), locale);
            let title = Line::from(format!(" {} ", field_labels(locale).media)).bold();
            frame.render_widget(
                Paragraph::new(media).block(components::bordered_block(title)),
                media_area,
            );
        }
    }

    fn render_text(&self, frame: &mut Frame, area: Rect, locale: Locale) {
        let title = Line::from(format!(" {} ", self.tab.label(locale))).bold();
        let block = components::colored_block(title, theme::variant_color(self.tab));

        let text = self.current_text();
        let paragraph = if text.is_empty() {
            let placeholder = if self.tab == TextVariant::Improved {
                field_labels(locale).no_suggestion
            } else {
                symbols::empty::NO_TEXT
            };
            Paragraph::new(Line::from(placeholder).dark_gray())
        } else {
            Paragraph::new(text.to_string())
        };

        frame.render_widget(
            paragraph
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{channel, sample_post};
    use crate::model::{MediaGroup, MediaItem, MediaKind, OriginalMedia};

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_metadata_shows_channel_and_classification() {
        let mut post = sample_post(3);
        post.target_channel = Some(channel(2, "Main"));
        post.llm_classification_result = Some("news".to_string());
        post.llm_classification_confidence = Some(87);
        post.admin_notes = Some("check source".to_string());

        let lines = text(&build_metadata_lines(&post, Locale::En));
        assert!(lines[0].starts_with("#3  Pending "));
        assert!(lines[1].contains("Channel: Main"));
        assert!(lines[2].contains("Classification: news (87%)"));
        assert!(lines[3].contains("Notes: check source"));
    }

    #[test]
    fn test_metadata_placeholders() {
        let mut post = sample_post(3);
        post.source_channel_id = None;
        let lines = text(&build_metadata_lines(&post, Locale::Ru));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Канал: —"));
    }

    #[test]
    fn test_media_lines_truncate_gallery() {
        let items: Vec<MediaItem> = (0..6)
            .map(|i| MediaItem {
                kind: MediaKind::Photo,
                file_path: Some(format!("media/p{}.jpg", i)),
                ..MediaItem::default()
            })
            .collect();
        let mut post = sample_post(1);
        post.original_media = Some(OriginalMedia::Group(MediaGroup {
            kind: Some("media_group".to_string()),
            media_list: items,
        }));

        let lines = text(&build_media_lines(&post, "http://cdn", Locale::En));
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("http://cdn/api/media/p0.jpg"));
        assert_eq!(lines[4], "Total media files: 6");
    }

    #[test]
    fn test_no_media_no_lines() {
        assert!(build_media_lines(&sample_post(1), "http://cdn", Locale::En).is_empty());
    }
}
