//! Markdown lint panel: validity badge, statistics and findings

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::i18n::Locale;
use crate::markdown::{MarkdownStats, ValidationResult, markdown_stats, validate_markdown_in};
use crate::ui::{components, theme};

struct Labels {
    valid: &'static str,
    errors: &'static str,
    warnings: &'static str,
    stats: [&'static str; 6],
    issues: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Ru => Labels {
            valid: "Валидный",
            errors: "ошибок",
            warnings: "предупреждений",
            stats: ["символов", "слов", "строк", "заголовков", "ссылок", "изображений"],
            issues: "Проблемы валидации",
        },
        Locale::En => Labels {
            valid: "Valid",
            errors: "errors",
            warnings: "warnings",
            stats: ["characters", "words", "lines", "headings", "links", "images"],
            issues: "Validation issues",
        },
    }
}

fn badge(text: String, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::Black).bg(color),
    )
}

fn stat_line(pairs: [(usize, &'static str); 3]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (value, label)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(value.to_string(), Style::default().bold()));
        spans.push(Span::styled(format!(" {}", label), Style::default().dark_gray()));
    }
    Line::from(spans)
}

/// Report lines for already computed lint results
pub fn build_markdown_report(
    result: &ValidationResult,
    stats: &MarkdownStats,
    locale: Locale,
) -> Vec<Line<'static>> {
    let l = labels(locale);

    let mut status = vec![if result.is_valid {
        badge(l.valid.to_string(), Color::Green)
    } else {
        badge(format!("{} {}", result.errors.len(), l.errors), Color::Red)
    }];
    if !result.warnings.is_empty() {
        status.push(Span::raw(" "));
        status.push(badge(
            format!("{} {}", result.warnings.len(), l.warnings),
            Color::Yellow,
        ));
    }

    let [chars, words, lines_label, headings, links, images] = l.stats;
    let mut lines = vec![
        Line::from(status),
        Line::from(""),
        stat_line([
            (stats.characters, chars),
            (stats.words, words),
            (stats.lines, lines_label),
        ]),
        stat_line([
            (stats.headings, headings),
            (stats.links, links),
            (stats.images, images),
        ]),
    ];

    let issues = result.issues();
    if !issues.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} ({})", l.issues, issues.len())).underlined());
        for issue in issues {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", issue.location_label(locale)),
                    Style::default().dark_gray(),
                ),
                Span::styled(
                    issue.message.clone(),
                    Style::default().fg(theme::severity_color(issue.severity)),
                ),
            ]));
        }
    }

    lines
}

/// Lint `text` and render the report into `area`
pub fn render_markdown_panel(frame: &mut Frame, area: Rect, text: &str, locale: Locale) {
    let result = validate_markdown_in(text, locale);
    let stats = markdown_stats(text);
    let block = components::bordered_block(Line::from(" Markdown ").bold());

    frame.render_widget(
        Paragraph::new(build_markdown_report(&result, &stats, locale))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn report(text: &str, locale: Locale) -> String {
        let result = validate_markdown_in(text, locale);
        let stats = markdown_stats(text);
        build_markdown_report(&result, &stats, locale)
            .iter()
            .map(|line| line.to_string().trim().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_clean_text_report() {
        assert_snapshot!(report("# Title\nHello [site](https://example.com)", Locale::En), @r"
        Valid

        41 characters  4 words  2 lines
        1 headings  1 links  0 images
        ");
    }

    #[test]
    fn test_report_lists_issues_in_russian() {
        assert_snapshot!(report("**bold\n[x](#anchor)", Locale::Ru), @r"
        1 ошибок   1 предупреждений

        19 символов  2 слов  2 строк
        0 заголовков  1 ссылок  0 изображений

        Проблемы валидации (2)
        Строка 1, колонка 1: Незакрытый жирный текст (**)
        Строка 2, колонка 1: Неверный URL: #anchor
        ");
    }
}
