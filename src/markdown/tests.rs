//! Tests for the Markdown validator

use insta::assert_snapshot;

use crate::i18n::Locale;

use super::*;

fn report(result: &ValidationResult) -> String {
    result
        .issues()
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Empty input
// =============================================================================

#[test]
fn test_empty_input_is_valid() {
    let result = validate_markdown("");
    assert!(result.is_valid);
    assert!(result.is_clean());
}

#[test]
fn test_whitespace_only_is_valid() {
    for text in [" ", "\n\n", "\t \n  "] {
        let result = validate_markdown(text);
        assert_eq!(
            result,
            ValidationResult {
                is_valid: true,
                errors: vec![],
                warnings: vec![],
            },
            "input {:?}",
            text
        );
    }
}

// =============================================================================
// Delimiter parity
// =============================================================================

#[test]
fn test_unclosed_bold() {
    let result = validate_markdown("**bold");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);

    let warning = &result.warnings[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.kind, IssueKind::UnclosedBold);
    assert_eq!(warning.line, 1);
    assert_eq!(warning.column, 1);
    assert!(warning.message.contains("жирный"));
}

#[test]
fn test_closed_bold_is_clean() {
    assert!(validate_markdown("**bold** text").is_clean());
}

#[test]
fn test_bold_column_points_at_last_pair() {
    let result = validate_markdown("**a** b **c");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].column, 9);
}

#[test]
fn test_unclosed_emphasis() {
    let result = validate_markdown("an *italic word");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, IssueKind::UnclosedEmphasis);
    assert_eq!(result.warnings[0].column, 4);
}

#[test]
fn test_emphasis_ignores_stars_next_to_stars() {
    // `***` runs are treated as bold, never as emphasis
    assert!(validate_markdown("***both***").is_clean());
}

#[test]
fn test_emphasis_over_reports_arithmetic() {
    // Line-local heuristic: a lone `*` is always a marker
    let result = validate_markdown("2 * 3 = 6");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, IssueKind::UnclosedEmphasis);
}

#[test]
fn test_emphasis_column_uses_last_star_of_any_kind() {
    // Lone star at col 1, last star overall is the bold pair at the end
    let result = validate_markdown("*a **b**");
    let warning = result
        .warnings
        .iter()
        .find(|w| w.kind == IssueKind::UnclosedEmphasis)
        .expect("emphasis warning");
    assert_eq!(warning.column, 8);
}

#[test]
fn test_unclosed_inline_code() {
    let result = validate_markdown("run `cargo");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, IssueKind::UnclosedCode);
    assert_eq!(result.warnings[0].column, 5);
}

#[test]
fn test_parity_is_per_line() {
    // Each line has one marker: two warnings, not zero
    let result = validate_markdown("`a\nb`");
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.warnings[0].line, 1);
    assert_eq!(result.warnings[1].line, 2);
}

// =============================================================================
// Code fences
// =============================================================================

#[test]
fn test_unterminated_code_block() {
    let result = validate_markdown("```\ncode\n");
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.kind, IssueKind::UnclosedCodeBlock);
    assert_eq!(error.line, 3);
    assert_eq!(error.column, 1);
    assert!(error.message.contains("блок кода"));
}

#[test]
fn test_terminated_code_block_has_no_error() {
    let result = validate_markdown("```\ncode\n```");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

// =============================================================================
// Links and images
// =============================================================================

#[test]
fn test_absolute_link_is_clean() {
    assert!(validate_markdown("[link](https://example.com)").is_clean());
}

#[test]
fn test_invalid_link_target() {
    let result = validate_markdown("[link](#anchor)");
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 1);
    assert_eq!(result.errors[0].column, 1);
    assert_eq!(
        result.errors[0].kind,
        IssueKind::InvalidLinkUrl("#anchor".to_string())
    );
    assert_eq!(result.errors[0].message, "Неверный URL: #anchor");
}

#[test]
fn test_relative_heuristic_accepts_plain_words() {
    // Starts with a letter, so it "looks relative"
    let result = validate_markdown("[link](not a url)");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_relative_targets_are_accepted() {
    for target in ["/abs", "./here", "../up", "file.png", "9lives"] {
        let text = format!("[x]({})", target);
        assert!(validate_markdown(&text).is_valid, "target {}", target);
    }
}

#[test]
fn test_non_http_schemes_are_absolute_urls() {
    assert!(validate_markdown("[mail](mailto:ops@example.com)").is_valid);
    assert!(validate_markdown("[tg](tg://resolve?domain=news)").is_valid);
}

#[test]
fn test_link_column_counts_chars() {
    let result = validate_markdown("Смотри [тут](#x)");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].column, 8);
}

#[test]
fn test_every_bad_link_on_a_line_is_reported() {
    let result = validate_markdown("[a](#1) and [b](#2)");
    let columns: Vec<usize> = result.errors.iter().map(|e| e.column).collect();
    assert_eq!(columns, vec![1, 13]);
}

#[test]
fn test_invalid_image_target_reported_once() {
    let result = validate_markdown("see ![pic](#x)");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind,
        IssueKind::InvalidImageUrl("#x".to_string())
    );
    assert_eq!(result.errors[0].column, 5);
    assert!(result.errors[0].message.contains("изображения"));
}

#[test]
fn test_image_with_empty_label() {
    assert!(validate_markdown("![](https://cdn.example.com/a.png)").is_clean());
    assert!(!validate_markdown("![](#bad)").is_valid);
}

// =============================================================================
// Line length
// =============================================================================

#[test]
fn test_line_of_121_chars_warns_at_column_121() {
    let line = "a".repeat(121);
    let result = validate_markdown(&line);
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, IssueKind::LineTooLong);
    assert_eq!(result.warnings[0].column, 121);
}

#[test]
fn test_line_of_120_chars_is_fine() {
    assert!(validate_markdown(&"a".repeat(120)).is_clean());
}

#[test]
fn test_line_length_counts_chars_not_bytes() {
    // 120 Cyrillic chars = 240 bytes
    assert!(validate_markdown(&"ж".repeat(120)).is_clean());
}

// =============================================================================
// Result shape
// =============================================================================

#[test]
fn test_warnings_never_affect_validity() {
    let result = validate_markdown("**a\n*b\n`c");
    assert_eq!(result.warnings.len(), 3);
    assert!(result.is_valid);
}

#[test]
fn test_validation_is_idempotent() {
    let text = "# Title\n**bold\n[x](#y)\n```";
    assert_eq!(validate_markdown(text), validate_markdown(text));
}

#[test]
fn test_english_messages() {
    let result = validate_markdown_in("**bold\n[x](#y)", Locale::En);
    assert_eq!(result.warnings[0].message, "Unclosed bold text (**)");
    assert_eq!(result.errors[0].message, "Invalid URL: #y");
}

#[test]
fn test_location_label() {
    let result = validate_markdown("**bold");
    let warning = &result.warnings[0];
    assert_eq!(warning.location_label(Locale::Ru), "Строка 1, колонка 1");
    assert_eq!(warning.location_label(Locale::En), "Line 1, column 1");
}

#[test]
fn test_report_orders_issues_by_position() {
    let result = validate_markdown("**bold *x\n`code\n[a](#b)\n```");
    assert_snapshot!(report(&result), @r"
    line 1, col 1: Незакрытый жирный текст (**)
    line 1, col 8: Незакрытый курсив (*)
    line 2, col 1: Незакрытый код (`)
    line 3, col 1: Неверный URL: #b
    line 4, col 1: Незакрытый блок кода (```)
    line 4, col 3: Незакрытый код (`)
    ");
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_stats_counts_headings_links_images() {
    let stats = markdown_stats("# Title\n[a](b) ![c](d)");
    assert_eq!(stats.headings, 1);
    assert_eq!(stats.links, 1);
    assert_eq!(stats.images, 1);
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.words, 4);
}

#[test]
fn test_stats_characters_match_char_count() {
    let text = "Привет, **мир**!\n";
    assert_eq!(markdown_stats(text).characters, text.chars().count());
}
