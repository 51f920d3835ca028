//! Markdown validation

use crate::i18n::Locale;

use super::{
    IMAGE_REGEX, Issue, IssueKind, LINK_REGEX, MAX_LINE_LENGTH, Severity, ValidationResult,
    is_image_tail, is_valid_target,
};

const BOLD: &str = "**";
const FENCE: &str = "```";

/// Validate `text` with Russian messages
pub fn validate_markdown(text: &str) -> ValidationResult {
    validate_markdown_in(text, Locale::default())
}

/// Validate `text`, producing messages in `locale`
///
/// Pure: never panics and never fails; malformed input only yields more
/// findings.
pub fn validate_markdown_in(text: &str, locale: Locale) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult {
            is_valid: true,
            ..ValidationResult::default()
        };
    }

    let mut findings = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        check_line(line, index + 1, locale, &mut findings);
    }

    if text.matches(FENCE).count() % 2 != 0 {
        let last_line = text.split('\n').count();
        findings.push(Issue::new(last_line, 1, IssueKind::UnclosedCodeBlock, locale));
    }

    let (errors, warnings): (Vec<Issue>, Vec<Issue>) = findings
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_line(line: &str, line_no: usize, locale: Locale, out: &mut Vec<Issue>) {
    let chars: Vec<char> = line.chars().collect();

    // Delimiter parity
    if line.matches(BOLD).count() % 2 != 0 {
        let column = last_column(line, line.rfind(BOLD));
        out.push(Issue::new(line_no, column, IssueKind::UnclosedBold, locale));
    }

    if lone_star_count(&chars) % 2 != 0 {
        let column = last_column(line, line.rfind('*'));
        out.push(Issue::new(line_no, column, IssueKind::UnclosedEmphasis, locale));
    }

    if chars.iter().filter(|&&c| c == '`').count() % 2 != 0 {
        let column = last_column(line, line.rfind('`'));
        out.push(Issue::new(line_no, column, IssueKind::UnclosedCode, locale));
    }

    // Link and image targets
    for caps in LINK_REGEX.captures_iter(line) {
        let (Some(whole), Some(target)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if is_image_tail(line, whole.start()) || is_valid_target(target.as_str()) {
            continue;
        }
        out.push(Issue::new(
            line_no,
            char_column(line, whole.start()),
            IssueKind::InvalidLinkUrl(target.as_str().to_string()),
            locale,
        ));
    }

    for caps in IMAGE_REGEX.captures_iter(line) {
        let (Some(whole), Some(target)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if is_valid_target(target.as_str()) {
            continue;
        }
        out.push(Issue::new(
            line_no,
            char_column(line, whole.start()),
            IssueKind::InvalidImageUrl(target.as_str().to_string()),
            locale,
        ));
    }

    if chars.len() > MAX_LINE_LENGTH {
        out.push(Issue::new(
            line_no,
            MAX_LINE_LENGTH + 1,
            IssueKind::LineTooLong,
            locale,
        ));
    }
}

/// Count `*` that have no `*` neighbour on either side
fn lone_star_count(chars: &[char]) -> usize {
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c == '*'
                && (i == 0 || chars[i - 1] != '*')
                && chars.get(i + 1).is_none_or(|&next| next != '*')
        })
        .count()
}

/// 1-based char column of a byte offset
fn char_column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count() + 1
}

fn last_column(line: &str, byte_offset: Option<usize>) -> usize {
    byte_offset.map_or(1, |offset| char_column(line, offset))
}
