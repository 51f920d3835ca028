//! Markdown lint and statistics
//!
//! A single-pass, line-local checker for the Markdown flavour Telegram posts
//! are written in. It is NOT a Markdown parser:
//!
//! - Bold (`**`), emphasis (`*`) and inline code (`` ` ``) are checked by
//!   counting delimiters per line and flagging odd counts. Emphasis only
//!   counts a `*` with no `*` directly before or after it, so nested or
//!   escaped markers are over- and under-reported. Callers rely on these
//!   approximate semantics; do not replace them with a real tokenizer.
//! - Link and image targets are accepted when they parse as an absolute URL
//!   or merely *look* relative (start with `/`, `./`, `../` or an
//!   alphanumeric character). The relative check is intentionally permissive.
//! - Fenced code blocks are checked document-wide by fence parity.
//!
//! Lengths and columns are counted in `char`s, columns and lines are 1-based.

mod stats;
#[cfg(test)]
mod tests;
mod validate;

pub use stats::{MarkdownStats, markdown_stats};
pub use validate::{validate_markdown, validate_markdown_in};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::Locale;

/// Lines longer than this (in chars) get a warning
pub const MAX_LINE_LENGTH: usize = 120;

/// `[label](target)`
pub(crate) static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex")
});

/// `![label](target)`, label may be empty
pub(crate) static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex")
});

/// ATX heading: one or more `#` at line start followed by whitespace
pub(crate) static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s").expect("Invalid heading regex"));

/// Targets that look like a relative path
static RELATIVE_TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(/|\./|\.\./|[a-zA-Z0-9])").expect("Invalid relative target regex")
});

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Makes the document invalid
    Error,
    /// Informational, never affects validity
    Warning,
}

/// What a finding is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Odd number of `**` on a line
    UnclosedBold,
    /// Odd number of lone `*` on a line
    UnclosedEmphasis,
    /// Odd number of backticks on a line
    UnclosedCode,
    /// Link target is neither an absolute URL nor relative-looking
    InvalidLinkUrl(String),
    /// Image target is neither an absolute URL nor relative-looking
    InvalidImageUrl(String),
    /// Line exceeds [`MAX_LINE_LENGTH`]
    LineTooLong,
    /// Odd number of ``` fences in the document
    UnclosedCodeBlock,
}

impl IssueKind {
    /// Severity attached to this kind of finding
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::InvalidLinkUrl(_)
            | IssueKind::InvalidImageUrl(_)
            | IssueKind::UnclosedCodeBlock => Severity::Error,
            IssueKind::UnclosedBold
            | IssueKind::UnclosedEmphasis
            | IssueKind::UnclosedCode
            | IssueKind::LineTooLong => Severity::Warning,
        }
    }

    /// Localized message text
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (IssueKind::UnclosedBold, Locale::Ru) => "Незакрытый жирный текст (**)".to_string(),
            (IssueKind::UnclosedBold, Locale::En) => "Unclosed bold text (**)".to_string(),
            (IssueKind::UnclosedEmphasis, Locale::Ru) => "Незакрытый курсив (*)".to_string(),
            (IssueKind::UnclosedEmphasis, Locale::En) => "Unclosed italic text (*)".to_string(),
            (IssueKind::UnclosedCode, Locale::Ru) => "Незакрытый код (`)".to_string(),
            (IssueKind::UnclosedCode, Locale::En) => "Unclosed inline code (`)".to_string(),
            (IssueKind::InvalidLinkUrl(url), Locale::Ru) => format!("Неверный URL: {}", url),
            (IssueKind::InvalidLinkUrl(url), Locale::En) => format!("Invalid URL: {}", url),
            (IssueKind::InvalidImageUrl(url), Locale::Ru) => {
                format!("Неверный URL изображения: {}", url)
            }
            (IssueKind::InvalidImageUrl(url), Locale::En) => format!("Invalid image URL: {}", url),
            (IssueKind::LineTooLong, Locale::Ru) => {
                format!("Строка слишком длинная (>{} символов)", MAX_LINE_LENGTH)
            }
            (IssueKind::LineTooLong, Locale::En) => {
                format!("Line too long (>{} characters)", MAX_LINE_LENGTH)
            }
            (IssueKind::UnclosedCodeBlock, Locale::Ru) => "Незакрытый блок кода (```)".to_string(),
            (IssueKind::UnclosedCodeBlock, Locale::En) => "Unclosed code block (```)".to_string(),
        }
    }
}

/// A single validation finding with its source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based line number
    pub line: usize,
    /// 1-based column (in chars)
    pub column: usize,
    /// Localized message
    pub message: String,
    pub severity: Severity,
    pub kind: IssueKind,
}

impl Issue {
    pub(crate) fn new(line: usize, column: usize, kind: IssueKind, locale: Locale) -> Self {
        Self {
            line,
            column,
            message: kind.message(locale),
            severity: kind.severity(),
            kind,
        }
    }

    /// "Строка 3, колонка 7" / "Line 3, column 7"
    pub fn location_label(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => format!("Строка {}, колонка {}", self.line, self.column),
            Locale::En => format!("Line {}, column {}", self.line, self.column),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}: {}", self.line, self.column, self.message)
    }
}

/// Outcome of [`validate_markdown`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationResult {
    /// All findings (errors and warnings) ordered by position
    ///
    /// At the same position errors come first.
    pub fn issues(&self) -> Vec<&Issue> {
        let mut all: Vec<&Issue> = self.errors.iter().chain(self.warnings.iter()).collect();
        all.sort_by_key(|issue| (issue.line, issue.column));
        all
    }

    /// True when there is nothing to report at all
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Accept absolute URLs and anything that looks like a relative path
pub(crate) fn is_valid_target(target: &str) -> bool {
    reqwest::Url::parse(target).is_ok() || RELATIVE_TARGET_REGEX.is_match(target)
}

/// Link-regex matches directly preceded by `!` belong to an image
pub(crate) fn is_image_tail(text: &str, match_start: usize) -> bool {
    text[..match_start].ends_with('!')
}
