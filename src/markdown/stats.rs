//! Markdown document statistics

use super::{HEADING_REGEX, IMAGE_REGEX, LINK_REGEX, is_image_tail};

/// Summary counters for a Markdown document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkdownStats {
    /// Length in chars
    pub characters: usize,
    /// Whitespace-separated words
    pub words: usize,
    /// `'\n'`-separated lines (a trailing newline adds an empty line)
    pub lines: usize,
    /// ATX headings (`#`, `##`, ... followed by whitespace)
    pub headings: usize,
    /// `[label](target)` links, image tails excluded
    pub links: usize,
    /// `![label](target)` images
    pub images: usize,
}

/// Compute statistics for `text`
///
/// Empty input yields all-zero counters (including `lines`).
pub fn markdown_stats(text: &str) -> MarkdownStats {
    if text.is_empty() {
        return MarkdownStats::default();
    }

    let links = LINK_REGEX
        .find_iter(text)
        .filter(|m| !is_image_tail(text, m.start()))
        .count();

    MarkdownStats {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        lines: text.split('\n').count(),
        headings: HEADING_REGEX.find_iter(text).count(),
        links,
        images: IMAGE_REGEX.find_iter(text).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(markdown_stats(""), MarkdownStats::default());
    }

    #[test]
    fn test_whitespace_only_counts_lines_not_words() {
        let stats = markdown_stats("  \n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.characters, 4);
    }

    #[test]
    fn test_characters_are_chars_not_bytes() {
        assert_eq!(markdown_stats("Привет").characters, 6);
    }

    #[test]
    fn test_headings_need_whitespace_after_hashes() {
        let stats = markdown_stats("# One\n#Two\n### Three\n text # not");
        assert_eq!(stats.headings, 2);
    }
}
