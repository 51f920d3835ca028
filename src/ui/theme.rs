//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::markdown::Severity;
use crate::model::{PostStatus, TextVariant};

/// Selected row colors (shared by all list views)
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

/// Colors for Posts View
pub mod posts_view {
    use super::*;

    /// Post id column
    pub const POST_ID: Color = Color::Yellow;
    /// Creation time column
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Source channel name
    pub const SOURCE: Color = Color::Cyan;
    /// Media / manual markers
    pub const MARKER: Color = Color::Magenta;
    /// Placeholder for posts without text
    pub const EMPTY_LABEL: Color = Color::DarkGray;
}

/// Colors for Post View metadata
pub mod post_view {
    use super::*;

    pub const FIELD_LABEL: Color = Color::DarkGray;
    pub const FIELD_VALUE: Color = Color::White;
    pub const ACTIVE_TAB: Color = Color::Black;
}

/// Color for a post status badge
pub fn status_color(status: &PostStatus) -> Color {
    match status {
        PostStatus::Pending => Color::Yellow,
        PostStatus::Processed => Color::Blue,
        PostStatus::Approved => Color::Green,
        PostStatus::Rejected => Color::Red,
        PostStatus::Scheduled => Color::Magenta,
        PostStatus::Publishing => Color::Cyan,
        PostStatus::Published => Color::Gray,
        PostStatus::Unknown(_) => Color::DarkGray,
    }
}

/// Border color of a text tab
pub fn variant_color(variant: TextVariant) -> Color {
    match variant {
        TextVariant::Original => Color::Blue,
        TextVariant::Processed => Color::Green,
        TextVariant::Improved => Color::Magenta,
    }
}

/// Color of a lint finding
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}
