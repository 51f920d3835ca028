//! Post model

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::channel::{SourceChannel, TargetChannel};
use super::media::OriginalMedia;
use crate::i18n::Locale;

/// Lifecycle status of a post
///
/// Unknown wire values are preserved in [`PostStatus::Unknown`] so a newer
/// backend never breaks the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    Pending,
    Processed,
    Approved,
    Rejected,
    Scheduled,
    Publishing,
    Published,
    Unknown(String),
}

impl PostStatus {
    /// Statuses the list filter cycles through (after "all")
    pub const FILTERABLE: [PostStatus; 6] = [
        PostStatus::Pending,
        PostStatus::Processed,
        PostStatus::Approved,
        PostStatus::Scheduled,
        PostStatus::Published,
        PostStatus::Rejected,
    ];

    /// Wire value
    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Pending => "pending",
            PostStatus::Processed => "processed",
            PostStatus::Approved => "approved",
            PostStatus::Rejected => "rejected",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Publishing => "publishing",
            PostStatus::Published => "published",
            PostStatus::Unknown(raw) => raw,
        }
    }

    /// Localized label
    pub fn label(&self, locale: Locale) -> &str {
        match (self, locale) {
            (PostStatus::Pending, Locale::Ru) => "Ожидает",
            (PostStatus::Processed, Locale::Ru) => "Обработан",
            (PostStatus::Approved, Locale::Ru) => "Одобрен",
            (PostStatus::Rejected, Locale::Ru) => "Отклонен",
            (PostStatus::Scheduled, Locale::Ru) => "Запланирован",
            (PostStatus::Publishing, Locale::Ru) => "Публикуется",
            (PostStatus::Published, Locale::Ru) => "Опубликован",
            (PostStatus::Pending, Locale::En) => "Pending",
            (PostStatus::Processed, Locale::En) => "Processed",
            (PostStatus::Approved, Locale::En) => "Approved",
            (PostStatus::Rejected, Locale::En) => "Rejected",
            (PostStatus::Scheduled, Locale::En) => "Scheduled",
            (PostStatus::Publishing, Locale::En) => "Publishing",
            (PostStatus::Published, Locale::En) => "Published",
            (PostStatus::Unknown(raw), _) => raw,
        }
    }
}

impl From<String> for PostStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => PostStatus::Pending,
            "processed" => PostStatus::Processed,
            "approved" => PostStatus::Approved,
            "rejected" => PostStatus::Rejected,
            "scheduled" => PostStatus::Scheduled,
            "publishing" => PostStatus::Publishing,
            "published" => PostStatus::Published,
            _ => PostStatus::Unknown(raw),
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which text of a post is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    /// Text as scraped from the source channel
    Original,
    /// Text after LLM processing / manual edits
    #[default]
    Processed,
    /// Unsaved AI suggestion
    Improved,
}

impl TextVariant {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TextVariant::Original, Locale::Ru) => "Оригинал",
            (TextVariant::Processed, Locale::Ru) => "Обработанный",
            (TextVariant::Improved, Locale::Ru) => "Улучшенный",
            (TextVariant::Original, Locale::En) => "Original",
            (TextVariant::Processed, Locale::En) => "Processed",
            (TextVariant::Improved, Locale::En) => "Improved",
        }
    }
}

/// A post as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub source_channel_id: Option<i64>,
    #[serde(default)]
    pub target_channel_id: Option<i64>,
    #[serde(default)]
    pub original_message_id: i64,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_media")]
    pub original_media: Option<OriginalMedia>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub processed_text: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub published_message_id: Option<i64>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub approved_by: Option<i64>,
    #[serde(default)]
    pub llm_classification_confidence: Option<i64>,
    #[serde(default)]
    pub llm_classification_result: Option<String>,
    #[serde(default)]
    pub is_manual: bool,
    #[serde(default)]
    pub source_channel: Option<SourceChannel>,
    #[serde(default)]
    pub target_channel: Option<TargetChannel>,
}

impl Post {
    /// Processed text if present, else original text, else empty
    pub fn display_text(&self) -> &str {
        non_empty(self.processed_text.as_deref())
            .or_else(|| non_empty(self.original_text.as_deref()))
            .unwrap_or("")
    }

    /// Text for a given variant (`Improved` has no stored text)
    pub fn text(&self, variant: TextVariant) -> &str {
        match variant {
            TextVariant::Original => self.original_text.as_deref().unwrap_or(""),
            TextVariant::Processed => self.processed_text.as_deref().unwrap_or(""),
            TextVariant::Improved => "",
        }
    }

    pub fn has_media(&self) -> bool {
        self.original_media
            .as_ref()
            .is_some_and(|media| !media.items().is_empty())
    }

    /// First line of the display text, for list rows
    pub fn preview_line(&self) -> &str {
        self.display_text()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// Source channel name, if the backend embedded it
    pub fn source_name(&self) -> Option<&str> {
        self.source_channel.as_ref().map(|c| c.display_name())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// `original_media` is free-form JSON on the backend; shapes we don't know
/// are dropped instead of failing the whole post.
fn lenient_media<'de, D>(deserializer: D) -> Result<Option<OriginalMedia>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Render a backend timestamp as `YYYY-MM-DD HH:MM`
///
/// Accepts RFC 3339 and naive ISO timestamps; anything else is returned
/// unchanged.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}
