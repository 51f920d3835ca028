//! Request payloads and query filters

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_PAGE_SIZE;
use crate::model::PostStatus;

/// Filters of `GET /posts`; absent filters are not sent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_channel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manual: Option<bool>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            status: None,
            source_channel_id: None,
            target_channel_id: None,
            is_manual: None,
        }
    }
}

impl PostQuery {
    pub fn with_status(status: Option<PostStatus>) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

/// Partial update of `PUT /posts/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_channel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

impl PostUpdate {
    pub fn processed_text(text: impl Into<String>) -> Self {
        Self {
            processed_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn original_text(text: impl Into<String>) -> Self {
        Self {
            original_text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproveRequest {
    pub target_channel_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRequest {
    pub target_channel_id: i64,
    /// ISO local time, `YYYY-MM-DDTHH:MM:00`
    pub scheduled_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    pub target_channel_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
}

/// `POST /posts/improve-text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImproveTextRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
}

/// `POST /posts/improve-text-with-prompt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovePromptRequest {
    pub text: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
}

/// Response of both improve endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImprovedText {
    pub improved_text: String,
}
