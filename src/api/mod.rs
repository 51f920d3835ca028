//! Backend API layer
//!
//! This module talks to the content backend over HTTP and caches its
//! responses. Everything above it goes through the [`Backend`] trait.

pub mod cache;
mod client;
pub mod constants;
mod requests;

pub use cache::QueryCache;
pub use client::ApiClient;
pub use requests::{
    ApproveRequest, ImprovePromptRequest, ImproveTextRequest, ImprovedText, PostQuery,
    PostUpdate, PublishRequest, ScheduleRequest,
};

use serde_json::Value;
use thiserror::Error;

use crate::model::{AiModel, Post, TargetChannel};
use constants::MAX_ERROR_BODY;

/// Errors that can occur when calling the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not authorized: the session token was rejected")]
    Unauthorized,

    #[error("Backend returned HTTP {status}: {}", .detail.as_deref().unwrap_or(.body))]
    Status {
        status: u16,
        /// Human-readable `detail` of the error body, when present
        detail: Option<String>,
        /// Raw body, truncated
        body: String,
    },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] (or `Unauthorized`) from a failed response
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Status {
            status,
            detail: extract_detail(body),
            body: truncate(body.trim(), MAX_ERROR_BODY),
        }
    }

    /// Backend `detail` if there is one, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull `detail` out of a JSON error body
///
/// FastAPI validation failures carry a list of `{msg}` objects instead of a
/// string; their messages are joined.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Operations the console needs from the backend
///
/// Implemented by [`ApiClient`] over HTTP; tests substitute an in-memory fake.
pub trait Backend {
    fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError>;

    fn get_post(&self, id: i64) -> Result<Post, ApiError>;

    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post, ApiError>;

    fn approve_post(&self, id: i64, request: &ApproveRequest) -> Result<Post, ApiError>;

    fn schedule_post(&self, id: i64, request: &ScheduleRequest) -> Result<Post, ApiError>;

    fn publish_post(&self, id: i64, request: &PublishRequest) -> Result<Post, ApiError>;

    /// Re-run the LLM classifier on a post
    fn classify_post(&self, id: i64) -> Result<Post, ApiError>;

    fn improve_text(&self, request: &ImproveTextRequest) -> Result<ImprovedText, ApiError>;

    fn improve_text_with_prompt(
        &self,
        request: &ImprovePromptRequest,
    ) -> Result<ImprovedText, ApiError>;

    fn list_target_channels(&self, active_only: bool) -> Result<Vec<TargetChannel>, ApiError>;

    fn list_ai_models(&self, active_only: bool) -> Result<Vec<AiModel>, ApiError>;
}
