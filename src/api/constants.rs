//! Backend API constants
//!
//! Centralized definitions for endpoint paths, query parameters and client
//! defaults.

use std::time::Duration;

/// Prefix every backend route lives under
pub const API_PREFIX: &str = "/api";

/// Default `limit` of the post list
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest raw error body kept in an [`super::ApiError::Status`]
pub const MAX_ERROR_BODY: usize = 300;

/// Collection routes (relative to [`API_PREFIX`])
pub mod endpoints {
    pub const POSTS: &str = "/posts";
    pub const IMPROVE_TEXT: &str = "/posts/improve-text";
    pub const IMPROVE_TEXT_WITH_PROMPT: &str = "/posts/improve-text-with-prompt";
    pub const TARGET_CHANNELS: &str = "/target-channels";
    pub const AI_MODELS: &str = "/ai-models";
}

/// Per-post action suffixes (`/posts/{id}/<action>`)
pub mod actions {
    pub const APPROVE: &str = "approve";
    pub const SCHEDULE: &str = "schedule";
    pub const PUBLISH: &str = "publish";
    pub const CLASSIFY: &str = "classify";
}

/// Query parameter names
pub mod params {
    pub const ACTIVE_ONLY: &str = "active_only";
}

/// Route of a single post
pub fn post_path(id: i64) -> String {
    format!("{}/{}", endpoints::POSTS, id)
}

/// Route of an action on a single post
pub fn post_action_path(id: i64, action: &str) -> String {
    format!("{}/{}/{}", endpoints::POSTS, id, action)
}
