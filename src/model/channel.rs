//! Telegram channel models

use serde::{Deserialize, Serialize};

/// A destination channel posts are published or scheduled to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetChannel {
    pub id: i64,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_username: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub auto_publish_enabled: bool,
    #[serde(default)]
    pub created_at: String,
}

impl TargetChannel {
    /// Name, else `@username`, else `Channel <id>`
    pub fn display_name(&self) -> String {
        if !self.channel_name.is_empty() {
            return self.channel_name.clone();
        }
        match self.channel_username.as_deref() {
            Some(username) if !username.is_empty() => format!("@{}", username),
            _ => format!("Channel {}", self.id),
        }
    }
}

/// Channel to preselect for a post: its own target, else the default active
/// channel, else the first active one.
pub fn preferred_channel(channels: &[TargetChannel], post_target: Option<i64>) -> Option<i64> {
    if let Some(id) = post_target
        && channels.iter().any(|c| c.id == id)
    {
        return Some(id);
    }
    channels
        .iter()
        .find(|c| c.is_default && c.is_active)
        .or_else(|| channels.iter().find(|c| c.is_active))
        .map(|c| c.id)
}

/// A channel posts are scraped from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceChannel {
    pub id: i64,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub channel_username: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SourceChannel {
    pub fn display_name(&self) -> &str {
        if self.channel_name.is_empty() {
            self.channel_username.as_deref().unwrap_or(&self.channel_id)
        } else {
            &self.channel_name
        }
    }
}

fn default_true() -> bool {
    true
}
