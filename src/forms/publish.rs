//! Publish-now form

use super::{FormError, non_blank};
use crate::api::PublishRequest;
use crate::model::{Post, TargetChannel, preferred_channel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishForm {
    pub post_id: i64,
    pub target_channel_id: Option<i64>,
    /// Final text; sent only when non-empty
    pub text: String,
    pub admin_notes: String,
}

impl PublishForm {
    pub fn new(post: &Post, channels: &[TargetChannel]) -> Self {
        Self {
            post_id: post.id,
            target_channel_id: preferred_channel(channels, post.target_channel_id),
            text: post.processed_text.clone().unwrap_or_default(),
            admin_notes: String::new(),
        }
    }

    pub fn submit(&self) -> Result<PublishRequest, FormError> {
        let target_channel_id = self.target_channel_id.ok_or(FormError::NoChannel)?;
        Ok(PublishRequest {
            target_channel_id,
            admin_notes: non_blank(&self.admin_notes),
            processed_text: non_blank(&self.text),
        })
    }
}
