//! Approve form

use super::{FormError, non_blank};
use crate::api::ApproveRequest;
use crate::model::{Post, TargetChannel, preferred_channel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveForm {
    pub post_id: i64,
    pub target_channel_id: Option<i64>,
    pub admin_notes: String,
}

impl ApproveForm {
    /// Preselects the post's own target, else the default/first active channel
    pub fn new(post: &Post, channels: &[TargetChannel]) -> Self {
        Self {
            post_id: post.id,
            target_channel_id: preferred_channel(channels, post.target_channel_id),
            admin_notes: String::new(),
        }
    }

    pub fn submit(&self) -> Result<ApproveRequest, FormError> {
        let target_channel_id = self.target_channel_id.ok_or(FormError::NoChannel)?;
        Ok(ApproveRequest {
            target_channel_id,
            admin_notes: non_blank(&self.admin_notes),
        })
    }
}
