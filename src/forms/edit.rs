//! Text edit form

use crate::api::PostUpdate;
use crate::model::Post;

/// Which stored text an edit writes back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Processed,
    Original,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub post_id: i64,
    pub target: EditTarget,
    pub text: String,
    initial: String,
}

impl EditForm {
    /// Edit the publishable text, starting from what the post displays
    pub fn processed(post: &Post) -> Self {
        Self::with_text(post.id, EditTarget::Processed, post.display_text())
    }

    /// Edit the scraped original text
    pub fn original(post: &Post) -> Self {
        Self::with_text(
            post.id,
            EditTarget::Original,
            post.original_text.as_deref().unwrap_or(""),
        )
    }

    /// Edit form starting from arbitrary content (e.g. an AI rewrite)
    pub fn with_text(post_id: i64, target: EditTarget, text: &str) -> Self {
        Self {
            post_id,
            target,
            text: text.to_string(),
            initial: text.to_string(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.text != self.initial
    }

    /// Partial update carrying only the edited field
    pub fn submit(&self) -> PostUpdate {
        match self.target {
            EditTarget::Processed => PostUpdate::processed_text(self.text.clone()),
            EditTarget::Original => PostUpdate::original_text(self.text.clone()),
        }
    }
}
