//! One-shot "improve text" session

use super::FormError;
use crate::api::{ImproveTextRequest, PostUpdate};
use crate::model::Post;

/// Source text of a post plus the suggestion returned for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveSession {
    pub post_id: i64,
    pub source: String,
    pub suggestion: Option<String>,
}

impl ImproveSession {
    /// Start from the processed text, else the original text
    pub fn start(post: &Post) -> Result<Self, FormError> {
        let source = [post.processed_text.as_deref(), post.original_text.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .ok_or(FormError::EmptyText)?;

        Ok(Self {
            post_id: post.id,
            source: source.to_string(),
            suggestion: None,
        })
    }

    pub fn request(&self, model_id: Option<i64>) -> ImproveTextRequest {
        ImproveTextRequest {
            text: self.source.clone(),
            model_id,
        }
    }

    pub fn set_suggestion(&mut self, text: String) {
        self.suggestion = Some(text);
    }

    /// Save the (possibly edited) suggestion as the processed text
    pub fn save(&self) -> Result<PostUpdate, FormError> {
        match self.suggestion.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(PostUpdate::processed_text(text)),
            _ => Err(FormError::EmptyText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_post;

    #[test]
    fn test_prefers_processed_text() {
        let mut post = sample_post(1);
        post.processed_text = Some("processed".to_string());
        let session = ImproveSession::start(&post).unwrap();
        assert_eq!(session.request(None).text, "processed");
    }

    #[test]
    fn test_blank_processed_falls_back_to_original() {
        let mut post = sample_post(1);
        post.processed_text = Some("  ".to_string());
        let session = ImproveSession::start(&post).unwrap();
        assert_eq!(session.source, "Original text");
    }

    #[test]
    fn test_no_text_is_rejected() {
        let mut post = sample_post(1);
        post.original_text = None;
        assert_eq!(ImproveSession::start(&post), Err(FormError::EmptyText));
    }

    #[test]
    fn test_save_needs_a_suggestion() {
        let mut session = ImproveSession::start(&sample_post(1)).unwrap();
        assert_eq!(session.save(), Err(FormError::EmptyText));

        session.set_suggestion("Better text".to_string());
        assert_eq!(
            session.save().unwrap().processed_text.as_deref(),
            Some("Better text")
        );
    }
}
