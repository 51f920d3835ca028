//! AI prompt panel

use super::FormError;
use crate::api::ImprovePromptRequest;
use crate::model::{AiModel, default_model};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistForm {
    pub prompt: String,
    pub model_id: Option<i64>,
}

impl AssistForm {
    /// Select the default model unless the user already picked one
    pub fn preselect_model(&mut self, models: &[AiModel]) {
        if self.model_id.is_none() {
            self.model_id = default_model(models).map(|m| m.id);
        }
    }

    /// Build the request for rewriting `text` with the prompt
    pub fn submit(&self, text: &str) -> Result<ImprovePromptRequest, FormError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(FormError::EmptyPrompt);
        }
        let model_id = self.model_id.ok_or(FormError::NoModel)?;
        if text.trim().is_empty() {
            return Err(FormError::EmptyText);
        }

        Ok(ImprovePromptRequest {
            text: text.to_string(),
            prompt: prompt.to_string(),
            model_id: Some(model_id),
        })
    }

    /// Reset after a successful rewrite (the model choice is kept)
    pub fn finish(&mut self) {
        self.prompt.clear();
    }
}
