//! AI model descriptors (used by the prompt panel)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
}

impl AiModel {
    /// Label for selection lists
    pub fn label(&self) -> String {
        if self.is_default {
            format!("{} (default)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// First model that is both default and active
pub fn default_model(models: &[AiModel]) -> Option<&AiModel> {
    models.iter().find(|m| m.is_default && m.is_active)
}

/// Models with `is_active` set
pub fn active_models(models: &[AiModel]) -> Vec<&AiModel> {
    models.iter().filter(|m| m.is_active).collect()
}
