//! Dialog forms and their local preconditions
//!
//! Each form owns its edit buffer. `submit` checks the preconditions and
//! builds the request payload; a failed check is a [`FormError`] and no
//! request is sent.

mod approve;
mod assist;
mod edit;
mod improve;
mod publish;
mod schedule;

pub use approve::ApproveForm;
pub use assist::AssistForm;
pub use edit::{EditForm, EditTarget};
pub use improve::ImproveSession;
pub use publish::PublishForm;
pub use schedule::{ScheduleForm, parse_schedule_time};

use thiserror::Error;

use crate::i18n::Locale;

/// A local precondition that failed before any request was built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("no target channel selected")]
    NoChannel,

    #[error("no publication time given")]
    NoScheduleTime,

    #[error("invalid publication time '{0}' (expected YYYY-MM-DD HH:MM)")]
    InvalidScheduleTime(String),

    #[error("publication time must be at least one minute from now")]
    ScheduleTooSoon,

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("no AI model selected")]
    NoModel,

    #[error("there is no text to work with")]
    EmptyText,
}

impl FormError {
    /// Message for the warning banner
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => match self {
                FormError::NoChannel => "Выберите канал для публикации".to_string(),
                FormError::NoScheduleTime => "Укажите дату и время публикации".to_string(),
                FormError::InvalidScheduleTime(input) => format!(
                    "Неверная дата: {} (ожидается ГГГГ-ММ-ДД ЧЧ:ММ)",
                    input
                ),
                FormError::ScheduleTooSoon => {
                    "Время публикации должно быть минимум на минуту позже текущего".to_string()
                }
                FormError::EmptyPrompt => "Введите запрос для ИИ".to_string(),
                FormError::NoModel => "Выберите модель ИИ".to_string(),
                FormError::EmptyText => "Нет текста для обработки".to_string(),
            },
            Locale::En => match self {
                FormError::NoChannel => "Select a target channel".to_string(),
                FormError::NoScheduleTime => "Enter a publication date and time".to_string(),
                FormError::InvalidScheduleTime(input) => {
                    format!("Invalid date: {} (expected YYYY-MM-DD HH:MM)", input)
                }
                FormError::ScheduleTooSoon => {
                    "Publication time must be at least one minute from now".to_string()
                }
                FormError::EmptyPrompt => "Enter a prompt for the AI".to_string(),
                FormError::NoModel => "Select an AI model".to_string(),
                FormError::EmptyText => "There is no text to work with".to_string(),
            },
        }
    }
}

/// `Some(text)` unless blank
pub(crate) fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| text.to_string())
}
