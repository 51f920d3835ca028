//! Editor View: multi-line text editing with the AI prompt line
//!
//! The editor owns the form it was opened for. On submit the App takes the
//! form back with the edited text written into it.

mod input;
mod render;

use tui_textarea::{CursorMove, TextArea};

use crate::forms::{AssistForm, EditForm, EditTarget, PublishForm, ScheduleForm};
use crate::i18n::Locale;
use crate::model::AiModel;

/// What the edited text is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorPurpose {
    /// Edit a stored text of the post
    Edit(EditForm),
    /// Rework the unsaved AI suggestion
    Suggestion { post_id: i64 },
    /// Final text before publishing
    Publish(PublishForm),
    /// Publication time (single line)
    Schedule(ScheduleForm),
}

impl EditorPurpose {
    pub fn post_id(&self) -> i64 {
        match self {
            EditorPurpose::Edit(form) => form.post_id,
            EditorPurpose::Suggestion { post_id } => *post_id,
            EditorPurpose::Publish(form) => form.post_id,
            EditorPurpose::Schedule(form) => form.post_id,
        }
    }

    fn initial_text(&self) -> &str {
        match self {
            EditorPurpose::Edit(form) => &form.text,
            EditorPurpose::Suggestion { .. } => "",
            EditorPurpose::Publish(form) => &form.text,
            EditorPurpose::Schedule(form) => &form.scheduled_at,
        }
    }

    fn with_text(mut self, text: String) -> Self {
        match &mut self {
            EditorPurpose::Edit(form) => form.text = text,
            EditorPurpose::Suggestion { .. } => {}
            EditorPurpose::Publish(form) => form.text = text,
            EditorPurpose::Schedule(form) => form.scheduled_at = text,
        }
        self
    }

    pub fn title(&self, locale: Locale) -> String {
        let id = self.post_id();
        match (self, locale) {
            (EditorPurpose::Edit(f), Locale::Ru) if f.target == EditTarget::Original => {
                format!("Оригинальный текст #{}", id)
            }
            (EditorPurpose::Edit(_), Locale::Ru) => format!("Редактирование #{}", id),
            (EditorPurpose::Suggestion { .. }, Locale::Ru) => format!("Улучшенный текст #{}", id),
            (EditorPurpose::Publish(_), Locale::Ru) => format!("Текст публикации #{}", id),
            (EditorPurpose::Schedule(_), Locale::Ru) => {
                format!("Время публикации #{} (ГГГГ-ММ-ДД ЧЧ:ММ)", id)
            }
            (EditorPurpose::Edit(f), Locale::En) if f.target == EditTarget::Original => {
                format!("Original text #{}", id)
            }
            (EditorPurpose::Edit(_), Locale::En) => format!("Edit #{}", id),
            (EditorPurpose::Suggestion { .. }, Locale::En) => format!("Improved text #{}", id),
            (EditorPurpose::Publish(_), Locale::En) => format!("Publish text #{}", id),
            (EditorPurpose::Schedule(_), Locale::En) => {
                format!("Publication time #{} (YYYY-MM-DD HH:MM)", id)
            }
        }
    }

    /// Single-line input: Enter submits and no AI prompt
    pub fn is_single_line(&self) -> bool {
        matches!(self, EditorPurpose::Schedule(_))
    }
}

/// Action returned by the Editor View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    /// Text accepted; take the form with [`EditorView::submitted`]
    Submit,
    /// Send the prompt; apply the answer with [`EditorView::apply_rewrite`]
    RunAssist(crate::api::ImprovePromptRequest),
    /// A local precondition failed
    Invalid(crate::forms::FormError),
    /// Open the model picker
    SelectModel,
}

/// Editor View state
#[derive(Debug)]
pub struct EditorView {
    pub(super) purpose: EditorPurpose,
    pub(super) textarea: TextArea<'static>,
    /// Prompt line buffer while it is open
    pub(super) prompt: Option<String>,
    pub(super) assist: AssistForm,
    pub(super) model_label: Option<String>,
}

impl EditorView {
    pub fn new(purpose: EditorPurpose) -> Self {
        let text = purpose.initial_text().to_string();
        Self::with_text(purpose, &text)
    }

    /// Editor starting from explicit content (e.g. an AI suggestion)
    pub fn with_text(purpose: EditorPurpose, text: &str) -> Self {
        Self {
            purpose,
            textarea: textarea_with(text),
            prompt: None,
            assist: AssistForm::default(),
            model_label: None,
        }
    }

    pub fn purpose(&self) -> &EditorPurpose {
        &self.purpose
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// The form with the edited text written into it
    pub fn submitted(&self) -> EditorPurpose {
        self.purpose.clone().with_text(self.text())
    }

    pub fn assist_available(&self) -> bool {
        !self.purpose.is_single_line()
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn open_prompt(&mut self) {
        if self.assist_available() {
            self.prompt = Some(self.assist.prompt.clone());
        }
    }

    pub fn close_prompt(&mut self) {
        if let Some(prompt) = self.prompt.take() {
            self.assist.prompt = prompt;
        }
    }

    pub fn model_id(&self) -> Option<i64> {
        self.assist.model_id
    }

    /// Preselect the default model unless one is already chosen
    pub fn preselect_model(&mut self, models: &[AiModel]) {
        self.assist.preselect_model(models);
        self.model_label = self
            .assist
            .model_id
            .and_then(|id| models.iter().find(|m| m.id == id))
            .map(|m| m.label());
    }

    pub fn set_model(&mut self, model: &AiModel) {
        self.assist.model_id = Some(model.id);
        self.model_label = Some(model.label());
    }

    /// Replace the buffer with the rewritten text and close the prompt
    pub fn apply_rewrite(&mut self, text: &str) {
        self.textarea = textarea_with(text);
        self.prompt = None;
        self.assist.finish();
    }
}

/// Text area holding `text` with the cursor after its last character
///
/// Splits on `\n` only, so [`EditorView::text`] gives back `text` unchanged
/// (trailing newline and `\r` included).
fn textarea_with(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(text.split('\n').map(String::from).collect());
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}
