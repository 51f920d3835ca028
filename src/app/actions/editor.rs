//! Editor lifecycle and the AI prompt panel

use tracing::info;

use crate::i18n::Msg;
use crate::model::active_models;
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::views::{EditorAction, EditorPurpose, EditorView};

use crate::app::state::{App, View};

impl App {
    /// Show `editor`, preselecting the default AI model for the prompt panel
    pub(crate) fn open_editor(&mut self, mut editor: EditorView) {
        if editor.assist_available()
            && let Ok(models) = self.fetch_ai_models()
        {
            editor.preselect_model(&models);
        }
        self.editor_view = Some(editor);
        self.go_to_view(View::Editor);
    }

    pub(crate) fn close_editor(&mut self) {
        self.editor_view = None;
        self.go_back();
    }

    pub(crate) fn handle_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::None => {}
            EditorAction::Cancel => self.close_editor(),
            EditorAction::Submit => self.submit_editor(),
            EditorAction::RunAssist(request) => {
                match self.backend.improve_text_with_prompt(&request) {
                    Ok(improved) => {
                        info!(model_id = ?request.model_id, "text rewritten with prompt");
                        if let Some(editor) = self.editor_view.as_mut() {
                            editor.apply_rewrite(&improved.improved_text);
                        }
                        self.notify_success(Msg::TextRewritten.text(self.locale));
                    }
                    Err(e) => self.report_api_error(Msg::ImproveFailed, &e),
                }
            }
            EditorAction::Invalid(e) => self.notify_warning(e.message(self.locale)),
            EditorAction::SelectModel => self.open_model_dialog(),
        }
    }

    fn submit_editor(&mut self) {
        let Some(purpose) = self.editor_view.as_ref().map(|e| e.submitted()) else {
            return;
        };

        let close = match purpose {
            EditorPurpose::Edit(form) => self.execute_edit(&form),
            EditorPurpose::Suggestion { .. } => {
                let text = self
                    .editor_view
                    .as_ref()
                    .map(|e| e.text())
                    .unwrap_or_default();
                if let Some(session) = self.post_view.as_mut().and_then(|v| v.improve_session_mut())
                {
                    session.set_suggestion(text);
                }
                true
            }
            EditorPurpose::Publish(form) => {
                self.close_editor();
                self.confirm_publish(form);
                return;
            }
            EditorPurpose::Schedule(form) => self.execute_schedule(&form),
        };

        if close {
            self.close_editor();
        }
    }

    fn open_model_dialog(&mut self) {
        let models = match self.fetch_ai_models() {
            Ok(models) => models,
            Err(e) => {
                self.report_api_error(Msg::LoadModelsFailed, &e);
                return;
            }
        };
        let active = active_models(&models);
        if active.is_empty() {
            self.notify_warning(Msg::NoActiveModels.text(self.locale));
            return;
        }

        let items = active
            .iter()
            .map(|m| SelectItem::new(m.label(), m.id))
            .collect();
        let preselected = self
            .editor_view
            .as_ref()
            .and_then(|e| e.model_id())
            .map(|id| id.to_string());
        self.active_dialog = Some(Dialog::select(
            Msg::SelectModelTitle.text(self.locale),
            Msg::SelectModelMessage.text(self.locale),
            items,
            preselected.as_deref(),
            DialogCallback::SelectModel,
        ));
    }
}
