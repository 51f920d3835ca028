//! Dialog result handling (dispatch confirmed/cancelled dialog results)

use crate::i18n::Msg;
use crate::ui::components::{Dialog, DialogCallback, DialogResult};
use crate::ui::views::{EditorPurpose, EditorView};

use crate::app::state::App;

impl App {
    /// Handle dialog result
    ///
    /// Called when a dialog is closed.
    ///
    /// Implementation order (important):
    /// 1. Clone callback_id from active_dialog
    /// 2. Set active_dialog to None
    /// 3. Match on callback and result
    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let callback = self.active_dialog.as_ref().map(|d| d.callback_id.clone());
        self.active_dialog = None;

        let Some(callback) = callback else { return };

        match result {
            DialogResult::Cancelled => self.handle_dialog_cancel(callback),
            DialogResult::Confirmed(values) => {
                let selected = values.first().and_then(|v| v.parse::<i64>().ok());
                match callback {
                    DialogCallback::ApproveChannel { post_id } => {
                        self.on_approve_channel(post_id, selected)
                    }
                    DialogCallback::ConfirmApprove => {
                        if let Some(form) = self.pending_approve.take() {
                            self.execute_approve(form);
                        }
                    }
                    DialogCallback::PublishChannel { edit_text, .. } => {
                        self.on_publish_channel(selected, edit_text)
                    }
                    DialogCallback::ConfirmPublish => {
                        if let Some(form) = self.pending_publish.take() {
                            self.execute_publish(form);
                        }
                    }
                    DialogCallback::ScheduleChannel { .. } => self.on_schedule_channel(selected),
                    DialogCallback::RejectPost { post_id } => self.execute_reject(post_id),
                    DialogCallback::SelectModel => self.on_model_selected(selected),
                }
            }
        }
    }

    /// Handle dialog cancellation: clean up any pending state
    fn handle_dialog_cancel(&mut self, callback: DialogCallback) {
        match callback {
            DialogCallback::ApproveChannel { .. } | DialogCallback::ConfirmApprove => {
                self.pending_approve = None;
            }
            DialogCallback::PublishChannel { .. } | DialogCallback::ConfirmPublish => {
                self.pending_publish = None;
            }
            DialogCallback::ScheduleChannel { .. } => {
                self.pending_schedule = None;
            }
            // No cleanup needed on cancel
            DialogCallback::RejectPost { .. } | DialogCallback::SelectModel => {}
        }
    }

    fn on_approve_channel(&mut self, post_id: i64, channel_id: Option<i64>) {
        let Some(form) = self.pending_approve.as_mut() else {
            return;
        };
        form.target_channel_id = channel_id.or(form.target_channel_id);
        let target = form.target_channel_id;
        let detail = self.channel_name(target);

        self.active_dialog = Some(Dialog::confirm(
            Msg::ApproveTitle.text(self.locale),
            format!("{} #{}?", Msg::ApproveMessage.text(self.locale), post_id),
            detail,
            DialogCallback::ConfirmApprove,
        ));
    }

    fn on_publish_channel(&mut self, channel_id: Option<i64>, edit_text: bool) {
        let Some(mut form) = self.pending_publish.take() else {
            return;
        };
        form.target_channel_id = channel_id.or(form.target_channel_id);

        if edit_text {
            self.open_editor(EditorView::new(EditorPurpose::Publish(form)));
        } else {
            self.confirm_publish(form);
        }
    }

    fn on_schedule_channel(&mut self, channel_id: Option<i64>) {
        let Some(mut form) = self.pending_schedule.take() else {
            return;
        };
        form.target_channel_id = channel_id.or(form.target_channel_id);
        form.suggest_time(self.now());
        self.open_editor(EditorView::new(EditorPurpose::Schedule(form)));
    }

    fn on_model_selected(&mut self, model_id: Option<i64>) {
        let Some(model_id) = model_id else {
            return;
        };
        let model = self
            .models_cache
            .get(&true)
            .and_then(|models| models.iter().find(|m| m.id == model_id))
            .cloned();
        if let (Some(model), Some(editor)) = (model, self.editor_view.as_mut()) {
            editor.set_model(&model);
        }
    }
}
