//! Post workflow actions (calls that change server state)

mod dialog;
mod editor;

use tracing::{info, warn};

use crate::api::{ApiError, PostUpdate};
use crate::forms::{
    ApproveForm, EditForm, EditTarget, FormError, ImproveSession, PublishForm, ScheduleForm,
};
use crate::i18n::{Locale, Msg};
use crate::model::{Notification, Post, PostStatus, TargetChannel, default_model};
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::views::{EditorPurpose, EditorView, MediaView, PostView};

use super::clipboard;
use super::state::{App, View};

impl App {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    /// Set an info notification (blue)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    /// Set a warning notification (yellow)
    pub fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Set an error message (displayed in error area)
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Log a failed call and show the backend detail, or `fallback`
    pub(crate) fn report_api_error(&mut self, fallback: Msg, error: &ApiError) {
        warn!(error = %error, "{}", fallback.text(Locale::En));
        let message = match error {
            ApiError::Unauthorized => Msg::TokenRejected.text(self.locale).to_string(),
            other => other.user_message(fallback.text(self.locale)),
        };
        self.set_error(message);
    }

    /// Common tail of every successful post mutation
    ///
    /// Drops cached lists, reloads the current one and shows the fresh post
    /// in the detail view.
    fn finish_mutation(&mut self, post: Post, done: Msg) {
        info!(post_id = post.id, status = %post.status, "{}", done.text(Locale::En));
        if let Some(view) = self.post_view.as_mut()
            && view.post_id() == post.id
        {
            view.set_post(post);
        }
        self.reload_posts();
        self.notify_success(done.text(self.locale));
    }

    // ── Lookup ────────────────────────────────────────────────────────

    /// The post as currently shown (detail view first, then the list)
    pub(crate) fn find_post(&self, post_id: i64) -> Option<Post> {
        self.post_view
            .as_ref()
            .filter(|v| v.post_id() == post_id)
            .map(|v| v.post().clone())
            .or_else(|| {
                self.posts_view
                    .posts()
                    .iter()
                    .find(|p| p.id == post_id)
                    .cloned()
            })
    }

    /// Active channels, or `None` after reporting why there are none
    fn channels_for_action(&mut self) -> Option<Vec<TargetChannel>> {
        match self.fetch_target_channels() {
            Ok(channels) if channels.is_empty() => {
                self.notify_warning(FormError::NoChannel.message(self.locale));
                None
            }
            Ok(channels) => Some(channels),
            Err(e) => {
                self.report_api_error(Msg::LoadChannelsFailed, &e);
                None
            }
        }
    }

    fn channel_dialog(
        &self,
        channels: &[TargetChannel],
        preselected: Option<i64>,
        callback: DialogCallback,
    ) -> Dialog {
        let items = channels
            .iter()
            .map(|c| SelectItem::new(c.display_name(), c.id))
            .collect();
        let preselected = preselected.map(|id| id.to_string());
        Dialog::select(
            Msg::SelectChannelTitle.text(self.locale),
            Msg::SelectChannelMessage.text(self.locale),
            items,
            preselected.as_deref(),
            callback,
        )
    }

    // ── Navigation ────────────────────────────────────────────────────

    pub(crate) fn open_post(&mut self, post_id: i64) {
        if let Some(post) = self.find_post(post_id) {
            self.post_view = Some(PostView::new(post));
            self.go_to_view(View::Post);
        }
    }

    pub(crate) fn close_post(&mut self) {
        self.post_view = None;
        self.go_back();
    }

    pub(crate) fn open_media(&mut self) {
        let Some(view) = self.post_view.as_ref() else {
            return;
        };
        if let Some(media) = view.post().original_media.as_ref() {
            self.media_view = Some(MediaView::new(view.post_id(), media, &self.media_url));
            self.go_to_view(View::Media);
        }
    }

    pub(crate) fn close_media(&mut self) {
        self.media_view = None;
        self.go_back();
    }

    pub(crate) fn copy_media_url(&mut self, url: &str) {
        match clipboard::copy_to_clipboard(url) {
            Ok(()) => self.notify_success(Msg::UrlCopied.text(self.locale)),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.notify_warning(format!("{} ({})", e, url));
            }
        }
    }

    // ── Approve ───────────────────────────────────────────────────────

    pub(crate) fn start_approve(&mut self, post_id: i64) {
        let Some(post) = self.find_post(post_id) else {
            return;
        };
        let Some(channels) = self.channels_for_action() else {
            return;
        };
        let form = ApproveForm::new(&post, &channels);
        self.active_dialog = Some(self.channel_dialog(
            &channels,
            form.target_channel_id,
            DialogCallback::ApproveChannel { post_id },
        ));
        self.pending_approve = Some(form);
    }

    pub(crate) fn execute_approve(&mut self, form: ApproveForm) {
        let request = match form.submit() {
            Ok(request) => request,
            Err(e) => {
                self.notify_warning(e.message(self.locale));
                return;
            }
        };
        match self.backend.approve_post(form.post_id, &request) {
            Ok(post) => self.finish_mutation(post, Msg::PostApproved),
            Err(e) => self.report_api_error(Msg::ApproveFailed, &e),
        }
    }

    // ── Reject ────────────────────────────────────────────────────────

    pub(crate) fn start_reject(&mut self, post_id: i64) {
        self.active_dialog = Some(Dialog::confirm(
            Msg::RejectTitle.text(self.locale),
            format!("{} #{}?", Msg::RejectMessage.text(self.locale), post_id),
            None,
            DialogCallback::RejectPost { post_id },
        ));
    }

    pub(crate) fn execute_reject(&mut self, post_id: i64) {
        let update = PostUpdate {
            status: Some(PostStatus::Rejected),
            ..PostUpdate::default()
        };
        match self.backend.update_post(post_id, &update) {
            Ok(post) => self.finish_mutation(post, Msg::PostRejected),
            Err(e) => self.report_api_error(Msg::RejectFailed, &e),
        }
    }

    // ── Publish ───────────────────────────────────────────────────────

    /// Pick a channel; then confirm, or edit the text first when `edit_text`
    pub(crate) fn start_publish(&mut self, post_id: i64, edit_text: bool) {
        let Some(post) = self.find_post(post_id) else {
            return;
        };
        let Some(channels) = self.channels_for_action() else {
            return;
        };
        let form = PublishForm::new(&post, &channels);
        self.active_dialog = Some(self.channel_dialog(
            &channels,
            form.target_channel_id,
            DialogCallback::PublishChannel { post_id, edit_text },
        ));
        self.pending_publish = Some(form);
    }

    /// Ask for the final confirmation of the pending publish form
    pub(crate) fn confirm_publish(&mut self, form: PublishForm) {
        let detail = self.channel_name(form.target_channel_id);
        self.active_dialog = Some(Dialog::confirm(
            Msg::PublishTitle.text(self.locale),
            format!("{} #{}?", Msg::PublishMessage.text(self.locale), form.post_id),
            detail,
            DialogCallback::ConfirmPublish,
        ));
        self.pending_publish = Some(form);
    }

    pub(crate) fn execute_publish(&mut self, form: PublishForm) {
        let request = match form.submit() {
            Ok(request) => request,
            Err(e) => {
                self.notify_warning(e.message(self.locale));
                return;
            }
        };
        match self.backend.publish_post(form.post_id, &request) {
            Ok(post) => self.finish_mutation(post, Msg::PostPublished),
            Err(e) => self.report_api_error(Msg::PublishFailed, &e),
        }
    }

    // ── Schedule ──────────────────────────────────────────────────────

    pub(crate) fn start_schedule(&mut self, post_id: i64) {
        let Some(post) = self.find_post(post_id) else {
            return;
        };
        let Some(channels) = self.channels_for_action() else {
            return;
        };
        let form = ScheduleForm::new(&post, &channels);
        self.active_dialog = Some(self.channel_dialog(
            &channels,
            form.target_channel_id,
            DialogCallback::ScheduleChannel { post_id },
        ));
        self.pending_schedule = Some(form);
    }

    /// Send the schedule request; `false` keeps the editor open for a fix
    pub(crate) fn execute_schedule(&mut self, form: &ScheduleForm) -> bool {
        let request = match form.submit(self.now()) {
            Ok(request) => request,
            Err(e) => {
                self.notify_warning(e.message(self.locale));
                return false;
            }
        };
        match self.backend.schedule_post(form.post_id, &request) {
            Ok(post) => {
                self.finish_mutation(post, Msg::PostScheduled);
                true
            }
            Err(e) => {
                self.report_api_error(Msg::ScheduleFailed, &e);
                false
            }
        }
    }

    // ── Classify ──────────────────────────────────────────────────────

    pub(crate) fn execute_classify(&mut self, post_id: i64) {
        match self.backend.classify_post(post_id) {
            Ok(post) => self.finish_mutation(post, Msg::ClassificationDone),
            Err(e) => self.report_api_error(Msg::ClassifyFailed, &e),
        }
    }

    // ── Text editing ──────────────────────────────────────────────────

    pub(crate) fn start_edit(&mut self, target: EditTarget) {
        let Some(post) = self.post_view.as_ref().map(|v| v.post()) else {
            return;
        };
        let form = match target {
            EditTarget::Processed => EditForm::processed(post),
            EditTarget::Original => EditForm::original(post),
        };
        self.open_editor(EditorView::new(EditorPurpose::Edit(form)));
    }

    /// Returns `false` when the update failed and the editor stays open
    pub(crate) fn execute_edit(&mut self, form: &EditForm) -> bool {
        if !form.is_dirty() {
            self.notify_info(Msg::NoChanges.text(self.locale));
            return true;
        }
        match self.backend.update_post(form.post_id, &form.submit()) {
            Ok(post) => {
                self.finish_mutation(post, Msg::PostUpdated);
                true
            }
            Err(e) => {
                self.report_api_error(Msg::SaveFailed, &e);
                false
            }
        }
    }

    // ── AI suggestion ─────────────────────────────────────────────────

    /// One-shot improvement with the default model
    pub(crate) fn start_improve(&mut self) {
        let Some(post) = self.post_view.as_ref().map(|v| v.post().clone()) else {
            return;
        };
        let mut session = match ImproveSession::start(&post) {
            Ok(session) => session,
            Err(e) => {
                self.notify_warning(e.message(self.locale));
                return;
            }
        };

        // The backend picks its own default when no model is known
        let model_id = self
            .fetch_ai_models()
            .ok()
            .and_then(|models| default_model(&models).map(|m| m.id));

        match self.backend.improve_text(&session.request(model_id)) {
            Ok(improved) => {
                info!(post_id = post.id, ?model_id, "text improved");
                session.set_suggestion(improved.improved_text);
                if let Some(view) = self.post_view.as_mut() {
                    view.show_suggestion(session);
                }
                self.notify_success(Msg::TextImproved.text(self.locale));
            }
            Err(e) => self.report_api_error(Msg::ImproveFailed, &e),
        }
    }

    pub(crate) fn save_suggestion(&mut self) {
        let Some(session) = self.post_view.as_ref().and_then(|v| v.improve_session()) else {
            return;
        };
        let (post_id, update) = match session.save() {
            Ok(update) => (session.post_id, update),
            Err(e) => {
                self.notify_warning(e.message(self.locale));
                return;
            }
        };
        match self.backend.update_post(post_id, &update) {
            Ok(post) => {
                if let Some(view) = self.post_view.as_mut() {
                    view.clear_suggestion();
                }
                self.finish_mutation(post, Msg::SuggestionSaved);
            }
            Err(e) => self.report_api_error(Msg::SaveFailed, &e),
        }
    }

    pub(crate) fn edit_suggestion(&mut self) {
        let Some(view) = self.post_view.as_ref() else {
            return;
        };
        if let Some(text) = view.suggestion() {
            let editor = EditorView::with_text(
                EditorPurpose::Suggestion {
                    post_id: view.post_id(),
                },
                text,
            );
            self.open_editor(editor);
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────

    fn channel_name(&self, channel_id: Option<i64>) -> Option<String> {
        let id = channel_id?;
        self.channels_cache
            .get(&true)
            .and_then(|channels| channels.iter().find(|c| c.id == id))
            .map(|c| c.display_name())
    }
}
