//! Data refresh operations (reload from the backend through the caches)

use tracing::{debug, warn};

use crate::api::ApiError;
use crate::i18n::Msg;
use crate::model::{AiModel, TargetChannel};

use super::state::{App, View};

impl App {
    /// Load the posts list for the current filter (cached per query)
    pub fn refresh_posts(&mut self) {
        let query = self.posts_view.query();
        let backend = &self.backend;
        match self
            .posts_cache
            .get_or_fetch(query.clone(), || backend.list_posts(&query))
        {
            Ok(posts) => {
                debug!(count = posts.len(), status = ?query.status, "posts loaded");
                self.posts_view.set_posts(posts);
                self.error_message = None;
            }
            Err(e) => self.report_api_error(Msg::LoadPostsFailed, &e),
        }
    }

    /// Drop cached posts and load them again
    pub(crate) fn reload_posts(&mut self) {
        self.posts_cache.invalidate_all();
        self.refresh_posts();
    }

    /// Fetch the open post again
    pub(crate) fn reload_post(&mut self) {
        let Some(post_id) = self.post_view.as_ref().map(|v| v.post_id()) else {
            return;
        };
        match self.backend.get_post(post_id) {
            Ok(post) => {
                if let Some(view) = self.post_view.as_mut() {
                    view.set_post(post);
                }
                self.error_message = None;
            }
            Err(e) => self.report_api_error(Msg::LoadPostFailed, &e),
        }
    }

    /// Refresh whatever the current view shows
    pub(crate) fn refresh_current(&mut self) {
        match self.current_view {
            View::Post => self.reload_post(),
            _ => self.reload_posts(),
        }
        if self.error_message.is_none() {
            self.notify_info(Msg::Refreshed.text(self.locale));
        }
    }

    /// Active target channels (cached, stale after a few minutes)
    pub(crate) fn fetch_target_channels(&mut self) -> Result<Vec<TargetChannel>, ApiError> {
        let backend = &self.backend;
        self.channels_cache
            .get_or_fetch(true, || backend.list_target_channels(true))
            .inspect_err(|e| warn!(error = %e, "failed to load target channels"))
    }

    /// Active AI models (cached, stale after a few minutes)
    pub(crate) fn fetch_ai_models(&mut self) -> Result<Vec<AiModel>, ApiError> {
        let backend = &self.backend;
        self.models_cache
            .get_or_fetch(true, || backend.list_ai_models(true))
            .inspect_err(|e| warn!(error = %e, "failed to load AI models"))
    }
}
