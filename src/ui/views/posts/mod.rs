//! Posts View: the moderation queue

mod input;
mod render;

use crate::api::PostQuery;
use crate::i18n::Locale;
use crate::model::{Post, PostStatus};
use crate::ui::navigation;

/// Action returned by the Posts View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsAction {
    None,
    /// Filter changed; the list must be fetched again
    Reload,
    Open(i64),
    Approve(i64),
    Reject(i64),
    Publish { post_id: i64, edit_text: bool },
    Schedule(i64),
    Classify(i64),
}

/// Posts View state
#[derive(Debug, Default)]
pub struct PostsView {
    pub(super) posts: Vec<Post>,
    pub(super) selected: usize,
    pub(super) scroll_offset: usize,
    /// `None` lists every status
    pub(super) filter: Option<PostStatus>,
}

impl PostsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list, keeping the selection on the same post when it is
    /// still listed
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        let selected_id = self.selected_post().map(|p| p.id);
        self.posts = posts;
        self.selected = selected_id
            .and_then(|id| self.posts.iter().position(|p| p.id == id))
            .unwrap_or_else(|| navigation::clamp_selection(self.selected, self.posts.len()));
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn filter(&self) -> Option<&PostStatus> {
        self.filter.as_ref()
    }

    /// Query for the current filter
    pub fn query(&self) -> PostQuery {
        PostQuery::with_status(self.filter.clone())
    }

    /// all → pending → processed → approved → scheduled → published → rejected → all
    pub fn cycle_filter(&mut self) {
        let position = self
            .filter
            .as_ref()
            .and_then(|f| PostStatus::FILTERABLE.iter().position(|s| s == f))
            .map_or(0, |i| i + 1);
        self.filter = PostStatus::FILTERABLE.get(position).cloned();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Localized filter label for the title bar
    pub fn filter_label(&self, locale: Locale) -> String {
        match (&self.filter, locale) {
            (Some(status), _) => status.label(locale).to_string(),
            (None, Locale::Ru) => "Все".to_string(),
            (None, Locale::En) => "All".to_string(),
        }
    }

    pub fn select_next(&mut self) {
        let max = navigation::last_index(self.posts.len());
        self.selected = navigation::select_next(self.selected, max);
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = navigation::last_index(self.posts.len());
    }
}
