//! Post View: one post with its texts, lint report and media

mod input;
mod render;

use crate::forms::{EditTarget, ImproveSession};
use crate::model::{Post, TextVariant};

/// Action returned by the Post View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    None,
    Back,
    /// Open the editor on a stored text
    Edit(EditTarget),
    /// Open the editor on the current suggestion
    EditSuggestion,
    /// Request an improved text from the backend
    Improve,
    /// Save the suggestion as processed text
    SaveSuggestion,
    /// The suggestion was dropped locally
    SuggestionDiscarded,
    Approve,
    Reject,
    Publish { edit_text: bool },
    Schedule,
    Classify,
    OpenMedia,
}

const TABS: [TextVariant; 3] = [
    TextVariant::Original,
    TextVariant::Processed,
    TextVariant::Improved,
];

/// Post View state
#[derive(Debug)]
pub struct PostView {
    pub(super) post: Post,
    pub(super) tab: TextVariant,
    pub(super) scroll: u16,
    pub(super) improve: Option<ImproveSession>,
}

impl PostView {
    /// Opens on the processed tab, or the original tab when nothing is
    /// processed yet
    pub fn new(post: Post) -> Self {
        let tab = if post.text(TextVariant::Processed).is_empty() {
            TextVariant::Original
        } else {
            TextVariant::Processed
        };
        Self {
            post,
            tab,
            scroll: 0,
            improve: None,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn post_id(&self) -> i64 {
        self.post.id
    }

    /// Replace the post after a refetch or mutation; the suggestion survives
    pub fn set_post(&mut self, post: Post) {
        self.post = post;
    }

    pub fn tab(&self) -> TextVariant {
        self.tab
    }

    pub fn set_tab(&mut self, tab: TextVariant) {
        self.tab = tab;
        self.scroll = 0;
    }

    pub fn next_tab(&mut self) {
        let current = TABS.iter().position(|t| *t == self.tab).unwrap_or(0);
        self.set_tab(TABS[crate::ui::navigation::cycle_next(current, TABS.len())]);
    }

    /// Text shown in the current tab
    pub fn current_text(&self) -> &str {
        match self.tab {
            TextVariant::Improved => self.suggestion().unwrap_or(""),
            variant => self.post.text(variant),
        }
    }

    pub fn improve_session(&self) -> Option<&ImproveSession> {
        self.improve.as_ref()
    }

    pub fn improve_session_mut(&mut self) -> Option<&mut ImproveSession> {
        self.improve.as_mut()
    }

    /// Install a session holding a fresh suggestion and show it
    pub fn show_suggestion(&mut self, session: ImproveSession) {
        self.improve = Some(session);
        self.set_tab(TextVariant::Improved);
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.improve.as_ref().and_then(|s| s.suggestion.as_deref())
    }

    pub fn has_suggestion(&self) -> bool {
        self.suggestion().is_some()
    }

    /// Drop the suggestion and go back to the processed text
    pub fn clear_suggestion(&mut self) {
        self.improve = None;
        if self.tab == TextVariant::Improved {
            self.set_tab(TextVariant::Processed);
        }
    }

    pub fn scroll_down(&mut self) {
        let max = self.current_text().lines().count().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
