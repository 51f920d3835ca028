//! Media View: gallery of a post's attachments

mod input;
mod render;

use crate::model::{MediaItem, OriginalMedia};
use crate::ui::navigation;

/// Action returned by the Media View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAction {
    None,
    Back,
    CopyUrl(String),
}

/// Media View state
#[derive(Debug)]
pub struct MediaView {
    pub(super) post_id: i64,
    /// Gallery items (capped)
    pub(super) items: Vec<MediaItem>,
    /// Item count before the cap
    pub(super) total: usize,
    pub(super) selected: usize,
    pub(super) fullscreen: bool,
    pub(super) base_url: String,
}

impl MediaView {
    pub fn new(post_id: i64, media: &OriginalMedia, base_url: &str) -> Self {
        let (shown, _) = media.gallery();
        Self {
            post_id,
            items: shown.to_vec(),
            total: media.items().len(),
            selected: 0,
            fullscreen: false,
            base_url: base_url.to_string(),
        }
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.items.get(self.selected)
    }

    pub fn selected_url(&self) -> Option<String> {
        self.selected_item().and_then(|item| item.url(&self.base_url))
    }

    /// Items hidden behind the overflow note
    pub fn hidden(&self) -> usize {
        self.total - self.items.len()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen && !self.items.is_empty();
    }

    pub fn select_next(&mut self) {
        let max = navigation::last_index(self.items.len());
        self.selected = navigation::select_next(self.selected, max);
    }

    pub fn select_prev(&mut self) {
        self.selected = navigation::select_prev(self.selected);
    }
}
