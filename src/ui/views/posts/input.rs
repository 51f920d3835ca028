//! Posts View key handling

use crossterm::event::KeyEvent;

use super::{PostsAction, PostsView};
use crate::keys;

impl PostsView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> PostsAction {
        match key.code {
            // Navigation
            k if keys::is_move_down(k) => {
                self.select_next();
                PostsAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                PostsAction::None
            }
            k if k == keys::GO_TOP => {
                self.select_first();
                PostsAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.select_last();
                PostsAction::None
            }
            k if k == keys::FILTER => {
                self.cycle_filter();
                PostsAction::Reload
            }

            // Post actions
            code => {
                let Some(post_id) = self.selected_post().map(|p| p.id) else {
                    return PostsAction::None;
                };
                match code {
                    keys::OPEN => PostsAction::Open(post_id),
                    keys::APPROVE => PostsAction::Approve(post_id),
                    keys::REJECT => PostsAction::Reject(post_id),
                    keys::PUBLISH => PostsAction::Publish {
                        post_id,
                        edit_text: false,
                    },
                    keys::PUBLISH_EDIT => PostsAction::Publish {
                        post_id,
                        edit_text: true,
                    },
                    keys::SCHEDULE => PostsAction::Schedule(post_id),
                    keys::CLASSIFY => PostsAction::Classify(post_id),
                    _ => PostsAction::None,
                }
            }
        }
    }
}
