//! Post View key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{PostAction, PostView};
use crate::forms::EditTarget;
use crate::keys;
use crate::model::TextVariant;

impl PostView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> PostAction {
        match key.code {
            k if k == keys::NEXT_TAB => {
                self.next_tab();
                PostAction::None
            }
            k if k == keys::SCROLL_DOWN || keys::is_move_down(k) => {
                self.scroll_down();
                PostAction::None
            }
            k if k == keys::SCROLL_UP || keys::is_move_up(k) => {
                self.scroll_up();
                PostAction::None
            }

            // Texts
            k if k == keys::EDIT => {
                if self.tab == TextVariant::Improved && self.has_suggestion() {
                    PostAction::EditSuggestion
                } else {
                    PostAction::Edit(EditTarget::Processed)
                }
            }
            k if k == keys::EDIT_ORIGINAL => PostAction::Edit(EditTarget::Original),
            k if k == keys::IMPROVE => PostAction::Improve,
            k if k == keys::SAVE_SUGGESTION && self.has_suggestion() => {
                PostAction::SaveSuggestion
            }
            k if k == keys::DISCARD_SUGGESTION && self.has_suggestion() => {
                self.clear_suggestion();
                PostAction::SuggestionDiscarded
            }

            // Workflow
            k if k == keys::APPROVE => PostAction::Approve,
            k if k == keys::REJECT => PostAction::Reject,
            k if k == keys::PUBLISH => PostAction::Publish { edit_text: false },
            k if k == keys::PUBLISH_EDIT => PostAction::Publish { edit_text: true },
            k if k == keys::SCHEDULE => PostAction::Schedule,
            k if k == keys::CLASSIFY => PostAction::Classify,
            k if k == keys::MEDIA && self.post.has_media() => PostAction::OpenMedia,

            // Back
            k if k == keys::QUIT => PostAction::Back,
            KeyCode::Esc => PostAction::Back,

            _ => PostAction::None,
        }
    }
}
