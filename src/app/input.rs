//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::i18n::Msg;
use crate::keys;
use crate::ui::views::{MediaAction, PostAction, PostsAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Dialog takes all keys while open
        if let Some(dialog) = self.active_dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        // The editor owns every key (typing must not trigger global keys)
        if self.current_view == View::Editor {
            if let Some(editor) = self.editor_view.as_mut() {
                let action = editor.handle_key(key);
                self.handle_editor_action(action);
            } else {
                self.go_back();
            }
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.refresh_current();
            return true;
        }
        match key.code {
            keys::QUIT if self.current_view == View::Posts => {
                self.quit();
                true
            }
            keys::QUIT | keys::ESC if self.current_view == View::Help => {
                self.go_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::REFRESH => {
                self.refresh_current();
                true
            }
            keys::LOCALE => {
                self.locale = self.locale.toggle();
                self.notify_info(Msg::LocaleSwitched.text(self.locale));
                true
            }
            _ => false,
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Posts => {
                let action = self.posts_view.handle_key(key);
                self.handle_posts_action(action);
            }
            View::Post => {
                if let Some(ref mut post_view) = self.post_view {
                    let action = post_view.handle_key(key);
                    self.handle_post_action(action);
                }
            }
            View::Media => {
                if let Some(ref mut media_view) = self.media_view {
                    let action = media_view.handle_key(key);
                    self.handle_media_action(action);
                }
            }
            View::Help => {
                if keys::is_move_down(key.code) {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                } else if keys::is_move_up(key.code) {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
            }
            // Handled before global keys
            View::Editor => {}
        }
    }

    fn handle_posts_action(&mut self, action: PostsAction) {
        match action {
            PostsAction::None => {}
            PostsAction::Reload => self.refresh_posts(),
            PostsAction::Open(post_id) => self.open_post(post_id),
            PostsAction::Approve(post_id) => self.start_approve(post_id),
            PostsAction::Reject(post_id) => self.start_reject(post_id),
            PostsAction::Publish { post_id, edit_text } => self.start_publish(post_id, edit_text),
            PostsAction::Schedule(post_id) => self.start_schedule(post_id),
            PostsAction::Classify(post_id) => self.execute_classify(post_id),
        }
    }

    fn handle_post_action(&mut self, action: PostAction) {
        let Some(post_id) = self.post_view.as_ref().map(|v| v.post_id()) else {
            return;
        };
        match action {
            PostAction::None => {}
            PostAction::Back => self.close_post(),
            PostAction::Edit(target) => self.start_edit(target),
            PostAction::EditSuggestion => self.edit_suggestion(),
            PostAction::Improve => self.start_improve(),
            PostAction::SaveSuggestion => self.save_suggestion(),
            PostAction::SuggestionDiscarded => {
                self.notify_info(Msg::SuggestionDiscarded.text(self.locale));
            }
            PostAction::Approve => self.start_approve(post_id),
            PostAction::Reject => self.start_reject(post_id),
            PostAction::Publish { edit_text } => self.start_publish(post_id, edit_text),
            PostAction::Schedule => self.start_schedule(post_id),
            PostAction::Classify => self.execute_classify(post_id),
            PostAction::OpenMedia => self.open_media(),
        }
    }

    fn handle_media_action(&mut self, action: MediaAction) {
        match action {
            MediaAction::None => {}
            MediaAction::Back => self.close_media(),
            MediaAction::CopyUrl(url) => self.copy_media_url(&url),
        }
    }
}
