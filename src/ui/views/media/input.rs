//! Media View key handling

use crossterm::event::KeyEvent;

use super::{MediaAction, MediaView};
use crate::keys;

impl MediaView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> MediaAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next();
                MediaAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev();
                MediaAction::None
            }
            k if k == keys::FULLSCREEN => {
                self.toggle_fullscreen();
                MediaAction::None
            }
            k if k == keys::COPY_URL => self
                .selected_url()
                .map_or(MediaAction::None, MediaAction::CopyUrl),
            k if k == keys::ESC && self.fullscreen => {
                self.fullscreen = false;
                MediaAction::None
            }
            k if k == keys::ESC || k == keys::QUIT => MediaAction::Back,
            _ => MediaAction::None,
        }
    }
}
