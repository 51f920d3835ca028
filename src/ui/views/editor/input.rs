//! Editor View key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{EditorAction, EditorView};
use crate::keys;

impl EditorView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if self.prompt.is_some() {
            return self.handle_prompt_key(key);
        }

        if keys::is_save_key(&key) {
            return EditorAction::Submit;
        }
        if key.code == keys::ESC {
            return EditorAction::Cancel;
        }
        if self.assist_available() {
            if keys::is_assist_key(&key) {
                self.open_prompt();
                return EditorAction::None;
            }
            if keys::is_model_key(&key) {
                return EditorAction::SelectModel;
            }
        }
        if self.purpose.is_single_line() {
            if key.code == KeyCode::Enter {
                return EditorAction::Submit;
            }
            // keep the buffer on one line
            if keys::is_assist_key(&key) || key.code == KeyCode::Tab {
                return EditorAction::None;
            }
        }

        // Everything else edits the buffer (Enter = newline, cursor movement, etc.)
        self.textarea.input(key);
        EditorAction::None
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> EditorAction {
        if keys::is_model_key(&key) {
            return EditorAction::SelectModel;
        }
        match key.code {
            k if k == keys::ESC => {
                self.close_prompt();
                EditorAction::None
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.as_ref() {
                    self.assist.prompt = prompt.clone();
                }
                match self.assist.submit(&self.text()) {
                    Ok(request) => EditorAction::RunAssist(request),
                    Err(e) => EditorAction::Invalid(e),
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.push(c);
                }
                EditorAction::None
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.pop();
                }
                EditorAction::None
            }
            _ => EditorAction::None,
        }
    }
}
