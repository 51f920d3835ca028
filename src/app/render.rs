//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::{App, View};
use crate::keys::{self, DialogHintKind, HintContext};
use crate::ui::components::DialogKind;
use crate::ui::widgets::{
    build_status_bar, render_error_banner, render_help_panel, render_notification_banner,
    render_status_line,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Clone notification to avoid borrow conflict with &mut self in the posts view
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        // Render main view (notification is passed to views for title bar display)
        match self.current_view {
            View::Posts => {
                self.posts_view
                    .render(frame, main_area, notification.as_ref(), self.locale)
            }
            View::Post => {
                if let Some(ref view) = self.post_view {
                    view.render(
                        frame,
                        main_area,
                        notification.as_ref(),
                        self.locale,
                        &self.media_url,
                    );
                }
            }
            View::Editor => {
                if let Some(ref view) = self.editor_view {
                    view.render(frame, main_area, notification.as_ref(), self.locale);
                }
            }
            View::Media => {
                if let Some(ref view) = self.media_view {
                    view.render(frame, main_area, notification.as_ref(), self.locale);
                }
            }
            View::Help => {
                render_help_panel(frame, main_area, self.help_scroll);
                // Help has no title bar notification
                if let Some(ref n) = notification {
                    render_notification_banner(frame, n);
                }
            }
        }

        let hints = keys::current_hints(self.current_view, &self.build_hint_context());
        if !hints.is_empty() {
            render_status_line(frame, build_status_bar(&hints, self.locale));
        }

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, area);
        }
    }

    /// Build HintContext from current App state
    fn build_hint_context(&self) -> HintContext {
        let post = self.post_view.as_ref();
        let editor = self.editor_view.as_ref();
        HintContext {
            dialog: self.dialog_hint_kind(),
            has_suggestion: post.is_some_and(|v| v.has_suggestion()),
            has_media: post.is_some_and(|v| v.post().has_media()),
            assist_available: editor.is_some_and(|e| e.assist_available()),
            prompt_open: editor.is_some_and(|e| e.is_prompt_open()),
        }
    }

    /// Convert active dialog to DialogHintKind
    fn dialog_hint_kind(&self) -> Option<DialogHintKind> {
        self.active_dialog.as_ref().map(|d| match &d.kind {
            DialogKind::Confirm { .. } => DialogHintKind::Confirm,
            DialogKind::Select { .. } => DialogHintKind::Select,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::app::state::tests::StubBackend;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_posts_screen_shows_list_and_hints() {
        let mut app = App::new(Box::new(StubBackend::with_posts(3)), AppOptions::default());
        let out = screen(&mut app);
        assert!(out.contains("Посты"));
        assert!(out.contains("#1"));
        assert!(out.contains("[f] Фильтр"));
    }

    #[test]
    fn test_help_screen_has_no_status_bar() {
        let mut app = App::new(Box::new(StubBackend::with_posts(0)), AppOptions::default());
        app.on_key_event(KeyEvent::from(KeyCode::Char('?')));
        let out = screen(&mut app);
        assert!(out.contains("postdesk - Help"));
        assert!(!out.contains("[f] Фильтр"));
    }

    #[test]
    fn test_error_banner_is_rendered() {
        let mut app = App::new(Box::new(StubBackend::with_posts(0)), AppOptions::default());
        app.set_error("Не удалось загрузить посты");
        let out = screen(&mut app);
        assert!(out.contains("Не удалось загрузить посты"));
    }
}
