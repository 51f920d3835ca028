//! Editor View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};

use super::EditorView;
use crate::i18n::Locale;
use crate::model::Notification;
use crate::ui::components;
use crate::ui::widgets::render_markdown_panel;

/// Prompt line label with the chosen model
pub(super) fn prompt_title(model_label: Option<&str>, locale: Locale) -> String {
    let (heading, no_model) = match locale {
        Locale::Ru => ("Запрос к ИИ", "модель не выбрана"),
        Locale::En => ("AI prompt", "no model selected"),
    };
    format!(" {} · {} ", heading, model_label.unwrap_or(no_model))
}

impl EditorView {
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        locale: Locale,
    ) {
        let title = Line::from(format!(" {} ", self.purpose.title(locale)))
            .bold()
            .cyan()
            .centered();
        let block = components::view_block(title, area, notification);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.purpose.is_single_line() {
            let [input_area, _] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
            self.render_textarea(frame, input_area);
            return;
        }

        let (body_area, prompt_area) = if self.prompt.is_some() {
            let [body, prompt] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(inner);
            (body, Some(prompt))
        } else {
            (inner, None)
        };

        let [text_area, lint_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);
        self.render_textarea(frame, text_area);
        render_markdown_panel(frame, lint_area, &self.text(), locale);

        if let Some(prompt_area) = prompt_area {
            self.render_prompt(frame, prompt_area, locale);
        }
    }

    fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        let mut textarea = self.textarea.clone();
        let border = if self.prompt.is_some() {
            Color::DarkGray
        } else {
            Color::Green
        };
        textarea.set_block(components::colored_block(Line::from(""), border));
        frame.render_widget(&textarea, area);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, locale: Locale) {
        let Some(prompt) = self.prompt.as_deref() else {
            return;
        };

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of long input (UTF-8 safe)
        let char_count = prompt.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", prompt.chars().skip(skip).collect::<String>())
        } else {
            prompt.to_string()
        };

        let title = Line::from(prompt_title(self.model_label.as_deref(), locale)).magenta();
        frame.render_widget(
            Paragraph::new(display_text).block(components::colored_block(title, Color::Magenta)),
            area,
        );

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::super::EditorPurpose;
    use super::*;
    use crate::forms::EditForm;
    use crate::model::fixtures::sample_post;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(view: &EditorView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|f| view.render(f, f.area(), None, Locale::En))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_prompt_title() {
        assert_eq!(prompt_title(None, Locale::En), " AI prompt · no model selected ");
        assert_eq!(prompt_title(Some("GPT"), Locale::Ru), " Запрос к ИИ · GPT ");
    }

    #[test]
    fn test_render_shows_text_and_lint_panel() {
        let view = EditorView::new(EditorPurpose::Edit(EditForm::processed(&sample_post(3))));
        let screen = render_to_string(&view);
        assert!(screen.contains("Edit #3"));
        assert!(screen.contains("Original text"));
        assert!(screen.contains("Markdown"));
        assert!(!screen.contains("AI prompt"));
    }

    #[test]
    fn test_render_prompt_line() {
        let mut view = EditorView::new(EditorPurpose::Edit(EditForm::processed(&sample_post(3))));
        view.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        for c in "shorter".chars() {
            view.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        let screen = render_to_string(&view);
        assert!(screen.contains("AI prompt"));
        assert!(screen.contains("shorter"));
    }
}
