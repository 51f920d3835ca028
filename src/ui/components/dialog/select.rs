//! Select dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Dialog, DialogKind, DialogResult, SelectItem, centered_rect, keys};
use crate::ui::navigation;

impl Dialog {
    pub(super) fn handle_select_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Select { items, .. } = &self.kind else {
            return None;
        };

        match key.code {
            k if keys::is_move_down(k) => {
                self.cursor = navigation::select_next(self.cursor, navigation::last_index(items.len()));
                None
            }
            k if keys::is_move_up(k) => {
                self.cursor = navigation::select_prev(self.cursor);
                None
            }
            KeyCode::Enter => Some(match items.get(self.cursor) {
                Some(item) => DialogResult::Confirmed(vec![item.value.clone()]),
                None => DialogResult::Cancelled,
            }),
            KeyCode::Esc | KeyCode::Char('q') => Some(DialogResult::Cancelled),
            _ => None,
        }
    }

    pub(super) fn render_select(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        message: &str,
        items: &[SelectItem],
        detail: Option<&str>,
    ) {
        let width = 50.min(area.width.saturating_sub(4));
        let detail_lines = if detail.is_some() { 2 } else { 0 };
        let height = (items.len() as u16 + 7 + detail_lines).min(area.height.saturating_sub(2));
        let dialog_area = centered_rect(width, height, area);

        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![Line::from(""), Line::from(message), Line::from("")];

        for (i, item) in items.iter().enumerate() {
            let (cursor, style) = if i == self.cursor {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", cursor, item.label),
                style,
            )));
        }

        lines.push(Line::from(""));

        if let Some(detail_text) = detail {
            lines.push(Line::from(Span::styled(
                detail_text,
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("[j/k]", Style::default().fg(Color::Cyan)),
            Span::raw(" Move "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Select "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);
    }
}
