//! Modal dialogs
//!
//! - Confirm dialog: Yes/No confirmation
//! - Select dialog: pick one item from a list (target channel, AI model)

mod confirm;
mod select;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::keys;

/// What to do with a dialog's result
///
/// Not `Copy`; clone it out of `active_dialog` before closing the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// Target channel for approval (Select)
    ApproveChannel { post_id: i64 },
    /// Approve with the pending approve form (Confirm)
    ConfirmApprove,
    /// Target channel for publishing (Select); `edit_text` opens the editor
    /// on the publish text before confirming
    PublishChannel { post_id: i64, edit_text: bool },
    /// Publish with the pending publish form (Confirm)
    ConfirmPublish,
    /// Target channel for scheduling (Select)
    ScheduleChannel { post_id: i64 },
    /// Reject a post (Confirm)
    RejectPost { post_id: i64 },
    /// AI model for the prompt panel (Select)
    SelectModel,
}

/// Selection item for Select dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// Display label
    pub label: String,
    /// Value returned on confirm
    pub value: String,
}

impl SelectItem {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (target channel, warning, etc.)
        detail: Option<String>,
    },
    /// Single selection; Enter confirms the item under the cursor
    Select {
        title: String,
        message: String,
        items: Vec<SelectItem>,
        detail: Option<String>,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed; carries the selected value for Select dialogs
    Confirmed(Vec<String>),
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub kind: DialogKind,
    /// Cursor position (Select dialog)
    pub cursor: usize,
    pub callback_id: DialogCallback,
}

impl Dialog {
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Select dialog with the cursor on the item whose value is `preselected`
    pub fn select(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        preselected: Option<&str>,
        callback_id: DialogCallback,
    ) -> Self {
        let cursor = preselected
            .and_then(|value| items.iter().position(|item| item.value == value))
            .unwrap_or(0);
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
                detail: None,
            },
            cursor,
            callback_id,
        }
    }

    /// Handle key input; `Some(result)` when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &self.kind {
            DialogKind::Confirm { .. } => self.handle_confirm_key(key),
            DialogKind::Select { .. } => self.handle_select_key(key),
        }
    }

    /// Render the dialog centered in `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Select {
                title,
                message,
                items,
                detail,
            } => self.render_select(frame, area, title, message, items, detail.as_deref()),
        }
    }
}

/// A `width` x `height` rectangle centered in `area`
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}
