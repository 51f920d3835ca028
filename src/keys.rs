//! Keybinding definitions for postdesk
//!
//! All keybindings are defined here, together with the help entries and
//! status bar hints that describe them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::i18n::Locale;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Ctrl+L (refresh)
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+S (save in the editor)
pub fn is_save_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 's')
}

/// Ctrl+A (open the AI prompt line in the editor)
pub fn is_assist_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'a')
}

/// Ctrl+O (choose the AI model in the editor)
pub fn is_model_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'o')
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Back to previous view
pub const ESC: KeyCode = KeyCode::Esc;

/// Refresh (alternative to Ctrl+L)
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Toggle interface language
pub const LOCALE: KeyCode = KeyCode::Char('L');

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Post actions (Posts View and Post View)
// =============================================================================

/// Open the selected post
pub const OPEN: KeyCode = KeyCode::Enter;

/// Cycle the status filter (Posts View)
pub const FILTER: KeyCode = KeyCode::Char('f');

pub const APPROVE: KeyCode = KeyCode::Char('a');
pub const REJECT: KeyCode = KeyCode::Char('x');
pub const PUBLISH: KeyCode = KeyCode::Char('p');

/// Publish after editing the final text
pub const PUBLISH_EDIT: KeyCode = KeyCode::Char('P');

pub const SCHEDULE: KeyCode = KeyCode::Char('s');
pub const CLASSIFY: KeyCode = KeyCode::Char('c');

// =============================================================================
// Post View keys
// =============================================================================

/// Next text tab
pub const NEXT_TAB: KeyCode = KeyCode::Tab;

/// Edit processed text (or the suggestion on the Improved tab)
pub const EDIT: KeyCode = KeyCode::Char('e');

/// Edit original text
pub const EDIT_ORIGINAL: KeyCode = KeyCode::Char('o');

/// Ask the backend for an improved text
pub const IMPROVE: KeyCode = KeyCode::Char('i');

/// Save the suggestion as processed text
pub const SAVE_SUGGESTION: KeyCode = KeyCode::Char('w');

/// Discard the suggestion
pub const DISCARD_SUGGESTION: KeyCode = KeyCode::Char('d');

/// Open the media gallery
pub const MEDIA: KeyCode = KeyCode::Char('m');

/// Scroll text down/up
pub const SCROLL_DOWN: KeyCode = KeyCode::Char('J');
pub const SCROLL_UP: KeyCode = KeyCode::Char('K');

// =============================================================================
// Media View keys
// =============================================================================

/// Toggle fullscreen item
pub const FULLSCREEN: KeyCode = KeyCode::Enter;

/// Copy the item URL
pub const COPY_URL: KeyCode = KeyCode::Char('y');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "r/Ctrl+l",
        description: "Refresh",
    },
    KeyBindEntry {
        key: "L",
        description: "Switch language (ru/en)",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
];

pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

pub const POSTS_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Open post",
    },
    KeyBindEntry {
        key: "f",
        description: "Cycle status filter",
    },
    KeyBindEntry {
        key: "a",
        description: "Approve (choose channel)",
    },
    KeyBindEntry {
        key: "x",
        description: "Reject",
    },
    KeyBindEntry {
        key: "p",
        description: "Publish now",
    },
    KeyBindEntry {
        key: "P",
        description: "Publish with edited text",
    },
    KeyBindEntry {
        key: "s",
        description: "Schedule publication",
    },
    KeyBindEntry {
        key: "c",
        description: "Re-run classification",
    },
];

pub const POST_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Tab",
        description: "Next text tab",
    },
    KeyBindEntry {
        key: "J/K",
        description: "Scroll text",
    },
    KeyBindEntry {
        key: "e",
        description: "Edit processed text / suggestion",
    },
    KeyBindEntry {
        key: "o",
        description: "Edit original text",
    },
    KeyBindEntry {
        key: "i",
        description: "Improve text with AI",
    },
    KeyBindEntry {
        key: "w",
        description: "Save suggestion",
    },
    KeyBindEntry {
        key: "d",
        description: "Discard suggestion",
    },
    KeyBindEntry {
        key: "m",
        description: "Media gallery",
    },
];

pub const EDITOR_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+s",
        description: "Save / continue",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel",
    },
    KeyBindEntry {
        key: "Ctrl+a",
        description: "AI prompt (rewrites the text)",
    },
    KeyBindEntry {
        key: "Ctrl+o",
        description: "Choose AI model",
    },
];

pub const MEDIA_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Toggle fullscreen",
    },
    KeyBindEntry {
        key: "y",
        description: "Copy URL",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label_en: &'static str,
    pub label_ru: &'static str,
    pub color: Color,
}

impl KeyHint {
    /// Label in the interface language
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => self.label_ru,
            Locale::En => self.label_en,
        }
    }
}

const fn hint(
    key: &'static str,
    label_en: &'static str,
    label_ru: &'static str,
    color: Color,
) -> KeyHint {
    KeyHint {
        key,
        label_en,
        label_ru,
        color,
    }
}

pub const HINT_HELP: KeyHint = hint("?", "Help", "Справка", Color::Cyan);
pub const HINT_QUIT: KeyHint = hint("q", "Quit", "Выход", Color::Red);
pub const HINT_BACK: KeyHint = hint("q", "Back", "Назад", Color::Red);
pub const HINT_REFRESH: KeyHint = hint("r", "Refresh", "Обновить", Color::Blue);
pub const HINT_LOCALE: KeyHint = hint("L", "Lang", "Язык", Color::Blue);
pub const HINT_OPEN: KeyHint = hint("Enter", "Open", "Открыть", Color::Green);
pub const HINT_FILTER: KeyHint = hint("f", "Filter", "Фильтр", Color::Cyan);
pub const HINT_APPROVE: KeyHint = hint("a", "Approve", "Одобрить", Color::Green);
pub const HINT_REJECT: KeyHint = hint("x", "Reject", "Отклонить", Color::Red);
pub const HINT_PUBLISH: KeyHint = hint("p", "Publish", "Опубликовать", Color::Green);
pub const HINT_SCHEDULE: KeyHint = hint("s", "Schedule", "Запланировать", Color::Magenta);
pub const HINT_CLASSIFY: KeyHint = hint("c", "Classify", "Рубрика", Color::Yellow);
pub const HINT_TAB: KeyHint = hint("Tab", "Text", "Текст", Color::Cyan);
pub const HINT_EDIT: KeyHint = hint("e", "Edit", "Правка", Color::Green);
pub const HINT_IMPROVE: KeyHint = hint("i", "Improve", "Улучшить", Color::Magenta);
pub const HINT_SAVE_SUGGESTION: KeyHint = hint("w", "Save", "Сохранить", Color::Green);
pub const HINT_DISCARD: KeyHint = hint("d", "Discard", "Сбросить", Color::Red);
pub const HINT_MEDIA: KeyHint = hint("m", "Media", "Медиа", Color::Cyan);
pub const HINT_SAVE: KeyHint = hint("^S", "Save", "Сохранить", Color::Green);
pub const HINT_CANCEL_ESC: KeyHint = hint("Esc", "Cancel", "Отмена", Color::Red);
pub const HINT_ASSIST: KeyHint = hint("^A", "AI", "ИИ", Color::Magenta);
pub const HINT_MODEL: KeyHint = hint("^O", "Model", "Модель", Color::Magenta);
pub const HINT_RUN_PROMPT: KeyHint = hint("Enter", "Run", "Запуск", Color::Green);
pub const HINT_FULLSCREEN: KeyHint = hint("Enter", "Fullscreen", "Весь экран", Color::Green);
pub const HINT_COPY: KeyHint = hint("y", "Copy URL", "Копировать URL", Color::Cyan);
pub const HINT_NAV: KeyHint = hint("j/k", "Move", "Выбор", Color::Blue);
pub const HINT_YES: KeyHint = hint("y", "Yes", "Да", Color::Green);
pub const HINT_NO: KeyHint = hint("n", "No", "Нет", Color::Red);
pub const HINT_SELECT: KeyHint = hint("Enter", "Select", "Выбрать", Color::Green);
pub const HINT_DIALOG_CANCEL: KeyHint = hint("Esc", "Cancel", "Отмена", Color::Red);

/// Dialog kind for hint selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHintKind {
    /// y/n confirmation
    Confirm,
    /// Enter picks the item under the cursor
    Select,
}

/// Context for dynamic hint selection
#[derive(Debug, Default)]
pub struct HintContext {
    /// Active dialog kind (overrides view hints)
    pub dialog: Option<DialogHintKind>,
    /// Post View shows an unsaved suggestion
    pub has_suggestion: bool,
    /// Post has media
    pub has_media: bool,
    /// Editor offers the AI prompt line
    pub assist_available: bool,
    /// Editor prompt line is open
    pub prompt_open: bool,
}

/// Hints for the current context
///
/// Priority: dialog > view. Help has no status bar.
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    if let Some(kind) = ctx.dialog {
        return dialog_hints(kind);
    }
    match view {
        View::Posts => vec![
            HINT_OPEN,
            HINT_FILTER,
            HINT_APPROVE,
            HINT_REJECT,
            HINT_PUBLISH,
            HINT_SCHEDULE,
            HINT_CLASSIFY,
            HINT_REFRESH,
            HINT_LOCALE,
            HINT_HELP,
            HINT_QUIT,
        ],
        View::Post => post_hints(ctx),
        View::Editor => editor_hints(ctx),
        View::Media => vec![HINT_NAV, HINT_FULLSCREEN, HINT_COPY, HINT_BACK],
        View::Help => vec![],
    }
}

fn dialog_hints(kind: DialogHintKind) -> Vec<KeyHint> {
    match kind {
        DialogHintKind::Confirm => vec![HINT_YES, HINT_NO],
        DialogHintKind::Select => vec![HINT_NAV, HINT_SELECT, HINT_DIALOG_CANCEL],
    }
}

fn post_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut h = vec![HINT_TAB, HINT_EDIT, HINT_IMPROVE];
    if ctx.has_suggestion {
        h.extend([HINT_SAVE_SUGGESTION, HINT_DISCARD]);
    }
    h.extend([HINT_APPROVE, HINT_REJECT, HINT_PUBLISH, HINT_SCHEDULE, HINT_CLASSIFY]);
    if ctx.has_media {
        h.push(HINT_MEDIA);
    }
    h.extend([HINT_HELP, HINT_BACK]);
    h
}

fn editor_hints(ctx: &HintContext) -> Vec<KeyHint> {
    if ctx.prompt_open {
        return vec![HINT_RUN_PROMPT, HINT_MODEL, HINT_CANCEL_ESC];
    }
    let mut h = vec![HINT_SAVE, HINT_CANCEL_ESC];
    if ctx.assist_available {
        h.extend([HINT_ASSIST, HINT_MODEL]);
    }
    h
}
