//! Interface language
//!
//! The pipeline's operators work in Russian by default; English is available
//! through the locale toggle. Post statuses, lint messages, notifications,
//! form messages, view titles and status bar hints are localized. The help
//! screen and the key legends inside dialogs stay in English.

use std::fmt;
use std::str::FromStr;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Locale {
    /// Russian (default)
    #[default]
    Ru,
    /// English
    En,
}

impl Locale {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Human-readable name in the language itself
    pub fn name(self) -> &'static str {
        match self {
            Locale::Ru => "Русский",
            Locale::En => "English",
        }
    }

    /// The other locale (for the toggle key)
    pub fn toggle(self) -> Self {
        match self {
            Locale::Ru => Locale::En,
            Locale::En => Locale::Ru,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Locale::Ru),
            "en" | "eng" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}' (expected 'ru' or 'en')")),
        }
    }
}

/// Operator-facing messages: notifications, error fallbacks, dialog text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    PostUpdated,
    PostApproved,
    PostRejected,
    PostPublished,
    PostScheduled,
    ClassificationDone,
    TextImproved,
    TextRewritten,
    NoChanges,
    SuggestionSaved,
    SuggestionDiscarded,
    UrlCopied,
    LocaleSwitched,
    Refreshed,

    LoadPostsFailed,
    LoadPostFailed,
    LoadChannelsFailed,
    LoadModelsFailed,
    SaveFailed,
    ApproveFailed,
    RejectFailed,
    PublishFailed,
    ScheduleFailed,
    ClassifyFailed,
    ImproveFailed,
    TokenRejected,
    NoActiveModels,

    SelectChannelTitle,
    SelectChannelMessage,
    SelectModelTitle,
    SelectModelMessage,
    ApproveTitle,
    ApproveMessage,
    PublishTitle,
    PublishMessage,
    RejectTitle,
    RejectMessage,
}

impl Msg {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => self.ru(),
            Locale::En => self.en(),
        }
    }

    fn ru(self) -> &'static str {
        match self {
            Msg::PostUpdated => "Пост обновлен",
            Msg::PostApproved => "Пост одобрен",
            Msg::PostRejected => "Пост отклонен",
            Msg::PostPublished => "Пост опубликован",
            Msg::PostScheduled => "Пост запланирован",
            Msg::ClassificationDone => "Классификация завершена",
            Msg::TextImproved => "Текст улучшен",
            Msg::TextRewritten => "Текст переписан",
            Msg::NoChanges => "Изменений нет",
            Msg::SuggestionSaved => "Улучшенный текст сохранен",
            Msg::SuggestionDiscarded => "Улучшенный текст отброшен",
            Msg::UrlCopied => "Ссылка скопирована",
            Msg::LocaleSwitched => "Язык: Русский",
            Msg::Refreshed => "Обновлено",

            Msg::LoadPostsFailed => "Не удалось загрузить посты",
            Msg::LoadPostFailed => "Не удалось загрузить пост",
            Msg::LoadChannelsFailed => "Не удалось загрузить каналы",
            Msg::LoadModelsFailed => "Не удалось загрузить модели ИИ",
            Msg::SaveFailed => "Не удалось сохранить пост",
            Msg::ApproveFailed => "Не удалось одобрить пост",
            Msg::RejectFailed => "Не удалось отклонить пост",
            Msg::PublishFailed => "Не удалось опубликовать пост",
            Msg::ScheduleFailed => "Не удалось запланировать пост",
            Msg::ClassifyFailed => "Не удалось классифицировать пост",
            Msg::ImproveFailed => "Не удалось улучшить текст",
            Msg::TokenRejected => "Токен отклонен сервером, проверьте POSTDESK_TOKEN",
            Msg::NoActiveModels => "Нет активных моделей ИИ",

            Msg::SelectChannelTitle => "Канал",
            Msg::SelectChannelMessage => "Выберите целевой канал:",
            Msg::SelectModelTitle => "Модель ИИ",
            Msg::SelectModelMessage => "Выберите модель для запроса:",
            Msg::ApproveTitle => "Одобрение",
            Msg::ApproveMessage => "Одобрить пост",
            Msg::PublishTitle => "Публикация",
            Msg::PublishMessage => "Опубликовать пост сейчас",
            Msg::RejectTitle => "Отклонение",
            Msg::RejectMessage => "Отклонить пост",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Msg::PostUpdated => "Post updated",
            Msg::PostApproved => "Post approved",
            Msg::PostRejected => "Post rejected",
            Msg::PostPublished => "Post published",
            Msg::PostScheduled => "Post scheduled",
            Msg::ClassificationDone => "Classification complete",
            Msg::TextImproved => "Text improved",
            Msg::TextRewritten => "Text rewritten",
            Msg::NoChanges => "No changes",
            Msg::SuggestionSaved => "Improved text saved",
            Msg::SuggestionDiscarded => "Improved text discarded",
            Msg::UrlCopied => "URL copied",
            Msg::LocaleSwitched => "Language: English",
            Msg::Refreshed => "Refreshed",

            Msg::LoadPostsFailed => "Could not load posts",
            Msg::LoadPostFailed => "Could not load the post",
            Msg::LoadChannelsFailed => "Could not load channels",
            Msg::LoadModelsFailed => "Could not load AI models",
            Msg::SaveFailed => "Could not save the post",
            Msg::ApproveFailed => "Could not approve the post",
            Msg::RejectFailed => "Could not reject the post",
            Msg::PublishFailed => "Could not publish the post",
            Msg::ScheduleFailed => "Could not schedule the post",
            Msg::ClassifyFailed => "Could not classify the post",
            Msg::ImproveFailed => "Could not improve the text",
            Msg::TokenRejected => "The server rejected the token, check POSTDESK_TOKEN",
            Msg::NoActiveModels => "No active AI models",

            Msg::SelectChannelTitle => "Channel",
            Msg::SelectChannelMessage => "Select the target channel:",
            Msg::SelectModelTitle => "AI model",
            Msg::SelectModelMessage => "Select the model for the prompt:",
            Msg::ApproveTitle => "Approve",
            Msg::ApproveMessage => "Approve post",
            Msg::PublishTitle => "Publish",
            Msg::PublishMessage => "Publish post now",
            Msg::RejectTitle => "Reject",
            Msg::RejectMessage => "Reject post",
        }
    }
}
