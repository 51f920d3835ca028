//! Data models for postdesk
//!
//! UI-independent view-models of backend entities (posts, channels,
//! AI models, media) plus transient UI notifications.

mod ai_model;
mod channel;
mod media;
mod notification;
mod post;

pub use ai_model::{AiModel, active_models, default_model};
pub use channel::{SourceChannel, TargetChannel, preferred_channel};
pub use media::{
    MAX_GALLERY_ITEMS, MediaGroup, MediaItem, MediaKind, OriginalMedia, is_video_url, media_url,
    overflow_note,
};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use post::{Post, PostStatus, TextVariant, format_timestamp};
