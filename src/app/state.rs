//! Application state and view management

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::api::{Backend, PostQuery, QueryCache};
use crate::config::{Config, DEFAULT_API_URL};
use crate::forms::{ApproveForm, PublishForm, ScheduleForm};
use crate::i18n::Locale;
use crate::model::{AiModel, Notification, Post, TargetChannel};
use crate::ui::components::Dialog;
use crate::ui::views::{EditorView, MediaView, PostView, PostsView};

/// Channels and models change rarely; refetch them after this long
pub const REFERENCE_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Posts,
    Post,
    Editor,
    Media,
    Help,
}

/// Wall clock used for schedule validation
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Settings the App is built with
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub locale: Locale,
    /// Base URL media files are served from
    pub media_url: String,
    pub clock: fn() -> NaiveDateTime,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            media_url: DEFAULT_API_URL.to_string(),
            clock: local_now,
        }
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            locale: config.locale,
            media_url: config.media_url.clone(),
            clock: local_now,
        }
    }
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Posts list state
    pub posts_view: PostsView,
    /// Post detail state (created on demand)
    pub post_view: Option<PostView>,
    /// Editor state (created on demand)
    pub editor_view: Option<EditorView>,
    /// Media gallery state (created on demand)
    pub media_view: Option<MediaView>,
    pub(crate) help_scroll: u16,
    pub(crate) backend: Box<dyn Backend>,
    pub(crate) posts_cache: QueryCache<PostQuery, Vec<Post>>,
    pub(crate) channels_cache: QueryCache<bool, Vec<TargetChannel>>,
    pub(crate) models_cache: QueryCache<bool, Vec<AiModel>>,
    pub locale: Locale,
    pub(crate) media_url: String,
    pub(crate) clock: fn() -> NaiveDateTime,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Approve form waiting for the channel pick and confirmation
    pub(crate) pending_approve: Option<ApproveForm>,
    /// Publish form waiting for the channel pick, text and confirmation
    pub(crate) pending_publish: Option<PublishForm>,
    /// Schedule form waiting for the channel pick
    pub(crate) pending_schedule: Option<ScheduleForm>,
}

impl App {
    /// Construct a new instance of [`App`] and load the first page of posts
    pub fn new(backend: Box<dyn Backend>, options: AppOptions) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Posts,
            previous_view: None,
            posts_view: PostsView::new(),
            post_view: None,
            editor_view: None,
            media_view: None,
            help_scroll: 0,
            backend,
            posts_cache: QueryCache::new(),
            channels_cache: QueryCache::with_stale_time(REFERENCE_STALE_TIME),
            models_cache: QueryCache::with_stale_time(REFERENCE_STALE_TIME),
            locale: options.locale,
            media_url: options.media_url,
            clock: options.clock,
            error_message: None,
            notification: None,
            active_dialog: None,
            pending_approve: None,
            pending_publish: None,
            pending_schedule: None,
        };

        app.refresh_posts();

        app
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to the previous view, or the parent of the current one
    pub(crate) fn go_back(&mut self) {
        let target = match self.previous_view.take() {
            Some(prev) if self.view_is_available(prev) && prev != self.current_view => prev,
            _ => self.parent_view(),
        };
        self.current_view = target;
    }

    fn parent_view(&self) -> View {
        match self.current_view {
            View::Editor | View::Media if self.post_view.is_some() => View::Post,
            _ => View::Posts,
        }
    }

    fn view_is_available(&self, view: View) -> bool {
        match view {
            View::Posts | View::Help => true,
            View::Post => self.post_view.is_some(),
            View::Editor => self.editor_view.is_some(),
            View::Media => self.media_view.is_some(),
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// "now" for schedule validation
    pub(crate) fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
