//! postdesk - terminal moderation console for a Telegram repost pipeline
//!
//! Posts collected from source channels wait in a backend queue. postdesk
//! lists them, lints their Telegram Markdown, edits and AI-rewrites their
//! text, and approves, schedules or publishes them to target channels.
//!
//! This library provides:
//! - [`api`]: Backend HTTP client, request types and the query cache
//! - [`app`]: Application state and logic
//! - [`config`]: Command-line and environment configuration
//! - [`forms`]: Action forms (approve, publish, schedule, edit, improve)
//! - [`i18n`]: Russian and English UI strings
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup
//! - [`markdown`]: Telegram Markdown linting and preview
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod forms;
pub mod i18n;
pub mod keys;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod ui;
