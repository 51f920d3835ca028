//! Common test utilities for integration and scenario tests.
//!
//! This module provides an in-memory backend that records every call,
//! JSON fixtures shaped like backend responses and key helpers.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_backend;

pub use fake_backend::{Call, FakeBackend};

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use postdesk::app::{App, AppOptions};
use postdesk::i18n::Locale;
use postdesk::model::{AiModel, Post, TargetChannel};

/// Fixed "now" used by scenario tests: 2024-05-01 12:00
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixed time")
}

/// A post as the backend would serve it
pub fn post(id: i64, status: &str, processed: Option<&str>) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "source_channel_id": 1,
        "original_message_id": 1000 + id,
        "original_text": format!("Original text of post {id}"),
        "processed_text": processed,
        "status": status,
        "created_at": "2024-05-01T09:30:00",
        "is_manual": false,
    }))
    .expect("valid post fixture")
}

/// A post carrying a photo and a document
pub fn post_with_media(id: i64) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "original_text": "With media",
        "status": "pending",
        "original_media": {
            "type": "media_group",
            "media_list": [
                {"type": "photo", "file_path": "media/1/photo.jpg", "file_id": "AgAD"},
                {"type": "document", "path": "media/1/report.pdf"}
            ]
        }
    }))
    .expect("valid media post fixture")
}

pub fn channel(id: i64, name: &str, is_default: bool) -> TargetChannel {
    serde_json::from_value(json!({
        "id": id,
        "channel_id": format!("-100{id}"),
        "channel_name": name,
        "is_active": true,
        "is_default": is_default,
    }))
    .expect("valid channel fixture")
}

pub fn model(id: i64, name: &str, is_default: bool) -> AiModel {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "provider": "openrouter",
        "model_id": format!("vendor/{name}"),
        "is_active": true,
        "is_default": is_default,
    }))
    .expect("valid model fixture")
}

/// App over `backend` with English strings and the fixed clock
pub fn app_with(backend: &FakeBackend) -> App {
    App::new(
        Box::new(backend.clone()),
        AppOptions {
            locale: Locale::En,
            media_url: "http://media.test".to_string(),
            clock: fixed_now,
        },
    )
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Send a sequence of plain keys
pub fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.on_key_event(key(*code));
    }
}

/// Type text one character at a time
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key_event(key(KeyCode::Char(c)));
    }
}
