//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `refresh`: loading server state through the caches
//! - `actions`: post workflow calls and dialog results

mod actions;
mod clipboard;
mod input;
mod refresh;
mod render;
mod state;

pub use clipboard::ClipboardError;
pub use state::{App, AppOptions, REFERENCE_STALE_TIME, View, local_now};
