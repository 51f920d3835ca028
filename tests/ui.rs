//! UI snapshot tests using insta + ratatui TestBackend
//!
//! These tests render whole screens and dialogs and compare the terminal
//! buffer against inline snapshots.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

#[path = "common/mod.rs"]
mod common;

#[path = "ui/test_dialog.rs"]
mod test_dialog;

#[path = "ui/test_screens.rs"]
mod test_screens;
