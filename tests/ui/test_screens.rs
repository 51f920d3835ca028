//! Whole-screen rendering of the App

use crossterm::event::KeyCode;
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use postdesk::app::App;

use crate::common::{FakeBackend, app_with, channel, post, post_with_media, press};

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

fn screen(app: &mut App, width: u16, height: u16) -> String {
    draw(app, width, height).backend().to_string()
}

#[test]
fn test_posts_list_screen() {
    let backend = FakeBackend::new(vec![
        post(1, "pending", None),
        post(2, "approved", Some("Ready to go")),
    ]);
    let mut app = app_with(&backend);

    let terminal = draw(&mut app, 80, 7);
    assert_snapshot!(terminal.backend(), @r#"
    "┌────────────────────────────── Posts · All (2) ───────────────────────────────┐"
    "│#1     Pending       2024-05-01 09:30    Original text of post 1              │"
    "│#2     Approved      2024-05-01 09:30    Ready to go                          │"
    "│                                                                              │"
    "│                                                                              │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    " [Enter] Open   [f] Filter   [a] Approve   [x] Reject   [p] Publish   [s] Schedu"
    "#);
}

#[test]
fn test_empty_list_screen() {
    let backend = FakeBackend::new(vec![]);
    let mut app = app_with(&backend);

    let terminal = draw(&mut app, 60, 8);
    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────── Posts · All (0) ─────────────────────┐"
    "│                                                          │"
    "│                      No posts found                      │"
    "│                                                          │"
    "│                  [f] filter  [r] refresh                 │"
    "│                                                          │"
    "└──────────────────────────────────────────────────────────┘"
    " [Enter] Open   [f] Filter   [a] Approve   [x] Reject   [p] "
    "#);
}

#[test]
fn test_post_detail_screen() {
    let backend = FakeBackend::new(vec![post(1, "processed", Some("**Draft** text"))]);
    let mut app = app_with(&backend);
    press(&mut app, &[KeyCode::Enter]);

    let out = screen(&mut app, 140, 30);
    assert!(out.contains("Post #1"));
    assert!(out.contains("Processed"));
    assert!(out.contains("**Draft** text"));
    assert!(out.contains("Markdown"));
}

#[test]
fn test_media_screen() {
    let backend = FakeBackend::new(vec![post_with_media(9)]);
    let mut app = app_with(&backend);
    press(&mut app, &[KeyCode::Enter, KeyCode::Char('m')]);

    let out = screen(&mut app, 140, 24);
    assert!(out.contains("http://media.test/api/media/1/photo.jpg"));
    assert!(out.contains("http://media.test/api/media/1/report.pdf"));
}

#[test]
fn test_editor_screen() {
    let backend = FakeBackend::new(vec![post(1, "processed", Some("Draft"))]);
    let mut app = app_with(&backend);
    press(&mut app, &[KeyCode::Enter, KeyCode::Char('e')]);

    let out = screen(&mut app, 140, 24);
    assert!(out.contains("Edit #1"));
    assert!(out.contains("Draft"));
    assert!(out.contains("[^S] Save"));
}

#[test]
fn test_channel_dialog_over_list() {
    let backend = FakeBackend::new(vec![post(1, "processed", Some("Ready"))])
        .with_channels(vec![channel(3, "Main news", true)]);
    let mut app = app_with(&backend);
    press(&mut app, &[KeyCode::Char('a')]);

    let out = screen(&mut app, 120, 24);
    assert!(out.contains("Select the target channel:"));
    assert!(out.contains("Main news"));
}

#[test]
fn test_russian_locale_screen() {
    let backend = FakeBackend::new(vec![post(1, "pending", None)]);
    let mut app = app_with(&backend);
    press(&mut app, &[KeyCode::Char('L')]);

    let out = screen(&mut app, 120, 20);
    assert!(out.contains("Посты · Все (1)"));
    assert!(out.contains("Ожидает"));
    assert!(out.contains("[f] Фильтр"));
    assert!(!out.contains("[f] Filter"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let backend = FakeBackend::new(vec![post(1, "pending", None)]);
    let mut app = app_with(&backend);

    let _ = screen(&mut app, 10, 3);
    press(&mut app, &[KeyCode::Enter]);
    let _ = screen(&mut app, 10, 3);
}
