//! Snapshot tests for Dialog components
//!
//! Uses insta + ratatui TestBackend for visual regression testing.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use postdesk::ui::components::dialog::{Dialog, DialogCallback, SelectItem};

fn terminal_with(dialog: &Dialog, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            dialog.render(frame, frame.area());
        })
        .unwrap();
    terminal
}

#[test]
fn test_reject_confirmation() {
    let dialog = Dialog::confirm(
        "Reject",
        "Reject post #12?",
        None,
        DialogCallback::RejectPost { post_id: 12 },
    );

    let terminal = terminal_with(&dialog, 60, 11);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                            "
    "                                                            "
    "     ┌ Reject ────────────────────────────────────────┐     "
    "     │                                                │     "
    "     │                Reject post #12?                │     "
    "     │                                                │     "
    "     │                [Y]es       [N]o                │     "
    "     │                                                │     "
    "     └────────────────────────────────────────────────┘     "
    "                                                            "
    "                                                            "
    "#);
}

#[test]
fn test_publish_confirmation_with_channel() {
    let dialog = Dialog::confirm(
        "Publish",
        "Publish post #3?",
        Some("Main news".to_string()),
        DialogCallback::ConfirmPublish,
    );

    let terminal = terminal_with(&dialog, 60, 13);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                            "
    "                                                            "
    "     ┌ Publish ───────────────────────────────────────┐     "
    "     │                                                │     "
    "     │                Publish post #3?                │     "
    "     │                                                │     "
    "     │                    Main news                   │     "
    "     │                                                │     "
    "     │                [Y]es       [N]o                │     "
    "     │                                                │     "
    "     └────────────────────────────────────────────────┘     "
    "                                                            "
    "                                                            "
    "#);
}

#[test]
fn test_channel_picker_starts_on_preselected() {
    let items = vec![SelectItem::new("Main news", 3), SelectItem::new("Backup", 4)];
    let dialog = Dialog::select(
        "Channel",
        "Select the target channel:",
        items,
        Some("4"),
        DialogCallback::ApproveChannel { post_id: 1 },
    );
    assert_eq!(dialog.cursor, 1);

    let terminal = terminal_with(&dialog, 60, 13);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                            "
    "                                                            "
    "     ┌ Channel ───────────────────────────────────────┐     "
    "     │                                                │     "
    "     │Select the target channel:                      │     "
    "     │                                                │     "
    "     │  Main news                                     │     "
    "     │> Backup                                        │     "
    "     │                                                │     "
    "     │[j/k] Move [Enter] Select [Esc] Cancel          │     "
    "     └────────────────────────────────────────────────┘     "
    "                                                            "
    "                                                            "
    "#);
}

#[test]
fn test_model_picker_without_models() {
    let dialog = Dialog::select(
        "AI model",
        "Select the model for the prompt:",
        vec![],
        None,
        DialogCallback::SelectModel,
    );

    let terminal = terminal_with(&dialog, 60, 11);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                            "
    "                                                            "
    "     ┌ AI model ──────────────────────────────────────┐     "
    "     │                                                │     "
    "     │Select the model for the prompt:                │     "
    "     │                                                │     "
    "     │                                                │     "
    "     │[j/k] Move [Enter] Select [Esc] Cancel          │     "
    "     └────────────────────────────────────────────────┘     "
    "                                                            "
    "                                                            "
    "#);
}

#[test]
fn test_dialog_in_small_terminal_does_not_panic() {
    let dialog = Dialog::select(
        "Channel",
        "Select the target channel:",
        (1..=20).map(|i| SelectItem::new(format!("Channel {i}"), i)).collect(),
        None,
        DialogCallback::ScheduleChannel { post_id: 1 },
    );

    let terminal = terminal_with(&dialog, 20, 5);
    assert!(terminal.backend().to_string().contains("Channel"));
}
