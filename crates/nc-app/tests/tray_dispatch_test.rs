//! Tray menu actions end to end, including what the user is shown.

mod common;

use std::path::PathBuf;

use common::{build_app, FakeClipboard, MemoryFiles, ScriptedDialog, Shown};
use nc_app::{AboutInfo, DispatchOutcome, TrayAction};

fn about() -> AboutInfo {
    AboutInfo {
        product_name: "NavClip".into(),
        version: "0.1.0".into(),
        sources: None,
    }
}

#[test]
fn about_shows_version() {
    let dialog = ScriptedDialog::new();
    let app = build_app(FakeClipboard::empty(), MemoryFiles::new(), dialog.clone());

    let outcome = app.dispatcher(about()).dispatch(TrayAction::About);

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(
        dialog.shown(),
        vec![Shown::Info("NavClip clipboard manager, ver: 0.1.0".into())]
    );
}

#[test]
fn clipboard_to_base64_reports_the_format() {
    let dialog = ScriptedDialog::new();
    let app = build_app(
        FakeClipboard::with_bytes("TEXT", b"hello"),
        MemoryFiles::new(),
        dialog.clone(),
    );

    let outcome = app.dispatcher(about()).dispatch(TrayAction::ClipboardToText);

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(
        dialog.shown(),
        vec![Shown::Info("TEXT has been converted to Base64 text format".into())]
    );
}

#[test]
fn base64_to_clipboard_reports_the_restored_format() {
    let dialog = ScriptedDialog::new();
    let clipboard = FakeClipboard::with_bytes("TEXT", b"hello");
    let app = build_app(clipboard.clone(), MemoryFiles::new(), dialog.clone());
    let dispatcher = app.dispatcher(about());

    dispatcher.dispatch(TrayAction::ClipboardToText);
    let outcome = dispatcher.dispatch(TrayAction::TextToClipboard);

    assert_eq!(outcome, DispatchOutcome::Completed);
    assert_eq!(
        dialog.shown().last(),
        Some(&Shown::Info("TEXT has been pushed to the clipboard".into()))
    );
    assert_eq!(clipboard.entries()[0].format.as_str(), "TEXT");
}

#[test]
fn save_with_empty_clipboard_shows_only_the_error() {
    let dialog = ScriptedDialog::answering(vec![Some(PathBuf::from("/records/out"))]);
    let files = MemoryFiles::new();
    let app = build_app(FakeClipboard::empty(), files.clone(), dialog.clone());

    let outcome = app.dispatcher(about()).dispatch(TrayAction::SaveToFile);

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(dialog.prompts(), 0);
    assert_eq!(
        dialog.shown(),
        vec![Shown::Error("No data in the clipboard".into())]
    );
    assert!(files.is_empty());
}

#[test]
fn three_line_paste_shows_error_and_keeps_clipboard() {
    let dialog = ScriptedDialog::new();
    let clipboard = FakeClipboard::with_text("one\ntwo\nthree");
    let app = build_app(clipboard.clone(), MemoryFiles::new(), dialog.clone());

    let outcome = app.dispatcher(about()).dispatch(TrayAction::TextToClipboard);

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert_eq!(clipboard.write_count(), 0);
    match dialog.shown().as_slice() {
        [Shown::Error(message)] => assert!(message.contains("found 3"), "{message}"),
        other => panic!("expected one error message, got {other:?}"),
    }
}

#[test]
fn cancelled_dialogs_have_no_side_effects() {
    let dialog = ScriptedDialog::answering(vec![None, None]);
    let files = MemoryFiles::new();
    let clipboard = FakeClipboard::with_bytes("TEXT", b"hello");
    let app = build_app(clipboard.clone(), files.clone(), dialog.clone());
    let dispatcher = app.dispatcher(about());

    assert_eq!(dispatcher.dispatch(TrayAction::SaveToFile), DispatchOutcome::Cancelled);
    assert_eq!(dispatcher.dispatch(TrayAction::LoadFromFile), DispatchOutcome::Cancelled);

    assert_eq!(dialog.prompts(), 2);
    assert!(dialog.shown().is_empty());
    assert!(files.is_empty());
    assert_eq!(clipboard.write_count(), 0);
}

#[test]
fn save_and_load_through_the_menu() {
    let path = PathBuf::from("/records/hello");
    let dialog = ScriptedDialog::answering(vec![Some(path.clone()), Some(path.clone())]);
    let files = MemoryFiles::new();
    let clipboard = FakeClipboard::with_bytes("TEXT", b"hello");
    let app = build_app(clipboard.clone(), files.clone(), dialog.clone());
    let dispatcher = app.dispatcher(about());

    assert_eq!(dispatcher.dispatch(TrayAction::SaveToFile), DispatchOutcome::Completed);
    assert!(files.get(&path).is_some());
    assert!(dialog.shown().is_empty());

    assert_eq!(dispatcher.dispatch(TrayAction::LoadFromFile), DispatchOutcome::Completed);
    assert_eq!(
        dialog.shown(),
        vec![Shown::Info("TEXT has been loaded into the clipboard".into())]
    );
    assert_eq!(clipboard.entries()[0].data.as_deref(), Some(&b"hello"[..]));
}

#[test]
fn exit_asks_the_shell_to_quit_without_dialogs() {
    let dialog = ScriptedDialog::new();
    let app = build_app(FakeClipboard::empty(), MemoryFiles::new(), dialog.clone());

    assert_eq!(app.dispatcher(about()).dispatch(TrayAction::Exit), DispatchOutcome::Exit);
    assert!(dialog.shown().is_empty());
}
