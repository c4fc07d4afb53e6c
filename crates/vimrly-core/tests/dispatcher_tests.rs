//! Dispatcher integration tests

mod common;

use std::time::Duration;

use common::driver::{Call, RecordingDriver};
use vimrly_core::{
    Config, Direction, Dispatch, Dispatcher, KeyInput, Mode, NullDriver, SessionState,
};

fn command_session(driver: RecordingDriver) -> (Dispatcher<RecordingDriver>, SessionState) {
    let mut state = SessionState::new();
    let mut dispatcher = Dispatcher::new(driver);
    dispatcher.set_mode(&mut state, Mode::Command);
    (dispatcher, state)
}

fn press(dispatcher: &mut Dispatcher<RecordingDriver>, state: &mut SessionState, keys: &[&str]) {
    for key in keys {
        dispatcher.dispatch(key, state);
    }
}

// === Command Mode ===

#[test]
fn test_single_keys_reach_driver() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(
        &mut dispatcher,
        &mut state,
        &["h", "j", "k", "l", "w", "b", "0", "$", "G", "u", "."],
    );

    assert_eq!(
        dispatcher.driver().calls,
        vec![
            Call::MoveCursor(Direction::Left),
            Call::MoveCursor(Direction::Down),
            Call::MoveCursor(Direction::Up),
            Call::MoveCursor(Direction::Right),
            Call::MoveWord(Direction::Right, false),
            Call::MoveWord(Direction::Left, false),
            Call::LineStart,
            Call::LineEnd,
            Call::DocEnd,
            Call::Undo,
            Call::Redo,
        ]
    );
    assert_eq!(state.mode(), Mode::Command);
    assert_eq!(state.last_command(), ".");
}

#[test]
fn test_unknown_key_is_consumed_without_action() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    assert_eq!(dispatcher.dispatch("x", &mut state), Dispatch::Consumed);
    assert!(dispatcher.driver().calls.is_empty());
    assert_eq!(state.last_command(), "x");
    assert_eq!(state.pending_command(), "");
}

#[test]
fn test_gg_goes_to_document_start() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    assert_eq!(dispatcher.dispatch("g", &mut state), Dispatch::Pending);
    assert_eq!(state.pending_command(), "g");
    assert_eq!(dispatcher.dispatch("g", &mut state), Dispatch::Consumed);

    assert_eq!(dispatcher.driver().calls, vec![Call::DocStart]);
    assert_eq!(state.pending_command(), "");
    assert!(dispatcher.armed_prefix().is_none());
}

#[test]
fn test_g_then_h_cancels() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(&mut dispatcher, &mut state, &["g", "h"]);

    assert_eq!(dispatcher.driver().count(&Call::DocStart), 0);
    assert!(dispatcher.driver().calls.is_empty());
    assert_eq!(state.pending_command(), "");
    assert_eq!(state.last_command(), "h");
}

#[test]
fn test_yy_yanks_line() {
    let mut driver = RecordingDriver::default();
    driver.line = "first line".to_string();
    let (mut dispatcher, mut state) = command_session(driver);

    press(&mut dispatcher, &mut state, &["y", "y"]);

    assert_eq!(dispatcher.driver().calls, vec![Call::YankLine]);
    assert_eq!(state.clipboard(), "first line");
}

#[test]
fn test_dd_deletes_line() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(&mut dispatcher, &mut state, &["d", "d"]);

    assert_eq!(dispatcher.driver().calls, vec![Call::DeleteLine]);
    assert_eq!(state.last_command(), "d");
}

#[test]
fn test_colon_q_turns_off() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    assert_eq!(dispatcher.dispatch(":", &mut state), Dispatch::Pending);
    assert_eq!(dispatcher.dispatch("q", &mut state), Dispatch::Consumed);

    assert_eq!(state.mode(), Mode::Off);
    assert_eq!(dispatcher.driver().calls, vec![Call::ClearSelection]);
    assert_eq!(dispatcher.dispatch("h", &mut state), Dispatch::PassThrough);
}

#[test]
fn test_colon_with_other_key_is_discarded() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(&mut dispatcher, &mut state, &[":", "w"]);

    assert_eq!(state.mode(), Mode::Command);
    assert!(dispatcher.driver().calls.is_empty());
}

#[test]
fn test_paste_uses_clipboard() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("p", &mut state);
    assert!(dispatcher.driver().calls.is_empty());

    state.set_clipboard("pasted");
    dispatcher.dispatch("p", &mut state);
    assert_eq!(
        dispatcher.driver().calls,
        vec![Call::Paste("pasted".to_string())]
    );
}

// === Prefix Expiry ===

#[test]
fn test_d_expiry_deletes_at_cursor() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("d", &mut state);
    let generation = dispatcher.armed_prefix().unwrap().generation;

    assert!(dispatcher.expire_prefix(generation, &mut state));
    assert_eq!(dispatcher.driver().calls, vec![Call::DeleteAtCursor]);
    assert_eq!(state.pending_command(), "");
    assert_eq!(state.last_command(), "d");
}

#[test]
fn test_y_expiry_yanks_one_character() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::with_selection("a"));

    dispatcher.dispatch("y", &mut state);
    let generation = dispatcher.armed_prefix().unwrap().generation;
    dispatcher.expire_prefix(generation, &mut state);

    assert_eq!(
        dispatcher.driver().calls,
        vec![
            Call::ExtendSelection(Direction::Right),
            Call::YankSelection
        ]
    );
    assert_eq!(state.clipboard(), "a");
}

#[test]
fn test_g_expiry_does_nothing() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("g", &mut state);
    let generation = dispatcher.armed_prefix().unwrap().generation;

    assert!(dispatcher.expire_prefix(generation, &mut state));
    assert!(dispatcher.driver().calls.is_empty());
    assert_eq!(state.pending_command(), "");
}

#[test]
fn test_stale_expiry_after_rearm_is_ignored() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("d", &mut state);
    let stale = dispatcher.armed_prefix().unwrap().generation;
    press(&mut dispatcher, &mut state, &["d", "d"]);
    let live = dispatcher.armed_prefix().unwrap().generation;
    assert_ne!(stale, live);

    assert!(!dispatcher.expire_prefix(stale, &mut state));
    assert_eq!(state.pending_command(), "d");
    assert_eq!(dispatcher.driver().calls, vec![Call::DeleteLine]);

    assert!(dispatcher.expire_prefix(live, &mut state));
    assert_eq!(
        dispatcher.driver().calls,
        vec![Call::DeleteLine, Call::DeleteAtCursor]
    );
}

#[tokio::test(start_paused = true)]
async fn test_overdue_prefix_expires_before_next_key() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("d", &mut state);
    tokio::time::advance(Duration::from_millis(600)).await;
    assert_eq!(dispatcher.dispatch("d", &mut state), Dispatch::Pending);

    assert_eq!(dispatcher.driver().calls, vec![Call::DeleteAtCursor]);
    assert_eq!(state.pending_command(), "d");
    assert_eq!(state.last_command(), "d");
}

#[tokio::test(start_paused = true)]
async fn test_prefix_within_timeout_still_resolves() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("g", &mut state);
    tokio::time::advance(Duration::from_millis(499)).await;
    assert!(!dispatcher.expire_due_prefix(&mut state));
    dispatcher.dispatch("g", &mut state);

    assert_eq!(dispatcher.driver().calls, vec![Call::DocStart]);
}

#[test]
fn test_expiry_after_mode_change_runs_no_fallback() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("d", &mut state);
    let generation = dispatcher.armed_prefix().unwrap().generation;
    state.set_mode(Mode::Insert);

    dispatcher.expire_prefix(generation, &mut state);
    assert!(dispatcher.driver().calls.is_empty());
    assert_eq!(state.mode(), Mode::Insert);
}

// === Insert Mode ===

#[test]
fn test_insert_escape_releases_focus_once() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    dispatcher.dispatch("i", &mut state);
    assert_eq!(state.mode(), Mode::Insert);
    assert_eq!(dispatcher.dispatch("h", &mut state), Dispatch::PassThrough);
    assert_eq!(dispatcher.dispatch("Esc", &mut state), Dispatch::Consumed);

    assert_eq!(state.mode(), Mode::Command);
    assert_eq!(dispatcher.driver().calls, vec![Call::ReleaseFocus]);
}

#[test]
fn test_text_fields_intercepted_when_configured() {
    let config = Config {
        intercept_text_fields: true,
        ..Config::default()
    };
    let mut state = SessionState::new();
    let mut dispatcher = Dispatcher::from_config(RecordingDriver::default(), &config);
    dispatcher.set_mode(&mut state, Mode::Insert);

    let result = dispatcher.dispatch_input(&KeyInput::in_text_field("Escape"), &mut state);
    assert_eq!(result, Dispatch::Consumed);
    assert_eq!(state.mode(), Mode::Command);
}

// === Visual Mode ===

#[test]
fn test_visual_yank_scenario() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::with_selection("lo"));

    press(&mut dispatcher, &mut state, &["i", "Escape", "v", "h", "h", "y"]);

    let driver = dispatcher.driver();
    assert_eq!(state.mode(), Mode::Command);
    assert_eq!(driver.count(&Call::ExtendSelection(Direction::Left)), 2);
    assert_eq!(driver.count(&Call::YankSelection), 1);
    assert_eq!(state.clipboard(), "lo");
}

#[test]
fn test_visual_delete_saves_selection() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::with_selection("cut me"));

    press(&mut dispatcher, &mut state, &["v", "l", "d"]);

    assert_eq!(
        dispatcher.driver().calls,
        vec![
            Call::ExtendSelection(Direction::Right),
            Call::DeleteSelection
        ]
    );
    assert_eq!(state.clipboard(), "cut me");
    assert_eq!(state.mode(), Mode::Command);
}

#[test]
fn test_visual_paste_replaces_selection() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());
    state.set_clipboard("new");

    press(&mut dispatcher, &mut state, &["v", "w", "p"]);

    assert_eq!(
        dispatcher.driver().calls,
        vec![
            Call::MoveWord(Direction::Right, true),
            Call::Paste("new".to_string())
        ]
    );
    assert_eq!(state.mode(), Mode::Command);
}

#[test]
fn test_visual_undo_keeps_mode() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(&mut dispatcher, &mut state, &["v", "u", "z"]);

    assert_eq!(dispatcher.driver().calls, vec![Call::Undo]);
    assert_eq!(state.mode(), Mode::Visual);
}

#[test]
fn test_visual_escape_clears_selection() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::default());

    press(&mut dispatcher, &mut state, &["v", "Escape"]);

    assert_eq!(dispatcher.driver().calls, vec![Call::ClearSelection]);
    assert_eq!(state.mode(), Mode::Command);
}

#[test]
fn test_clipboard_persists_across_mode_changes() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::with_selection("keep"));

    press(&mut dispatcher, &mut state, &["v", "y"]);
    press(&mut dispatcher, &mut state, &["i", "Escape", "v", "Escape"]);
    assert_eq!(state.clipboard(), "keep");

    dispatcher.dispatch("p", &mut state);
    assert_eq!(
        dispatcher.driver().calls.last(),
        Some(&Call::Paste("keep".to_string()))
    );
}

// === Missing Editor ===

#[test]
fn test_missing_editor_keeps_mode() {
    let (mut dispatcher, mut state) = command_session(RecordingDriver::unavailable());
    state.set_clipboard("text");

    for key in ["h", "j", "k", "l", "w", "b", "0", "$", "G", "u", ".", "p"] {
        assert_eq!(dispatcher.dispatch(key, &mut state), Dispatch::Consumed);
        assert_eq!(state.mode(), Mode::Command);
    }
    press(&mut dispatcher, &mut state, &["g", "g", "d", "d", "y", "y"]);
    assert_eq!(state.mode(), Mode::Command);

    dispatcher.dispatch("v", &mut state);
    for key in ["h", "y", "d", "p"] {
        dispatcher.dispatch(key, &mut state);
        assert_eq!(state.mode(), Mode::Visual);
    }
    assert_eq!(state.clipboard(), "text");
}

#[test]
fn test_null_driver_never_panics() {
    let mut state = SessionState::new();
    let mut dispatcher = Dispatcher::new(NullDriver);
    dispatcher.set_mode(&mut state, Mode::Command);

    for key in ["g", "g", "y", "y", ":", "x", "i", "Escape", "v", "y", "Escape"] {
        dispatcher.dispatch(key, &mut state);
    }
    assert_eq!(state.mode(), Mode::Command);
}
