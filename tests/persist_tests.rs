//! Save/load through the store implementations.

use proptest::prelude::*;
use rust_ttt::core::{Board, Difficulty, GameError, GameState, Mark, Settings, SettingsPatch};
use rust_ttt::persist::{
    decode, encode, load_or_default, load_state, save_state, FileStore, MemoryStore, Store,
};

fn played(cells: &[usize]) -> GameState {
    let mut state = GameState::with_settings(Settings::new(Mark::X, Difficulty::Easy));
    for &cell in cells {
        state.click(cell).unwrap();
    }
    state
}

// =============================================================================
// File Store Tests
// =============================================================================

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::in_dir(dir.path());

    let mut state = played(&[0, 3, 1, 4, 2]);
    state.reset();
    state.click(4).unwrap();
    state.jump(0).unwrap();

    assert!(save_state(&mut store, &state));
    let loaded = load_state(&store).unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.scores().x_wins, 1);
    assert_eq!(loaded.cursor(), 0);
    assert!(loaded.can_redo());
}

#[test]
fn test_file_missing_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());

    assert_eq!(load_state(&store), None);
    assert_eq!(load_or_default(&store), GameState::new());
}

#[test]
fn test_file_corrupt_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::in_dir(dir.path());
    std::fs::write(store.path(), b"\x01\x00\x00\x00garbage").unwrap();

    assert_eq!(load_state(&store), None);
    assert_eq!(load_or_default(&store), GameState::new());
}

#[test]
fn test_save_overwrites_previous() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("game.bin"));

    assert!(save_state(&mut store, &played(&[4])));
    let later = played(&[4, 0, 8]);
    assert!(save_state(&mut store, &later));

    assert_eq!(load_state(&store), Some(later));
}

// =============================================================================
// Validation Tests
// =============================================================================

fn tampered(state: &GameState, edit: impl FnOnce(&mut serde_json::Value)) -> GameState {
    let mut value = serde_json::to_value(state).unwrap();
    edit(&mut value);
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_cursor_past_end_rejected() {
    let state = tampered(&played(&[4]), |v| v["cursor"] = serde_json::json!(5));
    let bytes = encode(&state).unwrap();

    assert!(matches!(decode(&bytes), Err(GameError::InvalidState(_))));
    assert_eq!(load_state(&MemoryStore::with_bytes(bytes)), None);
}

#[test]
fn test_empty_history_rejected() {
    let state = tampered(&GameState::new(), |v| v["history"] = serde_json::json!([]));
    let bytes = encode(&state).unwrap();

    assert!(matches!(decode(&bytes), Err(GameError::InvalidState(_))));
}

#[test]
fn test_turn_parity_mismatch_rejected() {
    let state = tampered(&played(&[4]), |v| v["x_is_next"] = serde_json::json!(true));
    let bytes = encode(&state).unwrap();

    assert!(matches!(decode(&bytes), Err(GameError::InvalidState(_))));
    assert_eq!(load_or_default(&MemoryStore::with_bytes(bytes)), GameState::new());
}

#[test]
fn test_snapshot_out_of_sequence_rejected() {
    // Replace the one-move snapshot with a board that skips ahead.
    let skipped: Board = "XXX/OO./...".parse().unwrap();
    let state = tampered(&played(&[4]), |v| {
        v["history"][1] = serde_json::to_value(skipped).unwrap();
        v["x_is_next"] = serde_json::json!(false);
    });
    let bytes = encode(&state).unwrap();

    assert!(matches!(decode(&bytes), Err(GameError::InvalidState(_))));
    assert_eq!(load_state(&MemoryStore::with_bytes(bytes)), None);
}

#[test]
fn test_bad_store_is_replaced_on_save() {
    let mut store = MemoryStore::with_bytes(vec![0xde, 0xad]);
    assert_eq!(load_state(&store), None);

    let state = played(&[4]);
    assert!(save_state(&mut store, &state));
    assert_eq!(load_state(&store), Some(state));
}

#[test]
fn test_decode_reports_persistence_error() {
    let err = decode(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, GameError::Persistence(_)));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip(
        cells in prop::collection::vec(0usize..9, 0..12),
        jump_back in 0usize..10,
        easy in any::<bool>(),
        enabled in any::<bool>(),
    ) {
        let mut state = GameState::new();
        for cell in cells {
            state.click(cell).unwrap();
        }
        state.jump(jump_back.min(state.history_len() - 1)).unwrap();
        let difficulty = if easy { Difficulty::Easy } else { Difficulty::Hard };
        state.reconfigure(SettingsPatch::new().difficulty(difficulty).enabled(enabled));

        let mut store = MemoryStore::new();
        prop_assert!(save_state(&mut store, &state));
        prop_assert!(store.read().unwrap().is_some());
        prop_assert_eq!(load_state(&store), Some(state));
    }
}
