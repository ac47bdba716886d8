//! Save and load of game state.
//!
//! Persistence failures never interrupt play. `save_state` and
//! `load_state` log and swallow errors: a failed save leaves the game
//! unsaved, a failed or empty load means "no prior state" and the caller
//! starts fresh.
//!
//! ```rust
//! use rust_ttt::core::GameState;
//! use rust_ttt::persist::{load_or_default, save_state, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let mut state = GameState::new();
//! state.click(4).unwrap();
//!
//! assert!(save_state(&mut store, &state));
//! assert_eq!(load_or_default(&store), state);
//! ```

pub mod codec;
pub mod store;

use log::{debug, warn};

use crate::core::state::GameState;

pub use codec::{decode, encode, FORMAT_VERSION};
pub use store::{FileStore, MemoryStore, Store, STORAGE_KEY};

/// Encode and write a state. Returns `false` if anything failed.
pub fn save_state<S: Store + ?Sized>(store: &mut S, state: &GameState) -> bool {
    let result = encode(state).and_then(|bytes| store.write(&bytes));
    match result {
        Ok(()) => {
            debug!("saved game at revision {}", state.revision());
            true
        }
        Err(e) => {
            warn!("failed to save game: {e}");
            false
        }
    }
}

/// Read and decode a state. `None` if nothing usable was stored.
pub fn load_state<S: Store + ?Sized>(store: &S) -> Option<GameState> {
    let bytes = match store.read() {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to read saved game: {e}");
            return None;
        }
    };

    match decode(&bytes) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("discarding unreadable saved game: {e}");
            None
        }
    }
}

/// Loaded state, or a fresh game if none could be loaded.
pub fn load_or_default<S: Store + ?Sized>(store: &S) -> GameState {
    load_state(store).unwrap_or_default()
}
