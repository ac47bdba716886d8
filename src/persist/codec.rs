//! Binary encoding of `GameState`.
//!
//! The wire format is a bincode-encoded envelope carrying a format
//! version ahead of the state. Decoding rejects other versions and states
//! that fail `GameState::validate`.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::state::GameState;

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    state: GameState,
}

/// Encode a state for storage.
pub fn encode(state: &GameState) -> Result<Vec<u8>> {
    bincode::serialize(&EnvelopeRef {
        version: FORMAT_VERSION,
        state,
    })
    .map_err(|e| GameError::Persistence(format!("encode: {e}")))
}

/// Decode and validate a stored state.
///
/// # Errors
///
/// - `Persistence` for malformed bytes or a different format version
/// - `InvalidState` if the decoded state breaks a history invariant
pub fn decode(bytes: &[u8]) -> Result<GameState> {
    let envelope: Envelope =
        bincode::deserialize(bytes).map_err(|e| GameError::Persistence(format!("decode: {e}")))?;

    if envelope.version != FORMAT_VERSION {
        return Err(GameError::Persistence(format!(
            "unsupported format version {} (expected {FORMAT_VERSION})",
            envelope.version
        )));
    }

    envelope.state.validate()?;
    Ok(envelope.state)
}
