use tree_hash::TreeHash;
use types::{BeaconState, BeaconStateError};

#[derive(Debug, PartialEq)]
pub enum Error {
    BeaconStateError(BeaconStateError),
}

impl From<BeaconStateError> for Error {
    fn from(e: BeaconStateError) -> Error {
        Error::BeaconStateError(e)
    }
}

/// Advance the state by one slot, caching the roots the closing slot
/// produced into the circular history buffers.
pub fn per_slot_processing(state: &mut BeaconState) -> Result<(), Error> {
    cache_state(state)?;
    state.slot += 1;
    Ok(())
}

fn cache_state(state: &mut BeaconState) -> Result<(), Error> {
    let previous_state_root = state.tree_hash_root();
    state.set_state_root(state.slot, previous_state_root)?;

    // A zero state root marks the header rotated in by the previous block;
    // it commits to the root computed just now.
    if state.latest_block_header.state_root.is_zero() {
        state.latest_block_header.state_root = previous_state_root;
    }

    let latest_block_root = state.latest_block_header.canonical_root();
    state.set_block_root(state.slot, latest_block_root)?;

    Ok(())
}
