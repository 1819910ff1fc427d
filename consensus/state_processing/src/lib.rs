//! The deterministic state-transition rules of the beacon chain.
//!
//! Every function here is a pure transformation of a working copy of
//! `BeaconState`: callers own atomicity (apply a block to a copy, discard
//! the copy on error) and persistence. Two honest nodes running these rules
//! over the same block must produce byte-identical state roots.

#[macro_use]
mod macros;

pub mod common;
pub mod genesis;
pub mod per_block_processing;
pub mod per_slot_processing;

pub use genesis::{initialize_beacon_state_from_genesis, process_activations};
pub use per_block_processing::{
    errors::{BlockProcessingError, HeaderInvalid, PayloadError},
    get_expected_withdrawals, partially_verify_execution_payload, per_block_processing,
    process_registry_updates, VerifyPayload,
};
pub use per_slot_processing::{per_slot_processing, Error as SlotProcessingError};
