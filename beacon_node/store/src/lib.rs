//! Storage boundary for the beacon state-transition core.
//!
//! Provides the following stores:
//!
//! - `MemoryStore`: an in-memory, write-capable store. The canonical state
//!   and the pending-deposit queue live behind locks; the transition layer
//!   reads a working copy, mutates it, and persists it back only after a
//!   successful transition.
//! - `ReadOnlyStore`: wraps any store and fails every mutating operation
//!   with `Error::WritesNotSupported`, for deployments that follow the
//!   chain without the capability to extend it.

mod deposit_queue;
mod errors;
mod memory_store;
mod read_only_store;

pub use deposit_queue::DepositQueue;
pub use errors::Error;
pub use memory_store::MemoryStore;
pub use read_only_store::ReadOnlyStore;

use types::{BeaconState, Deposit, ExecutionPayloadHeader, Hash256, Slot};

/// The read/write surface the transition core expects from its host's
/// storage.
///
/// The queue methods share one underflow contract: asking for more entries
/// than the queue holds returns the shorter sequence and is never an
/// error.
pub trait BeaconStore: Send + Sync {
    /// Fetch a copy of the canonical head state.
    fn get_state(&self) -> Result<BeaconState, Error>;

    /// Replace the canonical head state after a successful transition.
    fn put_state(&self, state: &BeaconState) -> Result<(), Error>;

    /// Return up to `n` of the oldest pending deposits without consuming
    /// them. Two peeks without an intervening dequeue return identical
    /// sequences.
    fn peek_deposits(&self, n: u64) -> Result<Vec<Deposit>, Error>;

    /// Remove and return up to `n` of the oldest pending deposits, in
    /// enqueue (index-ascending) order. No deposit is ever returned by two
    /// successful dequeues.
    fn dequeue_deposits(&self, n: u64) -> Result<Vec<Deposit>, Error>;

    /// Append pending deposits; their indices must continue the queue's
    /// tail.
    fn enqueue_deposits(&self, deposits: Vec<Deposit>) -> Result<(), Error>;

    fn get_slot(&self) -> Result<Slot, Error> {
        Ok(self.get_state()?.slot)
    }

    fn get_eth1_block_hash(&self) -> Result<Hash256, Error> {
        Ok(self.get_state()?.eth1_block_hash())
    }

    fn get_latest_execution_payload_header(&self) -> Result<ExecutionPayloadHeader, Error> {
        Ok(self.get_state()?.latest_execution_payload_header)
    }

    fn get_randao_mix_at_index(&self, index: u64) -> Result<Hash256, Error> {
        Ok(*self.get_state()?.get_randao_mix_at_index(index)?)
    }

    fn get_next_withdrawal_index(&self) -> Result<u64, Error> {
        Ok(self.get_state()?.next_withdrawal_index)
    }

    fn get_next_withdrawal_validator_index(&self) -> Result<u64, Error> {
        Ok(self.get_state()?.next_withdrawal_validator_index)
    }
}
