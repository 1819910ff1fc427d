use crate::{BeaconStore, DepositQueue, Error};
use parking_lot::RwLock;
use types::{BeaconState, Deposit};

/// A thread-safe, in-memory, write-capable store.
#[derive(Default)]
pub struct MemoryStore {
    canonical_state: RwLock<Option<BeaconState>>,
    deposit_queue: RwLock<DepositQueue>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn open() -> Self {
        Self::default()
    }
}

impl BeaconStore for MemoryStore {
    fn get_state(&self) -> Result<BeaconState, Error> {
        self.canonical_state
            .read()
            .clone()
            .ok_or(Error::MissingState)
    }

    fn put_state(&self, state: &BeaconState) -> Result<(), Error> {
        *self.canonical_state.write() = Some(state.clone());
        Ok(())
    }

    fn peek_deposits(&self, n: u64) -> Result<Vec<Deposit>, Error> {
        Ok(self.deposit_queue.read().peek_first_n(n))
    }

    fn dequeue_deposits(&self, n: u64) -> Result<Vec<Deposit>, Error> {
        Ok(self.deposit_queue.write().dequeue_first_n(n))
    }

    fn enqueue_deposits(&self, deposits: Vec<Deposit>) -> Result<(), Error> {
        let mut queue = self.deposit_queue.write();
        for deposit in deposits {
            queue.push(deposit)?;
        }
        Ok(())
    }
}
