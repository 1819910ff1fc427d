use crate::{BeaconStore, Error};
use types::{BeaconState, Deposit};

/// A capability-restricting wrapper around any store: reads delegate, every
/// mutating operation fails with `Error::WritesNotSupported`.
///
/// Used by deployments that follow the chain without extending it; the
/// typed error lets such callers degrade gracefully instead of aborting.
pub struct ReadOnlyStore<S> {
    inner: S,
}

impl<S> ReadOnlyStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: BeaconStore> BeaconStore for ReadOnlyStore<S> {
    fn get_state(&self) -> Result<BeaconState, Error> {
        self.inner.get_state()
    }

    fn put_state(&self, _state: &BeaconState) -> Result<(), Error> {
        Err(Error::WritesNotSupported)
    }

    fn peek_deposits(&self, n: u64) -> Result<Vec<Deposit>, Error> {
        self.inner.peek_deposits(n)
    }

    fn dequeue_deposits(&self, _n: u64) -> Result<Vec<Deposit>, Error> {
        Err(Error::WritesNotSupported)
    }

    fn enqueue_deposits(&self, _deposits: Vec<Deposit>) -> Result<(), Error> {
        Err(Error::WritesNotSupported)
    }
}
