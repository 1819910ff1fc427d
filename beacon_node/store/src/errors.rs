use types::BeaconStateError;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The store was opened without write capability; the operation is a
    /// configuration error, not a transient condition.
    WritesNotSupported,
    /// No canonical state has been persisted yet.
    MissingState,
    /// An enqueued deposit does not continue the queue's index sequence.
    NonContiguousDepositIndex { expected: u64, found: u64 },
    BeaconStateError(BeaconStateError),
}

impl From<BeaconStateError> for Error {
    fn from(e: BeaconStateError) -> Error {
        Error::BeaconStateError(e)
    }
}
