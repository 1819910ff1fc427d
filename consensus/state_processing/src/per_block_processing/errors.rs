use types::{BeaconStateError, Hash256, Slot, SszTypesError};

/// Describes why a block failed to process or why it is invalid.
#[derive(Debug, PartialEq)]
pub enum BlockProcessingError {
    HeaderInvalid(HeaderInvalid),
    PayloadInvalid(PayloadError),
    DepositCountInvalid {
        limit: usize,
        found: usize,
    },
    DepositIndexMismatch {
        expected: u64,
        found: u64,
    },
    WithdrawalCountMismatch {
        expected: usize,
        found: usize,
    },
    WithdrawalMismatch {
        index: usize,
    },
    /// A withdrawal was derived for a validator without execution-address
    /// credentials; the eligibility predicates make this unreachable.
    WithdrawalCredentialsInvalid {
        validator_index: u64,
    },
    ArithmeticOverflow,
    BeaconStateError(BeaconStateError),
    SszTypesError(SszTypesError),
}

/// Describes why a block header is invalid against the current state.
#[derive(Debug, PartialEq)]
pub enum HeaderInvalid {
    StateSlotMismatch {
        state_slot: Slot,
        block_slot: Slot,
    },
    OlderThanLatestBlockHeader {
        block_slot: Slot,
        latest_block_header_slot: Slot,
    },
    ParentBlockRootMismatch {
        state: Hash256,
        block: Hash256,
    },
}

/// Describes why an execution payload fails admission against the current
/// state. Each variant carries the expected-vs-found values for operator
/// logs.
#[derive(Debug, PartialEq)]
pub enum PayloadError {
    ParentHashMismatch { expected: Hash256, found: Hash256 },
    RandaoMismatch { expected: Hash256, found: Hash256 },
    TooManyBlobCommitments { max: u64, found: u64 },
    TooManyWithdrawals { max: u64, found: u64 },
}

impl From<HeaderInvalid> for BlockProcessingError {
    fn from(e: HeaderInvalid) -> Self {
        BlockProcessingError::HeaderInvalid(e)
    }
}

impl From<PayloadError> for BlockProcessingError {
    fn from(e: PayloadError) -> Self {
        BlockProcessingError::PayloadInvalid(e)
    }
}

impl From<BeaconStateError> for BlockProcessingError {
    fn from(e: BeaconStateError) -> Self {
        BlockProcessingError::BeaconStateError(e)
    }
}

impl From<SszTypesError> for BlockProcessingError {
    fn from(e: SszTypesError) -> Self {
        BlockProcessingError::SszTypesError(e)
    }
}
