use state_processing::{BlockProcessingError, SlotProcessingError};
use types::Hash256;

macro_rules! easy_from_to {
    ($from: ident, $to: ident) => {
        impl From<$from> for $to {
            fn from(e: $from) -> $to {
                $to::$from(e)
            }
        }
    };
}

/// Errors from importing a block into the chain. Consensus violations from
/// the transition layer pass through unchanged inside their variant.
#[derive(Debug, PartialEq)]
pub enum BeaconChainError {
    /// The block's deposits do not match the head of the pending queue.
    DepositQueueMismatch {
        expected: usize,
        found: usize,
    },
    /// The block's claimed post-state root does not match the computed one.
    StateRootMismatch {
        expected: Hash256,
        found: Hash256,
    },
    BlockProcessingError(BlockProcessingError),
    SlotProcessingError(SlotProcessingError),
    StoreError(StoreError),
}

/// Errors from building a block locally.
#[derive(Debug, PartialEq)]
pub enum BlockProductionError {
    BlockProcessingError(BlockProcessingError),
    SlotProcessingError(SlotProcessingError),
    StoreError(StoreError),
}

pub(crate) type StoreError = store::Error;

easy_from_to!(BlockProcessingError, BeaconChainError);
easy_from_to!(SlotProcessingError, BeaconChainError);
easy_from_to!(StoreError, BeaconChainError);
easy_from_to!(BlockProcessingError, BlockProductionError);
easy_from_to!(SlotProcessingError, BlockProductionError);
easy_from_to!(StoreError, BlockProductionError);
