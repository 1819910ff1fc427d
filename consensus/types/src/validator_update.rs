use crate::PublicKeyBytes;
use serde::{Deserialize, Serialize};

/// A change to one validator's consensus weight, reported to the host
/// consensus engine after genesis and after every processed block.
///
/// An `effective_balance` of zero tells the host to remove the validator
/// from its voting set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorUpdate {
    pub pubkey: PublicKeyBytes,
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: u64,
}

impl ValidatorUpdate {
    pub fn new(pubkey: PublicKeyBytes, effective_balance: u64) -> Self {
        Self {
            pubkey,
            effective_balance,
        }
    }

    /// An update that removes the validator from the host's voting set.
    pub fn removal(pubkey: PublicKeyBytes) -> Self {
        Self::new(pubkey, 0)
    }
}
