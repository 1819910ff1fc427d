use crate::consts::DepositProofLength;
use crate::{FixedVector, Hash256, PublicKeyBytes};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// A pending request to admit a new validator to the registry, or to top up
/// an existing validator's balance.
///
/// `index` is assigned by the deposit contract and is strictly increasing;
/// the queue consumes deposits in index order. The inclusion `proof` is
/// opaque here: the host verifies it before the deposit ever reaches the
/// queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Deposit {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    pub proof: FixedVector<Hash256, DepositProofLength>,
}

impl Deposit {
    pub fn new(
        pubkey: PublicKeyBytes,
        withdrawal_credentials: Hash256,
        amount: u64,
        index: u64,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            amount,
            index,
            proof: FixedVector::default(),
        }
    }
}
