use crate::{Epoch, Hash256, SignedRoot};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// The fork context that seeds all domain separation: the active fork
/// version plus the root of the genesis validator set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ForkData {
    #[serde(with = "serde_utils::bytes_4_hex")]
    pub current_version: [u8; 4],
    pub genesis_validators_root: Hash256,
}

impl SignedRoot for ForkData {}

impl ForkData {
    pub fn new(current_version: [u8; 4], genesis_validators_root: Hash256) -> Self {
        Self {
            current_version,
            genesis_validators_root,
        }
    }

    /// Compute the 32-byte domain for `domain_type` under this fork context:
    /// the 4-byte domain type followed by the first 28 bytes of the
    /// fork-data root.
    pub fn compute_domain(&self, domain_type: [u8; 4]) -> Hash256 {
        let mut domain = [0; 32];
        domain[..4].copy_from_slice(&domain_type);
        domain[4..].copy_from_slice(&self.tree_hash_root().as_bytes()[..28]);
        Hash256::from(domain)
    }

    /// The signing root binding `epoch` to the given domain type under this
    /// fork context, as signed by the proposer's randao reveal.
    pub fn compute_randao_signing_root(&self, domain_type: [u8; 4], epoch: Epoch) -> Hash256 {
        epoch.signing_root(self.compute_domain(domain_type))
    }
}
