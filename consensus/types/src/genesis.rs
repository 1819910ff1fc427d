use crate::{Deposit, ExecutionPayloadHeader};
use serde::{Deserialize, Serialize};

/// The genesis document the host consensus engine hands over at chain
/// start: the initial fork version, the deposits seeding the validator
/// registry, and the eth1 genesis execution payload header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genesis {
    #[serde(with = "serde_utils::bytes_4_hex")]
    pub fork_version: [u8; 4],
    pub deposits: Vec<Deposit>,
    pub execution_payload_header: ExecutionPayloadHeader,
}

impl Genesis {
    /// Parse a genesis document from its JSON encoding.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
