use crate::consts::{MaxBlobCommitmentsPerBlock, MaxDepositsPerBlock};
use crate::{
    Deposit, Eth1Data, ExecutionPayload, Hash256, KzgCommitment, SignatureBytes, VariableList,
};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The body of a `BeaconBlock`.
///
/// The deposits carried here are the ones the proposer drained from the
/// pending queue; import verifies they match the queue head before the
/// transition runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct BeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Hash256,
    pub deposits: VariableList<Deposit, MaxDepositsPerBlock>,
    pub execution_payload: ExecutionPayload,
    pub blob_kzg_commitments: VariableList<KzgCommitment, MaxBlobCommitmentsPerBlock>,
}
