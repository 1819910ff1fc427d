//! Consensus types for the beacon state-transition core.
//!
//! Every container in this crate has an SSZ encoding and a tree-hash root
//! that must match the canonical merkleization scheme bit-for-bit; the
//! derives from `ethereum_ssz` and `tree_hash` provide both.

#[macro_use]
mod macros;

pub mod beacon_block;
pub mod beacon_block_body;
pub mod beacon_block_header;
pub mod beacon_state;
pub mod bls;
pub mod chain_spec;
pub mod consts;
pub mod deposit;
pub mod eth1_data;
pub mod execution_payload;
pub mod execution_payload_header;
pub mod fork;
pub mod fork_data;
pub mod fork_name;
pub mod genesis;
pub mod kzg_commitment;
pub mod signing_data;
pub mod slot_epoch;
pub mod validator;
pub mod validator_update;
pub mod withdrawal;
pub mod withdrawal_credentials;

pub use crate::beacon_block::BeaconBlock;
pub use crate::beacon_block_body::BeaconBlockBody;
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::beacon_state::{BeaconState, Error as BeaconStateError};
pub use crate::bls::{PublicKeyBytes, SignatureBytes, PUBLIC_KEY_BYTES_LEN, SIGNATURE_BYTES_LEN};
pub use crate::chain_spec::{ChainSpec, Domain};
pub use crate::consts::*;
pub use crate::deposit::Deposit;
pub use crate::eth1_data::Eth1Data;
pub use crate::execution_payload::{ExecutionPayload, Transaction, Transactions, Withdrawals};
pub use crate::execution_payload_header::ExecutionPayloadHeader;
pub use crate::fork::Fork;
pub use crate::fork_data::ForkData;
pub use crate::fork_name::ForkName;
pub use crate::genesis::Genesis;
pub use crate::kzg_commitment::KzgCommitment;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::validator::Validator;
pub use crate::validator_update::ValidatorUpdate;
pub use crate::withdrawal::Withdrawal;
pub use crate::withdrawal_credentials::WithdrawalCredentials;

pub use ethereum_types::{H160 as Address, H256 as Hash256, U256 as Uint256};
pub use ssz_types::{typenum, Error as SszTypesError, FixedVector, VariableList};
