//! SSZ capacity bounds for the live fork's containers.
//!
//! These are type-level constants: they fix the merkleization depth of each
//! list and therefore its tree-hash root. The matching run-time limits
//! enforced during block processing live in `ChainSpec` and must not exceed
//! the bounds here.

use ssz_types::typenum::{
    U1048576, U1073741824, U1099511627776, U16, U256, U32, U33, U4096, U65536, U8192,
};

pub type ValidatorRegistryLimit = U1099511627776;
pub type SlotsPerHistoricalRoot = U8192;
pub type EpochsPerHistoricalVector = U65536;
pub type BytesPerLogsBloom = U256;
pub type MaxExtraDataBytes = U32;
pub type MaxBytesPerTransaction = U1073741824;
pub type MaxTransactionsPerPayload = U1048576;
pub type MaxWithdrawalsPerPayload = U16;
pub type MaxDepositsPerBlock = U16;
pub type MaxBlobCommitmentsPerBlock = U4096;
pub type DepositProofLength = U33;
