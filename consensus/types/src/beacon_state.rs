use crate::consts::{EpochsPerHistoricalVector, SlotsPerHistoricalRoot, ValidatorRegistryLimit};
use crate::{
    BeaconBlockHeader, ChainSpec, Epoch, Eth1Data, ExecutionPayloadHeader, Fork, Hash256,
    PublicKeyBytes, SignatureBytes, Slot, Validator, VariableList,
};
use ethereum_hashing::hash;
use serde::{Deserialize, Serialize};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    UnknownValidator(usize),
    BalancesOutOfBounds(usize),
    RandaoMixesOutOfBounds(usize),
    RandaoMixesEmpty,
    BlockRootsOutOfBounds(usize),
    StateRootsOutOfBounds(usize),
    ArithmeticOverflow,
}

/// The state of the `BeaconChain` at some slot.
///
/// All of the circular buffers (`block_roots`, `state_roots`,
/// `randao_mixes`) are seeded to their full ring length at genesis; the
/// modulus of every ring access is the live length, which then equals the
/// configured vector size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct BeaconState {
    // Versioning
    pub genesis_validators_root: Hash256,
    pub slot: Slot,
    pub fork: Fork,

    // History
    pub latest_block_header: BeaconBlockHeader,
    pub block_roots: VariableList<Hash256, SlotsPerHistoricalRoot>,
    pub state_roots: VariableList<Hash256, SlotsPerHistoricalRoot>,

    // Eth1
    pub eth1_data: Eth1Data,
    #[serde(with = "serde_utils::quoted_u64")]
    pub eth1_deposit_index: u64,
    pub latest_execution_payload_header: ExecutionPayloadHeader,

    // Registry
    pub validators: VariableList<Validator, ValidatorRegistryLimit>,
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub balances: VariableList<u64, ValidatorRegistryLimit>,

    // Randomness
    pub randao_mixes: VariableList<Hash256, EpochsPerHistoricalVector>,

    // Withdrawals
    #[serde(with = "serde_utils::quoted_u64")]
    pub next_withdrawal_index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub next_withdrawal_validator_index: u64,

    // Slashing
    #[serde(with = "ssz_types::serde_utils::quoted_u64_var_list")]
    pub slashings: VariableList<u64, ValidatorRegistryLimit>,
    #[serde(with = "serde_utils::quoted_u64")]
    pub total_slashing: u64,
}

impl BeaconState {
    /// The epoch corresponding to `self.slot`.
    pub fn current_epoch(&self, spec: &ChainSpec) -> Epoch {
        self.slot.epoch(spec.slots_per_epoch)
    }

    /// The epoch prior to `self.current_epoch()`. Returns the genesis epoch
    /// during the genesis epoch itself.
    pub fn previous_epoch(&self, spec: &ChainSpec) -> Epoch {
        let current_epoch = self.current_epoch(spec);
        if current_epoch > Epoch::new(0) {
            current_epoch - 1
        } else {
            current_epoch
        }
    }

    /// The block hash of the latest execution payload folded into this
    /// state.
    pub fn latest_execution_block_hash(&self) -> Hash256 {
        self.latest_execution_payload_header.block_hash
    }

    /// The eth1 genesis block hash recorded at chain start.
    pub fn eth1_block_hash(&self) -> Hash256 {
        self.eth1_data.block_hash
    }

    pub fn get_validator(&self, validator_index: usize) -> Result<&Validator, Error> {
        self.validators
            .get(validator_index)
            .ok_or(Error::UnknownValidator(validator_index))
    }

    pub fn get_validator_mut(&mut self, validator_index: usize) -> Result<&mut Validator, Error> {
        self.validators
            .get_mut(validator_index)
            .ok_or(Error::UnknownValidator(validator_index))
    }

    pub fn get_balance(&self, validator_index: usize) -> Result<u64, Error> {
        self.balances
            .get(validator_index)
            .copied()
            .ok_or(Error::BalancesOutOfBounds(validator_index))
    }

    pub fn get_balance_mut(&mut self, validator_index: usize) -> Result<&mut u64, Error> {
        self.balances
            .get_mut(validator_index)
            .ok_or(Error::BalancesOutOfBounds(validator_index))
    }

    /// Linear scan of the registry for `pubkey`. The registry is
    /// append-only, so a hit is stable across the lifetime of the state.
    pub fn get_validator_index_by_pubkey(&self, pubkey: &PublicKeyBytes) -> Option<usize> {
        self.validators.iter().position(|v| v.pubkey == *pubkey)
    }

    /// The number of validators active at `epoch`.
    pub fn get_active_validator_count(&self, epoch: Epoch) -> usize {
        self.validators
            .iter()
            .filter(|v| v.is_active_at(epoch))
            .count()
    }

    /// The number of validators that may be activated or exited in one
    /// epoch.
    pub fn get_validator_churn_limit(&self, spec: &ChainSpec) -> u64 {
        std::cmp::max(
            spec.min_per_epoch_churn_limit,
            self.get_active_validator_count(self.current_epoch(spec)) as u64
                / spec.churn_limit_quotient,
        )
    }

    /// The earliest epoch a lifecycle change initiated at `epoch` may take
    /// effect.
    pub fn compute_activation_exit_epoch(&self, epoch: Epoch, spec: &ChainSpec) -> Epoch {
        epoch + 1 + spec.max_seed_lookahead
    }

    fn randao_ring_index(&self, epoch: Epoch) -> Result<usize, Error> {
        if self.randao_mixes.is_empty() {
            return Err(Error::RandaoMixesEmpty);
        }
        Ok(epoch.as_usize() % self.randao_mixes.len())
    }

    /// The randao mix at a recent `epoch`.
    pub fn get_randao_mix(&self, epoch: Epoch) -> Result<&Hash256, Error> {
        let i = self.randao_ring_index(epoch)?;
        self.randao_mixes
            .get(i)
            .ok_or(Error::RandaoMixesOutOfBounds(i))
    }

    /// The randao mix at a raw ring index, for callers that have already
    /// reduced the epoch modulo the ring length.
    pub fn get_randao_mix_at_index(&self, index: u64) -> Result<&Hash256, Error> {
        self.randao_mixes
            .get(index as usize)
            .ok_or(Error::RandaoMixesOutOfBounds(index as usize))
    }

    /// XOR-fold the hash of `reveal` into the randao mix for `epoch`.
    pub fn update_randao_mix(&mut self, epoch: Epoch, reveal: &SignatureBytes) -> Result<(), Error> {
        let i = self.randao_ring_index(epoch)?;
        let reveal_hash = Hash256::from_slice(&hash(&reveal.as_ssz_bytes()));
        let mix = *self.get_randao_mix(epoch)? ^ reveal_hash;
        *self
            .randao_mixes
            .get_mut(i)
            .ok_or(Error::RandaoMixesOutOfBounds(i))? = mix;
        Ok(())
    }

    /// Write `root` into the block-roots ring at `slot`.
    pub fn set_block_root(&mut self, slot: Slot, root: Hash256) -> Result<(), Error> {
        if self.block_roots.is_empty() {
            return Err(Error::BlockRootsOutOfBounds(0));
        }
        let i = slot.as_usize() % self.block_roots.len();
        *self
            .block_roots
            .get_mut(i)
            .ok_or(Error::BlockRootsOutOfBounds(i))? = root;
        Ok(())
    }

    /// Write `root` into the state-roots ring at `slot`.
    pub fn set_state_root(&mut self, slot: Slot, root: Hash256) -> Result<(), Error> {
        if self.state_roots.is_empty() {
            return Err(Error::StateRootsOutOfBounds(0));
        }
        let i = slot.as_usize() % self.state_roots.len();
        *self
            .state_roots
            .get_mut(i)
            .ok_or(Error::StateRootsOutOfBounds(i))? = root;
        Ok(())
    }
}
