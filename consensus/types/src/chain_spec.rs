use crate::{Epoch, ForkData, ForkName, Hash256, Slot};

/// Each of the signature domains this node derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    BeaconProposer,
    Randao,
    Deposit,
    VoluntaryExit,
}

/// Holds all the "constants" for a chain.
///
/// Run-time limits here must stay within the type-level SSZ capacities in
/// `consts`; the two are checked against each other in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSpec {
    /*
     * Initial values
     */
    pub genesis_slot: Slot,
    pub genesis_fork_version: [u8; 4],
    pub far_future_epoch: Epoch,
    pub bls_withdrawal_prefix_byte: u8,
    pub eth1_address_withdrawal_prefix_byte: u8,

    /*
     * Time parameters
     */
    pub slots_per_epoch: u64,
    pub epochs_per_historical_vector: u64,
    pub slots_per_historical_root: u64,
    pub min_validator_withdrawability_delay: Epoch,
    pub max_seed_lookahead: Epoch,

    /*
     * Validator lifecycle
     */
    pub min_per_epoch_churn_limit: u64,
    pub churn_limit_quotient: u64,
    pub ejection_balance: u64,
    pub effective_balance_increment: u64,
    pub max_effective_balance: u64,

    /*
     * Per-block limits
     */
    pub max_deposits_per_block: u64,
    pub max_withdrawals_per_payload: u64,
    pub max_validators_per_withdrawals_sweep: u64,
    pub max_blobs_per_block: u64,

    /*
     * Signature domains
     */
    domain_beacon_proposer: u32,
    domain_randao: u32,
    domain_deposit: u32,
    domain_voluntary_exit: u32,
}

impl ChainSpec {
    /// Returns the name of the fork schema active at `slot`.
    pub fn fork_name_at_slot(&self, slot: Slot) -> ForkName {
        self.fork_name_at_epoch(slot.epoch(self.slots_per_epoch))
    }

    /// Returns the name of the fork schema active at `epoch`.
    ///
    /// A single fork schema is live; scheduling a successor extends the
    /// match here and nowhere else.
    pub fn fork_name_at_epoch(&self, _epoch: Epoch) -> ForkName {
        ForkName::Deneb
    }

    /// The fork version carried by blocks of the given fork.
    pub fn fork_version_for_name(&self, fork_name: ForkName) -> [u8; 4] {
        match fork_name {
            ForkName::Deneb => self.genesis_fork_version,
        }
    }

    /// The little-endian 4-byte encoding of the constant for `domain`.
    pub fn domain_type(&self, domain: Domain) -> [u8; 4] {
        let constant = match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::Randao => self.domain_randao,
            Domain::Deposit => self.domain_deposit,
            Domain::VoluntaryExit => self.domain_voluntary_exit,
        };
        constant.to_le_bytes()
    }

    /// Compute the signature domain for `domain` under the given fork
    /// context.
    pub fn get_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        ForkData::new(fork_version, genesis_validators_root).compute_domain(self.domain_type(domain))
    }

    /// Returns a `ChainSpec` compatible with the mainnet specification.
    pub fn mainnet() -> Self {
        Self {
            /*
             * Initial values
             */
            genesis_slot: Slot::new(0),
            genesis_fork_version: [0x04, 0x00, 0x00, 0x00],
            far_future_epoch: Epoch::max_value(),
            bls_withdrawal_prefix_byte: 0x00,
            eth1_address_withdrawal_prefix_byte: 0x01,

            /*
             * Time parameters
             */
            slots_per_epoch: 32,
            epochs_per_historical_vector: 65_536,
            slots_per_historical_root: 8_192,
            min_validator_withdrawability_delay: Epoch::new(256),
            max_seed_lookahead: Epoch::new(4),

            /*
             * Validator lifecycle
             */
            min_per_epoch_churn_limit: 4,
            churn_limit_quotient: 65_536,
            ejection_balance: 16_000_000_000,
            effective_balance_increment: 1_000_000_000,
            max_effective_balance: 32_000_000_000,

            /*
             * Per-block limits
             */
            max_deposits_per_block: 16,
            max_withdrawals_per_payload: 16,
            max_validators_per_withdrawals_sweep: 16_384,
            max_blobs_per_block: 6,

            /*
             * Signature domains
             */
            domain_beacon_proposer: 0,
            domain_randao: 2,
            domain_deposit: 3,
            domain_voluntary_exit: 4,
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}
