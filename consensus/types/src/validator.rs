use crate::{Address, ChainSpec, Epoch, Hash256, PublicKeyBytes};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Information about a `BeaconChain` validator.
///
/// The four epoch fields default to the far-future sentinel and are only
/// ever moved earlier by the registry-update rules; `slashed` moves from
/// `false` to `true` and never back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Validator {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: u64,
    pub slashed: bool,
    pub activation_eligibility_epoch: Epoch,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
    pub withdrawable_epoch: Epoch,
}

impl Validator {
    /// Instantiate a validator from the deposit admitting it to the
    /// registry.
    ///
    /// The effective balance rounds the deposited amount down to the
    /// balance increment, then caps it at the maximum; the lifecycle epochs
    /// all start at the far-future sentinel.
    pub fn new_from_deposit(
        pubkey: PublicKeyBytes,
        withdrawal_credentials: Hash256,
        amount: u64,
        spec: &ChainSpec,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            effective_balance: std::cmp::min(
                amount - amount % spec.effective_balance_increment,
                spec.max_effective_balance,
            ),
            slashed: false,
            activation_eligibility_epoch: spec.far_future_epoch,
            activation_epoch: spec.far_future_epoch,
            exit_epoch: spec.far_future_epoch,
            withdrawable_epoch: spec.far_future_epoch,
        }
    }

    /// Returns `true` if the validator is considered active at some epoch.
    pub fn is_active_at(&self, epoch: Epoch) -> bool {
        self.activation_epoch <= epoch && epoch < self.exit_epoch
    }

    /// Returns `true` if the validator's activation may be scheduled:
    /// its eligibility epoch has been finalized and no activation epoch has
    /// been set yet.
    pub fn is_eligible_for_activation(&self, finalized_epoch: Epoch, spec: &ChainSpec) -> bool {
        self.activation_eligibility_epoch <= finalized_epoch
            && self.activation_epoch == spec.far_future_epoch
    }

    /// Returns `true` if the validator is eligible to join the activation
    /// queue.
    pub fn is_eligible_for_activation_queue(&self, spec: &ChainSpec) -> bool {
        self.activation_eligibility_epoch == spec.far_future_epoch
            && self.effective_balance == spec.max_effective_balance
    }

    /// Returns `true` if the validator is able to be slashed at some epoch.
    pub fn is_slashable_at(&self, epoch: Epoch) -> bool {
        !self.slashed && self.activation_epoch <= epoch && epoch < self.withdrawable_epoch
    }

    /// Returns `true` if the validator's withdrawal credentials point at an
    /// execution-layer address.
    pub fn has_eth1_withdrawal_credential(&self, spec: &ChainSpec) -> bool {
        self.withdrawal_credentials
            .as_bytes()
            .first()
            .map(|byte| *byte == spec.eth1_address_withdrawal_prefix_byte)
            .unwrap_or(false)
    }

    /// Returns `true` if the validator's effective balance sits at the cap.
    pub fn has_max_effective_balance(&self, spec: &ChainSpec) -> bool {
        self.effective_balance == spec.max_effective_balance
    }

    /// Returns the execution address of the validator's withdrawal
    /// credentials, if the credentials use the execution-address scheme.
    pub fn get_eth1_withdrawal_address(&self, spec: &ChainSpec) -> Option<Address> {
        self.has_eth1_withdrawal_credential(spec)
            .then(|| Address::from_slice(&self.withdrawal_credentials.as_bytes()[12..]))
    }

    /// Returns `true` if the validator's entire balance may be withdrawn at
    /// `epoch`.
    pub fn is_fully_withdrawable_at(&self, balance: u64, epoch: Epoch, spec: &ChainSpec) -> bool {
        self.has_eth1_withdrawal_credential(spec)
            && self.withdrawable_epoch <= epoch
            && balance > 0
    }

    /// Returns `true` if the validator's balance above the effective
    /// balance cap may be swept out.
    pub fn is_partially_withdrawable_validator(&self, balance: u64, spec: &ChainSpec) -> bool {
        let has_excess_balance = balance > spec.max_effective_balance;
        self.has_eth1_withdrawal_credential(spec)
            && self.has_max_effective_balance(spec)
            && has_excess_balance
    }
}
