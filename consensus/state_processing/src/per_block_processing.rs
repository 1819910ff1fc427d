//! Block-level state transition: header rotation, payload admission,
//! randao folding, validator-lifecycle advancement, deposits and
//! withdrawals, in consensus order.

use errors::{BlockProcessingError, HeaderInvalid, PayloadError};
use types::{
    BeaconBlock, BeaconBlockBody, BeaconState, ChainSpec, Eth1Data, ExecutionPayload,
    ExecutionPayloadHeader, Slot, ValidatorUpdate, Withdrawal,
};

pub use process_operations::{process_deposit, process_deposits, process_operations};
pub use registry_updates::process_registry_updates;

pub mod errors;
pub mod process_operations;
pub mod registry_updates;

#[cfg(test)]
mod tests;

/// Whether to run execution-payload admission against the state.
///
/// Skipped in trusted contexts, such as computing the state root of a block
/// this node is building itself.
#[derive(PartialEq, Clone, Copy)]
pub enum VerifyPayload {
    True,
    False,
}

impl VerifyPayload {
    pub fn is_true(self) -> bool {
        self == VerifyPayload::True
    }
}

/// Updates the state for a new block, validating the block against the
/// state as it goes.
///
/// Returns the validator-set weight changes produced by lifecycle
/// advancement, for delivery to the host consensus engine. On error the
/// state may be partially mutated; the caller must discard the working
/// copy.
///
/// The processing order is a consensus rule: payload admission reads the
/// pre-block randao mix and payload header; lifecycle advancement sees
/// pre-deposit balances; withdrawal derivation sees this block's deposits.
pub fn per_block_processing(
    state: &mut BeaconState,
    block: &BeaconBlock,
    verify_payload: VerifyPayload,
    spec: &ChainSpec,
) -> Result<Vec<ValidatorUpdate>, BlockProcessingError> {
    process_block_header(state, block)?;

    if verify_payload.is_true() {
        partially_verify_execution_payload(state, &block.body, spec)?;
    }

    process_execution_payload(state, &block.body.execution_payload);
    process_randao(state, block, spec)?;
    process_eth1_data(state, &block.body.eth1_data);

    let updates = process_registry_updates(state, spec)?;

    process_operations(state, &block.body, spec)?;
    process_withdrawals(state, &block.body.execution_payload, spec)?;

    Ok(updates)
}

/// Verify the block belongs on top of the state and rotate the latest
/// block header. The rotated header carries a zero state root until the
/// next slot's processing backfills it.
pub fn process_block_header(
    state: &mut BeaconState,
    block: &BeaconBlock,
) -> Result<(), BlockProcessingError> {
    verify!(
        block.slot == state.slot,
        HeaderInvalid::StateSlotMismatch {
            state_slot: state.slot,
            block_slot: block.slot,
        }
    );

    verify!(
        block.slot > state.latest_block_header.slot,
        HeaderInvalid::OlderThanLatestBlockHeader {
            block_slot: block.slot,
            latest_block_header_slot: state.latest_block_header.slot,
        }
    );

    let expected_previous_block_root = state.latest_block_header.canonical_root();
    verify!(
        block.parent_root == expected_previous_block_root,
        HeaderInvalid::ParentBlockRootMismatch {
            state: expected_previous_block_root,
            block: block.parent_root,
        }
    );

    state.latest_block_header = block.temporary_block_header();

    Ok(())
}

/// Check an incoming execution payload against the current state, without
/// touching the execution engine.
///
/// The checks run in a fixed order and stop at the first failure: parent
/// linkage, randao commitment, blob-commitment count, withdrawal count.
pub fn partially_verify_execution_payload(
    state: &BeaconState,
    body: &BeaconBlockBody,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let payload = &body.execution_payload;

    // Until the first block is in, the only known execution ancestor is the
    // eth1 genesis block.
    let safe_hash = if state.slot <= Slot::new(1) {
        state.eth1_block_hash()
    } else {
        state.latest_execution_block_hash()
    };
    verify!(
        payload.parent_hash == safe_hash,
        PayloadError::ParentHashMismatch {
            expected: safe_hash,
            found: payload.parent_hash,
        }
    );

    // The payload must have been built on the randao mix this state expects
    // for its epoch.
    let mix_index = state.current_epoch(spec).as_u64() % spec.epochs_per_historical_vector;
    let expected_mix = *state.get_randao_mix_at_index(mix_index)?;
    verify!(
        payload.prev_randao == expected_mix,
        PayloadError::RandaoMismatch {
            expected: expected_mix,
            found: payload.prev_randao,
        }
    );

    verify!(
        body.blob_kzg_commitments.len() as u64 <= spec.max_blobs_per_block,
        PayloadError::TooManyBlobCommitments {
            max: spec.max_blobs_per_block,
            found: body.blob_kzg_commitments.len() as u64,
        }
    );

    verify!(
        payload.withdrawals.len() as u64 <= spec.max_withdrawals_per_payload,
        PayloadError::TooManyWithdrawals {
            max: spec.max_withdrawals_per_payload,
            found: payload.withdrawals.len() as u64,
        }
    );

    Ok(())
}

/// Fold the admitted payload into the state as a header.
pub fn process_execution_payload(state: &mut BeaconState, payload: &ExecutionPayload) {
    state.latest_execution_payload_header = ExecutionPayloadHeader::from(payload);
}

/// Mix the block's randao reveal into the current epoch's mix.
pub fn process_randao(
    state: &mut BeaconState,
    block: &BeaconBlock,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let current_epoch = state.current_epoch(spec);
    state.update_randao_mix(current_epoch, &block.body.randao_reveal)?;
    Ok(())
}

/// Record the eth1 data observed by this block.
pub fn process_eth1_data(state: &mut BeaconState, eth1_data: &Eth1Data) {
    state.eth1_data = eth1_data.clone();
}

/// Derive the withdrawals the next payload must carry, as a pure function
/// of the state.
///
/// A rotating sweep starts at `next_withdrawal_validator_index` and visits
/// at most `max_validators_per_withdrawals_sweep` validators. For each, a
/// full withdrawal of the whole balance takes precedence; otherwise the
/// excess over the effective-balance cap is swept. Withdrawal indices are
/// consecutive from `next_withdrawal_index`, and the sweep stops once the
/// payload withdrawal limit is reached.
pub fn get_expected_withdrawals(
    state: &BeaconState,
    spec: &ChainSpec,
) -> Result<Vec<Withdrawal>, BlockProcessingError> {
    let epoch = state.current_epoch(spec);
    let mut withdrawal_index = state.next_withdrawal_index;
    let mut validator_index = state.next_withdrawal_validator_index;
    let mut withdrawals: Vec<Withdrawal> = vec![];

    let bound = std::cmp::min(
        state.validators.len() as u64,
        spec.max_validators_per_withdrawals_sweep,
    );
    for _ in 0..bound {
        let validator = state.get_validator(validator_index as usize)?;
        let balance = state.get_balance(validator_index as usize)?;

        if validator.is_fully_withdrawable_at(balance, epoch, spec) {
            withdrawals.push(Withdrawal {
                index: withdrawal_index,
                validator_index,
                address: validator.get_eth1_withdrawal_address(spec).ok_or(
                    BlockProcessingError::WithdrawalCredentialsInvalid { validator_index },
                )?,
                amount: balance,
            });
            withdrawal_index = withdrawal_index
                .checked_add(1)
                .ok_or(BlockProcessingError::ArithmeticOverflow)?;
        } else if validator.is_partially_withdrawable_validator(balance, spec) {
            withdrawals.push(Withdrawal {
                index: withdrawal_index,
                validator_index,
                address: validator.get_eth1_withdrawal_address(spec).ok_or(
                    BlockProcessingError::WithdrawalCredentialsInvalid { validator_index },
                )?,
                amount: balance.saturating_sub(spec.max_effective_balance),
            });
            withdrawal_index = withdrawal_index
                .checked_add(1)
                .ok_or(BlockProcessingError::ArithmeticOverflow)?;
        }

        if withdrawals.len() as u64 == spec.max_withdrawals_per_payload {
            break;
        }

        validator_index = validator_index
            .checked_add(1)
            .and_then(|i| i.checked_rem(state.validators.len() as u64))
            .ok_or(BlockProcessingError::ArithmeticOverflow)?;
    }

    Ok(withdrawals)
}

/// Apply the withdrawals for this block.
///
/// The payload's withdrawal list must equal the list derived from the
/// state; every node derives the same list or the block is invalid.
pub fn process_withdrawals(
    state: &mut BeaconState,
    payload: &ExecutionPayload,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let expected_withdrawals = get_expected_withdrawals(state, spec)?;

    verify!(
        payload.withdrawals.len() == expected_withdrawals.len(),
        BlockProcessingError::WithdrawalCountMismatch {
            expected: expected_withdrawals.len(),
            found: payload.withdrawals.len(),
        }
    );
    for (index, (expected, found)) in expected_withdrawals
        .iter()
        .zip(payload.withdrawals.iter())
        .enumerate()
    {
        verify!(
            expected == found,
            BlockProcessingError::WithdrawalMismatch { index }
        );
    }

    for withdrawal in &expected_withdrawals {
        crate::common::decrease_balance(
            state,
            withdrawal.validator_index as usize,
            withdrawal.amount,
        )?;
    }

    // Advance the global withdrawal counter past this block's withdrawals.
    if let Some(latest_withdrawal) = expected_withdrawals.last() {
        state.next_withdrawal_index = latest_withdrawal
            .index
            .checked_add(1)
            .ok_or(BlockProcessingError::ArithmeticOverflow)?;

        // A full payload means the sweep stopped early: resume right after
        // the last validator touched. Otherwise the sweep covered its full
        // range and the cursor jumps over it.
        if expected_withdrawals.len() as u64 == spec.max_withdrawals_per_payload {
            state.next_withdrawal_validator_index = latest_withdrawal
                .validator_index
                .checked_add(1)
                .and_then(|i| i.checked_rem(state.validators.len() as u64))
                .ok_or(BlockProcessingError::ArithmeticOverflow)?;
            return Ok(());
        }
    }

    if !state.validators.is_empty() {
        state.next_withdrawal_validator_index = state
            .next_withdrawal_validator_index
            .checked_add(spec.max_validators_per_withdrawals_sweep)
            .and_then(|i| i.checked_rem(state.validators.len() as u64))
            .ok_or(BlockProcessingError::ArithmeticOverflow)?;
    }

    Ok(())
}
