use super::errors::BlockProcessingError;
use crate::common::increase_balance;
use types::{BeaconBlockBody, BeaconState, ChainSpec, Deposit, Validator};

/// Applies the operations carried in `body`, short-circuiting on the first
/// invalid object.
pub fn process_operations(
    state: &mut BeaconState,
    body: &BeaconBlockBody,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    process_deposits(state, &body.deposits, spec)
}

/// Validates each `Deposit` and updates the state.
pub fn process_deposits(
    state: &mut BeaconState,
    deposits: &[Deposit],
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    verify!(
        deposits.len() as u64 <= spec.max_deposits_per_block,
        BlockProcessingError::DepositCountInvalid {
            limit: spec.max_deposits_per_block as usize,
            found: deposits.len(),
        }
    );

    for deposit in deposits {
        process_deposit(state, deposit, spec)?;
    }

    Ok(())
}

/// Process a single deposit: a balance top-up for a known public key, a
/// registry admission otherwise.
pub fn process_deposit(
    state: &mut BeaconState,
    deposit: &Deposit,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    // Deposits leave their queue strictly in index order.
    verify!(
        deposit.index == state.eth1_deposit_index,
        BlockProcessingError::DepositIndexMismatch {
            expected: state.eth1_deposit_index,
            found: deposit.index,
        }
    );
    state.eth1_deposit_index = state
        .eth1_deposit_index
        .checked_add(1)
        .ok_or(BlockProcessingError::ArithmeticOverflow)?;

    let amount = deposit.amount;
    if let Some(index) = state.get_validator_index_by_pubkey(&deposit.pubkey) {
        increase_balance(state, index, amount)?;
    } else {
        // Validators are only ever appended; exits are state transitions,
        // not removals, so registry indices are stable.
        let validator = Validator::new_from_deposit(
            deposit.pubkey,
            deposit.withdrawal_credentials,
            amount,
            spec,
        );
        state.validators.push(validator)?;
        state.balances.push(amount)?;
    }

    Ok(())
}
