mod initiate_validator_exit;

pub use initiate_validator_exit::initiate_validator_exit;

use types::{BeaconState, BeaconStateError};

/// Increase the balance of a validator, erroring upon overflow.
pub fn increase_balance(
    state: &mut BeaconState,
    index: usize,
    delta: u64,
) -> Result<(), BeaconStateError> {
    let balance = state.get_balance_mut(index)?;
    *balance = balance
        .checked_add(delta)
        .ok_or(BeaconStateError::ArithmeticOverflow)?;
    Ok(())
}

/// Decrease the balance of a validator, saturating at zero.
pub fn decrease_balance(
    state: &mut BeaconState,
    index: usize,
    delta: u64,
) -> Result<(), BeaconStateError> {
    let balance = state.get_balance_mut(index)?;
    *balance = balance.saturating_sub(delta);
    Ok(())
}
