use types::{BeaconState, BeaconStateError, ChainSpec};

/// Initiate the exit of the validator at `index`.
///
/// No-op for a validator whose exit was already initiated; the exit epoch
/// never moves once set.
pub fn initiate_validator_exit(
    state: &mut BeaconState,
    index: usize,
    spec: &ChainSpec,
) -> Result<(), BeaconStateError> {
    if state.get_validator(index)?.exit_epoch != spec.far_future_epoch {
        return Ok(());
    }

    // The exit queue epoch: the latest already-scheduled exit, but never
    // earlier than the activation-exit delay allows.
    let delayed_epoch = state.compute_activation_exit_epoch(state.current_epoch(spec), spec);
    let mut exit_queue_epoch = state
        .validators
        .iter()
        .map(|v| v.exit_epoch)
        .filter(|epoch| *epoch != spec.far_future_epoch)
        .fold(delayed_epoch, std::cmp::max);

    // Spill into the next epoch when this one's exit churn is spent.
    let exit_queue_churn = state
        .validators
        .iter()
        .filter(|v| v.exit_epoch == exit_queue_epoch)
        .count() as u64;
    if exit_queue_churn >= state.get_validator_churn_limit(spec) {
        exit_queue_epoch += 1;
    }

    let validator = state.get_validator_mut(index)?;
    validator.exit_epoch = exit_queue_epoch;
    validator.withdrawable_epoch = exit_queue_epoch + spec.min_validator_withdrawability_delay;

    Ok(())
}
