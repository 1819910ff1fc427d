use super::errors::BlockProcessingError;
use crate::common::initiate_validator_exit;
use types::{BeaconState, ChainSpec, Epoch, ValidatorUpdate};

/// Advance validator lifecycles in validator-index order.
///
/// Three rules run against the balances as they stood before this block's
/// deposits: activation-eligibility stamping, ejection of underfunded
/// active validators, and activation of queued validators up to the churn
/// limit. The weight changes are returned for the host consensus engine.
pub fn process_registry_updates(
    state: &mut BeaconState,
    spec: &ChainSpec,
) -> Result<Vec<ValidatorUpdate>, BlockProcessingError> {
    let current_epoch = state.current_epoch(spec);
    let mut updates = vec![];

    // Process activation eligibility and ejections.
    let is_ejectable = |validator: &types::Validator| {
        validator.is_active_at(current_epoch) && validator.effective_balance <= spec.ejection_balance
    };
    let indices_to_update: Vec<usize> = state
        .validators
        .iter()
        .enumerate()
        .filter(|(_, validator)| {
            validator.is_eligible_for_activation_queue(spec) || is_ejectable(validator)
        })
        .map(|(index, _)| index)
        .collect();

    for index in indices_to_update {
        if state.get_validator(index)?.is_eligible_for_activation_queue(spec) {
            state.get_validator_mut(index)?.activation_eligibility_epoch = current_epoch + 1;
        }
        if is_ejectable(state.get_validator(index)?) {
            let pubkey = state.get_validator(index)?.pubkey;
            initiate_validator_exit(state, index, spec)?;
            updates.push(ValidatorUpdate::removal(pubkey));
        }
    }

    // Queue validators eligible for activation, ordered by eligibility
    // epoch then index. The registry carries no finality tracking; the
    // host engine finalizes every block, so the current epoch stands in
    // for the finalized epoch.
    let finalized_epoch = current_epoch;
    let mut activation_queue: Vec<(Epoch, usize)> = state
        .validators
        .iter()
        .enumerate()
        .filter(|(_, validator)| validator.is_eligible_for_activation(finalized_epoch, spec))
        .map(|(index, validator)| (validator.activation_eligibility_epoch, index))
        .collect();
    activation_queue.sort();

    // Dequeue validators for activation up to the churn limit.
    let churn_limit = state.get_validator_churn_limit(spec) as usize;
    let activation_epoch = state.compute_activation_exit_epoch(current_epoch, spec);
    for (_, index) in activation_queue.into_iter().take(churn_limit) {
        let validator = state.get_validator_mut(index)?;
        validator.activation_epoch = activation_epoch;
        updates.push(ValidatorUpdate::new(
            validator.pubkey,
            validator.effective_balance,
        ));
    }

    Ok(updates)
}
