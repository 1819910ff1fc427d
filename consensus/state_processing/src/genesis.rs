use crate::per_block_processing::errors::BlockProcessingError;
use crate::per_block_processing::process_deposit;
use tree_hash::TreeHash;
use types::{
    BeaconBlockBody, BeaconBlockHeader, BeaconState, ChainSpec, Eth1Data, Fork, Genesis, Hash256,
    ValidatorUpdate,
};

/// Build the genesis beacon state from the host's genesis document and
/// return it with the initial validator-set updates for the host consensus
/// engine.
pub fn initialize_beacon_state_from_genesis(
    genesis: &Genesis,
    spec: &ChainSpec,
) -> Result<(BeaconState, Vec<ValidatorUpdate>), BlockProcessingError> {
    let eth1_block_hash = genesis.execution_payload_header.block_hash;
    let genesis_epoch = spec.genesis_slot.epoch(spec.slots_per_epoch);

    let mut state = BeaconState {
        slot: spec.genesis_slot,
        fork: Fork {
            previous_version: genesis.fork_version,
            current_version: genesis.fork_version,
            epoch: genesis_epoch,
        },
        latest_block_header: BeaconBlockHeader {
            body_root: BeaconBlockBody::default().tree_hash_root(),
            ..BeaconBlockHeader::default()
        },
        eth1_data: Eth1Data {
            deposit_root: Hash256::zero(),
            deposit_count: genesis.deposits.len() as u64,
            block_hash: eth1_block_hash,
        },
        latest_execution_payload_header: genesis.execution_payload_header.clone(),
        ..BeaconState::default()
    };

    // Seed the circular buffers to their full ring length. The randao ring
    // starts from the eth1 genesis block hash.
    for _ in 0..spec.epochs_per_historical_vector {
        state.randao_mixes.push(eth1_block_hash)?;
    }
    for _ in 0..spec.slots_per_historical_root {
        state.block_roots.push(Hash256::zero())?;
        state.state_roots.push(Hash256::zero())?;
    }

    for deposit in &genesis.deposits {
        process_deposit(&mut state, deposit, spec)?;
    }

    let updates = process_activations(&mut state, spec)?;
    state.genesis_validators_root = state.validators.tree_hash_root();

    Ok((state, updates))
}

/// Activate the genesis validators whose effective balance reaches the cap,
/// directly at the genesis epoch: there is no churn before the chain
/// starts.
pub fn process_activations(
    state: &mut BeaconState,
    spec: &ChainSpec,
) -> Result<Vec<ValidatorUpdate>, BlockProcessingError> {
    let genesis_epoch = spec.genesis_slot.epoch(spec.slots_per_epoch);
    let mut updates = vec![];

    for index in 0..state.validators.len() {
        let balance = state.get_balance(index)?;
        let validator = state.get_validator_mut(index)?;

        validator.effective_balance = std::cmp::min(
            balance - balance % spec.effective_balance_increment,
            spec.max_effective_balance,
        );
        if validator.effective_balance == spec.max_effective_balance {
            validator.activation_eligibility_epoch = genesis_epoch;
            validator.activation_epoch = genesis_epoch;
            updates.push(ValidatorUpdate::new(
                validator.pubkey,
                validator.effective_balance,
            ));
        }
    }

    Ok(updates)
}
