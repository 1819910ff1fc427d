use crate::errors::{BeaconChainError, BlockProductionError};
use slog::{debug, error, info, warn, Logger};
use state_processing::{
    initialize_beacon_state_from_genesis, per_block_processing, per_slot_processing,
    BlockProcessingError, SlotProcessingError, VerifyPayload,
};
use store::BeaconStore;
use tree_hash::TreeHash;
use types::{BeaconBlock, BeaconState, ChainSpec, Genesis, Hash256, Slot, ValidatorUpdate};

/// Represents the "Beacon Chain" component of this node: the single owner
/// of the canonical state for the duration of a block's application.
///
/// The host must serialize calls per chain head: at most one transition is
/// in flight against a given base state. Failed transitions leave the
/// store untouched; the working copy is simply dropped.
pub struct BeaconChain<S> {
    spec: ChainSpec,
    store: S,
    log: Logger,
}

impl<S: BeaconStore> BeaconChain<S> {
    pub fn new(spec: ChainSpec, store: S, log: Logger) -> Self {
        Self { spec, store, log }
    }

    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode a block delivered by the host consensus engine, dispatching
    /// on the fork schema active at `slot`.
    ///
    /// Structurally absent bodies or payloads surface here as decode
    /// errors; blocks that parse always carry every container.
    pub fn block_from_ssz_bytes(
        &self,
        bytes: &[u8],
        slot: Slot,
    ) -> Result<BeaconBlock, ssz::DecodeError> {
        BeaconBlock::from_ssz_bytes_for_fork(bytes, self.spec.fork_name_at_slot(slot))
    }

    /// Initialize the chain from the host's genesis document, returning the
    /// initial validator set for the host consensus engine.
    pub fn process_genesis(
        &self,
        genesis: &Genesis,
    ) -> Result<Vec<ValidatorUpdate>, BeaconChainError> {
        let (state, updates) = initialize_beacon_state_from_genesis(genesis, &self.spec)?;
        self.store.put_state(&state)?;

        info!(
            self.log,
            "Genesis state initialized";
            "validators" => updates.len(),
            "genesis_validators_root" => ?state.genesis_validators_root
        );
        Ok(updates)
    }

    /// Advance `state` to the block's slot and apply the block.
    fn transition<E>(
        &self,
        state: &mut BeaconState,
        block: &BeaconBlock,
        verify_payload: VerifyPayload,
    ) -> Result<Vec<ValidatorUpdate>, E>
    where
        E: From<SlotProcessingError> + From<BlockProcessingError>,
    {
        while state.slot < block.slot {
            per_slot_processing(state).map_err(E::from)?;
        }
        per_block_processing(state, block, verify_payload, &self.spec).map_err(E::from)
    }

    /// Run the restricted transition on a working copy of state and return
    /// the resulting state root.
    ///
    /// Payload admission and post-transition result checks are skipped:
    /// this path serves local block building, where the payload came from
    /// this node's own execution engine.
    pub fn compute_state_root(
        &self,
        state: &mut BeaconState,
        block: &BeaconBlock,
    ) -> Result<Hash256, BlockProductionError> {
        self.transition::<BlockProductionError>(state, block, VerifyPayload::False)?;
        Ok(state.tree_hash_root())
    }

    /// Compute the state root for `block` and write it into the block.
    ///
    /// The block is only mutated after the computation succeeds; on error
    /// it is returned exactly as it came in.
    pub fn compute_and_set_state_root(
        &self,
        state: &mut BeaconState,
        block: &mut BeaconBlock,
    ) -> Result<Hash256, BlockProductionError> {
        debug!(self.log, "Computing state root for block"; "slot" => %block.slot);

        let state_root = match self.compute_state_root(state, block) {
            Ok(state_root) => state_root,
            Err(e) => {
                error!(
                    self.log,
                    "Failed to compute state root";
                    "slot" => %block.slot,
                    "error" => ?e
                );
                return Err(e);
            }
        };

        block.state_root = state_root;
        Ok(state_root)
    }

    /// Import a peer's block: full validation, then persistence.
    ///
    /// The store is only touched after every check has passed — the
    /// deposits consumed by the block are dequeued and the post-state is
    /// persisted together, or not at all.
    pub fn process_block(
        &self,
        block: &BeaconBlock,
    ) -> Result<Vec<ValidatorUpdate>, BeaconChainError> {
        let mut state = self.store.get_state()?;

        // The block must consume exactly the deposits at the head of the
        // pending queue.
        let expected_deposits = self.store.peek_deposits(self.spec.max_deposits_per_block)?;
        if block.body.deposits[..] != expected_deposits[..] {
            warn!(
                self.log,
                "Block deposits do not match the pending queue";
                "slot" => %block.slot,
                "expected" => expected_deposits.len(),
                "found" => block.body.deposits.len()
            );
            return Err(BeaconChainError::DepositQueueMismatch {
                expected: expected_deposits.len(),
                found: block.body.deposits.len(),
            });
        }

        let updates = match self.transition::<BeaconChainError>(
            &mut state,
            block,
            VerifyPayload::True,
        ) {
            Ok(updates) => updates,
            Err(e) => {
                warn!(
                    self.log,
                    "Block failed state transition";
                    "slot" => %block.slot,
                    "error" => ?e
                );
                return Err(e);
            }
        };

        // The block must commit to the state it produces.
        let state_root = state.tree_hash_root();
        if block.state_root != state_root {
            warn!(
                self.log,
                "Block state root mismatch";
                "slot" => %block.slot,
                "expected" => ?state_root,
                "found" => ?block.state_root
            );
            return Err(BeaconChainError::StateRootMismatch {
                expected: state_root,
                found: block.state_root,
            });
        }

        self.store
            .dequeue_deposits(block.body.deposits.len() as u64)?;
        self.store.put_state(&state)?;

        info!(
            self.log,
            "Block processed";
            "slot" => %block.slot,
            "state_root" => ?state_root,
            "validator_updates" => updates.len()
        );
        Ok(updates)
    }
}
