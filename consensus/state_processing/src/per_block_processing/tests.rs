#![cfg(test)]

use super::errors::{BlockProcessingError, HeaderInvalid, PayloadError};
use super::*;
use crate::per_slot_processing::per_slot_processing;
use types::{
    Address, BeaconBlock, BeaconBlockBody, BeaconState, ChainSpec, Epoch, ExecutionPayload,
    Hash256, KzgCommitment, PublicKeyBytes, Validator, WithdrawalCredentials,
};

const RING_LEN: u64 = 64;

fn spec() -> ChainSpec {
    ChainSpec::mainnet()
}

fn pubkey(i: usize) -> PublicKeyBytes {
    let mut bytes = [0; 48];
    bytes[..8].copy_from_slice(&(i as u64 + 1).to_le_bytes());
    PublicKeyBytes::from(bytes)
}

fn withdrawal_address(i: usize) -> Address {
    Address::repeat_byte(i as u8 + 1)
}

fn active_validator(i: usize, spec: &ChainSpec) -> Validator {
    Validator {
        activation_eligibility_epoch: Epoch::new(0),
        activation_epoch: Epoch::new(0),
        ..Validator::new_from_deposit(
            pubkey(i),
            WithdrawalCredentials::eth1(withdrawal_address(i), spec).into(),
            spec.max_effective_balance,
            spec,
        )
    }
}

/// A state at slot 1 with `validator_count` active validators at the
/// maximum effective balance, and short but non-empty history rings.
fn test_state(validator_count: usize, spec: &ChainSpec) -> BeaconState {
    let mut state = BeaconState::default();
    state.slot = types::Slot::new(1);
    state.eth1_data.block_hash = Hash256::repeat_byte(0xe1);

    for i in 0..validator_count {
        state.validators.push(active_validator(i, spec)).unwrap();
        state.balances.push(spec.max_effective_balance).unwrap();
    }
    for _ in 0..RING_LEN {
        state
            .randao_mixes
            .push(Hash256::repeat_byte(0x07))
            .unwrap();
        state.block_roots.push(Hash256::zero()).unwrap();
        state.state_roots.push(Hash256::zero()).unwrap();
    }
    state
}

/// A block that passes every admission check against `state`.
fn valid_block(state: &BeaconState, spec: &ChainSpec) -> BeaconBlock {
    let safe_hash = if state.slot <= types::Slot::new(1) {
        state.eth1_block_hash()
    } else {
        state.latest_execution_block_hash()
    };
    let expected_withdrawals = get_expected_withdrawals(state, spec).unwrap();

    let payload = ExecutionPayload {
        parent_hash: safe_hash,
        prev_randao: *state.get_randao_mix(state.current_epoch(spec)).unwrap(),
        block_hash: Hash256::repeat_byte(0xbb),
        withdrawals: expected_withdrawals.into(),
        ..ExecutionPayload::default()
    };

    BeaconBlock {
        slot: state.slot,
        parent_root: state.latest_block_header.canonical_root(),
        body: BeaconBlockBody {
            execution_payload: payload,
            ..BeaconBlockBody::default()
        },
        ..BeaconBlock::default()
    }
}

mod payload_admission {
    use super::*;

    #[test]
    fn accepts_a_valid_payload() {
        let spec = spec();
        let state = test_state(4, &spec);
        let block = valid_block(&state, &spec);

        assert!(partially_verify_execution_payload(&state, &block.body, &spec).is_ok());
    }

    #[test]
    fn rejects_wrong_parent_hash() {
        let spec = spec();
        let state = test_state(4, &spec);
        let mut block = valid_block(&state, &spec);
        let expected = block.body.execution_payload.parent_hash;

        block.body.execution_payload.parent_hash = Hash256::repeat_byte(0x66);

        assert_eq!(
            partially_verify_execution_payload(&state, &block.body, &spec),
            Err(BlockProcessingError::PayloadInvalid(
                PayloadError::ParentHashMismatch {
                    expected,
                    found: Hash256::repeat_byte(0x66),
                }
            ))
        );
    }

    #[test]
    fn rejects_wrong_randao() {
        let spec = spec();
        let state = test_state(4, &spec);
        let mut block = valid_block(&state, &spec);
        let expected = block.body.execution_payload.prev_randao;

        block.body.execution_payload.prev_randao = Hash256::repeat_byte(0x66);

        assert_eq!(
            partially_verify_execution_payload(&state, &block.body, &spec),
            Err(BlockProcessingError::PayloadInvalid(
                PayloadError::RandaoMismatch {
                    expected,
                    found: Hash256::repeat_byte(0x66),
                }
            ))
        );
    }

    #[test]
    fn rejects_one_too_many_blob_commitments() {
        let spec = spec();
        let state = test_state(4, &spec);
        let mut block = valid_block(&state, &spec);

        for _ in 0..=spec.max_blobs_per_block {
            block
                .body
                .blob_kzg_commitments
                .push(KzgCommitment::empty())
                .unwrap();
        }

        assert_eq!(
            partially_verify_execution_payload(&state, &block.body, &spec),
            Err(BlockProcessingError::PayloadInvalid(
                PayloadError::TooManyBlobCommitments {
                    max: spec.max_blobs_per_block,
                    found: spec.max_blobs_per_block + 1,
                }
            ))
        );

        // Exactly at the limit is fine.
        let mut at_limit = valid_block(&state, &spec);
        for _ in 0..spec.max_blobs_per_block {
            at_limit
                .body
                .blob_kzg_commitments
                .push(KzgCommitment::empty())
                .unwrap();
        }
        assert!(partially_verify_execution_payload(&state, &at_limit.body, &spec).is_ok());
    }

    #[test]
    fn rejects_one_too_many_withdrawals() {
        // Run with a spec stricter than the SSZ capacity so the run-time
        // limit is the binding one.
        let mut spec = spec();
        spec.max_withdrawals_per_payload = 2;

        let state = test_state(4, &spec);
        let mut block = valid_block(&state, &spec);
        for i in 0..3 {
            block
                .body
                .execution_payload
                .withdrawals
                .push(types::Withdrawal {
                    index: i,
                    validator_index: 0,
                    address: withdrawal_address(0),
                    amount: 1,
                })
                .unwrap();
        }

        assert_eq!(
            partially_verify_execution_payload(&state, &block.body, &spec),
            Err(BlockProcessingError::PayloadInvalid(
                PayloadError::TooManyWithdrawals { max: 2, found: 3 }
            ))
        );
    }

    #[test]
    fn checks_run_in_order_and_short_circuit() {
        let spec = spec();
        let state = test_state(4, &spec);
        let mut block = valid_block(&state, &spec);

        // Both the parent hash and the randao are wrong; the parent-hash
        // check fires first.
        block.body.execution_payload.parent_hash = Hash256::repeat_byte(0x66);
        block.body.execution_payload.prev_randao = Hash256::repeat_byte(0x67);

        assert!(matches!(
            partially_verify_execution_payload(&state, &block.body, &spec),
            Err(BlockProcessingError::PayloadInvalid(
                PayloadError::ParentHashMismatch { .. }
            ))
        ));
    }

    #[test]
    fn genesis_slot_checks_against_eth1_block_hash() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        // Past slot 1 the parent must be the latest payload's block hash.
        state.slot = types::Slot::new(2);
        state.latest_execution_payload_header.block_hash = Hash256::repeat_byte(0xcc);

        let block = valid_block(&state, &spec);
        assert_eq!(
            block.body.execution_payload.parent_hash,
            Hash256::repeat_byte(0xcc)
        );
        assert!(partially_verify_execution_payload(&state, &block.body, &spec).is_ok());
    }
}

mod block_header {
    use super::*;

    #[test]
    fn rejects_slot_mismatch() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let mut block = valid_block(&state, &spec);
        block.slot = state.slot + 1;

        assert!(matches!(
            per_block_processing(&mut state, &block, VerifyPayload::True, &spec),
            Err(BlockProcessingError::HeaderInvalid(
                HeaderInvalid::StateSlotMismatch { .. }
            ))
        ));
    }

    #[test]
    fn rejects_parent_root_mismatch() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let mut block = valid_block(&state, &spec);
        block.parent_root = Hash256::repeat_byte(0x99);

        assert!(matches!(
            per_block_processing(&mut state, &block, VerifyPayload::True, &spec),
            Err(BlockProcessingError::HeaderInvalid(
                HeaderInvalid::ParentBlockRootMismatch { .. }
            ))
        ));
    }

    #[test]
    fn rotates_the_latest_block_header() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let block = valid_block(&state, &spec);

        per_block_processing(&mut state, &block, VerifyPayload::True, &spec).unwrap();

        assert_eq!(state.latest_block_header, block.temporary_block_header());
        assert!(state.latest_block_header.state_root.is_zero());
    }
}

mod withdrawals {
    use super::*;

    #[test]
    fn full_withdrawal_takes_the_whole_balance() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        state.get_validator_mut(1).unwrap().withdrawable_epoch = Epoch::new(0);
        *state.get_balance_mut(1).unwrap() = 31_000_000_000;
        state.next_withdrawal_index = 40;

        let withdrawals = get_expected_withdrawals(&state, &spec).unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].index, 40);
        assert_eq!(withdrawals[0].validator_index, 1);
        assert_eq!(withdrawals[0].address, withdrawal_address(1));
        assert_eq!(withdrawals[0].amount, 31_000_000_000);
    }

    #[test]
    fn partial_withdrawal_takes_only_the_excess() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(2).unwrap() = spec.max_effective_balance + 123;

        let withdrawals = get_expected_withdrawals(&state, &spec).unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].validator_index, 2);
        assert_eq!(withdrawals[0].amount, 123);
    }

    #[test]
    fn no_excess_no_partial_withdrawal() {
        let spec = spec();
        let state = test_state(4, &spec);
        assert!(get_expected_withdrawals(&state, &spec)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn full_withdrawal_wins_over_partial() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        state.get_validator_mut(1).unwrap().withdrawable_epoch = Epoch::new(0);
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 500;

        let withdrawals = get_expected_withdrawals(&state, &spec).unwrap();
        assert_eq!(withdrawals.len(), 1);
        // The entire balance leaves, not just the excess.
        assert_eq!(withdrawals[0].amount, spec.max_effective_balance + 500);
    }

    #[test]
    fn sweep_rotates_from_the_cursor() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 10;
        *state.get_balance_mut(3).unwrap() = spec.max_effective_balance + 30;
        state.next_withdrawal_validator_index = 2;

        let withdrawals = get_expected_withdrawals(&state, &spec).unwrap();
        // Sweep order is 2, 3, 0, 1.
        assert_eq!(withdrawals.len(), 2);
        assert_eq!(withdrawals[0].validator_index, 3);
        assert_eq!(withdrawals[1].validator_index, 1);
        // Withdrawal indices are consecutive.
        assert_eq!(withdrawals[1].index, withdrawals[0].index + 1);
    }

    #[test]
    fn derivation_is_a_pure_function_of_state() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(0).unwrap() = spec.max_effective_balance + 7;

        assert_eq!(
            get_expected_withdrawals(&state, &spec).unwrap(),
            get_expected_withdrawals(&state, &spec).unwrap()
        );
    }

    #[test]
    fn payload_limit_caps_the_sweep() {
        let mut spec = spec();
        spec.max_withdrawals_per_payload = 1;
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(0).unwrap() = spec.max_effective_balance + 10;
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 20;

        let withdrawals = get_expected_withdrawals(&state, &spec).unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].validator_index, 0);
    }

    #[test]
    fn process_withdrawals_applies_and_advances_cursors() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 77;

        let expected = get_expected_withdrawals(&state, &spec).unwrap();
        let payload = ExecutionPayload {
            withdrawals: expected.clone().into(),
            ..ExecutionPayload::default()
        };

        process_withdrawals(&mut state, &payload, &spec).unwrap();

        assert_eq!(
            state.get_balance(1).unwrap(),
            spec.max_effective_balance
        );
        assert_eq!(state.next_withdrawal_index, expected.last().unwrap().index + 1);
        // The sweep covered its whole range; the cursor jumps over it.
        assert_eq!(
            state.next_withdrawal_validator_index,
            spec.max_validators_per_withdrawals_sweep % 4
        );
    }

    #[test]
    fn full_payload_resumes_after_last_validator() {
        let mut spec = spec();
        spec.max_withdrawals_per_payload = 1;
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(0).unwrap() = spec.max_effective_balance + 10;
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 20;

        let expected = get_expected_withdrawals(&state, &spec).unwrap();
        let payload = ExecutionPayload {
            withdrawals: expected.into(),
            ..ExecutionPayload::default()
        };
        process_withdrawals(&mut state, &payload, &spec).unwrap();

        // The payload filled at validator 0; the next sweep starts at 1.
        assert_eq!(state.next_withdrawal_validator_index, 1);
    }

    #[test]
    fn rejects_payload_withdrawals_that_differ_from_derived() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        *state.get_balance_mut(1).unwrap() = spec.max_effective_balance + 77;

        // Wrong count.
        let empty_payload = ExecutionPayload::default();
        assert_eq!(
            process_withdrawals(&mut state.clone(), &empty_payload, &spec),
            Err(BlockProcessingError::WithdrawalCountMismatch {
                expected: 1,
                found: 0,
            })
        );

        // Right count, wrong record.
        let mut tampered = get_expected_withdrawals(&state, &spec).unwrap();
        tampered[0].amount += 1;
        let payload = ExecutionPayload {
            withdrawals: tampered.into(),
            ..ExecutionPayload::default()
        };
        assert_eq!(
            process_withdrawals(&mut state, &payload, &spec),
            Err(BlockProcessingError::WithdrawalMismatch { index: 0 })
        );
    }
}

mod deposits {
    use super::*;
    use types::Deposit;

    #[test]
    fn new_pubkey_is_admitted_to_the_registry() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let deposit = Deposit::new(
            pubkey(9),
            WithdrawalCredentials::eth1(withdrawal_address(9), &spec).into(),
            32_500_000_000,
            0,
        );

        process_deposits(&mut state, &[deposit], &spec).unwrap();

        assert_eq!(state.validators.len(), 3);
        assert_eq!(state.balances.len(), 3);
        let admitted = state.get_validator(2).unwrap();
        assert_eq!(admitted.pubkey, pubkey(9));
        // Rounded down to the increment, then capped.
        assert_eq!(admitted.effective_balance, spec.max_effective_balance);
        assert_eq!(admitted.activation_epoch, spec.far_future_epoch);
        // The raw balance keeps the un-rounded amount.
        assert_eq!(state.get_balance(2).unwrap(), 32_500_000_000);
        assert_eq!(state.eth1_deposit_index, 1);
    }

    #[test]
    fn known_pubkey_is_a_top_up() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let deposit = Deposit::new(
            pubkey(1),
            WithdrawalCredentials::eth1(withdrawal_address(1), &spec).into(),
            1_000_000_000,
            0,
        );

        process_deposits(&mut state, &[deposit], &spec).unwrap();

        assert_eq!(state.validators.len(), 2);
        assert_eq!(
            state.get_balance(1).unwrap(),
            spec.max_effective_balance + 1_000_000_000
        );
    }

    #[test]
    fn rejects_out_of_order_deposit() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let deposit = Deposit::new(pubkey(9), Hash256::zero(), 1_000_000_000, 5);

        assert_eq!(
            process_deposits(&mut state, &[deposit], &spec),
            Err(BlockProcessingError::DepositIndexMismatch {
                expected: 0,
                found: 5,
            })
        );
    }

    #[test]
    fn rejects_more_deposits_than_the_block_limit() {
        let mut spec = spec();
        spec.max_deposits_per_block = 1;
        let mut state = test_state(2, &spec);
        let deposits = vec![
            Deposit::new(pubkey(8), Hash256::zero(), 1, 0),
            Deposit::new(pubkey(9), Hash256::zero(), 1, 1),
        ];

        assert_eq!(
            process_deposits(&mut state, &deposits, &spec),
            Err(BlockProcessingError::DepositCountInvalid {
                limit: 1,
                found: 2,
            })
        );
    }
}

mod registry_updates {
    use super::*;

    #[test]
    fn fresh_validator_is_stamped_but_not_activated() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let fresh = Validator::new_from_deposit(
            pubkey(9),
            WithdrawalCredentials::eth1(withdrawal_address(9), &spec).into(),
            spec.max_effective_balance,
            &spec,
        );
        state.validators.push(fresh).unwrap();
        state.balances.push(spec.max_effective_balance).unwrap();

        let updates = process_registry_updates(&mut state, &spec).unwrap();

        let stamped = state.get_validator(2).unwrap();
        assert_eq!(
            stamped.activation_eligibility_epoch,
            state.current_epoch(&spec) + 1
        );
        assert_eq!(stamped.activation_epoch, spec.far_future_epoch);
        assert!(updates.is_empty());
    }

    #[test]
    fn stamped_validator_activates_once_eligible() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let mut pending = Validator::new_from_deposit(
            pubkey(9),
            WithdrawalCredentials::eth1(withdrawal_address(9), &spec).into(),
            spec.max_effective_balance,
            &spec,
        );
        pending.activation_eligibility_epoch = Epoch::new(0);
        state.validators.push(pending).unwrap();
        state.balances.push(spec.max_effective_balance).unwrap();

        let updates = process_registry_updates(&mut state, &spec).unwrap();

        let expected_activation =
            state.compute_activation_exit_epoch(state.current_epoch(&spec), &spec);
        assert_eq!(
            state.get_validator(2).unwrap().activation_epoch,
            expected_activation
        );
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].pubkey, pubkey(9));
        assert_eq!(updates[0].effective_balance, spec.max_effective_balance);
    }

    #[test]
    fn underfunded_active_validator_is_ejected() {
        let spec = spec();
        let mut state = test_state(3, &spec);
        state.get_validator_mut(1).unwrap().effective_balance = spec.ejection_balance;

        let updates = process_registry_updates(&mut state, &spec).unwrap();

        let ejected = state.get_validator(1).unwrap();
        assert_ne!(ejected.exit_epoch, spec.far_future_epoch);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].pubkey, pubkey(1));
        assert_eq!(updates[0].effective_balance, 0);
    }

    #[test]
    fn activations_respect_the_churn_limit() {
        let spec = spec();
        let churn = spec.min_per_epoch_churn_limit as usize;
        let mut state = test_state(2, &spec);
        for i in 0..churn + 2 {
            let mut pending = Validator::new_from_deposit(
                pubkey(10 + i),
                WithdrawalCredentials::eth1(withdrawal_address(10 + i), &spec).into(),
                spec.max_effective_balance,
                &spec,
            );
            pending.activation_eligibility_epoch = Epoch::new(0);
            state.validators.push(pending).unwrap();
            state.balances.push(spec.max_effective_balance).unwrap();
        }

        let updates = process_registry_updates(&mut state, &spec).unwrap();

        // Only the first `churn` pending validators activate, in index
        // order.
        assert_eq!(updates.len(), churn);
        let activated: Vec<usize> = (0..churn + 2)
            .filter(|i| {
                state.get_validator(2 + i).unwrap().activation_epoch != spec.far_future_epoch
            })
            .collect();
        assert_eq!(activated, (0..churn).collect::<Vec<_>>());
    }
}

mod full_block {
    use super::*;
    use types::Deposit;

    #[test]
    fn processes_a_valid_block() {
        let spec = spec();
        let mut state = test_state(4, &spec);
        let block = valid_block(&state, &spec);
        let mix_before = *state.get_randao_mix(state.current_epoch(&spec)).unwrap();

        per_block_processing(&mut state, &block, VerifyPayload::True, &spec).unwrap();

        // Payload header absorbed, randao folded, header rotated.
        assert_eq!(
            state.latest_execution_block_hash(),
            block.body.execution_payload.block_hash
        );
        assert_ne!(
            *state.get_randao_mix(state.current_epoch(&spec)).unwrap(),
            mix_before
        );
        assert_eq!(state.latest_block_header.slot, block.slot);
    }

    #[test]
    fn deposits_are_applied_before_withdrawal_derivation() {
        let spec = spec();
        let mut state = test_state(2, &spec);

        // A top-up deposit pushes validator 1 above the cap; the very same
        // block must already sweep the excess back out.
        let deposit = Deposit::new(
            pubkey(1),
            WithdrawalCredentials::eth1(withdrawal_address(1), &spec).into(),
            1_000_000_000,
            0,
        );

        // Derive the withdrawals the block must carry from a scratch copy
        // with the deposit applied, the way a proposer would.
        let mut scratch = state.clone();
        process_deposits(&mut scratch, std::slice::from_ref(&deposit), &spec).unwrap();
        let post_deposit_withdrawals = get_expected_withdrawals(&scratch, &spec).unwrap();
        assert_eq!(post_deposit_withdrawals.len(), 1);
        assert_eq!(post_deposit_withdrawals[0].amount, 1_000_000_000);

        let mut block = valid_block(&state, &spec);
        block.body.deposits.push(deposit).unwrap();
        block.body.execution_payload.withdrawals = post_deposit_withdrawals.into();

        per_block_processing(&mut state, &block, VerifyPayload::True, &spec).unwrap();

        // The excess came in and went straight back out.
        assert_eq!(
            state.get_balance(1).unwrap(),
            spec.max_effective_balance
        );
    }

    #[test]
    fn pre_deposit_withdrawals_are_rejected_as_misordered() {
        let spec = spec();
        let mut state = test_state(2, &spec);

        let deposit = Deposit::new(
            pubkey(1),
            WithdrawalCredentials::eth1(withdrawal_address(1), &spec).into(),
            1_000_000_000,
            0,
        );

        // A block that carries the deposit but derives its withdrawals from
        // the pre-deposit balances (an empty list) is invalid: the deposit
        // makes validator 1 partially withdrawable within the same block.
        let mut block = valid_block(&state, &spec);
        block.body.deposits.push(deposit).unwrap();

        assert_eq!(
            per_block_processing(&mut state, &block, VerifyPayload::True, &spec),
            Err(BlockProcessingError::WithdrawalCountMismatch {
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn skipping_payload_verification_still_mutates_state() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let mut block = valid_block(&state, &spec);

        // Break the payload linkage; the restricted transition must not
        // care.
        block.body.execution_payload.parent_hash = Hash256::repeat_byte(0x66);

        per_block_processing(&mut state, &block, VerifyPayload::False, &spec).unwrap();
        assert_eq!(
            state.latest_execution_block_hash(),
            block.body.execution_payload.block_hash
        );
    }
}

mod slot_processing {
    use super::*;
    use tree_hash::TreeHash;

    #[test]
    fn caches_roots_and_advances_the_slot() {
        let spec = spec();
        let mut state = test_state(2, &spec);
        let slot_before = state.slot;
        let root_before = state.tree_hash_root();

        per_slot_processing(&mut state).unwrap();

        assert_eq!(state.slot, slot_before + 1);
        assert_eq!(
            state.state_roots[slot_before.as_usize() % RING_LEN as usize],
            root_before
        );
        // The default header had a zero state root: it must now commit to
        // the cached root.
        assert_eq!(state.latest_block_header.state_root, root_before);
    }
}
