// Staging tests for proposal enactments.
//
// These run the pure staging logic against hand-built ledger snapshots,
// so no blockchain mock is needed: StaticApi backs the managed types.

use multiversx_sc::codec::TopEncode;
use multiversx_sc::types::{Address, BigUint, ManagedAddress, ManagedBuffer, ManagedVec};
use multiversx_sc_scenario::api::StaticApi;

use partnership::governed::{self, Enactment, EnactmentError, LedgerDelta, LedgerSnapshot, Payout};
use partnership::types::{ExternalCall, GovernedAction};

type Api = StaticApi;

fn address(byte: u8) -> ManagedAddress<Api> {
    ManagedAddress::from_address(&Address::from([byte; 32]))
}

fn own_address() -> ManagedAddress<Api> {
    address(0xAA)
}

fn amount(value: u64) -> BigUint<Api> {
    BigUint::from(value)
}

fn snapshot(custody: u64, total_credit: u64) -> LedgerSnapshot<Api> {
    let mut partners = ManagedVec::new();
    partners.push(address(1));
    partners.push(address(2));
    LedgerSnapshot {
        own_address: own_address(),
        custody: amount(custody),
        total_credit: amount(total_credit),
        partners,
    }
}

fn encode<T: TopEncode>(item: &T) -> ManagedBuffer<Api> {
    let mut buffer = ManagedBuffer::new();
    item.top_encode(&mut buffer).unwrap();
    buffer
}

fn no_loans(_: &ManagedAddress<Api>) -> BigUint<Api> {
    BigUint::zero()
}

fn stage_action(
    action: GovernedAction<Api>,
    snapshot: &LedgerSnapshot<Api>,
) -> Result<Enactment<Api>, EnactmentError> {
    governed::stage(
        &own_address(),
        &BigUint::zero(),
        &encode(&action),
        snapshot,
        no_loans,
    )
}

fn expect_ledger(result: Result<Enactment<Api>, EnactmentError>) -> LedgerDelta<Api> {
    match result {
        Ok(Enactment::Ledger(delta)) => delta,
        Ok(Enactment::Payout(_)) => panic!("expected a ledger delta, got a payout"),
        Err(err) => panic!("expected a ledger delta, got {err:?}"),
    }
}

fn expect_payout(result: Result<Enactment<Api>, EnactmentError>) -> Payout<Api> {
    match result {
        Ok(Enactment::Payout(payout)) => payout,
        Ok(Enactment::Ledger(_)) => panic!("expected a payout, got a ledger delta"),
        Err(err) => panic!("expected a payout, got {err:?}"),
    }
}

fn expect_error(result: Result<Enactment<Api>, EnactmentError>) -> EnactmentError {
    match result {
        Err(err) => err,
        Ok(_) => panic!("expected staging to fail"),
    }
}

#[test]
fn uncommitted_never_underflows() {
    assert_eq!(snapshot(10, 4).uncommitted(), amount(6));
    assert_eq!(snapshot(4, 4).uncommitted(), amount(0));
    assert_eq!(snapshot(3, 4).uncommitted(), amount(0));
}

#[test]
fn distribute_evenly_leaves_truncation_remainder() {
    let delta = expect_ledger(stage_action(
        GovernedAction::DistributeEvenly { total: amount(3) },
        &snapshot(10, 0),
    ));

    assert_eq!(delta.credits.len(), 2);
    for entry in delta.credits.iter() {
        assert_eq!(entry.amount, amount(1));
    }
    assert_eq!(delta.credits.get(0).account, address(1));
    assert_eq!(delta.credits.get(1).account, address(2));
    assert_eq!(delta.credited_total(), amount(2));
    assert!(delta.repaid_loan.is_none());
}

#[test]
fn distribute_evenly_needs_uncommitted_total() {
    let err = expect_error(stage_action(
        GovernedAction::DistributeEvenly { total: amount(5) },
        &snapshot(10, 6),
    ));
    assert_eq!(err, EnactmentError::InsufficientFunds);
}

#[test]
fn distribute_checks_uncommitted_funds_not_custody() {
    let ledger = snapshot(10, 8);

    let err = expect_error(stage_action(
        GovernedAction::Distribute {
            beneficiary: address(7),
            amount: amount(3),
        },
        &ledger,
    ));
    assert_eq!(err, EnactmentError::InsufficientFunds);

    let delta = expect_ledger(stage_action(
        GovernedAction::Distribute {
            beneficiary: address(7),
            amount: amount(2),
        },
        &ledger,
    ));
    assert_eq!(delta.credits.len(), 1);
    assert_eq!(delta.credits.get(0).account, address(7));
    assert_eq!(delta.credited_total(), amount(2));
}

#[test]
fn distribute_rejects_zero_and_own_address() {
    for beneficiary in [ManagedAddress::zero(), own_address()] {
        let err = expect_error(stage_action(
            GovernedAction::Distribute {
                beneficiary,
                amount: amount(1),
            },
            &snapshot(10, 0),
        ));
        assert_eq!(err, EnactmentError::InvalidBeneficiary);
    }
}

#[test]
fn repay_loan_is_bounded_by_recorded_loan() {
    let lender = address(1);
    let loan_of = |partner: &ManagedAddress<Api>| {
        if *partner == address(1) {
            amount(5)
        } else {
            BigUint::zero()
        }
    };
    let ledger = snapshot(20, 0);

    let over = GovernedAction::RepayLoan {
        partner: lender.clone(),
        amount: amount(6),
    };
    let err = expect_error(governed::stage(
        &own_address(),
        &BigUint::zero(),
        &encode(&over),
        &ledger,
        loan_of,
    ));
    assert_eq!(err, EnactmentError::ExcessiveRepayment);

    let exact = GovernedAction::RepayLoan {
        partner: lender.clone(),
        amount: amount(5),
    };
    let delta = expect_ledger(governed::stage(
        &own_address(),
        &BigUint::zero(),
        &encode(&exact),
        &ledger,
        loan_of,
    ));
    let repaid = delta.repaid_loan.as_ref().unwrap();
    assert_eq!(repaid.account, lender);
    assert_eq!(repaid.amount, amount(5));
    assert_eq!(delta.credits.get(0).account, lender);
    assert_eq!(delta.credited_total(), amount(5));
}

#[test]
fn repay_loan_cannot_overcommit_custody() {
    let loan_of = |_: &ManagedAddress<Api>| amount(5);
    let action = GovernedAction::RepayLoan {
        partner: address(1),
        amount: amount(5),
    };

    let err = expect_error(governed::stage(
        &own_address(),
        &BigUint::zero(),
        &encode(&action),
        &snapshot(10, 8),
        loan_of,
    ));
    assert_eq!(err, EnactmentError::InsufficientFunds);
}

#[test]
fn dissolve_pays_out_whole_custody() {
    let payout = expect_payout(stage_action(
        GovernedAction::Dissolve {
            beneficiary: address(9),
        },
        &snapshot(12, 7),
    ));

    assert_eq!(payout.to, address(9));
    assert_eq!(payout.amount, amount(12));
    assert!(payout.dissolves);
    assert!(payout.call.endpoint.is_empty());
}

#[test]
fn dissolve_to_self_is_an_invalid_beneficiary() {
    let err = expect_error(stage_action(
        GovernedAction::Dissolve {
            beneficiary: own_address(),
        },
        &snapshot(12, 0),
    ));
    assert_eq!(err, EnactmentError::InvalidBeneficiary);
}

#[test]
fn undecodable_self_payload_is_malformed() {
    let err = expect_error(governed::stage(
        &own_address(),
        &BigUint::zero(),
        &ManagedBuffer::from("not an action"),
        &snapshot(10, 0),
        no_loans,
    ));
    assert_eq!(err, EnactmentError::MalformedPayload);
}

#[test]
fn empty_external_payload_is_a_plain_transfer() {
    let payout = expect_payout(governed::stage(
        &address(5),
        &amount(4),
        &ManagedBuffer::new(),
        &snapshot(10, 6),
        no_loans,
    ));

    assert_eq!(payout.to, address(5));
    assert_eq!(payout.amount, amount(4));
    assert!(!payout.dissolves);
    assert_eq!(payout.call, ExternalCall::transfer());
}

#[test]
fn external_call_keeps_endpoint_and_arguments() {
    let mut arguments = ManagedVec::new();
    arguments.push(ManagedBuffer::from("first"));
    let call = ExternalCall {
        endpoint: ManagedBuffer::from("deposit"),
        arguments,
    };

    let payout = expect_payout(governed::stage(
        &address(5),
        &amount(1),
        &encode(&call),
        &snapshot(10, 0),
        no_loans,
    ));
    assert_eq!(payout.call, call);
}

#[test]
fn external_payout_cannot_spend_committed_credit() {
    let err = expect_error(governed::stage(
        &address(5),
        &amount(5),
        &ManagedBuffer::new(),
        &snapshot(10, 6),
        no_loans,
    ));
    assert_eq!(err, EnactmentError::InsufficientFunds);
}

#[test]
fn external_payout_to_zero_address_is_rejected() {
    let err = expect_error(governed::stage(
        &ManagedAddress::zero(),
        &amount(1),
        &ManagedBuffer::new(),
        &snapshot(10, 0),
        no_loans,
    ));
    assert_eq!(err, EnactmentError::InvalidBeneficiary);
}
