#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod errors;
pub mod events;
pub mod funding;
pub mod governed;
pub mod ledger;
pub mod proposals;
pub mod storage;
pub mod types;

use errors::*;
use governed::{Enactment, Payout};
use types::{FundState, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Unanimity of "everyone but the initiator" is vacuous below two partners.
const MIN_PARTNERS: usize = 2;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Partnership:
    storage::StorageModule
    + access::AccessModule
    + events::EventsModule
    + ledger::LedgerModule
    + funding::FundingModule
    + proposals::ProposalsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, required_contribution: BigUint, partners: MultiValueEncoded<ManagedAddress>) {
        require!(required_contribution > 0u64, ERR_ZERO_CONTRIBUTION);

        for partner in partners {
            require!(!partner.is_zero(), ERR_ZERO_PARTNER);
            require!(self.partners().insert(partner), ERR_DUPLICATE_PARTNER);
        }
        require!(self.partners().len() >= MIN_PARTNERS, ERR_TOO_FEW_PARTNERS);

        self.required_contribution().set(&required_contribution);
        self.fund_state().set(FundState::Unfunded);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: executeTransaction
    // The Sent transition is stored first and never undone.
    // Enactment is staged against a snapshot; a failed stage
    // or a rejected payout leaves the ledger untouched and
    // emits nothing.
    // ========================================================

    #[endpoint(executeTransaction)]
    fn execute_transaction(&self, proposal_id: u64) {
        self.require_not_dissolved();
        let caller = self.blockchain().get_caller();
        self.require_partner(&caller);

        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.status == ProposalStatus::Passed, ERR_NOT_PASSED);

        proposal.status = ProposalStatus::Sent;
        self.proposals(proposal_id).set(&proposal);

        let snapshot = self.ledger_snapshot();
        let staged = governed::stage(
            &proposal.destination,
            &proposal.value,
            &proposal.payload,
            &snapshot,
            |partner| self.loan(partner).get(),
        );
        match staged.ok() {
            Some(Enactment::Ledger(delta)) => {
                self.commit_ledger_delta(&delta);
                self.transaction_sent_event(proposal_id);
            },
            Some(Enactment::Payout(payout)) => self.dispatch_payout(proposal_id, payout),
            None => {},
        }
    }

    fn dispatch_payout(&self, proposal_id: u64, payout: Payout<Self::Api>) {
        let callback = if payout.dissolves {
            Partnership::callbacks(self).dissolve_callback(
                proposal_id,
                payout.to.clone(),
                payout.amount.clone(),
            )
        } else {
            Partnership::callbacks(self).payout_callback(proposal_id)
        };

        self.tx()
            .to(&payout.to)
            .egld(payout.amount)
            .raw_call(payout.call.endpoint)
            .arguments_raw(ManagedArgBuffer::from(payout.call.arguments))
            .callback(callback)
            .async_call_and_exit();
    }

    // ========================================================
    // CALLBACKS
    // A rejected payout is refunded by the protocol; the
    // proposal stays Sent without a transactionSent event.
    // ========================================================

    #[callback]
    fn payout_callback(
        &self,
        proposal_id: u64,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
    ) {
        if let ManagedAsyncCallResult::Ok(_) = result {
            self.transaction_sent_event(proposal_id);
        }
    }

    #[callback]
    fn dissolve_callback(
        &self,
        proposal_id: u64,
        beneficiary: ManagedAddress,
        amount: BigUint,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
    ) {
        if let ManagedAsyncCallResult::Ok(_) = result {
            self.fund_state().set(FundState::Dissolved);
            self.transaction_sent_event(proposal_id);
            self.dissolved_event(&beneficiary, &amount);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue4<BigUint, u64, u64, FundState> {
        let required = self.required_contribution().get();
        let partner_count = self.partners().len() as u64;
        let proposal_count = self.proposal_count().get();
        let state = self.fund_state().get();
        (required, partner_count, proposal_count, state).into()
    }
}
