multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, ProposalStatus};
use crate::{access, events, storage};

#[multiversx_sc::module]
pub trait ProposalsModule:
    storage::StorageModule + access::AccessModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: proposeTransaction
    // Any partner of a funded partnership can propose.
    // ========================================================

    #[endpoint(proposeTransaction)]
    fn propose_transaction(
        &self,
        destination: ManagedAddress,
        value: BigUint,
        payload: ManagedBuffer,
        description: ManagedBuffer,
    ) -> u64 {
        self.require_funded();
        let caller = self.blockchain().get_caller();
        self.require_partner(&caller);

        let proposal_id = self.proposal_count().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            initiator: caller.clone(),
            destination,
            value,
            payload,
            description,
            status: ProposalStatus::Proposed,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.transaction_proposed_event(
            proposal_id,
            &caller,
            &proposal.destination,
            &proposal.value,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: confirmTransaction
    // Passes once every partner but the initiator confirmed.
    // ========================================================

    #[endpoint(confirmTransaction)]
    fn confirm_transaction(&self, proposal_id: u64) {
        self.require_not_dissolved();
        let caller = self.blockchain().get_caller();
        self.require_partner(&caller);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::Proposed,
            ERR_NOT_PROPOSED
        );
        require!(
            !self.is_initiator(&proposal, &caller),
            ERR_INITIATOR_CONFIRMS
        );
        require!(
            self.confirmations(proposal_id).insert(caller.clone()),
            ERR_ALREADY_CONFIRMED
        );

        // the passing confirmation logs transactionPassed first
        if self.confirmations(proposal_id).len() == self.partners().len() - 1 {
            proposal.status = ProposalStatus::Passed;
            self.proposals(proposal_id).set(&proposal);
            self.transaction_passed_event(proposal_id);
        }
        self.transaction_confirmed_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: cancelTransaction
    // Initiator can cancel while still Proposed.
    // ========================================================

    #[endpoint(cancelTransaction)]
    fn cancel_transaction(&self, proposal_id: u64) {
        self.require_not_dissolved();
        let caller = self.blockchain().get_caller();

        let mut proposal = self.require_proposal(proposal_id);
        require!(self.is_initiator(&proposal, &caller), ERR_NOT_INITIATOR);
        require!(
            proposal.status == ProposalStatus::Proposed,
            ERR_NOT_PROPOSED
        );

        proposal.status = ProposalStatus::Canceled;
        self.proposals(proposal_id).set(&proposal);

        self.transaction_canceled_event(proposal_id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.require_proposal(id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Proposals that can still move (Proposed or Passed) among ids
    /// `from..from + count`.
    #[view(getActiveProposals)]
    fn get_active_proposals(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            let proposal = self.proposals(id).get();
            match proposal.status {
                ProposalStatus::Proposed | ProposalStatus::Passed => result.push(proposal),
                ProposalStatus::Sent | ProposalStatus::Canceled => {},
            }
        }
        result
    }

    #[view(getConfirmations)]
    fn get_confirmations(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for partner in self.confirmations(proposal_id).iter() {
            result.push(partner);
        }
        result
    }

    #[view(hasConfirmed)]
    fn has_confirmed(&self, proposal_id: u64, partner: &ManagedAddress) -> bool {
        self.confirmations(proposal_id).contains(partner)
    }
}
