multiversx_sc::imports!();

use crate::errors::*;
use crate::storage;
use crate::types::{FundState, Proposal};

/// Capability predicates and the guards built on them.
#[multiversx_sc::module]
pub trait AccessModule: storage::StorageModule {
    fn is_partner(&self, address: &ManagedAddress) -> bool {
        self.partners().contains(address)
    }

    fn is_initiator(&self, proposal: &Proposal<Self::Api>, address: &ManagedAddress) -> bool {
        proposal.initiator == *address
    }

    fn require_partner(&self, address: &ManagedAddress) {
        require!(self.is_partner(address), ERR_NOT_PARTNER);
    }

    fn require_not_dissolved(&self) {
        require!(
            self.fund_state().get() != FundState::Dissolved,
            ERR_DISSOLVED
        );
    }

    fn require_funded(&self) {
        let state = self.fund_state().get();
        require!(state != FundState::Dissolved, ERR_DISSOLVED);
        require!(state == FundState::Funded, ERR_NOT_FUNDED);
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_UNKNOWN_PROPOSAL);
        mapper.get()
    }

    #[view(getPartners)]
    fn get_partners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for partner in self.partners().iter() {
            result.push(partner);
        }
        result
    }
}
