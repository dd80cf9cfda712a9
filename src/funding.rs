multiversx_sc::imports!();

use crate::errors::*;
use crate::types::FundState;
use crate::{access, events, storage};

#[multiversx_sc::module]
pub trait FundingModule:
    storage::StorageModule + access::AccessModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: deposit
    // Every inbound transfer lands here. Before funding only
    // exact partner contributions pass; afterwards partners
    // lend and everyone else pays revenue.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let amount = self.call_value().egld_value().clone_value();
        if amount == 0u64 {
            return;
        }

        self.require_not_dissolved();
        let sender = self.blockchain().get_caller();
        if self.fund_state().get() == FundState::Unfunded {
            self.accept_contribution(&sender, &amount);
        } else {
            self.accept_post_funding(&sender, &amount);
        }
    }

    fn accept_contribution(&self, sender: &ManagedAddress, amount: &BigUint) {
        self.require_partner(sender);
        require!(
            !self.contributors().contains(sender),
            ERR_ALREADY_CONTRIBUTED
        );
        require!(
            *amount == self.required_contribution().get(),
            ERR_WRONG_CONTRIBUTION
        );

        self.contributors().insert(sender.clone());
        self.contribution_event(sender, amount);

        if self.contributors().len() == self.partners().len() {
            self.fund_state().set(FundState::Funded);
            let custody = self
                .blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
            self.funded_event(&custody);
        }
    }

    fn accept_post_funding(&self, sender: &ManagedAddress, amount: &BigUint) {
        if self.is_partner(sender) {
            let loan_balance = self.loan(sender).update(|loan| {
                *loan += amount;
                loan.clone()
            });
            self.loan_received_event(sender, amount, &loan_balance);
        } else {
            self.revenue_received_event(sender, amount);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasContributed)]
    fn has_contributed(&self, partner: &ManagedAddress) -> bool {
        self.contributors().contains(partner)
    }
}
