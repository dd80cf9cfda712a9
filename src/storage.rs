multiversx_sc::imports!();

use crate::types::{FundState, Proposal};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[view(getRequiredContribution)]
    #[storage_mapper("requiredContribution")]
    fn required_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("partners")]
    fn partners(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Funding gate ──

    #[view(getFundState)]
    #[storage_mapper("fundState")]
    fn fund_state(&self) -> SingleValueMapper<FundState>;

    #[storage_mapper("contributors")]
    fn contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Ledger ──

    #[view(getCredit)]
    #[storage_mapper("credit")]
    fn credit(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalCredit)]
    #[storage_mapper("totalCredit")]
    fn total_credit(&self) -> SingleValueMapper<BigUint>;

    #[view(getLoan)]
    #[storage_mapper("loan")]
    fn loan(&self, partner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("confirmations")]
    fn confirmations(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
