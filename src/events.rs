multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Funding ──

    #[event("contribution")]
    fn contribution_event(&self, #[indexed] partner: &ManagedAddress, amount: &BigUint);

    #[event("funded")]
    fn funded_event(&self, #[indexed] custody: &BigUint);

    #[event("loanReceived")]
    fn loan_received_event(
        &self,
        #[indexed] partner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        loan_balance: &BigUint,
    );

    #[event("revenueReceived")]
    fn revenue_received_event(&self, #[indexed] sender: &ManagedAddress, amount: &BigUint);

    // ── Proposal lifecycle ──

    #[event("transactionProposed")]
    fn transaction_proposed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] destination: &ManagedAddress,
        value: &BigUint,
    );

    #[event("transactionConfirmed")]
    fn transaction_confirmed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] partner: &ManagedAddress,
    );

    #[event("transactionPassed")]
    fn transaction_passed_event(&self, #[indexed] proposal_id: u64);

    #[event("transactionCanceled")]
    fn transaction_canceled_event(&self, #[indexed] proposal_id: u64);

    #[event("transactionSent")]
    fn transaction_sent_event(&self, #[indexed] proposal_id: u64);

    // ── Ledger ──

    #[event("withdrawal")]
    fn withdrawal_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("dissolved")]
    fn dissolved_event(&self, #[indexed] beneficiary: &ManagedAddress, amount: &BigUint);
}
