multiversx_sc::imports!();

use crate::errors::*;
use crate::governed::{LedgerDelta, LedgerSnapshot};
use crate::{access, events, storage};

#[multiversx_sc::module]
pub trait LedgerModule:
    storage::StorageModule + access::AccessModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: withdraw
    // Drains the caller's credit. Not contained: a rejected
    // transfer gives the credit back and emits nothing.
    // Total credit keeps counting the amount until the
    // transfer settles, so it cannot be promised twice.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_not_dissolved();
        if amount == 0u64 {
            return;
        }

        let caller = self.blockchain().get_caller();
        let credit = self.credit(&caller).get();
        require!(credit >= amount, ERR_INSUFFICIENT_CREDIT);

        self.credit(&caller).set(&(credit - &amount));

        let callback = self
            .callbacks()
            .withdraw_callback(caller.clone(), amount.clone());
        self.tx()
            .to(&caller)
            .egld(amount)
            .callback(callback)
            .async_call_and_exit();
    }

    #[callback]
    fn withdraw_callback(
        &self,
        account: ManagedAddress,
        amount: BigUint,
        #[call_result] result: ManagedAsyncCallResult<IgnoreValue>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(_) => {
                self.total_credit().update(|total| *total -= &amount);
                self.withdrawal_event(&account, &amount);
            },
            ManagedAsyncCallResult::Err(_) => {
                self.credit(&account).update(|credit| *credit += &amount);
            },
        }
    }

    // ========================================================
    // INTERNAL: snapshot & commit
    // ========================================================

    fn custody_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    fn ledger_snapshot(&self) -> LedgerSnapshot<Self::Api> {
        LedgerSnapshot {
            own_address: self.blockchain().get_sc_address(),
            custody: self.custody_balance(),
            total_credit: self.total_credit().get(),
            partners: self.partners().iter().collect(),
        }
    }

    fn commit_ledger_delta(&self, delta: &LedgerDelta<Self::Api>) {
        if let Some(repaid) = &delta.repaid_loan {
            self.loan(&repaid.account)
                .update(|loan| *loan -= &repaid.amount);
        }
        for entry in delta.credits.iter() {
            self.credit(&entry.account)
                .update(|credit| *credit += &entry.amount);
        }
        let credited = delta.credited_total();
        self.total_credit().update(|total| *total += &credited);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCustodyBalance)]
    fn get_custody_balance(&self) -> BigUint {
        self.custody_balance()
    }

    #[view(getUncommittedBalance)]
    fn get_uncommitted_balance(&self) -> BigUint {
        self.ledger_snapshot().uncommitted()
    }
}
