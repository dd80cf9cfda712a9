//! Staging of proposal enactments.
//!
//! Executing a passed proposal never writes to storage directly. The
//! contract takes a [`LedgerSnapshot`], asks [`stage`] what the proposal
//! would do, and only commits the returned [`Enactment`] when staging
//! succeeds. A failed stage leaves nothing behind, which is what keeps
//! enactment failures contained while the proposal itself stays `Sent`.

use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::codec::TopDecode;
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedBuffer, ManagedVec};

use crate::types::{ExternalCall, GovernedAction, LedgerEntry};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EnactmentError {
    /// Uncommitted custody cannot cover the requested amount.
    InsufficientFunds,
    /// Repayment larger than the partner's recorded loan.
    ExcessiveRepayment,
    /// Zero address, or the partnership itself.
    InvalidBeneficiary,
    /// Payload does not decode to the expected action.
    MalformedPayload,
}

/// Ledger state as seen at the moment of enactment.
pub struct LedgerSnapshot<M: ManagedTypeApi> {
    pub own_address: ManagedAddress<M>,
    pub custody: BigUint<M>,
    pub total_credit: BigUint<M>,
    pub partners: ManagedVec<M, ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> LedgerSnapshot<M> {
    /// Custody not yet promised to anyone as credit.
    pub fn uncommitted(&self) -> BigUint<M> {
        if self.custody > self.total_credit {
            &self.custody - &self.total_credit
        } else {
            BigUint::zero()
        }
    }

    fn is_valid_beneficiary(&self, beneficiary: &ManagedAddress<M>) -> bool {
        !beneficiary.is_zero() && *beneficiary != self.own_address
    }

    fn require_uncommitted(&self, amount: &BigUint<M>) -> Result<(), EnactmentError> {
        if self.uncommitted() < *amount {
            return Err(EnactmentError::InsufficientFunds);
        }
        Ok(())
    }
}

/// Bookkeeping-only outcome: credit grants plus an optional loan reduction.
pub struct LedgerDelta<M: ManagedTypeApi> {
    pub credits: ManagedVec<M, LedgerEntry<M>>,
    pub repaid_loan: Option<LedgerEntry<M>>,
}

impl<M: ManagedTypeApi> LedgerDelta<M> {
    fn new() -> Self {
        LedgerDelta {
            credits: ManagedVec::new(),
            repaid_loan: None,
        }
    }

    fn grant(&mut self, account: ManagedAddress<M>, amount: BigUint<M>) {
        self.credits.push(LedgerEntry { account, amount });
    }

    pub fn credited_total(&self) -> BigUint<M> {
        let mut total = BigUint::zero();
        for entry in self.credits.iter() {
            total += &entry.amount;
        }
        total
    }
}

/// Value leaving custody through an outbound call.
pub struct Payout<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub call: ExternalCall<M>,
    /// Set for a dissolution: success halts the partnership.
    pub dissolves: bool,
}

pub enum Enactment<M: ManagedTypeApi> {
    Ledger(LedgerDelta<M>),
    Payout(Payout<M>),
}

/// Works out what executing a proposal would do, without touching storage.
///
/// `loan_of` is only consulted for loan repayments.
pub fn stage<M, F>(
    destination: &ManagedAddress<M>,
    value: &BigUint<M>,
    payload: &ManagedBuffer<M>,
    snapshot: &LedgerSnapshot<M>,
    loan_of: F,
) -> Result<Enactment<M>, EnactmentError>
where
    M: ManagedTypeApi,
    F: Fn(&ManagedAddress<M>) -> BigUint<M>,
{
    if *destination == snapshot.own_address {
        let action = GovernedAction::<M>::top_decode(payload.clone())
            .map_err(|_| EnactmentError::MalformedPayload)?;
        return stage_governed(action, snapshot, loan_of);
    }

    if destination.is_zero() {
        return Err(EnactmentError::InvalidBeneficiary);
    }
    let call = if payload.is_empty() {
        ExternalCall::transfer()
    } else {
        ExternalCall::<M>::top_decode(payload.clone())
            .map_err(|_| EnactmentError::MalformedPayload)?
    };
    snapshot.require_uncommitted(value)?;

    Ok(Enactment::Payout(Payout {
        to: destination.clone(),
        amount: value.clone(),
        call,
        dissolves: false,
    }))
}

pub fn stage_governed<M, F>(
    action: GovernedAction<M>,
    snapshot: &LedgerSnapshot<M>,
    loan_of: F,
) -> Result<Enactment<M>, EnactmentError>
where
    M: ManagedTypeApi,
    F: Fn(&ManagedAddress<M>) -> BigUint<M>,
{
    let mut delta = LedgerDelta::new();

    match action {
        GovernedAction::RepayLoan { partner, amount } => {
            if loan_of(&partner) < amount {
                return Err(EnactmentError::ExcessiveRepayment);
            }
            snapshot.require_uncommitted(&amount)?;
            delta.repaid_loan = Some(LedgerEntry {
                account: partner.clone(),
                amount: amount.clone(),
            });
            delta.grant(partner, amount);
        },
        GovernedAction::Distribute {
            beneficiary,
            amount,
        } => {
            if !snapshot.is_valid_beneficiary(&beneficiary) {
                return Err(EnactmentError::InvalidBeneficiary);
            }
            snapshot.require_uncommitted(&amount)?;
            delta.grant(beneficiary, amount);
        },
        GovernedAction::DistributeEvenly { total } => {
            snapshot.require_uncommitted(&total)?;
            // truncation remainder stays in custody, unallocated
            let share = total / (snapshot.partners.len() as u64);
            for partner in snapshot.partners.iter() {
                delta.grant((*partner).clone(), share.clone());
            }
        },
        GovernedAction::Dissolve { beneficiary } => {
            if !snapshot.is_valid_beneficiary(&beneficiary) {
                return Err(EnactmentError::InvalidBeneficiary);
            }
            return Ok(Enactment::Payout(Payout {
                to: beneficiary,
                amount: snapshot.custody.clone(),
                call: ExternalCall::transfer(),
                dissolves: true,
            }));
        },
    }

    Ok(Enactment::Ledger(delta))
}
