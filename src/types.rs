multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Fund State: funding gate and dissolution
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum FundState {
    /// Partners are still sending their initial contributions.
    Unfunded,
    /// Every partner contributed. Governance is open.
    Funded,
    /// Custody was paid out by a dissolve proposal. Terminal.
    Dissolved,
}

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Waiting for confirmations. The initiator may still cancel.
    Proposed,
    /// Every partner except the initiator confirmed.
    Passed,
    /// Execution was attempted. Terminal, whatever the outcome.
    Sent,
    /// Withdrawn by the initiator. Terminal.
    Canceled,
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub initiator: ManagedAddress<M>,
    pub destination: ManagedAddress<M>,
    pub value: BigUint<M>,
    /// Encoded `GovernedAction` when `destination` is the contract itself,
    /// otherwise an encoded `ExternalCall` (empty for a plain transfer).
    pub payload: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub status: ProposalStatus,
}

// ============================================================
// Governed Action: privileged ledger mutations
// Only reachable through an executed proposal addressed to
// the contract itself.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum GovernedAction<M: ManagedTypeApi> {
    RepayLoan {
        partner: ManagedAddress<M>,
        amount: BigUint<M>,
    },
    Distribute {
        beneficiary: ManagedAddress<M>,
        amount: BigUint<M>,
    },
    DistributeEvenly {
        total: BigUint<M>,
    },
    Dissolve {
        beneficiary: ManagedAddress<M>,
    },
}

/// Call carried by a proposal to any destination other than the contract.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ExternalCall<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> ExternalCall<M> {
    pub fn transfer() -> Self {
        ExternalCall {
            endpoint: ManagedBuffer::new(),
            arguments: ManagedVec::new(),
        }
    }
}

// ============================================================
// Ledger Entry: an (account, amount) pair
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct LedgerEntry<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub amount: BigUint<M>,
}
