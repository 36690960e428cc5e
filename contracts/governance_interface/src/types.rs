//! Data types shared between governance, executor and strategy contracts

use soroban_sdk::{contracttype, Address, String, Val, Vec};

/// How an executor invokes the target of an action
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CallKind {
    /// Plain call, action value is paid to the target first
    Direct = 0,
    /// The executor passes its own address as the leading argument so the
    /// target acts on the executor's behalf. No value is moved.
    ContextPreserving = 1,
}

/// One call carried by a proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalAction {
    /// Contract to invoke
    pub target: Address,
    /// Amount of the executor's value asset handed to the target
    pub value: i128,
    /// Function name. Empty means the first calldata element is the function symbol
    pub signature: String,
    /// Arguments for the call
    pub calldata: Vec<Val>,
    pub call_kind: CallKind,
}

/// Vote counts of a proposal, as needed by the executor's validity checks
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalTally {
    /// Strategy snapshotted by the proposal
    pub strategy: Address,
    /// Block at which the total voting supply is read
    pub snapshot_block: u32,
    pub for_votes: i128,
    pub against_votes: i128,
}

/// Kind of power a source reports
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PowerType {
    Voting = 0,
    Proposition = 1,
}

/// Preimage of an action hash
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueuedActionKey {
    pub action: ProposalAction,
    pub execution_time: u64,
}
