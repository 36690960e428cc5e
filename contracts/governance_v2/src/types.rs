//! Data types for the Governance contract

use soroban_sdk::{contracttype, Address, BytesN, Vec};

use governance_interface::ProposalAction;

/// State of a proposal, derived on every read
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    /// Voting has not started
    Pending = 0,
    /// Canceled by the guardian or after the creator lost proposition power
    Canceled = 1,
    /// Accepting votes
    Active = 2,
    /// Voting ended without quorum or differential
    Failed = 3,
    /// Voting passed, not yet queued
    Succeeded = 4,
    /// Actions are in the executor's timelock
    Queued = 5,
    /// Grace period ran out before execution
    Expired = 6,
    /// Actions were executed
    Executed = 7,
}

/// A recorded vote
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub support: bool,
    pub voting_power: i128,
}

/// A governance proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub creator: Address,
    /// Executor that will run the actions
    pub executor: Address,
    pub actions: Vec<ProposalAction>,
    /// First ledger of the voting window, also the power snapshot
    pub start_block: u32,
    /// Last ledger of the voting window
    pub end_block: u32,
    /// Set when queued, zero before
    pub execution_time: u64,
    pub for_votes: i128,
    pub against_votes: i128,
    pub executed: bool,
    pub canceled: bool,
    /// Strategy in force at creation
    pub strategy: Address,
    /// Off-chain description pointer
    pub ipfs_hash: BytesN<32>,
}
