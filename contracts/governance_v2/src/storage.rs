//! Storage keys and helpers for the Governance contract

use soroban_sdk::{contracttype, Address, BytesN, Env};

use governance_interface::GovernanceError;

use crate::types::{Proposal, Vote};

/// Storage keys for the governance contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Owner of the admin surface (instance storage)
    Owner,
    /// Guardian, absent after abdication (instance storage)
    Guardian,
    /// Current governance strategy (instance storage)
    GovernanceStrategy,
    /// Ledgers between creation and start of voting (instance storage)
    VotingDelay,
    /// Number of proposals created, also the next id (instance storage)
    ProposalCount,
    /// Executor authorization flag (persistent storage)
    AuthorizedExecutor(Address),
    /// A proposal (persistent storage)
    Proposal(u32),
    /// A voter's vote on a proposal (persistent storage)
    Vote(u32, Address),
    /// Key used to check a voter's signed votes (persistent storage)
    VoteKey(Address),
}

// ============================================================================
// Configuration Helpers
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_guardian(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Guardian)
}

pub fn set_guardian(env: &Env, guardian: &Address) {
    env.storage().instance().set(&DataKey::Guardian, guardian);
}

pub fn remove_guardian(env: &Env) {
    env.storage().instance().remove(&DataKey::Guardian);
}

pub fn get_governance_strategy(env: &Env) -> Result<Address, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::GovernanceStrategy)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_governance_strategy(env: &Env, strategy: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::GovernanceStrategy, strategy);
}

pub fn get_voting_delay(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VotingDelay)
        .unwrap_or(0)
}

pub fn set_voting_delay(env: &Env, delay: u32) {
    env.storage().instance().set(&DataKey::VotingDelay, &delay);
}

// ============================================================================
// Executor Helpers
// ============================================================================

pub fn is_executor_authorized(env: &Env, executor: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::AuthorizedExecutor(executor.clone()))
        .unwrap_or(false)
}

pub fn set_executor_authorized(env: &Env, executor: &Address, authorized: bool) {
    let key = DataKey::AuthorizedExecutor(executor.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// Proposal Helpers
// ============================================================================

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

/// Load a proposal, `InvalidProposalId` for an id that was never allocated
pub fn get_proposal(env: &Env, proposal_id: u32) -> Result<Proposal, GovernanceError> {
    if proposal_id >= get_proposal_count(env) {
        return Err(GovernanceError::InvalidProposalId);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(GovernanceError::InvalidProposalId)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

pub fn get_vote(env: &Env, proposal_id: u32, voter: &Address) -> Option<Vote> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn set_vote(env: &Env, proposal_id: u32, voter: &Address, vote: &Vote) {
    env.storage()
        .persistent()
        .set(&DataKey::Vote(proposal_id, voter.clone()), vote);
}

// ============================================================================
// Vote Key Helpers
// ============================================================================

pub fn get_vote_key(env: &Env, voter: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::VoteKey(voter.clone()))
}

pub fn set_vote_key(env: &Env, voter: &Address, public_key: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::VoteKey(voter.clone()), public_key);
}
