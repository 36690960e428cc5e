//! Cross-contract interfaces
//!
//! Governance talks to executors and strategies, strategies talk to power
//! sources. None of these calls ever lead back into the governance contract.

use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::error::GovernanceError;
use crate::types::{PowerType, ProposalAction, ProposalTally};

/// Timelocked executor with proposal validation
#[contractclient(name = "ExecutorClient")]
pub trait ExecutorInterface {
    fn queue_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<BytesN<32>, GovernanceError>;

    fn execute_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<(), GovernanceError>;

    fn cancel_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<BytesN<32>, GovernanceError>;

    fn is_action_queued(env: Env, action_hash: BytesN<32>) -> bool;

    fn get_delay(env: Env) -> Result<u64, GovernanceError>;

    fn get_grace_period(env: Env) -> Result<u64, GovernanceError>;

    fn get_voting_duration(env: Env) -> Result<u32, GovernanceError>;

    fn is_proposal_over_grace_period(
        env: Env,
        execution_time: u64,
    ) -> Result<bool, GovernanceError>;

    fn validate_creator_of_proposal(
        env: Env,
        strategy: Address,
        user: Address,
        block_number: u32,
    ) -> Result<bool, GovernanceError>;

    fn validate_proposal_cancellation(
        env: Env,
        strategy: Address,
        user: Address,
        block_number: u32,
    ) -> Result<bool, GovernanceError>;

    fn is_quorum_valid(env: Env, tally: ProposalTally) -> Result<bool, GovernanceError>;

    fn is_vote_differential_valid(
        env: Env,
        tally: ProposalTally,
    ) -> Result<bool, GovernanceError>;

    fn is_proposal_passed(env: Env, tally: ProposalTally) -> Result<bool, GovernanceError>;
}

/// Aggregated voting and proposition power
#[contractclient(name = "StrategyClient")]
pub trait GovernanceStrategyInterface {
    fn get_voting_power_at(env: Env, user: Address, block_number: u32) -> i128;

    fn get_proposition_power_at(env: Env, user: Address, block_number: u32) -> i128;

    fn get_total_voting_supply_at(env: Env, block_number: u32) -> i128;

    fn get_total_proposition_supply_at(env: Env, block_number: u32) -> i128;
}

/// A token that records historical power per account
#[contractclient(name = "PowerSourceClient")]
pub trait PowerSourceInterface {
    fn get_power_current(env: Env, user: Address, power_type: PowerType) -> i128;

    fn get_power_at_block(
        env: Env,
        user: Address,
        block_number: u32,
        power_type: PowerType,
    ) -> Result<i128, GovernanceError>;

    fn total_supply_at(env: Env, block_number: u32) -> Result<i128, GovernanceError>;
}
