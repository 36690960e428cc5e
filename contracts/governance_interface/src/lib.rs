#![no_std]

//! # Governance Interface
//!
//! Types, errors and client traits shared by the ArenaX token-weighted
//! governance contracts:
//!
//! - `governance_v2` - proposal lifecycle and voting
//! - `timelock_executor` - queue/execute with delay, proposal validation
//! - `governance_strategy` - sums power over a set of sources
//! - `power_token` - checkpointed balances used as a power source

use soroban_sdk::{xdr::ToXdr, BytesN, Env, InvokeError};

mod client;
mod error;
mod types;

pub use client::{
    ExecutorClient, ExecutorInterface, GovernanceStrategyInterface, PowerSourceClient,
    PowerSourceInterface, StrategyClient,
};
pub use error::GovernanceError;
pub use types::{CallKind, PowerType, ProposalAction, ProposalTally, QueuedActionKey};

/// 100% expressed in basis points
pub const ONE_HUNDRED_WITH_PRECISION: i128 = 10_000;

/// Identity of a queued action: keccak256 over the XDR of the action and its
/// execution time. Two actions collide only if every field matches.
pub fn action_hash(env: &Env, action: &ProposalAction, execution_time: u64) -> BytesN<32> {
    let key = QueuedActionKey {
        action: action.clone(),
        execution_time,
    };
    env.crypto().keccak256(&key.to_xdr(env)).to_bytes()
}

/// Flatten the result of a `try_*` client call.
///
/// A governance error raised by the callee is passed through unchanged; any
/// other failure (host error, undecodable return) becomes
/// `FailedActionExecution`.
pub fn forward<T, C>(
    result: Result<Result<T, C>, Result<GovernanceError, InvokeError>>,
) -> Result<T, GovernanceError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(GovernanceError::FailedActionExecution),
    }
}
