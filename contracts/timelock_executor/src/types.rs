//! Data types for the Timelock Executor contract

use soroban_sdk::{contracttype, Address};

/// Executor configuration
///
/// `delay`, `admin` and `pending_admin` change over the executor's life, the
/// remaining fields are fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutorConfig {
    /// Account allowed to queue, execute and cancel (normally the governance contract)
    pub admin: Address,
    /// Account that may claim the admin role
    pub pending_admin: Option<Address>,
    /// Seconds between queueing and earliest execution
    pub delay: u64,
    /// Seconds after the execution time during which execution is still allowed
    pub grace_period: u64,
    pub minimum_delay: u64,
    pub maximum_delay: u64,
    /// Share of total proposition supply needed to propose (basis points)
    pub proposition_threshold: i128,
    /// Length of the voting window in ledgers
    pub voting_duration: u32,
    /// Required margin of for-votes over against-votes (basis points of supply)
    pub vote_differential: i128,
    /// Required participation (basis points of supply)
    pub minimum_quorum: i128,
    /// Token used to pay the `value` of actions
    pub value_asset: Address,
}
