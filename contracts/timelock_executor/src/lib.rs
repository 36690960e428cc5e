#![no_std]

//! # Timelock Executor
//!
//! Holds the actions of passed proposals for a configurable delay before they
//! can run, and answers the governance contract's validity questions
//! (proposition power, quorum, vote differential) using its own thresholds.
//!
//! ## Lifecycle of an action
//! - `queue_transaction` records the action hash (admin only)
//! - after `delay` seconds `execute_transaction` performs the call; it must
//!   happen before `execution_time + grace_period`
//! - `cancel_transaction` drops a queued action
//!
//! ## Self-governance
//! `set_delay` and `set_pending_admin` are only effective as actions of an
//! executed proposal that targets this executor. The admin role changes hands
//! in two steps: the new admin is made pending, then calls `accept_admin`.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

use governance_interface::{
    action_hash, GovernanceError, ProposalAction, ProposalTally, ONE_HUNDRED_WITH_PRECISION,
};

mod dispatch;
mod events;
mod storage;
mod types;
mod validator;

pub use types::ExecutorConfig;

#[contract]
pub struct TimelockExecutor;

#[contractimpl]
impl TimelockExecutor {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the executor
    ///
    /// # Arguments
    /// * `admin` - Account allowed to queue, execute and cancel actions
    /// * `delay` - Timelock in seconds
    /// * `grace_period` - Execution window after the timelock, in seconds
    /// * `minimum_delay` / `maximum_delay` - Bounds for `delay`
    /// * `proposition_threshold` - Basis points of proposition supply needed to propose
    /// * `voting_duration` - Voting window in ledgers
    /// * `vote_differential` - Basis points by which for-votes must lead
    /// * `minimum_quorum` - Basis points of voting supply that must participate
    /// * `value_asset` - Token paying action values
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Executor has already been initialized
    /// * `DelayShorterThanMinimum` / `DelayLongerThanMaximum` - `delay` out of bounds
    /// * `InvalidBasisPoints` - A basis-point parameter is negative or above 100%
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        delay: u64,
        grace_period: u64,
        minimum_delay: u64,
        maximum_delay: u64,
        proposition_threshold: i128,
        voting_duration: u32,
        vote_differential: i128,
        minimum_quorum: i128,
        value_asset: Address,
    ) -> Result<(), GovernanceError> {
        if storage::is_initialized(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }

        dispatch::validate_delay(minimum_delay, maximum_delay, delay)?;
        for bps in [proposition_threshold, vote_differential, minimum_quorum] {
            if !(0..=ONE_HUNDRED_WITH_PRECISION).contains(&bps) {
                return Err(GovernanceError::InvalidBasisPoints);
            }
        }

        storage::set_config(
            &env,
            &ExecutorConfig {
                admin: admin.clone(),
                pending_admin: None,
                delay,
                grace_period,
                minimum_delay,
                maximum_delay,
                proposition_threshold,
                voting_duration,
                vote_differential,
                minimum_quorum,
                value_asset,
            },
        );

        events::emit_new_admin(&env, &admin);
        events::emit_new_delay(&env, delay);
        Ok(())
    }

    // ========================================================================
    // Timelock
    // ========================================================================

    /// Queue an action for execution at `execution_time`
    ///
    /// Returns the action hash.
    ///
    /// # Errors
    /// * `OnlyByAdmin` - `caller` is not the admin
    /// * `ExecutionTimeUnderestimated` - `execution_time` is before now + delay
    /// * `ArithmeticOverflow` - now + delay overflows
    pub fn queue_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<BytesN<32>, GovernanceError> {
        let config = storage::get_config(&env)?;
        if caller != config.admin {
            return Err(GovernanceError::OnlyByAdmin);
        }
        caller.require_auth();

        let earliest = env
            .ledger()
            .timestamp()
            .checked_add(config.delay)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        if execution_time < earliest {
            return Err(GovernanceError::ExecutionTimeUnderestimated);
        }

        let hash = action_hash(&env, &action, execution_time);
        storage::set_queued(&env, &hash);

        events::emit_queued(&env, &hash, &action, execution_time);
        Ok(hash)
    }

    /// Execute a queued action
    ///
    /// # Errors
    /// * `OnlyByAdmin` - `caller` is not the admin
    /// * `ActionNotQueued` - No such action in the queue
    /// * `TimelockNotFinished` - `execution_time` has not been reached
    /// * `GracePeriodFinished` - The execution window has closed
    /// * `InsufficientValueBalance` - Executor cannot pay the action value
    /// * `FailedActionExecution` - The call itself failed
    pub fn execute_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<(), GovernanceError> {
        let config = storage::get_config(&env)?;
        if caller != config.admin {
            return Err(GovernanceError::OnlyByAdmin);
        }
        caller.require_auth();

        let hash = action_hash(&env, &action, execution_time);
        if !storage::is_queued(&env, &hash) {
            return Err(GovernanceError::ActionNotQueued);
        }

        let now = env.ledger().timestamp();
        if now < execution_time {
            return Err(GovernanceError::TimelockNotFinished);
        }
        if now > execution_time.saturating_add(config.grace_period) {
            return Err(GovernanceError::GracePeriodFinished);
        }

        // Dequeue before the call
        storage::clear_queued(&env, &hash);
        let result = dispatch::invoke(&env, &action)?;

        events::emit_executed(&env, &hash, &action, execution_time, result);
        Ok(())
    }

    /// Remove an action from the queue
    ///
    /// Returns the action hash.
    ///
    /// # Errors
    /// * `OnlyByAdmin` - `caller` is not the admin
    pub fn cancel_transaction(
        env: Env,
        caller: Address,
        action: ProposalAction,
        execution_time: u64,
    ) -> Result<BytesN<32>, GovernanceError> {
        let config = storage::get_config(&env)?;
        if caller != config.admin {
            return Err(GovernanceError::OnlyByAdmin);
        }
        caller.require_auth();

        let hash = action_hash(&env, &action, execution_time);
        storage::clear_queued(&env, &hash);

        events::emit_cancelled(&env, &hash, &action, execution_time);
        Ok(hash)
    }

    // ========================================================================
    // Admin
    // ========================================================================

    /// Change the timelock delay. Only an executed action targeting this
    /// executor can do so, and that path is applied in process; a direct call
    /// is always rejected.
    ///
    /// # Errors
    /// * `OnlyByThisTimelock` - Always, for direct callers
    pub fn set_delay(_env: Env, _caller: Address, _delay: u64) -> Result<(), GovernanceError> {
        Err(GovernanceError::OnlyByThisTimelock)
    }

    /// Name the account that may claim the admin role. Like `set_delay`, only
    /// reachable through an executed action targeting this executor.
    ///
    /// # Errors
    /// * `OnlyByThisTimelock` - Always, for direct callers
    pub fn set_pending_admin(
        _env: Env,
        _caller: Address,
        _pending_admin: Address,
    ) -> Result<(), GovernanceError> {
        Err(GovernanceError::OnlyByThisTimelock)
    }

    /// Claim the admin role
    ///
    /// # Errors
    /// * `OnlyByPendingAdmin` - `caller` is not the pending admin
    pub fn accept_admin(env: Env, caller: Address) -> Result<(), GovernanceError> {
        let mut config = storage::get_config(&env)?;
        if config.pending_admin.as_ref() != Some(&caller) {
            return Err(GovernanceError::OnlyByPendingAdmin);
        }
        caller.require_auth();

        config.admin = caller.clone();
        config.pending_admin = None;
        storage::set_config(&env, &config);

        events::emit_new_admin(&env, &caller);
        Ok(())
    }

    // ========================================================================
    // Proposal Validation
    // ========================================================================

    /// Whether `user` may create a proposal, judged by proposition power at `block_number`
    pub fn validate_creator_of_proposal(
        env: Env,
        strategy: Address,
        user: Address,
        block_number: u32,
    ) -> Result<bool, GovernanceError> {
        Self::is_proposition_power_enough(env, strategy, user, block_number)
    }

    /// Whether a proposal by `user` may be canceled by anyone: true once the
    /// creator's proposition power has fallen below the threshold
    pub fn validate_proposal_cancellation(
        env: Env,
        strategy: Address,
        user: Address,
        block_number: u32,
    ) -> Result<bool, GovernanceError> {
        Ok(!Self::is_proposition_power_enough(
            env,
            strategy,
            user,
            block_number,
        )?)
    }

    pub fn is_proposition_power_enough(
        env: Env,
        strategy: Address,
        user: Address,
        block_number: u32,
    ) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::is_proposition_power_enough(
            &env,
            &config,
            &strategy,
            &user,
            block_number,
        ))
    }

    pub fn get_min_proposition_power(
        env: Env,
        strategy: Address,
        block_number: u32,
    ) -> Result<i128, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::minimum_proposition_power_needed(
            &env,
            &config,
            &strategy,
            block_number,
        ))
    }

    pub fn get_minimum_voting_power_needed(
        env: Env,
        voting_supply: i128,
    ) -> Result<i128, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::minimum_voting_power_needed(&config, voting_supply))
    }

    pub fn is_quorum_valid(env: Env, tally: ProposalTally) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::is_quorum_valid(&env, &config, &tally))
    }

    pub fn is_vote_differential_valid(
        env: Env,
        tally: ProposalTally,
    ) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::is_vote_differential_valid(&env, &config, &tally))
    }

    /// Quorum and vote differential both hold
    pub fn is_proposal_passed(env: Env, tally: ProposalTally) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        Ok(validator::is_quorum_valid(&env, &config, &tally)
            && validator::is_vote_differential_valid(&env, &config, &tally))
    }

    /// Whether an action queued for `execution_time` can no longer run
    pub fn is_proposal_over_grace_period(
        env: Env,
        execution_time: u64,
    ) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        // a window ending past u64::MAX never closes
        Ok(env.ledger().timestamp() > execution_time.saturating_add(config.grace_period))
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    pub fn get_config(env: Env) -> Result<ExecutorConfig, GovernanceError> {
        storage::get_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, GovernanceError> {
        Ok(storage::get_config(&env)?.admin)
    }

    pub fn get_pending_admin(env: Env) -> Result<Option<Address>, GovernanceError> {
        Ok(storage::get_config(&env)?.pending_admin)
    }

    pub fn get_delay(env: Env) -> Result<u64, GovernanceError> {
        Ok(storage::get_config(&env)?.delay)
    }

    pub fn get_grace_period(env: Env) -> Result<u64, GovernanceError> {
        Ok(storage::get_config(&env)?.grace_period)
    }

    pub fn get_minimum_delay(env: Env) -> Result<u64, GovernanceError> {
        Ok(storage::get_config(&env)?.minimum_delay)
    }

    pub fn get_maximum_delay(env: Env) -> Result<u64, GovernanceError> {
        Ok(storage::get_config(&env)?.maximum_delay)
    }

    pub fn get_voting_duration(env: Env) -> Result<u32, GovernanceError> {
        Ok(storage::get_config(&env)?.voting_duration)
    }

    pub fn get_vote_differential(env: Env) -> Result<i128, GovernanceError> {
        Ok(storage::get_config(&env)?.vote_differential)
    }

    pub fn get_minimum_quorum(env: Env) -> Result<i128, GovernanceError> {
        Ok(storage::get_config(&env)?.minimum_quorum)
    }

    pub fn get_proposition_threshold(env: Env) -> Result<i128, GovernanceError> {
        Ok(storage::get_config(&env)?.proposition_threshold)
    }

    pub fn is_action_queued(env: Env, action_hash: BytesN<32>) -> bool {
        storage::is_queued(&env, &action_hash)
    }
}
