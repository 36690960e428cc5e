#![no_std]

//! # Governance V2
//!
//! Token-weighted proposal governance for ArenaX. Holders with enough
//! proposition power create proposals made of contract calls; voters weigh in
//! with the power they held when voting opened; passed proposals are queued in
//! a timelock executor and executed once the delay has elapsed.
//!
//! ## Lifecycle
//! `Pending -> Active -> {Succeeded, Failed}`, `Succeeded -> Queued -> {Executed, Expired}`,
//! and any of `Pending`, `Active`, `Succeeded`, `Queued` may become `Canceled`.
//! The state is never stored; it is derived on each read from the proposal's
//! flags, the current ledger and the executor's verdict.
//!
//! ## Security
//! - Voting power is read at the proposal's start block and voting opens in the
//!   ledger after it, so tokens moved once voting is possible carry no weight
//! - One vote per account per proposal, also for signed votes (which carry no nonce)
//! - Identical actions cannot be queued twice at the executor
//! - The guardian can cancel any live proposal until it abdicates

use soroban_sdk::{
    contract, contractimpl, Address, BytesN, Env, String, Val, Vec,
};

use governance_interface::{
    action_hash, forward, CallKind, ExecutorClient, GovernanceError, ProposalAction,
    ProposalTally, StrategyClient,
};

mod events;
mod signature;
mod storage;
mod types;

pub use types::{Proposal, ProposalState, Vote};

use events::{
    ExecutorAuthorized, ExecutorUnauthorized, GovernanceStrategyChanged, GuardianAbdicated,
    OwnershipTransferred, ProposalCanceled, ProposalCreated, ProposalExecuted, ProposalQueued,
    VoteEmitted, VoteKeyRegistered, VotingDelayChanged,
};

// ============================================================================
// Internal Helpers
// ============================================================================

fn require_owner(env: &Env, caller: &Address) -> Result<(), GovernanceError> {
    if *caller != storage::get_owner(env)? {
        return Err(GovernanceError::OnlyByOwner);
    }
    caller.require_auth();
    Ok(())
}

/// Block used for proposition power checks: the last closed ledger
fn previous_block(env: &Env) -> u32 {
    env.ledger().sequence().saturating_sub(1)
}

fn tally(proposal: &Proposal) -> ProposalTally {
    ProposalTally {
        strategy: proposal.strategy.clone(),
        snapshot_block: proposal.end_block,
        for_votes: proposal.for_votes,
        against_votes: proposal.against_votes,
    }
}

fn proposal_state(env: &Env, proposal: &Proposal) -> Result<ProposalState, GovernanceError> {
    if proposal.canceled {
        return Ok(ProposalState::Canceled);
    }
    if proposal.executed {
        return Ok(ProposalState::Executed);
    }

    let block = env.ledger().sequence();
    // power is read at start_block, so votes open only once that ledger has closed
    if block <= proposal.start_block {
        return Ok(ProposalState::Pending);
    }
    if block <= proposal.end_block {
        return Ok(ProposalState::Active);
    }

    let executor = ExecutorClient::new(env, &proposal.executor);
    if proposal.execution_time == 0 {
        let passed = forward(executor.try_is_proposal_passed(&tally(proposal)))?;
        return Ok(if passed {
            ProposalState::Succeeded
        } else {
            ProposalState::Failed
        });
    }

    if forward(executor.try_is_proposal_over_grace_period(&proposal.execution_time))? {
        return Ok(ProposalState::Expired);
    }
    Ok(ProposalState::Queued)
}

fn submit_vote_internal(
    env: &Env,
    voter: &Address,
    proposal_id: u32,
    support: bool,
) -> Result<(), GovernanceError> {
    let mut proposal = storage::get_proposal(env, proposal_id)?;
    if proposal_state(env, &proposal)? != ProposalState::Active {
        return Err(GovernanceError::VotingClosed);
    }
    if storage::get_vote(env, proposal_id, voter).is_some() {
        return Err(GovernanceError::VoteAlreadySubmitted);
    }

    let voting_power = StrategyClient::new(env, &proposal.strategy)
        .get_voting_power_at(voter, &proposal.start_block);

    if support {
        proposal.for_votes += voting_power;
    } else {
        proposal.against_votes += voting_power;
    }

    storage::set_vote(
        env,
        proposal_id,
        voter,
        &Vote {
            support,
            voting_power,
        },
    );
    storage::set_proposal(env, &proposal);

    VoteEmitted {
        id: proposal_id,
        voter: voter.clone(),
        support,
        voting_power,
    }
    .publish(env);

    Ok(())
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct GovernanceV2;

#[contractimpl]
impl GovernanceV2 {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the governance contract
    ///
    /// # Arguments
    /// * `owner` - Account controlling strategy, voting delay and executors
    /// * `governance_strategy` - Strategy used for new proposals
    /// * `voting_delay` - Ledgers between creation and start of voting
    /// * `guardian` - Account allowed to cancel any live proposal
    /// * `executors` - Executors proposals may target
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        governance_strategy: Address,
        voting_delay: u32,
        guardian: Address,
        executors: Vec<Address>,
    ) -> Result<(), GovernanceError> {
        if storage::is_initialized(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_guardian(&env, &guardian);
        storage::set_governance_strategy(&env, &governance_strategy);
        storage::set_voting_delay(&env, voting_delay);

        GovernanceStrategyChanged {
            new_strategy: governance_strategy,
            initiator: owner.clone(),
        }
        .publish(&env);
        VotingDelayChanged {
            new_voting_delay: voting_delay,
            initiator: owner,
        }
        .publish(&env);

        for executor in executors.iter() {
            storage::set_executor_authorized(&env, &executor, true);
            ExecutorAuthorized { executor }.publish(&env);
        }

        Ok(())
    }

    // ========================================================================
    // Proposal Functions
    // ========================================================================

    /// Create a proposal
    ///
    /// The five action arrays are parallel: entry `i` of each describes action `i`.
    /// `with_delegate_calls[i]` selects a context-preserving call.
    ///
    /// Returns the new proposal id.
    ///
    /// # Errors
    /// * `InvalidEmptyTargets` - No actions
    /// * `InconsistentParamsLength` - Arrays differ in length
    /// * `ExecutorNotAuthorized` - `executor` is not authorized
    /// * `PropositionCreationInvalid` - `creator` lacks proposition power at the previous ledger
    /// * `ArithmeticOverflow` - The voting window does not fit in the ledger range
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        env: Env,
        creator: Address,
        executor: Address,
        targets: Vec<Address>,
        values: Vec<i128>,
        signatures: Vec<String>,
        calldatas: Vec<Vec<Val>>,
        with_delegate_calls: Vec<bool>,
        ipfs_hash: BytesN<32>,
    ) -> Result<u32, GovernanceError> {
        let strategy = storage::get_governance_strategy(&env)?;
        creator.require_auth();

        let len = targets.len();
        if len == 0 {
            return Err(GovernanceError::InvalidEmptyTargets);
        }
        if values.len() != len
            || signatures.len() != len
            || calldatas.len() != len
            || with_delegate_calls.len() != len
        {
            return Err(GovernanceError::InconsistentParamsLength);
        }
        if !storage::is_executor_authorized(&env, &executor) {
            return Err(GovernanceError::ExecutorNotAuthorized);
        }

        let executor_client = ExecutorClient::new(&env, &executor);
        let allowed = forward(executor_client.try_validate_creator_of_proposal(
            &strategy,
            &creator,
            &previous_block(&env),
        ))?;
        if !allowed {
            return Err(GovernanceError::PropositionCreationInvalid);
        }

        let mut actions = Vec::new(&env);
        for i in 0..len {
            let call_kind = if with_delegate_calls.get_unchecked(i) {
                CallKind::ContextPreserving
            } else {
                CallKind::Direct
            };
            actions.push_back(ProposalAction {
                target: targets.get_unchecked(i),
                value: values.get_unchecked(i),
                signature: signatures.get_unchecked(i),
                calldata: calldatas.get_unchecked(i),
                call_kind,
            });
        }

        let start_block = env
            .ledger()
            .sequence()
            .checked_add(storage::get_voting_delay(&env))
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        let end_block = start_block
            .checked_add(forward(executor_client.try_get_voting_duration())?)
            .ok_or(GovernanceError::ArithmeticOverflow)?;

        let id = storage::get_proposal_count(&env);
        storage::set_proposal(
            &env,
            &Proposal {
                id,
                creator: creator.clone(),
                executor: executor.clone(),
                actions,
                start_block,
                end_block,
                execution_time: 0,
                for_votes: 0,
                against_votes: 0,
                executed: false,
                canceled: false,
                strategy: strategy.clone(),
                ipfs_hash: ipfs_hash.clone(),
            },
        );
        storage::set_proposal_count(&env, id + 1);

        ProposalCreated {
            id,
            creator,
            executor,
            targets,
            values,
            signatures,
            calldatas,
            with_delegate_calls,
            start_block,
            end_block,
            strategy,
            ipfs_hash,
        }
        .publish(&env);

        Ok(id)
    }

    /// Cancel a proposal
    ///
    /// The guardian may cancel any live proposal. Anyone else may cancel only
    /// once the creator's proposition power has dropped below the threshold.
    /// Actions already queued are removed from the executor.
    ///
    /// # Errors
    /// * `InvalidProposalId` - Unknown proposal
    /// * `OnlyBeforeExecuted` - Proposal is canceled, executed, expired or failed
    /// * `PropositionCancellationInvalid` - Creator still holds enough proposition power
    pub fn cancel(env: Env, caller: Address, proposal_id: u32) -> Result<(), GovernanceError> {
        caller.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        let state = proposal_state(&env, &proposal)?;
        if matches!(
            state,
            ProposalState::Canceled
                | ProposalState::Executed
                | ProposalState::Expired
                | ProposalState::Failed
        ) {
            return Err(GovernanceError::OnlyBeforeExecuted);
        }

        let executor = ExecutorClient::new(&env, &proposal.executor);
        if storage::get_guardian(&env).as_ref() != Some(&caller) {
            let strategy = storage::get_governance_strategy(&env)?;
            let cancellable = forward(executor.try_validate_proposal_cancellation(
                &strategy,
                &proposal.creator,
                &previous_block(&env),
            ))?;
            if !cancellable {
                return Err(GovernanceError::PropositionCancellationInvalid);
            }
        }

        proposal.canceled = true;
        storage::set_proposal(&env, &proposal);

        if state == ProposalState::Queued {
            let this = env.current_contract_address();
            for action in proposal.actions.iter() {
                forward(executor.try_cancel_transaction(
                    &this,
                    &action,
                    &proposal.execution_time,
                ))?;
            }
        }

        ProposalCanceled { id: proposal_id }.publish(&env);
        Ok(())
    }

    /// Queue the actions of a succeeded proposal in its executor
    ///
    /// # Errors
    /// * `InvalidProposalId` - Unknown proposal
    /// * `InvalidStateForQueue` - Proposal has not succeeded
    /// * `DuplicatedAction` - An identical action is already queued for the same time
    /// * `ArithmeticOverflow` - Now plus the executor delay overflows
    pub fn queue(env: Env, caller: Address, proposal_id: u32) -> Result<(), GovernanceError> {
        caller.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        if proposal_state(&env, &proposal)? != ProposalState::Succeeded {
            return Err(GovernanceError::InvalidStateForQueue);
        }

        let executor = ExecutorClient::new(&env, &proposal.executor);
        let execution_time = env
            .ledger()
            .timestamp()
            .checked_add(forward(executor.try_get_delay())?)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        let this = env.current_contract_address();

        for action in proposal.actions.iter() {
            if executor.is_action_queued(&action_hash(&env, &action, execution_time)) {
                return Err(GovernanceError::DuplicatedAction);
            }
            forward(executor.try_queue_transaction(&this, &action, &execution_time))?;
        }

        proposal.execution_time = execution_time;
        storage::set_proposal(&env, &proposal);

        ProposalQueued {
            id: proposal_id,
            execution_time,
            initiator: caller,
        }
        .publish(&env);

        Ok(())
    }

    /// Execute the actions of a queued proposal, in order
    ///
    /// Any failing action aborts the whole execution.
    ///
    /// # Errors
    /// * `InvalidProposalId` - Unknown proposal
    /// * `OnlyQueuedProposals` - Proposal is not queued
    /// * `TimelockNotFinished` - The executor delay has not elapsed
    /// * `FailedActionExecution` - An action failed
    pub fn execute(env: Env, caller: Address, proposal_id: u32) -> Result<(), GovernanceError> {
        caller.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        if proposal_state(&env, &proposal)? != ProposalState::Queued {
            return Err(GovernanceError::OnlyQueuedProposals);
        }

        proposal.executed = true;
        storage::set_proposal(&env, &proposal);

        let executor = ExecutorClient::new(&env, &proposal.executor);
        let this = env.current_contract_address();
        for action in proposal.actions.iter() {
            forward(executor.try_execute_transaction(
                &this,
                &action,
                &proposal.execution_time,
            ))?;
        }

        ProposalExecuted {
            id: proposal_id,
            initiator: caller,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // Voting
    // ========================================================================

    /// Vote on an active proposal with the power held at its start block
    ///
    /// # Errors
    /// * `InvalidProposalId` - Unknown proposal
    /// * `VotingClosed` - Proposal is not active
    /// * `VoteAlreadySubmitted` - `voter` already voted on this proposal
    pub fn submit_vote(
        env: Env,
        voter: Address,
        proposal_id: u32,
        support: bool,
    ) -> Result<(), GovernanceError> {
        voter.require_auth();
        submit_vote_internal(&env, &voter, proposal_id, support)
    }

    /// Bind the ed25519 key that signs `voter`'s off-chain votes
    pub fn register_vote_key(
        env: Env,
        voter: Address,
        public_key: BytesN<32>,
    ) -> Result<(), GovernanceError> {
        if !storage::is_initialized(&env) {
            return Err(GovernanceError::NotInitialized);
        }
        voter.require_auth();

        storage::set_vote_key(&env, &voter, &public_key);
        VoteKeyRegistered { voter, public_key }.publish(&env);
        Ok(())
    }

    /// Record a vote signed off-chain by `voter`'s vote key. Anyone may relay it.
    ///
    /// The signed message is `vote_digest(proposal_id, support)`.
    ///
    /// # Errors
    /// * `InvalidSignature` - `voter` has no vote key, or the signature does not verify
    /// * plus every error of `submit_vote`
    pub fn submit_vote_by_signature(
        env: Env,
        voter: Address,
        proposal_id: u32,
        support: bool,
        signature: BytesN<64>,
    ) -> Result<(), GovernanceError> {
        let public_key =
            storage::get_vote_key(&env, &voter).ok_or(GovernanceError::InvalidSignature)?;
        let digest = signature::vote_digest(&env, proposal_id, support);
        signature::verify(&public_key, &digest, &signature)?;

        submit_vote_internal(&env, &voter, proposal_id, support)
    }

    // ========================================================================
    // Admin Functions
    // ========================================================================

    /// Strategy used by proposals created from now on
    pub fn set_governance_strategy(
        env: Env,
        caller: Address,
        governance_strategy: Address,
    ) -> Result<(), GovernanceError> {
        require_owner(&env, &caller)?;
        storage::set_governance_strategy(&env, &governance_strategy);

        GovernanceStrategyChanged {
            new_strategy: governance_strategy,
            initiator: caller,
        }
        .publish(&env);
        Ok(())
    }

    pub fn set_voting_delay(
        env: Env,
        caller: Address,
        voting_delay: u32,
    ) -> Result<(), GovernanceError> {
        require_owner(&env, &caller)?;
        storage::set_voting_delay(&env, voting_delay);

        VotingDelayChanged {
            new_voting_delay: voting_delay,
            initiator: caller,
        }
        .publish(&env);
        Ok(())
    }

    pub fn authorize_executors(
        env: Env,
        caller: Address,
        executors: Vec<Address>,
    ) -> Result<(), GovernanceError> {
        require_owner(&env, &caller)?;
        for executor in executors.iter() {
            storage::set_executor_authorized(&env, &executor, true);
            ExecutorAuthorized { executor }.publish(&env);
        }
        Ok(())
    }

    pub fn unauthorize_executors(
        env: Env,
        caller: Address,
        executors: Vec<Address>,
    ) -> Result<(), GovernanceError> {
        require_owner(&env, &caller)?;
        for executor in executors.iter() {
            storage::set_executor_authorized(&env, &executor, false);
            ExecutorUnauthorized { executor }.publish(&env);
        }
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), GovernanceError> {
        require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);

        OwnershipTransferred {
            previous_owner: caller,
            new_owner,
        }
        .publish(&env);
        Ok(())
    }

    /// Give up the guardian role for good
    ///
    /// # Errors
    /// * `OnlyByGuardian` - `caller` is not the guardian
    pub fn abdicate(env: Env, caller: Address) -> Result<(), GovernanceError> {
        if storage::get_guardian(&env).as_ref() != Some(&caller) {
            return Err(GovernanceError::OnlyByGuardian);
        }
        caller.require_auth();

        storage::remove_guardian(&env);
        GuardianAbdicated { guardian: caller }.publish(&env);
        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, GovernanceError> {
        storage::get_proposal(&env, proposal_id)
    }

    pub fn get_proposal_state(env: Env, proposal_id: u32) -> Result<ProposalState, GovernanceError> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        proposal_state(&env, &proposal)
    }

    pub fn get_proposals_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    /// Vote of `voter` on a proposal, zero power and no support if none was cast
    pub fn get_vote_on_proposal(env: Env, proposal_id: u32, voter: Address) -> Vote {
        storage::get_vote(&env, proposal_id, &voter).unwrap_or(Vote {
            support: false,
            voting_power: 0,
        })
    }

    pub fn is_executor_authorized(env: Env, executor: Address) -> bool {
        storage::is_executor_authorized(&env, &executor)
    }

    pub fn get_guardian(env: Env) -> Option<Address> {
        storage::get_guardian(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, GovernanceError> {
        storage::get_owner(&env)
    }

    pub fn get_governance_strategy(env: Env) -> Result<Address, GovernanceError> {
        storage::get_governance_strategy(&env)
    }

    pub fn get_voting_delay(env: Env) -> u32 {
        storage::get_voting_delay(&env)
    }

    pub fn get_vote_key(env: Env, voter: Address) -> Option<BytesN<32>> {
        storage::get_vote_key(&env, &voter)
    }

    /// Message a voter's vote key signs for `submit_vote_by_signature`
    pub fn vote_digest(env: Env, proposal_id: u32, support: bool) -> BytesN<32> {
        signature::vote_digest(&env, proposal_id, support)
    }

    pub fn domain_separator(env: Env) -> BytesN<32> {
        signature::domain_separator(&env)
    }
}
