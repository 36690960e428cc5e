//! Error type shared by every governance contract.
//!
//! All contracts of the system report failures through this one enum so that
//! an error raised deep inside a cross-contract call (for example a timelock
//! check inside the executor) reaches the calling contract with the same code.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,

    // ---- authorization ----
    /// Proposal targets an executor the governance has not authorized
    ExecutorNotAuthorized = 10,
    /// Caller is not the guardian
    OnlyByGuardian = 11,
    /// Caller is not the executor admin
    OnlyByAdmin = 12,
    /// Only reachable through an executed action targeting the timelock itself
    OnlyByThisTimelock = 13,
    /// Caller is not the pending admin
    OnlyByPendingAdmin = 14,
    /// Caller is not the governance owner
    OnlyByOwner = 15,

    // ---- validation ----
    /// Proposal has no actions
    InvalidEmptyTargets = 20,
    /// Action parameter arrays differ in length
    InconsistentParamsLength = 21,
    /// No proposal with this id
    InvalidProposalId = 22,
    /// Signed vote could not be attributed to the voter
    InvalidSignature = 23,
    /// Delay below the executor minimum
    DelayShorterThanMinimum = 24,
    /// Delay above the executor maximum
    DelayLongerThanMaximum = 25,
    /// Function signature is not a valid contract function name
    InvalidFunctionSignature = 26,
    /// Basis-point parameter above 100%
    InvalidBasisPoints = 27,
    /// A strategy needs at least one power source
    EmptyPowerSources = 28,
    /// Historical query for a block that has not closed yet
    InvalidBlockNumber = 29,
    /// Amount must be positive
    InvalidAmount = 30,
    /// Transfer exceeds the sender's balance
    InsufficientBalance = 31,
    /// A block, timestamp or amount would leave its integer range
    ArithmeticOverflow = 32,

    // ---- state machine ----
    /// Proposal is not in the Succeeded state
    InvalidStateForQueue = 40,
    /// Proposal is not in the Queued state
    OnlyQueuedProposals = 41,
    /// Proposal is already canceled, executed or otherwise final
    OnlyBeforeExecuted = 42,
    /// Proposal is not accepting votes
    VotingClosed = 43,
    /// Voter already voted on this proposal
    VoteAlreadySubmitted = 44,
    /// Execution time has not been reached
    TimelockNotFinished = 45,
    /// Proposed execution time is earlier than now + delay
    ExecutionTimeUnderestimated = 46,
    /// Identical action is already queued
    DuplicatedAction = 47,
    /// Action is not in the queue
    ActionNotQueued = 48,
    /// Execution window has closed
    GracePeriodFinished = 49,
    /// The invoked action failed
    FailedActionExecution = 50,
    /// Executor cannot pay the action value
    InsufficientValueBalance = 51,

    // ---- power thresholds ----
    /// Creator lacks the proposition power the executor requires
    PropositionCreationInvalid = 60,
    /// Creator still holds enough proposition power
    PropositionCancellationInvalid = 61,
}
