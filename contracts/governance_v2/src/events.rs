use soroban_sdk::{contractevent, Address, BytesN, String, Val, Vec};

#[contractevent(topics = ["ArenaXGovernance", "PROPOSED"])]
pub struct ProposalCreated {
    pub id: u32,
    pub creator: Address,
    pub executor: Address,
    pub targets: Vec<Address>,
    pub values: Vec<i128>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Vec<Val>>,
    pub with_delegate_calls: Vec<bool>,
    pub start_block: u32,
    pub end_block: u32,
    pub strategy: Address,
    pub ipfs_hash: BytesN<32>,
}

#[contractevent(topics = ["ArenaXGovernance", "VOTED"])]
pub struct VoteEmitted {
    pub id: u32,
    pub voter: Address,
    pub support: bool,
    pub voting_power: i128,
}

#[contractevent(topics = ["ArenaXGovernance", "QUEUED"])]
pub struct ProposalQueued {
    pub id: u32,
    pub execution_time: u64,
    pub initiator: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "EXECUTED"])]
pub struct ProposalExecuted {
    pub id: u32,
    pub initiator: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "CANCELED"])]
pub struct ProposalCanceled {
    pub id: u32,
}

#[contractevent(topics = ["ArenaXGovernance", "STRATEGY_CHANGED"])]
pub struct GovernanceStrategyChanged {
    pub new_strategy: Address,
    pub initiator: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "VOTING_DELAY_CHANGED"])]
pub struct VotingDelayChanged {
    pub new_voting_delay: u32,
    pub initiator: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "EXECUTOR_AUTHORIZED"])]
pub struct ExecutorAuthorized {
    pub executor: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "EXECUTOR_UNAUTHORIZED"])]
pub struct ExecutorUnauthorized {
    pub executor: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "VOTE_KEY"])]
pub struct VoteKeyRegistered {
    pub voter: Address,
    pub public_key: BytesN<32>,
}

#[contractevent(topics = ["ArenaXGovernance", "ABDICATED"])]
pub struct GuardianAbdicated {
    pub guardian: Address,
}

#[contractevent(topics = ["ArenaXGovernance", "OWNER_CHANGED"])]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
