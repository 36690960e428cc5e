//! Storage keys and helpers for the Timelock Executor contract

use soroban_sdk::{contracttype, BytesN, Env};

use governance_interface::GovernanceError;

use crate::types::ExecutorConfig;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Executor configuration (instance storage)
    Config,
    /// Queue flag of an action hash (persistent storage)
    QueuedAction(BytesN<32>),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ExecutorConfig, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ExecutorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn is_queued(env: &Env, action_hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::QueuedAction(action_hash.clone()))
        .unwrap_or(false)
}

pub fn set_queued(env: &Env, action_hash: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::QueuedAction(action_hash.clone()), &true);
}

pub fn clear_queued(env: &Env, action_hash: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::QueuedAction(action_hash.clone()));
}
