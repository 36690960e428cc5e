//! Storage keys and helpers for the Power Token contract

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Checkpoint, TokenConfig};

/// Storage keys for the power token
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token configuration (instance storage)
    Config,
    /// Number of balance checkpoints recorded for an account (persistent storage)
    CheckpointCount(Address),
    /// Balance checkpoint `n` of an account (persistent storage)
    Checkpoint(Address, u32),
    /// Number of total supply checkpoints (persistent storage)
    SupplyCheckpointCount,
    /// Total supply checkpoint `n` (persistent storage)
    SupplyCheckpoint(u32),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<TokenConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============================================================================
// Checkpoint Helpers
// ============================================================================

fn count_key(owner: &Option<Address>) -> DataKey {
    match owner {
        Some(account) => DataKey::CheckpointCount(account.clone()),
        None => DataKey::SupplyCheckpointCount,
    }
}

fn entry_key(owner: &Option<Address>, index: u32) -> DataKey {
    match owner {
        Some(account) => DataKey::Checkpoint(account.clone(), index),
        None => DataKey::SupplyCheckpoint(index),
    }
}

/// Number of checkpoints of an account, or of the total supply for `None`
pub fn checkpoint_count(env: &Env, owner: &Option<Address>) -> u32 {
    env.storage()
        .persistent()
        .get(&count_key(owner))
        .unwrap_or(0)
}

pub fn get_checkpoint(env: &Env, owner: &Option<Address>, index: u32) -> Option<Checkpoint> {
    env.storage().persistent().get(&entry_key(owner, index))
}

/// Latest recorded value, zero when nothing was ever written
pub fn latest_value(env: &Env, owner: &Option<Address>) -> i128 {
    let count = checkpoint_count(env, owner);
    if count == 0 {
        return 0;
    }
    get_checkpoint(env, owner, count - 1)
        .map(|checkpoint| checkpoint.value)
        .unwrap_or(0)
}

/// Record `value` as of the current ledger. Several writes in the same ledger
/// collapse into a single checkpoint.
pub fn write_checkpoint(env: &Env, owner: &Option<Address>, value: i128) {
    let block = env.ledger().sequence();
    let count = checkpoint_count(env, owner);

    if count > 0 {
        if let Some(last) = get_checkpoint(env, owner, count - 1) {
            if last.block == block {
                env.storage()
                    .persistent()
                    .set(&entry_key(owner, count - 1), &Checkpoint { block, value });
                return;
            }
        }
    }

    env.storage()
        .persistent()
        .set(&entry_key(owner, count), &Checkpoint { block, value });
    env.storage().persistent().set(&count_key(owner), &(count + 1));
}

/// Value recorded at the end of `block`: the last checkpoint whose block is
/// not greater than `block`, found by binary search.
pub fn value_at(env: &Env, owner: &Option<Address>, block: u32) -> i128 {
    let count = checkpoint_count(env, owner);
    if count == 0 {
        return 0;
    }

    if let Some(last) = get_checkpoint(env, owner, count - 1) {
        if last.block <= block {
            return last.value;
        }
    }
    match get_checkpoint(env, owner, 0) {
        Some(first) if first.block > block => return 0,
        _ => {}
    }

    let mut lower = 0u32;
    let mut upper = count - 1;
    while upper > lower {
        let center = upper - (upper - lower) / 2;
        match get_checkpoint(env, owner, center) {
            Some(checkpoint) if checkpoint.block == block => return checkpoint.value,
            Some(checkpoint) if checkpoint.block < block => lower = center,
            _ => upper = center - 1,
        }
    }

    get_checkpoint(env, owner, lower)
        .map(|checkpoint| checkpoint.value)
        .unwrap_or(0)
}
