#![no_std]

//! # Governance Strategy
//!
//! Computes voting and proposition power for governance by summing the power
//! an account holds in every configured power source at a given block.
//! Totals are the sum of the sources' total supplies at that block.
//!
//! Sources are fixed at initialization. Governance switches strategies by
//! pointing at a new strategy contract, so in-flight proposals keep the
//! strategy they were created with.

use soroban_sdk::{contract, contracttype, contractimpl, Address, Env, Vec};

use governance_interface::{GovernanceError, PowerSourceClient, PowerType};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Power sources (instance storage)
    PowerSources,
}

fn get_sources(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::PowerSources)
        .unwrap_or_else(|| Vec::new(env))
}

fn power_at(env: &Env, user: &Address, block_number: u32, power_type: PowerType) -> i128 {
    let mut total = 0i128;
    for source in get_sources(env).iter() {
        total += PowerSourceClient::new(env, &source).get_power_at_block(
            user,
            &block_number,
            &power_type,
        );
    }
    total
}

fn supply_at(env: &Env, block_number: u32) -> i128 {
    let mut total = 0i128;
    for source in get_sources(env).iter() {
        total += PowerSourceClient::new(env, &source).total_supply_at(&block_number);
    }
    total
}

#[contract]
pub struct GovernanceStrategy;

#[contractimpl]
impl GovernanceStrategy {
    /// Initialize the strategy with its power sources
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Sources were already set
    /// * `EmptyPowerSources` - `sources` is empty
    pub fn initialize(env: Env, sources: Vec<Address>) -> Result<(), GovernanceError> {
        if env.storage().instance().has(&DataKey::PowerSources) {
            return Err(GovernanceError::AlreadyInitialized);
        }
        if sources.is_empty() {
            return Err(GovernanceError::EmptyPowerSources);
        }
        env.storage().instance().set(&DataKey::PowerSources, &sources);
        Ok(())
    }

    pub fn get_power_sources(env: Env) -> Vec<Address> {
        get_sources(&env)
    }

    /// Voting power of `user` at the end of `block_number`
    pub fn get_voting_power_at(env: Env, user: Address, block_number: u32) -> i128 {
        power_at(&env, &user, block_number, PowerType::Voting)
    }

    /// Proposition power of `user` at the end of `block_number`
    pub fn get_proposition_power_at(env: Env, user: Address, block_number: u32) -> i128 {
        power_at(&env, &user, block_number, PowerType::Proposition)
    }

    pub fn get_total_voting_supply_at(env: Env, block_number: u32) -> i128 {
        supply_at(&env, block_number)
    }

    pub fn get_total_proposition_supply_at(env: Env, block_number: u32) -> i128 {
        supply_at(&env, block_number)
    }
}
