//! Proposal validation
//!
//! Thresholds are basis points of a total supply and are always rounded down,
//! as is each side of the differential comparison.

use soroban_sdk::{Address, Env};

use governance_interface::{ProposalTally, StrategyClient, ONE_HUNDRED_WITH_PRECISION};

use crate::types::ExecutorConfig;

pub fn minimum_proposition_power_needed(
    env: &Env,
    config: &ExecutorConfig,
    strategy: &Address,
    block_number: u32,
) -> i128 {
    let supply = StrategyClient::new(env, strategy).get_total_proposition_supply_at(&block_number);
    supply * config.proposition_threshold / ONE_HUNDRED_WITH_PRECISION
}

pub fn is_proposition_power_enough(
    env: &Env,
    config: &ExecutorConfig,
    strategy: &Address,
    user: &Address,
    block_number: u32,
) -> bool {
    let power = StrategyClient::new(env, strategy).get_proposition_power_at(user, &block_number);
    power >= minimum_proposition_power_needed(env, config, strategy, block_number)
}

pub fn minimum_voting_power_needed(config: &ExecutorConfig, voting_supply: i128) -> i128 {
    voting_supply * config.minimum_quorum / ONE_HUNDRED_WITH_PRECISION
}

fn voting_supply(env: &Env, tally: &ProposalTally) -> i128 {
    StrategyClient::new(env, &tally.strategy).get_total_voting_supply_at(&tally.snapshot_block)
}

/// Participation (for + against) reaches the minimum quorum
pub fn is_quorum_valid(env: &Env, config: &ExecutorConfig, tally: &ProposalTally) -> bool {
    let supply = voting_supply(env, tally);
    tally.for_votes + tally.against_votes >= minimum_voting_power_needed(config, supply)
}

/// For-votes lead against-votes by at least the configured differential
pub fn is_vote_differential_valid(
    env: &Env,
    config: &ExecutorConfig,
    tally: &ProposalTally,
) -> bool {
    let supply = voting_supply(env, tally);
    if supply <= 0 {
        return false;
    }
    let for_share = tally.for_votes * ONE_HUNDRED_WITH_PRECISION / supply;
    let against_share = tally.against_votes * ONE_HUNDRED_WITH_PRECISION / supply;
    for_share >= against_share + config.vote_differential
}
