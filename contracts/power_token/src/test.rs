#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events as _, Ledger as _};
use soroban_sdk::{Address, Env, String};

// ============================================================================
// Test Helpers
// ============================================================================

fn setup() -> (Env, PowerTokenClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(10);

    let minter = Address::generate(&env);
    let contract_id = env.register(PowerToken, ());
    let client = PowerTokenClient::new(&env, &contract_id);
    client.initialize(&minter, &String::from_str(&env, "ArenaX Power"));

    (env, client, minter)
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_initialize_twice_fails() {
    let (env, client, minter) = setup();

    let result = client.try_initialize(&minter, &String::from_str(&env, "Other"));
    assert_eq!(result, Err(Ok(GovernanceError::AlreadyInitialized)));
    assert_eq!(client.name(), String::from_str(&env, "ArenaX Power"));
}

#[test]
fn test_mint_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(PowerToken, ());
    let client = PowerTokenClient::new(&env, &contract_id);

    let result = client.try_mint(&Address::generate(&env), &10);
    assert_eq!(result, Err(Ok(GovernanceError::NotInitialized)));
}

// ============================================================================
// Balance Tests
// ============================================================================

#[test]
fn test_mint_and_transfer() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000);
    client.transfer(&alice, &bob, &300);

    assert_eq!(client.balance(&alice), 700);
    assert_eq!(client.balance(&bob), 300);
    assert_eq!(client.total_supply(), 1_000);
    assert_eq!(client.get_power_current(&bob, &PowerType::Voting), 300);
    // Only the last invocation's events are kept
    assert_eq!(
        env.events().all().filter_by_contract(&client.address).events().len(),
        1
    );
}

#[test]
fn test_transfer_rejects_bad_amounts() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice, &100);

    assert_eq!(
        client.try_transfer(&alice, &bob, &0),
        Err(Ok(GovernanceError::InvalidAmount))
    );
    assert_eq!(
        client.try_transfer(&alice, &bob, &101),
        Err(Ok(GovernanceError::InsufficientBalance))
    );
    assert_eq!(
        client.try_mint(&alice, &-5),
        Err(Ok(GovernanceError::InvalidAmount))
    );
}

#[test]
fn test_mint_past_max_supply_fails() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice, &i128::MAX);

    assert_eq!(
        client.try_mint(&bob, &1),
        Err(Ok(GovernanceError::ArithmeticOverflow))
    );
    assert_eq!(client.balance(&bob), 0);
    assert_eq!(client.total_supply(), i128::MAX);
}

// ============================================================================
// Checkpoint Tests
// ============================================================================

#[test]
fn test_power_at_past_blocks() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &100);

    env.ledger().set_sequence_number(20);
    client.transfer(&alice, &bob, &40);

    env.ledger().set_sequence_number(30);
    client.mint(&bob, &60);

    env.ledger().set_sequence_number(35);

    let voting = PowerType::Voting;
    assert_eq!(client.get_power_at_block(&alice, &9, &voting), 0);
    assert_eq!(client.get_power_at_block(&alice, &10, &voting), 100);
    assert_eq!(client.get_power_at_block(&alice, &19, &voting), 100);
    assert_eq!(client.get_power_at_block(&alice, &20, &voting), 60);
    assert_eq!(client.get_power_at_block(&bob, &25, &PowerType::Proposition), 40);
    assert_eq!(client.get_power_at_block(&bob, &35, &voting), 100);

    assert_eq!(client.total_supply_at(&9), 0);
    assert_eq!(client.total_supply_at(&29), 100);
    assert_eq!(client.total_supply_at(&30), 160);
}

#[test]
fn test_same_block_updates_share_a_checkpoint() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &100);
    client.transfer(&alice, &bob, &10);
    client.transfer(&alice, &bob, &10);

    assert_eq!(client.get_checkpoint_count(&alice), 1);
    assert_eq!(client.get_power_at_block(&alice, &10, &PowerType::Voting), 80);
}

#[test]
fn test_binary_search_over_many_checkpoints() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);

    for i in 0..12u32 {
        env.ledger().set_sequence_number(100 + i * 10);
        client.mint(&alice, &1);
    }

    assert_eq!(client.get_checkpoint_count(&alice), 12);
    assert_eq!(client.get_power_at_block(&alice, &99, &PowerType::Voting), 0);
    assert_eq!(client.get_power_at_block(&alice, &100, &PowerType::Voting), 1);
    assert_eq!(client.get_power_at_block(&alice, &155, &PowerType::Voting), 6);
    assert_eq!(client.get_power_at_block(&alice, &160, &PowerType::Voting), 7);
    assert_eq!(client.get_power_at_block(&alice, &210, &PowerType::Voting), 12);
}

#[test]
fn test_future_block_is_rejected() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);

    assert_eq!(
        client.try_get_power_at_block(&alice, &11, &PowerType::Voting),
        Err(Ok(GovernanceError::InvalidBlockNumber))
    );
    assert_eq!(
        client.try_total_supply_at(&11),
        Err(Ok(GovernanceError::InvalidBlockNumber))
    );
}
