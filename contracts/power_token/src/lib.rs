#![no_std]

//! # Power Token
//!
//! A minimal fungible token that records a checkpoint of every balance and of
//! the total supply whenever they change. Governance strategies read these
//! checkpoints to learn how much power an account held at a past ledger,
//! which makes tokens acquired after a proposal's snapshot worthless for that
//! proposal.
//!
//! Voting and proposition power are both equal to the balance.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use governance_interface::{GovernanceError, PowerType};

mod events;
mod storage;
mod types;

pub use types::{Checkpoint, TokenConfig};

#[contract]
pub struct PowerToken;

#[contractimpl]
impl PowerToken {
    /// Initialize the token
    ///
    /// # Arguments
    /// * `minter` - Account allowed to mint new tokens
    /// * `name` - Display name
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Token has already been initialized
    pub fn initialize(env: Env, minter: Address, name: String) -> Result<(), GovernanceError> {
        if storage::is_initialized(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }
        storage::set_config(&env, &TokenConfig { minter, name });
        Ok(())
    }

    /// Mint `amount` to `to`. Requires the minter's authorization.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), GovernanceError> {
        let config = storage::get_config(&env).ok_or(GovernanceError::NotInitialized)?;
        config.minter.require_auth();

        if amount <= 0 {
            return Err(GovernanceError::InvalidAmount);
        }

        // balances never exceed the supply, so only the supply can overflow
        let supply = storage::latest_value(&env, &None)
            .checked_add(amount)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        storage::write_checkpoint(&env, &None, supply);

        let account = Some(to.clone());
        let balance = storage::latest_value(&env, &account);
        storage::write_checkpoint(&env, &account, balance + amount);

        events::emit_minted(&env, &to, amount, supply);
        Ok(())
    }

    /// Move `amount` from `from` to `to`
    ///
    /// # Errors
    /// * `InvalidAmount` - Amount is not positive
    /// * `InsufficientBalance` - `from` holds less than `amount`
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), GovernanceError> {
        if !storage::is_initialized(&env) {
            return Err(GovernanceError::NotInitialized);
        }
        from.require_auth();

        if amount <= 0 {
            return Err(GovernanceError::InvalidAmount);
        }

        let sender = Some(from.clone());
        let sender_balance = storage::latest_value(&env, &sender);
        if sender_balance < amount {
            return Err(GovernanceError::InsufficientBalance);
        }
        storage::write_checkpoint(&env, &sender, sender_balance - amount);

        let recipient = Some(to.clone());
        let recipient_balance = storage::latest_value(&env, &recipient);
        storage::write_checkpoint(&env, &recipient, recipient_balance + amount);

        events::emit_transferred(&env, &from, &to, amount);
        Ok(())
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn balance(env: Env, user: Address) -> i128 {
        storage::latest_value(&env, &Some(user))
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::latest_value(&env, &None)
    }

    pub fn name(env: Env) -> Result<String, GovernanceError> {
        storage::get_config(&env)
            .map(|config| config.name)
            .ok_or(GovernanceError::NotInitialized)
    }

    pub fn get_checkpoint_count(env: Env, user: Address) -> u32 {
        storage::checkpoint_count(&env, &Some(user))
    }

    // ========================================================================
    // Power Source
    // ========================================================================

    /// Power held right now
    pub fn get_power_current(env: Env, user: Address, _power_type: PowerType) -> i128 {
        storage::latest_value(&env, &Some(user))
    }

    /// Power held at the end of `block_number`
    ///
    /// # Errors
    /// * `InvalidBlockNumber` - `block_number` is ahead of the current ledger
    pub fn get_power_at_block(
        env: Env,
        user: Address,
        block_number: u32,
        _power_type: PowerType,
    ) -> Result<i128, GovernanceError> {
        if block_number > env.ledger().sequence() {
            return Err(GovernanceError::InvalidBlockNumber);
        }
        Ok(storage::value_at(&env, &Some(user), block_number))
    }

    /// Total supply at the end of `block_number`
    ///
    /// # Errors
    /// * `InvalidBlockNumber` - `block_number` is ahead of the current ledger
    pub fn total_supply_at(env: Env, block_number: u32) -> Result<i128, GovernanceError> {
        if block_number > env.ledger().sequence() {
            return Err(GovernanceError::InvalidBlockNumber);
        }
        Ok(storage::value_at(&env, &None, block_number))
    }
}

mod test;
