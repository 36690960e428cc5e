//! Data types for the Power Token contract

use soroban_sdk::{contracttype, Address, String};

/// Value of a balance or of the total supply from `block` onward
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub block: u32,
    pub value: i128,
}

/// Token configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    /// Only account allowed to mint
    pub minter: Address,
    /// Display name
    pub name: String,
}
