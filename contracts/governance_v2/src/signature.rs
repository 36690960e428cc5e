//! Typed-data digest for votes signed off-chain
//!
//! `digest = keccak256(0x1901 ‖ domain_separator ‖ keccak256(VOTE_TYPE ‖ id ‖ support))`
//! where the domain binds the governance name, version, network and contract.
//! Integers are encoded as 32-byte big-endian words. There is no nonce: a
//! replayed signature is rejected because the voter has already voted.

use ed25519_dalek::{Signature, VerifyingKey};
use governance_interface::GovernanceError;
use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env};

pub const NAME: &str = "Aave Governance v2";
pub const VERSION: &str = "1";

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,bytes32 networkId,address verifyingContract)";
const VOTE_TYPE: &[u8] = b"VoteEmitted(uint256 id,bool support)";

fn keccak(env: &Env, data: &[u8]) -> [u8; 32] {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, data))
        .to_array()
}

fn word(value: u32) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[28..].copy_from_slice(&value.to_be_bytes());
    out
}

pub fn domain_separator(env: &Env) -> BytesN<32> {
    let contract = env.current_contract_address().to_xdr(env);

    let mut data = Bytes::new(env);
    data.extend_from_array(&keccak(env, DOMAIN_TYPE));
    data.extend_from_array(&keccak(env, NAME.as_bytes()));
    data.extend_from_array(&keccak(env, VERSION.as_bytes()));
    data.extend_from_array(&env.ledger().network_id().to_array());
    data.extend_from_array(&env.crypto().keccak256(&contract).to_array());
    env.crypto().keccak256(&data).to_bytes()
}

pub fn vote_digest(env: &Env, proposal_id: u32, support: bool) -> BytesN<32> {
    let mut message = Bytes::new(env);
    message.extend_from_array(&keccak(env, VOTE_TYPE));
    message.extend_from_array(&word(proposal_id));
    message.extend_from_array(&word(support as u32));
    let struct_hash = env.crypto().keccak256(&message);

    let mut data = Bytes::from_array(env, &[0x19, 0x01]);
    data.extend_from_array(&domain_separator(env).to_array());
    data.extend_from_array(&struct_hash.to_array());
    env.crypto().keccak256(&data).to_bytes()
}

/// Check an ed25519 signature over `digest` with the voter's registered key
pub fn verify(
    public_key: &BytesN<32>,
    digest: &BytesN<32>,
    signature: &BytesN<64>,
) -> Result<(), GovernanceError> {
    let key = VerifyingKey::from_bytes(&public_key.to_array())
        .map_err(|_| GovernanceError::InvalidSignature)?;
    let signature = Signature::from_bytes(&signature.to_array());
    key.verify_strict(&digest.to_array(), &signature)
        .map_err(|_| GovernanceError::InvalidSignature)
}
