//! Resolution and invocation of queued actions

use soroban_sdk::{token, Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec};

use governance_interface::{CallKind, GovernanceError, ProposalAction};

use crate::{events, storage};

/// Longest function name a contract can export
const MAX_FUNCTION_NAME_LEN: usize = 32;

/// Function symbol and arguments of an action.
///
/// With an empty signature the first calldata element names the function.
pub fn resolve_call(env: &Env, action: &ProposalAction) -> Result<(Symbol, Vec<Val>), GovernanceError> {
    if action.signature.is_empty() {
        let head = action
            .calldata
            .first()
            .ok_or(GovernanceError::InvalidFunctionSignature)?;
        let function = Symbol::try_from_val(env, &head)
            .map_err(|_| GovernanceError::InvalidFunctionSignature)?;
        return Ok((function, action.calldata.slice(1..)));
    }

    Ok((function_symbol(env, &action.signature)?, action.calldata.clone()))
}

fn function_symbol(env: &Env, signature: &String) -> Result<Symbol, GovernanceError> {
    let len = signature.len() as usize;
    if len > MAX_FUNCTION_NAME_LEN {
        return Err(GovernanceError::InvalidFunctionSignature);
    }

    let mut buf = [0u8; MAX_FUNCTION_NAME_LEN];
    signature.copy_into_slice(&mut buf[..len]);
    let name = &buf[..len];
    if !name.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        return Err(GovernanceError::InvalidFunctionSignature);
    }

    let name = core::str::from_utf8(name).map_err(|_| GovernanceError::InvalidFunctionSignature)?;
    Ok(Symbol::new(env, name))
}

/// Perform the call described by `action`
pub fn invoke(env: &Env, action: &ProposalAction) -> Result<Val, GovernanceError> {
    let (function, args) = resolve_call(env, action)?;
    let this = env.current_contract_address();

    if action.target == this {
        return invoke_self(env, &function, &args);
    }

    let args = match action.call_kind {
        CallKind::Direct => {
            pay_value(env, &this, action)?;
            args
        }
        CallKind::ContextPreserving => {
            let mut with_context: Vec<Val> = Vec::from_array(env, [this.into_val(env)]);
            with_context.append(&args);
            with_context
        }
    };

    match env.try_invoke_contract::<Val, soroban_sdk::Error>(&action.target, &function, args) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(GovernanceError::FailedActionExecution),
    }
}

fn pay_value(env: &Env, this: &Address, action: &ProposalAction) -> Result<(), GovernanceError> {
    if action.value < 0 {
        return Err(GovernanceError::InvalidAmount);
    }
    if action.value == 0 {
        return Ok(());
    }

    let config = storage::get_config(env)?;
    let asset = token::TokenClient::new(env, &config.value_asset);
    if asset.balance(this) < action.value {
        return Err(GovernanceError::InsufficientValueBalance);
    }
    asset.transfer(this, &action.target, &action.value);
    Ok(())
}

/// The executor cannot call into itself, so the setters it governs are
/// applied here directly.
fn invoke_self(env: &Env, function: &Symbol, args: &Vec<Val>) -> Result<Val, GovernanceError> {
    let arg = args.first().ok_or(GovernanceError::FailedActionExecution)?;

    if *function == Symbol::new(env, "set_delay") {
        let delay =
            u64::try_from_val(env, &arg).map_err(|_| GovernanceError::FailedActionExecution)?;
        apply_delay(env, delay).map_err(|_| GovernanceError::FailedActionExecution)?;
    } else if *function == Symbol::new(env, "set_pending_admin") {
        let pending_admin = Address::try_from_val(env, &arg)
            .map_err(|_| GovernanceError::FailedActionExecution)?;
        apply_pending_admin(env, pending_admin)?;
    } else {
        return Err(GovernanceError::FailedActionExecution);
    }

    Ok(().into_val(env))
}

pub fn apply_delay(env: &Env, delay: u64) -> Result<(), GovernanceError> {
    let mut config = storage::get_config(env)?;
    validate_delay(config.minimum_delay, config.maximum_delay, delay)?;
    config.delay = delay;
    storage::set_config(env, &config);
    events::emit_new_delay(env, delay);
    Ok(())
}

pub fn apply_pending_admin(env: &Env, pending_admin: Address) -> Result<(), GovernanceError> {
    let mut config = storage::get_config(env)?;
    config.pending_admin = Some(pending_admin.clone());
    storage::set_config(env, &config);
    events::emit_new_pending_admin(env, &pending_admin);
    Ok(())
}

pub fn validate_delay(minimum: u64, maximum: u64, delay: u64) -> Result<(), GovernanceError> {
    if delay < minimum {
        return Err(GovernanceError::DelayShorterThanMinimum);
    }
    if delay > maximum {
        return Err(GovernanceError::DelayLongerThanMaximum);
    }
    Ok(())
}
