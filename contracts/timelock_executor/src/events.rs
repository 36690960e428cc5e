use soroban_sdk::{contractevent, Address, BytesN, Env, String, Val, Vec};

use governance_interface::{CallKind, ProposalAction};

#[contractevent(topics = ["ArenaXTimelock", "NEW_DELAY"])]
struct NewDelay {
    delay: u64,
}

#[contractevent(topics = ["ArenaXTimelock", "NEW_PENDING_ADMIN"])]
struct NewPendingAdmin {
    pending_admin: Address,
}

#[contractevent(topics = ["ArenaXTimelock", "NEW_ADMIN"])]
struct NewAdmin {
    admin: Address,
}

#[contractevent(topics = ["ArenaXTimelock", "QUEUED"])]
struct QueuedAction {
    action_hash: BytesN<32>,
    target: Address,
    value: i128,
    signature: String,
    calldata: Vec<Val>,
    execution_time: u64,
    call_kind: CallKind,
}

#[contractevent(topics = ["ArenaXTimelock", "EXECUTED"])]
struct ExecutedAction {
    action_hash: BytesN<32>,
    target: Address,
    value: i128,
    signature: String,
    calldata: Vec<Val>,
    execution_time: u64,
    call_kind: CallKind,
    result: Val,
}

#[contractevent(topics = ["ArenaXTimelock", "CANCELLED"])]
struct CancelledAction {
    action_hash: BytesN<32>,
    target: Address,
    value: i128,
    signature: String,
    calldata: Vec<Val>,
    execution_time: u64,
    call_kind: CallKind,
}

pub fn emit_new_delay(env: &Env, delay: u64) {
    NewDelay { delay }.publish(env);
}

pub fn emit_new_pending_admin(env: &Env, pending_admin: &Address) {
    NewPendingAdmin {
        pending_admin: pending_admin.clone(),
    }
    .publish(env);
}

pub fn emit_new_admin(env: &Env, admin: &Address) {
    NewAdmin {
        admin: admin.clone(),
    }
    .publish(env);
}

pub fn emit_queued(env: &Env, action_hash: &BytesN<32>, action: &ProposalAction, execution_time: u64) {
    QueuedAction {
        action_hash: action_hash.clone(),
        target: action.target.clone(),
        value: action.value,
        signature: action.signature.clone(),
        calldata: action.calldata.clone(),
        execution_time,
        call_kind: action.call_kind,
    }
    .publish(env);
}

pub fn emit_executed(
    env: &Env,
    action_hash: &BytesN<32>,
    action: &ProposalAction,
    execution_time: u64,
    result: Val,
) {
    ExecutedAction {
        action_hash: action_hash.clone(),
        target: action.target.clone(),
        value: action.value,
        signature: action.signature.clone(),
        calldata: action.calldata.clone(),
        execution_time,
        call_kind: action.call_kind,
        result,
    }
    .publish(env);
}

pub fn emit_cancelled(env: &Env, action_hash: &BytesN<32>, action: &ProposalAction, execution_time: u64) {
    CancelledAction {
        action_hash: action_hash.clone(),
        target: action.target.clone(),
        value: action.value,
        signature: action.signature.clone(),
        calldata: action.calldata.clone(),
        execution_time,
        call_kind: action.call_kind,
    }
    .publish(env);
}
