use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["ArenaXPowerToken", "MINTED"])]
struct Minted {
    to: Address,
    amount: i128,
    total_supply: i128,
}

#[contractevent(topics = ["ArenaXPowerToken", "TRANSFERRED"])]
struct Transferred {
    from: Address,
    to: Address,
    amount: i128,
}

pub fn emit_minted(env: &Env, to: &Address, amount: i128, total_supply: i128) {
    Minted {
        to: to.clone(),
        amount,
        total_supply,
    }
    .publish(env);
}

pub fn emit_transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    Transferred {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
}
