use crate::types::{AllocationTable, Stage};
use soroban_sdk::{symbol_short, Address, Env};

// ==================== Sale lifecycle ====================

pub fn sale_initialized(env: &Env, operator: &Address, sale_token: &Address, custody: &Address) {
    env.events().publish(
        (symbol_short!("init"), operator.clone()),
        (sale_token.clone(), custody.clone()),
    );
}

pub fn stage_changed(env: &Env, from: Stage, to: Stage) {
    env.events()
        .publish((symbol_short!("stage"),), (from as u32, to as u32));
}

pub fn operator_changed(env: &Env, previous: &Address, next: &Address) {
    env.events().publish(
        (symbol_short!("operator"), previous.clone()),
        next.clone(),
    );
}

pub fn sale_finalized(env: &Env, raised_total: i128, soft_cap_reached: bool) {
    env.events()
        .publish((symbol_short!("final"),), (raised_total, soft_cap_reached));
}

// ==================== Contributions ====================

pub fn tokens_purchased(
    env: &Env,
    buyer: &Address,
    beneficiary: &Address,
    value: i128,
    tokens: i128,
    stage: Stage,
) {
    env.events().publish(
        (symbol_short!("purchase"), beneficiary.clone()),
        (buyer.clone(), value, tokens, stage as u32),
    );
}

// ==================== Allocations ====================

pub fn allocation_added(
    env: &Env,
    table: AllocationTable,
    beneficiary: &Address,
    amount: i128,
    index: u32,
) {
    env.events().publish(
        (symbol_short!("alloc"), table as u32, beneficiary.clone()),
        (amount, index),
    );
}

pub fn allocation_paid(env: &Env, table: AllocationTable, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("paid"), table as u32, beneficiary.clone()),
        amount,
    );
}

pub fn distribution_batch(env: &Env, table: AllocationTable, processed: u32, cursor: u32) {
    env.events()
        .publish((symbol_short!("dist"), table as u32), (processed, cursor));
}
