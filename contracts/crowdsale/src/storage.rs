use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_operator(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(Error::NotInitialized)
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
    extend_instance(env);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance(env);
}

pub fn get_summary(env: &Env, table: AllocationTable) -> TableSummary {
    env.storage()
        .instance()
        .get(&DataKey::Summary(table))
        .unwrap_or_default()
}

pub fn set_summary(env: &Env, table: AllocationTable, summary: &TableSummary) {
    env.storage()
        .instance()
        .set(&DataKey::Summary(table), summary);
    extend_instance(env);
}

pub fn get_entry(env: &Env, table: AllocationTable, index: u32) -> Option<AllocationEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Entry(table, index))
}

pub fn set_entry(env: &Env, table: AllocationTable, index: u32, entry: &AllocationEntry) {
    let key = DataKey::Entry(table, index);
    env.storage().persistent().set(&key, entry);
    extend_persistent(env, &key);
}

pub fn get_open_entry(env: &Env, table: AllocationTable, beneficiary: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OpenEntry(table, beneficiary.clone()))
}

pub fn set_open_entry(env: &Env, table: AllocationTable, beneficiary: &Address, index: u32) {
    let key = DataKey::OpenEntry(table, beneficiary.clone());
    env.storage().persistent().set(&key, &index);
    extend_persistent(env, &key);
}

pub fn get_allocated(env: &Env, table: AllocationTable, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allocated(table, beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_allocated(env: &Env, table: AllocationTable, beneficiary: &Address, amount: i128) {
    let key = DataKey::Allocated(table, beneficiary.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}
