use crate::allocation;
use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::stage;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Two-window crowdsale with capped investor and team allocations"
);

#[contract]
pub struct CrowdsaleContract;

fn validate_config(config: &SaleConfig) -> Result<(), Error> {
    let windows_ok = config.pre_sale_window.is_valid()
        && config.sale_window.is_valid()
        && config.pre_sale_window.end < config.sale_window.start;
    let amounts_ok = config.rate > 0
        && config.pre_sale_bonus_percent <= 100
        && config.min_contribution > 0
        && config.min_contribution <= config.max_contribution_per_tx
        && config.soft_cap >= 0
        && config.soft_cap <= config.hard_cap
        && config.aggregate_limit > 0;
    let reserves_ok = config.public_sale_tokens >= 0
        && config.early_investor_reserve >= 0
        && config.investor_allocation_cap >= 0
        && config.founder_allocation_cap >= 0;
    if !(windows_ok && amounts_ok && reserves_ok) {
        return Err(Error::InvalidConfig);
    }

    let committed = config
        .public_sale_tokens
        .checked_add(config.early_investor_reserve)
        .and_then(|sum| sum.checked_add(config.investor_allocation_cap))
        .and_then(|sum| sum.checked_add(config.founder_allocation_cap))
        .ok_or(Error::InvalidConfig)?;
    if committed > config.total_tokens_for_sale {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_operator(env)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Credited tokens for `value`, including the pre-sale bonus when it applies.
pub fn token_amount(config: &SaleConfig, stage: Stage, value: i128) -> Result<i128, Error> {
    let base = value.checked_mul(config.rate).ok_or(Error::Overflow)?;
    if stage != Stage::PreSale {
        return Ok(base);
    }
    let bonus = base
        .checked_mul(config.pre_sale_bonus_percent as i128)
        .ok_or(Error::Overflow)?
        / 100;
    base.checked_add(bonus).ok_or(Error::Overflow)
}

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the crowdsale. The stage starts at `PreSale`.
    pub fn initialize(env: Env, operator: Address, config: SaleConfig) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        operator.require_auth();
        validate_config(&config)?;

        set_config(&env, &config);
        set_operator(&env, &operator);
        set_state(&env, &SaleState::default());

        events::sale_initialized(
            &env,
            &operator,
            &config.sale_token,
            &config.custody_destination,
        );
        Ok(())
    }

    /// Move the sale to `next`. Time never advances the stage on its own.
    pub fn set_stage(env: Env, caller: Address, next: Stage) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        let mut state = get_state(&env)?;
        if state.is_finalized {
            return Err(Error::AlreadyFinalized);
        }
        stage::check_transition(state.stage, next)?;
        if state.stage == next {
            return Ok(());
        }

        let previous = state.stage;
        state.stage = next;
        set_state(&env, &state);

        events::stage_changed(&env, previous, next);
        Ok(())
    }

    pub fn set_operator(env: Env, caller: Address, new_operator: Address) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        set_operator(&env, &new_operator);
        events::operator_changed(&env, &caller, &new_operator);
        Ok(())
    }

    /// Buy sale tokens for `beneficiary`, paid by `buyer`.
    ///
    /// All checks run before anything is written; the payment is forwarded to
    /// custody and the tokens minted in the same invocation, so any failure
    /// leaves the sale, the payment asset and the sale token unchanged.
    pub fn buy_tokens(
        env: Env,
        buyer: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let now = get_ledger_timestamp(&env);

        stage::require_active_window(&config, state.stage, now)?;
        if value < config.min_contribution {
            return Err(Error::BelowMinimum);
        }
        if value > config.max_contribution_per_tx {
            return Err(Error::AboveMaximum);
        }
        let raised_total = state
            .raised_total
            .checked_add(value)
            .ok_or(Error::Overflow)?;
        if raised_total > config.aggregate_limit {
            return Err(Error::AggregateLimitReached);
        }

        let tokens = token_amount(&config, state.stage, value)?;
        let tokens_sold = state
            .tokens_sold
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;
        if tokens_sold > config.public_sale_tokens {
            return Err(Error::InsufficientSupply);
        }

        ledger::forward_value(
            &env,
            &config.payment_token,
            &buyer,
            &config.custody_destination,
            value,
        )?;
        ledger::credit(&env, &config.sale_token, &beneficiary, tokens)?;

        if state.stage == Stage::PreSale {
            state.raised_pre_sale += value;
        }
        state.raised_total = raised_total;
        state.tokens_sold = tokens_sold;
        set_state(&env, &state);

        events::tokens_purchased(&env, &buyer, &beneficiary, value, tokens, state.stage);
        Ok(tokens)
    }

    pub fn add_investor_allocation(
        env: Env,
        caller: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        Self::add_allocation(&env, &caller, AllocationTable::Investors, &beneficiaries, &amounts)
    }

    pub fn add_team_allocation(
        env: Env,
        caller: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        Self::add_allocation(&env, &caller, AllocationTable::Team, &beneficiaries, &amounts)
    }

    pub fn distribute_to_investors(env: Env, caller: Address, batch_size: u32) -> Result<u32, Error> {
        Self::distribute(&env, &caller, AllocationTable::Investors, batch_size)
    }

    pub fn distribute_to_team(env: Env, caller: Address, batch_size: u32) -> Result<u32, Error> {
        Self::distribute(&env, &caller, AllocationTable::Team, batch_size)
    }

    /// Close the sale for good. Does not wait for pending distributions.
    pub fn finish(env: Env, caller: Address) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if !stage::has_ended(&config, get_ledger_timestamp(&env)) {
            return Err(Error::NotEnded);
        }
        if state.is_finalized {
            return Err(Error::AlreadyFinalized);
        }

        state.is_finalized = true;
        set_state(&env, &state);

        events::sale_finalized(
            &env,
            state.raised_total,
            state.raised_total >= config.soft_cap,
        );
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn operator(env: Env) -> Result<Address, Error> {
        get_operator(&env)
    }

    pub fn stage(env: Env) -> Result<Stage, Error> {
        Ok(get_state(&env)?.stage)
    }

    pub fn pre_sale_window(env: Env) -> Result<Window, Error> {
        Ok(get_config(&env)?.pre_sale_window)
    }

    pub fn sale_window(env: Env) -> Result<Window, Error> {
        Ok(get_config(&env)?.sale_window)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.rate)
    }

    pub fn pre_sale_bonus_percent(env: Env) -> Result<u32, Error> {
        Ok(get_config(&env)?.pre_sale_bonus_percent)
    }

    pub fn raised_pre_sale(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.raised_pre_sale)
    }

    pub fn raised_total(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.raised_total)
    }

    pub fn tokens_sold(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.tokens_sold)
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.is_finalized)
    }

    pub fn has_ended(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(stage::has_ended(&config, get_ledger_timestamp(&env)))
    }

    pub fn investor_allocated(env: Env, beneficiary: Address) -> i128 {
        get_allocated(&env, AllocationTable::Investors, &beneficiary)
    }

    pub fn founder_allocated(env: Env, beneficiary: Address) -> i128 {
        get_allocated(&env, AllocationTable::Team, &beneficiary)
    }

    pub fn allocation_summary(env: Env, table: AllocationTable) -> TableSummary {
        get_summary(&env, table)
    }

    pub fn allocation_entry(env: Env, table: AllocationTable, index: u32) -> Option<AllocationEntry> {
        get_entry(&env, table, index)
    }
}

impl CrowdsaleContract {
    fn add_allocation(
        env: &Env,
        caller: &Address,
        table: AllocationTable,
        beneficiaries: &Vec<Address>,
        amounts: &Vec<i128>,
    ) -> Result<(), Error> {
        require_operator(env, caller)?;
        let config = get_config(env)?;
        if get_state(env)?.is_finalized {
            return Err(Error::AlreadyFinalized);
        }
        allocation::register(env, &config, table, beneficiaries, amounts)
    }

    fn distribute(
        env: &Env,
        caller: &Address,
        table: AllocationTable,
        batch_size: u32,
    ) -> Result<u32, Error> {
        require_operator(env, caller)?;
        let config = get_config(env)?;
        if !stage::has_ended(&config, get_ledger_timestamp(env)) {
            return Err(Error::SaleNotEnded);
        }
        allocation::distribute(env, &config, table, batch_size)
    }
}
