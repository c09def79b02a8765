use soroban_sdk::{contracttype, Address, Env};

/// Inclusive time interval, in ledger seconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

impl Window {
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

/// Sale window currently accepting contributions. Only the operator moves it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracttype]
#[repr(u32)]
pub enum Stage {
    PreSale = 0,
    Sale = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum AllocationTable {
    Investors = 0,
    Team = 1,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub pre_sale_window: Window,
    pub sale_window: Window,
    pub rate: i128,                   // Sale tokens per unit of payment asset
    pub pre_sale_bonus_percent: u32,
    pub min_contribution: i128,
    pub max_contribution_per_tx: i128,
    pub soft_cap: i128,               // Advisory, reported at finalization
    pub hard_cap: i128,
    pub aggregate_limit: i128,        // Enforced ceiling on total raised
    pub total_tokens_for_sale: i128,  // Whole token budget of the sale
    pub public_sale_tokens: i128,
    pub early_investor_reserve: i128,
    pub investor_allocation_cap: i128,
    pub founder_allocation_cap: i128,
    pub custody_destination: Address,
    pub payment_token: Address,
    pub sale_token: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub stage: Stage,
    pub raised_pre_sale: i128,
    pub raised_total: i128,
    pub tokens_sold: i128,
    pub is_finalized: bool,
}

impl SaleState {
    pub fn new() -> Self {
        Self {
            stage: Stage::PreSale,
            raised_pre_sale: 0,
            raised_total: 0,
            tokens_sold: 0,
            is_finalized: false,
        }
    }
}

impl Default for SaleState {
    fn default() -> Self {
        Self::new()
    }
}

/// One slot of an allocation table arena.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllocationEntry {
    pub beneficiary: Address,
    pub amount: i128,
    pub paid: bool,
}

/// Per-table bookkeeping kept next to the arena.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct TableSummary {
    pub allocated: i128,
    pub distributed: i128,
    pub entry_count: u32,
    pub cursor: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
    Operator,
    State,
    Summary(AllocationTable),
    Entry(AllocationTable, u32),
    OpenEntry(AllocationTable, Address),
    Allocated(AllocationTable, Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
