use crate::types::{SaleConfig, Window};
use soroban_sdk::Address;

/// One whole unit of a 7-decimal Stellar asset.
pub const UNIT: i128 = 10_000_000;

pub const PRE_SALE_START: u64 = 1_628_726_400;
pub const PRE_SALE_END: u64 = 1_628_812_799;
pub const SALE_START: u64 = 1_631_923_200;
pub const SALE_END: u64 = 1_632_009_599;

pub const TOTAL_TOKENS: i128 = 1_000_000_000_000 * UNIT;

/// Parameters of the Ritz sale: 2000 tokens per unit, 20% pre-sale bonus and
/// a token budget split 40% public, 10% early investors, 15% investors and
/// 35% founders.
pub fn ritz_config(custody: Address, payment_token: Address, sale_token: Address) -> SaleConfig {
    SaleConfig {
        pre_sale_window: Window {
            start: PRE_SALE_START,
            end: PRE_SALE_END,
        },
        sale_window: Window {
            start: SALE_START,
            end: SALE_END,
        },
        rate: 2000,
        pre_sale_bonus_percent: 20,
        min_contribution: UNIT / 20,
        max_contribution_per_tx: 5_000 * UNIT,
        soft_cap: 5_000 * UNIT,
        hard_cap: 10_000 * UNIT,
        aggregate_limit: 200_000_000 * UNIT,
        total_tokens_for_sale: TOTAL_TOKENS,
        public_sale_tokens: TOTAL_TOKENS / 100 * 40,
        early_investor_reserve: TOTAL_TOKENS / 100 * 10,
        investor_allocation_cap: TOTAL_TOKENS / 100 * 15,
        founder_allocation_cap: TOTAL_TOKENS / 100 * 35,
        custody_destination: custody,
        payment_token,
        sale_token,
    }
}
