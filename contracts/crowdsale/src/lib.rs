#![no_std]

mod allocation;
mod contract;
mod errors;
mod events;
mod ledger;
pub mod presets;
mod stage;
mod storage;
mod types;


pub use contract::{token_amount, CrowdsaleContract, CrowdsaleContractClient};
pub use errors::{Error, ErrorCategory};
pub use types::{AllocationEntry, AllocationTable, SaleConfig, SaleState, Stage, TableSummary, Window};
