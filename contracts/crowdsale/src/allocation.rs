use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn table_cap(config: &SaleConfig, table: AllocationTable) -> i128 {
    match table {
        AllocationTable::Investors => config.investor_allocation_cap,
        AllocationTable::Team => config.founder_allocation_cap,
    }
}

/// Adds a batch of allocations to `table`.
///
/// The whole batch is checked against the table cap before any entry is
/// written, so a batch that would cross the cap leaves the table untouched.
/// Amounts accumulate on the beneficiary's open entry; once that entry has
/// been paid a new one is appended to the arena.
pub fn register(
    env: &Env,
    config: &SaleConfig,
    table: AllocationTable,
    beneficiaries: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<(), Error> {
    if beneficiaries.len() != amounts.len() {
        return Err(Error::LengthMismatch);
    }

    let mut summary = get_summary(env, table);
    let mut batch_total: i128 = 0;
    for amount in amounts.iter() {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        batch_total = batch_total.checked_add(amount).ok_or(Error::Overflow)?;
    }
    let new_allocated = summary
        .allocated
        .checked_add(batch_total)
        .ok_or(Error::Overflow)?;
    if new_allocated > table_cap(config, table) {
        return Err(Error::AllocationLimitReached);
    }

    for (beneficiary, amount) in beneficiaries.iter().zip(amounts.iter()) {
        if amount == 0 {
            continue;
        }

        let open = get_open_entry(env, table, &beneficiary)
            .and_then(|index| get_entry(env, table, index).map(|entry| (index, entry)))
            .filter(|(_, entry)| !entry.paid);

        let (index, entry) = match open {
            Some((index, mut entry)) => {
                entry.amount += amount;
                (index, entry)
            }
            None => {
                let index = summary.entry_count;
                summary.entry_count += 1;
                set_open_entry(env, table, &beneficiary, index);
                (
                    index,
                    AllocationEntry {
                        beneficiary: beneficiary.clone(),
                        amount,
                        paid: false,
                    },
                )
            }
        };
        set_entry(env, table, index, &entry);

        let total = get_allocated(env, table, &beneficiary) + amount;
        set_allocated(env, table, &beneficiary, total);

        events::allocation_added(env, table, &beneficiary, amount, index);
    }

    summary.allocated = new_allocated;
    set_summary(env, table, &summary);
    Ok(())
}

/// Pays out up to `batch_size` entries starting at the table cursor.
///
/// Every entry below the cursor is paid, so repeated calls resume where the
/// previous one stopped and return 0 once the arena is exhausted.
pub fn distribute(
    env: &Env,
    config: &SaleConfig,
    table: AllocationTable,
    batch_size: u32,
) -> Result<u32, Error> {
    let mut summary = get_summary(env, table);
    let mut processed: u32 = 0;

    while processed < batch_size && summary.cursor < summary.entry_count {
        let index = summary.cursor;
        if let Some(mut entry) = get_entry(env, table, index) {
            if !entry.paid {
                if entry.amount > 0 {
                    ledger::credit(env, &config.sale_token, &entry.beneficiary, entry.amount)?;
                }
                entry.paid = true;
                set_entry(env, table, index, &entry);
                summary.distributed = summary
                    .distributed
                    .checked_add(entry.amount)
                    .ok_or(Error::Overflow)?;
                events::allocation_paid(env, table, &entry.beneficiary, entry.amount);
            }
        }
        summary.cursor += 1;
        processed += 1;
    }

    set_summary(env, table, &summary);
    events::distribution_batch(env, table, processed, summary.cursor);
    Ok(processed)
}
