//! Calls into the token contracts the sale depends on.
//!
//! Both helpers use the fallible `try_*` client calls so a rejection by the
//! token contract surfaces as a sale error instead of a host trap.

use crate::errors::Error;
use soroban_sdk::{token, Address, Env};

/// Moves `amount` of the payment asset from `from` straight to custody.
pub fn forward_value(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    custody: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, payment_token);
    match client.try_transfer(from, custody, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferRejected),
    }
}

/// Mints freshly credited sale tokens. The sale contract must be the token admin.
pub fn credit(env: &Env, sale_token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::StellarAssetClient::new(env, sale_token);
    match client.try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::InsufficientSupply),
    }
}
