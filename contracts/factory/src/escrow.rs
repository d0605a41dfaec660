//! Bid funds held by the factory until they are refunded or paid out.
//!
//! A hold is keyed by listing and holder. Each hold leaves the factory at
//! most once; a later deposit by the same holder opens a fresh hold.

use auction_interface::Error;
use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::types::EscrowEntry;

/// Pull `amount` of `token` from `from` into the factory and record the hold.
pub fn deposit(
    env: &Env,
    listing_id: u64,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let client = token::TokenClient::new(env, token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::PaymentFailed),
    }

    storage::set_escrow(
        env,
        listing_id,
        from,
        &EscrowEntry {
            token: token.clone(),
            amount,
            released: false,
        },
    );

    Ok(())
}

/// Return the holder's funds to the holder.
pub fn refund(env: &Env, listing_id: u64, holder: &Address) -> Result<i128, Error> {
    release(env, listing_id, holder, holder, Error::RefundFailed)
}

/// Release the holder's funds to `recipient`.
pub fn pay_out(
    env: &Env,
    listing_id: u64,
    holder: &Address,
    recipient: &Address,
) -> Result<i128, Error> {
    release(env, listing_id, holder, recipient, Error::SettlementFailed)
}

/// Amount currently held for `holder`, zero once released.
pub fn held(env: &Env, listing_id: u64, holder: &Address) -> i128 {
    match storage::get_escrow(env, listing_id, holder) {
        Some(entry) if !entry.released => entry.amount,
        _ => 0,
    }
}

fn release(
    env: &Env,
    listing_id: u64,
    holder: &Address,
    recipient: &Address,
    failure: Error,
) -> Result<i128, Error> {
    let mut entry = storage::get_escrow(env, listing_id, holder).ok_or(Error::EscrowReleased)?;
    if entry.released {
        return Err(Error::EscrowReleased);
    }

    let client = token::TokenClient::new(env, &entry.token);
    match client.try_transfer(&env.current_contract_address(), recipient, &entry.amount) {
        Ok(Ok(())) => {}
        _ => return Err(failure),
    }

    entry.released = true;
    storage::set_escrow(env, listing_id, holder, &entry);

    Ok(entry.amount)
}
