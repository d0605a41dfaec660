//! Calls into the behaviour contract behind a listing.
//!
//! Errors the behaviour returns on purpose are forwarded as they are. A
//! behaviour that traps, is missing, or answers with something undecodable
//! counts as an invalid template. So does one whose answer would break the
//! factory's own guarantees: the listing terms never change after opening,
//! every displaced bid is refunded, and settlement moves the held bid and
//! the asset to exactly one side each.

use auction_interface::{
    AssetRef, AuctionBehaviorClient, AuctionState, AuctionStatus, BidPlan, Error, PaymentToken,
    Settlement, SettlementOutcome, TemplateInfo, AUCTION_KIND,
};
use soroban_sdk::{Address, Env, Symbol};

fn forward<T, C, I>(result: Result<Result<T, C>, Result<Error, I>>) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(Error::InvalidTemplate),
    }
}

fn ensure(holds: bool) -> Result<(), Error> {
    if holds {
        Ok(())
    } else {
        Err(Error::InvalidTemplate)
    }
}

/// Fields fixed at opening.
fn same_terms(before: &AuctionState, after: &AuctionState) -> bool {
    before.listing_id == after.listing_id
        && before.asset == after.asset
        && before.seller == after.seller
        && before.reserve_price == after.reserve_price
        && before.start_time == after.start_time
        && before.end_time == after.end_time
        && before.payment_token == after.payment_token
}

/// Checks that `template` is an auction behaviour bound to this factory.
pub fn validate_template(env: &Env, template: &Address) -> Result<TemplateInfo, Error> {
    let client = AuctionBehaviorClient::new(env, template);
    let info = match client.try_surface() {
        Ok(Ok(info)) => info,
        _ => return Err(Error::InvalidTemplate),
    };

    if info.kind != Symbol::new(env, AUCTION_KIND) || info.factory != env.current_contract_address()
    {
        return Err(Error::InvalidTemplate);
    }

    Ok(info)
}

#[allow(clippy::too_many_arguments)]
pub fn open(
    env: &Env,
    implementation: &Address,
    listing_id: u64,
    seller: &Address,
    asset: &AssetRef,
    reserve_price: i128,
    duration: u64,
    payment_token: &PaymentToken,
) -> Result<AuctionState, Error> {
    let client = AuctionBehaviorClient::new(env, implementation);
    let state = forward(client.try_open(
        &listing_id,
        seller,
        asset,
        &reserve_price,
        &duration,
        payment_token,
    ))?;

    let now = env.ledger().timestamp();
    ensure(
        state.listing_id == listing_id
            && state.seller == *seller
            && state.asset == *asset
            && state.reserve_price == reserve_price
            && state.payment_token == *payment_token
            && state.start_time == now
            && Some(state.end_time) == now.checked_add(duration)
            && state.highest_bid == 0
            && state.highest_bidder.is_none()
            && state.status == AuctionStatus::Active,
    )?;

    Ok(state)
}

pub fn bid(
    env: &Env,
    implementation: &Address,
    state: &AuctionState,
    bidder: &Address,
    amount: i128,
) -> Result<BidPlan, Error> {
    let client = AuctionBehaviorClient::new(env, implementation);
    let plan = forward(client.try_bid(state, bidder, &amount))?;

    let next = &plan.next;
    ensure(
        state.status == AuctionStatus::Active
            && next.status == AuctionStatus::Active
            && same_terms(state, next)
            && amount > state.highest_bid
            && next.highest_bid == amount
            && next.highest_bidder.as_ref() == Some(bidder),
    )?;

    // the displaced bidder, and only them, gets their bid back
    ensure(plan.refund_to == state.highest_bidder)?;
    if plan.refund_to.is_some() {
        ensure(plan.refund_amount == state.highest_bid)?;
    }

    Ok(plan)
}

pub fn settle(
    env: &Env,
    implementation: &Address,
    state: &AuctionState,
    caller: &Address,
) -> Result<Settlement, Error> {
    let client = AuctionBehaviorClient::new(env, implementation);
    let settlement = forward(client.try_settle(state, caller))?;

    let next = &settlement.next;
    ensure(
        state.status == AuctionStatus::Active
            && next.status == AuctionStatus::Ended
            && same_terms(state, next)
            && next.highest_bid == state.highest_bid
            && next.highest_bidder == state.highest_bidder
            && settlement.payee == state.seller,
    )?;

    let expired = env.ledger().timestamp() >= state.end_time;
    match settlement.outcome {
        SettlementOutcome::Sold => ensure(
            expired
                && state.highest_bidder.as_ref() == Some(&settlement.asset_recipient)
                && settlement.payout == state.highest_bid,
        )?,
        SettlementOutcome::Unsold | SettlementOutcome::Cancelled => {
            let allowed = match settlement.outcome {
                SettlementOutcome::Unsold => expired,
                _ => *caller == state.seller,
            };
            ensure(
                allowed
                    && state.highest_bidder.is_none()
                    && settlement.asset_recipient == state.seller
                    && settlement.payout == 0,
            )?
        }
    }

    Ok(settlement)
}
