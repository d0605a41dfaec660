//! Transition rules for a single auction. Nothing here touches storage or
//! moves value; callers pass the ledger time in.

use auction_interface::{
    AssetRef, AuctionState, AuctionStatus, BidPlan, Error, PaymentToken, Settlement,
    SettlementOutcome,
};
use soroban_sdk::Address;

pub fn open(
    listing_id: u64,
    seller: Address,
    asset: AssetRef,
    reserve_price: i128,
    duration: u64,
    payment_token: PaymentToken,
    now: u64,
) -> Result<AuctionState, Error> {
    if duration == 0 {
        return Err(Error::InvalidDuration);
    }

    if reserve_price <= 0 {
        return Err(Error::InvalidReserve);
    }

    let end_time = now.checked_add(duration).ok_or(Error::InvalidDuration)?;

    Ok(AuctionState {
        listing_id,
        asset,
        seller,
        reserve_price,
        start_time: now,
        end_time,
        payment_token,
        highest_bid: 0,
        highest_bidder: None,
        status: AuctionStatus::Active,
    })
}

pub fn bid(state: AuctionState, bidder: Address, amount: i128, now: u64) -> Result<BidPlan, Error> {
    if state.status != AuctionStatus::Active {
        return Err(Error::AuctionNotActive);
    }

    if now >= state.end_time {
        return Err(Error::AuctionExpired);
    }

    if bidder == state.seller {
        return Err(Error::SellerCannotBid);
    }

    if amount <= state.highest_bid {
        return Err(Error::BidTooLow);
    }

    // first bid must also clear the reserve
    if !state.has_bids() && amount < state.reserve_price {
        return Err(Error::BidTooLow);
    }

    let refund_to = state.highest_bidder.clone();
    let refund_amount = if refund_to.is_some() { state.highest_bid } else { 0 };

    let mut next = state;
    next.highest_bid = amount;
    next.highest_bidder = Some(bidder);

    Ok(BidPlan {
        refund_to,
        refund_amount,
        next,
    })
}

pub fn settle(state: AuctionState, caller: Address, now: u64) -> Result<Settlement, Error> {
    if state.status != AuctionStatus::Active {
        return Err(Error::AuctionNotActive);
    }

    let expired = now >= state.end_time;

    if !expired {
        if caller != state.seller {
            return Err(Error::AuctionStillActive);
        }
        if state.has_bids() {
            return Err(Error::CannotCancelWithBids);
        }
    }

    let seller = state.seller.clone();
    let (outcome, asset_recipient, payout) = match &state.highest_bidder {
        Some(winner) => (SettlementOutcome::Sold, winner.clone(), state.highest_bid),
        None if expired => (SettlementOutcome::Unsold, seller.clone(), 0),
        None => (SettlementOutcome::Cancelled, seller.clone(), 0),
    };

    let mut next = state;
    next.status = AuctionStatus::Ended;

    Ok(Settlement {
        outcome,
        asset_recipient,
        payee: seller,
        payout,
        next,
    })
}
