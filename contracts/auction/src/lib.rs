#![no_std]

//! Auction behaviour template.
//!
//! A template carries the rules of an auction but none of its state. The
//! factory it is bound to keeps one `AuctionState` per listing, hands it in on
//! every call, and applies whatever refunds, payouts and custody moves the
//! template decides on. Swapping the template address behind a listing
//! therefore changes the code a listing runs without touching its record.

mod admin;
mod rules;
mod storage;

use auction_interface::{
    AssetRef, AuctionBehavior, AuctionState, BidPlan, Error, PaymentToken, Settlement,
    TemplateInfo, AUCTION_KIND,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol};

#[contract]
pub struct AuctionTemplate;

#[contractimpl]
impl AuctionTemplate {
    /// Binds the template to the factory that will drive it.
    ///
    /// The factory address has to exist first, which is why a factory is
    /// initialized with a placeholder template and upgraded to a real one.
    pub fn __constructor(env: Env, factory: Address, version: u32) {
        storage::set_factory(&env, &factory);
        storage::set_version(&env, version);
        storage::extend_instance_ttl(&env);
        log!(&env, "auction template bound", factory, version);
    }
}

#[contractimpl]
impl AuctionBehavior for AuctionTemplate {
    fn surface(env: Env) -> TemplateInfo {
        TemplateInfo {
            kind: Symbol::new(&env, AUCTION_KIND),
            version: storage::get_version(&env),
            factory: storage::get_factory(&env),
        }
    }

    fn open(
        env: Env,
        listing_id: u64,
        seller: Address,
        asset: AssetRef,
        reserve_price: i128,
        duration: u64,
        payment_token: PaymentToken,
    ) -> Result<AuctionState, Error> {
        admin::require_factory(&env);
        rules::open(
            listing_id,
            seller,
            asset,
            reserve_price,
            duration,
            payment_token,
            env.ledger().timestamp(),
        )
    }

    fn bid(env: Env, state: AuctionState, bidder: Address, amount: i128) -> Result<BidPlan, Error> {
        admin::require_factory(&env);
        rules::bid(state, bidder, amount, env.ledger().timestamp())
    }

    fn settle(env: Env, state: AuctionState, caller: Address) -> Result<Settlement, Error> {
        admin::require_factory(&env);
        rules::settle(state, caller, env.ledger().timestamp())
    }
}

#[cfg(test)]
mod test;
