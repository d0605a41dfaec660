use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;
use crate::types::{AssetRef, AuctionState, BidPlan, PaymentToken, Settlement, TemplateInfo};

/// Surface every auction template must expose.
///
/// Templates hold no auction state. They receive the instance's persisted
/// `AuctionState`, decide the transition and hand back the effects; the
/// factory owns the state record, the escrowed funds and the escrowed asset.
#[contractclient(name = "AuctionBehaviorClient")]
pub trait AuctionBehavior {
    fn surface(env: Env) -> TemplateInfo;

    fn open(
        env: Env,
        listing_id: u64,
        seller: Address,
        asset: AssetRef,
        reserve_price: i128,
        duration: u64,
        payment_token: PaymentToken,
    ) -> Result<AuctionState, Error>;

    fn bid(env: Env, state: AuctionState, bidder: Address, amount: i128) -> Result<BidPlan, Error>;

    fn settle(env: Env, state: AuctionState, caller: Address) -> Result<Settlement, Error>;
}
