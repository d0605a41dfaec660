use soroban_sdk::{contracttype, Address, Symbol};

/// Kind reported by every auction behaviour contract in `TemplateInfo`.
pub const AUCTION_KIND: &str = "auction";

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Active = 0,
    Ended = 1,
}

/// An escrowed item: the registry contract and the id inside it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub registry: Address,
    pub asset_id: u64,
}

/// Unit bids are denominated in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentToken {
    /// The network's native asset, resolved by the factory
    Native,
    /// A specific token contract
    Token(Address),
}

/// Persisted state of one auction instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub listing_id: u64,
    pub asset: AssetRef,
    pub seller: Address,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub payment_token: PaymentToken,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub status: AuctionStatus,
}

impl AuctionState {
    pub fn has_bids(&self) -> bool {
        self.highest_bidder.is_some()
    }
}

/// Outcome of an accepted bid: who must be refunded and the state to persist.
///
/// `refund_to` is the displaced bidder, if any, and `refund_amount` the bid
/// being returned to them (zero when nobody is displaced).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlan {
    pub refund_to: Option<Address>,
    pub refund_amount: i128,
    pub next: AuctionState,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettlementOutcome {
    /// Asset goes to the highest bidder, funds to the seller
    Sold = 0,
    /// Expired with no bids, asset returns to the seller
    Unsold = 1,
    /// Seller withdrew the listing before any bid
    Cancelled = 2,
}

/// Effects the instance must apply to reach the Ended state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub outcome: SettlementOutcome,
    pub asset_recipient: Address,
    pub payee: Address,
    pub payout: i128,
    pub next: AuctionState,
}

/// Self-description used by the factory to vet a template before swapping it in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemplateInfo {
    pub kind: Symbol,
    pub version: u32,
    pub factory: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}
