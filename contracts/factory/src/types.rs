use auction_interface::AssetRef;
use soroban_sdk::{contracttype, Address};

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Owner,
    NativeToken,
    Template,
    Implementation,
    MigratedThrough,
    AuctionCounter,
    Auction(u64),
    State(u64),
    BidHistory(u64),
    Escrow(u64, Address),
    Custody(u64),
}

/// Registry entry for one auction instance.
///
/// The listing id is the instance's stable identity. As stored,
/// `implementation` is the template the instance was created with; once an
/// implementation upgrade covers the listing, the factory's `Implementation`
/// pointer takes over and views report that instead.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRecord {
    pub listing_id: u64,
    pub seller: Address,
    pub implementation: Address,
    pub created_at: u64,
}

/// Funds held on behalf of one bidder of one listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowEntry {
    pub token: Address,
    pub amount: i128,
    pub released: bool,
}

/// Asset held on behalf of one listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyRecord {
    pub asset: AssetRef,
    pub depositor: Address,
    pub released_to: Option<Address>,
}
