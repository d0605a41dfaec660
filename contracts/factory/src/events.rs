use soroban_sdk::{contractevent, Address, Env};

/// Event emitted when the factory is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitialized {
    #[topic]
    pub owner: Address,
    pub template: Address,
    pub native_token: Address,
}

/// Event emitted when a new auction instance is registered
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub seller: Address,
    pub implementation: Address,
    pub reserve_price: i128,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefunded {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted once an auction settles, whether sold, unsold or cancelled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    #[topic]
    pub listing_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TemplateUpgraded {
    #[topic]
    pub owner: Address,
    pub old_template: Address,
    pub new_template: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImplementationUpgraded {
    #[topic]
    pub owner: Address,
    pub implementation: Address,
    pub migrated: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    #[topic]
    pub old_owner: Address,
    #[topic]
    pub new_owner: Address,
}

pub fn emit_factory_initialized(env: &Env, owner: Address, template: Address, native_token: Address) {
    FactoryInitialized { owner, template, native_token }.publish(env);
}

pub fn emit_auction_created(
    env: &Env,
    listing_id: u64,
    seller: Address,
    implementation: Address,
    reserve_price: i128,
    end_time: u64,
) {
    AuctionCreated {
        listing_id,
        seller,
        implementation,
        reserve_price,
        end_time,
    }
    .publish(env);
}

pub fn emit_bid_placed(env: &Env, listing_id: u64, bidder: Address, amount: i128) {
    BidPlaced { listing_id, bidder, amount }.publish(env);
}

pub fn emit_bid_refunded(env: &Env, listing_id: u64, bidder: Address, amount: i128) {
    BidRefunded { listing_id, bidder, amount }.publish(env);
}

pub fn emit_auction_ended(env: &Env, listing_id: u64, winner: Option<Address>, amount: i128) {
    AuctionEnded { listing_id, winner, amount }.publish(env);
}

pub fn emit_template_upgraded(env: &Env, owner: Address, old_template: Address, new_template: Address) {
    TemplateUpgraded { owner, old_template, new_template }.publish(env);
}

pub fn emit_implementation_upgraded(env: &Env, owner: Address, implementation: Address, migrated: u64) {
    ImplementationUpgraded { owner, implementation, migrated }.publish(env);
}

pub fn emit_ownership_transferred(env: &Env, old_owner: Address, new_owner: Address) {
    OwnershipTransferred { old_owner, new_owner }.publish(env);
}
