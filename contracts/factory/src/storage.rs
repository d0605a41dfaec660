use auction_interface::{AuctionState, Bid};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{AuctionRecord, CustodyRecord, EscrowEntry, StorageKey};

// TTL constants (similar to marketplace pattern)
const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn read_persistent<V>(env: &Env, key: &StorageKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &StorageKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Owner ==========

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&StorageKey::Owner, owner);
}

// ========== Native token ==========

pub fn get_native_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::NativeToken)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::NativeToken, token);
}

// ========== Template pointers ==========

pub fn get_template(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Template)
}

pub fn set_template(env: &Env, template: &Address) {
    env.storage().instance().set(&StorageKey::Template, template);
}

pub fn get_implementation(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Implementation)
}

pub fn set_implementation(env: &Env, implementation: &Address) {
    env.storage()
        .instance()
        .set(&StorageKey::Implementation, implementation);
}

/// Highest listing id that follows the `Implementation` pointer
pub fn get_migrated_through(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::MigratedThrough)
        .unwrap_or(0)
}

pub fn set_migrated_through(env: &Env, listing_id: u64) {
    env.storage()
        .instance()
        .set(&StorageKey::MigratedThrough, &listing_id);
}

// ========== Auction counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn set_auction_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &counter);
}

// ========== Auction records ==========

pub fn get_auction(env: &Env, listing_id: u64) -> Option<AuctionRecord> {
    read_persistent(env, &StorageKey::Auction(listing_id))
}

pub fn set_auction(env: &Env, record: &AuctionRecord) {
    write_persistent(env, &StorageKey::Auction(record.listing_id), record);
}

// ========== Auction state ==========

pub fn get_state(env: &Env, listing_id: u64) -> Option<AuctionState> {
    read_persistent(env, &StorageKey::State(listing_id))
}

pub fn set_state(env: &Env, state: &AuctionState) {
    write_persistent(env, &StorageKey::State(state.listing_id), state);
}

// ========== Bid history ==========

pub fn get_bid_history(env: &Env, listing_id: u64) -> Vec<Bid> {
    read_persistent(env, &StorageKey::BidHistory(listing_id)).unwrap_or(Vec::new(env))
}

pub fn add_bid_to_history(env: &Env, listing_id: u64, bid: Bid) {
    let mut history = get_bid_history(env, listing_id);
    history.push_back(bid);
    write_persistent(env, &StorageKey::BidHistory(listing_id), &history);
}

// ========== Escrow ==========

pub fn get_escrow(env: &Env, listing_id: u64, holder: &Address) -> Option<EscrowEntry> {
    read_persistent(env, &StorageKey::Escrow(listing_id, holder.clone()))
}

pub fn set_escrow(env: &Env, listing_id: u64, holder: &Address, entry: &EscrowEntry) {
    write_persistent(env, &StorageKey::Escrow(listing_id, holder.clone()), entry);
}

// ========== Custody ==========

pub fn get_custody(env: &Env, listing_id: u64) -> Option<CustodyRecord> {
    read_persistent(env, &StorageKey::Custody(listing_id))
}

pub fn set_custody(env: &Env, listing_id: u64, record: &CustodyRecord) {
    write_persistent(env, &StorageKey::Custody(listing_id), record);
}
