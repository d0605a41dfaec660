#![no_std]

//! Auction factory.
//!
//! Owns every auction instance: its registry record, its persisted state,
//! the bid funds in escrow and the listed asset in custody. Each record
//! points at the behaviour contract whose rules drive that instance, and the
//! owner can swap that pointer without touching the instance's state.

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

mod behavior;
mod custody;
mod escrow;
mod events;
mod storage;
mod types;

use auction_interface::{
    AssetRef, AuctionState, Bid, Error, PaymentToken, SettlementOutcome,
};
pub use types::AuctionRecord;

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory with its owner, first template and native token.
    ///
    /// The template is only validated on upgrade. A template has to be bound
    /// to the factory's address, so the first one is usually a placeholder.
    pub fn initialize(
        env: Env,
        owner: Address,
        initial_template: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_initialized(&env);
        storage::set_owner(&env, &owner);
        storage::set_template(&env, &initial_template);
        storage::set_implementation(&env, &initial_template);
        storage::set_native_token(&env, &native_token);
        storage::extend_instance_ttl(&env);

        events::emit_factory_initialized(&env, owner, initial_template, native_token);

        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// Create an auction instance and take custody of the listed asset.
    pub fn create_auction(
        env: Env,
        seller: Address,
        asset: AssetRef,
        reserve_price: i128,
        duration: u64,
        payment_token: PaymentToken,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        seller.require_auth();

        let template = storage::get_template(&env).ok_or(Error::NotInitialized)?;
        behavior::validate_template(&env, &template)?;

        let listing_id = storage::get_auction_counter(&env) + 1;
        let state = behavior::open(
            &env,
            &template,
            listing_id,
            &seller,
            &asset,
            reserve_price,
            duration,
            &payment_token,
        )?;

        custody::take(&env, listing_id, &asset, &seller)?;

        let record = AuctionRecord {
            listing_id,
            seller: seller.clone(),
            implementation: template.clone(),
            created_at: env.ledger().timestamp(),
        };
        storage::set_auction_counter(&env, listing_id);
        storage::set_auction(&env, &record);
        storage::set_state(&env, &state);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction created", listing_id, seller, reserve_price);
        events::emit_auction_created(
            &env,
            listing_id,
            seller,
            template,
            reserve_price,
            state.end_time,
        );

        Ok(listing_id)
    }

    /// Place a bid. The displaced bidder is refunded before the new bid is held.
    pub fn place_bid(env: Env, listing_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        bidder.require_auth();

        let (record, state) = Self::load_instance(&env, listing_id)?;
        let plan = behavior::bid(&env, &record.implementation, &state, &bidder, amount)?;

        if let Some(displaced) = &plan.refund_to {
            let refunded = escrow::refund(&env, listing_id, displaced)?;
            log!(&env, "bid refunded", listing_id, displaced.clone(), refunded);
            events::emit_bid_refunded(&env, listing_id, displaced.clone(), refunded);
        }

        let token = Self::resolve_token(&env, &state.payment_token)?;
        escrow::deposit(&env, listing_id, &token, &bidder, amount)?;

        storage::set_state(&env, &plan.next);
        storage::add_bid_to_history(
            &env,
            listing_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        log!(&env, "bid placed", listing_id, bidder, amount);
        events::emit_bid_placed(&env, listing_id, bidder, amount);

        Ok(())
    }

    /// Settle an auction. On failure the instance stays Active and the call
    /// can be repeated.
    pub fn end_auction(env: Env, listing_id: u64, caller: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let (record, state) = Self::load_instance(&env, listing_id)?;
        let settlement = behavior::settle(&env, &record.implementation, &state, &caller)?;

        custody::release(&env, listing_id, &settlement.asset_recipient)?;

        let winner = match settlement.outcome {
            SettlementOutcome::Sold => {
                let winner = state
                    .highest_bidder
                    .clone()
                    .ok_or(Error::SettlementFailed)?;
                escrow::pay_out(&env, listing_id, &winner, &settlement.payee)?;
                Some(winner)
            }
            SettlementOutcome::Unsold | SettlementOutcome::Cancelled => None,
        };

        storage::set_state(&env, &settlement.next);

        log!(&env, "auction ended", listing_id, settlement.payout);
        events::emit_auction_ended(&env, listing_id, winner, settlement.payout);

        Ok(())
    }

    // ========== AUCTION VIEWS ==========

    pub fn get_auction_details(env: Env, listing_id: u64) -> Result<AuctionState, Error> {
        Self::require_initialized(&env)?;
        storage::get_state(&env, listing_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_bid_history(env: Env, listing_id: u64) -> Result<Vec<Bid>, Error> {
        Self::require_initialized(&env)?;
        Self::load_instance(&env, listing_id)?;
        Ok(storage::get_bid_history(&env, listing_id))
    }

    /// Amount the factory holds in escrow for `holder` on this listing
    pub fn escrowed(env: Env, listing_id: u64, holder: Address) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Self::load_instance(&env, listing_id)?;
        Ok(escrow::held(&env, listing_id, &holder))
    }

    /// Current holder of the listed asset
    pub fn asset_custodian(env: Env, listing_id: u64) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        custody::custodian(&env, listing_id)
    }

    /// Registry record for a listing
    pub fn auctions(env: Env, listing_id: u64) -> Result<AuctionRecord, Error> {
        Self::require_initialized(&env)?;
        Self::load_record(&env, listing_id)
    }

    /// Version reported by the behaviour currently driving a listing
    pub fn auction_version(env: Env, listing_id: u64) -> Result<u32, Error> {
        Self::require_initialized(&env)?;
        let record = Self::load_record(&env, listing_id)?;
        let info = behavior::validate_template(&env, &record.implementation)?;
        Ok(info.version)
    }

    // ========== TEMPLATE MANAGEMENT ==========

    /// Point later creations at `new_template`. Existing instances keep theirs.
    pub fn upgrade_template(env: Env, owner: Address, new_template: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &owner)?;

        behavior::validate_template(&env, &new_template)?;

        let old_template = storage::get_template(&env).ok_or(Error::NotInitialized)?;
        storage::set_template(&env, &new_template);
        storage::extend_instance_ttl(&env);

        log!(&env, "template upgraded", new_template);
        events::emit_template_upgraded(&env, owner, old_template, new_template);

        Ok(())
    }

    /// Repoint every instance, and later creations, at `new_implementation`.
    ///
    /// Records are not rewritten. Every listing up to the current counter
    /// resolves through the `Implementation` pointer from now on. Returns the
    /// number of instances repointed.
    pub fn upgrade_auction_implementation(
        env: Env,
        owner: Address,
        new_implementation: Address,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &owner)?;

        behavior::validate_template(&env, &new_implementation)?;

        let migrated = storage::get_auction_counter(&env);

        storage::set_migrated_through(&env, migrated);
        storage::set_implementation(&env, &new_implementation);
        storage::set_template(&env, &new_implementation);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction implementation upgraded", new_implementation, migrated);
        events::emit_implementation_upgraded(&env, owner, new_implementation, migrated);

        Ok(migrated)
    }

    pub fn template(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        storage::get_template(&env).ok_or(Error::NotInitialized)
    }

    pub fn auction_implementation(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        storage::get_implementation(&env).ok_or(Error::NotInitialized)
    }

    pub fn auction_count(env: Env) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_auction_counter(&env))
    }

    // ========== ACCESS CONTROL ==========

    pub fn owner(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        storage::get_owner(&env).ok_or(Error::NotInitialized)
    }

    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &owner)?;

        storage::set_owner(&env, &new_owner);

        events::emit_ownership_transferred(&env, owner, new_owner);

        Ok(())
    }

    /// Replace the factory's own code. Storage is kept.
    pub fn upgrade(env: Env, owner: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_owner(&env, &owner)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, owner: &Address) -> Result<(), Error> {
        owner.require_auth();
        let stored_owner = storage::get_owner(env).ok_or(Error::NotInitialized)?;
        if *owner != stored_owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Record with `implementation` resolved to the behaviour that drives it now.
    fn load_record(env: &Env, listing_id: u64) -> Result<AuctionRecord, Error> {
        let mut record = storage::get_auction(env, listing_id).ok_or(Error::AuctionNotFound)?;
        if listing_id <= storage::get_migrated_through(env) {
            record.implementation =
                storage::get_implementation(env).ok_or(Error::NotInitialized)?;
        }
        Ok(record)
    }

    fn load_instance(env: &Env, listing_id: u64) -> Result<(AuctionRecord, AuctionState), Error> {
        let record = Self::load_record(env, listing_id)?;
        let state = storage::get_state(env, listing_id).ok_or(Error::AuctionNotFound)?;
        Ok((record, state))
    }

    fn resolve_token(env: &Env, payment_token: &PaymentToken) -> Result<Address, Error> {
        match payment_token {
            PaymentToken::Native => storage::get_native_token(env).ok_or(Error::NotInitialized),
            PaymentToken::Token(token) => Ok(token.clone()),
        }
    }
}

#[cfg(test)]
mod test;
