//! The factory as custodian of the listed asset.

use auction_interface::{AssetRef, AssetRegistryClient, Error};
use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::CustodyRecord;

fn owner_of(env: &Env, asset: &AssetRef) -> Option<Address> {
    let registry = AssetRegistryClient::new(env, &asset.registry);
    match registry.try_owner_of(&asset.asset_id) {
        Ok(Ok(owner)) => Some(owner),
        _ => None,
    }
}

/// Move `asset` from `from` into the factory's custody.
pub fn take(env: &Env, listing_id: u64, asset: &AssetRef, from: &Address) -> Result<(), Error> {
    // an unknown asset has no owner
    if owner_of(env, asset).as_ref() != Some(from) {
        return Err(Error::AssetNotOwned);
    }

    let custodian = env.current_contract_address();
    let registry = AssetRegistryClient::new(env, &asset.registry);
    match registry.try_transfer(from, &custodian, &asset.asset_id) {
        Ok(Ok(())) => {}
        _ => return Err(Error::CustodyTransferFailed),
    }

    if owner_of(env, asset) != Some(custodian) {
        return Err(Error::CustodyTransferFailed);
    }

    storage::set_custody(
        env,
        listing_id,
        &CustodyRecord {
            asset: asset.clone(),
            depositor: from.clone(),
            released_to: None,
        },
    );

    Ok(())
}

/// Hand the asset held for `listing_id` to `recipient`. Happens once.
pub fn release(env: &Env, listing_id: u64, recipient: &Address) -> Result<(), Error> {
    let mut record = storage::get_custody(env, listing_id).ok_or(Error::AuctionNotFound)?;
    if record.released_to.is_some() {
        return Err(Error::CustodyReleased);
    }

    let registry = AssetRegistryClient::new(env, &record.asset.registry);
    match registry.try_transfer(
        &env.current_contract_address(),
        recipient,
        &record.asset.asset_id,
    ) {
        Ok(Ok(())) => {}
        _ => return Err(Error::SettlementFailed),
    }

    record.released_to = Some(recipient.clone());
    storage::set_custody(env, listing_id, &record);

    Ok(())
}

/// Current holder of the listed asset.
pub fn custodian(env: &Env, listing_id: u64) -> Result<Address, Error> {
    let record = storage::get_custody(env, listing_id).ok_or(Error::AuctionNotFound)?;
    Ok(record
        .released_to
        .unwrap_or_else(|| env.current_contract_address()))
}
