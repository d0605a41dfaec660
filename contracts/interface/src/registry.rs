use soroban_sdk::{contractclient, Address, Env};

/// Minimal non-fungible registry surface consumed for custody moves.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistryInterface {
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Moves `asset_id` from `from` to `to`; requires `from` to authorize.
    fn transfer(env: Env, from: Address, to: Address, asset_id: u64);
}
