
use crate::{AuctionFactory, AuctionFactoryClient};
use auction_interface::{AssetRef, PaymentToken};
use auction_template::AuctionTemplate;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype,
    testutils::{Address as _, Ledger, LedgerInfo},
    token::{StellarAssetClient, TokenClient},
    Address, Env, MuxedAddress,
};

pub const RESERVE: i128 = 1_000_000;
pub const DURATION: u64 = 3_600;
pub const ASSET_ID: u64 = 7;

// ========== TEST COLLECTION ==========

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CollectionError {
    UnknownAsset = 1,
    NotOwner = 2,
    Frozen = 3,
}

#[contracttype]
#[derive(Clone)]
enum CollectionKey {
    Owner(u64),
    Frozen,
}

/// Non-fungible registry double. Transfers fail while frozen.
#[contract]
pub struct TestCollection;

#[contractimpl]
impl TestCollection {
    pub fn mint(env: Env, to: Address, asset_id: u64) {
        env.storage().instance().set(&CollectionKey::Owner(asset_id), &to);
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, CollectionError> {
        env.storage()
            .instance()
            .get(&CollectionKey::Owner(asset_id))
            .ok_or(CollectionError::UnknownAsset)
    }

    pub fn transfer(env: Env, from: Address, to: Address, asset_id: u64) -> Result<(), CollectionError> {
        if env.storage().instance().get(&CollectionKey::Frozen).unwrap_or(false) {
            return Err(CollectionError::Frozen);
        }
        from.require_auth();
        if Self::owner_of(env.clone(), asset_id)? != from {
            return Err(CollectionError::NotOwner);
        }
        env.storage().instance().set(&CollectionKey::Owner(asset_id), &to);
        Ok(())
    }

    pub fn freeze(env: Env, frozen: bool) {
        env.storage().instance().set(&CollectionKey::Frozen, &frozen);
    }
}

// ========== TEST TOKEN ==========

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TestTokenError {
    InsufficientBalance = 1,
    Blocked = 2,
}

#[contracttype]
#[derive(Clone)]
enum TestTokenKey {
    Balance(Address),
    Blocked(Address),
}

/// Fungible token double that can refuse transfers to chosen accounts.
#[contract]
pub struct TestToken;

#[contractimpl]
impl TestToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TestTokenKey::Balance(to), &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&TestTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: MuxedAddress, amount: i128) -> Result<(), TestTokenError> {
        from.require_auth();
        let to = to.address();
        if env.storage().instance().has(&TestTokenKey::Blocked(to.clone())) {
            return Err(TestTokenError::Blocked);
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(TestTokenError::InsufficientBalance);
        }
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TestTokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&TestTokenKey::Balance(to), &(to_balance + amount));
        Ok(())
    }

    pub fn block(env: Env, account: Address) {
        env.storage().instance().set(&TestTokenKey::Blocked(account), &true);
    }

    pub fn unblock(env: Env, account: Address) {
        env.storage().instance().remove(&TestTokenKey::Blocked(account));
    }
}

// ========== SETUP ==========

pub struct Setup {
    pub env: Env,
    pub factory: AuctionFactoryClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub native: StellarAssetClient<'static>,
    pub collection: TestCollectionClient<'static>,
    pub template: Address,
}

pub fn create_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 25,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    env
}

/// Initialized factory running a version 1 template, with `ASSET_ID` minted
/// to the seller.
pub fn setup_test() -> Setup {
    let env = create_env();

    let contract_id = env.register(AuctionFactory, ());
    let factory = AuctionFactoryClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let seller = Address::generate(&env);

    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let native = StellarAssetClient::new(&env, &sac.address());

    let placeholder = Address::generate(&env);
    factory.initialize(&owner, &placeholder, &native.address);

    let template = env.register(AuctionTemplate, (contract_id.clone(), 1_u32));
    factory.upgrade_template(&owner, &template);

    let collection_id = env.register(TestCollection, ());
    let collection = TestCollectionClient::new(&env, &collection_id);
    collection.mint(&seller, &ASSET_ID);

    Setup {
        env,
        factory,
        owner,
        seller,
        native,
        collection,
        template,
    }
}

impl Setup {
    pub fn asset(&self) -> AssetRef {
        AssetRef {
            registry: self.collection.address.clone(),
            asset_id: ASSET_ID,
        }
    }

    /// Lists `ASSET_ID` for the native token with the default terms.
    pub fn create_default(&self) -> u64 {
        self.factory.create_auction(
            &self.seller,
            &self.asset(),
            &RESERVE,
            &DURATION,
            &PaymentToken::Native,
        )
    }

    pub fn funded_bidder(&self, amount: i128) -> Address {
        let bidder = Address::generate(&self.env);
        self.native.mint(&bidder, &amount);
        bidder
    }

    pub fn native_balance(&self, id: &Address) -> i128 {
        TokenClient::new(&self.env, &self.native.address).balance(id)
    }

    pub fn custom_token(&self) -> Address {
        self.env.register(TestToken, ())
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
