
use crate::{AuctionTemplate, AuctionTemplateClient};
use auction_interface::{AssetRef, AuctionState, PaymentToken};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env,
};

pub const RESERVE: i128 = 1_000;
pub const DURATION: u64 = 3_600;

pub struct Setup {
    pub env: Env,
    pub client: AuctionTemplateClient<'static>,
    pub factory: Address,
    pub seller: Address,
    pub asset: AssetRef,
}

pub fn setup_test() -> Setup {
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

    let factory = Address::generate(&env);
    let contract_id = env.register(AuctionTemplate, (factory.clone(), 1_u32));
    let client = AuctionTemplateClient::new(&env, &contract_id);

    let seller = Address::generate(&env);
    let asset = AssetRef {
        registry: Address::generate(&env),
        asset_id: 1,
    };

    Setup {
        env,
        client,
        factory,
        seller,
        asset,
    }
}

/// Opens listing 1 with the default reserve and duration.
pub fn open_default(s: &Setup) -> AuctionState {
    s.client.open(
        &1,
        &s.seller,
        &s.asset,
        &RESERVE,
        &DURATION,
        &PaymentToken::Native,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
