use crate::storage;
use soroban_sdk::Env;

/// Only the factory this template was built for may drive it.
pub fn require_factory(env: &Env) {
    storage::get_factory(env).require_auth();
}
