//! Event emission helpers for the business card contract.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when a profile is registered or re-registered.
pub fn emit_card_registered(env: &Env, owner: &Address) {
    let topics = (Symbol::new(env, "card_registered"),);
    env.events().publish(topics, owner.clone());
}

/// Emit an event when a batch of units is minted.
pub fn emit_batch_minted(env: &Env, issuer: &Address, first_id: u64, count: u32, uri: &String) {
    let topics = (Symbol::new(env, "batch_minted"), issuer.clone());
    env.events().publish(topics, (first_id, count, uri.clone()));
}

/// Emit an event when a unit changes hands.
pub fn emit_card_transferred(env: &Env, from: &Address, to: &Address, unit_id: u64) {
    let topics = (Symbol::new(env, "card_transferred"), from.clone(), to.clone());
    env.events().publish(topics, unit_id);
}

/// Emit an event when a mint fee is taken.
pub fn emit_fee_collected(env: &Env, payer: &Address, amount: i128) {
    let topics = (Symbol::new(env, "fee_collected"),);
    env.events().publish(topics, (payer.clone(), amount));
}

/// Emit an event when the admin changes a configuration value.
pub fn emit_config_changed(env: &Env, field: &str) {
    let topics = (Symbol::new(env, "config_changed"),);
    env.events().publish(topics, Symbol::new(env, field));
}
