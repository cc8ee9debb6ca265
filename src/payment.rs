//! Mint fee validation and collection.
//!
//! Fees are paid in the token configured at `init` (normally the native
//! asset contract). Overpayment is accepted and kept; nothing is refunded.

use soroban_sdk::{log, token, Address, Env};

use crate::config::CardConfig;
use crate::events::emit_fee_collected;
use crate::storage::CardKey;
use crate::CardError;

/// Check that `attached` covers `required`.
pub fn check_fee(attached: i128, required: i128) -> Result<(), CardError> {
    if attached < required || attached < 0 {
        return Err(CardError::InsufficientPayment);
    }
    Ok(())
}

/// Move `amount` of the fee token from `payer` into the contract.
///
/// Callers must run [`check_fee`] first.
pub fn collect_fee(env: &Env, config: &CardConfig, payer: &Address, amount: i128) {
    if amount == 0 {
        return;
    }

    token::Client::new(env, &config.fee_token).transfer(
        payer,
        &env.current_contract_address(),
        &amount,
    );

    let collected = fees_collected(env);
    env.storage()
        .instance()
        .set(&CardKey::FeesCollected, &(collected + amount));

    log!(env, "mint fee collected", payer, amount);
    emit_fee_collected(env, payer, amount);
}

/// Sum of every fee taken so far.
pub fn fees_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&CardKey::FeesCollected)
        .unwrap_or(0)
}
