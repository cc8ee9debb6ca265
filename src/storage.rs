//! Storage key definitions for the business card contract.

use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};

/// Storage keys for the business card contract.
///
/// Contract-wide settings and counters live in instance storage; everything
/// keyed by an account or a unit id lives in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum CardKey {
    /// Contract administrator address.
    Admin,

    /// Runtime configuration (`CardConfig`).
    Config,

    /// Number of accounts with a registered profile.
    ProfileCount,

    /// Next unit id to hand out.
    NextUnitId,

    /// Total number of units minted so far.
    TotalSupply,

    /// Sum of all fees collected by mint calls.
    FeesCollected,

    /// Maps Address to Profile.
    Profile(Address),

    /// Maps unit id to Unit.
    Unit(u64),

    /// Number of units currently owned by an address.
    Balance(Address),

    /// Number of self-issued units an issuer still holds.
    Retained(Address),

    /// Slot of an address's holdings heap. Slot 0 holds its lowest unit id.
    HeldUnit(Address, u64),

    /// Number of units ever minted by an issuer.
    MintedBy(Address),
}

/// Time-to-live for card data in ledger entries.
pub const CARD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const CARD_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Write a persistent entry and extend its TTL.
pub fn put<V: IntoVal<Env, Val>>(env: &Env, key: &CardKey, value: &V) {
    let storage = env.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, CARD_TTL_THRESHOLD, CARD_TTL_EXTEND);
}

/// Read a persistent counter, defaulting to zero.
pub fn counter(env: &Env, key: &CardKey) -> u64 {
    env.storage().persistent().get(key).unwrap_or(0)
}

/// Read an instance counter, defaulting to `default`.
pub fn instance_counter(env: &Env, key: &CardKey, default: u64) -> u64 {
    env.storage().instance().get(key).unwrap_or(default)
}
