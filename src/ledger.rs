//! Unit issuance and holdings bookkeeping.
//!
//! Per account the ledger keeps the holdings heap (whose length is the
//! balance) and the retained counter: self-issued units the issuer still
//! holds and never gave away. Both move together with the unit records.

use soroban_sdk::{contracttype, log, Address, Env, String, Vec};

use crate::config::{CardConfig, FIRST_UNIT_ID, MAX_UNITS_PAGE};
use crate::events::emit_batch_minted;
use crate::holdings;
use crate::storage::{self, CardKey};
use crate::CardError;

/// A single business card unit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub id: u64,

    /// Account whose mint created this unit. Never changes.
    pub issuer: Address,

    /// Current holder.
    pub owner: Address,

    /// Metadata pointer shared by the whole batch.
    pub uri: String,

    /// True until the unit leaves its issuer for the first time.
    pub retained: bool,
}

/// Public view of a unit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitInfo {
    pub owner: Address,
    pub issuer: Address,
    pub uri: String,
}

impl From<Unit> for UnitInfo {
    fn from(unit: Unit) -> Self {
        Self {
            owner: unit.owner,
            issuer: unit.issuer,
            uri: unit.uri,
        }
    }
}

/// Create one batch of units owned and issued by `issuer`.
///
/// The caller is responsible for the profile and fee checks.
pub fn mint_batch(
    env: &Env,
    config: &CardConfig,
    issuer: &Address,
    uri: String,
) -> Result<Vec<u64>, CardError> {
    let count = config.batch_size as u64;
    let first_id = storage::instance_counter(env, &CardKey::NextUnitId, FIRST_UNIT_ID);

    let mut minted = Vec::new(env);
    for id in first_id..first_id + count {
        let unit = Unit {
            id,
            issuer: issuer.clone(),
            owner: issuer.clone(),
            uri: uri.clone(),
            retained: true,
        };
        storage::put(env, &CardKey::Unit(id), &unit);
        // Fresh ids exceed every held id, so each push lands on a leaf.
        holdings::push(env, issuer, id)?;
        minted.push_back(id);
    }

    let instance = env.storage().instance();
    instance.set(&CardKey::NextUnitId, &(first_id + count));
    let supply = storage::instance_counter(env, &CardKey::TotalSupply, 0);
    instance.set(&CardKey::TotalSupply, &(supply + count));

    add(env, CardKey::Retained(issuer.clone()), count);
    add(env, CardKey::MintedBy(issuer.clone()), count);

    log!(env, "batch minted", issuer, first_id, count);
    emit_batch_minted(env, issuer, first_id, config.batch_size, &uri);

    Ok(minted)
}

/// Units currently held by `account`.
pub fn balance_of(env: &Env, account: &Address) -> u64 {
    holdings::len(env, account)
}

pub fn retained_by_issuer(env: &Env, account: &Address) -> u64 {
    storage::counter(env, &CardKey::Retained(account.clone()))
}

pub fn minted_by(env: &Env, issuer: &Address) -> u64 {
    storage::counter(env, &CardKey::MintedBy(issuer.clone()))
}

/// Units minted across all issuers.
pub fn total_supply(env: &Env) -> u64 {
    storage::instance_counter(env, &CardKey::TotalSupply, 0)
}

/// One page of the unit ids held by `account`. The lowest id comes first.
pub fn units_of(env: &Env, account: &Address, start: u64, limit: u32) -> Vec<u64> {
    holdings::page(env, account, start, limit.min(MAX_UNITS_PAGE))
}

pub fn unit(env: &Env, unit_id: u64) -> Result<Unit, CardError> {
    env.storage()
        .persistent()
        .get(&CardKey::Unit(unit_id))
        .ok_or(CardError::UnknownUnit)
}

pub fn owner_and_issuer_of(env: &Env, unit_id: u64) -> Result<(Address, Address), CardError> {
    let unit = unit(env, unit_id)?;
    Ok((unit.owner, unit.issuer))
}

pub(crate) fn add(env: &Env, key: CardKey, amount: u64) {
    let value = storage::counter(env, &key);
    storage::put(env, &key, &(value + amount));
}

pub(crate) fn sub(env: &Env, key: CardKey, amount: u64, err: CardError) -> Result<(), CardError> {
    let value = storage::counter(env, &key).checked_sub(amount).ok_or(err)?;
    storage::put(env, &key, &value);
    Ok(())
}
