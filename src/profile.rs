//! Profile struct and the registry operations over it.

use soroban_sdk::{contracttype, log, Address, Env, String};

use crate::config::CardConfig;
use crate::events::emit_card_registered;
use crate::storage::{self, CardKey};
use crate::CardError;

/// Identity metadata printed on a business card.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Account the profile belongs to.
    pub owner: Address,

    /// Display name (stored verbatim).
    pub name: String,

    /// Contact email (stored verbatim).
    pub email: String,

    /// Ledger sequence of the first registration.
    pub registered_at: u64,

    /// Ledger sequence of the latest registration.
    pub updated_at: u64,
}

impl Profile {
    /// Create a new profile.
    pub fn new(owner: Address, name: String, email: String, registered_at: u64) -> Self {
        Self {
            owner,
            name,
            email,
            registered_at,
            updated_at: registered_at,
        }
    }
}

/// Store or overwrite the profile of `owner`.
pub fn register(
    env: &Env,
    config: &CardConfig,
    owner: &Address,
    name: String,
    email: String,
) -> Result<Profile, CardError> {
    let key = CardKey::Profile(owner.clone());
    let now = env.ledger().sequence() as u64;

    let profile = match env.storage().persistent().get::<_, Profile>(&key) {
        Some(_) if !config.allow_profile_overwrite => return Err(CardError::ProfileExists),
        Some(mut existing) => {
            existing.name = name;
            existing.email = email;
            existing.updated_at = now;
            existing
        }
        None => {
            let count = storage::instance_counter(env, &CardKey::ProfileCount, 0);
            env.storage()
                .instance()
                .set(&CardKey::ProfileCount, &(count + 1));
            Profile::new(owner.clone(), name, email, now)
        }
    };

    storage::put(env, &key, &profile);
    log!(env, "profile registered", owner);
    emit_card_registered(env, owner);

    Ok(profile)
}

/// Look up the profile of `account`.
pub fn get(env: &Env, account: &Address) -> Result<Profile, CardError> {
    env.storage()
        .persistent()
        .get(&CardKey::Profile(account.clone()))
        .ok_or(CardError::NotFound)
}

/// Whether `account` has ever registered a profile.
pub fn exists(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&CardKey::Profile(account.clone()))
}
