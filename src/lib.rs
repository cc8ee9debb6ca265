//! # Soroban Business Card
//!
//! Digital business cards on the Soroban blockchain.
//!
//! An account registers its card details once, then mints batches of card
//! units tied to those details and hands individual units out to other
//! accounts. The contract always knows:
//!
//! - how many units any account holds
//! - how many of its own units an issuer still holds
//! - who issued and who currently owns every unit
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register card details
//! client.register(&name, &email, &caller);
//!
//! // Mint a batch, paying the mint fee in the configured token
//! let ids = client.mint_batch(&uri, &client.config().mint_fee, &caller);
//!
//! // Hand one card out
//! client.transfer_one_unit(&recipient, &caller);
//! ```

#![no_std]

mod config;
mod events;
mod holdings;
mod ledger;
mod payment;
mod profile;
mod storage;
mod transfer;

pub use config::{
    CardConfig, BATCH_SIZE, DEFAULT_MINT_FEE, FIRST_UNIT_ID, MAX_BATCH_SIZE, MAX_UNITS_PAGE,
};
pub use ledger::{Unit, UnitInfo};
pub use payment::check_fee;
pub use profile::Profile;
pub use storage::CardKey;

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, BytesN, Env, String, Vec};

use crate::events::emit_config_changed;

/// Error codes for the business card contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CardError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    NotAuthorized = 3,
    /// Mint attempted by an account without a profile.
    NotRegistered = 4,
    /// No profile registered for the queried account.
    NotFound = 5,
    /// Profile already exists and overwriting is disabled.
    ProfileExists = 6,
    /// Attached payment is below the mint fee.
    InsufficientPayment = 7,
    /// Sender holds no units.
    InsufficientBalance = 8,
    /// Unit id was never minted.
    UnknownUnit = 9,
    /// Transfer target is the sender.
    SelfTransfer = 10,
    /// Configuration value out of range.
    InvalidConfig = 11,
}

#[contract]
pub struct BusinessCardContract;

#[contractimpl]
impl BusinessCardContract {
    // ========== Initialization ==========

    /// Initialize the contract with an admin and the token mint fees are paid in.
    ///
    /// This must be called once before any other operations.
    pub fn init(env: Env, admin: Address, fee_token: Address) -> Result<(), CardError> {
        if env.storage().instance().has(&CardKey::Admin) {
            return Err(CardError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&CardKey::Admin, &admin);
        config::store(&env, &CardConfig::new(fee_token));
        Ok(())
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Result<Address, CardError> {
        env.storage()
            .instance()
            .get(&CardKey::Admin)
            .ok_or(CardError::NotInitialized)
    }

    /// Get the current configuration.
    pub fn config(env: Env) -> Result<CardConfig, CardError> {
        config::load(&env)
    }

    // ========== Profiles ==========

    /// Register card details for `caller`.
    ///
    /// Re-registering overwrites the previous details unless the admin has
    /// disabled overwriting, in which case it fails with `ProfileExists`.
    pub fn register(
        env: Env,
        name: String,
        email: String,
        caller: Address,
    ) -> Result<Profile, CardError> {
        caller.require_auth();
        let config = config::load(&env)?;
        profile::register(&env, &config, &caller, name, email)
    }

    /// Get the card details of `account`.
    pub fn get_profile(env: Env, account: Address) -> Result<Profile, CardError> {
        profile::get(&env, &account)
    }

    /// Whether `account` has registered card details.
    pub fn has_profile(env: Env, account: Address) -> bool {
        profile::exists(&env, &account)
    }

    /// Number of accounts that have registered card details.
    pub fn profile_count(env: Env) -> u64 {
        storage::instance_counter(&env, &CardKey::ProfileCount, 0)
    }

    // ========== Issuance ==========

    /// Mint one batch of units to `caller`.
    ///
    /// `payment` is taken from `caller` in the fee token and must be at
    /// least the configured mint fee. Any excess is kept.
    ///
    /// # Returns
    /// The ids of the new units, ascending.
    ///
    /// # Errors
    /// - `InsufficientPayment` if `payment` is below the mint fee
    /// - `NotRegistered` if `caller` has no profile
    pub fn mint_batch(
        env: Env,
        uri: String,
        payment: i128,
        caller: Address,
    ) -> Result<Vec<u64>, CardError> {
        caller.require_auth();
        let config = config::load(&env)?;

        payment::check_fee(payment, config.mint_fee)?;
        if !profile::exists(&env, &caller) {
            return Err(CardError::NotRegistered);
        }

        payment::collect_fee(&env, &config, &caller, payment);
        ledger::mint_batch(&env, &config, &caller, uri)
    }

    /// Give one of the caller's units to `to`.
    ///
    /// The unit with the lowest id is moved. Returns its id.
    pub fn transfer_one_unit(env: Env, to: Address, caller: Address) -> Result<u64, CardError> {
        caller.require_auth();
        config::load(&env)?;
        transfer::transfer_one_unit(&env, &caller, &to)
    }

    // ========== Ledger Queries ==========

    /// Number of units held by `account` (0 if it never held any).
    pub fn balance_of(env: Env, account: Address) -> u64 {
        ledger::balance_of(&env, &account)
    }

    /// Number of units issued by `account` that it still holds.
    pub fn retained_by_issuer(env: Env, account: Address) -> u64 {
        ledger::retained_by_issuer(&env, &account)
    }

    /// Number of units ever minted by `issuer`.
    pub fn minted_by(env: Env, issuer: Address) -> u64 {
        ledger::minted_by(&env, &issuer)
    }

    /// Number of units minted so far.
    pub fn total_supply(env: Env) -> u64 {
        ledger::total_supply(&env)
    }

    /// Up to `limit` ids of the units held by `account`, from holding slot `start`.
    ///
    /// The first id of the page at `start == 0` is the lowest id held, which
    /// is the unit the next transfer moves. Other ids are in no particular
    /// order. Pages hold at most `MAX_UNITS_PAGE` ids.
    pub fn units_of(env: Env, account: Address, start: u64, limit: u32) -> Vec<u64> {
        ledger::units_of(&env, &account, start, limit)
    }

    /// Current owner and issuer of a unit.
    pub fn owner_and_issuer_of(env: Env, unit_id: u64) -> Result<(Address, Address), CardError> {
        ledger::owner_and_issuer_of(&env, unit_id)
    }

    /// Owner, issuer and metadata URI of a unit.
    pub fn unit_info(env: Env, unit_id: u64) -> Result<UnitInfo, CardError> {
        ledger::unit(&env, unit_id).map(UnitInfo::from)
    }

    /// Total mint fees taken so far, in fee token units.
    pub fn fees_collected(env: Env) -> i128 {
        payment::fees_collected(&env)
    }

    // ========== Admin Functions ==========

    /// Set the mint fee (admin only).
    pub fn set_mint_fee(env: Env, fee: i128, caller: Address) -> Result<(), CardError> {
        Self::require_admin(&env, &caller)?;
        if fee < 0 {
            return Err(CardError::InvalidConfig);
        }

        let mut config = config::load(&env)?;
        config.mint_fee = fee;
        config::store(&env, &config);
        log!(&env, "mint fee changed", fee);
        emit_config_changed(&env, "mint_fee");
        Ok(())
    }

    /// Set the number of units per mint (admin only).
    pub fn set_batch_size(env: Env, size: u32, caller: Address) -> Result<(), CardError> {
        Self::require_admin(&env, &caller)?;
        if size == 0 || size > MAX_BATCH_SIZE {
            return Err(CardError::InvalidConfig);
        }

        let mut config = config::load(&env)?;
        config.batch_size = size;
        config::store(&env, &config);
        log!(&env, "batch size changed", size);
        emit_config_changed(&env, "batch_size");
        Ok(())
    }

    /// Allow or forbid re-registering card details (admin only).
    pub fn set_profile_overwrite(env: Env, allow: bool, caller: Address) -> Result<(), CardError> {
        Self::require_admin(&env, &caller)?;

        let mut config = config::load(&env)?;
        config.allow_profile_overwrite = allow;
        config::store(&env, &config);
        log!(&env, "profile overwrite changed", allow);
        emit_config_changed(&env, "profile_overwrite");
        Ok(())
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), CardError> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== Internal Helpers ==========

    fn require_admin(env: &Env, caller: &Address) -> Result<(), CardError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&CardKey::Admin)
            .ok_or(CardError::NotInitialized)?;

        if *caller != admin {
            return Err(CardError::NotAuthorized);
        }

        caller.require_auth();
        Ok(())
    }
}
