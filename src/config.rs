//! Protocol constants and runtime configuration.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::CardKey;
use crate::CardError;

/// Units created by a single mint call.
pub const BATCH_SIZE: u32 = 10;

/// Mint fee in stroops (0.01 of the native asset, 7 decimals).
pub const DEFAULT_MINT_FEE: i128 = 100_000;

/// Id assigned to the very first minted unit.
pub const FIRST_UNIT_ID: u64 = 1;

/// Largest batch the admin may configure.
pub const MAX_BATCH_SIZE: u32 = 100;

/// Most unit ids returned by one `units_of` call.
pub const MAX_UNITS_PAGE: u32 = 200;

/// Contract settings fixed at `init` and adjustable by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardConfig {
    /// Token contract that mint fees are paid in.
    pub fee_token: Address,

    /// Minimum payment accepted by a mint call, in fee token units.
    pub mint_fee: i128,

    /// Units created by each mint call.
    pub batch_size: u32,

    /// Whether an account may register its profile more than once.
    pub allow_profile_overwrite: bool,
}

impl CardConfig {
    /// Configuration with protocol defaults.
    pub fn new(fee_token: Address) -> Self {
        Self {
            fee_token,
            mint_fee: DEFAULT_MINT_FEE,
            batch_size: BATCH_SIZE,
            allow_profile_overwrite: true,
        }
    }
}

/// Load the configuration, failing if the contract was never initialized.
pub fn load(env: &Env) -> Result<CardConfig, CardError> {
    env.storage()
        .instance()
        .get(&CardKey::Config)
        .ok_or(CardError::NotInitialized)
}

/// Persist the configuration in instance storage.
pub fn store(env: &Env, config: &CardConfig) {
    env.storage().instance().set(&CardKey::Config, config);
}
