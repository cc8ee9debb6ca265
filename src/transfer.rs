//! Moving a single unit between accounts.

use soroban_sdk::{log, Address, Env};

use crate::events::emit_card_transferred;
use crate::holdings;
use crate::ledger::{self, Unit};
use crate::storage::{self, CardKey};
use crate::CardError;

/// Move the lowest-id unit held by `from` to `to` and return its id.
///
/// A unit received back by its issuer is not counted as retained again.
pub fn transfer_one_unit(env: &Env, from: &Address, to: &Address) -> Result<u64, CardError> {
    if from == to {
        return Err(CardError::SelfTransfer);
    }
    let unit_id = holdings::lowest(env, from).ok_or(CardError::InsufficientBalance)?;
    let mut unit: Unit = ledger::unit(env, unit_id)?;
    if unit.owner != *from {
        return Err(CardError::UnknownUnit);
    }

    if unit.retained && unit.issuer == *from {
        ledger::sub(
            env,
            CardKey::Retained(from.clone()),
            1,
            CardError::InsufficientBalance,
        )?;
        unit.retained = false;
    }
    holdings::pop_lowest(env, from)?;
    holdings::push(env, to, unit_id)?;

    unit.owner = to.clone();
    storage::put(env, &CardKey::Unit(unit_id), &unit);

    log!(env, "card transferred", from, to, unit_id);
    emit_card_transferred(env, from, to, unit_id);

    Ok(unit_id)
}
