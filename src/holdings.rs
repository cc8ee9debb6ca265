//! Per-account holdings kept as a binary min-heap in persistent storage.
//!
//! Each heap slot is its own `CardKey::HeldUnit` entry and the account's
//! `CardKey::Balance` counter is the heap length. Pushing or popping one
//! unit touches O(log n) small entries, so the cost of a mint or transfer
//! stays bounded however many units an account holds. Slot 0 is always
//! the lowest id the account owns.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::{self, CardKey};
use crate::CardError;

/// Number of units held by `owner`, which is also the heap length.
pub fn len(env: &Env, owner: &Address) -> u64 {
    storage::counter(env, &CardKey::Balance(owner.clone()))
}

/// Lowest unit id held by `owner`, if any.
pub fn lowest(env: &Env, owner: &Address) -> Option<u64> {
    read(env, owner, 0).ok()
}

/// Add `unit_id` to the holdings of `owner`.
pub fn push(env: &Env, owner: &Address, unit_id: u64) -> Result<(), CardError> {
    let size = len(env, owner);
    let mut index = size;

    while index > 0 {
        let parent = (index - 1) / 2;
        let parent_id = read(env, owner, parent)?;
        if parent_id <= unit_id {
            break;
        }
        write(env, owner, index, parent_id);
        index = parent;
    }
    write(env, owner, index, unit_id);

    storage::put(env, &CardKey::Balance(owner.clone()), &(size + 1));
    Ok(())
}

/// Remove and return the lowest unit id held by `owner`.
pub fn pop_lowest(env: &Env, owner: &Address) -> Result<u64, CardError> {
    let size = len(env, owner);
    if size == 0 {
        return Err(CardError::InsufficientBalance);
    }

    let lowest = read(env, owner, 0)?;
    let last_index = size - 1;
    let last = read(env, owner, last_index)?;
    env.storage()
        .persistent()
        .remove(&CardKey::HeldUnit(owner.clone(), last_index));

    if last_index > 0 {
        // Sift `last` down from the root over the remaining `last_index` slots.
        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            if left >= last_index {
                break;
            }
            let right = left + 1;
            let mut child = left;
            let mut child_id = read(env, owner, left)?;
            if right < last_index {
                let right_id = read(env, owner, right)?;
                if right_id < child_id {
                    child = right;
                    child_id = right_id;
                }
            }
            if child_id >= last {
                break;
            }
            write(env, owner, index, child_id);
            index = child;
        }
        write(env, owner, index, last);
    }

    storage::put(env, &CardKey::Balance(owner.clone()), &last_index);
    Ok(lowest)
}

/// Up to `limit` held unit ids starting at heap slot `start`.
///
/// Ids come back in heap order: the first slot is the lowest id, the rest
/// are not sorted.
pub fn page(env: &Env, owner: &Address, start: u64, limit: u32) -> Vec<u64> {
    let end = len(env, owner).min(start.saturating_add(limit as u64));
    let mut ids = Vec::new(env);
    for index in start..end {
        if let Ok(id) = read(env, owner, index) {
            ids.push_back(id);
        }
    }
    ids
}

fn read(env: &Env, owner: &Address, index: u64) -> Result<u64, CardError> {
    env.storage()
        .persistent()
        .get(&CardKey::HeldUnit(owner.clone(), index))
        .ok_or(CardError::UnknownUnit)
}

fn write(env: &Env, owner: &Address, index: u64, unit_id: u64) {
    storage::put(env, &CardKey::HeldUnit(owner.clone(), index), &unit_id);
}
