use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::errors::ContractError;
use crate::pool;
use crate::storage;

pub fn add_participant(
    env: &Env,
    admin: Address,
    pool_id: u64,
    id: Address,
) -> Result<(), ContractError> {
    admin.require_auth();

    let config = pool::load_config(env, pool_id)?;
    if admin != config.creator {
        return Err(ContractError::Unauthorized);
    }

    let mut state = pool::load_state(env, pool_id)?;
    if state.membership.contains_key(id.clone()) {
        return Err(ContractError::AlreadyRegistered);
    }

    // New members join the back of the rotation queue.
    state.members.push_back(id.clone());
    state.membership.set(id.clone(), true);
    storage::set_state(env, pool_id, &state);
    storage::add_member_pool(env, &id, pool_id);

    env.events()
        .publish((symbol_short!("part_add"),), (pool_id, id));

    Ok(())
}

/// Removes a member using swap-with-last-and-pop: the last member inherits
/// the vacated rotation slot. Removal is therefore NOT order-preserving;
/// this is a compatibility-mandated policy, not an accident.
pub fn remove_participant(
    env: &Env,
    admin: Address,
    pool_id: u64,
    id: Address,
) -> Result<(), ContractError> {
    admin.require_auth();

    let config = pool::load_config(env, pool_id)?;
    if admin != config.creator {
        return Err(ContractError::Unauthorized);
    }

    let mut state = pool::load_state(env, pool_id)?;
    let idx = state
        .members
        .first_index_of(&id)
        .ok_or(ContractError::NotAMember)?;

    // A member who already funded the open cycle stays until it settles.
    if state.paid.contains_key(id.clone()) {
        return Err(ContractError::HasUnclaimedPayment);
    }

    // The rotation cursor divides by member count; an empty pool is a
    // terminal state we refuse to enter.
    if state.members.len() == 1 {
        return Err(ContractError::LastMember);
    }

    let last = state.members.last().unwrap();
    state.members.set(idx, last);
    state.members.pop_back();
    state.membership.remove(id.clone());

    // If the cursor pointed at the vacated tail slot, wrap it so it stays
    // a valid index.
    if state.recipient_cursor >= state.members.len() {
        state.recipient_cursor = 0;
    }

    storage::set_state(env, pool_id, &state);
    storage::remove_member_pool(env, &id, pool_id);

    env.events()
        .publish((symbol_short!("part_rem"),), (pool_id, id));

    Ok(())
}

pub fn is_member(env: &Env, pool_id: u64, id: Address) -> Result<bool, ContractError> {
    let state = pool::load_state(env, pool_id)?;
    Ok(state.membership.contains_key(id))
}

pub fn get_participants(env: &Env, pool_id: u64) -> Result<Vec<Address>, ContractError> {
    Ok(pool::load_state(env, pool_id)?.members)
}
