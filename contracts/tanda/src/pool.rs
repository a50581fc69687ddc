use soroban_sdk::{symbol_short, Address, Env, Map, Vec};

use crate::errors::ContractError;
use crate::storage;
use crate::types::{Pool, PoolConfig, PoolState};

pub fn create_pool(
    env: &Env,
    creator: Address,
    members: Vec<Address>,
    payment_amount: i128,
    payment_window: u64,
) -> Result<u64, ContractError> {
    creator.require_auth();

    if payment_amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if payment_window == 0 {
        return Err(ContractError::InvalidWindow);
    }
    if members.is_empty() {
        return Err(ContractError::EmptyMembers);
    }

    let mut membership = Map::new(env);
    for m in members.iter() {
        if membership.contains_key(m.clone()) {
            return Err(ContractError::DuplicateMember);
        }
        membership.set(m, true);
    }

    let pool_id = storage::get_pool_counter(env) + 1;
    storage::set_pool_counter(env, pool_id);

    let config = PoolConfig {
        creator: creator.clone(),
        payment_amount,
        payment_window,
    };
    let state = PoolState {
        members: members.clone(),
        membership,
        paid: Map::new(env),
        recipient_cursor: 0,
        cycle: 1,
        cycle_start: env.ledger().timestamp(),
        vault: 0,
    };

    storage::set_config(env, pool_id, &config);
    storage::set_state(env, pool_id, &state);
    for m in members.iter() {
        storage::add_member_pool(env, &m, pool_id);
    }

    env.events().publish(
        (symbol_short!("pool_new"),),
        (pool_id, creator, members, payment_amount, payment_window),
    );

    Ok(pool_id)
}

pub fn get_pool(env: &Env, pool_id: u64) -> Result<Pool, ContractError> {
    let config = load_config(env, pool_id)?;
    let state = load_state(env, pool_id)?;
    Ok(Pool {
        id: pool_id,
        creator: config.creator,
        payment_amount: config.payment_amount,
        payment_window: config.payment_window,
        members: state.members,
        recipient_cursor: state.recipient_cursor,
        cycle: state.cycle,
        cycle_start: state.cycle_start,
        vault: state.vault,
    })
}

pub fn get_vault_balance(env: &Env, pool_id: u64) -> Result<i128, ContractError> {
    Ok(load_state(env, pool_id)?.vault)
}

pub fn get_member_pools(env: &Env, member: Address) -> Vec<u64> {
    storage::get_member_pools(env, &member)
}

pub(crate) fn load_config(env: &Env, pool_id: u64) -> Result<PoolConfig, ContractError> {
    storage::get_config(env, pool_id).ok_or(ContractError::PoolNotFound)
}

pub(crate) fn load_state(env: &Env, pool_id: u64) -> Result<PoolState, ContractError> {
    storage::get_state(env, pool_id).ok_or(ContractError::PoolNotFound)
}
