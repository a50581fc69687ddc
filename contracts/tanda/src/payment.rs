use soroban_sdk::{symbol_short, token, Address, Env, Vec};

use crate::errors::ContractError;
use crate::pool;
use crate::storage;
use crate::types::{PoolConfig, PoolState};

pub fn pay(env: &Env, payer: Address, pool_id: u64) -> Result<(), ContractError> {
    payer.require_auth();

    let config = pool::load_config(env, pool_id)?;
    let mut state = pool::load_state(env, pool_id)?;

    check_payment(env, &config, &state, &payer)?;

    // Pull the contribution; the paid flag is only set once the token
    // reports success.
    let token_client = token::Client::new(env, &storage::get_token(env));
    match token_client.try_transfer(
        &payer,
        &env.current_contract_address(),
        &config.payment_amount,
    ) {
        Ok(Ok(())) => {}
        _ => return Err(ContractError::TransferFailed),
    }

    state.paid.set(payer.clone(), true);
    state.vault += config.payment_amount;
    storage::set_state(env, pool_id, &state);
    storage::set_total_vaulted(
        env,
        storage::get_total_vaulted(env) + config.payment_amount,
    );

    env.events().publish(
        (symbol_short!("pay_recv"),),
        (pool_id, payer, config.payment_amount, state.cycle),
    );

    Ok(())
}

/// Acknowledges a contribution that already arrived out of band (e.g. a
/// signature-based transfer executed before this call). Only the pool
/// creator may attest, acting as the trusted relayer: nothing binds the
/// received funds to the named payer beyond the relayer's word.
pub fn pay_after_attested_transfer(
    env: &Env,
    relayer: Address,
    pool_id: u64,
    payer: Address,
) -> Result<(), ContractError> {
    relayer.require_auth();

    let config = pool::load_config(env, pool_id)?;
    if relayer != config.creator {
        return Err(ContractError::Unauthorized);
    }

    let mut state = pool::load_state(env, pool_id)?;
    check_payment(env, &config, &state, &payer)?;

    // The token balance is ground truth: the contract must hold at least
    // one contribution beyond everything already attributed to a pool.
    let token_client = token::Client::new(env, &storage::get_token(env));
    let held = token_client.balance(&env.current_contract_address());
    if held - storage::get_total_vaulted(env) < config.payment_amount {
        return Err(ContractError::InsufficientAttestedFunds);
    }

    state.paid.set(payer.clone(), true);
    state.vault += config.payment_amount;
    storage::set_state(env, pool_id, &state);
    storage::set_total_vaulted(
        env,
        storage::get_total_vaulted(env) + config.payment_amount,
    );

    env.events().publish(
        (symbol_short!("pay_recv"),),
        (pool_id, payer, config.payment_amount, state.cycle),
    );

    Ok(())
}

pub fn all_have_paid(env: &Env, pool_id: u64) -> Result<bool, ContractError> {
    let state = pool::load_state(env, pool_id)?;
    for m in state.members.iter() {
        if !state.paid.contains_key(m) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Members who have not yet paid this cycle, in rotation order.
pub fn get_unpaid_participants(env: &Env, pool_id: u64) -> Result<Vec<Address>, ContractError> {
    let state = pool::load_state(env, pool_id)?;
    let mut unpaid = Vec::new(env);
    for m in state.members.iter() {
        if !state.paid.contains_key(m.clone()) {
            unpaid.push_back(m);
        }
    }
    Ok(unpaid)
}

fn check_payment(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    payer: &Address,
) -> Result<(), ContractError> {
    if !state.membership.contains_key(payer.clone()) {
        return Err(ContractError::NotAMember);
    }
    if state.paid.contains_key(payer.clone()) {
        return Err(ContractError::AlreadyPaid);
    }
    if env.ledger().timestamp() >= state.cycle_start + config.payment_window {
        return Err(ContractError::WindowExpired);
    }
    Ok(())
}
