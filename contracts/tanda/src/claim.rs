use soroban_sdk::{symbol_short, token, Address, Env, Map};

use crate::errors::ContractError;
use crate::pool;
use crate::storage;

/// Settles the current cycle: pays the entire pool vault to the member at
/// the rotation cursor, resets the paid flags and opens the next cycle.
///
/// Anyone may call this, and no completeness check is applied: a pool may
/// be claimed before every member has paid (e.g. once the window lapsed
/// with stragglers). The only precondition is a positive vault.
pub fn claim(env: &Env, pool_id: u64) -> Result<(), ContractError> {
    let mut state = pool::load_state(env, pool_id)?;

    let amount = state.vault;
    if amount <= 0 {
        return Err(ContractError::NothingToClaim);
    }

    // The registry keeps the cursor in range, so the lookup cannot miss.
    let recipient = state.members.get(state.recipient_cursor).unwrap();

    let token_client = token::Client::new(env, &storage::get_token(env));
    match token_client.try_transfer(&env.current_contract_address(), &recipient, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(ContractError::TransferFailed),
    }

    let settled_cycle = state.cycle;

    state.paid = Map::new(env);
    state.recipient_cursor = (state.recipient_cursor + 1) % state.members.len();
    state.cycle += 1;
    state.cycle_start = env.ledger().timestamp();
    state.vault = 0;
    storage::set_state(env, pool_id, &state);
    storage::set_total_vaulted(env, storage::get_total_vaulted(env) - amount);

    env.events().publish(
        (symbol_short!("payout"),),
        (pool_id, recipient, amount, settled_cycle),
    );
    env.events()
        .publish((symbol_short!("cycle_new"),), (pool_id, state.cycle));

    Ok(())
}

pub fn get_current_recipient(env: &Env, pool_id: u64) -> Result<Address, ContractError> {
    let state = pool::load_state(env, pool_id)?;
    Ok(state.members.get(state.recipient_cursor).unwrap())
}
