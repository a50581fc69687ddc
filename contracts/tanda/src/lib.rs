#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod claim;
mod errors;
mod payment;
mod pool;
mod registry;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

#[contract]
pub struct TandaContract;

#[contractimpl]
impl TandaContract {
    /// Initialize the factory with the settlement token every pool uses.
    pub fn __constructor(env: Env, token: Address) {
        if storage::has_token(&env) {
            panic!("already initialized");
        }
        storage::set_token(&env, &token);
    }

    // ─── Pool Factory ───────────────────────────────────────────────

    /// Create a new rotating-savings pool. Members receive the pot in
    /// insertion order, one per cycle. The caller becomes the pool creator
    /// and administers membership.
    pub fn create_pool(
        env: Env,
        creator: Address,
        members: Vec<Address>,
        payment_amount: i128,
        payment_window: u64,
    ) -> Result<u64, ContractError> {
        pool::create_pool(&env, creator, members, payment_amount, payment_window)
    }

    /// Get pool details.
    pub fn get_pool(env: Env, pool_id: u64) -> Result<Pool, ContractError> {
        pool::get_pool(&env, pool_id)
    }

    /// Get all pool IDs an address currently belongs to.
    pub fn get_member_pools(env: Env, member: Address) -> Vec<u64> {
        pool::get_member_pools(&env, member)
    }

    /// Number of pools created so far.
    pub fn get_pool_count(env: Env) -> u64 {
        storage::get_pool_counter(&env)
    }

    /// The settlement token shared by every pool.
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    // ─── Participant Registry ───────────────────────────────────────

    /// Add a participant to the back of the rotation queue. Only the pool
    /// creator can call this.
    pub fn add_participant(
        env: Env,
        admin: Address,
        pool_id: u64,
        id: Address,
    ) -> Result<(), ContractError> {
        registry::add_participant(&env, admin, pool_id, id)
    }

    /// Remove a participant. Fails while the participant has a payment in
    /// the open cycle. Removal is not order-preserving: the last member
    /// takes the removed member's rotation slot.
    pub fn remove_participant(
        env: Env,
        admin: Address,
        pool_id: u64,
        id: Address,
    ) -> Result<(), ContractError> {
        registry::remove_participant(&env, admin, pool_id, id)
    }

    /// Check pool membership.
    pub fn is_member(env: Env, pool_id: u64, id: Address) -> Result<bool, ContractError> {
        registry::is_member(&env, pool_id, id)
    }

    /// Get the rotation queue.
    pub fn get_participants(env: Env, pool_id: u64) -> Result<Vec<Address>, ContractError> {
        registry::get_participants(&env, pool_id)
    }

    // ─── Payments ───────────────────────────────────────────────────

    /// Contribute to the current cycle while the payment window is open.
    pub fn pay(env: Env, payer: Address, pool_id: u64) -> Result<(), ContractError> {
        payment::pay(&env, payer, pool_id)
    }

    /// Mark a member as paid for a contribution that already reached the
    /// contract out of band. Restricted to the pool creator.
    pub fn pay_after_attested_transfer(
        env: Env,
        relayer: Address,
        pool_id: u64,
        payer: Address,
    ) -> Result<(), ContractError> {
        payment::pay_after_attested_transfer(&env, relayer, pool_id, payer)
    }

    /// Whether every current member has paid this cycle. Informational
    /// only; claiming never requires it.
    pub fn all_have_paid(env: Env, pool_id: u64) -> Result<bool, ContractError> {
        payment::all_have_paid(&env, pool_id)
    }

    /// Members still owing this cycle, in rotation order.
    pub fn get_unpaid_participants(
        env: Env,
        pool_id: u64,
    ) -> Result<Vec<Address>, ContractError> {
        payment::get_unpaid_participants(&env, pool_id)
    }

    // ─── Rotation / Claim ───────────────────────────────────────────

    /// Pay the entire pool vault to the current recipient and open the
    /// next cycle. Anyone can call this once the vault is positive.
    pub fn claim(env: Env, pool_id: u64) -> Result<(), ContractError> {
        claim::claim(&env, pool_id)
    }

    /// The member whose turn it is to receive the pot.
    pub fn get_current_recipient(env: Env, pool_id: u64) -> Result<Address, ContractError> {
        claim::get_current_recipient(&env, pool_id)
    }

    /// The pool's tracked share of the contract's token balance.
    pub fn get_vault_balance(env: Env, pool_id: u64) -> Result<i128, ContractError> {
        pool::get_vault_balance(&env, pool_id)
    }
}
