use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, PoolConfig, PoolState};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Settlement token ---

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

pub fn has_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

// --- Pool Counter ---

pub fn get_pool_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PoolCounter)
        .unwrap_or(0)
}

pub fn set_pool_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::PoolCounter, &counter);
    extend_instance_ttl(env);
}

// --- Total vaulted across all pools ---

pub fn get_total_vaulted(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVaulted)
        .unwrap_or(0)
}

pub fn set_total_vaulted(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalVaulted, &total);
    extend_instance_ttl(env);
}

// --- Pool config ---

pub fn get_config(env: &Env, pool_id: u64) -> Option<PoolConfig> {
    let key = DataKey::Config(pool_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_config(env: &Env, pool_id: u64, config: &PoolConfig) {
    let key = DataKey::Config(pool_id);
    env.storage().persistent().set(&key, config);
    extend_persistent_ttl(env, &key);
}

// --- Pool state ---

pub fn get_state(env: &Env, pool_id: u64) -> Option<PoolState> {
    let key = DataKey::State(pool_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_state(env: &Env, pool_id: u64, state: &PoolState) {
    let key = DataKey::State(pool_id);
    env.storage().persistent().set(&key, state);
    extend_persistent_ttl(env, &key);
}

// --- Member pools ---

pub fn get_member_pools(env: &Env, member: &Address) -> Vec<u64> {
    let key = DataKey::MemberPools(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_member_pool(env: &Env, member: &Address, pool_id: u64) {
    let key = DataKey::MemberPools(member.clone());
    let mut pools = get_member_pools(env, member);
    pools.push_back(pool_id);
    env.storage().persistent().set(&key, &pools);
    extend_persistent_ttl(env, &key);
}

pub fn remove_member_pool(env: &Env, member: &Address, pool_id: u64) {
    let key = DataKey::MemberPools(member.clone());
    let pools = get_member_pools(env, member);
    let mut new_pools = Vec::new(env);
    for p in pools.iter() {
        if p != pool_id {
            new_pools.push_back(p);
        }
    }
    env.storage().persistent().set(&key, &new_pools);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
