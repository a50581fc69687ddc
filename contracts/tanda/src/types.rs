use soroban_sdk::{contracttype, Address, Map, Vec};

/// Immutable pool economics, written once by `create_pool`.
///
/// Kept separate from the mutable cycle state so the frequent writes
/// (payments, claims) never rewrite the fixed parameters.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub creator: Address,
    pub payment_amount: i128,
    pub payment_window: u64,
}

/// Mutable cycle state, updated on payments, claims and membership changes.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Rotation queue; payout order is insertion order, subject to
    /// swap-with-last removal (see `registry::remove_participant`).
    pub members: Vec<Address>,
    /// Mirror of `members` for O(1) membership checks.
    pub membership: Map<Address, bool>,
    /// Paid flags for the current cycle only; an absent key means unpaid.
    /// Replaced wholesale on every claim.
    pub paid: Map<Address, bool>,
    /// Index into `members` naming the current cycle's payout target.
    pub recipient_cursor: u32,
    /// Cycle counter, starts at 1.
    pub cycle: u64,
    /// Ledger timestamp at which the current payment window opened.
    pub cycle_start: u64,
    /// This pool's share of the contract's token balance.
    pub vault: i128,
}

/// Full read model of a pool, reconstructed from the config/state split.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Pool {
    pub id: u64,
    pub creator: Address,
    pub payment_amount: i128,
    pub payment_window: u64,
    pub members: Vec<Address>,
    pub recipient_cursor: u32,
    pub cycle: u64,
    pub cycle_start: u64,
    pub vault: i128,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,
    PoolCounter,
    TotalVaulted,
    Config(u64),
    State(u64),
    MemberPools(Address),
}
