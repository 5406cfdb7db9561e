use shared::types::Amount;
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolState {
    Active = 0,
    Closed = 1,
}

/// Deployment-time settings, fixed for the pool's lifetime
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub manager: Address,
    pub token: Address,
    pub min_investment: Amount,
    pub created_at: u64,
}

/// Mutable pool-wide totals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub total_contributions: Amount,
    pub total_dividends: Amount, // funded, not yet paid out
    pub state: PoolState,
}

/// Per-participant ledger entry. Presence in storage is the registration flag.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub contribution: Amount,
    pub ownership_percentage: u32,
    pub last_dividends_claimed: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantInfo {
    pub identity: Address,
    pub contribution: Amount,
    pub ownership_percentage: u32,
    pub last_dividends_claimed: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolMetrics {
    pub total_contributions: Amount,
    pub total_dividends: Amount,
    pub participant_count: u32,
    pub state: PoolState,
    pub custody_balance: Amount,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,                // -> PoolConfig
    Pool,                  // -> Pool
    Lock,                  // in-flight guard flag
    Participants,          // -> Vec<Address>, first-contribution order
    Participant(Address),  // identity -> Participant
}
