#![no_std]
use shared::{constants::MIN_INVESTMENT, errors::Error, types::Amount};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};

mod accounting;
mod events;
mod guard;
mod settlement;
mod storage;
mod types;
mod validation;


use crate::{
    accounting::{plan_distribution, recompute_ownership},
    events::*,
    guard::ReentrancyGuard,
    storage::*,
};
pub use crate::types::{Participant, ParticipantInfo, Pool, PoolConfig, PoolMetrics, PoolState};

contractmeta!(key = "name", val = "Pool Ledger Contract");

#[contract]
pub struct PoolLedger;

#[contractimpl]
impl PoolLedger {
    /// Create the pool with a fixed manager and settlement token
    ///
    /// # Arguments
    /// * `manager` - Address holding the manager role for the pool's lifetime
    /// * `token` - Settlement token used for contributions and dividends
    pub fn initialize(env: Env, manager: Address, token: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        manager.require_auth();

        let config = PoolConfig {
            manager: manager.clone(),
            token: token.clone(),
            min_investment: MIN_INVESTMENT,
            created_at: env.ledger().timestamp(),
        };
        set_config(&env, &config);
        set_pool(
            &env,
            &Pool {
                total_contributions: 0,
                total_dividends: 0,
                state: PoolState::Active,
            },
        );
        set_participants(&env, &Vec::new(&env));

        emit_initialized_event(&env, &manager, &token);

        Ok(())
    }

    /// Contribute funds and recompute every participant's ownership
    ///
    /// # Arguments
    /// * `caller` - Contributing address; registered on first contribution
    /// * `amount` - Amount moved into pool custody
    ///
    /// # Errors
    /// * `Reentrancy` - Another mutating operation is in flight
    /// * `InvalidState` - Pool is closed
    /// * `BelowMinimum` - Amount is under the minimum investment
    /// * `TransferFailed` - Settlement token rejected the transfer
    pub fn contribute(env: Env, caller: Address, amount: Amount) -> Result<(), Error> {
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env)?;
        let mut pool = get_pool(&env)?;
        validation::require_active(&pool)?;
        validation::require_min_investment(&config, amount)?;

        settlement::collect(&env, &config.token, &caller, amount)?;

        let now = env.ledger().timestamp();
        let mut participant = match get_participant(&env, &caller) {
            Some(p) => p,
            None => {
                let mut order = get_participants(&env);
                order.push_back(caller.clone());
                set_participants(&env, &order);
                log!(&env, "participant registered", caller);
                Participant {
                    contribution: 0,
                    ownership_percentage: 0,
                    last_dividends_claimed: now,
                }
            }
        };

        participant.contribution = participant
            .contribution
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        pool.total_contributions = pool
            .total_contributions
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        set_participant(&env, &caller, &participant);
        set_pool(&env, &pool);
        recompute_ownership(&env, pool.total_contributions)?;

        emit_contribution_event(&env, &caller, amount);

        Ok(())
    }

    /// Fund dividends for the next distribution (manager only)
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the manager
    /// * `InvalidState` - Pool is closed
    /// * `InvalidAmount` - Amount is not positive
    pub fn add_dividends(env: Env, caller: Address, amount: Amount) -> Result<(), Error> {
        let config = get_config(&env)?;
        validation::require_manager(&config, &caller)?;
        caller.require_auth();

        let mut pool = get_pool(&env)?;
        validation::require_active(&pool)?;
        validation::require_positive(amount)?;

        settlement::collect(&env, &config.token, &caller, amount)?;

        pool.total_dividends = pool
            .total_dividends
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        set_pool(&env, &pool);

        emit_dividends_added_event(&env, amount);

        Ok(())
    }

    /// Pay funded dividends to participants pro rata (manager only)
    ///
    /// All payouts succeed or the whole call fails; a single rejecting
    /// recipient blocks the round for everyone.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the manager
    /// * `Reentrancy` - Another mutating operation is in flight
    /// * `InvalidState` - Pool is closed
    /// * `NothingToDistribute` - No dividends are funded
    /// * `InsufficientCustody` - Custody balance is below funded dividends
    /// * `TransferFailed` - A payout was rejected
    pub fn distribute_dividends(env: Env, caller: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        validation::require_manager(&config, &caller)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;

        let mut pool = get_pool(&env)?;
        validation::require_active(&pool)?;
        if pool.total_dividends <= 0 {
            return Err(Error::NothingToDistribute);
        }
        if settlement::custody_balance(&env, &config.token) < pool.total_dividends {
            return Err(Error::InsufficientCustody);
        }

        let plan = plan_distribution(&env, pool.total_dividends)?;
        let now = env.ledger().timestamp();

        for (identity, share) in plan.payouts.iter() {
            settlement::pay_out(&env, &config.token, &identity, share)?;

            let mut participant = get_participant(&env, &identity).ok_or(Error::NotFound)?;
            participant.last_dividends_claimed = now;
            set_participant(&env, &identity, &participant);

            emit_dividend_distributed_event(&env, &identity, share);
        }

        log!(
            &env,
            "dividends distributed",
            pool.total_dividends - plan.remaining,
            plan.remaining
        );
        pool.total_dividends = plan.remaining;
        set_pool(&env, &pool);

        Ok(())
    }

    /// Close the pool permanently (manager only)
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the manager
    /// * `InvalidState` - Pool is already closed
    /// * `PendingDividends` - Funded dividends have not been fully paid out
    pub fn close_pool(env: Env, caller: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        validation::require_manager(&config, &caller)?;
        caller.require_auth();

        let mut pool = get_pool(&env)?;
        validation::require_active(&pool)?;
        if pool.total_dividends != 0 {
            return Err(Error::PendingDividends);
        }

        pool.state = PoolState::Closed;
        set_pool(&env, &pool);

        emit_pool_closed_event(&env);

        Ok(())
    }

    // ==================== Queries ====================

    /// Get a participant's ledger entry
    pub fn get_participant_info(env: Env, identity: Address) -> Result<ParticipantInfo, Error> {
        let participant = get_participant(&env, &identity).ok_or(Error::NotFound)?;
        Ok(ParticipantInfo {
            identity,
            contribution: participant.contribution,
            ownership_percentage: participant.ownership_percentage,
            last_dividends_claimed: participant.last_dividends_claimed,
        })
    }

    /// Get pool-wide totals, participant count and lifecycle state
    pub fn get_pool_metrics(env: Env) -> Result<PoolMetrics, Error> {
        let config = get_config(&env)?;
        let pool = get_pool(&env)?;
        Ok(PoolMetrics {
            total_contributions: pool.total_contributions,
            total_dividends: pool.total_dividends,
            participant_count: get_participants(&env).len(),
            state: pool.state,
            custody_balance: settlement::custody_balance(&env, &config.token),
        })
    }

    /// Participant identities in first-contribution order
    pub fn get_participant_identities(env: Env) -> Vec<Address> {
        get_participants(&env)
    }

    pub fn is_participant(env: Env, identity: Address) -> bool {
        has_participant(&env, &identity)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        get_config(&env)
    }

    /// Settlement token balance currently held by the pool
    pub fn get_custody_balance(env: Env) -> Result<Amount, Error> {
        let config = get_config(&env)?;
        Ok(settlement::custody_balance(&env, &config.token))
    }

    /// Dry run of the next distribution: the payouts `distribute_dividends`
    /// would make right now, in order. Moves no value.
    pub fn preview_distribution(env: Env) -> Result<Vec<(Address, Amount)>, Error> {
        let pool = get_pool(&env)?;
        Ok(plan_distribution(&env, pool.total_dividends)?.payouts)
    }
}
