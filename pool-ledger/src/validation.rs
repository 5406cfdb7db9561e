use shared::{errors::Error, types::Amount};
use soroban_sdk::Address;

use crate::types::{Pool, PoolConfig, PoolState};

/// Validate that the caller is the pool manager
pub fn require_manager(config: &PoolConfig, caller: &Address) -> Result<(), Error> {
    if config.manager == *caller {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

pub fn require_active(pool: &Pool) -> Result<(), Error> {
    if pool.state == PoolState::Active {
        Ok(())
    } else {
        Err(Error::InvalidState)
    }
}

pub fn require_min_investment(config: &PoolConfig, amount: Amount) -> Result<(), Error> {
    if amount < config.min_investment {
        return Err(Error::BelowMinimum);
    }
    Ok(())
}

pub fn require_positive(amount: Amount) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}
