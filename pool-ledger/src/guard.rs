use shared::errors::Error;
use soroban_sdk::Env;

use crate::storage;

/// Pool-wide in-flight lock for mutating operations.
///
/// Held for the lifetime of the value and released on drop, so every
/// exit path of the owning operation clears it.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if storage::is_locked(env) {
            return Err(Error::Reentrancy);
        }
        storage::set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        storage::set_locked(self.env, false);
    }
}
