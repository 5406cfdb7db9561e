//! Value movement in and out of pool custody.
//!
//! The settlement token is trusted to be atomic per call: a transfer either
//! moves the full amount or fails without effect. Failures are reported as
//! `TransferFailed` so the calling operation aborts and the host rolls back
//! everything it did before the failing transfer.

use shared::{errors::Error, types::Amount};
use soroban_sdk::{token::TokenClient, Address, Env};

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), Error> {
    let client = TokenClient::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Pull `amount` from `from` into pool custody
pub fn collect(env: &Env, token: &Address, from: &Address, amount: Amount) -> Result<(), Error> {
    transfer(env, token, from, &env.current_contract_address(), amount)
}

/// Pay `amount` out of pool custody to `to`
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: Amount) -> Result<(), Error> {
    transfer(env, token, &env.current_contract_address(), to, amount)
}

pub fn custody_balance(env: &Env, token: &Address) -> Amount {
    TokenClient::new(env, token).balance(&env.current_contract_address())
}
