use shared::{
    events::{
        CONTRIBUTION_RECEIVED, DIVIDENDS_ADDED, DIVIDEND_DISTRIBUTED, POOL_CLOSED,
        POOL_INITIALIZED,
    },
    types::Amount,
};
use soroban_sdk::{Address, Env};

pub fn emit_initialized_event(env: &Env, manager: &Address, token: &Address) {
    env.events()
        .publish((POOL_INITIALIZED,), (manager.clone(), token.clone()));
}

pub fn emit_contribution_event(env: &Env, identity: &Address, amount: Amount) {
    env.events()
        .publish((CONTRIBUTION_RECEIVED,), (identity.clone(), amount));
}

pub fn emit_dividends_added_event(env: &Env, amount: Amount) {
    env.events().publish((DIVIDENDS_ADDED,), amount);
}

pub fn emit_dividend_distributed_event(env: &Env, identity: &Address, amount: Amount) {
    env.events()
        .publish((DIVIDEND_DISTRIBUTED,), (identity.clone(), amount));
}

pub fn emit_pool_closed_event(env: &Env) {
    env.events().publish((POOL_CLOSED,), ());
}
