use soroban_sdk::{symbol_short, Symbol};

pub const POOL_INITIALIZED: Symbol = symbol_short!("init");
pub const CONTRIBUTION_RECEIVED: Symbol = symbol_short!("contrib");
pub const DIVIDENDS_ADDED: Symbol = symbol_short!("div_add");
pub const DIVIDEND_DISTRIBUTED: Symbol = symbol_short!("div_paid");
pub const POOL_CLOSED: Symbol = symbol_short!("closed");
