use crate::types::Amount;

/// Decimal places of the base currency (Stellar native precision)
pub const TOKEN_DECIMALS: u32 = 7;

/// One whole unit of the base currency in its smallest denomination
pub const UNIT: Amount = 10i128.pow(TOKEN_DECIMALS);

/// Smallest accepted contribution: 0.01 of a unit
pub const MIN_INVESTMENT: Amount = UNIT / 100;

/// Ownership is tracked in whole percent
pub const PERCENT_DENOMINATOR: Amount = 100;

// Storage TTL management (ledgers close roughly every 5 seconds)
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
