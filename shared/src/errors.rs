use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the manager role
    Unauthorized = 3,
    /// Operation not valid in the current pool lifecycle state
    InvalidState = 4,
    NotFound = 5,

    // Value constraints
    BelowMinimum = 6,
    InvalidAmount = 7,

    // Distribution errors
    InsufficientCustody = 8,
    NothingToDistribute = 9,
    PendingDividends = 10,
    TransferFailed = 11,

    /// A mutating operation is already in flight
    Reentrancy = 12,
}
