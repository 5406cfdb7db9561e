/// Token amount in the smallest denomination of the base currency
pub type Amount = i128;
