use soroban_sdk::{contracterror, contracttype};

/// Error codes are grouped in blocks of ten, one block per category.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidStageTransition = 4,
    Overflow = 5,
    InvalidAmount = 6,

    PreSaleNotStarted = 10,
    PreSaleEnded = 11,
    SaleNotStarted = 12,
    SaleEnded = 13,

    BelowMinimum = 20,
    AboveMaximum = 21,
    AggregateLimitReached = 22,
    TransferRejected = 23,
    InsufficientSupply = 24,

    LengthMismatch = 30,
    AllocationLimitReached = 31,

    SaleNotEnded = 40,

    Unauthorized = 50,
    NotEnded = 51,
    AlreadyFinalized = 52,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum ErrorCategory {
    Lifecycle = 0,
    Stage = 1,
    Contribution = 2,
    Allocation = 3,
    Distribution = 4,
    Finalization = 5,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            10..=19 => ErrorCategory::Stage,
            20..=29 => ErrorCategory::Contribution,
            30..=39 => ErrorCategory::Allocation,
            40..=49 => ErrorCategory::Distribution,
            50..=59 => ErrorCategory::Finalization,
            _ => ErrorCategory::Lifecycle,
        }
    }
}
