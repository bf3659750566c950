use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    NotAuthorized = 3,

    // --- Configuration validation (4–7) ---
    InvalidTimeRange = 4,
    InvalidPhaseTable = 5,
    InvalidPercentage = 6,
    InvalidAmount = 7,

    // --- Purchase window and caps (8–10) ---
    SaleNotOpen = 8,
    ZeroPayment = 9,
    SaleClosedForPhase = 10,

    // --- Forwarding / finalization (11–13) ---
    ForwardingNotOpen = 11,
    SaleNotEnded = 12,
    AlreadyFinalized = 13,

    // --- Arithmetic (14) ---
    MathOverflow = 14,
}
