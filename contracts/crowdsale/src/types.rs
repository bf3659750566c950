use soroban_sdk::{contracttype, Address, Vec};

/// One pricing tier: `rate` token units per wei while cumulative raised
/// funds stay below `cap` (cumulative, in wei). A purchase landing exactly
/// on `cap` belongs to the next tier.
#[derive(Clone)]
#[contracttype]
pub struct SalePhase {
    pub rate: i128,
    pub cap: i128,
}

/// Where accepted payments and sold tokens go at purchase time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DeliveryMode {
    /// Mint to the beneficiary and forward funds to the treasury in the
    /// same call.
    Direct = 0,
    /// Record a pending credit and hold funds on the contract until the
    /// beneficiary is approved and forwarded.
    Escrowed = 1,
}

/// Which amount the foundation percentage is taken of at finalization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum FoundationBasis {
    /// The ledger's configured maximum supply.
    ConfiguredCap = 0,
    /// Tokens actually sold during the sale.
    ActualSold = 1,
}

/// Terminal lifecycle. The open/closed window is derived from the clock,
/// never stored; only the one-way finalization transition is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Active = 0,
    Finalized = 1,
}

/// Clock-derived view of the purchase window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleWindow {
    Pending = 0,
    Open = 1,
    Closed = 2,
}

/// Full sale configuration, written once by `initialize`.
#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    /// Capped mintable ledger being sold.
    pub token: Address,
    /// Base-currency token purchases are settled in.
    pub payment_token: Address,
    /// Receives accepted funds and, at finalization, ledger ownership.
    pub treasury: Address,
    /// Capability holder for approval and forwarding.
    pub distributor: Address,
    /// Tiered pricing, caps strictly increasing.
    pub phases: Vec<SalePhase>,
    /// Rate once every tier is exhausted and the final window is open.
    pub final_rate: i128,
    pub opening_time: u64,
    pub closing_time: u64,
    /// Start of the uncapped final phase.
    pub final_opening_time: u64,
    /// Maximum token units sellable to buyers.
    pub total_ico_cap: i128,
    pub foundation: Address,
    pub foundation_percentage: u32,
    pub foundation_basis: FoundationBasis,
    pub presale_wallet: Address,
    /// Fixed private-presale allocation minted at finalization.
    pub presale_allocation: i128,
    /// Vesting vault receiving the leftover pool.
    pub vault: Address,
    pub delivery: DeliveryMode,
}

/// Token units owed to a buyer but not yet minted, plus the escrowed
/// payment backing them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingCredit {
    pub token_units: i128,
    pub wei: i128,
}

/// Settlement receipt returned by `buy_tokens`. `accepted + refunded`
/// always equals the amount offered; only `accepted` is ever pulled from
/// the payer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub accepted: i128,
    pub refunded: i128,
    pub token_units: i128,
    pub rate: i128,
}

#[contracttype]
pub enum DataKey {
    // Singletons — instance storage
    Config,
    Status,
    WeiRaised,
    TokensSold,
    PendingTotal,

    // Pending ledger — persistent, whole map under one key so finalize
    // can sweep it
    Pending,

    // Approval whitelist — persistent
    Approved(Address),
}
