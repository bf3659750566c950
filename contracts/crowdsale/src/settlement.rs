use crate::errors::Error;
use crate::types::{SaleConfig, SalePhase};

/// Outcome of pricing a payment against the phase table and remaining
/// token budget. Pure data; the caller moves the money.
pub struct Quote {
    pub rate: i128,
    pub accepted: i128,
    pub refunded: i128,
    pub token_units: i128,
}

/// Tiered phase in force at `wei_raised`, if any. The first phase whose
/// cumulative cap still exceeds the raised amount wins, so a boundary
/// purchase prices at the next tier.
fn tiered_phase(config: &SaleConfig, wei_raised: i128) -> Option<SalePhase> {
    config.phases.iter().find(|phase| phase.cap > wei_raised)
}

/// Rate in force for the next wei at `wei_raised`, or `None` while the
/// tiers are exhausted and the final window has not yet opened.
pub fn rate_at(config: &SaleConfig, wei_raised: i128, now: u64) -> Option<i128> {
    match tiered_phase(config, wei_raised) {
        Some(phase) => Some(phase.rate),
        None if now >= config.final_opening_time => Some(config.final_rate),
        None => None,
    }
}

/// Splits `amount` into accepted and refunded parts and prices the
/// accepted part. The acceptable amount is bounded by the current tier's
/// remaining wei capacity and, in every phase, by the unsold remainder of
/// the ICO token pool.
pub fn quote(
    config: &SaleConfig,
    wei_raised: i128,
    tokens_sold: i128,
    amount: i128,
    now: u64,
) -> Result<Quote, Error> {
    let (rate, phase_remaining) = match tiered_phase(config, wei_raised) {
        Some(phase) => (phase.rate, phase.cap - wei_raised),
        None if now >= config.final_opening_time => (config.final_rate, i128::MAX),
        None => return Err(Error::SaleClosedForPhase),
    };

    let budget_units = config.total_ico_cap - tokens_sold;
    let budget_wei = budget_units / rate;
    if budget_wei == 0 {
        return Err(Error::SaleClosedForPhase);
    }

    let accepted = amount.min(phase_remaining).min(budget_wei);
    let token_units = accepted.checked_mul(rate).ok_or(Error::MathOverflow)?;

    Ok(Quote {
        rate,
        accepted,
        refunded: amount - accepted,
        token_units,
    })
}
