use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Purchase;

// Typed payloads published to the event log. Indexers subscribe via the
// ("SALE", symbol_short!("…")) topic pair.

#[derive(Clone)]
#[contracttype]
pub struct PurchaseEvent {
    pub payer: Address,
    pub beneficiary: Address,
    pub accepted: i128,
    pub refunded: i128,
    pub token_units: i128,
    pub rate: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct CreditEvent {
    pub beneficiary: Address,
    pub token_units: i128,
    pub wei: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ApprovalEvent {
    pub account: Address,
    pub approved: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ForwardedEvent {
    pub account: Address,
    pub token_units: i128,
    pub wei: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct EscrowRefundEvent {
    pub account: Address,
    pub wei: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FinalizedEvent {
    pub foundation_share: i128,
    pub presale_allocation: i128,
    pub leftover: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, treasury: Address, total_ico_cap: i128) {
    env.events().publish(
        ("SALE", symbol_short!("init")),
        (treasury, total_ico_cap, env.ledger().timestamp()),
    );
}

pub fn emit_purchase(env: &Env, payer: Address, beneficiary: Address, receipt: &Purchase) {
    env.events().publish(
        ("SALE", symbol_short!("buy")),
        PurchaseEvent {
            payer,
            beneficiary,
            accepted: receipt.accepted,
            refunded: receipt.refunded,
            token_units: receipt.token_units,
            rate: receipt.rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_credit(env: &Env, beneficiary: Address, token_units: i128, wei: i128) {
    env.events().publish(
        ("SALE", symbol_short!("credit")),
        CreditEvent {
            beneficiary,
            token_units,
            wei,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_approval(env: &Env, account: Address, approved: bool) {
    env.events().publish(
        ("SALE", symbol_short!("approve")),
        ApprovalEvent {
            account,
            approved,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_forwarded(env: &Env, account: Address, token_units: i128, wei: i128) {
    env.events().publish(
        ("SALE", symbol_short!("forward")),
        ForwardedEvent {
            account,
            token_units,
            wei,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_escrow_refund(env: &Env, account: Address, wei: i128) {
    env.events().publish(
        ("SALE", symbol_short!("refund")),
        EscrowRefundEvent {
            account,
            wei,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_finalized(env: &Env, foundation_share: i128, presale_allocation: i128, leftover: i128) {
    env.events().publish(
        ("SALE", symbol_short!("final")),
        FinalizedEvent {
            foundation_share,
            presale_allocation,
            leftover,
            timestamp: env.ledger().timestamp(),
        },
    );
}
