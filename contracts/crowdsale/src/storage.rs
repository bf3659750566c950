use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Map};

pub fn read_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_status(env: &Env) -> SaleStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(SaleStatus::Active)
}

pub fn set_status(env: &Env, status: SaleStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_wei_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::WeiRaised)
        .unwrap_or(0)
}

pub fn set_wei_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::WeiRaised, &amount);
}

pub fn get_tokens_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

pub fn set_tokens_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TokensSold, &amount);
}

pub fn get_pending_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::PendingTotal)
        .unwrap_or(0)
}

pub fn set_pending_total(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::PendingTotal, &amount);
}

pub fn get_pending(env: &Env) -> Map<Address, PendingCredit> {
    env.storage()
        .persistent()
        .get(&DataKey::Pending)
        .unwrap_or(Map::new(env))
}

pub fn set_pending(env: &Env, pending: &Map<Address, PendingCredit>) {
    env.storage().persistent().set(&DataKey::Pending, pending);
}

pub fn is_approved(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approved(account.clone()))
        .unwrap_or(false)
}

pub fn set_approved(env: &Env, account: &Address, approved: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Approved(account.clone()), &approved);
}
