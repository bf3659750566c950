#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
    String,
};


contractmeta!(
    key = "Description",
    val = "Capped mintable token ledger for the crowdsale"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidCap = 3,
    InvalidAmount = 4,
    CapExceeded = 5,
    MintingFinished = 6,
    TokenPaused = 7,
    InsufficientBalance = 8,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Cap,
    TotalSupply,
    MintingFinished,
    Paused,
    Metadata,
    Balance(Address),
}

fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

fn read_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn read_balance(env: &Env, addr: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(addr.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(addr.clone()), &amount);
}

#[contract]
pub struct CappedToken;

#[contractimpl]
impl CappedToken {
    /// Deploys the ledger with a fixed supply cap. Must be called exactly once.
    pub fn initialize(
        env: Env,
        owner: Address,
        cap: i128,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if cap <= 0 {
            return Err(Error::InvalidCap);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Cap, &cap);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &false);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );

        env.events()
            .publish((symbol_short!("init"),), (owner, cap));
        Ok(())
    }

    /// Creates `amount` new units for `to`. Owner only; rejected once
    /// minting is finished or the cap would be exceeded.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        let owner = read_owner(&env)?;
        owner.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let finished: bool = env
            .storage()
            .instance()
            .get(&DataKey::MintingFinished)
            .unwrap_or(false);
        if finished {
            return Err(Error::MintingFinished);
        }

        let cap: i128 = env.storage().instance().get(&DataKey::Cap).unwrap_or(0);
        let supply = read_supply(&env);
        let new_supply = supply.checked_add(amount).ok_or(Error::CapExceeded)?;
        if new_supply > cap {
            return Err(Error::CapExceeded);
        }

        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &new_supply);
        write_balance(&env, &to, read_balance(&env, &to) + amount);

        env.events()
            .publish((symbol_short!("mint"), to), amount);
        Ok(())
    }

    /// One-way stop of the mint authority. A second call fails.
    pub fn finish_minting(env: Env) -> Result<(), Error> {
        let owner = read_owner(&env)?;
        owner.require_auth();

        let finished: bool = env
            .storage()
            .instance()
            .get(&DataKey::MintingFinished)
            .unwrap_or(false);
        if finished {
            return Err(Error::MintingFinished);
        }
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &true);

        env.events().publish((symbol_short!("mintfin"),), ());
        Ok(())
    }

    /// Hands administrative control of the ledger to `new_owner`.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let owner = read_owner(&env)?;
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events()
            .publish((symbol_short!("ownership"),), (owner, new_owner));
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. Blocked while paused.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if Self::paused(env.clone()) {
            return Err(Error::TokenPaused);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);
        write_balance(&env, &to, read_balance(&env, &to) + amount);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    /// Halts transfers. Minting and ownership handover stay available.
    pub fn pause(env: Env) -> Result<(), Error> {
        let owner = read_owner(&env)?;
        owner.require_auth();
        env.storage().instance().set(&DataKey::Paused, &true);
        env.events().publish((symbol_short!("paused"),), ());
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let owner = read_owner(&env)?;
        owner.require_auth();
        env.storage().instance().set(&DataKey::Paused, &false);
        env.events().publish((symbol_short!("unpaused"),), ());
        Ok(())
    }

    // View functions

    pub fn balance_of(env: Env, addr: Address) -> i128 {
        read_balance(&env, &addr)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_supply(&env)
    }

    pub fn cap(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::Cap).unwrap_or(0)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    pub fn minting_finished(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::MintingFinished)
            .unwrap_or(false)
    }

    pub fn paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn metadata(env: Env) -> Option<TokenMetadata> {
        env.storage().instance().get(&DataKey::Metadata)
    }
}
