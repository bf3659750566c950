#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
};


contractmeta!(
    key = "Description",
    val = "Irrevocable linear vesting vault with cliff"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidSchedule = 3,
    BeforeCliff = 4,
    NothingDue = 5,
    NonRevocable = 6,
}

/// Schedule parameters, fixed at initialization. Tokens are deposited
/// after construction and vest as if locked from `start_time`.
#[derive(Clone)]
#[contracttype]
pub struct VestingConfig {
    pub beneficiary: Address,
    pub start_time: u64,
    pub cliff_time: u64,
    pub end_time: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    Released,
}

// Minimal interface onto the ledger holding the vested allocation
#[soroban_sdk::contractclient(name = "LedgerClient")]
pub trait TokenLedger {
    fn balance_of(env: Env, addr: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}

fn read_config(env: &Env) -> Result<VestingConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn read_released(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Released)
        .unwrap_or(0)
}

/// Amount vested at `at` over the lump allocation `total`.
/// Linear from `start_time`, floored to whole token units.
fn vested(config: &VestingConfig, total: i128, at: u64) -> i128 {
    if at < config.cliff_time {
        0
    } else if at >= config.end_time {
        total
    } else {
        let elapsed = (at - config.start_time) as i128;
        let span = (config.end_time - config.start_time) as i128;
        total * elapsed / span
    }
}

#[contract]
pub struct VestingVault;

#[contractimpl]
impl VestingVault {
    /// Fixes the schedule. The allocation itself arrives later as a plain
    /// token deposit to this contract's address.
    pub fn initialize(
        env: Env,
        beneficiary: Address,
        start_time: u64,
        cliff_duration: u64,
        duration: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        if duration == 0 || cliff_duration > duration {
            return Err(Error::InvalidSchedule);
        }

        let config = VestingConfig {
            beneficiary: beneficiary.clone(),
            start_time,
            cliff_time: start_time + cliff_duration,
            end_time: start_time + duration,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Released, &0i128);

        env.events().publish(
            (symbol_short!("init"),),
            (beneficiary, start_time, cliff_duration, duration),
        );
        Ok(())
    }

    /// Transfers whatever has vested and not yet been released to the
    /// beneficiary. Fails before the cliff, and when nothing is due.
    pub fn release(env: Env, token: Address) -> Result<i128, Error> {
        let config = read_config(&env)?;
        config.beneficiary.require_auth();

        let now = env.ledger().timestamp();
        if now < config.cliff_time {
            return Err(Error::BeforeCliff);
        }

        let ledger = LedgerClient::new(&env, &token);
        let released = read_released(&env);
        let total = ledger.balance_of(&env.current_contract_address()) + released;

        let due = vested(&config, total, now) - released;
        if due == 0 {
            return Err(Error::NothingDue);
        }

        env.storage()
            .instance()
            .set(&DataKey::Released, &(released + due));
        ledger.transfer(
            &env.current_contract_address(),
            &config.beneficiary,
            &due,
        );

        env.events()
            .publish((symbol_short!("released"), token), due);
        Ok(due)
    }

    /// The allocation is irrevocable. Kept for interface parity with
    /// revocable vesting designs; always fails.
    pub fn revoke(env: Env, _token: Address) -> Result<(), Error> {
        read_config(&env)?;
        Err(Error::NonRevocable)
    }

    // View functions

    pub fn released(env: Env) -> i128 {
        read_released(&env)
    }

    pub fn releasable(env: Env, token: Address) -> Result<i128, Error> {
        let config = read_config(&env)?;
        let released = read_released(&env);
        let ledger = LedgerClient::new(&env, &token);
        let total = ledger.balance_of(&env.current_contract_address()) + released;
        Ok(vested(&config, total, env.ledger().timestamp()) - released)
    }

    pub fn vested_amount(env: Env, token: Address, at: u64) -> Result<i128, Error> {
        let config = read_config(&env)?;
        let ledger = LedgerClient::new(&env, &token);
        let total = ledger.balance_of(&env.current_contract_address()) + read_released(&env);
        Ok(vested(&config, total, at))
    }

    pub fn config(env: Env) -> Result<VestingConfig, Error> {
        read_config(&env)
    }
}
