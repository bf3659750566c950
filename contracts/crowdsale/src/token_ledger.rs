use soroban_sdk::{Address, Env};

/// Interface onto the capped mintable ledger being sold. The sale engine
/// holds the ledger's mint authority until finalization hands it to the
/// treasury.
#[soroban_sdk::contractclient(name = "MintableLedgerClient")]
pub trait MintableLedger {
    fn mint(env: Env, to: Address, amount: i128);
    fn finish_minting(env: Env);
    fn transfer_ownership(env: Env, new_owner: Address);
    fn cap(env: Env) -> i128;
    fn total_supply(env: Env) -> i128;
    fn balance_of(env: Env, addr: Address) -> i128;
    fn paused(env: Env) -> bool;
}

/// Interface onto the base-currency token purchases are settled in.
#[soroban_sdk::contractclient(name = "PaymentTokenClient")]
pub trait PaymentToken {
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn balance_of(env: Env, addr: Address) -> i128;
}
