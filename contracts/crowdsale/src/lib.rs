#![no_std]

mod contract;
mod errors;
mod events;
mod settlement;
mod storage;
mod token_ledger;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use token_ledger::{MintableLedger, PaymentToken};
pub use types::{
    DeliveryMode, FoundationBasis, PendingCredit, Purchase, SaleConfig, SalePhase, SaleStatus,
    SaleWindow,
};
