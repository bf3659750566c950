use crate::errors::Error;
use crate::events;
use crate::settlement;
use crate::storage::*;
use crate::token_ledger::{MintableLedgerClient, PaymentTokenClient};
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Tiered capped crowdsale with pending credits and vested leftover"
);

fn validate_config(config: &SaleConfig) -> Result<(), Error> {
    if config.opening_time >= config.closing_time {
        return Err(Error::InvalidTimeRange);
    }
    if config.phases.is_empty() || config.final_rate <= 0 {
        return Err(Error::InvalidPhaseTable);
    }
    let mut previous_cap = 0i128;
    for phase in config.phases.iter() {
        if phase.rate <= 0 || phase.cap <= previous_cap {
            return Err(Error::InvalidPhaseTable);
        }
        previous_cap = phase.cap;
    }
    if config.foundation_percentage > 100 {
        return Err(Error::InvalidPercentage);
    }
    if config.total_ico_cap <= 0 || config.presale_allocation < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Fixes the whole sale configuration. Must be called exactly once,
    /// authorized by the configured distributor.
    pub fn initialize(env: Env, config: SaleConfig) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        config.distributor.require_auth();
        validate_config(&config)?;

        set_config(&env, &config);
        set_status(&env, SaleStatus::Active);
        set_wei_raised(&env, 0);
        set_tokens_sold(&env, 0);
        set_pending_total(&env, 0);

        events::emit_initialized(&env, config.treasury, config.total_ico_cap);
        Ok(())
    }

    /// Settles a payment against the phase table. Only the accepted part
    /// is pulled from the payer; the rest is the refund reported in the
    /// returned receipt. Depending on the delivery mode the bought units
    /// are minted immediately or credited as pending.
    pub fn buy_tokens(
        env: Env,
        payer: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<Purchase, Error> {
        let config = read_config(&env)?;
        if get_status(&env) == SaleStatus::Finalized {
            return Err(Error::SaleNotOpen);
        }
        payer.require_auth();

        let now = env.ledger().timestamp();
        if now < config.opening_time || now > config.closing_time {
            return Err(Error::SaleNotOpen);
        }
        if amount <= 0 {
            return Err(Error::ZeroPayment);
        }

        let wei_raised = get_wei_raised(&env);
        let tokens_sold = get_tokens_sold(&env);
        let quote = settlement::quote(&config, wei_raised, tokens_sold, amount, now)?;

        let payment = PaymentTokenClient::new(&env, &config.payment_token);
        match config.delivery {
            DeliveryMode::Direct => {
                payment.transfer(&payer, &config.treasury, &quote.accepted);
                MintableLedgerClient::new(&env, &config.token)
                    .mint(&beneficiary, &quote.token_units);
            }
            DeliveryMode::Escrowed => {
                payment.transfer(&payer, &env.current_contract_address(), &quote.accepted);

                let mut pending = get_pending(&env);
                let mut credit = pending.get(beneficiary.clone()).unwrap_or(PendingCredit {
                    token_units: 0,
                    wei: 0,
                });
                credit.token_units = credit
                    .token_units
                    .checked_add(quote.token_units)
                    .ok_or(Error::MathOverflow)?;
                credit.wei = credit
                    .wei
                    .checked_add(quote.accepted)
                    .ok_or(Error::MathOverflow)?;
                pending.set(beneficiary.clone(), credit);
                set_pending(&env, &pending);
                set_pending_total(&env, get_pending_total(&env) + quote.token_units);

                events::emit_credit(&env, beneficiary.clone(), quote.token_units, quote.accepted);
            }
        }

        set_wei_raised(
            &env,
            wei_raised
                .checked_add(quote.accepted)
                .ok_or(Error::MathOverflow)?,
        );
        set_tokens_sold(
            &env,
            tokens_sold
                .checked_add(quote.token_units)
                .ok_or(Error::MathOverflow)?,
        );

        let receipt = Purchase {
            accepted: quote.accepted,
            refunded: quote.refunded,
            token_units: quote.token_units,
            rate: quote.rate,
        };
        events::emit_purchase(&env, payer, beneficiary, &receipt);
        Ok(receipt)
    }

    /// Toggles the whitelist entry deciding whether a pending credit may
    /// be forwarded. Distributor only.
    pub fn set_approved(
        env: Env,
        caller: Address,
        account: Address,
        approved: bool,
    ) -> Result<(), Error> {
        let config = read_config(&env)?;
        caller.require_auth();
        if caller != config.distributor {
            return Err(Error::NotAuthorized);
        }

        set_approved(&env, &account, approved);
        events::emit_approval(&env, account, approved);
        Ok(())
    }

    /// Converts the pending credits of approved accounts into real
    /// balances and releases their escrowed funds to the treasury.
    /// Unapproved or already-forwarded accounts are skipped, so repeating
    /// a forward is a no-op. Distributor only; gated until the sale has
    /// closed or sold out.
    pub fn forward(env: Env, caller: Address, accounts: Vec<Address>) -> Result<(), Error> {
        let config = read_config(&env)?;
        if get_status(&env) == SaleStatus::Finalized {
            return Err(Error::AlreadyFinalized);
        }
        caller.require_auth();
        if caller != config.distributor {
            return Err(Error::NotAuthorized);
        }

        let now = env.ledger().timestamp();
        let sold_out = get_tokens_sold(&env) >= config.total_ico_cap;
        if now < config.closing_time && !sold_out {
            return Err(Error::ForwardingNotOpen);
        }

        let ledger = MintableLedgerClient::new(&env, &config.token);
        let payment = PaymentTokenClient::new(&env, &config.payment_token);
        let mut pending = get_pending(&env);
        let mut pending_total = get_pending_total(&env);

        for account in accounts.iter() {
            if !is_approved(&env, &account) {
                continue;
            }
            let Some(credit) = pending.get(account.clone()) else {
                continue;
            };

            ledger.mint(&account, &credit.token_units);
            payment.transfer(
                &env.current_contract_address(),
                &config.treasury,
                &credit.wei,
            );
            pending_total -= credit.token_units;
            pending.remove(account.clone());

            events::emit_forwarded(&env, account, credit.token_units, credit.wei);
        }

        set_pending(&env, &pending);
        set_pending_total(&env, pending_total);
        Ok(())
    }

    /// One-shot terminal distribution: refunds unforwarded escrow, mints
    /// the foundation and presale shares, sends the unsold remainder of
    /// the ICO pool to the vesting vault, stops minting and hands the
    /// ledger to the treasury. Callable by anyone once the sale has
    /// closed or sold out.
    pub fn finalize(env: Env) -> Result<(), Error> {
        let config = read_config(&env)?;
        if get_status(&env) == SaleStatus::Finalized {
            return Err(Error::AlreadyFinalized);
        }

        let now = env.ledger().timestamp();
        let tokens_sold = get_tokens_sold(&env);
        if now < config.closing_time && tokens_sold < config.total_ico_cap {
            return Err(Error::SaleNotEnded);
        }

        set_status(&env, SaleStatus::Finalized);

        // Unapproved credits: money back to the buyer, units into the
        // leftover pool.
        let pending_total = get_pending_total(&env);
        let pending = get_pending(&env);
        if !pending.is_empty() {
            let payment = PaymentTokenClient::new(&env, &config.payment_token);
            for (account, credit) in pending.iter() {
                payment.transfer(&env.current_contract_address(), &account, &credit.wei);
                events::emit_escrow_refund(&env, account, credit.wei);
            }
            set_pending(&env, &soroban_sdk::Map::new(&env));
        }
        set_pending_total(&env, 0);

        let ledger = MintableLedgerClient::new(&env, &config.token);

        let basis = match config.foundation_basis {
            FoundationBasis::ConfiguredCap => ledger.cap(),
            FoundationBasis::ActualSold => tokens_sold,
        };
        let foundation_share = basis
            .checked_mul(config.foundation_percentage as i128)
            .ok_or(Error::MathOverflow)?
            / 100;
        if foundation_share > 0 {
            ledger.mint(&config.foundation, &foundation_share);
        }

        if config.presale_allocation > 0 {
            ledger.mint(&config.presale_wallet, &config.presale_allocation);
        }

        // Units actually delivered to buyers; unforwarded credits count
        // as never sold.
        let delivered = tokens_sold - pending_total;
        let leftover = config.total_ico_cap - delivered;
        if leftover > 0 {
            ledger.mint(&config.vault, &leftover);
        }

        ledger.finish_minting();
        ledger.transfer_ownership(&config.treasury);

        events::emit_finalized(&env, foundation_share, config.presale_allocation, leftover);
        Ok(())
    }

    // View functions

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        read_config(&env)
    }

    pub fn status(env: Env) -> SaleStatus {
        get_status(&env)
    }

    /// Clock-derived purchase window, independent of finalization.
    pub fn window(env: Env) -> Result<SaleWindow, Error> {
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();
        Ok(if now < config.opening_time {
            SaleWindow::Pending
        } else if now <= config.closing_time {
            SaleWindow::Open
        } else {
            SaleWindow::Closed
        })
    }

    pub fn wei_raised(env: Env) -> i128 {
        get_wei_raised(&env)
    }

    pub fn tokens_sold(env: Env) -> i128 {
        get_tokens_sold(&env)
    }

    pub fn pending_total(env: Env) -> i128 {
        get_pending_total(&env)
    }

    pub fn pending_of(env: Env, account: Address) -> Option<PendingCredit> {
        get_pending(&env).get(account)
    }

    pub fn approved(env: Env, account: Address) -> bool {
        is_approved(&env, &account)
    }

    /// Rate the next accepted wei would price at, `None` during the
    /// phase gap.
    pub fn current_rate(env: Env) -> Result<Option<i128>, Error> {
        let config = read_config(&env)?;
        Ok(settlement::rate_at(
            &config,
            get_wei_raised(&env),
            env.ledger().timestamp(),
        ))
    }
}
