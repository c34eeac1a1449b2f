//! Mint and transfer scenarios
//!
//! The runner owns the token identity for its whole lifetime and caches the
//! wallet's holding account once the mint scenario has created it; the
//! transfer scenario reads that cache.

use chrono::Utc;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use token_contract::constants::{MINT_AMOUNT, TRANSFER_AMOUNT};
use tracing::info;

use crate::{
    error::{Result, ScenarioError},
    instructions::{
        create_holding_account_instruction, holding_account_address, mint_setup_instructions,
        mint_token_instruction, transfer_token_instruction, MINT_SPACE,
    },
    services::ledger::Ledger,
    types::{MintReport, RunReport, TransferReport},
};

/// Balance expected in the wallet's holding account after minting
pub const EXPECTED_BALANCE_AFTER_MINT: u64 = MINT_AMOUNT;

/// Balance expected in the wallet's holding account after transferring
pub const EXPECTED_BALANCE_AFTER_TRANSFER: u64 = MINT_AMOUNT - TRANSFER_AMOUNT;

pub struct ScenarioRunner<L: Ledger> {
    ledger: L,
    mint: Keypair,
    holding_account: Option<Pubkey>,
}

impl<L: Ledger> ScenarioRunner<L> {
    /// Create a runner with a freshly generated token identity
    pub fn new(ledger: L) -> Self {
        Self::with_mint(ledger, Keypair::new())
    }

    pub fn with_mint(ledger: L, mint: Keypair) -> Self {
        Self {
            ledger,
            mint,
            holding_account: None,
        }
    }

    pub fn mint_address(&self) -> Pubkey {
        self.mint.pubkey()
    }

    /// Wallet's holding account, once the mint scenario has run
    pub fn holding_account(&self) -> Option<Pubkey> {
        self.holding_account
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Create the mint and the wallet's holding account, then mint into it
    pub fn mint(&mut self) -> Result<MintReport> {
        let authority = self.ledger.payer();
        let mint = self.mint.pubkey();

        let lamports = self.ledger.minimum_balance_for_rent_exemption(MINT_SPACE)?;
        let holding_account = holding_account_address(&authority, &mint);

        let setup = mint_setup_instructions(&authority, &mint, lamports)?;
        let setup_signature = self.ledger.send_and_confirm(&setup, &[&self.mint])?;

        info!(
            %mint,
            %authority,
            %holding_account,
            signature = %setup_signature,
            "Mint and holding account created"
        );

        let mint_ix = mint_token_instruction(&mint, &holding_account, &authority);
        let mint_signature = self.ledger.send_and_confirm(&[mint_ix], &[])?;

        self.holding_account = Some(holding_account);

        let balance = self.ledger.token_balance(&holding_account)?;
        info!(signature = %mint_signature, balance, "mint_token confirmed");

        Ok(MintReport {
            mint,
            holding_account,
            setup_signature,
            mint_signature,
            balance,
        })
    }

    /// Send from the wallet's holding account to a freshly generated recipient
    pub fn transfer(&mut self) -> Result<TransferReport> {
        let source = self.holding_account.ok_or(ScenarioError::MintNotRun)?;
        let authority = self.ledger.payer();
        let mint = self.mint.pubkey();

        let recipient = Keypair::new().pubkey();
        let recipient_holding_account = holding_account_address(&recipient, &mint);

        let create_ix = create_holding_account_instruction(&authority, &recipient, &mint);
        let setup_signature = self.ledger.send_and_confirm(&[create_ix], &[])?;

        info!(
            %recipient,
            %recipient_holding_account,
            signature = %setup_signature,
            "Recipient holding account created"
        );

        let transfer_ix = transfer_token_instruction(&source, &authority, &recipient_holding_account);
        let transfer_signature = self.ledger.send_and_confirm(&[transfer_ix], &[])?;

        let source_balance = self.ledger.token_balance(&source)?;
        info!(signature = %transfer_signature, source_balance, "transfer_token confirmed");

        Ok(TransferReport {
            recipient,
            recipient_holding_account,
            setup_signature,
            transfer_signature,
            source_balance,
        })
    }

    /// Run both scenarios in order, checking the balance after each
    pub fn run(&mut self) -> Result<RunReport> {
        let started_at = Utc::now();
        let wallet = self.ledger.payer();

        let mint = self.mint()?;
        expect_balance(mint.holding_account, EXPECTED_BALANCE_AFTER_MINT, mint.balance)?;

        let transfer = self.transfer()?;
        expect_balance(
            mint.holding_account,
            EXPECTED_BALANCE_AFTER_TRANSFER,
            transfer.source_balance,
        )?;

        Ok(RunReport {
            wallet,
            started_at,
            mint,
            transfer,
        })
    }
}

fn expect_balance(account: Pubkey, expected: u64, actual: u64) -> Result<()> {
    if actual != expected {
        return Err(ScenarioError::BalanceMismatch {
            account,
            expected,
            actual,
        });
    }
    Ok(())
}
