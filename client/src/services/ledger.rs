//! Cluster access for the scenario runner
//!
//! `Ledger` is the only way scenarios reach a cluster: the live
//! implementation wraps a blocking `RpcClient`, tests plug in an in-process
//! cluster.

use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::debug;

use crate::{
    error::{Result, ScenarioError},
    types::Config,
};

/// Read and submit access to a cluster on behalf of a funding wallet
pub trait Ledger {
    /// Funding wallet: fee payer and first signer of every transaction
    fn payer(&self) -> Pubkey;

    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;

    /// Submit `instructions` as one atomic transaction and wait for confirmation.
    /// `signers` are required in addition to the payer.
    fn send_and_confirm(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature>;

    /// Balance of a token holding account in base units
    fn token_balance(&self, token_account: &Pubkey) -> Result<u64>;
}

/// Ledger backed by a cluster's JSON-RPC endpoint
pub struct RpcLedger {
    client: RpcClient,
    payer: Keypair,
}

impl RpcLedger {
    /// Connect to `config.rpc_url` with the wallet at `config.wallet_path`
    pub fn new(config: &Config) -> Result<Self> {
        if config.wallet_path.starts_with("~") {
            return Err(ScenarioError::Wallet {
                path: config.wallet_path.display().to_string(),
                reason: "HOME is not set; point ANCHOR_WALLET at an absolute path".to_string(),
            });
        }

        let payer = read_keypair_file(&config.wallet_path).map_err(|e| ScenarioError::Wallet {
            path: config.wallet_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let client = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

        Ok(Self::with_client(client, payer))
    }

    /// Use an already configured client, e.g. one with a custom timeout or sender
    pub fn with_client(client: RpcClient, payer: Keypair) -> Self {
        Self { client, payer }
    }
}

impl Ledger for RpcLedger {
    fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        Ok(self.client.get_minimum_balance_for_rent_exemption(data_len)?)
    }

    fn send_and_confirm(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature> {
        let blockhash = self.client.get_latest_blockhash()?;

        let mut all_signers: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
        all_signers.push(&self.payer);
        all_signers.extend_from_slice(signers);

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            &all_signers[..],
            blockhash,
        );

        let signature = self.client.send_and_confirm_transaction(&tx)?;
        debug!(%signature, instructions = instructions.len(), "Transaction confirmed");

        Ok(signature)
    }

    fn token_balance(&self, token_account: &Pubkey) -> Result<u64> {
        let balance = self.client.get_token_account_balance(token_account)?;
        parse_token_amount(&balance.amount)
    }
}

/// Parse the raw `amount` string the RPC reports for a token balance
pub fn parse_token_amount(amount: &str) -> Result<u64> {
    amount
        .parse()
        .map_err(|_| ScenarioError::InvalidTokenAmount(amount.to_string()))
}

/// Balance stored in raw token account data, for ledgers that read accounts directly
pub fn token_balance_from_data(token_account: &Pubkey, data: &[u8]) -> Result<u64> {
    spl_token::state::Account::unpack(data)
        .map(|account| account.amount)
        .map_err(|_| ScenarioError::InvalidTokenAccount(*token_account))
}
