//! Error types for the scenario runner

use anchor_lang::solana_program::program_error::ProgramError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Scenario error types
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] Box<solana_client::client_error::ClientError>),

    #[error("Failed to build instruction: {0}")]
    Instruction(#[from] ProgramError),

    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    #[error("Failed to load wallet from {path}: {reason}")]
    Wallet { path: String, reason: String },

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Account {0} is not a token holding account")]
    InvalidTokenAccount(Pubkey),

    #[error("Invalid token amount: {0}")]
    InvalidTokenAmount(String),

    #[error("Transfer requested before the mint scenario recorded a holding account")]
    MintNotRun,

    #[error("Balance mismatch on {account}: expected {expected}, got {actual}")]
    BalanceMismatch {
        account: Pubkey,
        expected: u64,
        actual: u64,
    },
}

impl From<solana_client::client_error::ClientError> for ScenarioError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ScenarioError::Rpc(Box::new(err))
    }
}

/// Result type alias for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;
