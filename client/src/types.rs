//! Configuration and report types for the scenario runner

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

/// Configuration for the scenario runner
#[derive(Debug, Clone)]
pub struct Config {
    /// Cluster RPC endpoint
    pub rpc_url: String,

    /// Key pair file of the funding wallet (mint authority and fee payer)
    pub wallet_path: PathBuf,

    /// Commitment level awaited on every confirmation
    pub commitment: CommitmentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            wallet_path: expand_home(DEFAULT_WALLET, std::env::var("HOME").ok().as_deref()),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let home = lookup("HOME");

        let rpc_url = lookup("ANCHOR_PROVIDER_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let wallet_path = lookup("ANCHOR_WALLET")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| expand_home(&s, home.as_deref()))
            .unwrap_or_else(|| expand_home(DEFAULT_WALLET, home.as_deref()));

        let commitment = lookup("COMMITMENT")
            .and_then(|s| parse_commitment(&s))
            .unwrap_or_else(CommitmentConfig::confirmed);

        Self {
            rpc_url,
            wallet_path,
            commitment,
        }
    }
}

fn parse_commitment(value: &str) -> Option<CommitmentConfig> {
    match value.trim().to_ascii_lowercase().as_str() {
        "processed" => Some(CommitmentConfig::processed()),
        "confirmed" => Some(CommitmentConfig::confirmed()),
        "finalized" => Some(CommitmentConfig::finalized()),
        _ => None,
    }
}

fn expand_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

/// Outcome of the mint scenario
#[derive(Debug, Clone, Serialize)]
pub struct MintReport {
    #[serde(serialize_with = "as_display")]
    pub mint: Pubkey,

    /// Wallet's holding account for `mint`
    #[serde(serialize_with = "as_display")]
    pub holding_account: Pubkey,

    /// Account allocation + mint initialization + holding account creation
    #[serde(serialize_with = "as_display")]
    pub setup_signature: Signature,

    #[serde(serialize_with = "as_display")]
    pub mint_signature: Signature,

    /// Holding account balance after `mint_token`
    pub balance: u64,
}

/// Outcome of the transfer scenario
#[derive(Debug, Clone, Serialize)]
pub struct TransferReport {
    #[serde(serialize_with = "as_display")]
    pub recipient: Pubkey,

    #[serde(serialize_with = "as_display")]
    pub recipient_holding_account: Pubkey,

    #[serde(serialize_with = "as_display")]
    pub setup_signature: Signature,

    #[serde(serialize_with = "as_display")]
    pub transfer_signature: Signature,

    /// Source holding account balance after `transfer_token`
    pub source_balance: u64,
}

/// Both scenarios, in execution order
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(serialize_with = "as_display")]
    pub wallet: Pubkey,

    pub started_at: DateTime<Utc>,

    pub mint: MintReport,

    pub transfer: TransferReport,
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
