//! Scenario runner for the token contract
//!
//! Drives the `mint_token` and `transfer_token` instructions against a
//! cluster: creates a mint and the wallet's holding account, mints into it,
//! then transfers to a freshly generated recipient and checks the balances
//! left behind.

pub mod error;
pub mod instructions;
pub mod services;
pub mod types;

pub use error::{Result, ScenarioError};
pub use services::{Ledger, RpcLedger, ScenarioRunner};
pub use types::{Config, MintReport, RunReport, TransferReport};
