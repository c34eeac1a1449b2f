//! Token Scenario
//!
//! Runs the mint and transfer scenarios against the cluster named by
//! `ANCHOR_PROVIDER_URL` and prints the run report as JSON.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use token_contract_client::{Config, RpcLedger, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_contract_client=info,token_scenario=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    info!(
        rpc_url = %config.rpc_url,
        wallet = %config.wallet_path.display(),
        commitment = ?config.commitment.commitment,
        program_id = %token_contract::ID,
        "Configuration loaded"
    );

    let ledger = RpcLedger::new(&config).context("failed to connect to cluster")?;
    let mut runner = ScenarioRunner::new(ledger);

    info!(mint = %runner.mint_address(), "Running scenarios");

    let report = runner.run().context("scenario run failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Scenarios passed");

    Ok(())
}
