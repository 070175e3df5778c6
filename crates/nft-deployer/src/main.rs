use dotenv::dotenv;
use nft_deployer::{DeployConfig, Deployer, Wallet};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("deployment failed");
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = DeployConfig::from_env()?;
    let wallet = Wallet::from_env()?;
    info!(
        rpc_url = %config.network.rpc_url,
        artifacts_dir = %config.artifacts_dir.display(),
        signers = wallet.signers().len(),
        "loaded deployment configuration"
    );

    let deployer = Deployer::new(config, wallet)?;
    deployer.deploy(&mut io::stdout().lock()).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
