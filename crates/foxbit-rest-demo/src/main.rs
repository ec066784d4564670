/*
[INPUT]:  CLI arguments, FOXBIT_API_KEY / FOXBIT_API_SECRET environment variables
[OUTPUT]: One signed order lifecycle against Foxbit REST v3, exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use foxbit_rest_adapter::{ClientConfig, Credentials, FoxbitClient, http::client::DEFAULT_BASE_URL};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use foxbit_rest_demo::{DemoConfig, run_demo};

#[derive(Parser, Debug)]
#[command(name = "foxbit-rest-demo", version, about = "Foxbit REST v3 signed request demo")]
struct Cli {
    #[arg(long = "base-url", env = "FOXBIT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, value_name = "SYMBOL", default_value = "btcbrl")]
    market: String,
    #[arg(long, default_value = "0.0001")]
    quantity: Decimal,
    #[arg(long = "price-factor", default_value = "0.9")]
    price_factor: Decimal,
    #[arg(long = "settle-ms", value_name = "MS", default_value_t = 2000)]
    settle_ms: u64,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl Cli {
    fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            market: self.market.clone(),
            quantity: self.quantity,
            price_factor: self.price_factor,
            settle_delay: Duration::from_millis(self.settle_ms),
            ..DemoConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "demo failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    info!(
        base_url = %args.base_url,
        market = %args.market,
        dry_run = args.dry_run,
        "starting foxbit-rest-demo"
    );

    let config = args.demo_config();
    config.validate().context("invalid demo configuration")?;

    let credentials = Credentials::from_env().context("load API credentials")?;
    let client =
        FoxbitClient::with_config_and_base_url(credentials, ClientConfig::default(), &args.base_url)
            .context("build Foxbit client")?;

    if args.dry_run {
        info!(
            access_key = %client.credentials().masked_access_key(),
            quantity = %config.quantity,
            price_factor = %config.price_factor,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let report = run_demo(&client, &config).await.context("run demo")?;
    info!(
        order_id = %report.order_id,
        target_price = %report.target_price,
        active_orders = report.active_orders,
        cancelled_orders = report.cancelled_orders,
        "demo complete"
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
