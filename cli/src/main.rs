use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hourbridge_api::prelude::*;
use hourbridge_client::program::{self, ScenarioConfig, Stage};
use hourbridge_client::{HorizonClient, HorizonError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum Cluster {
    Local,
    Testnet,
    Futurenet,
    Custom(String),
}

impl Cluster {
    pub fn horizon_url(&self) -> String {
        match self {
            Cluster::Local => LOCAL_HORIZON_URL.to_string(),
            Cluster::Testnet => TESTNET_HORIZON_URL.to_string(),
            Cluster::Futurenet => FUTURENET_HORIZON_URL.to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }

    pub fn friendbot_url(&self) -> Option<String> {
        match self {
            Cluster::Local => Some(LOCAL_FRIENDBOT_URL.to_string()),
            Cluster::Testnet => Some(TESTNET_FRIENDBOT_URL.to_string()),
            Cluster::Futurenet => Some(FUTURENET_FRIENDBOT_URL.to_string()),
            Cluster::Custom(_) => None,
        }
    }

    pub fn passphrase(&self) -> NetworkPassphrase {
        match self {
            Cluster::Local => NetworkPassphrase::Standalone,
            Cluster::Futurenet => NetworkPassphrase::Futurenet,
            Cluster::Testnet | Cluster::Custom(_) => NetworkPassphrase::Testnet,
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Local),
            "t" => Ok(Cluster::Testnet),
            "f" => Ok(Cluster::Futurenet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Cluster::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid network value: '{}'. Use l, t, f, or a Horizon URL (http:// or https://)",
                s
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "hourbridge")]
#[command(about = "Builds two local currencies on Stellar, links them through HOUR and pays across them")]
struct Cli {
    #[arg(
        long,
        default_value = "t",
        help = "Stellar network (l = local standalone, t = testnet, f = futurenet, or a Horizon URL)"
    )]
    network: Cluster,

    #[arg(long, help = "Friendbot URL used to fund the sponsor (defaults to the network's friendbot)")]
    friendbot: Option<String>,

    #[arg(long, help = "Network passphrase (defaults to the network's passphrase)")]
    passphrase: Option<String>,

    #[arg(long, default_value_t = 2, help = "Users created per currency (at least 2)")]
    users: usize,
}

fn print_stage(stage: &Stage) {
    println!("\n{}", format!("-=< {} >=-", stage).bold().cyan());
}

fn report_error(err: &anyhow::Error) {
    let rejection = err.chain().find_map(|e| e.downcast_ref::<HorizonError>());
    match rejection {
        Some(HorizonError::Rejected { title, result_codes }) => {
            eprintln!("{} {}", title.red().bold(), result_codes);
            eprintln!("{}", format!("{}", err).dimmed());
        }
        _ => eprintln!("{} {:?}", "Error:".red().bold(), err),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let friendbot = cli.friendbot.or_else(|| cli.network.friendbot_url());
    let passphrase = match cli.passphrase {
        Some(p) => NetworkPassphrase::Custom(p),
        None => cli.network.passphrase(),
    };
    let client = HorizonClient::new(&cli.network.horizon_url(), friendbot.as_deref())?;
    info!(horizon = client.horizon_url(), network = %passphrase, "Using network");

    let mut on_stage = print_stage;
    let ctx = program::setup(client, passphrase, &mut on_stage).await?;
    let report = program::run(&ctx, &ScenarioConfig { users: cli.users }, &mut on_stage).await?;

    info!(
        sponsor = %report.sponsor,
        payments = report.payments.len(),
        "Run complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => println!("\n{}", "All tests passed.".green().bold()),
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}
