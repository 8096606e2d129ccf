use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::*;
use tracing_subscriber::EnvFilter;

mod allocation;
mod cluster;
mod error;
#[cfg(test)]
mod fixtures;
mod quantity;
mod report;
mod scan;
mod sizing;
mod tally;
mod util;

use crate::cluster::ClientSettings;
use crate::error::AuditResult;
use crate::report::ReportConfig;

/// Count containers per namespace by instance size and report how much node capacity is
/// promised away as limits.
#[derive(Parser, Debug)]
#[command(name = "cluster-sizer", version, about)]
struct Cli {
    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long)]
    kubeconfig: Option<PathBuf>,
}

async fn run(settings: ClientSettings, report_config: ReportConfig) -> AuditResult<PathBuf> {
    let source = cluster::connect(&settings).await?;
    let audit = scan::scan_cluster(&source).await?;
    return report::write_report(&report_config, &audit.tally, &audit.summary);
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = ClientSettings {
        kubeconfig: cli.kubeconfig.or_else(ClientSettings::default_kubeconfig),
        accept_invalid_certs: true,
    };

    println!("Starting...");
    return match run(settings, ReportConfig::default()).await {
        Ok(path) => {
            println!("Finish writing to csv file! ({})", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            if let Some(hint) = err.hint() {
                println!("{}", hint);
            }
            error!("audit failed: {:?}", err);
            ExitCode::FAILURE
        },
    };
}
