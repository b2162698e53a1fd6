use anyhow::Result;
use clap::Parser;
use jobscout::cli::{Cli, Command};
use jobscout::{input, output, server, Pipeline};
use std::time::Duration;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("jobscout=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            companies,
            out_dir,
            sleep,
            max_per_company,
        } => {
            let companies = input::load_companies(&companies)?;
            let pipeline = Pipeline::new(Duration::from_secs_f64(sleep), max_per_company)?;
            let jobs = pipeline.run(&companies).await;
            output::write_outputs(&out_dir, &jobs, companies.len())?;
            info!(
                "Scan finished: {} jobs across {} companies",
                jobs.len(),
                companies.len()
            );
        }
        Command::Serve { dir, port } => {
            server::serve_output(dir, port).await?;
        }
    }

    Ok(())
}
