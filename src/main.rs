use anyhow::Result;
use dotenv::dotenv;

use airdrop_ranking::config::Config;
use airdrop_ranking::services::{ranking, report, snapshot};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the total line.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    dotenv().ok();
    let config = Config::from_env();
    tracing::info!("Reading snapshot from {}", config.snapshot_path.display());

    let entries = snapshot::load_snapshot(&config.snapshot_path)?;
    let (recipients, total) = ranking::convert(&entries)?;
    let ranked = ranking::rank(recipients);

    println!("{}", report::total_line(total));
    report::write_report(&config.report_path, &ranked, total)?;

    Ok(())
}
