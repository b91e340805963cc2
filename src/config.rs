use std::env;
use std::path::PathBuf;

/// Input and output locations, overridable through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub report_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let snapshot_path = env::var("AIRDROP_SNAPSHOT_PATH")
            .unwrap_or_else(|_| "./airdrop-snapshot.json".to_string());
        let report_path = env::var("AIRDROP_RANKING_PATH")
            .unwrap_or_else(|_| "airdrop-ranking.txt".to_string());

        Self {
            snapshot_path: snapshot_path.into(),
            report_path: report_path.into(),
        }
    }
}
