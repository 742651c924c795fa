use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(about = "Print a value produced by a simulated slow lookup")]
pub struct CliConfig {
    /// Override the simulated lookup delay, in seconds.
    #[arg(long)]
    pub delay_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn delay_override(&self) -> Option<Duration> {
        self.delay_secs.map(Duration::from_secs)
    }
}
