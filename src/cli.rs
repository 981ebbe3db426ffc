use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agriclimate",
    version,
    about = "Crop health and weather impact report from a weather payload"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Weather payload JSON file ("-" reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the dashboard as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Date treated as "today" for forecast labels (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Number of forecast days to show (overrides config)
    #[arg(short, long)]
    pub days: Option<usize>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup and write config.yaml
    Init,
    /// Validate config and the weather payload
    Check,
}
