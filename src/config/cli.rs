use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "golden-cdm")]
#[command(about = "Convert Golden Schema JSON into CDM EconomicTerms")]
pub struct CliConfig {
    /// Golden Schema file path or bundled resource name
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Correlation id attached to every log line (generated when omitted)
    #[arg(long)]
    pub correlation_id: Option<String>,

    /// Write the EconomicTerms JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory searched for resources before the bundled ones
    #[arg(long)]
    pub resources_dir: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
