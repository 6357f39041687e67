pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "skillbridge")]
#[command(about = "Freelance service estimator with booking notifications")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct EstimateArgs {
    /// Service type: design, web, content (anything else is Generic)
    #[arg(long, default_value = "web")]
    pub service: String,

    #[arg(long, default_value = "1")]
    pub complexity: i64,

    #[arg(long, default_value = "10")]
    pub hours: f64,

    #[arg(long)]
    pub rush: bool,

    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Interactive session (default)
    Session,
    /// Print the estimated cost
    Estimate(EstimateArgs),
    /// Log in, book the estimate and print the dashboard
    Book {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[command(flatten)]
        estimate: EstimateArgs,
    },
    /// List the service catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
