//! CLI for Trust Issues.

mod commands;
mod present;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use trustissues_core::config::{self, TrustConfig};
use trustissues_core::intercept::Decision;

use commands::{run_check, run_register, run_resolve, run_watch};

/// Top-level CLI for Trust Issues.
#[derive(Debug, Parser)]
#[command(name = "trustissues")]
#[command(
    about = "Trust Issues: check a site's trust warnings before you sign up",
    long_about = None
)]
pub struct Cli {
    /// Override the warning service base URL from config.toml.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Answer to the interstitial given up front instead of interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecisionArg {
    Leave,
    Continue,
}

impl From<DecisionArg> for Decision {
    fn from(d: DecisionArg) -> Self {
        match d {
            DecisionArg::Leave => Decision::Leave,
            DecisionArg::Continue => Decision::Continue,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the root domain and display name derived from a URL.
    Resolve {
        /// Page URL.
        url: String,
    },

    /// Look up trust warnings for a URL and show the interstitial.
    Check {
        /// Page URL.
        url: String,

        /// Label of the clicked button; skip the check unless it is a sign-up action.
        #[arg(long)]
        label: Option<String>,

        /// Answer the interstitial without prompting.
        #[arg(long, value_enum)]
        decision: Option<DecisionArg>,
    },

    /// Register a domain with the warning service so it gets analysed.
    Register {
        /// Root domain, e.g. example.com.
        domain: String,
    },

    /// Read tab events from stdin ("activate <tab>", "navigate <tab> <url>") and check each domain.
    Watch,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Load config and apply the `--base-url` override.
fn load_config(base_url: Option<String>) -> Result<TrustConfig> {
    let mut cfg = config::load_or_init()?;
    if let Some(url) = base_url {
        cfg.base_url = url;
        cfg.validate()?;
    }
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { url } => run_resolve(&url)?,
            CliCommand::Check {
                url,
                label,
                decision,
            } => {
                let cfg = load_config(cli.base_url)?;
                run_check(&cfg, &url, label.as_deref(), decision.map(Decision::from)).await?;
            }
            CliCommand::Register { domain } => {
                let cfg = load_config(cli.base_url)?;
                run_register(&cfg, &domain).await?;
            }
            CliCommand::Watch => {
                let cfg = load_config(cli.base_url)?;
                run_watch(&cfg).await?;
            }
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "trustissues", &mut std::io::stdout());
            }
            CliCommand::Man => {
                let man = clap_mangen::Man::new(Cli::command());
                man.render(&mut std::io::stdout())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
