use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use panelkit_designer::format_table;
use panelkit_settings::{Config, ConfigFormat};

use crate::session::{Session, SessionReport, SessionScript};

#[derive(Debug, Parser)]
#[command(
    name = "panelkit",
    about = "Lay out circular cutouts on a panel with keep-out clash checks",
    version
)]
pub struct Cli {
    /// Configuration file (.json or .toml); defaults to the platform config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a recorded session and print what happened.
    Replay(ReplayArgs),

    /// Print the default configuration.
    #[command(name = "default-config")]
    DefaultConfig(DefaultConfigArgs),
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Session script (JSON)
    pub session: PathBuf,

    /// Write the final layout as SVG
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct DefaultConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Toml => ConfigFormat::Toml,
            OutputFormat::Json => ConfigFormat::Json,
        }
    }
}

/// Loads the configuration the command line points at.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")
}

pub fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Replay(args) => run_replay(args, config),
        Commands::DefaultConfig(args) => {
            print!("{}", Config::default().to_string_as(args.format.into())?);
            Ok(())
        }
    }
}

fn run_replay(args: ReplayArgs, config: &Config) -> anyhow::Result<()> {
    let script = SessionScript::load(&args.session)
        .with_context(|| format!("Failed to load session {}", args.session.display()))?;
    info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        args.session.display()
    );

    let mut session = Session::new(config);
    let report = session.run(&script);

    if let Some(path) = &args.svg {
        std::fs::write(path, session.render_svg())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote layout to {}", path.display());
    }

    match args.format {
        ReportFormat::Text => print!("{}", render_text(&report, config)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.has_errors() {
        anyhow::bail!("Session finished with errors");
    }
    Ok(())
}

/// Human-readable report: one line per event, then the cutout table.
pub fn render_text(report: &SessionReport, config: &Config) -> String {
    let mut text = String::new();
    for event in &report.events {
        text.push_str(&format!(
            "[step {}] {:?}: {}\n",
            event.step, event.level, event.message
        ));
    }
    text.push_str(&format_table(
        &report.cutouts,
        config.cutout.measurement_system,
    ));
    text
}
