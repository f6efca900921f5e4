use clap::Parser;

use panelkit::cli::{self, Cli};
use panelkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;

    // Initialize logging
    init_logging(&config.logging)?;

    cli::run(cli, &config)
}
