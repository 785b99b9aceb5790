use clap::Parser;
use tracing::debug;

use tax_cli::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;
    debug!(?cli, "parsed arguments");

    let stdout = std::io::stdout();
    app::run(&cli, &mut stdout.lock())
}
