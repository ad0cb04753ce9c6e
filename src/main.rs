use clap::Parser;

use drawerkit::cli::Cli;
use drawerkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    cli.run()
}
