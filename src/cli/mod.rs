//! CLI command handlers for DrawerKit.
//!
//! Each subcommand lives in its own module as an `Args` struct with an
//! `execute()` method.

pub mod baseplate;
pub mod drawer;
pub mod printers;
pub mod spacer;

pub use baseplate::BaseplateArgs;
pub use drawer::DrawerArgs;
pub use printers::PrintersArgs;
pub use spacer::SpacerArgs;

use clap::{Parser, Subcommand};

/// Generate custom Gridfinity storage solutions.
///
/// Creates drawer organizing systems with spacers and matching baseplates
/// optimized for your drawer dimensions and printer constraints.
#[derive(Parser, Debug)]
#[command(name = "drawerkit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a complete drawer solution with spacers and baseplate(s)
    Drawer(DrawerArgs),
    /// Generate a Gridfinity baseplate with specified unit dimensions
    Baseplate(BaseplateArgs),
    /// Generate drawer spacer components
    Spacer(SpacerArgs),
    /// List built-in printer presets
    Printers(PrintersArgs),
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Drawer(args) => args.execute(),
            Command::Baseplate(args) => args.execute(),
            Command::Spacer(args) => args.execute(),
            Command::Printers(args) => args.execute(),
        }
    }
}
