//! Printers command listing built-in presets.

use clap::Args;

use drawerkit_devicedb::{PrinterManager, DEFAULT_PRINTER};

/// List built-in printer presets.
#[derive(Debug, Clone, Args)]
pub struct PrintersArgs {}

impl PrintersArgs {
    /// Execute the printers command
    pub fn execute(&self) -> anyhow::Result<()> {
        let manager = PrinterManager::new();

        println!("Built-in printer presets:");
        for profile in manager.presets() {
            let marker = if profile.id == DEFAULT_PRINTER { " (default)" } else { "" };
            println!("  {:<12} {}{}", profile.id, profile, marker);
        }

        Ok(())
    }
}
