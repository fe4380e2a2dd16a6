use anyhow::{anyhow, Result};
use vectorguard::detector::RegistryError;

use crate::output::{self, VectorListing};
use crate::OutputFormat;

pub fn run(command: &str, format: OutputFormat, no_color: bool) -> Result<()> {
    let registry = vectorguard_detectors::builtin_registry()?;

    let factory = match registry.resolve(command) {
        Ok(factory) => factory,
        Err(err @ RegistryError::UnknownCommand(_)) => {
            eprintln!("error: {err}");
            eprintln!("\nAvailable commands:");
            for name in registry.list() {
                eprintln!("  {name}");
            }
            return Err(anyhow!(err));
        }
        Err(err) => return Err(err.into()),
    };

    let detector = factory();

    match format {
        OutputFormat::Json => output::json::print(&VectorListing {
            command: command.to_string(),
            vectors: detector.catalog().iter().cloned().collect(),
        })?,
        OutputFormat::Text => output::text::print_vectors(command, detector.catalog(), no_color),
    }

    Ok(())
}
