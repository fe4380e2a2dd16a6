use std::path::PathBuf;

use anyhow::{anyhow, Result};
use vectorguard::brief::fingerprint;
use vectorguard::config::Config;
use vectorguard::detector::RegistryError;

pub fn run(command: &str, config_path: Option<PathBuf>, print_fingerprint: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".vectorguard.toml"));
    let config = Config::load(&config_path)?;
    let registry = vectorguard_detectors::registry_with_config(&config)?;

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

    let brief = factory().produce_brief()?;

    if print_fingerprint {
        println!("{}", fingerprint(&brief));
    } else {
        print!("{brief}");
    }

    Ok(())
}
