use std::path::PathBuf;

use anyhow::Result;
use vectorguard::config::Config;

use crate::output::{self, CommandSummary};
use crate::OutputFormat;

pub fn run(format: OutputFormat, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".vectorguard.toml"));
    let config = Config::load(&config_path)?;
    let registry = vectorguard_detectors::registry_with_config(&config)?;

    let commands: Vec<CommandSummary> = registry
        .iter()
        .map(|descriptor| {
            let detector = (descriptor.factory)();
            CommandSummary {
                name: descriptor.name.clone(),
                title: detector.template().title.clone(),
                vectors: detector.catalog().severity_counts(),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => output::json::print(&commands)?,
        OutputFormat::Text => output::text::print_list(&commands),
    }

    Ok(())
}
