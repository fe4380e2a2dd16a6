use colored::Colorize;
use vectorguard::catalog::{Severity, VectorCatalog};

use super::CommandSummary;

pub fn print_list(commands: &[CommandSummary]) {
    println!(
        "{:<38} {:>8} {:>9} {:>6} {:>8} {:>5}  Title",
        "Command", "Vectors", "Critical", "High", "Medium", "Low"
    );
    println!("{}", "-".repeat(110));

    for c in commands {
        println!(
            "{:<38} {:>8} {:>9} {:>6} {:>8} {:>5}  {}",
            c.name,
            c.vectors.total(),
            c.vectors.critical,
            c.vectors.high,
            c.vectors.medium,
            c.vectors.low,
            c.title
        );
    }

    let total: usize = commands.iter().map(|c| c.vectors.total()).sum();
    println!(
        "\nTotal: {} commands, {} attack vectors",
        commands.len(),
        total
    );
}

pub fn print_vectors(command: &str, catalog: &VectorCatalog, no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }

    println!();
    println!("  {} {}", "vectorguard".bold(), command.bold());
    println!("  {} attack vectors", catalog.len());
    println!();

    for vector in catalog.iter() {
        let severity_label = match vector.severity {
            Severity::Critical => "CRITICAL".red().bold(),
            Severity::High => "HIGH".yellow().bold(),
            Severity::Medium => "MEDIUM".yellow(),
            Severity::Low => "LOW".blue(),
        };

        println!("  [{}] {} ({})", severity_label, vector.title, vector.id);
        println!("    {}", vector.summary);
        for note in &vector.notes {
            println!("    {} {}", "-".dimmed(), note);
        }
        println!();
    }
}
