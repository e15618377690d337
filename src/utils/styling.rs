//! Terminal styling utilities for step-by-step pipeline output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static RULE: Emoji<'_, '_> = Emoji("📐 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗  ██████╗ ██╗   ██╗ ██████╗ ██╗  ██╗███████╗███████╗████████╗
    ██╔══██╗██╔═══██╗██║   ██║██╔════╝ ██║  ██║██╔════╝██╔════╝╚══██╔══╝
    ██████╔╝██║   ██║██║   ██║██║  ███╗███████║███████╗█████╗     ██║
    ██╔══██╗██║   ██║██║   ██║██║   ██║██╔══██║╚════██║██╔══╝     ██║
    ██║  ██║╚██████╔╝╚██████╔╝╚██████╔╝██║  ██║███████║███████╗   ██║
    ╚═╝  ╚═╝ ╚═════╝  ╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚══════╝╚══════╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⊆").magenta().bold(),
        style("Reduct rules from symbolic decision tables").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(
    input: &Path,
    id_column: &str,
    decision_column: &str,
    feature_count: usize,
    output: &Path,
) {
    println!(
        "    {} Input:    {}",
        FOLDER,
        style(truncate_path(input, 48)).white()
    );
    println!(
        "    {} Identity: {}",
        RULE,
        style(truncate_string(id_column, 48)).white()
    );
    println!(
        "    {} Decision: {}",
        TARGET,
        style(truncate_string(decision_column, 48)).white()
    );
    println!(
        "    {} Features: {}",
        RULE,
        style(format!("{} column(s)", feature_count)).white()
    );
    println!(
        "    {} Output:   {}",
        SAVE,
        style(truncate_path(output, 48)).white()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, threshold_info: Option<&str>) {
    if let Some(info) = threshold_info {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

/// Print elapsed time for a pipeline step
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "      {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Rule inference complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
