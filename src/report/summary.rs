//! Inference summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one rule-inference run
#[derive(Debug, Default)]
pub struct InferenceSummary {
    pub rows: usize,
    pub feature_count: usize,
    pub rules_total: usize,
    pub empty_rules: usize,
    pub rules_after_dedup: usize,
    pub rules_kept: usize,
    pub load_time: Duration,
    pub search_time: Duration,
    pub metrics_time: Duration,
    pub save_time: Duration,
}

impl InferenceSummary {
    pub fn new(rows: usize, feature_count: usize) -> Self {
        Self {
            rows,
            feature_count,
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_search_time(&mut self, elapsed: Duration) {
        self.search_time = elapsed;
    }

    pub fn set_metrics_time(&mut self, elapsed: Duration) {
        self.metrics_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("INFERENCE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Objects"), Cell::new(self.rows)]);
        table.add_row(vec![
            Cell::new("🔣 Feature columns"),
            Cell::new(self.feature_count),
        ]);
        table.add_row(vec![
            Cell::new("📐 Rules found"),
            Cell::new(self.rules_total),
        ]);
        table.add_row(vec![
            Cell::new("∅  Objects without reduct"),
            Cell::new(self.empty_rules).fg(if self.empty_rules == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("🧹 After deduplication"),
            Cell::new(self.rules_after_dedup),
        ]);
        table.add_row(vec![
            Cell::new("✅ Rules kept"),
            Cell::new(self.rules_kept)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let total = self.load_time + self.search_time + self.metrics_time + self.save_time;
        table.add_row(vec![
            Cell::new("⏱️  Total time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
