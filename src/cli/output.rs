//! CLI output formatting

use crate::scaffold::ScaffoldReport;
use console::Emoji;
use std::fmt::Display;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Notices printed after a pipeline directory was created
pub fn format_init_notices(report: &ScaffoldReport) -> Vec<String> {
    let dir = report.directory.path().display().to_string();
    vec![
        format!("{} Pipeline directory {} created", CHECK, style(&dir).bold()),
        format!(
            "{} Edit {} and run {} to start the analysis",
            INFO,
            style(report.directory.config_path().display()).cyan(),
            style(format!("\"cd {} && workflowtool run\"", dir)).bold()
        ),
    ]
}

/// Format an error for the terminal
pub fn format_error(error: &dyn Display) -> String {
    format!("{} {}", CROSS, style(error).red())
}
