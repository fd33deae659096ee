use crate::rewriter::RewriteOutcome;
use colored::Colorize;

/// Renders the end-of-run summary and skip diagnostics
pub struct SummaryRenderer {
    show_colors: bool,
}

impl SummaryRenderer {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Skip diagnostics go to stderr; the summary line goes to stdout.
    pub fn render(&self, outcome: &RewriteOutcome) {
        if !outcome.skipped.is_empty() {
            eprintln!("{}", self.dim("Coordinates left unchanged:"));
            for skip in &outcome.skipped {
                eprintln!(
                    "  {}",
                    self.dim(&format!(
                        "line {}: {} ({}): {}",
                        skip.line_number, skip.name, skip.coordinate, skip.reason
                    ))
                );
            }
            eprintln!();
        }

        if outcome.updated == 0 {
            println!("All dependency constants are up to date!");
        } else {
            let noun = if outcome.updated == 1 { "line" } else { "lines" };
            let message = format!("Updated {} dependency {noun}", outcome.updated);
            if self.show_colors {
                println!("{}", message.green());
            } else {
                println!("{message}");
            }
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.show_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
