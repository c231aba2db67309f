//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. Each `render_*` builds the text so
//! it can be checked in tests; the `print_*` wrappers write it to stdout.

use std::fmt::Write as _;

use terminal_size::{terminal_size, Width};

use crate::math::dot_product::HarnessRun;
use crate::registry::StrategyRegistry;
use crate::utils::timer::format_seconds;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dot Product: loop vs. aggregation vs. vectorized ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Run parameters box
pub fn render_run_info(run: &HarnessRun, repetitions: usize) -> String {
    let lines = [
        format!("Vector length: {}", run.len),
        format!("Seed:          {}", run.seed),
        format!("Repetitions:   {}", repetitions),
        format!(
            "Pinned core:   {}",
            run.pinned_core
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string())
        ),
    ];
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(40);
    let border = "─".repeat(width + 2);

    let mut out = String::new();
    let _ = writeln!(out, "┌{}┐", border);
    for line in &lines {
        let _ = writeln!(out, "│ {:<width$} │", line, width = width);
    }
    let _ = writeln!(out, "└{}┘", border);
    out
}

/// Per-strategy timings and results
pub fn render_results_table(run: &HarnessRun, term_width: usize) -> String {
    let mut out = String::new();
    if run.outcomes.is_empty() {
        return out;
    }

    // 12+12+12+9+22+10 columns plus separators
    let fixed_width = 85;
    let name_width = term_width.saturating_sub(fixed_width).max(12);
    let table_width = name_width + 83;

    let _ = writeln!(out, "  {}", "─".repeat(table_width));
    let _ = writeln!(
        out,
        "  {:<n_width$} {:>12} {:>12} {:>12} {:>9} {:>22} {:>10}",
        "Strategy",
        "Seconds",
        "Min",
        "Max",
        "CV",
        "Result",
        "Rel. Error",
        n_width = name_width
    );
    let _ = writeln!(out, "  {}", "─".repeat(table_width));

    for outcome in &run.outcomes {
        let stats = &outcome.stats;
        let _ = writeln!(
            out,
            "  {:<n_width$} {:>12.6} {:>12} {:>12} {:>8.2}% {:>22.10} {:>10.2e}",
            truncate(outcome.name, name_width),
            stats.median.as_secs_f64(),
            format_seconds(stats.min),
            format_seconds(stats.max),
            stats.cv() * 100.0,
            outcome.result,
            outcome.relative_error,
            n_width = name_width
        );
    }
    let _ = writeln!(out);
    out
}

/// The two speedup lines
pub fn render_speedups(run: &HarnessRun) -> String {
    let mut out = String::new();
    for (label, speedup) in run.speedups.lines() {
        let _ = writeln!(out, "  Speedup, {}: {}", label, speedup);
    }
    out
}

/// Print a full run report
pub fn print_run(run: &HarnessRun, repetitions: usize) {
    print!("{}", render_run_info(run, repetitions));
    println!();
    print!("{}", render_results_table(run, get_term_width()));
    print!("{}", render_speedups(run));
    println!();
}

/// Print the list of available strategies
pub fn print_available_strategies(registry: &StrategyRegistry) {
    println!("Available strategies:");
    println!();
    for strategy in registry.all() {
        println!("  {:<14} - {}", strategy.name, strategy.description);
    }
}
