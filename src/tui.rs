//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::config::BenchConfig;
use crate::math::dot_product::{available_variants, SIMD_BACKEND};
use crate::report::Report;
use terminal_size::{terminal_size, Width};

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
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " SIMD Dot Product Benchmark ";
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

/// Print the run parameters in a box
pub fn print_config_box(config: &BenchConfig) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Vector length: {}", config.vector_length),
        format!("Trials:        {}", config.trials),
        format!("Warmup:        {}", config.warmup_trials),
        format!("Inputs:        ramp({}) · ramp({})", config.a_start, config.b_start),
        format!("SIMD backend:  {}", SIMD_BACKEND),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(40)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in &lines {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table; speedup is relative to the first kernel run
pub fn print_results_table(report: &Report) {
    let Some(baseline) = report.baseline() else {
        return;
    };

    let term_width = get_term_width();
    // Fixed columns: 12 + 14 + 14 + 9 + 6 = 55, plus spacing and indent
    let fixed_width = 64;
    let label_col_width = term_width.saturating_sub(fixed_width).clamp(10, 24);
    let table_width = label_col_width + 55 + 5;

    println!(
        "  Length: {} ({} trials)",
        report.vector_length, report.trials
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<l_width$} {:>12} {:>14} {:>14} {:>9} {:>6}",
        "Kernel",
        "Result",
        "Elapsed (ms)",
        "Per trial",
        "Speedup",
        "Match",
        l_width = label_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in &report.results {
        let speedup = if result.elapsed_ms > 0.0 {
            baseline.elapsed_ms / result.elapsed_ms
        } else {
            0.0
        };
        let per_trial = format!("{:.1} ns", result.per_trial_ns(report.trials));
        let matches = if result.last_result == baseline.last_result {
            "✓"
        } else {
            "✗"
        };

        println!(
            "  {:<l_width$} {:>12} {:>14.3} {:>14} {:>8.2}x {:>6}",
            truncate(result.label, label_col_width),
            result.last_result,
            result.elapsed_ms,
            per_trial,
            speedup,
            matches,
            l_width = label_col_width
        );
    }
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dot-bench [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --length N, -n    Vector length (default: 1024)");
    println!("  --trials N, -r    Kernel calls per timed batch (default: 1000000)");
    println!("  --warmup N        Untimed calls before each batch (default: 0)");
    println!("  --kernels K, -k   Comma-separated kernel names (default: all)");
    println!("  --no-pin          Do not pin the thread to a CPU core");
    println!("  --table, -t       Print a table instead of the plain report");
    println!("  --list, -l        List available kernels");
    println!("  --help, -h        Show this help message");
    println!();
    println!("Logging is controlled with RUST_LOG (default: warn).");
    println!();
    println!("Examples:");
    println!("  dot-bench                         # Reference run: 1024 elements, 1M trials");
    println!("  dot-bench -n 1027 -r 100000 -t    # Uneven length, table output");
    println!("  dot-bench -k scalar,simd-x4       # Compare two kernels");
}

/// Print the list of available kernels
pub fn print_variants() {
    println!("Available kernels ({} backend):", SIMD_BACKEND);
    println!();
    for variant in available_variants() {
        println!(
            "  {:<10} block {:>2} ({} lanes x {} acc) - {}",
            variant.name,
            variant.shape.block_width(),
            variant.shape.lanes,
            variant.shape.accumulators,
            variant.description
        );
    }
}
