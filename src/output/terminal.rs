// Colored terminal output for trend reports.
//
// Two views of the same report: a compact ranked list, and a per-topic
// bar chart with terms down one axis and weights along the other,
// heaviest term first.

use colored::Colorize;

use crate::summarize::TrendReport;

/// Display the report as a compact ranked list.
pub fn display_trend_list(report: &TrendReport) {
    println!(
        "\n{}",
        format!(
            "=== Discovered Trends (from {} posts) ===",
            report.doc_count
        )
        .bold()
    );
    println!();

    for topic in &report.topics {
        let terms: Vec<&str> = topic.terms.iter().map(|t| t.term.as_str()).collect();
        println!(
            "  {} {}",
            format!("Trend #{}:", topic.rank).bold(),
            terms.join(", ")
        );
    }
    println!();
}

/// Display a horizontal bar chart per topic.
pub fn display_trend_chart(report: &TrendReport) {
    let bar_width: usize = 30;

    for topic in &report.topics {
        println!("  {}", format!("--- Trend #{} ---", topic.rank).bold());

        let max_weight = topic
            .terms
            .iter()
            .map(|t| t.weight)
            .fold(0.0_f64, f64::max);

        for term in &topic.terms {
            // Scale against the topic's heaviest term so every panel
            // uses the full width.
            let filled = if max_weight > 0.0 {
                ((term.weight / max_weight) * bar_width as f64).round() as usize
            } else {
                0
            };
            let bar = "=".repeat(filled);

            let ratio = if max_weight > 0.0 {
                term.weight / max_weight
            } else {
                0.0
            };
            let colored_bar = if ratio >= 0.75 {
                bar.bright_green()
            } else if ratio >= 0.40 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!("    {:<18} {} {:.4}", term.term, colored_bar, term.weight);
        }
        println!();
    }
}
