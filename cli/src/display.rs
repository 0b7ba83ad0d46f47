use collabpath_core::{CollabGraph, QueryOutcome, QueryResult};

use crate::app::RunSummary;
use crate::colors::ColorScheme;
use crate::script::Query;

// Everything here goes to stderr; stdout carries query results only.

pub fn display_dataset_info(graph: &CollabGraph, load_duration: f64, colors: &ColorScheme) {
    eprintln!(
        "📚 Loaded {} artists and {} collaborations in {} sec",
        colors.number(&format_number(graph.len())),
        colors.number(&format_number(graph.edge_count())),
        colors.number(&format!("{:.3}", load_duration))
    );
}

pub fn display_query_info(query: &Query, colors: &ColorScheme) {
    let mut line = format!(
        "🔍 {} {} → {}",
        colors.command(&query.kind.to_string()),
        colors.artist_name(&format!("\"{}\"", query.from)),
        colors.artist_name(&format!("\"{}\"", query.to))
    );

    if !query.excluded.is_empty() {
        let excluded = query
            .excluded
            .iter()
            .map(|name| colors.artist_name(&format!("\"{}\"", name)).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" avoiding {}", excluded));
    }

    eprintln!("{}", line);
}

pub fn display_query_statistics(result: &QueryResult, colors: &ColorScheme) {
    let verdict = match &result.outcome {
        QueryOutcome::Found { steps } => {
            colors.success(&format!("✅ {} steps", steps.len()))
        }
        QueryOutcome::NoPath { .. } => colors.error("❌ no path"),
        QueryOutcome::NotFound { .. } => colors.warning("⚠️  unknown artist"),
    };

    eprintln!(
        "{} {} · explored {} artists in {} sec",
        colors.stats("📊"),
        verdict,
        colors.number(&format_number(result.artists_visited)),
        colors.number(&format!("{:.3}", result.search_duration))
    );
}

pub fn display_unrecognized(line: &str, colors: &ColorScheme) {
    eprintln!("{}", colors.warning(&format!("⚠️  {} is not a command", line)));
}

pub fn display_run_summary(summary: &RunSummary, colors: &ColorScheme) {
    eprintln!("\n---\n");
    eprintln!(
        "{} Ran {} queries, found {} paths, explored {} artists in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(summary.queries)),
        colors.number(&format_number(summary.paths_found)),
        colors.number(&format_number(summary.artists_visited)),
        colors.number(&format!("{:.3}", summary.search_duration))
    );
}

pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
