//! Execution metrics panel. Missing values render as `N/A`.

use std::fmt;

use ask_client::Metrics;
use colored::Colorize;

use crate::formatters::{
    format_cost_or_na, format_count_or_na, format_latency_or_na, format_tokens_or_na,
};

pub struct MetricsCard<'a> {
    pub metrics: &'a Metrics,
}

impl fmt::Display for MetricsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;

        write!(f, "{}", "Execution metrics".bold())?;
        row(
            f,
            "Total latency",
            &format_latency_or_na(m.total_latency_ms),
            "full response time",
        )?;
        row(
            f,
            "Retrieval",
            &format_latency_or_na(m.retrieval_latency_ms),
            "vector index search",
        )?;
        row(
            f,
            "Tokens",
            &format_tokens_or_na(m.total_tokens),
            &format!(
                "{} prompt + {} completion",
                format_count_or_na(m.prompt_tokens),
                format_count_or_na(m.completion_tokens)
            ),
        )?;
        row(
            f,
            "Estimated cost",
            &format_cost_or_na(m.estimated_cost_usd),
            "USD",
        )?;

        let details = format!(
            "Top-K: {} chunks | Context: {} chars | Generation: {}",
            format_count_or_na(m.top_k),
            format_count_or_na(m.context_size),
            format_latency_or_na(m.generation_latency_ms)
        );
        write!(f, "\n  {}", details.dimmed())
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str, hint: &str) -> fmt::Result {
    write!(
        f,
        "\n  {:<16}{}  {}",
        label,
        format!("{value:>8}").bold(),
        hint.dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_metrics() {
        colored::control::set_override(false);
        let metrics: Metrics = serde_json::from_value(serde_json::json!({
            "total_latency_ms": 1234.0,
            "retrieval_latency_ms": 345.6,
            "generation_latency_ms": 888.4,
            "prompt_tokens": 150,
            "completion_tokens": 200,
            "total_tokens": 350,
            "estimated_cost_usd": 0.00123,
            "top_k": 5,
            "context_size": 2500
        }))
        .unwrap();

        let out = MetricsCard { metrics: &metrics }.to_string();
        assert!(out.contains("1.2s"));
        assert!(out.contains("346ms"));
        assert!(out.contains("350"));
        assert!(out.contains("150 prompt + 200 completion"));
        assert!(out.contains("$0.001"));
        assert!(out.contains("Top-K: 5 chunks | Context: 2500 chars | Generation: 888ms"));
    }

    #[test]
    fn empty_metrics_fall_back_to_na() {
        colored::control::set_override(false);
        let out = MetricsCard {
            metrics: &Metrics::default(),
        }
        .to_string();
        assert!(out.contains("N/A prompt + N/A completion"));
        assert!(out.contains("Top-K: N/A chunks"));
        assert!(!out.contains("$"));
    }
}
