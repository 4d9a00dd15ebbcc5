//! Pure formatters turning raw metrics into short display strings.

/// Shown wherever the server did not report a value.
pub const NOT_AVAILABLE: &str = "N/A";

/// `1234.0` → `"1.2s"`, `450.4` → `"450ms"`. Ties round up: `1250.0` → `"1.3s"`.
pub fn format_latency(ms: f64) -> String {
    if ms >= 1000.0 {
        // Round to tenths ourselves; `{:.1}` alone would round ties to even.
        format!("{:.1}s", (ms / 100.0).round() / 10.0)
    } else {
        format!("{}ms", ms.round() as i64)
    }
}

/// `1234` → `"1.2k"`, `1250` → `"1.3k"`, `450` → `"450"`.
pub fn format_tokens(n: u64) -> String {
    if n >= 1000 {
        let tenths = n / 100 + u64::from(n % 100 >= 50);
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        n.to_string()
    }
}

/// `0.00123` → `"$0.001"`, `0.05` → `"$0.050"`, `0.0625` → `"$0.063"`.
pub fn format_cost(usd: f64) -> String {
    format!("${:.3}", (usd * 1000.0).round() / 1000.0)
}

/// Keeps the first `max_len` characters and appends `"..."` if anything was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

pub fn format_latency_or_na(ms: Option<f64>) -> String {
    ms.map(format_latency)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_tokens_or_na(n: Option<u64>) -> String {
    n.map(format_tokens)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_cost_or_na(usd: Option<f64>) -> String {
    usd.map(format_cost)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Plain integer, or `"N/A"`.
pub fn format_count_or_na(n: Option<u64>) -> String {
    n.map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
