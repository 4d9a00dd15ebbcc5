//! Wire types for the `/ask` endpoint.
//!
//! Optional fields are defaulted here, at deserialization, so that render code
//! only ever sees typed `Option`s and never raw JSON.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Request payload for `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    /// Natural language question, sent exactly as typed.
    pub question: &'a str,
}

/// Response payload for `POST /ask`.
///
/// # Example
/// ```
/// use ask_client::models::AnswerPayload;
/// let p: AnswerPayload =
///     serde_json::from_str(r#"{"answer":"RAG é...","citations":[],"metrics":{}}"#).unwrap();
/// assert_eq!(p.answer, "RAG é...");
/// assert!(p.citations.is_empty());
/// assert_eq!(p.metrics.total_tokens, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// Final model answer (plain text).
    pub answer: String,
    /// Sources backing the answer, in rank order. Absent means none.
    #[serde(default)]
    pub citations: Vec<Citation>,
    /// Execution statistics. Absent means every field is unknown.
    #[serde(default)]
    pub metrics: Metrics,
}

impl AnswerPayload {
    /// Whether the citation section should be shown at all.
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}

/// A `{source, excerpt}` pair identifying supporting text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source document name (e.g. `GESTAO_DE_ESTOQUES.pdf`).
    pub source: String,
    /// Relevant excerpt taken from the source.
    #[serde(default)]
    pub excerpt: String,
    /// Backend chunk identifier, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<u64>,
}

/// Numeric execution statistics; any field may be missing or `null`.
///
/// A value of the wrong shape (a string, a fractional count) decodes to
/// `None` for that field only, so one odd metric never costs the answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    #[serde(deserialize_with = "lenient_number")]
    pub total_latency_ms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub retrieval_latency_ms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub generation_latency_ms: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub prompt_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub completion_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub total_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient_number")]
    pub estimated_cost_usd: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub top_k: Option<u64>,
    /// Context size in characters.
    #[serde(deserialize_with = "lenient_count")]
    pub context_size: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Count(u64),
    Float(f64),
    Other(IgnoredAny),
}

/// Whole, non-negative numbers (`5` or `5.0`); anything else is `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Count(n)) => Some(n),
        Some(RawNumber::Float(f))
            if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 =>
        {
            Some(f as u64)
        }
        _ => None,
    })
}

/// Any finite number; anything else is `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Count(n)) => Some(n as f64),
        Some(RawNumber::Float(f)) if f.is_finite() => Some(f),
        _ => None,
    })
}

impl Metrics {
    /// True when the server reported nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == Metrics::default()
    }
}
