/// Configuration for talking to the RAG backend.
///
/// # Fields
///
/// - `base_url`: Backend root, e.g. `http://localhost:8000` (no trailing slash needed).
/// - `health_timeout_secs`: Optional timeout for health probes. `/ask` is never bounded.
///
/// # Examples
///
/// ```
/// use ask_client::config::client_config::AskClientConfig;
///
/// let cfg = AskClientConfig::new("http://localhost:8000");
/// assert_eq!(cfg.base_url, "http://localhost:8000");
/// assert_eq!(cfg.health_timeout_secs, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskClientConfig {
    /// Backend root URL.
    pub base_url: String,

    /// Optional health probe timeout (in seconds).
    pub health_timeout_secs: Option<u64>,
}

impl AskClientConfig {
    /// Config pointing at `base_url` with no explicit health timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            health_timeout_secs: None,
        }
    }

    /// Base URL without trailing slashes, ready for path concatenation.
    pub fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
