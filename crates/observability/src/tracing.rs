//! Span helpers for the analysis pipeline

/// Create a span for one `analyze` call
///
/// Fields left empty are filled in as the call progresses via `Span::record`.
///
/// # Example
///
/// ```rust
/// use snapjudge_observability::analysis_span;
///
/// let span = analysis_span!("gpt-4.1-mini");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! analysis_span {
    ($model:expr) => {
        $crate::__tracing::info_span!(
            "analysis",
            model = $model,
            decision = $crate::__tracing::field::Empty,
            duration_ms = $crate::__tracing::field::Empty,
            error = $crate::__tracing::field::Empty,
            error.message = $crate::__tracing::field::Empty,
        )
    };
}

/// Create a span for the outbound HTTP request
///
/// # Example
///
/// ```rust
/// use snapjudge_observability::transport_span;
///
/// let span = transport_span!("POST", "https://api.openai.com/v1/responses");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! transport_span {
    ($method:expr, $url:expr) => {
        $crate::__tracing::debug_span!(
            "http.request",
            http.method = $method,
            http.url = $url,
            http.status_code = $crate::__tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and emit it as an error event
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
