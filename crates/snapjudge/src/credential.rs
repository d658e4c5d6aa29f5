//! API credential handling: placeholder detection and redaction of secrets in logged text.

use regex::Regex;

lazy_static::lazy_static! {
    // Key-shaped strings that must never reach the logs
    static ref SECRET_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\bsk-[A-Za-z0-9_\-]{16,}").unwrap(), // OpenAI
        Regex::new(r"(?i)Bearer [A-Za-z0-9\-_\.]+").unwrap(),
        Regex::new(r#"(?i)api[_-]?key"?\s*[:=]\s*"?[^"\s,}]+"#).unwrap(),
    ];
}

/// Values shipped in templates and sample configs that are not real keys.
pub const PLACEHOLDER_KEYS: &[&str] = &[
    "YOUR_OPENAI_API_KEY",
    "YOUR_API_KEY",
    "OPENAI_API_KEY",
    "sk-REPLACE_ME",
    "sk-...",
    "<your-api-key>",
];

/// Bearer credential for the model endpoint. `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// True when the key is non-empty and not a known placeholder.
    pub fn is_usable(&self) -> bool {
        !self.0.is_empty()
            && !PLACEHOLDER_KEYS
                .iter()
                .any(|placeholder| placeholder.eq_ignore_ascii_case(&self.0))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiCredential(<empty>)")
        } else {
            f.write_str("ApiCredential([REDACTED])")
        }
    }
}

/// Replace anything key-shaped in `text` with `[REDACTED]`.
pub fn redact(text: &str) -> String {
    SECRET_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "[REDACTED]").into_owned()
        })
}
