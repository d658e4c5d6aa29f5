//! Common test utilities.

use image::{DynamicImage, Rgb, RgbImage};
use snapjudge::{Analyzer, AnalyzerConfig, HttpTransport};

pub const TEST_KEY: &str = "sk-test-0123456789abcdef";

/// Install a quiet subscriber once per test binary; later calls are no-ops.
pub fn init_tracing() {
    let config = snapjudge_observability::ObservabilityConfig::new("snapjudge-tests")
        .with_log_level("snapjudge=debug")
        .with_ansi(false);
    let _ = snapjudge_observability::init(config);
}

/// Small mockup-like image: white canvas with a dark header bar.
pub fn mockup_image() -> DynamicImage {
    let mut canvas = RgbImage::from_pixel(64, 48, Rgb([255, 255, 255]));
    for x in 0..64 {
        for y in 0..8 {
            canvas.put_pixel(x, y, Rgb([20, 20, 40]));
        }
    }
    DynamicImage::ImageRgb8(canvas)
}

/// Analyzer pointed at a mockito server.
pub fn analyzer_for(server: &mockito::ServerGuard, key: &str) -> Analyzer<HttpTransport> {
    init_tracing();
    let config = AnalyzerConfig::new(key)
        .with_base_url(server.url())
        .with_timeout_secs(5);
    Analyzer::new(config)
}

/// Model output from the end-to-end example.
pub fn verdict_json() -> &'static str {
    r#"{"ideaTitle":"T","ideaSummary":"S","feasibilityScore":80,"costEstimate":"$1k","timeEstimate":"1wk","complexityLevel":2,"decision":"go","reasons":"ok"}"#
}
