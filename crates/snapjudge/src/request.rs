//! Request builder: image + instructions -> Responses API body.

use image::DynamicImage;
use serde::Serialize;

use crate::encode::{jpeg_data_url, JPEG_MIME};
use crate::error::Result;

/// Low-cost multimodal model used for every analysis.
pub const MODEL: &str = "gpt-4.1-mini";

/// Output length cap, in tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 500;

/// Provider-side image fidelity. "low" bounds the per-image cost.
pub const IMAGE_DETAIL: &str = "low";

/// Transport-ready analysis request. Built fresh for each call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    model: String,
    max_output_tokens: u32,
    input: Vec<InputMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMessage {
    pub role: String,
    pub content: Vec<InputContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputContent {
    InputText { text: String },
    InputImage { image_url: String, detail: String },
}

impl AnalysisRequest {
    /// Encode `image` and pair it with `instructions` in a single user turn:
    /// instruction text first, image second.
    pub fn build(image: &DynamicImage, instructions: &str) -> Result<Self> {
        let image_url = jpeg_data_url(image)?;
        Ok(Self::from_data_url(image_url, instructions))
    }

    /// Assemble a request around an already encoded data URL.
    pub fn from_data_url(image_url: String, instructions: &str) -> Self {
        Self {
            model: MODEL.to_string(),
            max_output_tokens: MAX_OUTPUT_TOKENS,
            input: vec![InputMessage {
                role: "user".to_string(),
                content: vec![
                    InputContent::InputText {
                        text: instructions.to_string(),
                    },
                    InputContent::InputImage {
                        image_url,
                        detail: IMAGE_DETAIL.to_string(),
                    },
                ],
            }],
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    pub fn input(&self) -> &[InputMessage] {
        &self.input
    }

    /// Data URL of the embedded image, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.parts().find_map(|part| match part {
            InputContent::InputImage { image_url, .. } => Some(image_url.as_str()),
            _ => None,
        })
    }

    fn parts(&self) -> impl Iterator<Item = &InputContent> {
        self.input.iter().flat_map(|message| message.content.iter())
    }

    /// Log-safe summary: the base64 payload is replaced by its length.
    pub fn describe(&self) -> String {
        let image_len = self.image_url().map(str::len).unwrap_or(0);
        format!(
            "model={} max_output_tokens={} parts={} image={}({} bytes)",
            self.model,
            self.max_output_tokens,
            self.parts().count(),
            JPEG_MIME,
            image_len
        )
    }
}
