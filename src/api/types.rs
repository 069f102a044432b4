//! API request and response types

use serde::{Deserialize, Serialize};

/// Chat message typed into the widget
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Bot reply plus the rendered transcript fragment
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Matched category id; absent when the fallback pool answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Escaped user and bot message blocks, ready to append
    pub html: String,
}

/// Greeting for an empty transcript
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct CropResponse {
    pub success: bool,
    pub crop: String,
}

#[derive(Debug, Serialize)]
pub struct DiseaseResponse {
    pub success: bool,
    pub disease: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_percent: Option<u8>,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
