//! Client for the prediction backend
//!
//! The backend owns both ML models. This side validates input, forwards it,
//! and decodes the `{success, ...}` reply envelope. Failures are reported
//! once and never retried.

pub mod advice;
mod error;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::{BackendError, BackendErrorKind};
pub use types::{
    CropFeatures, CropRecommendation, CropType, DiseaseDiagnosis, LeafImage, MAX_IMAGE_BYTES,
};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use types::BackendEnvelope;

/// Common interface for the two prediction endpoints
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Recommend a crop for the given soil and climate readings
    async fn predict_crop(&self, features: &CropFeatures) -> Result<CropRecommendation, BackendError>;

    /// Detect disease on a leaf photo of the given crop
    async fn detect_disease(
        &self,
        crop: CropType,
        image: LeafImage,
    ) -> Result<DiseaseDiagnosis, BackendError>;
}

/// HTTP implementation talking to the Flask-style backend
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<BackendEnvelope, BackendError> {
        let status = response.status();
        let body = response.text().await?;
        BackendEnvelope::decode(status.as_u16(), &body)
    }
}

#[async_trait]
impl BackendService for HttpBackend {
    async fn predict_crop(&self, features: &CropFeatures) -> Result<CropRecommendation, BackendError> {
        features.validate()?;

        let response = self
            .client
            .post(self.endpoint("predict_crop"))
            .json(features)
            .send()
            .await?;

        Self::read_envelope(response).await?.into_crop()
    }

    async fn detect_disease(
        &self,
        crop: CropType,
        image: LeafImage,
    ) -> Result<DiseaseDiagnosis, BackendError> {
        image.validate()?;

        let mime = image.mime();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&mime)
            .map_err(|e| BackendError::invalid_input(format!("Bad image content type: {e}")))?;
        let form = Form::new()
            .part("image", part)
            .text("crop_type", crop.as_str());

        let response = self
            .client
            .post(self.endpoint("predict_disease"))
            .multipart(form)
            .send()
            .await?;

        Self::read_envelope(response).await?.into_diagnosis()
    }
}

/// Logging wrapper for backend services
pub struct LoggingBackend {
    inner: Arc<dyn BackendService>,
}

impl LoggingBackend {
    pub fn new(inner: Arc<dyn BackendService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BackendService for LoggingBackend {
    async fn predict_crop(&self, features: &CropFeatures) -> Result<CropRecommendation, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.predict_crop(features).await;
        let duration = start.elapsed();

        match &result {
            Ok(rec) => {
                tracing::info!(
                    crop = %rec.crop,
                    duration_ms = %duration.as_millis(),
                    "Crop prediction completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    kind = ?e.kind,
                    error = %e.message,
                    duration_ms = %duration.as_millis(),
                    "Crop prediction failed"
                );
            }
        }

        result
    }

    async fn detect_disease(
        &self,
        crop: CropType,
        image: LeafImage,
    ) -> Result<DiseaseDiagnosis, BackendError> {
        let start = std::time::Instant::now();
        let size = image.bytes.len();
        let result = self.inner.detect_disease(crop, image).await;
        let duration = start.elapsed();

        match &result {
            Ok(diag) => {
                tracing::info!(
                    crop = %crop,
                    image_bytes = size,
                    disease = %diag.disease,
                    confidence = ?diag.confidence,
                    duration_ms = %duration.as_millis(),
                    "Disease detection completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    crop = %crop,
                    image_bytes = size,
                    kind = ?e.kind,
                    error = %e.message,
                    duration_ms = %duration.as_millis(),
                    "Disease detection failed"
                );
            }
        }

        result
    }
}
