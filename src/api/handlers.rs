//! HTTP request handlers

use super::render;
use super::types::{
    ChatRequest, ChatResponse, CropResponse, DiseaseResponse, ErrorResponse, HealthResponse,
    WelcomeResponse,
};
use super::AppState;
use crate::backend::advice::{display_label, recommendation_for};
use crate::backend::{BackendError, BackendErrorKind, CropFeatures, CropType, LeafImage, MAX_IMAGE_BYTES};
use axum::{
    extract::{
        multipart::MultipartError, rejection::JsonRejection, DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Room for multipart framing and the crop selector on top of the image
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(get_version))
        // Chat widget
        .route("/api/chat/welcome", get(welcome))
        .route("/api/chat", post(chat))
        // Prediction forms
        .route("/api/predict_crop", post(predict_crop))
        .route(
            "/api/predict_disease",
            post(predict_disease).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .with_state(state)
}

// ============================================================
// Service info
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Krishi API is running",
    })
}

async fn get_version() -> &'static str {
    concat!("krishi ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Chat
// ============================================================

async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        reply: state.responder.welcome().to_string(),
    })
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("Message is empty".to_string()));
    }

    let resolution = state.responder.resolve(text);
    tracing::debug!(
        intent = resolution.intent.unwrap_or("fallback"),
        input_len = text.len(),
        "Chat message answered"
    );

    Ok(Json(ChatResponse {
        reply: resolution.reply.to_string(),
        intent: resolution.intent.map(str::to_string),
        html: render::exchange(text, resolution.reply),
    }))
}

// ============================================================
// Crop recommendation
// ============================================================

async fn predict_crop(
    State(state): State<AppState>,
    payload: Result<Json<CropFeatures>, JsonRejection>,
) -> Result<Json<CropResponse>, AppError> {
    let Json(features) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    features.validate()?;

    let rec = state.backend.predict_crop(&features).await?;

    Ok(Json(CropResponse {
        success: true,
        crop: rec.crop,
    }))
}

// ============================================================
// Disease detection
// ============================================================

async fn predict_disease(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DiseaseResponse>, AppError> {
    let mut image = None;
    let mut crop = CropType::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::multipart)?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(AppError::multipart)?;
                image = Some(LeafImage {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("crop_type") => {
                let value = field
                    .text()
                    .await
                    .map_err(AppError::multipart)?;
                if !value.trim().is_empty() {
                    crop = value.parse()?;
                }
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| AppError::BadRequest("No image uploaded".to_string()))?;
    image.validate()?;
    let diag = state.backend.detect_disease(crop, image).await?;

    let recommendation = diag
        .recommendation
        .clone()
        .unwrap_or_else(|| recommendation_for(&diag.disease).to_string());

    Ok(Json(DiseaseResponse {
        success: true,
        disease: display_label(&diag.disease),
        healthy: diag.is_healthy(),
        confidence: diag.confidence,
        confidence_percent: diag.confidence_percent(),
        recommendation,
    }))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    BadGateway(String),
    GatewayTimeout(String),
    /// Multipart failures carry their own status, e.g. 413 for an oversized body
    Status(StatusCode, String),
}

impl AppError {
    fn multipart(e: MultipartError) -> Self {
        AppError::Status(e.status(), e.body_text())
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        if e.kind.is_user_error() {
            AppError::BadRequest(e.message)
        } else if e.kind == BackendErrorKind::Timeout {
            AppError::GatewayTimeout(e.message)
        } else {
            AppError::BadGateway(e.message)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            AppError::Status(status, msg) => (status, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
