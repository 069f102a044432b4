//! Request and reply types for the prediction backend

use super::BackendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uploads above this size are refused before they reach the backend
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Soil and climate readings for crop recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropFeatures {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    pub ph: f64,
    /// Millimetres
    pub rainfall: f64,
}

impl CropFeatures {
    pub fn validate(&self) -> Result<(), BackendError> {
        let fields = [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("ph", self.ph),
            ("rainfall", self.rainfall),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BackendError::invalid_input(format!("{name} must be a number")));
        }

        for (name, value) in [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("rainfall", self.rainfall),
        ] {
            if value < 0.0 {
                return Err(BackendError::invalid_input(format!(
                    "{name} cannot be negative"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(BackendError::invalid_input(
                "humidity must be between 0 and 100",
            ));
        }
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(BackendError::invalid_input("ph must be between 0 and 14"));
        }
        Ok(())
    }
}

/// Crops with a trained disease model on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    #[default]
    Corn,
    Rice,
    Wheat,
}

impl CropType {
    pub fn as_str(self) -> &'static str {
        match self {
            CropType::Corn => "corn",
            CropType::Rice => "rice",
            CropType::Wheat => "wheat",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropType {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "corn" => Ok(CropType::Corn),
            "rice" => Ok(CropType::Rice),
            "wheat" => Ok(CropType::Wheat),
            _ => Err(BackendError::invalid_input("Invalid crop type")),
        }
    }
}

/// Uploaded leaf photo
#[derive(Debug, Clone)]
pub struct LeafImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl LeafImage {
    fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    pub fn validate(&self) -> Result<(), BackendError> {
        if self.file_name.trim().is_empty() {
            return Err(BackendError::invalid_input("No image selected"));
        }
        match self.extension() {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(BackendError::invalid_input(
                    "Invalid file type. Please upload PNG, JPG, or JPEG",
                ))
            }
        }
        if self.bytes.is_empty() {
            return Err(BackendError::invalid_input("Uploaded image is empty"));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(BackendError::invalid_input("File size must be less than 10MB"));
        }
        Ok(())
    }

    /// Declared content type, or one inferred from the extension
    pub fn mime(&self) -> String {
        if let Some(ct) = self.content_type.as_deref().filter(|ct| ct.starts_with("image/")) {
            return ct.to_string();
        }
        match self.extension().as_deref() {
            Some("png") => "image/png".to_string(),
            _ => "image/jpeg".to_string(),
        }
    }
}

/// Crop the backend recommends for the submitted conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropRecommendation {
    pub crop: String,
}

/// Disease detected on a leaf photo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseDiagnosis {
    pub disease: String,
    /// 0.0 to 1.0
    pub confidence: Option<f64>,
    pub recommendation: Option<String>,
}

impl DiseaseDiagnosis {
    pub fn is_healthy(&self) -> bool {
        self.disease.to_lowercase().contains("healthy")
    }

    /// Confidence as a rounded percentage
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> Option<u8> {
        self.confidence
            .filter(|c| c.is_finite())
            .map(|c| (c * 100.0).round().clamp(0.0, 100.0) as u8)
    }
}

/// Reply envelope shared by both backend endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct BackendEnvelope {
    pub success: bool,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP status the envelope arrived with
    #[serde(skip)]
    pub status: u16,
}

impl BackendEnvelope {
    /// Decode a reply body. The backend sends the envelope on error statuses too.
    pub fn decode(status: u16, body: &str) -> Result<Self, BackendError> {
        let mut envelope: Self = serde_json::from_str(body).map_err(|e| {
            BackendError::invalid_response(format!(
                "Backend returned HTTP {status} with an unreadable body: {e}"
            ))
        })?;
        envelope.status = status;
        Ok(envelope)
    }

    /// `success: false` on a 5xx is a backend fault, not a bad submission
    fn rejection(self, default: &str) -> BackendError {
        let message = self
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| default.to_string());
        if self.status >= 500 {
            BackendError::server(message)
        } else {
            BackendError::rejected(message)
        }
    }

    pub fn into_crop(self) -> Result<CropRecommendation, BackendError> {
        if !self.success {
            return Err(self.rejection("Could not predict crop"));
        }
        match self.crop {
            Some(crop) if !crop.trim().is_empty() => Ok(CropRecommendation { crop }),
            _ => Err(BackendError::invalid_response("Backend reply is missing the crop")),
        }
    }

    pub fn into_diagnosis(self) -> Result<DiseaseDiagnosis, BackendError> {
        if !self.success {
            return Err(self.rejection("Could not detect disease"));
        }
        let disease = match self.disease {
            Some(d) if !d.trim().is_empty() => d,
            _ => {
                return Err(BackendError::invalid_response(
                    "Backend reply is missing the disease",
                ))
            }
        };
        Ok(DiseaseDiagnosis {
            disease,
            confidence: self.confidence,
            recommendation: self.recommendation.filter(|r| !r.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::BackendErrorKind;
    use super::*;

    fn features() -> CropFeatures {
        CropFeatures {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 20.8,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.9,
        }
    }

    fn image(name: &str, size: usize) -> LeafImage {
        LeafImage {
            file_name: name.to_string(),
            content_type: None,
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_valid_features() {
        assert!(features().validate().is_ok());
        let cold = CropFeatures {
            temperature: -5.0,
            ..features()
        };
        assert!(cold.validate().is_ok());
    }

    #[test]
    fn test_invalid_features() {
        let cases = [
            CropFeatures { nitrogen: f64::NAN, ..features() },
            CropFeatures { rainfall: f64::INFINITY, ..features() },
            CropFeatures { potassium: -1.0, ..features() },
            CropFeatures { humidity: 101.0, ..features() },
            CropFeatures { ph: 14.5, ..features() },
        ];
        for case in cases {
            let err = case.validate().unwrap_err();
            assert_eq!(err.kind, BackendErrorKind::InvalidInput, "{case:?}");
        }
    }

    #[test]
    fn test_features_wire_names() {
        let json = serde_json::to_value(features()).unwrap();
        for key in ["nitrogen", "phosphorus", "potassium", "temperature", "humidity", "ph", "rainfall"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_crop_type_parsing() {
        assert_eq!("Rice".parse::<CropType>().unwrap(), CropType::Rice);
        assert_eq!(" wheat ".parse::<CropType>().unwrap(), CropType::Wheat);
        assert!("barley".parse::<CropType>().is_err());
        assert_eq!(CropType::default(), CropType::Corn);
        assert_eq!(CropType::Wheat.to_string(), "wheat");
    }

    #[test]
    fn test_image_validation() {
        assert!(image("leaf.PNG", 10).validate().is_ok());
        assert!(image("leaf.jpeg", 10).validate().is_ok());
        assert!(image("", 10).validate().is_err());
        assert!(image("leaf.gif", 10).validate().is_err());
        assert!(image("leaf", 10).validate().is_err());
        assert!(image("leaf.jpg", 0).validate().is_err());
        assert!(image("leaf.jpg", MAX_IMAGE_BYTES).validate().is_ok());
        assert!(image("leaf.jpg", MAX_IMAGE_BYTES + 1).validate().is_err());
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image("a.png", 1).mime(), "image/png");
        assert_eq!(image("a.JPG", 1).mime(), "image/jpeg");
        let declared = LeafImage {
            content_type: Some("image/png".to_string()),
            ..image("a.jpg", 1)
        };
        assert_eq!(declared.mime(), "image/png");
        let bogus = LeafImage {
            content_type: Some("application/octet-stream".to_string()),
            ..image("a.png", 1)
        };
        assert_eq!(bogus.mime(), "image/png");
    }

    #[test]
    fn test_confidence_percent() {
        let mut diag = DiseaseDiagnosis {
            disease: "Rice - Brown spot".to_string(),
            confidence: Some(0.876),
            recommendation: None,
        };
        assert_eq!(diag.confidence_percent(), Some(88));
        diag.confidence = Some(1.7);
        assert_eq!(diag.confidence_percent(), Some(100));
        diag.confidence = None;
        assert_eq!(diag.confidence_percent(), None);
        assert!(!diag.is_healthy());
    }

    #[test]
    fn test_envelope_success() {
        let env = BackendEnvelope::decode(200, r#"{"success":true,"crop":"Rice"}"#).unwrap();
        assert_eq!(env.into_crop().unwrap().crop, "Rice");

        let env = BackendEnvelope::decode(
            200,
            r#"{"success":true,"disease":"Wheat - healthy","confidence":0.9,"recommendation":"Great!"}"#,
        )
        .unwrap();
        let diag = env.into_diagnosis().unwrap();
        assert!(diag.is_healthy());
        assert_eq!(diag.recommendation.as_deref(), Some("Great!"));
    }

    #[test]
    fn test_envelope_rejection_carries_backend_message() {
        let env = BackendEnvelope::decode(400, r#"{"success":false,"error":"'ph'"}"#).unwrap();
        let err = env.into_crop().unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Rejected);
        assert_eq!(err.message, "'ph'");

        let env = BackendEnvelope::decode(400, r#"{"success":false}"#).unwrap();
        assert_eq!(env.into_diagnosis().unwrap_err().message, "Could not detect disease");
    }

    #[test]
    fn test_envelope_failure_on_5xx_is_server_fault() {
        let env = BackendEnvelope::decode(
            500,
            r#"{"success":false,"error":"cannot identify image file"}"#,
        )
        .unwrap();
        let err = env.into_diagnosis().unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::Server);
        assert_eq!(err.message, "cannot identify image file");
        assert!(!err.kind.is_user_error());

        let env = BackendEnvelope::decode(503, r#"{"success":false}"#).unwrap();
        assert_eq!(env.into_crop().unwrap_err().kind, BackendErrorKind::Server);
    }

    #[test]
    fn test_envelope_malformed() {
        let err = BackendEnvelope::decode(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind, BackendErrorKind::InvalidResponse);

        let env = BackendEnvelope::decode(200, r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_crop().unwrap_err().kind, BackendErrorKind::InvalidResponse);
    }
}
