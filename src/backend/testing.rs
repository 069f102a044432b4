//! Mock backend for handler tests

use super::{
    BackendError, BackendService, CropFeatures, CropRecommendation, CropType, DiseaseDiagnosis,
    LeafImage,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Backend that returns queued results and records what it was sent
#[derive(Default)]
pub struct MockBackend {
    crop_replies: Mutex<VecDeque<Result<CropRecommendation, BackendError>>>,
    disease_replies: Mutex<VecDeque<Result<DiseaseDiagnosis, BackendError>>>,
    crop_requests: Mutex<Vec<CropFeatures>>,
    disease_requests: Mutex<Vec<(CropType, LeafImage)>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_crop(&self, reply: Result<CropRecommendation, BackendError>) {
        self.crop_replies.lock().unwrap().push_back(reply);
    }

    pub fn queue_disease(&self, reply: Result<DiseaseDiagnosis, BackendError>) {
        self.disease_replies.lock().unwrap().push_back(reply);
    }

    pub fn crop_requests(&self) -> Vec<CropFeatures> {
        self.crop_requests.lock().unwrap().clone()
    }

    pub fn disease_requests(&self) -> Vec<(CropType, LeafImage)> {
        self.disease_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendService for MockBackend {
    async fn predict_crop(&self, features: &CropFeatures) -> Result<CropRecommendation, BackendError> {
        self.crop_requests.lock().unwrap().push(*features);
        self.crop_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::network("No mock reply queued")))
    }

    async fn detect_disease(
        &self,
        crop: CropType,
        image: LeafImage,
    ) -> Result<DiseaseDiagnosis, BackendError> {
        self.disease_requests.lock().unwrap().push((crop, image));
        self.disease_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::network("No mock reply queued")))
    }
}
