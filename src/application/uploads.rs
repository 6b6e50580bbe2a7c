//! Image upload flow in front of the upload collaborator.
//!
//! The form only ever consumes the resulting URL string; this service is
//! the one place that inspects the payload itself, rejecting empty or
//! oversized files before the gateway is involved.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::application::error::AppError;
use crate::application::gateways::UploadGateway;
use crate::config::UploadSettings;

pub struct ImageUploadService {
    gateway: Arc<dyn UploadGateway>,
    max_payload_bytes: u64,
}

impl ImageUploadService {
    pub fn new(gateway: Arc<dyn UploadGateway>, settings: &UploadSettings) -> Self {
        Self {
            gateway,
            max_payload_bytes: settings.max_payload_bytes.get(),
        }
    }

    /// Store an image and return the public URL the form will carry in its
    /// `image_url` field. Failures are reported once; there is no retry.
    pub async fn upload(&self, original_name: &str, payload: Bytes) -> Result<Url, AppError> {
        if payload.is_empty() {
            return Err(AppError::upload_failed("uploaded file is empty"));
        }
        if payload.len() as u64 > self.max_payload_bytes {
            return Err(AppError::upload_failed(format!(
                "uploaded file exceeds the {} byte limit",
                self.max_payload_bytes
            )));
        }

        let url = self
            .gateway
            .store(original_name, payload)
            .await
            .map_err(|err| AppError::upload_failed(err.to_string()))?;

        debug!(%url, original_name, "image stored");
        Ok(url)
    }
}
