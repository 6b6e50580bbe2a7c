//! Filesystem-backed upload storage.
//!
//! Stores payloads under a local directory and serves them from a configured
//! public base URL. Stored names are unique (UUID prefix) with a slugified
//! stem, so the original file name never leaks unsafe characters into URLs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::{fs, io::AsyncWriteExt};
use url::Url;
use uuid::Uuid;

use crate::application::gateways::{GatewayError, UploadGateway};
use crate::config::UploadSettings;
use crate::domain::slug::generate_slug;
use crate::infra::error::InfraError;

const FALLBACK_STEM: &str = "upload";

#[derive(Debug)]
pub struct UploadStorage {
    root: PathBuf,
    public_base: Url,
}

impl UploadStorage {
    /// Initialise storage rooted at the configured directory, creating it
    /// if necessary.
    pub fn new(settings: &UploadSettings) -> Result<Self, InfraError> {
        std::fs::create_dir_all(&settings.directory)?;
        Ok(Self {
            root: settings.directory.clone(),
            public_base: settings.public_base_url.clone(),
        })
    }

    fn build_stored_name(original_name: &str) -> String {
        let path = Path::new(original_name);

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(generate_slug)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| FALLBACK_STEM.to_string());

        let mut stored = format!("{}-{stem}", Uuid::new_v4());

        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            let ext = ext.to_ascii_lowercase();
            if !ext.is_empty() && ext.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                stored.push('.');
                stored.push_str(&ext);
            }
        }

        stored
    }
}

#[async_trait]
impl UploadGateway for UploadStorage {
    async fn store(&self, original_name: &str, payload: Bytes) -> Result<Url, GatewayError> {
        if payload.is_empty() {
            return Err(GatewayError::rejected("uploaded file is empty"));
        }

        let stored_name = Self::build_stored_name(original_name);
        let absolute = self.root.join(&stored_name);

        let mut file = fs::File::create(&absolute).await.map_err(io_failure)?;
        if let Err(err) = file.write_all(&payload).await {
            // Do not leave a partial file behind.
            drop(file);
            let _ = fs::remove_file(&absolute).await;
            return Err(io_failure(err));
        }
        file.flush().await.map_err(io_failure)?;

        let url = self.public_base.join(&stored_name).map_err(|err| {
            GatewayError::unavailable(format!("stored name does not form a valid URL: {err}"))
        })?;

        tracing::debug!(%url, size_bytes = payload.len(), "upload stored");
        Ok(url)
    }
}

fn io_failure(err: std::io::Error) -> GatewayError {
    GatewayError::unavailable(format!("upload storage I/O failure: {err}"))
}
