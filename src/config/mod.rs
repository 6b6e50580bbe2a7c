//! Configuration layer: typed settings with layered precedence (file → env).

use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "scrivano";
const DEFAULT_LISTING_PATH: &str = "/admin/posts";
const DEFAULT_SIGN_OUT_REDIRECT: &str = "/";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_PUBLIC_BASE: &str = "http://localhost:3000/uploads/";
const DEFAULT_UPLOAD_MAX_PAYLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub editor: EditorSettings,
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Where the pipeline navigates after a successful submit.
    pub listing_path: String,
    /// Where sign-out redirects to.
    pub sign_out_redirect: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub directory: PathBuf,
    /// Base URL uploads are served from; always ends with `/` so stored
    /// names join onto it as path segments.
    pub public_base_url: Url,
    pub max_payload_bytes: NonZeroU64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment).
pub fn load() -> Result<Settings, LoadError> {
    load_with_file(None)
}

/// Load settings, additionally honouring an explicit configuration file
/// that takes precedence over the well-known locations.
pub fn load_with_file(path: Option<&Path>) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("SCRIVANO").separator("__"));

    let raw: RawSettings = builder.build()?.try_deserialize()?;
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    editor: RawEditorSettings,
    uploads: RawUploadSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawEditorSettings {
    listing_path: Option<String>,
    sign_out_redirect: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawUploadSettings {
    directory: Option<PathBuf>,
    public_base_url: Option<String>,
    max_payload_bytes: Option<u64>,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        Ok(Self {
            logging: build_logging_settings(raw.logging)?,
            editor: build_editor_settings(raw.editor)?,
            uploads: build_upload_settings(raw.uploads)?,
        })
    }
}

fn build_logging_settings(raw: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match raw.level {
        Some(value) => LevelFilter::from_str(&value)
            .map_err(|_| LoadError::invalid("logging.level", format!("unrecognised level `{value}`")))?,
        None => LevelFilter::INFO,
    };

    let format = match raw.format.as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") | None => LogFormat::Compact,
        Some(other) => {
            return Err(LoadError::invalid(
                "logging.format",
                format!("unrecognised format `{other}`"),
            ));
        }
    };

    Ok(LoggingSettings { level, format })
}

fn build_editor_settings(raw: RawEditorSettings) -> Result<EditorSettings, LoadError> {
    let listing_path = raw
        .listing_path
        .unwrap_or_else(|| DEFAULT_LISTING_PATH.to_string());
    if !listing_path.starts_with('/') {
        return Err(LoadError::invalid(
            "editor.listing_path",
            "must be an absolute path",
        ));
    }

    let sign_out_redirect = raw
        .sign_out_redirect
        .unwrap_or_else(|| DEFAULT_SIGN_OUT_REDIRECT.to_string());
    if !sign_out_redirect.starts_with('/') {
        return Err(LoadError::invalid(
            "editor.sign_out_redirect",
            "must be an absolute path",
        ));
    }

    Ok(EditorSettings {
        listing_path,
        sign_out_redirect,
    })
}

fn build_upload_settings(raw: RawUploadSettings) -> Result<UploadSettings, LoadError> {
    let directory = raw
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

    let mut base = raw
        .public_base_url
        .unwrap_or_else(|| DEFAULT_UPLOAD_PUBLIC_BASE.to_string());
    if !base.ends_with('/') {
        base.push('/');
    }
    let public_base_url = Url::parse(&base)
        .map_err(|err| LoadError::invalid("uploads.public_base_url", err.to_string()))?;

    let max_payload_bytes = NonZeroU64::new(
        raw.max_payload_bytes
            .unwrap_or(DEFAULT_UPLOAD_MAX_PAYLOAD_BYTES),
    )
    .ok_or_else(|| LoadError::invalid("uploads.max_payload_bytes", "must be greater than zero"))?;

    Ok(UploadSettings {
        directory,
        public_base_url,
        max_payload_bytes,
    })
}

#[cfg(test)]
mod tests;
