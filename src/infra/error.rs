use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("telemetry error: {0}")]
    Telemetry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InfraError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
