use thiserror::Error;

/// Central error type for the entire loader.
/// Every fallible function returns `Result<T, LoaderError>`.
///
/// Hosts treat any of these as "library initialization failed" and abort
/// startup of the dependent component; there is no degraded mode.
#[derive(Debug, Error)]
pub enum LoaderError {
    // ── Manifest ────────────────────────────────────────
    #[error("IO error reading manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest decode error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Convenience alias used throughout the crate.
pub type LoaderResult<T> = Result<T, LoaderError>;
