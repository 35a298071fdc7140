use reqwest::header::HeaderMap;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

/// Normalized result of a successful upload. A 2xx body that is not valid
/// JSON degrades to the raw-text wrapper instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UploadOutcome {
    Json(serde_json::Value),
    Raw { raw: String },
}

#[derive(Debug, Error)]
pub enum UploadError {
    /// The input was not a readable regular file. Raised before any network
    /// access.
    #[error("{0}")]
    InvalidFile(String),

    /// The server answered with a non-2xx status; the body is opaque
    /// diagnostic text.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation signal fired while the request was in
    /// flight.
    #[error("upload cancelled")]
    Cancelled,
}

/// Optional knobs for [`upload_docx`](crate::upload::upload_docx), mirroring
/// what a caller may attach to a single request.
///
/// `headers` must not carry a content-type: the multipart boundary is
/// generated by the transport.
#[derive(Default)]
pub struct UploadOptions {
    pub fields: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub cancel: Option<oneshot::Receiver<()>>,
}
