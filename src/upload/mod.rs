mod client;
mod types;
mod validate;

pub use client::upload_docx;
pub use types::{UploadError, UploadOptions, UploadOutcome};
pub use validate::{is_docx, validate_selection, MAX_UPLOAD_BYTES, MAX_UPLOAD_MB};
