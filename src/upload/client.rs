use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tokio::sync::oneshot;
use tracing::debug;

use crate::upload::types::{UploadError, UploadOptions, UploadOutcome};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Posts one file as multipart form data to `endpoint` and normalizes the
/// response.
///
/// The file goes under the form field `file` with its own filename; extra
/// fields from `options` are appended after it. The content-type header is
/// left to reqwest so the multipart boundary is generated correctly. The
/// full body is read as text first: a non-2xx status becomes
/// [`UploadError::Status`] carrying that text, a 2xx body that fails to
/// parse as JSON becomes [`UploadOutcome::Raw`]. One request per call, no
/// retries.
pub async fn upload_docx(
    client: &Client,
    endpoint: &str,
    path: &Path,
    options: UploadOptions,
) -> Result<UploadOutcome, UploadError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| UploadError::InvalidFile(format!("Cannot read {}: {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(UploadError::InvalidFile(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| UploadError::InvalidFile("Invalid filename".to_string()))?
        .to_str()
        .ok_or_else(|| UploadError::InvalidFile("Invalid filename encoding".to_string()))?
        .to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| UploadError::InvalidFile(format!("Cannot read {}: {}", path.display(), e)))?;

    debug!(%endpoint, file = %file_name, size = bytes.len(), "sending upload");

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(DOCX_MIME)?;
    let mut form = Form::new().part("file", part);
    for (key, value) in options.fields {
        form = form.text(key, value);
    }

    let request = client.post(endpoint).headers(options.headers).multipart(form);

    let exchange = async {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok::<_, UploadError>((status, body))
    };

    let (status, body) = tokio::select! {
        _ = wait_for_cancel(options.cancel) => return Err(UploadError::Cancelled),
        result = exchange => result?,
    };

    if !status.is_success() {
        return Err(UploadError::Status {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(UploadOutcome::Json(value)),
        Err(_) => Ok(UploadOutcome::Raw { raw: body }),
    }
}

/// Resolves only when the caller actually fires the cancellation signal. A
/// dropped sender is not a cancellation.
async fn wait_for_cancel(cancel: Option<oneshot::Receiver<()>>) {
    match cancel {
        Some(receiver) => {
            if receiver.await.is_err() {
                std::future::pending::<()>().await;
            }
        }
        None => std::future::pending::<()>().await,
    }
}
