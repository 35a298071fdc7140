mod state;
mod ui;

use std::path::PathBuf;
use std::sync::mpsc;

use eframe::{egui, App};
use tracing::{info, warn};

use crate::config::Config;
use crate::upload::{upload_docx, validate_selection, UploadError, UploadOptions};
pub use state::{SelectedFile, UploadPhase, UploadState};

pub struct DocxUploaderApp {
    config: Config,
    state: UploadState,
}

impl DocxUploaderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        info!(endpoint = %config.endpoint, "initializing uploader");
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            state: UploadState::default(),
        }
    }

    pub fn select_path(&mut self, path: PathBuf) {
        match SelectedFile::from_path(path) {
            Ok(file) => {
                info!(file = %file.name, size = file.size, "file selected");
                self.state.select(file);
            }
            Err(message) => {
                warn!(%message, "rejected selection");
                self.state.error_message = Some(message);
            }
        }
    }

    pub fn clear_file(&mut self) {
        self.state.clear_selection();
    }

    /// Validates the selection and dispatches the upload worker. A submit
    /// while an upload is pending is a no-op; local rejections set their
    /// message without any network call.
    pub fn submit(&mut self) {
        if self.state.is_loading() {
            return;
        }
        self.state.error_message = None;
        self.state.last_result = None;

        let Some(file) = self.state.selected.clone() else {
            self.state.error_message = Some("Please choose a .docx file first.".to_string());
            return;
        };
        if let Err(message) = validate_selection(&file.name, file.size) {
            self.state.error_message = Some(message);
            return;
        }

        self.state.phase = UploadPhase::Uploading;
        let endpoint = self.config.endpoint.clone();
        let (sender, receiver) = mpsc::channel();
        self.state.outcome_receiver = Some(receiver);
        info!(file = %file.name, size = file.size, %endpoint, "starting upload");

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let client = reqwest::Client::new();
                let result =
                    upload_docx(&client, &endpoint, &file.path, UploadOptions::default()).await;
                let _ = sender.send(result);
            });
        });
    }

    /// Drains the worker channel and folds the outcome into displayed
    /// state. Loading ends on every path, success or failure.
    fn poll_upload(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.state.outcome_receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(result) => {
                self.state.outcome_receiver = None;
                match result {
                    Ok(outcome) => {
                        info!("upload succeeded");
                        self.state.phase = UploadPhase::Succeeded;
                        self.state.last_result = Some(outcome);
                    }
                    Err(err) => {
                        warn!(error = %err, "upload failed");
                        self.state.phase = UploadPhase::Failed;
                        self.state.error_message = Some(format_upload_error(&err));
                    }
                }
                ctx.request_repaint();
            }
            Err(mpsc::TryRecvError::Empty) => {
                ctx.request_repaint();
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.state.outcome_receiver = None;
                self.state.phase = UploadPhase::Failed;
                self.state.error_message =
                    Some("Network error: upload worker stopped unexpectedly".to_string());
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.state.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            self.select_path(path);
        }
    }
}

fn format_upload_error(err: &UploadError) -> String {
    match err {
        UploadError::InvalidFile(message) => message.clone(),
        UploadError::Status { status, body } => {
            let details = body.trim();
            let details = if details.is_empty() { "No details." } else { details };
            format!("Upload failed ({status}). {details}")
        }
        other => format!("Network error: {other}"),
    }
}

impl App for DocxUploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_upload(ctx);
        self.handle_dropped_files(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::upload::{UploadOutcome, MAX_UPLOAD_BYTES};
    use serde_json::json;

    fn test_app() -> DocxUploaderApp {
        DocxUploaderApp::with_config(Config {
            endpoint: "http://127.0.0.1:9/upload-docx".to_string(),
        })
    }

    fn selection(name: &str, size: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/tmp/{name}")),
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn submit_without_selection_sets_message_and_does_not_dispatch() {
        let mut app = test_app();
        app.submit();
        assert_eq!(
            app.state.error_message.as_deref(),
            Some("Please choose a .docx file first.")
        );
        assert!(app.state.outcome_receiver.is_none());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn submit_rejects_non_docx_locally() {
        let mut app = test_app();
        app.state.select(selection("report.pdf", 100));
        app.submit();
        assert_eq!(
            app.state.error_message.as_deref(),
            Some("Only .docx files are allowed.")
        );
        assert!(app.state.outcome_receiver.is_none());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn submit_rejects_oversize_locally_regardless_of_extension() {
        let mut app = test_app();
        app.state.select(selection("report.docx", MAX_UPLOAD_BYTES + 1));
        app.submit();
        assert_eq!(
            app.state.error_message.as_deref(),
            Some("File too large. Limit is 10 MB.")
        );
        assert!(app.state.outcome_receiver.is_none());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn submit_dispatches_at_exact_size_limit() {
        let mut app = test_app();
        app.state.select(selection("report.docx", MAX_UPLOAD_BYTES));
        app.submit();
        assert!(app.state.is_loading());
        assert!(app.state.outcome_receiver.is_some());
        assert!(app.state.error_message.is_none());
    }

    #[test]
    fn submit_while_loading_is_a_no_op() {
        let mut app = test_app();
        app.state.phase = UploadPhase::Uploading;
        // An ungated submit would set the "choose a file" message here.
        app.submit();
        assert!(app.state.error_message.is_none());
        assert!(app.state.outcome_receiver.is_none());
        assert!(app.state.is_loading());
    }

    #[test]
    fn poll_folds_success_outcome_into_state() {
        let mut app = test_app();
        app.state.phase = UploadPhase::Uploading;
        let (sender, receiver) = mpsc::channel();
        app.state.outcome_receiver = Some(receiver);
        sender
            .send(Ok(UploadOutcome::Json(json!({ "ok": true }))))
            .expect("send");

        app.poll_upload(&egui::Context::default());

        assert_eq!(app.state.phase, UploadPhase::Succeeded);
        assert_eq!(
            app.state.last_result,
            Some(UploadOutcome::Json(json!({ "ok": true })))
        );
        assert!(app.state.error_message.is_none());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn poll_folds_server_error_into_displayed_message() {
        let mut app = test_app();
        app.state.phase = UploadPhase::Uploading;
        let (sender, receiver) = mpsc::channel();
        app.state.outcome_receiver = Some(receiver);
        sender
            .send(Err(UploadError::Status {
                status: 500,
                body: "server exploded".to_string(),
            }))
            .expect("send");

        app.poll_upload(&egui::Context::default());

        assert_eq!(app.state.phase, UploadPhase::Failed);
        let error = app.state.error_message.clone().expect("error message");
        assert!(error.contains("500"), "got: {error}");
        assert!(error.contains("server exploded"), "got: {error}");
        assert!(app.state.last_result.is_none());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn status_error_formats_with_code_and_body() {
        assert_eq!(
            format_upload_error(&UploadError::Status {
                status: 500,
                body: "server exploded".to_string(),
            }),
            "Upload failed (500). server exploded"
        );
    }

    #[test]
    fn status_error_without_body_reads_no_details() {
        assert_eq!(
            format_upload_error(&UploadError::Status {
                status: 502,
                body: "  ".to_string(),
            }),
            "Upload failed (502). No details."
        );
    }

    #[test]
    fn cancellation_reads_as_network_failure() {
        assert_eq!(
            format_upload_error(&UploadError::Cancelled),
            "Network error: upload cancelled"
        );
    }
}
