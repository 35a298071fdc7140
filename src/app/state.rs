use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::upload::{UploadError, UploadOutcome};
use crate::utils::file_size::format_size;

/// One upload attempt at a time moves through these states; a new selection
/// returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Result<Self, String> {
        let metadata = fs::metadata(&path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        if !metadata.is_file() {
            return Err(format!("{} is not a regular file", path.display()));
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| "Invalid filename".to_string())?
            .to_string();
        Ok(Self {
            path,
            name,
            size: metadata.len(),
        })
    }

    pub fn size_human(&self) -> String {
        format_size(self.size)
    }
}

#[derive(Default)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub selected: Option<SelectedFile>,
    pub error_message: Option<String>,
    pub last_result: Option<UploadOutcome>,
    pub drag_active: bool,
    pub outcome_receiver: Option<Receiver<Result<UploadOutcome, UploadError>>>,
}

impl UploadState {
    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    /// Replaces the selection; any previous outcome or error no longer
    /// applies. A pending upload keeps its loading gate until the worker
    /// resolves.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.error_message = None;
        self.last_result = None;
        if self.phase != UploadPhase::Uploading {
            self.phase = UploadPhase::Idle;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
