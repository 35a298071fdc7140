pub const MAX_UPLOAD_MB: u64 = 10;
pub const MAX_UPLOAD_BYTES: u64 = MAX_UPLOAD_MB * 1024 * 1024;

pub fn is_docx(name: &str) -> bool {
    name.len() > ".docx".len() && name.to_ascii_lowercase().ends_with(".docx")
}

/// Checks the client-side constraints for a selection. Returns the
/// user-facing rejection message on failure; the limit is inclusive.
pub fn validate_selection(name: &str, size: u64) -> Result<(), String> {
    if !is_docx(name) {
        return Err("Only .docx files are allowed.".to_string());
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(format!("File too large. Limit is {} MB.", MAX_UPLOAD_MB));
    }
    Ok(())
}
