// src/utils.rs
use std::path::Path;

const PDF: &str = "application/pdf";
const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC: &str = "application/msword";
const TEXT: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Content type sent with the resume part. Unknown extensions are still sent;
/// the evaluation service decides what it can read.
pub fn content_type_for(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => PDF,
        Some("docx") => DOCX,
        Some("doc") => DOC,
        Some("txt") => TEXT,
        _ => OCTET_STREAM,
    }
}

/// Final path component, used as the multipart file name
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "resume".to_string())
}
