//! Static extension to MIME type table.

use std::collections::{HashMap, HashSet};

/// MIME type used for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

const TYPES: &[(&str, &str)] = &[
    // Images
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("heic", "image/heic"),
    // Video
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("m4a", "audio/mp4"),
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
    ("wma", "audio/x-ms-wma"),
    // Documents
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("zip", "application/zip"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
];

const AUDIO: &[&str] = &["mp3", "wav", "ogg", "oga", "opus", "m4a", "aac", "flac", "wma"];

/// Read-only mapping from lowercase extension to MIME type.
///
/// # Examples
///
/// ```
/// use crosspost_media::MimeTable;
///
/// let table = MimeTable::default();
/// assert_eq!(table.mime_for("png"), "image/png");
/// assert_eq!(table.mime_for("xyz"), "application/octet-stream");
/// assert!(table.is_audio("mp3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTable {
    types: HashMap<String, String>,
    audio: HashSet<String>,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self {
            types: TYPES
                .iter()
                .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
                .collect(),
            audio: AUDIO.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl MimeTable {
    /// Add or replace a mapping.
    pub fn with_type(mut self, extension: impl Into<String>, mime: impl Into<String>) -> Self {
        self.types.insert(extension.into(), mime.into());
        self
    }

    /// MIME type for an extension, `application/octet-stream` if unknown.
    pub fn mime_for(&self, extension: &str) -> &str {
        self.types
            .get(extension)
            .map(String::as_str)
            .unwrap_or(OCTET_STREAM)
    }

    /// Whether the extension names an audio format.
    pub fn is_audio(&self, extension: &str) -> bool {
        self.audio.contains(extension)
    }
}
