//! Media categories and classified file records.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Publishing category of a media file.
///
/// Audio is never a category of its own: audio files are `Unsupported`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaCategory {
    /// Still image (PNG, JPEG, GIF, ...)
    Image,
    /// Video (MP4, MOV, ...)
    Video,
    /// Any text or application file
    Document,
    /// Cannot be published anywhere
    Unsupported,
}

impl MediaCategory {
    /// Derive the category from a MIME type.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspost_core::MediaCategory;
    ///
    /// assert_eq!(MediaCategory::from_mime("image/png"), MediaCategory::Image);
    /// assert_eq!(MediaCategory::from_mime("application/pdf"), MediaCategory::Document);
    /// assert_eq!(MediaCategory::from_mime("audio/mpeg"), MediaCategory::Unsupported);
    /// ```
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("text/") || mime.starts_with("application/") {
            Self::Document
        } else {
            Self::Unsupported
        }
    }

    /// Images and videos can be attached inline and grouped.
    pub fn is_attachable(&self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

/// Result of classifying one input path.
///
/// Created once per path by the classifier and never modified afterwards.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct FileRecord {
    /// Whether the path resolved to a readable regular file.
    exists: bool,

    /// Path as supplied by the caller.
    path: PathBuf,

    /// File name component.
    name: String,

    /// Size in bytes (0 when unknown).
    #[builder(default)]
    size: u64,

    /// Lowercase extension without the dot.
    #[builder(default)]
    extension: String,

    /// MIME type derived from the extension.
    #[builder(default = "\"application/octet-stream\".to_string()")]
    mime_type: String,

    /// Publishing category.
    #[builder(default = "MediaCategory::Unsupported")]
    category: MediaCategory,

    /// Why the file cannot be used, if it cannot.
    #[builder(default)]
    #[serde(default)]
    error: Option<String>,
}

impl FileRecord {
    /// Record for a path that could not be used as a file.
    pub fn unavailable(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        let path = path.into();
        let (name, extension) = name_and_extension(&path);
        Self {
            exists: false,
            path,
            name,
            size: 0,
            extension,
            mime_type: "application/octet-stream".to_string(),
            category: MediaCategory::Unsupported,
            error: Some(error.into()),
        }
    }

    /// Record for a readable regular file.
    pub fn available(
        path: impl Into<PathBuf>,
        size: u64,
        mime_type: impl Into<String>,
        category: MediaCategory,
        error: Option<String>,
    ) -> Self {
        let path = path.into();
        let (name, extension) = name_and_extension(&path);
        Self {
            exists: true,
            path,
            name,
            size,
            extension,
            mime_type: mime_type.into(),
            category,
            error,
        }
    }

    /// Exists and has a publishable category.
    pub fn is_valid(&self) -> bool {
        self.exists && self.category != MediaCategory::Unsupported
    }
}

/// File name and lowercase extension of a path.
///
/// # Examples
///
/// ```
/// use crosspost_core::name_and_extension;
/// use std::path::Path;
///
/// let (name, ext) = name_and_extension(Path::new("/tmp/Photo.JPG"));
/// assert_eq!(name, "Photo.JPG");
/// assert_eq!(ext, "jpg");
/// ```
pub fn name_and_extension(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    (name, extension)
}

/// Format a byte count for humans.
///
/// # Examples
///
/// ```
/// use crosspost_core::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.50 KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
