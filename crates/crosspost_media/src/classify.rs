//! Resolve media paths into classified file records.

use crate::MimeTable;
use crosspost_core::{FileRecord, MediaCategory};
use futures::future::join_all;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Error recorded for a path that does not exist.
pub const NOT_FOUND: &str = "does not exist";
/// Error recorded for a path that cannot be read.
pub const NO_PERMISSION: &str = "no access permission";
/// Error recorded for a path that is a directory or other non-file.
pub const NOT_A_FILE: &str = "path is not a file";
/// Error recorded for every audio file.
pub const AUDIO_UNSUPPORTED: &str = "audio files are not supported";

/// Classifies media paths by existence, size and extension.
#[derive(Debug, Clone, Default)]
pub struct MediaClassifier {
    table: MimeTable,
}

impl MediaClassifier {
    /// Classifier using the given MIME table.
    pub fn new(table: MimeTable) -> Self {
        Self { table }
    }

    /// Classify every path concurrently.
    ///
    /// Records are returned in the order the paths were given.
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub async fn classify<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<FileRecord> {
        let records = join_all(paths.iter().map(|p| self.classify_path(p.as_ref()))).await;

        info!(
            total = records.len(),
            valid = records.iter().filter(|r| r.is_valid()).count(),
            "Media files classified"
        );
        records
    }

    /// Classify a single path.
    ///
    /// Access failures are recorded on the returned record, never raised.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn classify_path(&self, path: &Path) -> FileRecord {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                let error = match e.kind() {
                    ErrorKind::NotFound => NOT_FOUND.to_string(),
                    ErrorKind::PermissionDenied => NO_PERMISSION.to_string(),
                    _ => format!("access error: {}", e),
                };
                debug!(%error, "Media file cannot be read");
                return FileRecord::unavailable(path, error);
            }
        };

        if !metadata.is_file() {
            debug!("Media path is not a regular file");
            return FileRecord::unavailable(path, NOT_A_FILE);
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let mime = self.table.mime_for(&extension);

        if self.table.is_audio(&extension) {
            debug!("Audio file rejected");
            return FileRecord::available(
                path,
                metadata.len(),
                mime,
                MediaCategory::Unsupported,
                Some(AUDIO_UNSUPPORTED.to_string()),
            );
        }

        let category = MediaCategory::from_mime(mime);
        let error = (category == MediaCategory::Unsupported)
            .then(|| format!("unsupported media type {}", mime));

        debug!(%category, mime, "Media file classified");
        FileRecord::available(path, metadata.len(), mime, category, error)
    }
}

/// Classify paths with the default MIME table.
pub async fn classify<P: AsRef<Path>>(paths: &[P]) -> Vec<FileRecord> {
    MediaClassifier::default().classify(paths).await
}
