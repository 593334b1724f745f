//! Dispatch planning for the messaging platform.

use crosspost_core::{FileRecord, MediaCategory, PlatformLimits};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Caption limit used when the platform limits name none.
pub const DEFAULT_CAPTION_LIMIT: usize = 1024;

/// Kind of send operation.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DispatchKind {
    /// Text only.
    TextMessage,
    /// One photo, video or document with an optional caption.
    SingleMedia,
    /// Several photos or videos sent as one album.
    MediaGroup,
}

/// A file attached to a dispatch step.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MediaAttachment {
    /// Local path of the file.
    path: PathBuf,
    /// Category deciding how the file is sent.
    category: MediaCategory,
}

impl MediaAttachment {
    /// Attachment for a path and category.
    pub fn new(path: impl Into<PathBuf>, category: MediaCategory) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }
}

impl From<&FileRecord> for MediaAttachment {
    fn from(record: &FileRecord) -> Self {
        Self::new(record.path().clone(), *record.category())
    }
}

/// One send operation of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DispatchStep {
    /// What kind of call delivers this step.
    kind: DispatchKind,
    /// Attached media, empty for text messages.
    media: Vec<MediaAttachment>,
    /// Message text or caption, possibly empty.
    text: String,
}

impl DispatchStep {
    /// Text-only step.
    pub fn text_message(text: impl Into<String>) -> Self {
        Self {
            kind: DispatchKind::TextMessage,
            media: Vec::new(),
            text: text.into(),
        }
    }

    /// Single attachment with a caption.
    pub fn single_media(media: MediaAttachment, caption: impl Into<String>) -> Self {
        Self {
            kind: DispatchKind::SingleMedia,
            media: vec![media],
            text: caption.into(),
        }
    }

    /// Album of attachments; the caption belongs to the album.
    pub fn media_group(media: Vec<MediaAttachment>, caption: impl Into<String>) -> Self {
        Self {
            kind: DispatchKind::MediaGroup,
            media,
            text: caption.into(),
        }
    }

    /// Split a media group into one single-media step per file.
    ///
    /// Files keep their order and the first keeps the group caption. Any
    /// other kind of step is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspost_core::MediaCategory;
    /// use crosspost_social::{DispatchKind, DispatchStep, MediaAttachment};
    ///
    /// let group = DispatchStep::media_group(
    ///     vec![
    ///         MediaAttachment::new("a.png", MediaCategory::Image),
    ///         MediaAttachment::new("b.mp4", MediaCategory::Video),
    ///     ],
    ///     "Hello",
    /// );
    /// let singles = group.split_group();
    /// assert_eq!(singles.len(), 2);
    /// assert_eq!(*singles[0].kind(), DispatchKind::SingleMedia);
    /// assert_eq!(singles[0].text(), "Hello");
    /// assert_eq!(singles[1].text(), "");
    /// ```
    pub fn split_group(&self) -> Vec<DispatchStep> {
        if self.kind != DispatchKind::MediaGroup {
            return vec![self.clone()];
        }

        self.media
            .iter()
            .enumerate()
            .map(|(i, media)| {
                let caption = if i == 0 { self.text.as_str() } else { "" };
                Self::single_media(media.clone(), caption)
            })
            .collect()
    }
}

/// Ordered send operations for one publication.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// Steps in delivery order.
    steps: Vec<DispatchStep>,
}

impl DispatchPlan {
    /// Plan with explicit steps.
    pub fn new(steps: Vec<DispatchStep>) -> Self {
        Self { steps }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over steps in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = &DispatchStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a DispatchPlan {
    type Item = &'a DispatchStep;
    type IntoIter = std::slice::Iter<'a, DispatchStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Decides the send operations needed to deliver text and media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct DispatchPlanner {
    /// Longest text that can travel as a caption, in characters.
    caption_limit: usize,
}

impl Default for DispatchPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_LIMIT)
    }
}

impl DispatchPlanner {
    /// Planner with an explicit caption limit.
    pub fn new(caption_limit: usize) -> Self {
        Self { caption_limit }
    }

    /// Planner using a platform's caption limit.
    pub fn from_limits(limits: &PlatformLimits) -> Self {
        Self::new(limits.caption_limit().unwrap_or(DEFAULT_CAPTION_LIMIT))
    }

    /// Plan the delivery of `text` with already classified media.
    ///
    /// Text longer than the caption limit goes out first as its own message
    /// and every media step is sent without a caption. Otherwise the first
    /// media step carries the text. Photos and videos are grouped when there
    /// are several; documents follow, one step each.
    ///
    /// Records that are not valid media are skipped.
    #[instrument(skip(self, text, media), fields(text_len = text.chars().count(), media_count = media.len()))]
    pub fn plan(&self, text: &str, media: &[FileRecord]) -> DispatchPlan {
        let text_len = text.chars().count();

        let mut attachable = Vec::new();
        let mut documents = Vec::new();
        for record in media {
            if !record.is_valid() {
                warn!(file = %record.name(), "Skipping media that cannot be sent");
            } else if record.category().is_attachable() {
                attachable.push(MediaAttachment::from(record));
            } else {
                documents.push(MediaAttachment::from(record));
            }
        }

        if attachable.is_empty() && documents.is_empty() {
            debug!("No media, sending text only");
            return DispatchPlan {
                steps: vec![DispatchStep::text_message(text)],
            };
        }

        let mut steps = Vec::new();
        let mut caption = if text_len > self.caption_limit {
            debug!(
                caption_limit = self.caption_limit,
                "Text exceeds caption limit, sending it separately"
            );
            steps.push(DispatchStep::text_message(text));
            None
        } else {
            Some(text)
        };

        match attachable.len() {
            0 => {}
            1 => {
                let caption = caption.take().unwrap_or_default();
                steps.extend(attachable.into_iter().map(|m| DispatchStep::single_media(m, caption)));
            }
            _ => {
                let caption = caption.take().unwrap_or_default();
                steps.push(DispatchStep::media_group(attachable, caption));
            }
        }

        for document in documents {
            let caption = caption.take().unwrap_or_default();
            steps.push(DispatchStep::single_media(document, caption));
        }

        if steps.is_empty() {
            steps.push(DispatchStep::text_message(text));
        }

        debug!(steps = steps.len(), "Dispatch planned");
        DispatchPlan { steps }
    }
}
