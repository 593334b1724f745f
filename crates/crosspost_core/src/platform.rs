//! Target platforms and their publishing limits.

use crate::MediaCategory;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const MB: u64 = 1024 * 1024;

/// A publishing target.
///
/// # Examples
///
/// ```
/// use crosspost_core::Platform;
///
/// assert_eq!(Platform::LinkedIn.to_string(), "LinkedIn");
/// assert_eq!("telegram".parse::<Platform>().unwrap(), Platform::Telegram);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// Short-form microblog (280 characters).
    Twitter,
    /// Professional network (3000 characters).
    #[strum(to_string = "LinkedIn")]
    LinkedIn,
    /// Messaging bot channel (4096 characters).
    Telegram,
}

/// Size and format rule for one media category on one platform.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct MediaRule {
    /// Largest accepted file in bytes, `None` for no limit.
    #[builder(default)]
    #[serde(default)]
    max_size_bytes: Option<u64>,

    /// Accepted lowercase extensions without the dot. Empty accepts any extension.
    #[builder(default)]
    #[serde(default)]
    allowed_extensions: Vec<String>,
}

impl MediaRule {
    fn new(max_size_bytes: u64, extensions: &[&str]) -> Self {
        Self {
            max_size_bytes: Some(max_size_bytes),
            allowed_extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Whether a lowercase extension passes the allow-list.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.is_empty() || self.allowed_extensions.iter().any(|e| e == extension)
    }
}

/// Text and media limits of a platform.
///
/// # Examples
///
/// ```
/// use crosspost_core::PlatformLimits;
///
/// let limits = PlatformLimits::twitter();
/// assert_eq!(*limits.char_limit(), 280);
/// assert_eq!(limits.soft_cut_limit(), 270);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PlatformLimits {
    /// Hard character limit.
    char_limit: usize,

    /// Characters subtracted from the hard limit to get the soft cut point.
    #[builder(default)]
    #[serde(default)]
    cut_buffer: usize,

    /// Preferred cut markers, evaluated in listed order.
    #[builder(default)]
    #[serde(default)]
    cut_points: Vec<String>,

    /// Cuts ending at or before this offset are rejected as too aggressive.
    #[builder(default)]
    #[serde(default)]
    min_cut_length: usize,

    /// Maximum number of media attachments.
    max_media: usize,

    /// Image rule, `None` if images are not accepted.
    #[builder(default)]
    #[serde(default)]
    image: Option<MediaRule>,

    /// Video rule, `None` if videos are not accepted.
    #[builder(default)]
    #[serde(default)]
    video: Option<MediaRule>,

    /// Document rule, `None` if documents are not accepted.
    #[builder(default)]
    #[serde(default)]
    document: Option<MediaRule>,

    /// Maximum caption length on a media message, if the platform has captions.
    #[builder(default)]
    #[serde(default)]
    caption_limit: Option<usize>,
}

impl PlatformLimits {
    /// Built-in limits for Twitter.
    pub fn twitter() -> Self {
        Self {
            char_limit: 280,
            cut_buffer: 10,
            cut_points: cut_points(&[". ", ".\n", "\n\n", "\n"]),
            min_cut_length: 200,
            max_media: 4,
            image: Some(MediaRule::new(5 * MB, &["jpg", "jpeg", "png", "gif", "webp"])),
            video: Some(MediaRule::new(512 * MB, &["mp4", "mov"])),
            document: None,
            caption_limit: None,
        }
    }

    /// Built-in limits for LinkedIn.
    pub fn linkedin() -> Self {
        Self {
            char_limit: 3000,
            cut_buffer: 20,
            cut_points: cut_points(&["\n\n", ". ", ".\n", "\n"]),
            min_cut_length: 2500,
            max_media: 9,
            image: Some(MediaRule::new(10 * MB, &["jpg", "jpeg", "png", "gif"])),
            video: Some(MediaRule::new(200 * MB, &["mp4", "mov", "avi"])),
            document: Some(MediaRule::new(
                100 * MB,
                &["pdf", "doc", "docx", "ppt", "pptx"],
            )),
            caption_limit: None,
        }
    }

    /// Built-in limits for Telegram.
    pub fn telegram() -> Self {
        Self {
            char_limit: 4096,
            cut_buffer: 16,
            cut_points: cut_points(&["\n\n", ". ", ".\n", "\n", "。", "！", "？"]),
            min_cut_length: 3500,
            max_media: 10,
            image: Some(MediaRule::new(10 * MB, &["jpg", "jpeg", "png", "gif", "webp"])),
            video: Some(MediaRule::new(50 * MB, &["mp4", "mov", "avi", "mkv", "webm"])),
            document: Some(MediaRule::new(50 * MB, &[])),
            caption_limit: Some(1024),
        }
    }

    /// Built-in limits for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Twitter => Self::twitter(),
            Platform::LinkedIn => Self::linkedin(),
            Platform::Telegram => Self::telegram(),
        }
    }

    /// Soft cut point: the hard limit minus the cut buffer.
    pub fn soft_cut_limit(&self) -> usize {
        self.char_limit.saturating_sub(self.cut_buffer)
    }

    /// Rule for a media category, `None` if the category is not accepted.
    pub fn rule_for(&self, category: MediaCategory) -> Option<&MediaRule> {
        match category {
            MediaCategory::Image => self.image.as_ref(),
            MediaCategory::Video => self.video.as_ref(),
            MediaCategory::Document => self.document.as_ref(),
            MediaCategory::Unsupported => None,
        }
    }
}

fn cut_points(points: &[&str]) -> Vec<String> {
    points.iter().map(|p| p.to_string()).collect()
}
