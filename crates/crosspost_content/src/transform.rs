//! Cosmetic, platform-specific text transforms applied before truncation.

use crosspost_core::Platform;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Valid blank line regex"));

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("Valid hashtag regex"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("Valid URL regex"));

/// Label shown for links wrapped in markdown.
pub const LINK_LABEL: &str = "🔗 Link";

/// How bare URLs are recognised when wrapping them in markdown links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkWrapMode {
    /// A URL stays bare when the output built so far in the same pass already
    /// contains `](url)`.
    ///
    /// Depends on substitution order: a repeated URL is wrapped only the first
    /// time, and a URL already written as `[text](url)` is wrapped again
    /// because the check never sees its own link target.
    #[default]
    RunningOutput,
    /// A URL is left alone when the source text already uses it as a markdown
    /// link target; every other URL is wrapped.
    SourceAware,
}

/// Transform hook run before a platform's text is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    /// Collapse runs of blank lines.
    Plain,
    /// Emphasise hashtags, wrap bare links, then collapse runs of blank lines.
    MessagingMarkup(LinkWrapMode),
}

impl TextTransform {
    /// Transform used by default for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Twitter | Platform::LinkedIn => Self::Plain,
            Platform::Telegram => Self::MessagingMarkup(LinkWrapMode::default()),
        }
    }

    /// Apply the transform.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Plain => collapse_blank_lines(text),
            Self::MessagingMarkup(mode) => {
                let text = emphasize_hashtags(text);
                let text = wrap_links(&text, *mode);
                collapse_blank_lines(&text)
            }
        }
    }
}

/// Replace three or more consecutive newlines with exactly two.
///
/// # Examples
///
/// ```
/// use crosspost_content::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
/// ```
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

/// Wrap every `#hashtag` in bold markup.
///
/// # Examples
///
/// ```
/// use crosspost_content::emphasize_hashtags;
///
/// assert_eq!(emphasize_hashtags("Ship it #rust #v2"), "Ship it *#rust* *#v2*");
/// ```
pub fn emphasize_hashtags(text: &str) -> String {
    HASHTAG.replace_all(text, "*#$1*").into_owned()
}

/// Wrap bare URLs as `[🔗 Link](url)`.
pub fn wrap_links(text: &str, mode: LinkWrapMode) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for found in URL.find_iter(text) {
        output.push_str(&text[last..found.start()]);
        let url = found.as_str();

        let keep_bare = match mode {
            LinkWrapMode::RunningOutput => output.contains(&format!("]({})", url)),
            LinkWrapMode::SourceAware => text[..found.start()].ends_with("]("),
        };

        if keep_bare {
            output.push_str(url);
        } else {
            output.push('[');
            output.push_str(LINK_LABEL);
            output.push_str("](");
            output.push_str(url);
            output.push(')');
        }
        last = found.end();
    }

    output.push_str(&text[last..]);
    output
}
