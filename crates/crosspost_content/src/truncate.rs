//! Boundary-aware truncation.

use tracing::{debug, instrument};

/// Appended to every truncated text.
pub const ELLIPSIS: &str = "...";

/// Cut `text` so it fits `hard_limit`, preferring to break at a cut marker.
///
/// Text within the hard limit is returned unchanged. Longer text starts from
/// the first `soft_cut_limit` characters. Every marker is then checked in
/// listed order: its last occurrence starting at or before `soft_cut_limit`
/// qualifies when it ends after `min_cut_len`, and a qualifying marker
/// replaces the candidate with the text up to and including the marker. Later
/// markers overwrite earlier ones, so the last qualifying marker in the list
/// wins. The ellipsis is appended to whatever candidate remains.
///
/// All lengths and positions are in characters.
///
/// # Examples
///
/// ```
/// use crosspost_content::truncate;
///
/// let text = "First sentence. Second sentence runs long";
/// assert_eq!(truncate(text, 100, 90, &[". "], 5), text);
/// assert_eq!(truncate(text, 30, 25, &[". "], 5), "First sentence. ...");
/// assert_eq!(truncate(text, 30, 25, &[". "], 20), "First sentence. Second se...");
/// ```
#[instrument(skip(text, cut_markers), fields(text_len = text.chars().count(), markers = cut_markers.len()))]
pub fn truncate<S: AsRef<str>>(
    text: &str,
    hard_limit: usize,
    soft_cut_limit: usize,
    cut_markers: &[S],
    min_cut_len: usize,
) -> String {
    let total = text.chars().count();
    if total <= hard_limit {
        return text.to_string();
    }

    let mut candidate = &text[..byte_offset(text, soft_cut_limit)];

    for marker in cut_markers {
        let marker = marker.as_ref();
        if marker.is_empty() {
            continue;
        }
        let marker_chars = marker.chars().count();

        // Occurrences may start at soft_cut_limit and run past it.
        let window = &text[..byte_offset(text, soft_cut_limit + marker_chars)];
        let Some(start) = window.rfind(marker) else {
            continue;
        };

        let end_chars = text[..start].chars().count() + marker_chars;
        if end_chars > min_cut_len {
            candidate = &text[..start + marker.len()];
        }
    }

    let mut result = String::with_capacity(candidate.len() + ELLIPSIS.len());
    result.push_str(candidate);
    result.push_str(ELLIPSIS);

    debug!(
        original = total,
        hard_limit,
        kept = result.chars().count(),
        "Content truncated to fit character limit"
    );

    result
}

/// Byte offset of the character at `chars`, clamped to the end of the text.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
