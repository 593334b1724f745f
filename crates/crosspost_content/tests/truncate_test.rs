//! Tests for boundary-aware truncation.

use crosspost_content::{ELLIPSIS, truncate};
use std::io::Write;
use std::sync::{Arc, Mutex};

const NO_MARKERS: [&str; 0] = [];

/// Buffer collecting formatted log output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("Lock poisoned")).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("Lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

fn sample() -> String {
    // "\n" ends at 21, ". " ends at 43.
    format!("{}\n{}. {}", "a".repeat(20), "b".repeat(20), "c".repeat(100))
}

#[test]
fn test_text_within_limit_is_untouched() {
    let text = "short post. with markers\n";
    assert_eq!(truncate(text, 100, 90, &[". ", "\n"], 0), text);
    assert_eq!(truncate(text, text.chars().count(), 5, &[". "], 0), text);
}

#[test]
fn test_last_qualifying_marker_in_list_wins() {
    let text = sample();

    let result = truncate(&text, 80, 70, &[". ", "\n"], 10);
    assert_eq!(result, format!("{}\n{}", "a".repeat(20), ELLIPSIS));

    let result = truncate(&text, 80, 70, &["\n", ". "], 10);
    assert_eq!(result, format!("{}\n{}. {}", "a".repeat(20), "b".repeat(20), ELLIPSIS));
}

#[test]
fn test_markers_ending_before_min_cut_are_ignored() {
    let text = sample();
    let result = truncate(&text, 80, 70, &[". ", "\n"], 30);
    assert_eq!(result, format!("{}\n{}. {}", "a".repeat(20), "b".repeat(20), ELLIPSIS));
}

#[test]
fn test_min_cut_compares_against_marker_end() {
    let text = sample();
    // ". " ends exactly at 43, which is not greater than 43.
    let result = truncate(&text, 80, 70, &[". "], 43);
    assert_eq!(result.chars().count(), 70 + ELLIPSIS.len());

    let result = truncate(&text, 80, 70, &[". "], 42);
    assert!(result.ends_with(". ..."));
}

#[test]
fn test_no_marker_falls_back_to_soft_prefix() {
    let text = "x".repeat(50);
    let result = truncate(&text, 40, 30, &NO_MARKERS, 0);
    assert_eq!(result, format!("{}{}", "x".repeat(30), ELLIPSIS));

    let result = truncate(&text, 40, 30, &[". ", "\n"], 0);
    assert_eq!(result, format!("{}{}", "x".repeat(30), ELLIPSIS));
}

#[test]
fn test_marker_after_soft_limit_is_not_used() {
    let text = format!("{}. {}", "x".repeat(35), "y".repeat(20));
    let result = truncate(&text, 40, 30, &[". "], 0);
    assert_eq!(result, format!("{}{}", "x".repeat(30), ELLIPSIS));
}

#[test]
fn test_marker_starting_at_soft_limit_is_used() {
    let text = format!("{}. {}", "x".repeat(10), "y".repeat(20));
    let result = truncate(&text, 15, 10, &[". "], 0);
    assert_eq!(result, format!("{}. {}", "x".repeat(10), ELLIPSIS));
    assert_eq!(result.chars().count(), 15);
}

#[test]
fn test_truncation_is_idempotent() {
    let text = sample();
    let once = truncate(&text, 80, 70, &[". ", "\n"], 30);
    let twice = truncate(&once, 80, 70, &[". ", "\n"], 30);
    assert_eq!(once, twice);
}

#[test]
fn test_multibyte_text_is_cut_on_char_boundaries() {
    let text = "日本語の文章です。".repeat(20);
    let result = truncate(&text, 50, 40, &["。"], 20);

    assert!(result.chars().count() <= 50);
    assert!(result.ends_with("。..."));
    assert!(text.starts_with(result.trim_end_matches(ELLIPSIS)));
}

#[test]
fn test_truncation_is_logged_inside_its_span() {
    let logs = capture_logs(|| {
        truncate("First sentence. Second sentence runs long", 30, 25, &[". "], 5);
    });

    assert!(logs.contains("truncate{"), "missing span: {}", logs);
    assert!(logs.contains("text_len=41"));
    assert!(logs.contains("hard_limit=30"));
    assert!(logs.contains("Content truncated to fit character limit"));
}
