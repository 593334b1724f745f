//! Tests for dispatch planning.

use crosspost_core::{FileRecord, MediaCategory, PlatformLimits};
use crosspost_social::{DEFAULT_CAPTION_LIMIT, DispatchKind, DispatchPlanner};
use std::path::PathBuf;

fn media(name: &str, category: MediaCategory) -> FileRecord {
    let mime = match category {
        MediaCategory::Image => "image/png",
        MediaCategory::Video => "video/mp4",
        MediaCategory::Document => "application/pdf",
        MediaCategory::Unsupported => "audio/mpeg",
    };
    FileRecord::available(name, 1024, mime, category, None)
}

fn images(count: usize) -> Vec<FileRecord> {
    (0..count)
        .map(|i| media(&format!("img{}.png", i), MediaCategory::Image))
        .collect()
}

#[test]
fn test_no_media_sends_text_only() {
    let plan = DispatchPlanner::default().plan("Hello", &[]);

    assert_eq!(plan.len(), 1);
    let step = &plan.steps()[0];
    assert_eq!(*step.kind(), DispatchKind::TextMessage);
    assert_eq!(step.text(), "Hello");
    assert!(step.media().is_empty());
}

#[test]
fn test_single_image_carries_caption() {
    let text = "a".repeat(500);
    let plan = DispatchPlanner::default().plan(&text, &images(1));

    assert_eq!(plan.len(), 1);
    let step = &plan.steps()[0];
    assert_eq!(*step.kind(), DispatchKind::SingleMedia);
    assert_eq!(step.text(), &text);
    assert_eq!(step.media()[0].path(), &PathBuf::from("img0.png"));
}

#[test]
fn test_long_text_goes_first_and_media_is_uncaptioned() {
    let text = "b".repeat(5000);
    let plan = DispatchPlanner::default().plan(&text, &images(3));

    assert_eq!(plan.len(), 2);
    assert_eq!(*plan.steps()[0].kind(), DispatchKind::TextMessage);
    assert_eq!(plan.steps()[0].text(), &text);
    assert_eq!(*plan.steps()[1].kind(), DispatchKind::MediaGroup);
    assert_eq!(plan.steps()[1].text(), "");
    assert_eq!(plan.steps()[1].media().len(), 3);
}

#[test]
fn test_caption_limit_is_inclusive() {
    let planner = DispatchPlanner::default();

    let at_limit = "c".repeat(DEFAULT_CAPTION_LIMIT);
    let plan = planner.plan(&at_limit, &images(1));
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.steps()[0].text(), &at_limit);

    let over = "c".repeat(DEFAULT_CAPTION_LIMIT + 1);
    let plan = planner.plan(&over, &images(1));
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.steps()[1].text(), "");
}

#[test]
fn test_caption_limit_counts_characters() {
    let text = "é".repeat(DEFAULT_CAPTION_LIMIT);
    let plan = DispatchPlanner::default().plan(&text, &images(1));
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_documents_follow_attachable_media() {
    let files = vec![
        media("report.pdf", MediaCategory::Document),
        media("a.png", MediaCategory::Image),
        media("notes.pdf", MediaCategory::Document),
        media("b.mp4", MediaCategory::Video),
    ];
    let plan = DispatchPlanner::default().plan("Caption", &files);

    let kinds: Vec<DispatchKind> = plan.iter().map(|s| *s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DispatchKind::MediaGroup,
            DispatchKind::SingleMedia,
            DispatchKind::SingleMedia,
        ]
    );
    assert_eq!(plan.steps()[0].text(), "Caption");
    assert_eq!(plan.steps()[1].text(), "");
    assert_eq!(plan.steps()[2].text(), "");
    assert_eq!(plan.steps()[1].media()[0].path(), &PathBuf::from("report.pdf"));
    assert_eq!(plan.steps()[2].media()[0].path(), &PathBuf::from("notes.pdf"));
}

#[test]
fn test_first_document_carries_caption_without_attachables() {
    let files = vec![
        media("report.pdf", MediaCategory::Document),
        media("notes.pdf", MediaCategory::Document),
    ];
    let plan = DispatchPlanner::default().plan("Quarterly numbers", &files);

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.steps()[0].text(), "Quarterly numbers");
    assert_eq!(plan.steps()[1].text(), "");
}

#[test]
fn test_unusable_records_are_skipped() {
    let files = vec![
        media("song.mp3", MediaCategory::Unsupported),
        FileRecord::unavailable("gone.png", "does not exist"),
    ];
    let plan = DispatchPlanner::default().plan("Only text survives", &files);

    assert_eq!(plan.len(), 1);
    assert_eq!(*plan.steps()[0].kind(), DispatchKind::TextMessage);
    assert_eq!(plan.steps()[0].text(), "Only text survives");
}

#[test]
fn test_planner_uses_platform_caption_limit() {
    let planner = DispatchPlanner::from_limits(&PlatformLimits::telegram());
    assert_eq!(*planner.caption_limit(), 1024);

    let planner = DispatchPlanner::from_limits(&PlatformLimits::twitter());
    assert_eq!(*planner.caption_limit(), DEFAULT_CAPTION_LIMIT);

    let short = DispatchPlanner::new(10);
    let plan = short.plan("longer than ten", &images(2));
    assert_eq!(*plan.steps()[0].kind(), DispatchKind::TextMessage);
}

#[test]
fn test_group_split_keeps_order_and_caption() {
    let plan = DispatchPlanner::default().plan("Album", &images(3));
    let singles = plan.steps()[0].split_group();

    assert_eq!(singles.len(), 3);
    for (i, single) in singles.iter().enumerate() {
        assert_eq!(*single.kind(), DispatchKind::SingleMedia);
        assert_eq!(
            single.media()[0].path(),
            &PathBuf::from(format!("img{}.png", i))
        );
    }
    assert_eq!(singles[0].text(), "Album");
    assert_eq!(singles[1].text(), "");
    assert_eq!(singles[2].text(), "");
}
