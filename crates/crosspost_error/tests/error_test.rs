//! Tests for error construction and conversion.

use crosspost_error::{
    BlockingReasons, ConfigError, ConfigErrorKind, CrosspostError, CrosspostErrorKind,
    DispatchError, MediaError, MediaErrorKind, TransportError, TransportErrorKind,
};
use std::error::Error;

#[test]
fn test_location_is_captured_at_call_site() {
    let err = ConfigError::new(ConfigErrorKind::Sources("crosspost.toml".to_string()));
    assert_eq!(err.file, file!());
    assert_eq!(err.line, line!() - 2);
}

#[test]
fn test_blocking_reasons_render_as_bullets() {
    let reasons = BlockingReasons::from(vec![
        "a.png: File not found".to_string(),
        "b.mp3: Audio files are not supported".to_string(),
    ]);
    assert_eq!(
        reasons.to_string(),
        "• a.png: File not found\n• b.mp3: Audio files are not supported"
    );

    let kind = MediaErrorKind::InvalidFiles(reasons.clone());
    assert_eq!(kind.reasons(), &reasons);
    assert!(kind.to_string().starts_with("Media file validation failed:\n• a.png"));
}

#[test]
fn test_group_rejection_is_distinguished() {
    let group = TransportError::new(TransportErrorKind::GroupRejected("too big".to_string()));
    let other = TransportError::new(TransportErrorKind::Rejected("flood".to_string()));
    assert!(group.is_group_rejection());
    assert!(!other.is_group_rejection());
}

#[test]
fn test_dispatch_error_keeps_delivered_ids_and_source() {
    let source = TransportError::new(TransportErrorKind::Unavailable("offline".to_string()));
    let err = DispatchError::new(2, vec!["1".to_string(), "2".to_string()], source);

    assert_eq!(err.delivered, vec!["1", "2"]);
    assert!(err.to_string().contains("step 2 failed: Transport Error: Transport unavailable: offline"));
    assert!(err.source().is_some());
}

#[test]
fn test_errors_convert_into_top_level() {
    let err: CrosspostError =
        MediaError::new(MediaErrorKind::NoPlatformSupport(BlockingReasons::default())).into();
    assert!(matches!(err.kind(), CrosspostErrorKind::Media(_)));
    assert!(err.to_string().starts_with("Crosspost Error: Media Error:"));

    let err: CrosspostError =
        ConfigError::new(ConfigErrorKind::Output("not utf-8".to_string())).into();
    assert!(matches!(err.kind(), CrosspostErrorKind::Config(_)));
}
