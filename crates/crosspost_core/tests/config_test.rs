//! Tests for platform limits and configuration loading.

use crosspost_core::{
    CrosspostConfig, MediaCategory, MediaRuleBuilder, Platform, PlatformLimits,
    PlatformLimitsBuilder,
};
use crosspost_error::{ConfigErrorKind, CrosspostErrorKind};
use std::io::Write;
use strum::IntoEnumIterator;

#[test]
fn test_builtin_text_limits() {
    let config = CrosspostConfig::default();

    let twitter = config.limits(Platform::Twitter);
    assert_eq!(*twitter.char_limit(), 280);
    assert_eq!(twitter.soft_cut_limit(), 270);
    assert_eq!(*twitter.min_cut_length(), 200);
    assert_eq!(twitter.cut_points()[0], ". ");

    let linkedin = config.limits(Platform::LinkedIn);
    assert_eq!(*linkedin.char_limit(), 3000);
    assert_eq!(linkedin.soft_cut_limit(), 2980);

    let telegram = config.limits(Platform::Telegram);
    assert_eq!(*telegram.char_limit(), 4096);
    assert_eq!(telegram.soft_cut_limit(), 4080);
    assert_eq!(*telegram.caption_limit(), Some(1024));
}

#[test]
fn test_twitter_has_no_document_rule() {
    let limits = PlatformLimits::twitter();
    assert!(limits.rule_for(MediaCategory::Document).is_none());
    assert!(limits.rule_for(MediaCategory::Image).is_some());
    assert!(limits.rule_for(MediaCategory::Unsupported).is_none());
}

#[test]
fn test_empty_allow_list_accepts_anything() {
    let telegram = PlatformLimits::telegram();
    let documents = telegram
        .rule_for(MediaCategory::Document)
        .expect("Telegram accepts documents");
    assert!(documents.allows_extension("zip"));
    assert!(documents.allows_extension("anything"));

    let images = telegram.rule_for(MediaCategory::Image).expect("images");
    assert!(images.allows_extension("png"));
    assert!(!images.allows_extension("bmp"));
}

#[test]
fn test_limits_builder() {
    let limits = PlatformLimitsBuilder::default()
        .char_limit(100usize)
        .cut_buffer(5usize)
        .max_media(2usize)
        .image(
            MediaRuleBuilder::default()
                .max_size_bytes(1024u64)
                .allowed_extensions(vec!["png".to_string()])
                .build()
                .expect("Valid rule"),
        )
        .build()
        .expect("Valid limits");

    assert_eq!(limits.soft_cut_limit(), 95);
    assert!(limits.video().is_none());
    assert!(limits.caption_limit().is_none());
}

#[test]
fn test_platform_names_round_trip() {
    for platform in Platform::iter() {
        let parsed: Platform = platform.to_string().parse().expect("Known platform");
        assert_eq!(parsed, platform);
    }
    assert_eq!("LINKEDIN".parse::<Platform>().unwrap(), Platform::LinkedIn);
    assert!("mastodon".parse::<Platform>().is_err());
}

#[test]
fn test_default_config_has_no_warnings() {
    assert!(CrosspostConfig::default().validate().is_empty());
}

#[test]
fn test_from_file_overrides_only_named_values() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Temp file");
    writeln!(
        file,
        r#"
[twitter]
char_limit = 500
max_media = 2
"#
    )
    .expect("Write config");

    let config = CrosspostConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(*config.limits(Platform::Twitter).char_limit(), 500);
    assert_eq!(*config.limits(Platform::Twitter).max_media(), 2);
    assert_eq!(*config.limits(Platform::Twitter).cut_buffer(), 10);
    assert_eq!(config.limits(Platform::LinkedIn), &PlatformLimits::linkedin());
}

#[test]
fn test_from_file_missing_file_fails() {
    let err = CrosspostConfig::from_file("/nonexistent/crosspost.toml")
        .expect_err("Missing file should fail");
    assert!(matches!(
        err.kind(),
        CrosspostErrorKind::Config(config) if matches!(config.kind, ConfigErrorKind::Sources(_))
    ));
}

#[test]
fn test_from_file_rejects_malformed_limits() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Temp file");
    writeln!(file, "[twitter]\nmax_media = \"lots\"").expect("Write config");

    let err = CrosspostConfig::from_file(file.path()).expect_err("Bad value should fail");
    match err.kind() {
        CrosspostErrorKind::Config(config) => {
            assert!(matches!(config.kind, ConfigErrorKind::InvalidLimits(_)));
            assert!(err.to_string().contains("Platform limits could not be parsed"));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_validate_flags_unusable_cut_settings() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Temp file");
    writeln!(
        file,
        r#"
[telegram]
min_cut_length = 5000
"#
    )
    .expect("Write config");

    let config = CrosspostConfig::from_file(file.path()).expect("Valid config");
    let warnings = config.validate();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Telegram: min_cut_length"));
}
