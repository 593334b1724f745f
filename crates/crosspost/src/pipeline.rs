//! Publication preparation and messaging delivery.

use crosspost_content::{ContentOptimizer, LinkWrapMode, TextTransform};
use crosspost_core::{CrosspostConfig, FileRecord, OptimizationResult, Platform};
use crosspost_error::CrosspostResult;
use crosspost_media::{CompatibilityReport, MediaClassifier, evaluate_limits};
use crosspost_social::{
    DispatchPlan, DispatchPlanner, DispatchReport, Dispatcher, MessagingTransport,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Which platforms get their content optimized.
///
/// A disabled platform receives the raw content with honest statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OptimizationOptions {
    twitter: bool,
    linkedin: bool,
    telegram: bool,
    /// Link wrapping used by the messaging markup.
    link_wrap: LinkWrapMode,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            twitter: true,
            linkedin: true,
            telegram: true,
            link_wrap: LinkWrapMode::default(),
        }
    }
}

impl OptimizationOptions {
    /// Switch optimization for one platform on or off.
    pub fn with_platform(mut self, platform: Platform, enabled: bool) -> Self {
        match platform {
            Platform::Twitter => self.twitter = enabled,
            Platform::LinkedIn => self.linkedin = enabled,
            Platform::Telegram => self.telegram = enabled,
        }
        self
    }

    /// Use a different link wrapping mode for messaging markup.
    pub fn with_link_wrap(mut self, link_wrap: LinkWrapMode) -> Self {
        self.link_wrap = link_wrap;
        self
    }

    /// Whether a platform's content is optimized.
    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Twitter => self.twitter,
            Platform::LinkedIn => self.linkedin,
            Platform::Telegram => self.telegram,
        }
    }
}

/// Everything needed to publish one post on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Publication {
    /// Final text and statistics per platform.
    results: BTreeMap<Platform, OptimizationResult>,
    /// Paths of the media to publish, `None` when there are none.
    media_paths: Option<Vec<PathBuf>>,
    /// Whether each platform can publish the media batch.
    availability: BTreeMap<Platform, bool>,
    /// Classified input files, in input order.
    records: Vec<FileRecord>,
    /// Media verdicts, errors and warnings.
    report: CompatibilityReport,
}

impl Publication {
    /// Final text for a platform.
    pub fn text(&self, platform: Platform) -> &str {
        self.results
            .get(&platform)
            .map(|r| r.optimized_text().as_str())
            .unwrap_or_default()
    }

    /// Whether a platform can publish this post.
    pub fn is_available(&self, platform: Platform) -> bool {
        self.availability.get(&platform).copied().unwrap_or(false)
    }

    /// Media records that will be published.
    pub fn media(&self) -> &[FileRecord] {
        self.report.valid_files()
    }
}

/// Prepares and delivers publications for a platform configuration.
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    config: CrosspostConfig,
    options: OptimizationOptions,
    classifier: MediaClassifier,
}

impl Publisher {
    /// Publisher with default options.
    pub fn new(config: CrosspostConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use different optimization options.
    pub fn with_options(mut self, options: OptimizationOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a different media classifier.
    pub fn with_classifier(mut self, classifier: MediaClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Platform configuration in use.
    pub fn config(&self) -> &CrosspostConfig {
        &self.config
    }

    /// Optimize the content for every platform.
    pub fn optimize_all(&self, content: &str) -> BTreeMap<Platform, OptimizationResult> {
        Platform::iter()
            .map(|platform| (platform, self.optimize_for(platform, content)))
            .collect()
    }

    fn optimize_for(&self, platform: Platform, content: &str) -> OptimizationResult {
        let limits = self.config.limits(platform);
        if !self.options.is_enabled(platform) {
            info!(%platform, "Optimization disabled, passing content through");
            return OptimizationResult::passthrough(content, *limits.char_limit());
        }

        let mut optimizer = ContentOptimizer::for_platform(platform, &self.config);
        if let TextTransform::MessagingMarkup(_) = TextTransform::for_platform(platform) {
            optimizer = optimizer.with_transform(TextTransform::MessagingMarkup(
                self.options.link_wrap,
            ));
        }
        optimizer.optimize(content)
    }

    /// Optimize content, classify and evaluate media.
    ///
    /// # Errors
    ///
    /// Returns a media error listing every reason when a file is invalid or
    /// when no platform accepts the media.
    #[instrument(skip(self, content, media_paths), fields(content_len = content.chars().count(), media = media_paths.len()))]
    pub async fn prepare<P: AsRef<Path>>(
        &self,
        content: &str,
        media_paths: &[P],
    ) -> CrosspostResult<Publication> {
        let results = self.optimize_all(content);

        let records = self.classifier.classify(media_paths).await;
        let report = evaluate_limits(&records, &self.config);

        for record in records.iter().filter(|r| !r.is_valid()) {
            warn!(
                path = %record.path().display(),
                error = record.error().as_deref().unwrap_or("unsupported type"),
                "Media file failed validation"
            );
        }
        report.check()?;

        let media_paths = (!report.valid_files().is_empty()).then(|| {
            report
                .valid_files()
                .iter()
                .map(|r| r.path().clone())
                .collect()
        });
        let availability = report.availability();

        info!(
            available = availability.values().filter(|a| **a).count(),
            media = report.valid_files().len(),
            warnings = report.warnings().len(),
            "Publication prepared"
        );

        Ok(Publication {
            results,
            media_paths,
            availability,
            records,
            report,
        })
    }

    /// Plan the messaging delivery of a publication.
    pub fn plan_messaging(&self, publication: &Publication) -> DispatchPlan {
        DispatchPlanner::from_limits(self.config.limits(Platform::Telegram))
            .plan(publication.text(Platform::Telegram), publication.media())
    }

    /// Deliver a publication to the messaging platform.
    ///
    /// Returns `None` without sending anything when the messaging platform
    /// cannot publish the media.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error carrying what was already delivered when a
    /// send fails.
    #[instrument(skip(self, publication, dispatcher))]
    pub async fn publish_messaging<T: MessagingTransport>(
        &self,
        publication: &Publication,
        dispatcher: &Dispatcher<T>,
    ) -> CrosspostResult<Option<DispatchReport>> {
        if !publication.is_available(Platform::Telegram) {
            warn!("Telegram cannot publish this media, skipping");
            return Ok(None);
        }

        let plan = self.plan_messaging(publication);
        let report = dispatcher.execute(&plan).await?;
        Ok(Some(report))
    }
}

/// Prepare a publication with the given configuration and options.
///
/// # Errors
///
/// See [`Publisher::prepare`].
pub async fn prepare_publication<P: AsRef<Path>>(
    content: &str,
    media_paths: &[P],
    config: &CrosspostConfig,
    options: OptimizationOptions,
) -> CrosspostResult<Publication> {
    Publisher::new(config.clone())
        .with_options(options)
        .prepare(content, media_paths)
        .await
}

/// Deliver a prepared publication to the messaging platform.
///
/// # Errors
///
/// See [`Publisher::publish_messaging`].
pub async fn publish_messaging<T: MessagingTransport>(
    publication: &Publication,
    dispatcher: &Dispatcher<T>,
    config: &CrosspostConfig,
) -> CrosspostResult<Option<DispatchReport>> {
    Publisher::new(config.clone())
        .publish_messaging(publication, dispatcher)
        .await
}
