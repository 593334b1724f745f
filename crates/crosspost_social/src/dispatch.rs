//! Sequential execution of a dispatch plan.

use crate::{
    DeliveryReceipt, DispatchKind, DispatchPlan, DispatchRequest, DispatchStep, MARKDOWN,
    MessagingTransport,
};
use crosspost_error::{DispatchError, TransportError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of a fully delivered plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct DispatchReport {
    /// One receipt per delivered request, in delivery order.
    receipts: Vec<DeliveryReceipt>,
    /// Media groups that were resent as single files.
    group_fallbacks: usize,
}

impl DispatchReport {
    /// Every message identifier, in delivery order.
    pub fn message_ids(&self) -> Vec<String> {
        self.receipts
            .iter()
            .flat_map(|r| r.message_ids().iter().cloned())
            .collect()
    }
}

/// Executes dispatch plans against a transport, one step at a time.
///
/// A media group the transport rejects is resent as single files. Any other
/// failure stops the dispatch; what was already delivered stays delivered.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
    channel_id: String,
    parse_mode: String,
}

impl<T: MessagingTransport> Dispatcher<T> {
    /// Dispatcher sending Markdown text to a channel.
    pub fn new(transport: T, channel_id: impl Into<String>) -> Self {
        Self {
            transport,
            channel_id: channel_id.into(),
            parse_mode: MARKDOWN.to_string(),
        }
    }

    /// Use a different markup mode.
    pub fn with_parse_mode(mut self, parse_mode: impl Into<String>) -> Self {
        self.parse_mode = parse_mode.into();
        self
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver every step of a plan in order.
    ///
    /// # Errors
    ///
    /// Returns a `DispatchError` carrying the delivered message identifiers
    /// when a step fails for any reason other than a rejected media group.
    #[instrument(skip(self, plan), fields(transport = self.transport.name(), steps = plan.len()))]
    pub async fn execute(&self, plan: &DispatchPlan) -> Result<DispatchReport, DispatchError> {
        let mut report = DispatchReport::default();

        for (index, step) in plan.iter().enumerate() {
            match self.send(index, step).await {
                Ok(receipt) => report.receipts.push(receipt),
                Err(e) if e.is_group_rejection() && *step.kind() == DispatchKind::MediaGroup => {
                    warn!(
                        step = index,
                        files = step.media().len(),
                        error = %e,
                        "Media group rejected, sending files individually"
                    );
                    report.group_fallbacks += 1;

                    for single in step.split_group() {
                        match self.send(index, &single).await {
                            Ok(receipt) => report.receipts.push(receipt),
                            Err(e) => return Err(Self::failure(index, &report, e)),
                        }
                    }
                }
                Err(e) => return Err(Self::failure(index, &report, e)),
            }
        }

        info!(
            messages = report.message_ids().len(),
            group_fallbacks = report.group_fallbacks,
            "Dispatch complete"
        );
        Ok(report)
    }

    async fn send(
        &self,
        index: usize,
        step: &DispatchStep,
    ) -> Result<DeliveryReceipt, TransportError> {
        debug!(step = index, kind = %step.kind(), "Sending dispatch step");
        let request = DispatchRequest::new(
            self.channel_id.clone(),
            index,
            step.clone(),
            self.parse_mode.clone(),
        );
        self.transport.send(&request).await
    }

    #[track_caller]
    fn failure(index: usize, report: &DispatchReport, source: TransportError) -> DispatchError {
        warn!(step = index, error = %source, "Dispatch stopped");
        DispatchError::new(index, report.message_ids(), source)
    }
}
