//! Transport that delivers nothing, for dry runs.

use crate::{DeliveryReceipt, DispatchRequest, MessagingTransport, TransportResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Transport that logs each request and returns synthetic receipts.
///
/// Every attachment (or the text alone) gets its own message identifier,
/// numbered from 1 in delivery order.
#[derive(Debug, Default)]
pub struct NoOpTransport {
    next_id: AtomicU64,
}

impl NoOpTransport {
    /// Create a new no-op transport.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagingTransport for NoOpTransport {
    async fn send(&self, request: &DispatchRequest) -> TransportResult<DeliveryReceipt> {
        let step = request.step();
        let messages = step.media().len().max(1) as u64;
        let first = self.next_id.fetch_add(messages, Ordering::SeqCst) + 1;

        info!(
            channel = %request.channel_id(),
            step = request.step_index(),
            kind = %step.kind(),
            media = step.media().len(),
            text_len = step.text().chars().count(),
            "NoOpTransport: send() called (no action taken)"
        );

        let ids = (first..first + messages).map(|id| format!("noop-{}", id)).collect();
        Ok(DeliveryReceipt::new(*request.step_index(), ids))
    }

    fn name(&self) -> &str {
        "noop"
    }
}
