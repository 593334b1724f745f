//! Messaging transport trait and request types.

use crate::DispatchStep;
use async_trait::async_trait;
use crosspost_error::TransportError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Markup mode used for messaging text.
pub const MARKDOWN: &str = "Markdown";

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// One call to the messaging platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Target channel identifier.
    channel_id: String,
    /// Index of the plan step this request delivers.
    step_index: usize,
    /// What to send.
    step: DispatchStep,
    /// Markup mode of the text or caption.
    parse_mode: String,
}

impl DispatchRequest {
    /// Request for a plan step.
    pub fn new(
        channel_id: impl Into<String>,
        step_index: usize,
        step: DispatchStep,
        parse_mode: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            step_index,
            step,
            parse_mode: parse_mode.into(),
        }
    }
}

/// Proof that a request was delivered.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Index of the plan step that was delivered.
    step_index: usize,
    /// Identifiers of the messages the platform created.
    message_ids: Vec<String>,
}

impl DeliveryReceipt {
    /// Receipt for a delivered step.
    pub fn new(step_index: usize, message_ids: Vec<String>) -> Self {
        Self {
            step_index,
            message_ids,
        }
    }
}

/// Performs the platform calls of a dispatch.
///
/// Implementations report a refused media group with
/// [`TransportErrorKind::GroupRejected`](crosspost_error::TransportErrorKind::GroupRejected)
/// so the dispatcher can fall back to single sends.
#[async_trait]
pub trait MessagingTransport: Send + Sync {
    /// Deliver one request.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The platform refuses a media group
    /// - The platform rejects the request
    /// - An attachment cannot be read
    /// - The platform cannot be reached
    async fn send(&self, request: &DispatchRequest) -> TransportResult<DeliveryReceipt>;

    /// Transport name for logs.
    fn name(&self) -> &str;
}
