//! Messaging dispatch for the Crosspost engine.
//!
//! The [`DispatchPlanner`] turns final text and classified media into the
//! sequence of send operations the messaging platform needs. The
//! [`Dispatcher`] runs that plan against a [`MessagingTransport`], one step at
//! a time, resending a rejected media group as individual files.
//!
//! # Example
//!
//! ```
//! use crosspost_social::{Dispatcher, DispatchPlanner, NoOpTransport};
//!
//! # async fn run() -> Result<(), crosspost_error::DispatchError> {
//! let plan = DispatchPlanner::default().plan("Hello, channel!", &[]);
//! let dispatcher = Dispatcher::new(NoOpTransport::new(), "@my_channel");
//! let report = dispatcher.execute(&plan).await?;
//! assert_eq!(report.receipts().len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatch;
mod noop;
mod plan;
mod transport;

pub use dispatch::{DispatchReport, Dispatcher};
pub use noop::NoOpTransport;
pub use plan::{
    DEFAULT_CAPTION_LIMIT, DispatchKind, DispatchPlan, DispatchPlanner, DispatchStep,
    MediaAttachment,
};
pub use transport::{
    DeliveryReceipt, DispatchRequest, MARKDOWN, MessagingTransport, TransportResult,
};
