//! Tests for sequential dispatch with a mock transport.

use async_trait::async_trait;
use crosspost_core::{FileRecord, MediaCategory};
use crosspost_error::{TransportError, TransportErrorKind};
use crosspost_social::{
    DeliveryReceipt, DispatchKind, DispatchPlanner, DispatchRequest, Dispatcher, MARKDOWN,
    MessagingTransport, NoOpTransport, TransportResult,
};
use std::sync::Mutex;

/// Mock transport recording every request it accepts.
#[derive(Default)]
struct MockTransport {
    reject_groups: bool,
    fail_at_call: Option<usize>,
    calls: Mutex<usize>,
    delivered: Mutex<Vec<DispatchRequest>>,
}

impl MockTransport {
    fn rejecting_groups() -> Self {
        Self {
            reject_groups: true,
            ..Self::default()
        }
    }

    fn failing_at(call: usize) -> Self {
        Self {
            fail_at_call: Some(call),
            ..Self::default()
        }
    }

    fn delivered(&self) -> Vec<DispatchRequest> {
        self.delivered.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl MessagingTransport for MockTransport {
    async fn send(&self, request: &DispatchRequest) -> TransportResult<DeliveryReceipt> {
        let call = {
            let mut calls = self.calls.lock().expect("Lock poisoned");
            *calls += 1;
            *calls
        };

        if self.fail_at_call == Some(call) {
            return Err(TransportError::new(TransportErrorKind::Rejected(
                "chat not found".to_string(),
            )));
        }
        if self.reject_groups && *request.step().kind() == DispatchKind::MediaGroup {
            return Err(TransportError::new(TransportErrorKind::GroupRejected(
                "group not allowed".to_string(),
            )));
        }

        self.delivered
            .lock()
            .expect("Lock poisoned")
            .push(request.clone());
        Ok(DeliveryReceipt::new(
            *request.step_index(),
            vec![format!("msg-{}", call)],
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn images(count: usize) -> Vec<FileRecord> {
    (0..count)
        .map(|i| {
            FileRecord::available(
                format!("img{}.png", i),
                1024,
                "image/png",
                MediaCategory::Image,
                None,
            )
        })
        .collect()
}

#[tokio::test]
async fn test_group_rejection_falls_back_to_single_sends() {
    let text = "x".repeat(500);
    let plan = DispatchPlanner::default().plan(&text, &images(3));
    let dispatcher = Dispatcher::new(MockTransport::rejecting_groups(), "@channel");

    let report = dispatcher.execute(&plan).await.expect("Dispatch should succeed");
    assert_eq!(*report.group_fallbacks(), 1);
    assert_eq!(report.receipts().len(), 3);

    let delivered = dispatcher.transport().delivered();
    assert_eq!(delivered.len(), 3);
    for (i, request) in delivered.iter().enumerate() {
        assert_eq!(*request.step().kind(), DispatchKind::SingleMedia);
        assert_eq!(
            request.step().media()[0].path().to_string_lossy(),
            format!("img{}.png", i)
        );
    }
    assert_eq!(delivered[0].step().text(), &text);
    assert_eq!(delivered[1].step().text(), "");
    assert_eq!(delivered[2].step().text(), "");
}

#[tokio::test]
async fn test_accepted_group_is_one_request() {
    let plan = DispatchPlanner::default().plan("Album", &images(3));
    let dispatcher = Dispatcher::new(MockTransport::default(), "@channel");

    let report = dispatcher.execute(&plan).await.expect("Dispatch should succeed");
    assert_eq!(*report.group_fallbacks(), 0);

    let delivered = dispatcher.transport().delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(*delivered[0].step().kind(), DispatchKind::MediaGroup);
    assert_eq!(delivered[0].channel_id(), "@channel");
    assert_eq!(delivered[0].parse_mode(), MARKDOWN);
}

#[tokio::test]
async fn test_long_text_is_sent_before_media() {
    let text = "y".repeat(5000);
    let plan = DispatchPlanner::default().plan(&text, &images(3));
    let dispatcher = Dispatcher::new(MockTransport::default(), "@channel");

    dispatcher.execute(&plan).await.expect("Dispatch should succeed");

    let delivered = dispatcher.transport().delivered();
    assert_eq!(delivered.len(), 2);
    assert_eq!(*delivered[0].step().kind(), DispatchKind::TextMessage);
    assert_eq!(delivered[0].step().text(), &text);
    assert_eq!(*delivered[1].step().kind(), DispatchKind::MediaGroup);
    assert_eq!(delivered[1].step().text(), "");
}

#[tokio::test]
async fn test_failure_reports_partial_delivery() {
    let text = "z".repeat(5000);
    let plan = DispatchPlanner::default().plan(&text, &images(2));
    let dispatcher = Dispatcher::new(MockTransport::failing_at(2), "@channel");

    let err = dispatcher
        .execute(&plan)
        .await
        .expect_err("Second step should fail");

    assert_eq!(err.failed_step, 1);
    assert_eq!(err.delivered, vec!["msg-1".to_string()]);
    assert!(!err.source.is_group_rejection());
    assert_eq!(dispatcher.transport().delivered().len(), 1);
}

#[tokio::test]
async fn test_failure_during_fallback_stops_dispatch() {
    let transport = MockTransport {
        reject_groups: true,
        fail_at_call: Some(3),
        ..MockTransport::default()
    };
    let plan = DispatchPlanner::default().plan("Album", &images(3));
    let dispatcher = Dispatcher::new(transport, "@channel");

    let err = dispatcher
        .execute(&plan)
        .await
        .expect_err("Fallback send should fail");

    assert_eq!(err.failed_step, 0);
    assert!(err.to_string().contains("step 0 failed"));
    assert_eq!(err.delivered, vec!["msg-2".to_string()]);
}

#[tokio::test]
async fn test_noop_transport_numbers_every_message() {
    let plan = DispatchPlanner::default().plan("Hello", &images(3));
    let dispatcher = Dispatcher::new(NoOpTransport::new(), "@dry_run");

    let report = dispatcher.execute(&plan).await.expect("No-op never fails");
    assert_eq!(
        report.message_ids(),
        vec!["noop-1".to_string(), "noop-2".to_string(), "noop-3".to_string()]
    );

    let text_only = DispatchPlanner::default().plan("Again", &[]);
    let report = dispatcher.execute(&text_only).await.expect("No-op never fails");
    assert_eq!(report.message_ids(), vec!["noop-4".to_string()]);
}
