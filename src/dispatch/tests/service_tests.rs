//! Service tests for credential-gated triggering.

use std::sync::Arc;

use crate::dispatch::{
    adapters::memory::RecordingDispatcher,
    domain::{DispatchOutcome, DispatchTarget, TriggerSource},
    ports::DispatchError,
    services::{DispatchService, DispatchServiceError},
};
use rstest::{fixture, rstest};

#[fixture]
fn target() -> DispatchTarget {
    DispatchTarget::from_parts("acme/scraper", "scrape.yml", "main").expect("valid target")
}

#[rstest]
#[tokio::test]
async fn trigger_without_credential_makes_no_call(target: DispatchTarget) {
    let service: DispatchService<RecordingDispatcher> = DispatchService::untriggered(target);

    let outcome = service
        .trigger(TriggerSource::Manual)
        .await
        .expect("untriggered path should succeed");

    assert_eq!(outcome, DispatchOutcome::Untriggered);
}

#[rstest]
#[tokio::test]
async fn trigger_sends_source_and_force_inputs(target: DispatchTarget) {
    let dispatcher = RecordingDispatcher::new();
    let service = DispatchService::new(Arc::new(dispatcher.clone()), target);

    let outcome = service
        .trigger(TriggerSource::Manual)
        .await
        .expect("dispatch should succeed");

    assert_eq!(outcome, DispatchOutcome::Dispatched);
    let recorded = dispatcher.recorded();
    assert_eq!(recorded.len(), 1);
    let inputs = recorded.first().expect("one request").inputs().to_vec();
    assert_eq!(
        inputs,
        vec![
            ("trigger_source".to_owned(), "manual".to_owned()),
            ("force_refresh".to_owned(), "true".to_owned()),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn edit_trigger_omits_force_refresh(target: DispatchTarget) {
    let dispatcher = RecordingDispatcher::new();
    let service = DispatchService::new(Arc::new(dispatcher.clone()), target);

    service
        .trigger(TriggerSource::EditObserver)
        .await
        .expect("dispatch should succeed");

    let recorded = dispatcher.recorded();
    let inputs = recorded.first().expect("one request").inputs().to_vec();
    assert_eq!(
        inputs,
        vec![("trigger_source".to_owned(), "edit".to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn server_error_surfaces_without_retry(target: DispatchTarget) {
    let dispatcher = RecordingDispatcher::new();
    dispatcher.fail_with(DispatchError::UnexpectedStatus(500));
    let service = DispatchService::new(Arc::new(dispatcher.clone()), target);

    let result = service.trigger(TriggerSource::Manual).await;

    assert!(matches!(
        result,
        Err(DispatchServiceError::Dispatch(
            DispatchError::UnexpectedStatus(500)
        ))
    ));
    assert_eq!(dispatcher.recorded().len(), 1);
}
