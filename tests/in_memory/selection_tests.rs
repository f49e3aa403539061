//! End-to-end selection tests against the in-memory bridge.

use std::sync::Arc;

use super::helpers::{bridge, configurator, expose_configurators, orders};
use logctl::logging_backend::{
    adapters::memory::InMemoryManagementBridge,
    domain::{Application, LoggerDescriptor, LoggerLevel},
    ports::{BridgeError, LoggingBackend, LoggingBackendError},
    services::{BackendKind, BackendSelector, ResolveError, SelectionError, SelectorConfig},
};
use rstest::rstest;

type TestSelector = BackendSelector<InMemoryManagementBridge>;

fn live(bridge: &Arc<InMemoryManagementBridge>) -> TestSelector {
    BackendSelector::new(Arc::clone(bridge), &SelectorConfig::live())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn live_backend_round_trips_levels(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["default", "orders"]);
    let mbean = configurator("orders");
    bridge
        .add_logger(&endpoint, &mbean, "ROOT", Some("INFO"))
        .expect("root level");
    bridge
        .add_logger(&endpoint, &mbean, "com.example", None)
        .expect("logger");

    let backend = live(&bridge).select(&orders).await.expect("selection");
    backend
        .set_level("com.example", "TRACE")
        .await
        .expect("level change");

    let names = backend.logger_names().await.expect("listing");
    let loggers: Vec<LoggerDescriptor> = names.iter().map(LoggerDescriptor::new).collect();
    let levels = backend.effective_levels(&loggers).await.expect("levels");

    assert_eq!(names, ["ROOT", "com.example"]);
    assert_eq!(
        levels,
        [
            LoggerLevel::new("ROOT", "INFO"),
            LoggerLevel::new("com.example", "TRACE"),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reordered_batch_is_correlated_by_logger_name(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge
        .add_logger(&endpoint, &mbean, "a", Some("INFO"))
        .expect("logger a");
    bridge
        .add_logger(&endpoint, &mbean, "b", Some("WARN"))
        .expect("logger b");
    bridge.reverse_bulk_responses(true).expect("reordering");

    let backend = live(&bridge).select(&orders).await.expect("selection");
    let levels = backend
        .effective_levels(&[LoggerDescriptor::new("a"), LoggerDescriptor::new("b")])
        .await
        .expect("levels");

    assert_eq!(
        levels,
        [LoggerLevel::new("b", "WARN"), LoggerLevel::new("a", "INFO")]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ambiguous_configurators_are_reported(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    expose_configurators(&bridge, &orders, &["billing", "shipping"]);

    let result = live(&bridge).select(&orders).await;

    match result {
        Err(SelectionError::Resolve(ResolveError::Ambiguous { candidates, .. })) => {
            assert_eq!(
                candidates,
                [configurator("billing"), configurator("shipping")]
            );
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bridge_failure_after_selection_propagates(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    expose_configurators(&bridge, &orders, &["orders"]);
    let backend = live(&bridge).select(&orders).await.expect("selection");
    bridge
        .fail_next(BridgeError::remote(502, "bad gateway"))
        .expect("failure injection");

    let result = backend.logger_names().await;

    assert!(matches!(
        result,
        Err(LoggingBackendError::Bridge(BridgeError::Remote { status: 502, .. }))
    ));
}

#[rstest]
#[case(SelectorConfig::default(), BackendKind::Noop)]
#[case(SelectorConfig::demo(), BackendKind::Synthetic)]
#[tokio::test(flavor = "multi_thread")]
async fn offline_backends_issue_no_bridge_calls(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
    #[case] config: SelectorConfig,
    #[case] expected: BackendKind,
) {
    let selector = BackendSelector::new(Arc::clone(&bridge), &config);

    let backend = selector.select(&orders).await.expect("selection");
    backend.logger_names().await.expect("listing");
    backend
        .effective_levels(&[LoggerDescriptor::new("ROOT")])
        .await
        .expect("levels");
    backend.set_level("ROOT", "OFF").await.expect("level change");

    assert_eq!(backend.kind(), expected);
    assert_eq!(bridge.call_count().expect("call count"), 0);
}
