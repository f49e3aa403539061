//! Integration tests for the in-memory management bridge.

use std::sync::Arc;

use super::helpers::{bridge, configurator, expose_configurators, orders};
use logctl::logging_backend::{
    adapters::memory::InMemoryManagementBridge,
    domain::{Application, BridgeEndpoint, ManagementObjectName, ObjectNamePattern},
    ports::{BridgeError, ExecRequest, ManagementBridge},
};
use rstest::rstest;
use serde_json::{Value, json};

async fn effective_level(
    bridge: &InMemoryManagementBridge,
    endpoint: &BridgeEndpoint,
    mbean: &ManagementObjectName,
    logger: &str,
) -> Value {
    bridge
        .exec(endpoint, mbean, "getLoggerEffectiveLevel", vec![json!(logger)])
        .await
        .expect("effective level")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_returns_matching_mbeans_in_registration_order(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders", "default"]);
    let unrelated = ManagementObjectName::parse("java.lang:type=Memory").expect("valid name");
    bridge
        .register_mbean(&endpoint, unrelated)
        .expect("registration should succeed");

    let found = bridge
        .search(&endpoint, &ObjectNamePattern::logback_configurator())
        .await
        .expect("search");

    assert_eq!(found, [configurator("orders"), configurator("default")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_scoped_to_endpoint(bridge: Arc<InMemoryManagementBridge>, orders: Application) {
    expose_configurators(&bridge, &orders, &["orders"]);
    let billing = Application::new("c3d4", "billing").expect("valid application");
    let billing_endpoint = expose_configurators(&bridge, &billing, &["billing"]);

    let found = bridge
        .search(&billing_endpoint, &ObjectNamePattern::logback_configurator())
        .await
        .expect("search");

    assert_eq!(found, [configurator("billing")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_endpoint_is_rejected(bridge: Arc<InMemoryManagementBridge>, orders: Application) {
    let result = bridge
        .search(
            &BridgeEndpoint::for_application(&orders),
            &ObjectNamePattern::logback_configurator(),
        )
        .await;

    assert!(matches!(result, Err(BridgeError::Remote { status: 404, .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn effective_level_is_inherited_from_nearest_ancestor(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge
        .add_logger(&endpoint, &mbean, "ROOT", Some("INFO"))
        .expect("root level");
    bridge
        .add_logger(&endpoint, &mbean, "com.example", Some("WARN"))
        .expect("parent level");

    assert_eq!(
        effective_level(&bridge, &endpoint, &mbean, "com.example.orders.api").await,
        json!("WARN")
    );
    assert_eq!(
        effective_level(&bridge, &endpoint, &mbean, "org.other").await,
        json!("INFO")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn null_level_clears_explicit_level(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge
        .add_logger(&endpoint, &mbean, "com.example", Some("TRACE"))
        .expect("explicit level");

    bridge
        .exec(
            &endpoint,
            &mbean,
            "setLoggerLevel",
            vec![json!("com.example"), json!("null")],
        )
        .await
        .expect("clear level");

    assert_eq!(
        bridge
            .configured_level(&endpoint, &mbean, "com.example")
            .expect("lookup"),
        None
    );
    assert_eq!(
        effective_level(&bridge, &endpoint, &mbean, "com.example").await,
        json!("DEBUG")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logger_list_includes_loggers_touched_by_level_changes(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge
        .exec(
            &endpoint,
            &mbean,
            "setLoggerLevel",
            vec![json!("com.example"), json!("INFO")],
        )
        .await
        .expect("set level");

    let list = bridge
        .read_attr(&endpoint, &mbean, "LoggerList")
        .await
        .expect("logger list");

    assert_eq!(list, json!(["ROOT", "com.example"]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_responses_echo_requests_and_can_be_reversed(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge.reverse_bulk_responses(true).expect("reordering");
    let requests = ["a", "b"]
        .into_iter()
        .map(|logger| {
            ExecRequest::new(
                mbean.clone(),
                "getLoggerEffectiveLevel",
                vec![json!(logger)],
            )
        })
        .collect();

    let responses = bridge
        .bulk_request(&endpoint, requests)
        .await
        .expect("bulk request");

    let echoed: Vec<&Value> = responses
        .iter()
        .filter_map(|response| response.request().arguments().first())
        .collect();
    assert_eq!(echoed, [&json!("b"), &json!("a")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn injected_failure_affects_only_the_next_call(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);
    let mbean = configurator("orders");
    bridge
        .fail_next(BridgeError::remote(500, "boom"))
        .expect("failure injection");

    let failed = bridge.read_attr(&endpoint, &mbean, "LoggerList").await;
    let recovered = bridge.read_attr(&endpoint, &mbean, "LoggerList").await;

    assert!(matches!(failed, Err(BridgeError::Remote { status: 500, .. })));
    assert!(recovered.is_ok());
    assert_eq!(bridge.call_count().expect("call count"), 2);
}

#[rstest]
#[case("getLoggerEffectiveLevel", vec![])]
#[case("setLoggerLevel", vec![json!("com.example")])]
#[case("reloadByFileName", vec![json!("logback.xml")])]
#[tokio::test(flavor = "multi_thread")]
async fn unsupported_exec_calls_are_rejected(
    bridge: Arc<InMemoryManagementBridge>,
    orders: Application,
    #[case] operation: &str,
    #[case] arguments: Vec<Value>,
) {
    let endpoint = expose_configurators(&bridge, &orders, &["orders"]);

    let result = bridge
        .exec(&endpoint, &configurator("orders"), operation, arguments)
        .await;

    assert!(matches!(result, Err(BridgeError::Remote { status: 400, .. })));
}
