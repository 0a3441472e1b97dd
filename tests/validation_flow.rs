//! End-to-end validation passes over realistic configuration sections.

use config_vet::prelude::*;
use config_vet::prop;

#[derive(Debug, Clone)]
struct ApiConfig {
    service_name: String,
    listen_address: String,
    upstream_endpoint: String,
    admin_email: String,
    worker_count: i32,
    request_timeout: i64,
    maintenance_mode: bool,
}

fn good_config() -> ApiConfig {
    ApiConfig {
        service_name: "payments-api".to_string(),
        listen_address: "192.168.4.20".to_string(),
        upstream_endpoint: "https://ledger.internal.example.com".to_string(),
        admin_email: "ops.team@example.com".to_string(),
        worker_count: 8,
        request_timeout: 30,
        maintenance_mode: false,
    }
}

fn run_rules(cfg: &ApiConfig) -> ValidationCollection {
    let mut collector = ValidationCollector::new(cfg);
    collector
        .validate_not_empty(prop!(cfg.service_name), "Service name must be set")
        .validate_private_ipv4(prop!(cfg.listen_address), "Listen address must be private")
        .validate_absolute_uri(
            prop!(cfg.upstream_endpoint),
            "Upstream endpoint must be an absolute URI",
        )
        .validate_email(prop!(cfg.admin_email), "Admin contact must be an e-mail address")
        .validate_not_zero(prop!(cfg.worker_count), "Worker count must be configured")
        .validate_not_zero(prop!(cfg.request_timeout), "Request timeout must be configured")
        .must(
            |c| !c.maintenance_mode,
            "maintenance_mode",
            "Service must not start in maintenance mode",
        );
    collector.into_validations()
}

#[test]
fn test_good_config_produces_empty_collection() {
    let failures = run_rules(&good_config());
    assert!(failures.is_empty());
}

#[test]
fn test_each_injected_fault_is_attributed() {
    let cfg = ApiConfig {
        service_name: String::new(),
        listen_address: "0.0.0.0".to_string(),
        upstream_endpoint: "ledger.internal".to_string(),
        admin_email: "ops team@example.com".to_string(),
        worker_count: 0,
        request_timeout: 30,
        maintenance_mode: true,
    };

    let failures = run_rules(&cfg);
    assert_eq!(failures.len(), 6);

    let names: Vec<_> = failures.iter().map(|i| i.item().to_string()).collect();
    assert_eq!(
        names,
        [
            "service_name",
            "listen_address",
            "upstream_endpoint",
            "admin_email",
            "worker_count",
            "maintenance_mode",
        ]
    );
    for failure in &failures {
        assert_eq!(failure.section(), "ApiConfig");
    }

    // The unparseable listen address gets the fixed invalid-IP message, not
    // the caller's.
    assert_eq!(
        failures[1].message(),
        "IP address is missing or it is invalid."
    );
    assert_eq!(failures[4].value(), &Value::Integer(0));
    assert_eq!(failures[5].value(), &Value::Absent);
}

#[test]
fn test_single_fault_yields_single_item() {
    let mut cfg = good_config();
    cfg.worker_count = 0;

    let failures = run_rules(&cfg);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].item(), "worker_count");
    assert_eq!(failures[0].message(), "Worker count must be configured");
}

#[test]
fn test_multiple_rules_may_fail_on_one_property() {
    let mut cfg = good_config();
    cfg.service_name = String::new();

    let mut collector = ValidationCollector::new(&cfg);
    collector
        .validate_not_empty(prop!(cfg.service_name), "Name must be set")
        .validate_starts_with(prop!(cfg.service_name), "payments", "Name must be namespaced");

    let failures = collector.into_validations();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].item(), "service_name");
    assert_eq!(failures[1].item(), "service_name");
}

#[test]
fn test_aggregate_error_propagation() {
    let mut cfg = good_config();
    cfg.worker_count = 0;
    cfg.admin_email = "broken".to_string();

    let mut collector = ValidationCollector::new(&cfg);
    collector
        .validate_not_zero(prop!(cfg.worker_count), "Worker count must be configured")
        .validate_email(prop!(cfg.admin_email), "Admin contact must be an e-mail address");

    let err = collector.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration contains invalid values. 2 validations failed."
    );
    assert_eq!(err.validations().len(), 2);

    let custom = ValidationError::with_message_and_validations("Test", err.into_validations());
    assert_eq!(custom.to_string(), "Test. 2 validations failed.");
}

#[test]
fn test_runtime_selector_path() {
    // Rules assembled from metadata use the runtime selector path; a
    // malformed selector is fatal before anything is collected.
    let cfg = good_config();

    let property = Property::resolve("cfg.worker_count", cfg.worker_count).unwrap();
    assert_eq!(property.name(), "worker_count");

    let err = Property::resolve("cfg.upstream.endpoint", cfg.worker_count).unwrap_err();
    assert!(matches!(err, SelectorError::NotDirectAccess { .. }));
}

#[test]
fn test_result_list_serializes_for_health_endpoints() {
    let mut cfg = good_config();
    cfg.worker_count = 0;

    let failures = run_rules(&cfg);
    let json = serde_json::to_value(&failures).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "section": "ApiConfig",
            "item": "worker_count",
            "value": 0,
            "message": "Worker count must be configured",
        }])
    );
}
