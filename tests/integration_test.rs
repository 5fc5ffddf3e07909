/// Integration tests for the application layer
mod test_utilities;

use cloud_netmap::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn sample_inventory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-inventory")
}

fn load_sample_registry() -> ResourceRegistry {
    let source = JsonDirectoryInventory::new(sample_inventory());
    LoadInventoryUseCase::new(source, MockProgressReporter::new())
        .execute()
        .unwrap()
}

fn mock_source() -> MockInventorySource {
    MockInventorySource::new()
        .with_records(
            ResourceKind::Network,
            vec![json!({"VpcId": "vpc-1", "CidrBlock": "10.0.0.0/16"})],
        )
        .with_records(
            ResourceKind::Subnet,
            vec![json!({"SubnetId": "subnet-1", "VpcId": "vpc-1", "CidrBlock": "10.0.1.0/24"})],
        )
        .with_records(
            ResourceKind::Instance,
            vec![json!({
                "Instances": [{
                    "InstanceId": "i-1",
                    "VpcId": "vpc-1",
                    "SubnetId": "subnet-1",
                    "SecurityGroups": [{"GroupId": "sg-1"}]
                }]
            })],
        )
}

#[test]
fn test_load_inventory_reports_each_kind() {
    let progress_reporter = MockProgressReporter::new();
    let source = MockInventorySource::new().with_records(
        ResourceKind::Network,
        vec![json!({"VpcId": "vpc-1", "CidrBlock": "10.0.0.0/16"})],
    );

    let registry = LoadInventoryUseCase::new(source.clone(), progress_reporter.clone())
        .execute()
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(source.fetch_count(), ResourceKind::ALL.len());
    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Progress: 1/11")));
    assert!(messages
        .iter()
        .any(|m| m == "Completed: ✅ Loaded 1 resource(s)"));
}

#[test]
fn test_load_inventory_propagates_source_failure() {
    let source = MockInventorySource::new().failing_on(ResourceKind::Subnet);
    let result = LoadInventoryUseCase::new(source, MockProgressReporter::new()).execute();

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("mock inventory failure"));
}

#[test]
fn test_record_that_is_not_an_instance_list_fails_decoding() {
    // The mock hands back the raw reservation, not the flattened instance
    let result = LoadInventoryUseCase::new(mock_source(), MockProgressReporter::new()).execute();
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Failed to decode Instance record #0"));
}

#[test]
fn test_sample_inventory_loads_every_kind() {
    let registry = load_sample_registry();

    for id in [
        "vpc-0a1",
        "vpc-0b2",
        "subnet-0a1pub",
        "i-0web",
        "i-0stage",
        "vol-0web",
        "eni-0web",
        "sg-0db",
        "rtb-0pub",
        "acl-0a1",
        "igw-0a1",
        "orders-db",
        "web-lb",
    ] {
        assert!(registry.contains(id), "missing {}", id);
    }
    assert_eq!(registry.of_kind(ResourceKind::Instance).count(), 3);
}

#[test]
fn test_memoizing_source_fetches_each_kind_once() {
    let inner = mock_source();
    let memo = MemoizingInventory::new(inner.clone());

    memo.fetch(ResourceKind::Network).unwrap();
    memo.fetch(ResourceKind::Network).unwrap();
    memo.fetch(ResourceKind::Subnet).unwrap();

    assert_eq!(inner.fetch_count(), 2);
}

#[test]
fn test_topology_of_one_network_excludes_the_other() {
    let registry = load_sample_registry();
    let use_case = GenerateMapUseCase::new(&registry, MockGraphDocument::new);
    let request = MapRequest::topology(ScopeFilter::for_network("vpc-0b2"), TopologyOptions::default());

    let response = use_case.execute(&request).unwrap();
    let content = &response.artifacts[0].content;

    assert!(content.contains("Node(\"i-0stage\")"));
    assert!(content.contains("Node(\"subnet-0b2app\")"));
    assert!(!content.contains("Node(\"i-0web\")"));
    assert!(!content.contains("Node(\"igw-0a1\")"));
}

#[test]
fn test_topology_renders_are_deterministic() {
    let registry = load_sample_registry();
    let use_case = GenerateMapUseCase::new(&registry, DotWriter::new);
    let request = MapRequest::topology(
        ScopeFilter::all(),
        TopologyOptions {
            draw_security_groups: true,
        },
    );

    let first = use_case.execute(&request).unwrap();
    let second = use_case.execute(&request).unwrap();
    assert_eq!(first.artifacts[0].content, second.artifacts[0].content);
}

#[test]
fn test_security_groups_hidden_unless_requested() {
    let registry = load_sample_registry();

    let mut plain = MockGraphDocument::new();
    TopologyRenderer::new(&registry, TopologyOptions::default()).render(&ScopeFilter::all(), &mut plain);
    assert!(!plain.node_ids().contains(&"sg-0web"));

    let mut with_groups = MockGraphDocument::new();
    TopologyRenderer::new(
        &registry,
        TopologyOptions {
            draw_security_groups: true,
        },
    )
    .render(&ScopeFilter::all(), &mut with_groups);
    assert!(with_groups.node_ids().contains(&"sg-0web"));
}

#[test]
fn test_security_view_follows_peer_groups() {
    let registry = load_sample_registry();
    let mut document = MockGraphDocument::new();

    let report = SecurityRenderer::new(&registry)
        .render("i-0app", &mut document)
        .unwrap();

    // sg-0app admits sg-0web; nothing leads to sg-0db or the staging group
    assert_eq!(report.security_groups, vec!["sg-0app", "sg-0web"]);
    assert!(document.has_edge("i-0app", "sg-0app"));
    assert!(document.has_edge("orders-db", "sg-0app"));
    assert!(document.has_edge("acl-0a1", "subnet-0a1priv"));
    assert!(!document.node_ids().contains(&"sg-0stage"));

    // the network closes the document
    let last_node = document.node_ids().last().map(|id| id.to_string());
    assert_eq!(last_node.as_deref(), Some("vpc-0a1"));
}

#[test]
fn test_security_view_rejects_non_instance() {
    let registry = load_sample_registry();
    let use_case = GenerateMapUseCase::new(&registry, MockGraphDocument::new);

    let err = use_case
        .execute(&MapRequest::security("subnet-0a1pub"))
        .unwrap_err();
    assert!(err.to_string().contains("not an instance"));
}

#[test]
fn test_relevant_resources_for_private_address() {
    let registry = load_sample_registry();
    let relevant = FindRelevantResourcesUseCase::new(&registry)
        .execute("10.0.2.5")
        .unwrap();
    let ids: Vec<&str> = relevant.iter().map(|r| r.id.as_str()).collect();

    assert!(ids.contains(&"vpc-0a1"));
    assert!(ids.contains(&"subnet-0a1priv"));
    assert!(ids.contains(&"rtb-0pub"));
    assert!(!ids.contains(&"subnet-0a1pub"));
    assert!(!ids.contains(&"vpc-0b2"));
}
