use crate::network_mapping::domain::ResourceKind;
use crate::shared::error::NetmapError;
use crate::shared::Result;
use serde_json::Value;

/// How one resource kind is listed by the provider CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeCommand {
    pub service: &'static str,
    pub command: &'static str,
    /// Top-level key holding the record list
    pub list_key: &'static str,
}

impl DescribeCommand {
    pub fn for_kind(kind: ResourceKind) -> Self {
        let (service, command, list_key) = match kind {
            ResourceKind::Network => ("ec2", "describe-vpcs", "Vpcs"),
            ResourceKind::InternetGateway => {
                ("ec2", "describe-internet-gateways", "InternetGateways")
            }
            ResourceKind::NetworkInterface => {
                ("ec2", "describe-network-interfaces", "NetworkInterfaces")
            }
            ResourceKind::Instance => ("ec2", "describe-instances", "Reservations"),
            ResourceKind::Subnet => ("ec2", "describe-subnets", "Subnets"),
            ResourceKind::Volume => ("ec2", "describe-volumes", "Volumes"),
            ResourceKind::RouteTable => ("ec2", "describe-route-tables", "RouteTables"),
            ResourceKind::SecurityGroup => ("ec2", "describe-security-groups", "SecurityGroups"),
            ResourceKind::NetworkAcl => ("ec2", "describe-network-acls", "NetworkAcls"),
            ResourceKind::Database => ("rds", "describe-db-instances", "DBInstances"),
            ResourceKind::LoadBalancer => {
                ("elb", "describe-load-balancers", "LoadBalancerDescriptions")
            }
        };
        Self {
            service,
            command,
            list_key,
        }
    }

    /// File name used by offline inventory directories
    pub fn file_name(&self) -> String {
        format!("{}.json", self.command)
    }
}

/// Pulls the record list for `kind` out of a describe response.
///
/// Instances come wrapped in reservations and are flattened. A response
/// without the list key holds no records.
pub fn extract_records(kind: ResourceKind, document: Value, source_name: &str) -> Result<Vec<Value>> {
    let describe = DescribeCommand::for_kind(kind);
    let Value::Object(mut body) = document else {
        return Err(NetmapError::InventoryDecodeError {
            source_name: source_name.to_string(),
            details: "expected a JSON object at the top level".to_string(),
        }
        .into());
    };

    let list = match body.remove(describe.list_key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(NetmapError::InventoryDecodeError {
                source_name: source_name.to_string(),
                details: format!("`{}` is not a list", describe.list_key),
            }
            .into())
        }
    };

    if kind != ResourceKind::Instance {
        return Ok(list);
    }

    let mut instances = Vec::new();
    for reservation in list {
        match reservation {
            Value::Object(mut reservation) => match reservation.remove("Instances") {
                Some(Value::Array(items)) => instances.extend(items),
                None | Some(Value::Null) => {}
                Some(_) => {
                    return Err(NetmapError::InventoryDecodeError {
                        source_name: source_name.to_string(),
                        details: "`Reservations[].Instances` is not a list".to_string(),
                    }
                    .into())
                }
            },
            _ => {
                return Err(NetmapError::InventoryDecodeError {
                    source_name: source_name.to_string(),
                    details: "reservation is not an object".to_string(),
                }
                .into())
            }
        }
    }
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_kind_has_a_command() {
        for kind in ResourceKind::ALL {
            let describe = DescribeCommand::for_kind(kind);
            assert!(describe.command.starts_with("describe-"), "{}", kind);
        }
        assert_eq!(
            DescribeCommand::for_kind(ResourceKind::Database).service,
            "rds"
        );
        assert_eq!(
            DescribeCommand::for_kind(ResourceKind::LoadBalancer).file_name(),
            "describe-load-balancers.json"
        );
    }

    #[test]
    fn test_instances_are_flattened() {
        let document = json!({
            "Reservations": [
                {"ReservationId": "r-1", "Instances": [{"InstanceId": "i-1"}, {"InstanceId": "i-2"}]},
                {"ReservationId": "r-2", "Instances": [{"InstanceId": "i-3"}]}
            ]
        });
        let records = extract_records(ResourceKind::Instance, document, "test").unwrap();
        let ids: Vec<&str> = records
            .iter()
            .map(|r| r["InstanceId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["i-1", "i-2", "i-3"]);
    }

    #[test]
    fn test_plain_list_and_missing_key() {
        let records = extract_records(
            ResourceKind::Network,
            json!({"Vpcs": [{"VpcId": "vpc-1"}]}),
            "test",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert!(extract_records(ResourceKind::Subnet, json!({}), "test")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        let err = extract_records(ResourceKind::Network, json!([1, 2]), "describe-vpcs").unwrap_err();
        assert!(err.to_string().contains("describe-vpcs"));
        assert!(extract_records(ResourceKind::Network, json!({"Vpcs": "nope"}), "x").is_err());
    }
}
