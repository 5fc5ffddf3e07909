//! Small registries shared by the renderer tests.

use crate::network_mapping::domain::{Resource, ResourceKind, ResourceRegistry};
use serde_json::{json, Value};

pub fn resource(kind: ResourceKind, value: Value) -> Resource {
    Resource::decode(kind, value).unwrap()
}

/// `net-1` > `sub-1` > `i-1`, with `sg-1` allowing 22/tcp from anywhere
pub fn base_resources() -> Vec<Resource> {
    vec![
        resource(
            ResourceKind::Network,
            json!({"VpcId": "net-1", "CidrBlock": "10.0.0.0/16"}),
        ),
        resource(
            ResourceKind::Subnet,
            json!({"SubnetId": "sub-1", "VpcId": "net-1", "CidrBlock": "10.0.1.0/24"}),
        ),
        resource(
            ResourceKind::Instance,
            json!({
                "InstanceId": "i-1",
                "VpcId": "net-1",
                "SubnetId": "sub-1",
                "PrivateIpAddress": "10.0.1.10",
                "SecurityGroups": [{"GroupId": "sg-1", "GroupName": "ssh"}],
                "Tags": [{"Key": "Name", "Value": "bastion"}]
            }),
        ),
        resource(
            ResourceKind::SecurityGroup,
            json!({
                "GroupId": "sg-1",
                "VpcId": "net-1",
                "Description": "ssh from anywhere",
                "IpPermissions": [
                    {"IpProtocol": "tcp", "FromPort": 22, "ToPort": 22,
                     "IpRanges": [{"CidrIp": "0.0.0.0/0"}]}
                ]
            }),
        ),
    ]
}

pub fn base_registry() -> ResourceRegistry {
    ResourceRegistry::from_resources(base_resources())
}

/// The base registry plus `extra`
pub fn registry_with(extra: Vec<Resource>) -> ResourceRegistry {
    ResourceRegistry::from_resources(base_resources().into_iter().chain(extra))
}
