//! Typed inventory records, decoded from the provider's JSON shape.
mod compute;
mod managed;
mod network;
mod security_group;

pub use compute::{GroupIdentifier, Instance, InstanceState, NetworkInterface, Volume};
pub use managed::{Database, DbSubnet, LoadBalancer};
pub use network::{
    InternetGateway, NaclEntry, NaclPortRange, NetworkAcl, Route, RouteTable, RouteTarget, Subnet,
    Vpc,
};
pub use security_group::{RuleDirection, SecurityGroup, SecurityGroupRule};
