//! Network-layer records: VPCs, subnets, route tables, network ACLs and internet gateways.

use super::super::tags::Tags;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    pub vpc_id: String,
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    pub subnet_id: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default)]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTable {
    pub route_table_id: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub associations: Vec<SubnetAssociation>,
    #[serde(default)]
    pub tags: Tags,
}

impl RouteTable {
    pub fn is_associated_with(&self, subnet_id: &str) -> bool {
        self.associations
            .iter()
            .any(|assoc| assoc.subnet_id.as_deref() == Some(subnet_id))
    }

    pub fn associated_subnets(&self) -> impl Iterator<Item = &str> {
        self.associations
            .iter()
            .filter_map(|assoc| assoc.subnet_id.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    #[serde(default)]
    pub destination_cidr_block: Option<String>,
    #[serde(default)]
    pub destination_ipv6_cidr_block: Option<String>,
    #[serde(default)]
    pub gateway_id: Option<String>,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub network_interface_id: Option<String>,
    #[serde(default)]
    pub nat_gateway_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Where a route sends its traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget<'a> {
    Gateway(&'a str),
    Instance(&'a str),
    NetworkInterface(&'a str),
    NatGateway(&'a str),
    Unknown,
}

impl Route {
    pub fn destination(&self) -> Option<&str> {
        self.destination_cidr_block
            .as_deref()
            .or(self.destination_ipv6_cidr_block.as_deref())
    }

    /// Instance targets win over the interface the provider also reports for them.
    pub fn target(&self) -> RouteTarget<'_> {
        if let Some(gateway) = self.gateway_id.as_deref() {
            RouteTarget::Gateway(gateway)
        } else if let Some(instance) = self.instance_id.as_deref() {
            RouteTarget::Instance(instance)
        } else if let Some(nic) = self.network_interface_id.as_deref() {
            RouteTarget::NetworkInterface(nic)
        } else if let Some(nat) = self.nat_gateway_id.as_deref() {
            RouteTarget::NatGateway(nat)
        } else {
            RouteTarget::Unknown
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.as_deref().map_or(true, |state| state == "active")
    }
}

impl RouteTarget<'_> {
    pub fn label(&self) -> &str {
        match self {
            RouteTarget::Gateway(id)
            | RouteTarget::Instance(id)
            | RouteTarget::NetworkInterface(id)
            | RouteTarget::NatGateway(id) => id,
            RouteTarget::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubnetAssociation {
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub main: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAcl {
    pub network_acl_id: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub entries: Vec<NaclEntry>,
    #[serde(default)]
    pub associations: Vec<SubnetAssociation>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub tags: Tags,
}

impl NetworkAcl {
    pub fn is_associated_with(&self, subnet_id: &str) -> bool {
        self.associations
            .iter()
            .any(|assoc| assoc.subnet_id.as_deref() == Some(subnet_id))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NaclEntry {
    pub rule_number: i64,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub rule_action: String,
    #[serde(default)]
    pub egress: bool,
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default)]
    pub ipv6_cidr_block: Option<String>,
    #[serde(default)]
    pub port_range: Option<NaclPortRange>,
}

impl NaclEntry {
    pub fn cidr(&self) -> Option<&str> {
        self.cidr_block
            .as_deref()
            .or(self.ipv6_cidr_block.as_deref())
    }

    pub fn is_allow(&self) -> bool {
        self.rule_action.eq_ignore_ascii_case("allow")
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NaclPortRange {
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternetGateway {
    pub internet_gateway_id: String,
    #[serde(default)]
    pub attachments: Vec<GatewayAttachment>,
    #[serde(default)]
    pub tags: Tags,
}

impl InternetGateway {
    pub fn attached_networks(&self) -> impl Iterator<Item = &str> {
        self.attachments.iter().map(|a| a.vpc_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayAttachment {
    pub vpc_id: String,
    #[serde(default)]
    pub state: Option<String>,
}
