use super::super::tags::Tags;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    pub group_id: String,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default, rename = "IpPermissions")]
    pub ingress: Vec<SecurityGroupRule>,
    #[serde(default, rename = "IpPermissionsEgress")]
    pub egress: Vec<SecurityGroupRule>,
    #[serde(default)]
    pub tags: Tags,
}

impl SecurityGroup {
    pub fn rules(&self, direction: RuleDirection) -> &[SecurityGroupRule] {
        match direction {
            RuleDirection::Ingress => &self.ingress,
            RuleDirection::Egress => &self.egress,
        }
    }

    pub fn all_rules(&self) -> impl Iterator<Item = &SecurityGroupRule> {
        self.ingress.iter().chain(self.egress.iter())
    }

    /// Groups referenced by any rule, in rule order, without duplicates
    pub fn peer_group_ids(&self) -> Vec<&str> {
        let mut peers: Vec<&str> = Vec::new();
        for peer in self.all_rules().flat_map(|rule| rule.peer_group_ids()) {
            if !peers.contains(&peer) {
                peers.push(peer);
            }
        }
        peers
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDirection {
    Ingress,
    Egress,
}

impl RuleDirection {
    pub const BOTH: [RuleDirection; 2] = [RuleDirection::Ingress, RuleDirection::Egress];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDirection::Ingress => "ingress",
            RuleDirection::Egress => "egress",
        }
    }
}

/// One `IpPermissions` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupRule {
    #[serde(default = "all_protocols")]
    pub ip_protocol: String,
    #[serde(default)]
    pub from_port: Option<i64>,
    #[serde(default)]
    pub to_port: Option<i64>,
    #[serde(default)]
    pub ip_ranges: Vec<Ipv4Range>,
    #[serde(default)]
    pub ipv6_ranges: Vec<Ipv6Range>,
    #[serde(default)]
    pub user_id_group_pairs: Vec<GroupPair>,
}

fn all_protocols() -> String {
    "-1".to_string()
}

impl SecurityGroupRule {
    pub fn cidrs(&self) -> impl Iterator<Item = &str> {
        self.ip_ranges
            .iter()
            .filter_map(|r| r.cidr_ip.as_deref())
            .chain(self.ipv6_ranges.iter().filter_map(|r| r.cidr_ipv6.as_deref()))
    }

    pub fn peer_group_ids(&self) -> impl Iterator<Item = &str> {
        self.user_id_group_pairs
            .iter()
            .filter_map(|pair| pair.group_id.as_deref())
    }

    /// A rule that names other groups instead of address ranges
    pub fn is_peer_scoped(&self) -> bool {
        self.cidrs().next().is_none() && self.peer_group_ids().next().is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv4Range {
    #[serde(default)]
    pub cidr_ip: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6Range {
    #[serde(default)]
    pub cidr_ipv6: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupPair {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
