//! Tabular views of security-group rules, network ACL entries and routes.
//!
//! Tables are syntax-free; a [`GraphSink`](crate::ports::outbound::GraphSink)
//! decides how to draw them.

use crate::network_mapping::domain::records::{
    NaclEntry, NetworkAcl, RouteTable, RuleDirection, SecurityGroup, SecurityGroupRule,
};
use std::fmt;

pub const ALLOW_COLOR: &str = "green";
pub const DENY_COLOR: &str = "red";

/// Ports a rule applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortRange {
    All,
    Single { port: i64, protocol: String },
    Range { from: i64, to: i64, protocol: String },
}

impl PortRange {
    /// `-1`/`all` protocols, a missing from-port and negative ports (ICMP
    /// type wildcards) all mean every port.
    pub fn new(protocol: &str, from: Option<i64>, to: Option<i64>) -> Self {
        if protocol == "-1" || protocol.eq_ignore_ascii_case("all") {
            return PortRange::All;
        }
        let Some(from) = from.filter(|port| *port >= 0) else {
            return PortRange::All;
        };
        let protocol = protocol.to_string();
        match to {
            Some(to) if to != from => PortRange::Range { from, to, protocol },
            _ => PortRange::Single {
                port: from,
                protocol,
            },
        }
    }

    pub fn for_security_rule(rule: &SecurityGroupRule) -> Self {
        Self::new(&rule.ip_protocol, rule.from_port, rule.to_port)
    }

    pub fn for_nacl_entry(entry: &NaclEntry) -> Self {
        let protocol = nacl_protocol_name(&entry.protocol);
        match entry.port_range {
            Some(range) => Self::new(protocol, Some(range.from), Some(range.to)),
            None => Self::new(protocol, None, None),
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortRange::All => write!(f, "ALL"),
            PortRange::Single { port, protocol } => write!(f, "{}/{}", port, protocol),
            PortRange::Range { from, to, protocol } => write!(f, "{}-{}/{}", from, to, protocol),
        }
    }
}

/// IANA protocol numbers used by network ACL entries
pub fn nacl_protocol_name(code: &str) -> &str {
    match code {
        "6" => "tcp",
        "17" => "udp",
        "1" => "icmp",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    pub lines: Vec<String>,
    pub background: Option<String>,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            background: None,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            background: None,
        }
    }

    pub fn with_background(mut self, color: &str) -> Self {
        self.background = Some(color.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl RuleTable {
    fn new(title: String, headers: &[&str]) -> Self {
        Self {
            title,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// `CIDR | Ports` for one direction of a security group
    pub fn for_security_group(group: &SecurityGroup, direction: RuleDirection) -> Self {
        let mut table = Self::new(
            format!("{} {}", group.group_id, direction.as_str()),
            &["CIDR", "Ports"],
        );
        for rule in group.rules(direction) {
            let sources: Vec<String> = if rule.is_peer_scoped() {
                rule.peer_group_ids()
                    .map(|peer| format!("See {}", peer))
                    .collect()
            } else {
                rule.cidrs().map(str::to_string).collect()
            };
            table.rows.push(TableRow {
                cells: vec![
                    TableCell::lines(sources),
                    TableCell::text(PortRange::for_security_rule(rule).to_string()),
                ],
                color: None,
            });
        }
        table
    }

    /// `Rule | CIDR | Ports`, rule number coloured by its action
    pub fn for_network_acl(acl: &NetworkAcl, direction: RuleDirection) -> Self {
        let mut table = Self::new(
            format!("{} {}", acl.network_acl_id, direction.as_str()),
            &["Rule", "CIDR", "Ports"],
        );
        let egress = direction == RuleDirection::Egress;
        for entry in acl.entries.iter().filter(|e| e.egress == egress) {
            let action_color = if entry.is_allow() {
                ALLOW_COLOR
            } else {
                DENY_COLOR
            };
            table.rows.push(TableRow {
                cells: vec![
                    TableCell::text(entry.rule_number.to_string()).with_background(action_color),
                    TableCell::text(entry.cidr().unwrap_or_default()),
                    TableCell::text(PortRange::for_nacl_entry(entry).to_string()),
                ],
                color: None,
            });
        }
        table
    }

    /// `Source | Dest`, each row coloured by route state
    pub fn for_route_table(route_table: &RouteTable) -> Self {
        let mut table = Self::new(route_table.route_table_id.clone(), &["Source", "Dest"]);
        for route in &route_table.routes {
            let color = if route.is_active() {
                ALLOW_COLOR
            } else {
                DENY_COLOR
            };
            table.rows.push(TableRow {
                cells: vec![
                    TableCell::text(route.target().label()),
                    TableCell::text(route.destination().unwrap_or_default()),
                ],
                color: Some(color.to_string()),
            });
        }
        table
    }
}
