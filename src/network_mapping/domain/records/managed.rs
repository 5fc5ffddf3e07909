//! Managed-service records: classic load balancers and database instances.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancer {
    pub load_balancer_name: String,
    #[serde(default, rename = "VPCId")]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub subnets: Vec<String>,
    #[serde(default)]
    pub instances: Vec<BackendInstance>,
    #[serde(default)]
    pub listener_descriptions: Vec<ListenerDescription>,
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default, rename = "DNSName")]
    pub dns_name: Option<String>,
}

impl LoadBalancer {
    pub fn instance_ids(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(|i| i.instance_id.as_str())
    }

    /// `443/HTTPS -> 8080/HTTP` per listener
    pub fn listener_summaries(&self) -> Vec<String> {
        self.listener_descriptions
            .iter()
            .map(|d| {
                let l = &d.listener;
                format!(
                    "{}/{} -> {}/{}",
                    l.load_balancer_port,
                    l.protocol,
                    l.instance_port,
                    l.instance_protocol.as_deref().unwrap_or(&l.protocol)
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackendInstance {
    pub instance_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListenerDescription {
    pub listener: Listener,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listener {
    pub load_balancer_port: u16,
    pub protocol: String,
    pub instance_port: u16,
    #[serde(default)]
    pub instance_protocol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Database {
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default, rename = "DBSubnetGroup")]
    pub db_subnet_group: Option<DbSubnetGroup>,
    #[serde(default)]
    pub vpc_security_groups: Vec<VpcSecurityGroupMembership>,
}

impl Database {
    pub fn network_id(&self) -> Option<&str> {
        self.db_subnet_group
            .as_ref()
            .and_then(|g| g.vpc_id.as_deref())
    }

    pub fn subnets(&self) -> &[DbSubnet] {
        self.db_subnet_group
            .as_ref()
            .map(|g| g.subnets.as_slice())
            .unwrap_or(&[])
    }

    pub fn security_group_ids(&self) -> impl Iterator<Item = &str> {
        self.vpc_security_groups
            .iter()
            .map(|m| m.vpc_security_group_id.as_str())
    }

    pub fn engine(&self) -> &str {
        self.engine.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbSubnetGroup {
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub subnets: Vec<DbSubnet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbSubnet {
    pub subnet_identifier: String,
    #[serde(default)]
    pub subnet_status: Option<String>,
}

impl DbSubnet {
    pub fn is_active(&self) -> bool {
        self.subnet_status.as_deref() == Some("Active")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSecurityGroupMembership {
    pub vpc_security_group_id: String,
    #[serde(default)]
    pub status: Option<String>,
}
