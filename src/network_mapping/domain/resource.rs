use super::cidr::CidrBlock;
use super::records::{
    Database, Instance, InternetGateway, LoadBalancer, NetworkAcl, NetworkInterface, RouteTable,
    SecurityGroup, Subnet, Volume, Vpc,
};
use super::registry::ResourceRegistry;
use super::scope::ScopeFilter;
use super::tags::Tags;
use std::fmt;
use std::net::IpAddr;

/// Every resource kind the mapper understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Network,
    InternetGateway,
    NetworkInterface,
    Instance,
    Subnet,
    Volume,
    RouteTable,
    SecurityGroup,
    NetworkAcl,
    Database,
    LoadBalancer,
}

impl ResourceKind {
    /// Acquisition order
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Network,
        ResourceKind::InternetGateway,
        ResourceKind::NetworkInterface,
        ResourceKind::Instance,
        ResourceKind::Subnet,
        ResourceKind::Volume,
        ResourceKind::RouteTable,
        ResourceKind::SecurityGroup,
        ResourceKind::NetworkAcl,
        ResourceKind::Database,
        ResourceKind::LoadBalancer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Network => "Network",
            ResourceKind::InternetGateway => "InternetGateway",
            ResourceKind::NetworkInterface => "NetworkInterface",
            ResourceKind::Instance => "Instance",
            ResourceKind::Subnet => "Subnet",
            ResourceKind::Volume => "Volume",
            ResourceKind::RouteTable => "RouteTable",
            ResourceKind::SecurityGroup => "SecurityGroup",
            ResourceKind::NetworkAcl => "NetworkAcl",
            ResourceKind::Database => "Database",
            ResourceKind::LoadBalancer => "LoadBalancer",
        }
    }

    /// Name used for the invisible rank anchor (`rank_<name>`)
    pub fn rank_name(&self) -> &'static str {
        match self {
            ResourceKind::Network => "VPC",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cloud object. The set of variants is closed: every capability below
/// is an exhaustive match, so a new kind cannot silently fall back to a default.
#[derive(Debug, Clone)]
pub enum Resource {
    Network(Vpc),
    Subnet(Subnet),
    Instance(Instance),
    Volume(Volume),
    SecurityGroup(SecurityGroup),
    NetworkInterface(NetworkInterface),
    RouteTable(RouteTable),
    NetworkAcl(NetworkAcl),
    InternetGateway(InternetGateway),
    LoadBalancer(LoadBalancer),
    Database(Database),
}

/// `None` filter matches everything; otherwise the affiliation must be present and equal.
fn matches_filter(filter: Option<&str>, value: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}

impl Resource {
    /// Decodes one provider record of the given kind.
    pub fn decode(kind: ResourceKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            ResourceKind::Network => Resource::Network(serde_json::from_value(value)?),
            ResourceKind::Subnet => Resource::Subnet(serde_json::from_value(value)?),
            ResourceKind::Instance => Resource::Instance(serde_json::from_value(value)?),
            ResourceKind::Volume => Resource::Volume(serde_json::from_value(value)?),
            ResourceKind::SecurityGroup => {
                Resource::SecurityGroup(serde_json::from_value(value)?)
            }
            ResourceKind::NetworkInterface => {
                Resource::NetworkInterface(serde_json::from_value(value)?)
            }
            ResourceKind::RouteTable => Resource::RouteTable(serde_json::from_value(value)?),
            ResourceKind::NetworkAcl => Resource::NetworkAcl(serde_json::from_value(value)?),
            ResourceKind::InternetGateway => {
                Resource::InternetGateway(serde_json::from_value(value)?)
            }
            ResourceKind::LoadBalancer => Resource::LoadBalancer(serde_json::from_value(value)?),
            ResourceKind::Database => Resource::Database(serde_json::from_value(value)?),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Resource::Network(r) => &r.vpc_id,
            Resource::Subnet(r) => &r.subnet_id,
            Resource::Instance(r) => &r.instance_id,
            Resource::Volume(r) => &r.volume_id,
            Resource::SecurityGroup(r) => &r.group_id,
            Resource::NetworkInterface(r) => &r.network_interface_id,
            Resource::RouteTable(r) => &r.route_table_id,
            Resource::NetworkAcl(r) => &r.network_acl_id,
            Resource::InternetGateway(r) => &r.internet_gateway_id,
            Resource::LoadBalancer(r) => &r.load_balancer_name,
            Resource::Database(r) => &r.db_instance_identifier,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Network(_) => ResourceKind::Network,
            Resource::Subnet(_) => ResourceKind::Subnet,
            Resource::Instance(_) => ResourceKind::Instance,
            Resource::Volume(_) => ResourceKind::Volume,
            Resource::SecurityGroup(_) => ResourceKind::SecurityGroup,
            Resource::NetworkInterface(_) => ResourceKind::NetworkInterface,
            Resource::RouteTable(_) => ResourceKind::RouteTable,
            Resource::NetworkAcl(_) => ResourceKind::NetworkAcl,
            Resource::InternetGateway(_) => ResourceKind::InternetGateway,
            Resource::LoadBalancer(_) => ResourceKind::LoadBalancer,
            Resource::Database(_) => ResourceKind::Database,
        }
    }

    /// Load balancers and databases carry no tags in their describe output.
    pub fn tags(&self) -> Option<&Tags> {
        match self {
            Resource::Network(r) => Some(&r.tags),
            Resource::Subnet(r) => Some(&r.tags),
            Resource::Instance(r) => Some(&r.tags),
            Resource::Volume(r) => Some(&r.tags),
            Resource::SecurityGroup(r) => Some(&r.tags),
            Resource::NetworkInterface(r) => Some(&r.tag_set),
            Resource::RouteTable(r) => Some(&r.tags),
            Resource::NetworkAcl(r) => Some(&r.tags),
            Resource::InternetGateway(r) => Some(&r.tags),
            Resource::LoadBalancer(_) | Resource::Database(_) => None,
        }
    }

    pub fn name_tag(&self) -> Option<&str> {
        self.tags().and_then(Tags::name)
    }

    /// The single network this resource is directly affiliated with.
    /// Internet gateways may span several networks and report none here.
    pub fn network_id(&self) -> Option<&str> {
        match self {
            Resource::Network(r) => Some(&r.vpc_id),
            Resource::Subnet(r) => r.vpc_id.as_deref(),
            Resource::Instance(r) => r.vpc_id.as_deref(),
            Resource::SecurityGroup(r) => r.vpc_id.as_deref(),
            Resource::NetworkInterface(r) => r.vpc_id.as_deref(),
            Resource::RouteTable(r) => r.vpc_id.as_deref(),
            Resource::NetworkAcl(r) => r.vpc_id.as_deref(),
            Resource::LoadBalancer(r) => r.vpc_id.as_deref(),
            Resource::Database(r) => r.network_id(),
            Resource::Volume(_) | Resource::InternetGateway(_) => None,
        }
    }

    pub fn in_network(&self, network: Option<&str>) -> bool {
        let Some(wanted) = network else {
            return true;
        };
        match self {
            Resource::InternetGateway(r) => r.attached_networks().any(|id| id == wanted),
            Resource::Volume(_) => false,
            Resource::Network(_)
            | Resource::Subnet(_)
            | Resource::Instance(_)
            | Resource::SecurityGroup(_)
            | Resource::NetworkInterface(_)
            | Resource::RouteTable(_)
            | Resource::NetworkAcl(_)
            | Resource::LoadBalancer(_)
            | Resource::Database(_) => self.network_id() == Some(wanted),
        }
    }

    /// Container kinds answer through the registry; a subnet id that does not
    /// resolve never matches.
    pub fn in_subnet(&self, subnet: Option<&str>, registry: &ResourceRegistry) -> bool {
        let Some(wanted) = subnet else {
            return true;
        };
        match self {
            Resource::Network(r) => registry
                .get(wanted)
                .is_some_and(|s| s.in_network(Some(&r.vpc_id))),
            Resource::Subnet(r) => r.subnet_id == wanted,
            Resource::Instance(r) => matches_filter(subnet, r.subnet_id.as_deref()),
            Resource::NetworkInterface(r) => matches_filter(subnet, r.subnet_id.as_deref()),
            Resource::RouteTable(r) => r.is_associated_with(wanted),
            Resource::NetworkAcl(r) => r.is_associated_with(wanted),
            Resource::LoadBalancer(r) => r.subnets.iter().any(|s| s == wanted),
            Resource::Database(r) => r.subnets().iter().any(|s| s.subnet_identifier == wanted),
            Resource::SecurityGroup(r) => match r.vpc_id.as_deref() {
                Some(vpc) => registry
                    .get(wanted)
                    .is_some_and(|s| s.in_network(Some(vpc))),
                None => false,
            },
            Resource::InternetGateway(r) => r.attached_networks().any(|vpc| {
                registry
                    .get(vpc)
                    .is_some_and(|network| network.in_subnet(subnet, registry))
            }),
            Resource::Volume(_) => false,
        }
    }

    pub fn is_member_of_instance(&self, instance_id: &str) -> bool {
        match self {
            Resource::Volume(r) => r.is_attached_to(instance_id),
            Resource::NetworkInterface(r) => r.attached_instance() == Some(instance_id),
            Resource::Network(_)
            | Resource::Subnet(_)
            | Resource::Instance(_)
            | Resource::SecurityGroup(_)
            | Resource::RouteTable(_)
            | Resource::NetworkAcl(_)
            | Resource::InternetGateway(_)
            | Resource::LoadBalancer(_)
            | Resource::Database(_) => false,
        }
    }

    pub fn is_relevant_to_address(&self, ip: IpAddr) -> bool {
        match self {
            Resource::Network(r) => r
                .cidr_block
                .as_deref()
                .is_some_and(|cidr| CidrBlock::text_contains(cidr, ip)),
            Resource::Subnet(r) => r
                .cidr_block
                .as_deref()
                .is_some_and(|cidr| CidrBlock::text_contains(cidr, ip)),
            Resource::RouteTable(r) => r
                .routes
                .iter()
                .filter_map(|route| route.destination())
                .any(|cidr| CidrBlock::text_contains(cidr, ip)),
            Resource::NetworkAcl(r) => r
                .entries
                .iter()
                .filter_map(|entry| entry.cidr())
                .any(|cidr| CidrBlock::text_contains(cidr, ip)),
            Resource::SecurityGroup(r) => r
                .all_rules()
                .flat_map(|rule| rule.cidrs())
                .any(|cidr| CidrBlock::text_contains(cidr, ip)),
            Resource::Instance(_)
            | Resource::Volume(_)
            | Resource::NetworkInterface(_)
            | Resource::InternetGateway(_)
            | Resource::LoadBalancer(_)
            | Resource::Database(_) => false,
        }
    }

    pub fn is_visible(&self, scope: &ScopeFilter, registry: &ResourceRegistry) -> bool {
        self.in_network(scope.network()) && self.in_subnet(scope.subnet(), registry)
    }

    pub fn as_network(&self) -> Option<&Vpc> {
        match self {
            Resource::Network(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_subnet(&self) -> Option<&Subnet> {
        match self {
            Resource::Subnet(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Resource::Instance(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_security_group(&self) -> Option<&SecurityGroup> {
        match self {
            Resource::SecurityGroup(r) => Some(r),
            _ => None,
        }
    }
}
