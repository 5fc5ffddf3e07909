use super::connect_present;
use super::label::{join_lines, wrap_words, DESCRIPTION_WIDTH};
use super::rule_table::PortRange;
use crate::network_mapping::domain::records::{RouteTarget, RuleDirection, SecurityGroup};
use crate::network_mapping::domain::{Resource, ResourceKind, ResourceRegistry, ScopeFilter};
use crate::ports::outbound::{Attributes, GraphSink};

/// Kinds that get a same-rank group, top to bottom
const RANK_ORDER: [ResourceKind; 7] = [
    ResourceKind::Database,
    ResourceKind::LoadBalancer,
    ResourceKind::Subnet,
    ResourceKind::Instance,
    ResourceKind::Network,
    ResourceKind::InternetGateway,
    ResourceKind::RouteTable,
];

/// Order in which the invisible rank anchors are chained
const ANCHOR_CHAIN: [ResourceKind; 7] = [
    ResourceKind::RouteTable,
    ResourceKind::Subnet,
    ResourceKind::Database,
    ResourceKind::LoadBalancer,
    ResourceKind::Instance,
    ResourceKind::Network,
    ResourceKind::InternetGateway,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologyOptions {
    pub draw_security_groups: bool,
}

/// Everything a resource needs to draw itself in the topology view
pub struct TopologyContext<'a> {
    pub registry: &'a ResourceRegistry,
    pub scope: &'a ScopeFilter,
    pub options: TopologyOptions,
}

impl TopologyContext<'_> {
    fn connect(&self, sink: &mut dyn GraphSink, from: &str, to: &str) {
        connect_present(sink, self.registry, from, to);
    }

    /// Edge to `to` only when it resolves and sits in the filtered subnet
    fn connect_in_subnet(&self, sink: &mut dyn GraphSink, from: &str, to: &str) {
        match self.registry.get(to) {
            Some(target) if target.in_subnet(self.scope.subnet(), self.registry) => {
                sink.write_edge(from, to, &Attributes::new());
            }
            Some(_) => {}
            None => tracing::debug!(from, to, "skipping edge to unknown resource"),
        }
    }
}

pub fn rank_anchor(kind: ResourceKind) -> String {
    format!("rank_{}", kind.rank_name())
}

/// Draws the whole registry (or the part a scope filter selects)
pub struct TopologyRenderer<'a> {
    registry: &'a ResourceRegistry,
    options: TopologyOptions,
}

impl<'a> TopologyRenderer<'a> {
    pub fn new(registry: &'a ResourceRegistry, options: TopologyOptions) -> Self {
        Self { registry, options }
    }

    pub fn render(&self, scope: &ScopeFilter, sink: &mut dyn GraphSink) {
        let ctx = TopologyContext {
            registry: self.registry,
            scope,
            options: self.options,
        };

        for resource in self.registry.iter() {
            if resource.kind() == ResourceKind::SecurityGroup && !self.options.draw_security_groups
            {
                continue;
            }
            resource.emit_topology(sink, &ctx);
        }

        self.emit_ranks(sink, &ctx);
    }

    fn emit_ranks(&self, sink: &mut dyn GraphSink, ctx: &TopologyContext<'_>) {
        for kind in RANK_ORDER {
            let anchor = rank_anchor(kind);
            sink.write_comment(&format!("Rank {}", kind.rank_name()));
            sink.write_node(&anchor, "", &Attributes::new().invisible());
            sink.open_rank_group(&anchor);
            for resource in self.registry.of_kind(kind) {
                resource.emit_rank(sink, ctx);
            }
            sink.close_rank_group();
        }

        for pair in ANCHOR_CHAIN.windows(2) {
            sink.write_edge(
                &rank_anchor(pair[0]),
                &rank_anchor(pair[1]),
                &Attributes::new().invisible(),
            );
        }
    }
}

/// `Ingress: 0.0.0.0/0 22->22/tcp` style summary of the port-bearing rules
fn rule_summary(group: &SecurityGroup, direction: RuleDirection) -> String {
    group
        .rules(direction)
        .iter()
        .filter(|rule| PortRange::for_security_rule(rule) != PortRange::All)
        .map(|rule| {
            let from = rule.from_port.unwrap_or_default();
            format!(
                "{} {}->{}/{}",
                rule.cidrs().collect::<Vec<_>>().join(";"),
                from,
                rule.to_port.unwrap_or(from),
                rule.ip_protocol
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Resource {
    /// Writes this resource's part of the topology view; nothing when it
    /// falls outside the scope filter.
    pub fn emit_topology(&self, sink: &mut dyn GraphSink, ctx: &TopologyContext<'_>) {
        match self {
            Resource::Volume(volume) => {
                // Attached volumes are drawn inside their instance's cluster
                let attached = volume.attached_instances().any(|id| {
                    ctx.registry
                        .get(id)
                        .is_some_and(|r| r.kind() == ResourceKind::Instance)
                });
                if attached || !self.is_visible(ctx.scope, ctx.registry) {
                    return;
                }
                sink.write_node(
                    &volume.volume_id,
                    &format!("Unattached Volume:{}\n{} Gb", volume.volume_id, volume.size_label()),
                    &Attributes::new().shape("box"),
                );
                return;
            }
            Resource::NetworkInterface(_) => return,
            _ => {}
        }

        if !self.is_visible(ctx.scope, ctx.registry) {
            return;
        }

        match self {
            Resource::Network(network) => {
                sink.write_node(
                    &network.vpc_id,
                    &format!("VPC:{}", network.vpc_id),
                    &Attributes::new().shape("box"),
                );
            }
            Resource::Subnet(subnet) => {
                sink.write_comment(&format!("Subnet {}", subnet.subnet_id));
                sink.write_node(
                    &subnet.subnet_id,
                    &format!(
                        "{}\n{}",
                        subnet.subnet_id,
                        subnet.cidr_block.as_deref().unwrap_or_default()
                    ),
                    &Attributes::new().shape("box"),
                );
                if let Some(network) = subnet.vpc_id.as_deref() {
                    ctx.connect(sink, &subnet.subnet_id, network);
                }
            }
            Resource::Instance(instance) => {
                let id = instance.instance_id.as_str();
                sink.write_comment(&format!("Instance {}", id));
                sink.open_cluster(
                    id,
                    instance.tags.name(),
                    &Attributes::new().style("dotted"),
                );
                sink.write_node(id, id, &Attributes::new().shape("box"));

                let mut deferred = Vec::new();
                for member in ctx.registry.iter().filter(|r| r.is_member_of_instance(id)) {
                    sink.write_edge(id, member.id(), &Attributes::new());
                    deferred.extend(member.emit_instance_member(sink, ctx));
                }
                sink.close_cluster();

                if let Some(subnet) = instance.subnet_id.as_deref() {
                    ctx.connect(sink, id, subnet);
                }
                for (from, to) in &deferred {
                    ctx.connect(sink, from, to);
                }
                if ctx.options.draw_security_groups {
                    for group in instance.security_group_ids() {
                        ctx.connect(sink, id, group);
                    }
                }
            }
            Resource::SecurityGroup(group) => {
                let mut lines = vec![format!("SG: {}", group.group_id)];
                lines.extend(wrap_words(group.description(), DESCRIPTION_WIDTH));
                for direction in RuleDirection::BOTH {
                    let summary = rule_summary(group, direction);
                    if !summary.is_empty() {
                        let title = match direction {
                            RuleDirection::Ingress => "Ingress",
                            RuleDirection::Egress => "Egress",
                        };
                        lines.push(format!("{}: {}", title, summary));
                    }
                }
                sink.write_node(&group.group_id, &join_lines(&lines), &Attributes::new().shape("box"));
                for peer in group.peer_group_ids() {
                    ctx.connect(sink, &group.group_id, peer);
                }
            }
            Resource::RouteTable(table) => {
                let id = table.route_table_id.as_str();
                let destinations: Vec<&str> =
                    table.routes.iter().filter_map(|r| r.destination()).collect();
                sink.write_node(
                    id,
                    &format!("RT: {}\n{}", id, destinations.join(";")),
                    &Attributes::new().shape("box"),
                );
                for subnet in table.associated_subnets() {
                    ctx.connect_in_subnet(sink, id, subnet);
                }
                for route in &table.routes {
                    match route.target() {
                        RouteTarget::Instance(instance) => ctx.connect_in_subnet(sink, id, instance),
                        RouteTarget::NetworkInterface(nic) => ctx.connect(sink, id, nic),
                        RouteTarget::Gateway(gateway) => ctx.connect(sink, id, gateway),
                        RouteTarget::NatGateway(_) | RouteTarget::Unknown => {}
                    }
                }
            }
            Resource::NetworkAcl(acl) => {
                sink.write_comment(&format!("NACL {}", acl.network_acl_id));
            }
            Resource::InternetGateway(gateway) => {
                let networks: Vec<&str> = gateway
                    .attached_networks()
                    .filter(|network| ctx.scope.network().map_or(true, |n| n == *network))
                    .filter(|network| {
                        ctx.scope.subnet().is_none()
                            || ctx
                                .registry
                                .get(network)
                                .is_some_and(|r| r.in_subnet(ctx.scope.subnet(), ctx.registry))
                    })
                    .collect();
                if networks.is_empty() {
                    return;
                }
                sink.write_node(
                    &gateway.internet_gateway_id,
                    &format!("InternetGateway: {}", gateway.internet_gateway_id),
                    &Attributes::new().shape("box"),
                );
                for network in networks {
                    ctx.connect(sink, &gateway.internet_gateway_id, network);
                }
            }
            Resource::LoadBalancer(balancer) => {
                let name = balancer.load_balancer_name.as_str();
                let mut lines = vec![format!("ELB: {}", name)];
                lines.extend(balancer.listener_summaries());
                sink.write_node(name, &join_lines(&lines), &Attributes::new().shape("box"));
                for instance in balancer.instance_ids() {
                    ctx.connect_in_subnet(sink, name, instance);
                }
                for subnet in &balancer.subnets {
                    if ctx.scope.subnet().is_some_and(|wanted| wanted != subnet) {
                        continue;
                    }
                    ctx.connect(sink, name, subnet);
                }
                if ctx.options.draw_security_groups {
                    for group in &balancer.security_groups {
                        ctx.connect(sink, name, group);
                    }
                }
            }
            Resource::Database(database) => {
                let id = database.db_instance_identifier.as_str();
                sink.write_comment(&format!("Database {}", id));
                sink.write_node(
                    id,
                    &format!("DB: {}\n{}", id, database.engine()),
                    &Attributes::new().shape("box"),
                );
                for subnet in database.subnets().iter().filter(|s| s.is_active()) {
                    ctx.connect_in_subnet(sink, id, &subnet.subnet_identifier);
                }
                if ctx.options.draw_security_groups {
                    for group in database.security_group_ids() {
                        ctx.connect(sink, id, group);
                    }
                }
            }
            Resource::Volume(_) | Resource::NetworkInterface(_) => {}
        }
    }

    /// Draws an attached volume or interface inside its instance's cluster.
    /// Returns edges to write once the cluster is closed.
    fn emit_instance_member(
        &self,
        sink: &mut dyn GraphSink,
        ctx: &TopologyContext<'_>,
    ) -> Vec<(String, String)> {
        match self {
            Resource::Volume(volume) => {
                sink.write_node(
                    &volume.volume_id,
                    &format!("{}\n{} Gb", volume.volume_id, volume.size_label()),
                    &Attributes::new().shape("box"),
                );
                Vec::new()
            }
            Resource::NetworkInterface(nic) => {
                sink.write_node(
                    &nic.network_interface_id,
                    &format!(
                        "NIC: {}\n{}",
                        nic.network_interface_id,
                        nic.private_ip_address.as_deref().unwrap_or_default()
                    ),
                    &Attributes::new().shape("box"),
                );
                if !ctx.options.draw_security_groups {
                    return Vec::new();
                }
                nic.security_group_ids()
                    .map(|group| (nic.network_interface_id.clone(), group.to_string()))
                    .collect()
            }
            Resource::Network(_)
            | Resource::Subnet(_)
            | Resource::Instance(_)
            | Resource::SecurityGroup(_)
            | Resource::RouteTable(_)
            | Resource::NetworkAcl(_)
            | Resource::InternetGateway(_)
            | Resource::LoadBalancer(_)
            | Resource::Database(_) => Vec::new(),
        }
    }

    /// Adds this resource to the open rank group when it is visible.
    pub fn emit_rank(&self, sink: &mut dyn GraphSink, ctx: &TopologyContext<'_>) {
        match self {
            Resource::Network(_)
            | Resource::Subnet(_)
            | Resource::Instance(_)
            | Resource::RouteTable(_)
            | Resource::InternetGateway(_)
            | Resource::LoadBalancer(_)
            | Resource::Database(_) => {
                if self.is_visible(ctx.scope, ctx.registry) {
                    sink.write_rank_member(self.id());
                }
            }
            Resource::Volume(_)
            | Resource::SecurityGroup(_)
            | Resource::NetworkInterface(_)
            | Resource::NetworkAcl(_) => {}
        }
    }
}
