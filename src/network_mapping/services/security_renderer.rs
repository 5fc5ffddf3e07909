use super::connect_present;
use super::label::{wrap_words, DESCRIPTION_WIDTH};
use super::rule_table::RuleTable;
use crate::network_mapping::domain::records::{RuleDirection, SecurityGroup};
use crate::network_mapping::domain::{Resource, ResourceKind, ResourceRegistry};
use crate::ports::outbound::{Attributes, GraphSink};
use crate::shared::error::NetmapError;
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};

/// Fill colours handed out to security-group clusters in emission order
pub const PALETTE: [&str; 10] = [
    "azure",
    "coral",
    "wheat",
    "deepskyblue",
    "firebrick",
    "gold",
    "green",
    "plum",
    "salmon",
    "sienna",
];

const CLUSTER_BACKGROUND: &str = "grey90";

pub fn rules_table_id(group_id: &str, direction: RuleDirection) -> String {
    format!("{}_{}_rules", group_id, direction.as_str())
}

/// Discovery state for one security render.
///
/// Created per call and dropped with it; nothing is shared between renders.
#[derive(Debug, Default)]
pub struct SecurityViewState {
    queue: VecDeque<String>,
    queued: HashSet<String>,
    emitted: HashSet<String>,
    emission_order: Vec<String>,
    cluster_ordinal: usize,
}

impl SecurityViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a security group once, however many rules name it.
    pub fn enqueue(&mut self, group_id: &str) {
        if self.queued.insert(group_id.to_string()) {
            self.queue.push_back(group_id.to_string());
        }
    }

    fn next_queued(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn is_emitted(&self, id: &str) -> bool {
        self.emitted.contains(id)
    }

    /// Returns `false` when `id` was already emitted.
    fn mark_emitted(&mut self, id: &str) -> bool {
        if !self.emitted.insert(id.to_string()) {
            return false;
        }
        self.emission_order.push(id.to_string());
        true
    }

    fn next_color(&mut self) -> &'static str {
        let color = PALETTE[self.cluster_ordinal % PALETTE.len()];
        self.cluster_ordinal += 1;
        color
    }
}

/// Outcome of a security render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityReport {
    pub instance_id: String,
    /// Security groups drawn, in emission order
    pub security_groups: Vec<String>,
}

/// Draws the blast radius of one instance: its subnet, the route tables and
/// network ACLs of that subnet, databases sharing its security groups, and
/// every security group reachable through peer-scoped rules.
pub struct SecurityRenderer<'a> {
    registry: &'a ResourceRegistry,
}

impl<'a> SecurityRenderer<'a> {
    pub fn new(registry: &'a ResourceRegistry) -> Self {
        Self { registry }
    }

    pub fn render(&self, instance_id: &str, sink: &mut dyn GraphSink) -> Result<SecurityReport> {
        let registry = self.registry;
        let target = registry
            .get(instance_id)
            .ok_or_else(|| NetmapError::UnknownResource {
                id: instance_id.to_string(),
            })?;
        let instance = target
            .as_instance()
            .ok_or_else(|| NetmapError::NotAnInstance {
                id: instance_id.to_string(),
                kind: target.kind().to_string(),
            })?;

        let mut state = SecurityViewState::new();
        let seeds: HashSet<&str> = instance.security_group_ids().collect();
        for group in instance.security_group_ids() {
            state.enqueue(group);
        }

        target.emit_security_view(sink, registry, &mut state);

        if let Some(subnet_id) = instance.subnet_id.as_deref() {
            match registry.get(subnet_id) {
                Some(subnet) => subnet.emit_security_view(sink, registry, &mut state),
                None => tracing::debug!(instance_id, subnet_id, "instance subnet not in inventory"),
            }
            self.emit_subnet_controls(subnet_id, sink, &mut state);
        }

        for database in registry.of_kind(ResourceKind::Database) {
            let Resource::Database(record) = database else {
                continue;
            };
            let shared: Vec<&str> = record
                .security_group_ids()
                .filter(|group| seeds.contains(group))
                .collect();
            if shared.is_empty() {
                continue;
            }
            database.emit_security_view(sink, registry, &mut state);
            for group in shared {
                connect_present(sink, registry, database.id(), group);
            }
        }

        while let Some(group_id) = state.next_queued() {
            if state.is_emitted(&group_id) {
                continue;
            }
            match registry.get(&group_id) {
                Some(group) if group.kind() == ResourceKind::SecurityGroup => {
                    group.emit_security_view(sink, registry, &mut state);
                }
                Some(other) => {
                    tracing::debug!(id = %group_id, kind = %other.kind(), "referenced id is not a security group")
                }
                None => tracing::debug!(id = %group_id, "skipping unknown security group"),
            }
        }

        if let Some(network_id) = instance.vpc_id.as_deref() {
            match registry.get(network_id) {
                Some(network) => network.emit_security_view(sink, registry, &mut state),
                None => tracing::debug!(instance_id, network_id, "instance network not in inventory"),
            }
        }

        Ok(SecurityReport {
            instance_id: instance_id.to_string(),
            security_groups: state.emission_order,
        })
    }

    /// Route tables and network ACLs associated with the instance's subnet
    fn emit_subnet_controls(
        &self,
        subnet_id: &str,
        sink: &mut dyn GraphSink,
        state: &mut SecurityViewState,
    ) {
        for resource in self.registry.iter() {
            let associated = match resource {
                Resource::RouteTable(table) => table.is_associated_with(subnet_id),
                Resource::NetworkAcl(acl) => acl.is_associated_with(subnet_id),
                _ => false,
            };
            if associated {
                resource.emit_security_view(sink, self.registry, state);
                connect_present(sink, self.registry, resource.id(), subnet_id);
            }
        }
    }
}

fn emit_security_group(
    group: &SecurityGroup,
    sink: &mut dyn GraphSink,
    registry: &ResourceRegistry,
    state: &mut SecurityViewState,
) {
    let id = group.group_id.as_str();
    if !state.mark_emitted(id) {
        return;
    }
    let color = state.next_color();

    sink.write_comment(&format!("SG {}", id));
    sink.open_cluster(
        id,
        None,
        &Attributes::new().style("filled").color(CLUSTER_BACKGROUND),
    );
    let mut label = vec![id.to_string()];
    label.extend(wrap_words(group.description(), DESCRIPTION_WIDTH));
    sink.write_node(
        id,
        &label.join("\n"),
        &Attributes::new()
            .shape("rect")
            .style("filled")
            .fill_color(color),
    );
    let directions: Vec<RuleDirection> = RuleDirection::BOTH
        .into_iter()
        .filter(|d| !group.rules(*d).is_empty())
        .collect();
    for direction in &directions {
        sink.write_table(
            &rules_table_id(id, *direction),
            &RuleTable::for_security_group(group, *direction),
        );
    }
    sink.close_cluster();

    for direction in &directions {
        let table = rules_table_id(id, *direction);
        match direction {
            RuleDirection::Ingress => sink.write_edge(&table, id, &Attributes::new().weight(5)),
            RuleDirection::Egress => sink.write_edge(id, &table, &Attributes::new().weight(5)),
        }
    }

    for direction in &directions {
        let table = rules_table_id(id, *direction);
        let mut peers: Vec<&str> = Vec::new();
        for peer in group
            .rules(*direction)
            .iter()
            .flat_map(|rule| rule.peer_group_ids())
        {
            if !peers.contains(&peer) {
                peers.push(peer);
            }
        }
        for peer in peers {
            connect_present(sink, registry, &table, peer);
            state.enqueue(peer);
        }
    }
}

impl Resource {
    /// Writes this resource's part of the security view.
    pub fn emit_security_view(
        &self,
        sink: &mut dyn GraphSink,
        registry: &ResourceRegistry,
        state: &mut SecurityViewState,
    ) {
        match self {
            Resource::Instance(instance) => {
                let id = instance.instance_id.as_str();
                sink.write_comment(&format!("Instance {}", id));
                sink.write_node(
                    id,
                    &format!(
                        "{}\n{}\n{}",
                        instance.tags.name().unwrap_or_default(),
                        id,
                        instance.private_ip_address.as_deref().unwrap_or_default()
                    ),
                    &Attributes::new().shape("box"),
                );
                for group in instance.security_group_ids() {
                    connect_present(sink, registry, id, group);
                }
                if let Some(subnet) = instance.subnet_id.as_deref() {
                    connect_present(sink, registry, id, subnet);
                }
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
                    connect_present(sink, registry, &subnet.subnet_id, network);
                }
            }
            Resource::Network(network) => {
                sink.write_node(
                    &network.vpc_id,
                    &format!("VPC:{}", network.vpc_id),
                    &Attributes::new().shape("box"),
                );
            }
            Resource::RouteTable(table) => {
                sink.write_comment(&format!("RT {}", table.route_table_id));
                sink.write_table(&table.route_table_id, &RuleTable::for_route_table(table));
            }
            Resource::NetworkAcl(acl) => {
                let id = acl.network_acl_id.as_str();
                sink.write_comment(&format!("NACL {}", id));
                sink.write_node(id, id, &Attributes::new().shape("box"));
                let ingress = rules_table_id(id, RuleDirection::Ingress);
                sink.write_table(&ingress, &RuleTable::for_network_acl(acl, RuleDirection::Ingress));
                sink.write_edge(id, &ingress, &Attributes::new());
                let egress = rules_table_id(id, RuleDirection::Egress);
                sink.write_table(&egress, &RuleTable::for_network_acl(acl, RuleDirection::Egress));
                sink.write_edge(&egress, id, &Attributes::new());
            }
            Resource::Database(database) => {
                sink.write_node(
                    &database.db_instance_identifier,
                    &format!("DB: {}\n{}", database.db_instance_identifier, database.engine()),
                    &Attributes::new().shape("box"),
                );
            }
            Resource::SecurityGroup(group) => emit_security_group(group, sink, registry, state),
            Resource::Volume(_)
            | Resource::NetworkInterface(_)
            | Resource::InternetGateway(_)
            | Resource::LoadBalancer(_) => {
                sink.write_node(self.id(), self.id(), &Attributes::new().shape("box"));
            }
        }
    }
}
