//! In-memory sink that records every primitive, for renderer tests.

use super::rule_table::RuleTable;
use crate::ports::outbound::{Attributes, GraphSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Node {
        id: String,
        label: String,
        attributes: Attributes,
    },
    Edge {
        from: String,
        to: String,
        attributes: Attributes,
    },
    OpenCluster {
        id: String,
        label: Option<String>,
    },
    CloseCluster,
    Raw(String),
    Table {
        id: String,
        table: RuleTable,
    },
    OpenRankGroup(String),
    RankMember(String),
    CloseRankGroup,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub primitives: Vec<Primitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Node { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn node_label(&self, id: &str) -> Option<&str> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Node { id: node, label, .. } if node == id => Some(label.as_str()),
            _ => None,
        })
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_label(id).is_some()
    }

    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Edge { from, to, .. } => Some((from.as_str(), to.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges().contains(&(from, to))
    }

    pub fn table_ids(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Table { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn table(&self, id: &str) -> Option<&RuleTable> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Table { id: table_id, table } if table_id == id => Some(table),
            _ => None,
        })
    }

    pub fn comments(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Raw(text) => text.strip_prefix("// "),
                _ => None,
            })
            .collect()
    }

    /// Index of the first primitive matching `pred`
    pub fn position(&self, pred: impl Fn(&Primitive) -> bool) -> Option<usize> {
        self.primitives.iter().position(pred)
    }

    pub fn node_position(&self, id: &str) -> Option<usize> {
        self.position(|p| matches!(p, Primitive::Node { id: node, .. } if node == id))
    }

    pub fn edge_position(&self, from: &str, to: &str) -> Option<usize> {
        self.position(
            |p| matches!(p, Primitive::Edge { from: f, to: t, .. } if f == from && t == to),
        )
    }

    /// Members of the rank group anchored on `anchor`
    pub fn rank_members(&self, anchor: &str) -> Vec<&str> {
        let mut members = Vec::new();
        let mut inside = false;
        for p in &self.primitives {
            match p {
                Primitive::OpenRankGroup(a) => inside = a == anchor,
                Primitive::RankMember(id) if inside => members.push(id.as_str()),
                Primitive::CloseRankGroup => inside = false,
                _ => {}
            }
        }
        members
    }

    /// Nodes written between the open and close of cluster `id`
    pub fn cluster_members(&self, id: &str) -> Vec<&str> {
        let mut members = Vec::new();
        let mut depth = 0usize;
        for p in &self.primitives {
            match p {
                Primitive::OpenCluster { id: cluster, .. } if depth == 0 && cluster == id => {
                    depth = 1
                }
                Primitive::OpenCluster { .. } if depth > 0 => depth += 1,
                Primitive::CloseCluster if depth > 0 => depth -= 1,
                Primitive::Node { id: node, .. } if depth > 0 => members.push(node.as_str()),
                Primitive::Table { id: table, .. } if depth > 0 => members.push(table.as_str()),
                _ => {}
            }
        }
        members
    }
}

impl GraphSink for RecordingSink {
    fn write_node(&mut self, id: &str, label: &str, attributes: &Attributes) {
        self.primitives.push(Primitive::Node {
            id: id.to_string(),
            label: label.to_string(),
            attributes: attributes.clone(),
        });
    }

    fn write_edge(&mut self, from: &str, to: &str, attributes: &Attributes) {
        self.primitives.push(Primitive::Edge {
            from: from.to_string(),
            to: to.to_string(),
            attributes: attributes.clone(),
        });
    }

    fn open_cluster(&mut self, id: &str, label: Option<&str>, _attributes: &Attributes) {
        self.primitives.push(Primitive::OpenCluster {
            id: id.to_string(),
            label: label.map(str::to_string),
        });
    }

    fn close_cluster(&mut self) {
        self.primitives.push(Primitive::CloseCluster);
    }

    fn write_raw(&mut self, text: &str) {
        self.primitives.push(Primitive::Raw(text.to_string()));
    }

    fn write_table(&mut self, id: &str, table: &RuleTable) {
        self.primitives.push(Primitive::Table {
            id: id.to_string(),
            table: table.clone(),
        });
    }

    fn open_rank_group(&mut self, anchor: &str) {
        self.primitives
            .push(Primitive::OpenRankGroup(anchor.to_string()));
    }

    fn write_rank_member(&mut self, id: &str) {
        self.primitives.push(Primitive::RankMember(id.to_string()));
    }

    fn close_rank_group(&mut self) {
        self.primitives.push(Primitive::CloseRankGroup);
    }
}
