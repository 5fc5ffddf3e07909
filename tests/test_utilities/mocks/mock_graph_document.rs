use cloud_netmap::network_mapping::services::RuleTable;
use cloud_netmap::prelude::*;

/// One call made on the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Node(String),
    Edge(String, String),
    OpenCluster(String),
    CloseCluster,
    Raw(String),
    Table(String),
    OpenRankGroup(String),
    RankMember(String),
    CloseRankGroup,
}

/// Mock GraphDocument recording primitives; `finish` renders one per line
#[derive(Debug, Default)]
pub struct MockGraphDocument {
    pub primitives: Vec<Primitive>,
}

impl MockGraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Node(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.primitives
            .contains(&Primitive::Edge(from.to_string(), to.to_string()))
    }

    pub fn position(&self, primitive: &Primitive) -> Option<usize> {
        self.primitives.iter().position(|p| p == primitive)
    }
}

impl GraphSink for MockGraphDocument {
    fn write_node(&mut self, id: &str, _label: &str, _attributes: &Attributes) {
        self.primitives.push(Primitive::Node(id.to_string()));
    }

    fn write_edge(&mut self, from: &str, to: &str, _attributes: &Attributes) {
        self.primitives
            .push(Primitive::Edge(from.to_string(), to.to_string()));
    }

    fn open_cluster(&mut self, id: &str, _label: Option<&str>, _attributes: &Attributes) {
        self.primitives.push(Primitive::OpenCluster(id.to_string()));
    }

    fn close_cluster(&mut self) {
        self.primitives.push(Primitive::CloseCluster);
    }

    fn write_raw(&mut self, text: &str) {
        self.primitives.push(Primitive::Raw(text.to_string()));
    }

    fn write_table(&mut self, id: &str, _table: &RuleTable) {
        self.primitives.push(Primitive::Table(id.to_string()));
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

impl GraphDocument for MockGraphDocument {
    fn finish(self) -> String {
        self.primitives
            .iter()
            .map(|p| format!("{:?}", p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
