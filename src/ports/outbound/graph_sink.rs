use crate::network_mapping::services::RuleTable;

/// Ordered `key=value` attributes for a node, edge or cluster
///
/// Order is preserved so that two renders of the same registry produce
/// byte-identical documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    pub fn shape(self, shape: &str) -> Self {
        self.with("shape", shape)
    }

    pub fn style(self, style: &str) -> Self {
        self.with("style", style)
    }

    pub fn color(self, color: &str) -> Self {
        self.with("color", color)
    }

    pub fn fill_color(self, color: &str) -> Self {
        self.with("fillcolor", color)
    }

    pub fn weight(self, weight: u32) -> Self {
        self.with("weight", weight.to_string())
    }

    pub fn invisible(self) -> Self {
        self.style("invis")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// GraphSink port for emitting graph primitives
///
/// Renderers only ever talk to this trait; the concrete syntax (Graphviz
/// DOT, a recording used by tests, ...) belongs to the adapter.
pub trait GraphSink {
    /// Writes one node. `label` may contain `\n` line breaks.
    fn write_node(&mut self, id: &str, label: &str, attributes: &Attributes);

    fn write_edge(&mut self, from: &str, to: &str, attributes: &Attributes);

    /// Opens a visual group. Every call must be matched by [`close_cluster`](Self::close_cluster).
    fn open_cluster(&mut self, id: &str, label: Option<&str>, attributes: &Attributes);

    fn close_cluster(&mut self);

    /// Writes a verbatim line.
    fn write_raw(&mut self, text: &str);

    /// Writes a rule table as a single node named `id`.
    fn write_table(&mut self, id: &str, table: &RuleTable);

    /// Starts a same-rank group anchored on `anchor`.
    fn open_rank_group(&mut self, anchor: &str);

    fn write_rank_member(&mut self, id: &str);

    fn close_rank_group(&mut self);

    fn write_comment(&mut self, text: &str) {
        self.write_raw(&format!("// {}", text));
    }
}

/// A sink that owns the whole document and yields its text when done
pub trait GraphDocument: GraphSink {
    fn finish(self) -> String;
}
