//! Graphviz DOT writer.
//!
//! Produces a document that can be rendered with Graphviz:
//!   cloud-netmap --vpc vpc-0abc | dot -Tpng -o network.png
//!   cloud-netmap --secmap i-0abc -o blast.dot && dot -Tsvg blast.dot -o blast.svg

use crate::network_mapping::services::{RuleTable, TableCell};
use crate::ports::outbound::{Attributes, GraphDocument, GraphSink};

const INDENT: &str = "    ";

/// DotWriter adapter implementing the GraphSink port
pub struct DotWriter {
    out: String,
    depth: usize,
}

impl DotWriter {
    pub fn new() -> Self {
        let mut out = String::with_capacity(4096);
        out.push_str("digraph G {\n");
        out.push_str("    overlap=false\n");
        out.push_str("    ranksep=1.6\n");
        Self { out, depth: 1 }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn attribute_list(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn header_cell(text: &str) -> String {
    format!(
        "<td bgcolor=\"black\"><font color=\"white\">{}</font></td>",
        escape_html(text)
    )
}

fn body_cell(cell: &TableCell, row_color: Option<&str>) -> String {
    let content = cell
        .lines
        .iter()
        .map(|l| escape_html(l))
        .collect::<Vec<_>>()
        .join("<br/>");
    match cell.background.as_deref().or(row_color) {
        Some(color) => format!("<td bgcolor=\"{}\">{}</td>", escape_html(color), content),
        None => format!("<td>{}</td>", content),
    }
}

fn html_table(table: &RuleTable) -> String {
    let mut html = String::from("<table border=\"1\">");
    html.push_str(&format!(
        "<tr><td colspan=\"{}\"><b>{}</b></td></tr>",
        table.headers.len().max(1),
        escape_html(&table.title)
    ));
    html.push_str("<tr>");
    for header in &table.headers {
        html.push_str(&header_cell(header));
    }
    html.push_str("</tr>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str(&body_cell(cell, row.color.as_deref()));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

impl GraphSink for DotWriter {
    fn write_node(&mut self, id: &str, label: &str, attributes: &Attributes) {
        let mut attrs = format!("label={}", quote(label));
        if !attributes.is_empty() {
            attrs.push_str(", ");
            attrs.push_str(&attribute_list(attributes));
        }
        self.line(&format!("{} [{}];", quote(id), attrs));
    }

    fn write_edge(&mut self, from: &str, to: &str, attributes: &Attributes) {
        if attributes.is_empty() {
            self.line(&format!("{} -> {};", quote(from), quote(to)));
        } else {
            self.line(&format!(
                "{} -> {} [{}];",
                quote(from),
                quote(to),
                attribute_list(attributes)
            ));
        }
    }

    fn open_cluster(&mut self, id: &str, label: Option<&str>, attributes: &Attributes) {
        self.line(&format!("subgraph {} {{", quote(&format!("cluster_{}", id))));
        self.depth += 1;
        if let Some(label) = label {
            self.line(&format!("label={};", quote(label)));
        }
        for (key, value) in attributes.iter() {
            self.line(&format!("{}={};", key, quote(value)));
        }
    }

    fn close_cluster(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(1);
        self.line("}");
    }

    fn write_raw(&mut self, text: &str) {
        self.line(text);
    }

    fn write_table(&mut self, id: &str, table: &RuleTable) {
        self.line(&format!(
            "{} [shape=\"Mrecord\", label=<{}>];",
            quote(id),
            html_table(table)
        ));
    }

    fn open_rank_group(&mut self, anchor: &str) {
        self.line(&format!("{{ rank=same; {};", quote(anchor)));
        self.depth += 1;
    }

    fn write_rank_member(&mut self, id: &str) {
        self.line(&format!("{};", quote(id)));
    }

    fn close_rank_group(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(1);
        self.line("}");
    }
}

impl GraphDocument for DotWriter {
    fn finish(mut self) -> String {
        self.out.push_str("}\n");
        self.out
    }
}
