use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cloud_netmap::application::dto::IterateBy;

const NETWORK_PREFIX: &str = "vpc-";
const SUBNET_PREFIX: &str = "subnet-";

/// `--iterate` values as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IterateOver {
    Vpc,
    Subnet,
}

impl From<IterateOver> for IterateBy {
    fn from(value: IterateOver) -> Self {
        match value {
            IterateOver::Vpc => IterateBy::Network,
            IterateOver::Subnet => IterateBy::Subnet,
        }
    }
}

/// Draw a cloud network inventory as Graphviz diagrams
#[derive(Parser, Debug)]
#[command(name = "cloud-netmap")]
#[command(version)]
#[command(
    about = "Draw VPC topology and instance blast-radius diagrams in Graphviz DOT",
    long_about = None
)]
pub struct Args {
    /// Only draw resources in this VPC (the `vpc-` prefix may be omitted)
    #[arg(long, value_name = "ID")]
    pub vpc: Option<String>,

    /// Only draw resources in this subnet (the `subnet-` prefix may be omitted)
    #[arg(long, value_name = "ID")]
    pub subnet: Option<String>,

    /// Write one diagram per VPC or per subnet into --output-dir
    #[arg(long, value_enum, value_name = "KIND")]
    pub iterate: Option<IterateOver>,

    /// Draw security groups in the topology view
    #[arg(long)]
    pub security: bool,

    /// Draw the security view (blast radius) of one instance
    #[arg(long, value_name = "INSTANCE", conflicts_with = "iterate")]
    pub secmap: Option<String>,

    /// List resources whose address ranges cover this IP instead of drawing
    #[arg(long, value_name = "IP", conflicts_with_all = ["secmap", "iterate"])]
    pub relevant_to: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for --iterate output (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read saved describe-*.json documents from this directory instead of calling the aws CLI
    #[arg(long, value_name = "DIR")]
    pub inventory_dir: Option<PathBuf>,

    /// Extra flag passed to every aws call as --<FLAG>; can be repeated:
    /// --awsflag "profile prod" --awsflag "region eu-west-1"
    #[arg(long = "awsflag", value_name = "FLAG")]
    pub aws_flags: Vec<String>,

    /// Ignore cached aws responses and fetch fresh ones
    #[arg(long)]
    pub nocache: bool,

    /// Path to config file (default: auto-discover netmap.config.yml in the current directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// `--vpc` with the `vpc-` prefix added when missing
    pub fn network_id(&self) -> Option<String> {
        self.vpc.as_deref().map(|id| with_prefix(id, NETWORK_PREFIX))
    }

    /// `--subnet` with the `subnet-` prefix added when missing
    pub fn subnet_id(&self) -> Option<String> {
        self.subnet.as_deref().map(|id| with_prefix(id, SUBNET_PREFIX))
    }
}

fn with_prefix(id: &str, prefix: &str) -> String {
    let id = id.trim();
    if id.starts_with(prefix) {
        id.to_string()
    } else {
        format!("{}{}", prefix, id)
    }
}
