mod cli;
mod config;

use clap::error::ErrorKind;
use clap::Parser;
use cloud_netmap::adapters::outbound::console::StderrProgressReporter;
use cloud_netmap::adapters::outbound::graphviz::DotWriter;
use cloud_netmap::application::dto::{MapRequest, MapResponse};
use cloud_netmap::application::factories::{InventoryFactory, PresenterFactory, PresenterType};
use cloud_netmap::application::use_cases::{
    FindRelevantResourcesUseCase, GenerateMapUseCase, LoadInventoryUseCase,
};
use cloud_netmap::network_mapping::domain::{ResourceRegistry, ScopeFilter};
use cloud_netmap::network_mapping::services::TopologyOptions;
use cloud_netmap::shared::error::ExitCode;
use cloud_netmap::shared::Result;
use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // clap renders its own message (and help / version text)
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr: `warn` by default, `debug` with `-v`, `RUST_LOG` wins
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    // Load config file (explicit path or auto-discover)
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::merge(&args, config);
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let source = InventoryFactory::create(settings.inventory.clone());
    let progress_reporter = StderrProgressReporter::new();

    let registry = LoadInventoryUseCase::new(source, progress_reporter).execute()?;

    if let Some(address) = &args.relevant_to {
        return list_relevant(&registry, address);
    }

    let request = match &args.secmap {
        Some(instance_id) => MapRequest::security(instance_id.trim()),
        None => MapRequest::topology(
            ScopeFilter::new(settings.network.clone(), settings.subnet.clone()),
            TopologyOptions {
                draw_security_groups: settings.draw_security_groups,
            },
        )
        .iterate_by(args.iterate.map(Into::into)),
    };

    let use_case = GenerateMapUseCase::new(&registry, DotWriter::new);
    let response = use_case.execute(&request)?;

    present(&response, &settings)
}

fn list_relevant(registry: &ResourceRegistry, address: &str) -> Result<()> {
    let relevant = FindRelevantResourcesUseCase::new(registry).execute(address)?;
    if relevant.is_empty() {
        eprintln!("No resources cover {}", address.trim());
    }
    for resource in relevant {
        println!("{}", resource);
    }
    Ok(())
}

fn present(response: &MapResponse, settings: &Settings) -> Result<()> {
    if let Some(report) = &response.security_report {
        eprintln!(
            "🔐 {} reaches {} security group(s)",
            report.instance_id,
            report.security_groups.len()
        );
    }

    for artifact in &response.artifacts {
        let target =
            PresenterType::for_artifact(artifact, settings.output.as_deref(), &settings.output_dir);
        PresenterFactory::create(target).present(&artifact.content)?;
    }
    Ok(())
}
