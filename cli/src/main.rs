//! Altair CLI binary
//!
//! Runs health-check orchestrations locally over a relationships JSON
//! file and prints the resulting table, report JSON, or graph SVG.

use altair_core::report::format_table;
use clap::{Parser, Subcommand};
use cli::{run_check, write_graph_svg, CheckOptions, CliError};
use schema::Status;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "altair")]
#[command(about = "Concurrent dependency-graph health checks")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe every component of a relationships file once
    Check {
        /// Relationships JSON file (parent -> [children])
        #[arg(long)]
        input: PathBuf,
        /// Fixed RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Simulated failure rate override (0.0..=1.0)
        #[arg(long)]
        failure_rate: Option<f64>,
        /// Base simulated latency override, in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
        /// Write the rendered dependency graph SVG to this path
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Print the full report as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Errors go to stderr via tracing; keep stdout for report output
    altair_core::utils::init_tracing("warn").ok();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{} ({})", e, e.code());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> cli::Result<()> {
    match cli.command {
        Commands::Check {
            input,
            seed,
            failure_rate,
            latency_ms,
            graph,
            json,
        } => {
            let opts = CheckOptions {
                input,
                seed,
                failure_rate,
                latency_ms,
                render_graph: graph.is_some(),
            };
            let report = run_check(&opts).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report).map_err(
                    |e| CliError::InputError(format!("Failed to encode report: {}", e)),
                )?);
            } else {
                println!("{}", format_table(&report.component_details));
                match report.system_status {
                    Status::Up => println!("System status: UP"),
                    Status::Down => println!(
                        "System status: DOWN ({} failed)",
                        report.failed_components.len()
                    ),
                }
            }

            if let Some(path) = graph {
                if write_graph_svg(&report, &path)? {
                    println!("Graph written to {}", path.display());
                } else {
                    println!("No graph image produced (empty graph)");
                }
            }

            Ok(())
        }
    }
}
