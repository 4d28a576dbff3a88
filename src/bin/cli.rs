use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use maxflow::graph;
use maxflow::io;
use maxflow::run_context::RunContext;

/// Computes the maximum flow of a binary edge list and writes a report.
///
/// The source is the lowest-numbered vertex that only sends, the sink the
/// lowest-numbered vertex that only receives.
#[derive(Parser)]
#[command(name = "cli")]
#[command(author, version, about, long_about = None)]
struct RunConfig {
    /// Binary edge list: i16 vertex count followed by (from, to, capacity) triples
    input: PathBuf,

    /// Where to write the report
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Report format
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Also write the flow as a Graphviz digraph
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Suppress log output
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum ReportFormat {
    /// `Max Flow from <src> to <sink>: <value>` followed by one line per edge
    #[default]
    Text,
    /// JSON object with the flow value and the flow-carrying edges
    Json,
}

fn main() {
    let config = match RunConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if config.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !config.quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    if let Err(e) = run(&config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let context = RunContext::new(&config.input);
    let edges = io::read_edges_binary(context.input())
        .with_context(|| format!("Error loading edges from file \"{}\"", config.input.display()))?;
    context.log_message(&format!(
        "Read {} edges over {} vertices",
        edges.edge_count(),
        edges.vertex_count()
    ));

    let report = graph::max_flow(&edges).map_err(|e| {
        let message = if e.is_topology_error() {
            "Could not infer source and sink"
        } else {
            "Failed to compute the maximum flow"
        };
        anyhow::Error::new(e).context(message)
    })?;
    context.log_message(&format!(
        "Found flow {} from {} to {} over {} edges",
        report.value,
        report.source,
        report.sink,
        report.edges.len()
    ));

    // A failed run must not leave a report behind.
    if let Some(dotfile) = &config.dot {
        fs::write(dotfile, report.to_dot())
            .with_context(|| format!("Failed to write \"{}\"", dotfile.display()))?;
        context.log_message(&format!("Wrote dotfile {}", dotfile.display()));
    }

    let written = match config.format {
        ReportFormat::Text => io::write_report(&report, &config.output).map_err(anyhow::Error::new),
        ReportFormat::Json => fs::write(&config.output, report.to_json().pretty(2))
            .with_context(|| format!("Failed to write \"{}\"", config.output.display())),
    };
    if let Err(e) = written {
        if let Some(dotfile) = &config.dot {
            let _ = fs::remove_file(dotfile);
        }
        return Err(e);
    }
    context.log_message(&format!("Wrote report {}", config.output.display()));
    Ok(())
}
