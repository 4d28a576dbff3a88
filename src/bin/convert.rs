use std::env;
use std::process;

use anyhow::{Context, Result};

use maxflow::io::{
    read_edges_binary, read_edges_csv, read_edges_json, write_edges_binary, write_edges_csv,
};

fn main() {
    let operation = env::args().nth(1).and_then(|op| {
        if matches!(
            op.as_str(),
            "--edges-csv-to-edges-bin" | "--edges-bin-to-edges-csv" | "--edges-json-to-edges-bin"
        ) {
            Some(op)
        } else {
            None
        }
    });
    let (Some(operation), 4) = (operation, env::args().len()) else {
        eprintln!("Usage: convert --edges-csv-to-edges-bin <edges.csv> <edges.dat>");
        eprintln!("Usage: convert --edges-bin-to-edges-csv <edges.dat> <edges.csv>");
        eprintln!("Usage: convert --edges-json-to-edges-bin <edges.json> <edges.dat>");
        process::exit(1);
    };

    let args: Vec<String> = env::args().collect();
    if let Err(e) = convert(&operation, &args[2], &args[3]) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn convert(operation: &str, input: &str, output: &str) -> Result<()> {
    let edges = match operation {
        "--edges-csv-to-edges-bin" => read_edges_csv(input),
        "--edges-bin-to-edges-csv" => read_edges_binary(input),
        "--edges-json-to-edges-bin" => read_edges_json(input),
        _ => unreachable!(),
    }
    .with_context(|| format!("Error loading edges from \"{input}\""))?;
    println!("Imported {} edges.", edges.edge_count());

    if operation.ends_with("-bin") {
        write_edges_binary(&edges, output)?;
    } else {
        write_edges_csv(&edges, output)?;
    }
    println!("Export done.");
    Ok(())
}
