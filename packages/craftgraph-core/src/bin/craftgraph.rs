//! Craftgraph CLI
//!
//! Resolves crafting paths against a generated dag snapshot.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a target by name (words are joined into one name)
//! cargo run --bin craftgraph -- resolve Molten Glass
//!
//! # Resolve against a specific snapshot, machine-readable output
//! cargo run --bin craftgraph -- resolve --dag out/crafting_dag.json --format json Mud
//!
//! # Snapshot statistics
//! cargo run --bin craftgraph -- stats --dag out/crafting_dag.json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use craftgraph_core::{
    load_dag, render_json, render_text, resolve_target, IndexBuilder, RecipeIndex, ResolveOutcome,
    ResolveReport,
};

#[derive(Parser)]
#[command(name = "craftgraph")]
#[command(about = "Crafting-path resolver over a precomputed dag snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the crafting tree for a named target
    Resolve {
        /// Target name; multiple words are joined with spaces
        target: Vec<String>,

        /// Snapshot file produced by the dag generator
        #[arg(long, default_value = "crafting_dag.json")]
        dag: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print snapshot statistics
    Stats {
        /// Snapshot file produced by the dag generator
        #[arg(long, default_value = "crafting_dag.json")]
        dag: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { target, dag, format } => {
            let target = if target.is_empty() {
                "George Clooney".to_string()
            } else {
                target.join(" ")
            };
            run_resolve(&target, &dag, format)?;
        }
        Commands::Stats { dag, format } => {
            run_stats(&dag, format)?;
        }
    }

    Ok(())
}

fn load_index_or_exit(dag_path: &Path) -> RecipeIndex {
    let dag = match load_dag(dag_path) {
        Ok(dag) => dag,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Run the dag generator to produce the snapshot, then retry.");
            std::process::exit(1);
        }
    };
    IndexBuilder::new().build(&dag)
}

fn run_resolve(
    target: &str,
    dag_path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = load_index_or_exit(dag_path);

    if format == OutputFormat::Text {
        println!("Finding crafting path for: {target}");
    }
    let report = resolve_target(&index, target);

    match format {
        OutputFormat::Text => print_resolve_text(target, &report),
        OutputFormat::Json => print_resolve_json(target, &report)?,
    }
    Ok(())
}

fn print_resolve_text(target: &str, report: &ResolveReport) {
    // Unknown names get no metrics block; there was nothing to build.
    if report.outcome == ResolveOutcome::NameNotFound {
        println!("Could not find a crafting path for '{target}': no element by that name.");
        return;
    }

    println!(
        "Crafting tree built in {:.3} seconds.",
        report.metrics.build_time_ms / 1000.0
    );
    if let Some(depth) = report.metrics.target_depth {
        println!("Target element depth: {depth}");
    }
    println!(
        "Recipe tree includes {} unique elements.",
        report.metrics.unique_nodes
    );

    match &report.outcome {
        ResolveOutcome::Resolved(tree) => {
            println!("\nCrafting Tree:");
            print!("{}", render_text(tree));
        }
        ResolveOutcome::NoPath { element } => {
            println!(
                "Could not find a crafting path for '{target}': element {element} cannot be reduced to basics."
            );
        }
        ResolveOutcome::CyclicRecipe { element } => {
            println!(
                "Could not find a crafting path for '{target}': recipe cycle detected at element {element}."
            );
        }
        ResolveOutcome::NameNotFound => unreachable!("handled above"),
    }
}

fn print_resolve_json(
    target: &str,
    report: &ResolveReport,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = serde_json::json!({
        "target": target,
        "outcome": report.outcome.label(),
        "metrics": report.metrics,
    });

    match &report.outcome {
        ResolveOutcome::Resolved(tree) => {
            output["tree"] = render_json(tree);
        }
        ResolveOutcome::NoPath { element } | ResolveOutcome::CyclicRecipe { element } => {
            output["element"] = serde_json::Value::from(element.as_ref());
        }
        ResolveOutcome::NameNotFound => {}
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_stats(dag_path: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let index = load_index_or_exit(dag_path);
    let stats = index.stats();

    match format {
        OutputFormat::Text => {
            println!("Crafting DAG statistics:");
            println!("  Elements:   {}", stats.total_elements);
            println!("  Basic:      {}", stats.basic_elements);
            println!("  Craftable:  {}", stats.craftable_results);
            println!("  Max depth:  {}", stats.max_depth);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
