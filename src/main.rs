use std::io::Read;

use anyhow::Context;
use clap::Parser;
use essay_grader::{Analyzer, Hyperparameters, NoPrimitives};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "essay-grader",
    about = "Assess the writing quality of student essays",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Skip the built-in primitives and use regex tokenization only
    #[arg(long)]
    naive: bool,

    /// JSON file overriding scoring constants
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let hp = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<Hyperparameters>(&raw)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => Hyperparameters::default(),
    };
    let analyzer = if cli.naive {
        Analyzer::new(NoPrimitives).with_hyperparameters(hp)
    } else {
        Analyzer::heuristic(hp)
    };

    let print = |text: &str| -> anyhow::Result<()> {
        let report = analyzer.analyze(text);
        let json = if cli.compact {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        println!("{json}");
        Ok(())
    };

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        print(&input)?;
    } else {
        for path in &cli.files {
            let text =
                std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            print(&text)?;
        }
    }
    Ok(())
}
