// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use algolab_algo::{AlgorithmRegistry, GraphMode};
use algolab_common::LabConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod console;
pub mod exercises;
pub mod render;

use console::Console;
use exercises::{RunOptions, SumDirection};

#[derive(Parser)]
#[command(name = "algolab")]
#[command(about = "Graph and sequence algorithm exercises", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Show step-by-step traces and tables
    #[arg(long, global = true)]
    trace: bool,
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify DFS edges and report a cycle
    Dfs {
        /// Read input from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Treat edges as directed (u -> v only)
        #[arg(long)]
        directed: bool,
    },
    /// Shortest hop distances from a source vertex
    Bfs {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Longest common subsequence of two strings
    Lcs { x: Option<String>, y: Option<String> },
    /// Maximum subarray sum (Kadane)
    Kadane {
        /// Values; read from stdin when omitted
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Prefix sums and range queries
    PrefixSum {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Inclusive range `L:R`, may be repeated
        #[arg(long = "query", value_parser = parse_range)]
        queries: Vec<(usize, usize)>,
    },
    /// Suffix sums and range queries
    SuffixSum {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        #[arg(long = "query", value_parser = parse_range)]
        queries: Vec<(usize, usize)>,
    },
    /// List registered procedures
    Procedures,
    /// Call a procedure with JSON arguments
    Call {
        /// Procedure name (e.g. algo.dfsClassify)
        name: String,
        /// Arguments as a JSON array
        #[arg(default_value = "[]")]
        args: String,
    },
}

fn parse_range(s: &str) -> std::result::Result<(usize, usize), String> {
    let (left, right) = s
        .split_once(':')
        .ok_or_else(|| format!("expected L:R, got '{}'", s))?;
    let left = left.trim().parse().map_err(|e| format!("bad left bound: {}", e))?;
    let right = right
        .trim()
        .parse()
        .map_err(|e| format!("bad right bound: {}", e))?;
    Ok((left, right))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LabConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LabConfig::default(),
    };
    let opts = RunOptions {
        json: cli.json,
        trace: cli.trace || config.trace,
        config,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run(cli.command, &mut out, &opts);
    out.flush()?;
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

fn run(command: Commands, out: &mut dyn Write, opts: &RunOptions) -> Result<()> {
    match command {
        Commands::Dfs { input, directed } => {
            let mut console = Console::open(input.as_deref())?;
            let mode = if directed {
                GraphMode::Directed
            } else {
                GraphMode::Undirected
            };
            exercises::dfs(&mut console, out, mode, opts)
        }
        Commands::Bfs { input } => {
            let mut console = Console::open(input.as_deref())?;
            exercises::bfs(&mut console, out, opts)
        }
        Commands::Lcs { x, y } => {
            let mut console = Console::open(None)?;
            exercises::lcs_cmd(&mut console, out, x, y, opts)
        }
        Commands::Kadane { values } => {
            let mut console = Console::open(None)?;
            exercises::kadane(&mut console, out, values, opts)
        }
        Commands::PrefixSum { values, queries } => {
            let mut console = Console::open(None)?;
            exercises::range_sums(
                &mut console,
                out,
                SumDirection::Prefix,
                values,
                queries,
                opts,
            )
        }
        Commands::SuffixSum { values, queries } => {
            let mut console = Console::open(None)?;
            exercises::range_sums(
                &mut console,
                out,
                SumDirection::Suffix,
                values,
                queries,
                opts,
            )
        }
        Commands::Procedures => exercises::list_procedures(&AlgorithmRegistry::new(), out),
        Commands::Call { name, args } => {
            exercises::call(&AlgorithmRegistry::new(), out, &name, &args, opts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1:3"), Ok((1, 3)));
        assert_eq!(parse_range(" 0 : 4 "), Ok((0, 4)));
        assert!(parse_range("3").is_err());
        assert!(parse_range("a:2").is_err());
        assert!(parse_range("-1:2").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["algolab", "--json", "dfs", "--directed"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Dfs {
                directed: true,
                input: None
            }
        ));

        let cli = Cli::try_parse_from([
            "algolab",
            "prefix-sum",
            "3",
            "-1",
            "4",
            "--query",
            "0:2",
            "--query",
            "1:1",
        ])
        .unwrap();
        match cli.command {
            Commands::PrefixSum { values, queries } => {
                assert_eq!(values, vec![3, -1, 4]);
                assert_eq!(queries, vec![(0, 2), (1, 1)]);
            }
            _ => panic!("expected prefix-sum"),
        }
    }

    #[test]
    fn test_config_file_enables_trace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trace": true}}"#).unwrap();
        let config = LabConfig::from_file(file.path()).unwrap();
        assert!(config.trace);
    }
}
