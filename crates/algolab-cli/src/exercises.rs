// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! One handler per subcommand. Handlers read from a [`Console`] and write
//! the teaching output to `out`.

use crate::console::Console;
use crate::render;
use algolab_algo::algo::algorithms::{
    Algorithm, Bfs, BfsConfig, DfsClassification, DfsClassificationConfig,
};
use algolab_algo::algo::sequence::{
    BuildStep, PrefixSums, SuffixSums, kadane_trace, lcs, max_subarray,
};
use algolab_algo::{AlgoContext, AlgorithmRegistry, ClassificationReport, Graph, GraphMode};
use algolab_common::{LabConfig, LabError};
use anyhow::{Context, Result, anyhow};
use colored::*;
use serde_json::{Value, json};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub json: bool,
    pub trace: bool,
    pub config: LabConfig,
}

/// Reads `V E` and `E` pairs into a graph.
fn read_graph<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    mode: GraphMode,
    config: &LabConfig,
    prompts: (&str, &str),
) -> Result<Graph> {
    let vertices: usize = console.ask(out, prompts.0, "vertex count")?;
    let edges: usize = console.ask(out, prompts.1, "edge count")?;
    config.limits.check_edges(edges)?;

    let mut graph = Graph::with_limits(vertices, mode, config.limits)?;
    for i in 0..edges {
        let u: i64 = console.read("edge source")?;
        let v: i64 = console.read("edge target")?;
        graph
            .add_edge(u, v)
            .with_context(|| format!("edge {} of {}", i + 1, edges))?;
    }
    tracing::debug!(vertices, edges, ?mode, "Graph read");
    Ok(graph)
}

pub fn dfs<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    mode: GraphMode,
    opts: &RunOptions,
) -> Result<()> {
    let graph = read_graph(
        console,
        out,
        mode,
        &opts.config,
        ("Number of vertex: ", "Number of edges: "),
    )?;
    let result = DfsClassification::run(
        &graph,
        DfsClassificationConfig {
            record_events: opts.trace,
        },
    )?;
    let report = ClassificationReport::build(&graph, &result)?;

    if opts.json {
        let payload = json!({
            "mode": graph.mode(),
            "edges": report.lines,
            "cycle": report.cycle,
            "cyclePath": result.cycle_path(),
            "roots": result.roots,
            "discovery": result.discovery,
            "finish": result.finish,
            "events": result.events,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    if opts.trace {
        writeln!(out, "{}", "Traversal:".cyan().bold())?;
        for event in &result.events {
            writeln!(out, "{}", render::event_line(event))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Output:")?;
    write!(out, "{}", report)?;

    if opts.trace {
        writeln!(out)?;
        render::timestamps_table(&graph, &result).print(out)?;
        render::summary_table(&result).print(out)?;
        if let Some(path) = result.cycle_path() {
            let path: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            writeln!(out, "{} {}", "Cycle:".yellow(), path.join(" -> "))?;
        }
    }
    Ok(())
}

pub fn bfs<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    opts: &RunOptions,
) -> Result<()> {
    let graph = read_graph(
        console,
        out,
        GraphMode::Undirected,
        &opts.config,
        ("Number of Vertex: ", "Number of Edges: "),
    )?;
    let source: i64 = console.ask(out, "Source Vertex: ", "source vertex")?;
    let source = graph.vertex(source)?;

    let result = Bfs::run(&graph, BfsConfig { source })?;

    if opts.json {
        let distances: Vec<Value> = graph
            .vertices()
            .map(|v| json!({ "vertex": v, "distance": result.distance(v) }))
            .collect();
        let payload = json!({
            "source": source,
            "distances": distances,
            "order": result.order,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    writeln!(out, "Distances from source {}:", source)?;
    for v in graph.vertices() {
        let d = result.distance(v).map_or(-1, i64::from);
        writeln!(out, "Node {}: {}", v, d)?;
    }

    if opts.trace {
        let order: Vec<String> = result.order.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{} {}", "Visit order:".cyan(), order.join(" "))?;
        for v in graph.vertices().filter(|v| *v != source) {
            if let Some(path) = result.path_to(v) {
                let path: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                writeln!(out, "  path to {}: {}", v, path.join(" -> "))?;
            }
        }
    }
    Ok(())
}

pub fn lcs_cmd<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    x: Option<String>,
    y: Option<String>,
    opts: &RunOptions,
) -> Result<()> {
    let x = match x {
        Some(x) => x,
        None => console.ask_word(out, "X = ", "first string")?,
    };
    let y = match y {
        Some(y) => y,
        None => console.ask_word(out, "Y = ", "second string")?,
    };
    opts.config.limits.check_sequence_len(x.chars().count())?;
    opts.config.limits.check_sequence_len(y.chars().count())?;

    let result = lcs(&x, &y);

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(());
    }

    if opts.trace {
        render::lcs_table(&x, &y, &result).print(out)?;
    }
    writeln!(out, "Length of LCS: {}", result.length)?;
    writeln!(out, "LCS: {}", result.subsequence)?;
    Ok(())
}

/// Values from the command line, or `n` followed by `n` values from the console.
fn values_or_read<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    values: Vec<i64>,
    config: &LabConfig,
) -> Result<Vec<i64>> {
    let values = if values.is_empty() {
        let n: usize = console.ask(out, "Number of values: ", "value count")?;
        config.limits.check_values(n)?;
        if n > 0 {
            console.prompt(out, "Values: ")?;
        }
        console.read_many(n, "integer value")?
    } else {
        values
    };
    config.limits.check_values(values.len())?;
    Ok(values)
}

pub fn kadane<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    values: Vec<i64>,
    opts: &RunOptions,
) -> Result<()> {
    let values = values_or_read(console, out, values, &opts.config)?;
    let best =
        max_subarray(&values)?.ok_or_else(|| anyhow!("At least one value is required"))?;

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&best)?)?;
        return Ok(());
    }

    writeln!(out, "Original Array: {}", render::join(&values, " "))?;
    if opts.trace {
        writeln!(out, "{}", "Step-by-Step Simulation".cyan().bold())?;
        render::kadane_table(&kadane_trace(&values)?).print(out)?;
    }

    let slice = best.slice(&values);
    writeln!(out, "Maximum Subarray Sum: {}", best.sum)?;
    writeln!(out, "Subarray Indices: [{}, {}]", best.start, best.end)?;
    writeln!(out, "Maximum Subarray: [{}]", render::join(slice, ", "))?;
    if opts.trace {
        let total = slice
            .iter()
            .try_fold(0i64, |acc, &v| acc.checked_add(v))
            .ok_or(LabError::Overflow {
                what: "subarray verification",
            })?;
        writeln!(
            out,
            "Verification: {} = {}",
            render::join(slice, " + "),
            total
        )?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumDirection {
    Prefix,
    Suffix,
}

pub fn range_sums<R: BufRead>(
    console: &mut Console<R>,
    out: &mut dyn Write,
    direction: SumDirection,
    values: Vec<i64>,
    queries: Vec<(usize, usize)>,
    opts: &RunOptions,
) -> Result<()> {
    let values = values_or_read(console, out, values, &opts.config)?;

    let (name, sums, steps, answers) = match direction {
        SumDirection::Prefix => {
            let prefix = PrefixSums::new(&values)?;
            let answers = queries
                .iter()
                .map(|&(l, r)| prefix.range_sum(l, r))
                .collect::<algolab_common::Result<Vec<_>>>()?;
            ("prefix", prefix.sums().to_vec(), prefix.build_steps(), answers)
        }
        SumDirection::Suffix => {
            let suffix = SuffixSums::new(&values)?;
            let answers = queries
                .iter()
                .map(|&(l, r)| suffix.range_sum(l, r))
                .collect::<algolab_common::Result<Vec<_>>>()?;
            ("suffix", suffix.sums().to_vec(), suffix.build_steps(), answers)
        }
    };

    if opts.json {
        let queries: Vec<Value> = queries
            .iter()
            .zip(&answers)
            .map(|(&(l, r), sum)| json!({ "left": l, "right": r, "sum": sum }))
            .collect();
        let payload = json!({ "values": values, name: sums, "queries": queries });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    writeln!(out, "Original Array: {}", render::join(&values, " "))?;
    if opts.trace {
        writeln!(out, "{}", format!("Building {} sums", name).cyan().bold())?;
        for (i, step) in steps.iter().enumerate() {
            let prev = previous_index(direction, step);
            writeln!(
                out,
                "Step {}: {}",
                i + 1,
                render::build_step_line(name, step, prev)
            )?;
        }
    }
    let title = match direction {
        SumDirection::Prefix => "Prefix Sum Array",
        SumDirection::Suffix => "Suffix Sum Array",
    };
    writeln!(out, "{}: {}", title, render::join(&sums, " "))?;

    for (&(l, r), sum) in queries.iter().zip(&answers) {
        writeln!(out, "Sum from index {} to {}: {}", l, r, sum)?;
    }
    Ok(())
}

fn previous_index(direction: SumDirection, step: &BuildStep) -> Option<usize> {
    step.previous?;
    match direction {
        SumDirection::Prefix => step.index.checked_sub(1),
        SumDirection::Suffix => Some(step.index + 1),
    }
}

pub fn list_procedures(registry: &AlgorithmRegistry, out: &mut dyn Write) -> Result<()> {
    for name in registry.list() {
        if let Some(proc) = registry.get(name) {
            writeln!(out, "{}", proc.signature().describe(name))?;
        }
    }
    Ok(())
}

pub fn call(
    registry: &AlgorithmRegistry,
    out: &mut dyn Write,
    name: &str,
    args: &str,
    opts: &RunOptions,
) -> Result<()> {
    let proc = registry
        .get(name)
        .ok_or_else(|| anyhow!("Unknown procedure '{}'. Try `algolab procedures`", name))?;
    let args: Value = serde_json::from_str(args).context("Arguments must be a JSON array")?;
    let args = match args {
        Value::Array(args) => args,
        other => return Err(anyhow!("Arguments must be a JSON array, got {}", other)),
    };

    let ctx = AlgoContext::new(opts.config.clone());
    let rows = proc.execute(&ctx, args)?;

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    let columns: Vec<&str> = proc
        .signature()
        .yields
        .iter()
        .map(|(n, _)| *n)
        .collect();
    render::rows_table(&columns, &rows).print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), false)
    }

    fn plain() -> RunOptions {
        colored::control::set_override(false);
        RunOptions::default()
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dfs_triangle() {
        let mut c = console("3 3\n1 2\n2 3\n3 1\n");
        let text = output(|out| dfs(&mut c, out, GraphMode::Undirected, &plain()));
        assert_eq!(
            text,
            "Output:\nEdge_12: TE\nEdge_23: TE\nEdge_31: BE\nThe cycle is created due to the edge 31.\n"
        );
    }

    #[test]
    fn test_dfs_rejects_out_of_range_edge() {
        let mut c = console("2 1\n1 5\n");
        let mut out = Vec::new();
        let err = dfs(&mut c, &mut out, GraphMode::Undirected, &plain()).unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_dfs_rejects_truncated_input() {
        let mut c = console("3 2\n1 2\n");
        let mut out = Vec::new();
        assert!(dfs(&mut c, &mut out, GraphMode::Directed, &plain()).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_dfs_json() {
        let mut c = console("2 1\n1 2\n");
        let opts = RunOptions {
            json: true,
            ..plain()
        };
        let text = output(|out| dfs(&mut c, out, GraphMode::Directed, &opts));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mode"], json!("directed"));
        assert_eq!(value["edges"][0]["kind"], json!("TE"));
        assert_eq!(value["cycle"], Value::Null);
        assert_eq!(value["finish"], json!([4, 3]));
    }

    #[test]
    fn test_bfs_prints_unreachable_as_minus_one() {
        let mut c = console("4 2\n1 2\n2 3\n1\n");
        let text = output(|out| bfs(&mut c, out, &plain()));
        assert_eq!(
            text,
            "Distances from source 1:\nNode 1: 0\nNode 2: 1\nNode 3: 2\nNode 4: -1\n"
        );
    }

    #[test]
    fn test_bfs_prompts_go_to_output_when_interactive() {
        let mut c = Console::new(Cursor::new(b"2 1\n1 2\n2\n".to_vec()), true);
        let text = output(|out| bfs(&mut c, out, &plain()));
        assert_eq!(
            text,
            "Number of Vertex: Number of Edges: Source Vertex: \
             Distances from source 2:\nNode 1: 1\nNode 2: 0\n"
        );
    }

    #[test]
    fn test_lcs_reads_words_when_missing() {
        let mut c = console("ABCBDAB\nBDCABA\n");
        let text = output(|out| lcs_cmd(&mut c, out, None, None, &plain()));
        assert_eq!(text, "Length of LCS: 4\nLCS: BDAB\n");
    }

    #[test]
    fn test_kadane_output() {
        let mut c = console("");
        let values = vec![-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let text = output(|out| kadane(&mut c, out, values, &plain()));
        assert!(text.contains("Maximum Subarray Sum: 6\n"));
        assert!(text.contains("Subarray Indices: [3, 6]\n"));
        assert!(text.contains("Maximum Subarray: [4, -1, 2, 1]\n"));
    }

    #[test]
    fn test_kadane_reads_values_from_console() {
        let mut c = console("5\n-5 -2 -8 -1 -4\n");
        let text = output(|out| kadane(&mut c, out, Vec::new(), &plain()));
        assert!(text.contains("Maximum Subarray Sum: -1\n"));
    }

    #[test]
    fn test_suffix_sums_with_trace() {
        let mut c = console("");
        let opts = RunOptions {
            trace: true,
            ..plain()
        };
        let text = output(|out| {
            range_sums(
                &mut c,
                out,
                SumDirection::Suffix,
                vec![2, 4, 6, 8, 10],
                vec![(0, 2), (2, 4)],
                &opts,
            )
        });
        assert!(text.contains("Step 1: suffix[4] = arr[4] = 10\n"));
        assert!(text.contains("Step 2: suffix[3] = suffix[4] + arr[3] = 10 + 8 = 18\n"));
        assert!(text.contains("Suffix Sum Array: 30 28 24 18 10\n"));
        assert!(text.contains("Sum from index 0 to 2: 12\n"));
        assert!(text.contains("Sum from index 2 to 4: 24\n"));
    }

    #[test]
    fn test_sums_beyond_i64_are_errors() {
        let mut c = console("");
        let mut out = Vec::new();
        for direction in [SumDirection::Prefix, SumDirection::Suffix] {
            let err = range_sums(
                &mut c,
                &mut out,
                direction,
                vec![i64::MAX, 1],
                Vec::new(),
                &plain(),
            )
            .unwrap_err();
            assert!(format!("{:#}", err).contains("overflow"));
        }

        let opts = RunOptions {
            trace: true,
            ..plain()
        };
        assert!(kadane(&mut c, &mut out, vec![i64::MAX, i64::MAX], &opts).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_kadane_verification_at_i64_max() {
        let mut c = console("");
        let opts = RunOptions {
            trace: true,
            ..plain()
        };
        let text = output(|out| kadane(&mut c, out, vec![i64::MAX - 1, -1, 2], &opts));
        assert!(text.contains(&format!("Maximum Subarray Sum: {}\n", i64::MAX)));
        assert!(text.contains(&format!("= {}\n", i64::MAX)));
    }

    #[test]
    fn test_prefix_sums_invalid_query() {
        let mut c = console("");
        let mut out = Vec::new();
        let result = range_sums(
            &mut c,
            &mut out,
            SumDirection::Prefix,
            vec![1, 2],
            vec![(1, 2)],
            &plain(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_call_procedure() {
        let registry = AlgorithmRegistry::new();
        let opts = RunOptions {
            json: true,
            ..plain()
        };
        let text = output(|out| call(&registry, out, "algo.lcs", r#"["AB", "B"]"#, &opts));
        let rows: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(rows, json!([[1, "B"]]));

        let mut out = Vec::new();
        assert!(call(&registry, &mut out, "algo.nope", "[]", &opts).is_err());
        assert!(call(&registry, &mut out, "algo.lcs", r#"{"x": 1}"#, &opts).is_err());
    }

    #[test]
    fn test_list_procedures() {
        let text = output(|out| list_procedures(&AlgorithmRegistry::new(), out));
        assert!(text.contains("algo.bfs(vertexCount :: Int, edges :: List, source :: Int"));
        assert_eq!(text.lines().count(), 6);
    }
}
