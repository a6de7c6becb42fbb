// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use algolab_algo::algo::algorithms::{DfsClassificationResult, EdgeKind, TraversalEvent};
use algolab_algo::algo::sequence::{BuildStep, KadaneDecision, KadaneStep, LcsResult};
use algolab_algo::{AlgoResultRow, Graph};
use prettytable::{Cell, Row, Table};
use serde_json::Value;

fn header(names: &[&str]) -> Row {
    Row::new(names.iter().map(|n| Cell::new(n).style_spec("bf")).collect())
}

pub fn timestamps_table(graph: &Graph, result: &DfsClassificationResult) -> Table {
    let mut table = Table::new();
    table.add_row(header(&["Vertex", "Discovery", "Finish", "Parent"]));
    for v in graph.vertices() {
        let parent = result.parent[v.slot()].map_or("-".to_string(), |p| p.to_string());
        table.add_row(Row::new(vec![
            Cell::new(&v.to_string()),
            Cell::new(&result.discovery_time(v).to_string()),
            Cell::new(&result.finish_time(v).to_string()),
            Cell::new(&parent),
        ]));
    }
    table
}

pub fn summary_table(result: &DfsClassificationResult) -> Table {
    let mut table = Table::new();
    table.add_row(header(&["Kind", "Code", "Count"]));
    for kind in EdgeKind::ALL {
        table.add_row(Row::new(vec![
            Cell::new(kind.label()),
            Cell::new(kind.code()),
            Cell::new(&result.count(kind).to_string()),
        ]));
    }
    table
}

pub fn event_line(event: &TraversalEvent) -> String {
    match event {
        TraversalEvent::Discover { vertex, time } => {
            format!("t={:<3} discover {}", time, vertex)
        }
        TraversalEvent::Classify { from, to, kind, .. } => {
            format!("      edge {} -> {}: {} ({})", from, to, kind.code(), kind.label())
        }
        TraversalEvent::Finish { vertex, time } => {
            format!("t={:<3} finish   {}", time, vertex)
        }
    }
}

pub fn kadane_table(steps: &[KadaneStep]) -> Table {
    let mut table = Table::new();
    table.add_row(header(&["i", "arr[i]", "maxEndingHere", "maxSoFar"]));
    for step in steps {
        let here = match step.decision {
            KadaneDecision::StartFresh => format!("{} (start fresh)", step.max_ending_here),
            KadaneDecision::Extend => format!("{} (extend)", step.max_ending_here),
        };
        table.add_row(Row::new(vec![
            Cell::new(&step.index.to_string()),
            Cell::new(&step.value.to_string()),
            Cell::new(&here),
            Cell::new(&step.max_so_far.to_string()),
        ]));
    }
    table
}

/// Build steps as `name[i] = name[prev] + arr[i] = a + b = total`.
pub fn build_step_line(name: &str, step: &BuildStep, prev_index: Option<usize>) -> String {
    match (step.previous, prev_index) {
        (Some(previous), Some(p)) => format!(
            "{name}[{i}] = {name}[{p}] + arr[{i}] = {previous} + {value} = {total}",
            i = step.index,
            value = step.value,
            total = step.total,
        ),
        _ => format!(
            "{name}[{i}] = arr[{i}] = {total}",
            i = step.index,
            total = step.total
        ),
    }
}

pub fn lcs_table(x: &str, y: &str, result: &LcsResult) -> Table {
    let mut names = vec![String::new(), "∅".to_string()];
    names.extend(y.chars().map(String::from));

    let mut table = Table::new();
    table.add_row(Row::new(
        names.iter().map(|n| Cell::new(n).style_spec("bf")).collect(),
    ));

    let row_labels = std::iter::once("∅".to_string()).chain(x.chars().map(String::from));
    for (label, row) in row_labels.zip(&result.table) {
        let mut cells = vec![Cell::new(&label).style_spec("bf")];
        cells.extend(row.iter().map(|v| Cell::new(&v.to_string())));
        table.add_row(Row::new(cells));
    }
    table
}

pub fn rows_table(columns: &[&str], rows: &[AlgoResultRow]) -> Table {
    let mut table = Table::new();
    table.add_row(header(columns));
    for row in rows {
        table.add_row(Row::new(
            row.values
                .iter()
                .map(|v| match v {
                    Value::String(s) => Cell::new(s),
                    other => Cell::new(&other.to_string()),
                })
                .collect(),
        ));
    }
    table
}

pub fn join(values: &[i64], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
