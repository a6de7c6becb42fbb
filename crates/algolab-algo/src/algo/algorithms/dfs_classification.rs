// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! DFS Edge Classification.
//!
//! Iterative depth-first search over the whole forest (roots tried in
//! ascending vertex order) using an explicit stack and a per-vertex cursor
//! into its adjacency list. Each edge record is classified once, when it is
//! first walked:
//!
//! | target colour | kind |
//! |---|---|
//! | White | Tree |
//! | Gray | Back (cycle evidence) |
//! | Black, `d[u] < d[w]` | Forward |
//! | Black otherwise | Cross |
//!
//! In undirected graphs a record reached again from its other endpoint is
//! already classified and is skipped, so the edge back to a DFS parent is not
//! reported as a back edge.

use crate::algo::Graph;
use crate::algo::algorithms::Algorithm;
use crate::algo::graph::AdjEntry;
use algolab_common::{EdgeId, Result, VertexId};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, trace};

pub struct DfsClassification;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    #[serde(rename = "TE")]
    Tree,
    #[serde(rename = "BE")]
    Back,
    #[serde(rename = "FE")]
    Forward,
    #[serde(rename = "CE")]
    Cross,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::Tree,
        EdgeKind::Back,
        EdgeKind::Forward,
        EdgeKind::Cross,
    ];

    /// Two-letter report code.
    pub fn code(&self) -> &'static str {
        match self {
            EdgeKind::Tree => "TE",
            EdgeKind::Back => "BE",
            EdgeKind::Forward => "FE",
            EdgeKind::Cross => "CE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Tree => "Tree Edge",
            EdgeKind::Back => "Back Edge",
            EdgeKind::Forward => "Forward Edge",
            EdgeKind::Cross => "Cross Edge",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DfsClassificationConfig {
    /// Keep a log of discover / classify / finish steps.
    pub record_events: bool,
}

/// One observable step of the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    Discover {
        vertex: VertexId,
        time: u64,
    },
    Classify {
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
        kind: EdgeKind,
    },
    Finish {
        vertex: VertexId,
        time: u64,
    },
}

/// Back edge chosen as cycle evidence, in traversal direction
/// (descendant `from` to active ancestor `to`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CycleWitness {
    pub edge: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
}

#[derive(Debug, Clone)]
pub struct DfsClassificationResult {
    /// Discovery time per slot
    pub discovery: Vec<u64>,
    /// Finish time per slot
    pub finish: Vec<u64>,
    /// DFS parent per slot (None for roots)
    pub parent: Vec<Option<VertexId>>,
    /// Root of each DFS tree, in the order the trees were grown
    pub roots: Vec<VertexId>,
    /// Classification per edge record
    pub edge_kinds: Vec<Option<EdgeKind>>,
    /// First back edge found during traversal
    pub cycle_witness: Option<CycleWitness>,
    /// Step log, empty unless `record_events` was set
    pub events: Vec<TraversalEvent>,
}

impl DfsClassificationResult {
    pub fn kind(&self, edge: EdgeId) -> Option<EdgeKind> {
        self.edge_kinds.get(edge.index()).copied().flatten()
    }

    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edge_kinds
            .iter()
            .filter(|k| **k == Some(kind))
            .count()
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle_witness.is_some()
    }

    pub fn discovery_time(&self, vertex: VertexId) -> u64 {
        self.discovery[vertex.slot()]
    }

    pub fn finish_time(&self, vertex: VertexId) -> u64 {
        self.finish[vertex.slot()]
    }

    /// Number of trees in the DFS forest.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    /// Closed walk along tree edges closed by the witness back edge:
    /// `[ancestor, .., descendant, ancestor]`.
    pub fn cycle_path(&self) -> Option<Vec<VertexId>> {
        let witness = self.cycle_witness?;
        let mut path = vec![witness.from];
        let mut curr = witness.from;
        while curr != witness.to {
            curr = self.parent[curr.slot()]?;
            path.push(curr);
        }
        path.reverse();
        path.push(witness.to);
        Some(path)
    }
}

/// Per-run traversal state. Built fresh by every `run`.
struct TraversalState {
    color: Vec<Color>,
    discovery: Vec<u64>,
    finish: Vec<u64>,
    cursor: Vec<usize>,
    parent: Vec<Option<VertexId>>,
    stack: Vec<u32>,
    clock: u64,
}

impl TraversalState {
    fn new(n: usize) -> Self {
        Self {
            color: vec![Color::White; n],
            discovery: vec![0; n],
            finish: vec![0; n],
            cursor: vec![0; n],
            parent: vec![None; n],
            stack: Vec::new(),
            clock: 0,
        }
    }

    fn discover(&mut self, slot: u32, parent: Option<u32>) -> u64 {
        let s = slot as usize;
        self.clock += 1;
        self.color[s] = Color::Gray;
        self.discovery[s] = self.clock;
        self.cursor[s] = 0;
        self.parent[s] = parent.map(VertexId::from_slot);
        self.stack.push(slot);
        self.clock
    }

    fn finish_top(&mut self) -> Option<(u32, u64)> {
        let slot = self.stack.pop()?;
        self.clock += 1;
        self.color[slot as usize] = Color::Black;
        self.finish[slot as usize] = self.clock;
        Some((slot, self.clock))
    }

    fn classify(&self, u: u32, w: u32) -> EdgeKind {
        match self.color[w as usize] {
            Color::White => EdgeKind::Tree,
            Color::Gray => EdgeKind::Back,
            Color::Black if self.discovery[u as usize] < self.discovery[w as usize] => {
                EdgeKind::Forward
            }
            Color::Black => EdgeKind::Cross,
        }
    }
}

impl Algorithm for DfsClassification {
    type Config = DfsClassificationConfig;
    type Result = DfsClassificationResult;

    fn name() -> &'static str {
        "dfs_classification"
    }

    #[instrument(
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
        level = "debug"
    )]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result> {
        let n = graph.vertex_count();
        let mut state = TraversalState::new(n);
        let mut edge_kinds: Vec<Option<EdgeKind>> = vec![None; graph.edge_count()];
        let mut cycle_witness = None;
        let mut roots = Vec::new();
        let mut events = Vec::new();

        for root in 0..n as u32 {
            if state.color[root as usize] != Color::White {
                continue;
            }
            roots.push(VertexId::from_slot(root));
            let time = state.discover(root, None);
            if config.record_events {
                events.push(TraversalEvent::Discover {
                    vertex: VertexId::from_slot(root),
                    time,
                });
            }

            while let Some(&u) = state.stack.last() {
                let cursor = state.cursor[u as usize];

                let Some(&AdjEntry { target: w, edge }) = graph.neighbors(u).get(cursor) else {
                    if let Some((slot, time)) = state.finish_top()
                        && config.record_events
                    {
                        events.push(TraversalEvent::Finish {
                            vertex: VertexId::from_slot(slot),
                            time,
                        });
                    }
                    continue;
                };
                state.cursor[u as usize] += 1;

                // Reverse walk of an undirected record
                if edge_kinds[edge.index()].is_some() {
                    continue;
                }

                let kind = state.classify(u, w);
                edge_kinds[edge.index()] = Some(kind);
                trace!(from = u + 1, to = w + 1, %kind, "classified edge");
                if config.record_events {
                    events.push(TraversalEvent::Classify {
                        edge,
                        from: VertexId::from_slot(u),
                        to: VertexId::from_slot(w),
                        kind,
                    });
                }

                match kind {
                    EdgeKind::Tree => {
                        let time = state.discover(w, Some(u));
                        if config.record_events {
                            events.push(TraversalEvent::Discover {
                                vertex: VertexId::from_slot(w),
                                time,
                            });
                        }
                    }
                    EdgeKind::Back if cycle_witness.is_none() => {
                        cycle_witness = Some(CycleWitness {
                            edge,
                            from: VertexId::from_slot(u),
                            to: VertexId::from_slot(w),
                        });
                    }
                    _ => {}
                }
            }
        }

        let result = DfsClassificationResult {
            discovery: state.discovery,
            finish: state.finish,
            parent: state.parent,
            roots,
            edge_kinds,
            cycle_witness,
            events,
        };
        debug!(
            trees = result.tree_count(),
            back_edges = result.count(EdgeKind::Back),
            "DFS classification complete"
        );
        Ok(result)
    }
}
