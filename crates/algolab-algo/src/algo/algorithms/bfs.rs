// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Breadth-First Search shortest paths on an unweighted graph.
//!
//! Returns hop distance from the source to every vertex (`None` when
//! unreachable), the visit order, and BFS parents for path reconstruction.

use crate::algo::Graph;
use crate::algo::algorithms::Algorithm;
use algolab_common::{LabError, Result, VertexId};
use std::collections::VecDeque;
use tracing::{debug, instrument};

pub struct Bfs;

#[derive(Debug, Clone)]
pub struct BfsConfig {
    pub source: VertexId,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            source: VertexId::new(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BfsResult {
    pub source: VertexId,
    /// Hop distance per slot
    pub distances: Vec<Option<u32>>,
    /// BFS parent per slot
    pub parent: Vec<Option<VertexId>>,
    /// Vertices in dequeue order
    pub order: Vec<VertexId>,
}

impl BfsResult {
    pub fn distance(&self, vertex: VertexId) -> Option<u32> {
        self.distances.get(vertex.slot()).copied().flatten()
    }

    /// Shortest path from the source to `target`, inclusive.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut curr = target;
        while curr != self.source {
            curr = self.parent[curr.slot()]?;
            path.push(curr);
        }
        path.reverse();
        Some(path)
    }
}

impl Algorithm for Bfs {
    type Config = BfsConfig;
    type Result = BfsResult;

    fn name() -> &'static str {
        "bfs"
    }

    #[instrument(skip(graph), fields(vertices = graph.vertex_count()), level = "debug")]
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result> {
        let n = graph.vertex_count();
        let source = config.source;
        if source.slot() >= n {
            return Err(LabError::InvalidVertexIndex {
                vertex: source.as_u32() as i64,
                vertex_count: n,
            });
        }

        let mut distances = vec![None; n];
        let mut parent = vec![None; n];
        let mut order = Vec::with_capacity(n);
        let mut queue = VecDeque::new();

        distances[source.slot()] = Some(0);
        queue.push_back(source.slot() as u32);

        while let Some(curr) = queue.pop_front() {
            order.push(VertexId::from_slot(curr));
            let next = distances[curr as usize].map_or(0, |d: u32| d + 1);

            for entry in graph.neighbors(curr) {
                let w = entry.target as usize;
                if distances[w].is_none() {
                    distances[w] = Some(next);
                    parent[w] = Some(VertexId::from_slot(curr));
                    queue.push_back(entry.target);
                }
            }
        }

        debug!(reached = order.len(), "BFS complete");
        Ok(BfsResult {
            source,
            distances,
            parent,
            order,
        })
    }
}
