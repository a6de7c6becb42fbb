// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Adjacency list graph over vertices `1..=V`.
//!
//! Provides:
//! - O(1) amortised edge insertion with bounds validation
//! - O(degree) neighbour iteration in insertion order
//! - Edge records kept in insertion order for reporting
//!
//! Every adjacency entry carries the [`EdgeId`] of the record it was created
//! from, so a traversal always knows which record it is walking.

use algolab_common::{EdgeId, InputLimits, LabError, Result, VertexId};
use serde::Serialize;

/// How `add_edge` populates adjacency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// `u -> v` and `v -> u` adjacency, one edge record.
    #[default]
    Undirected,
    /// `u -> v` adjacency only.
    Directed,
}

/// Edge record as it was added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

/// Entry in a vertex's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjEntry {
    /// Neighbour slot (0-based)
    pub target: u32,
    /// Edge record this entry belongs to
    pub edge: EdgeId,
}

#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,
    /// Adjacency per slot, insertion order
    adjacency: Vec<Vec<AdjEntry>>,
    /// Edge records, insertion order
    edges: Vec<Edge>,
    limits: InputLimits,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices and default limits.
    pub fn new(vertex_count: usize, mode: GraphMode) -> Result<Self> {
        Self::with_limits(vertex_count, mode, InputLimits::default())
    }

    pub fn with_limits(vertex_count: usize, mode: GraphMode, limits: InputLimits) -> Result<Self> {
        limits.check_vertices(vertex_count)?;
        // Slots must fit in u32
        if vertex_count > u32::MAX as usize - 1 {
            return Err(LabError::LimitExceeded {
                what: "vertices",
                limit: u32::MAX as usize - 1,
                actual: vertex_count,
            });
        }
        Ok(Self {
            mode,
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            limits,
        })
    }

    /// Builds a graph from `(u, v)` pairs, stopping at the first invalid edge.
    pub fn from_edges<I>(vertex_count: usize, mode: GraphMode, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut graph = Self::new(vertex_count, mode)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Validates a raw vertex label against `[1, V]`.
    pub fn vertex(&self, raw: i64) -> Result<VertexId> {
        if raw < 1 || raw as u64 > self.adjacency.len() as u64 {
            return Err(LabError::InvalidVertexIndex {
                vertex: raw,
                vertex_count: self.adjacency.len(),
            });
        }
        Ok(VertexId::new(raw as u32))
    }

    /// Adds edge `u -> v` (and `v -> u` adjacency when undirected).
    ///
    /// The edge is rejected as a whole if either endpoint is out of range;
    /// the graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: i64, v: i64) -> Result<EdgeId> {
        let from = self.vertex(u)?;
        let to = self.vertex(v)?;
        self.limits.check_edges(self.edges.len() + 1)?;

        let edge = EdgeId::new(self.edges.len() as u32);
        self.edges.push(Edge { from, to });

        self.adjacency[from.slot()].push(AdjEntry {
            target: to.slot() as u32,
            edge,
        });
        if self.mode == GraphMode::Undirected {
            self.adjacency[to.slot()].push(AdjEntry {
                target: from.slot() as u32,
                edge,
            });
        }

        Ok(edge)
    }

    #[inline]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adjacency of a vertex (by slot), in insertion order.
    #[inline]
    pub fn neighbors(&self, slot: u32) -> &[AdjEntry] {
        &self.adjacency[slot as usize]
    }

    /// Edge records in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i as u32), e))
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.adjacency.len() as u32).map(VertexId::from_slot)
    }
}
