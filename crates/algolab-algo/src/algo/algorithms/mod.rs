// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and graph algorithms.

use crate::algo::Graph;
use algolab_common::Result;

/// Core trait for all graph algorithms.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a graph.
    ///
    /// Every call owns fresh traversal state; nothing carries over between runs.
    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result>;
}

mod dfs_classification;
pub use dfs_classification::{
    Color, CycleWitness, DfsClassification, DfsClassificationConfig, DfsClassificationResult,
    EdgeKind, TraversalEvent,
};

mod bfs;
pub use bfs::{Bfs, BfsConfig, BfsResult};
