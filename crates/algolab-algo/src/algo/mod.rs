// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Algorithm Engine
//!
//! Graph exercises run on [`Graph`], an adjacency list store over vertices
//! `1..=V`, through the [`algorithms::Algorithm`] trait. Sequence exercises
//! live in [`sequence`] as plain functions. Both are also reachable by name
//! through [`AlgorithmRegistry`] with JSON arguments.
//!
//! # Example
//!
//! ```
//! use algolab_algo::algo::algorithms::{Algorithm, DfsClassification};
//! use algolab_algo::{ClassificationReport, Graph, GraphMode};
//!
//! let graph = Graph::from_edges(3, GraphMode::Undirected, [(1, 2), (2, 3), (3, 1)])?;
//! let result = DfsClassification::run(&graph, Default::default())?;
//! let report = ClassificationReport::build(&graph, &result)?;
//! assert!(report.to_string().ends_with("The cycle is created due to the edge 31.\n"));
//! # Ok::<(), algolab_common::LabError>(())
//! ```

pub mod graph;
pub mod report;

pub mod algorithms;
pub mod procedure_template;
pub mod procedures;
pub mod procs;
pub mod sequence;

pub use graph::{Edge, Graph, GraphMode};
pub use report::{ClassificationReport, EdgeReportLine};

#[cfg(test)]
pub mod test_utils;

use std::collections::BTreeMap;
use std::sync::Arc;

/// Algorithm registry for procedure dispatch
pub struct AlgorithmRegistry {
    procedures: BTreeMap<String, Arc<dyn procedures::AlgoProcedure>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            procedures: BTreeMap::new(),
        };

        // Register built-in algorithms
        registry.register(procs::DfsClassifyProcedure::default());
        registry.register(procs::BfsProcedure::default());
        registry.register(procs::LcsProcedure);
        registry.register(procs::MaxSubarrayProcedure);
        registry.register(procs::PrefixSumProcedure);
        registry.register(procs::SuffixSumProcedure);

        registry
    }

    pub fn register<P: procedures::AlgoProcedure + 'static>(&mut self, proc: P) {
        self.procedures
            .insert(proc.name().to_string(), Arc::new(proc));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn procedures::AlgoProcedure>> {
        self.procedures.get(name).cloned()
    }

    /// Registered names in sorted order.
    pub fn list(&self) -> Vec<&str> {
        self.procedures.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::procedures::AlgoContext;
    use serde_json::json;

    #[test]
    fn test_registry_lists_builtins() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(
            registry.list(),
            vec![
                "algo.bfs",
                "algo.dfsClassify",
                "algo.lcs",
                "algo.maxSubarray",
                "algo.prefixSum",
                "algo.suffixSum"
            ]
        );
        assert!(registry.get("algo.pageRank").is_none());
    }

    #[test]
    fn test_registry_dispatch() {
        let registry = AlgorithmRegistry::new();
        let proc = registry.get("algo.lcs").unwrap();
        let rows = proc
            .execute(&AlgoContext::default(), vec![json!("AB"), json!("B")])
            .unwrap();
        assert_eq!(rows[0].values[0], json!(1));
    }
}
