// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Edge classification report.
//!
//! Renders one line per edge record in insertion order followed by the cycle
//! line when a back edge was found:
//!
//! ```text
//! Edge_12: TE
//! Edge_23: TE
//! Edge_31: BE
//! The cycle is created due to the edge 31.
//! ```

use crate::algo::Graph;
use crate::algo::algorithms::{CycleWitness, DfsClassificationResult, EdgeKind};
use algolab_common::{EdgeId, LabError, Result, VertexId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeReportLine {
    pub edge: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub lines: Vec<EdgeReportLine>,
    pub cycle: Option<CycleWitness>,
}

impl ClassificationReport {
    /// Pairs every edge record with its classification.
    ///
    /// Fails with `EdgeNotFound` if any record was left unclassified, which
    /// means `result` does not belong to `graph`.
    pub fn build(graph: &Graph, result: &DfsClassificationResult) -> Result<Self> {
        if result.edge_kinds.len() != graph.edge_count() {
            return Err(LabError::EdgeNotFound {
                edge: result.edge_kinds.len().min(graph.edge_count()),
            });
        }

        let lines = graph
            .edges()
            .map(|(id, edge)| {
                let kind = result
                    .kind(id)
                    .ok_or(LabError::EdgeNotFound { edge: id.index() })?;
                Ok(EdgeReportLine {
                    edge: id,
                    from: edge.from,
                    to: edge.to,
                    kind,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            lines,
            cycle: result.cycle_witness,
        })
    }

    pub fn count(&self, kind: EdgeKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

impl fmt::Display for EdgeReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge_{}{}: {}", self.from, self.to, self.kind)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if let Some(cycle) = &self.cycle {
            writeln!(
                f,
                "The cycle is created due to the edge {}{}.",
                cycle.from, cycle.to
            )?;
        }
        Ok(())
    }
}
