// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Template for graph algorithm procedures to reduce boilerplate.
//!
//! Every graph procedure takes `vertexCount` and `edges` (a list of `[u, v]`
//! pairs) first, then its own arguments, and finally the optional `directed`
//! flag.

use crate::algo::algorithms::Algorithm;
use crate::algo::procedures::{
    AlgoContext, AlgoProcedure, AlgoResultRow, ProcedureSignature, ValueType, usize_arg,
};
use crate::algo::{Graph, GraphMode};
use anyhow::{Result, anyhow};
use serde_json::{Value, json};
use std::marker::PhantomData;

/// Adapter trait for specific graph algorithms.
pub trait GraphAlgoAdapter: Send + Sync + 'static {
    /// Name of the procedure (e.g., "algo.dfsClassify").
    const NAME: &'static str;

    /// The underlying algorithm.
    type Algo: Algorithm;

    /// Define algorithm-specific arguments (after vertexCount and edges).
    /// Returns: (name, type, default_value_if_optional)
    /// If default_value is None, it's required.
    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)>;

    /// Define output columns.
    fn yields() -> Vec<(&'static str, ValueType)>;

    /// Convert parsed specific arguments to Algorithm Config.
    /// `args` contains only the algorithm-specific arguments.
    fn to_config(args: &[Value], graph: &Graph) -> Result<<Self::Algo as Algorithm>::Config>;

    /// Convert algorithm result to output rows.
    fn map_result(
        graph: &Graph,
        result: <Self::Algo as Algorithm>::Result,
    ) -> Result<Vec<AlgoResultRow>>;

    /// Graph mode when the caller does not pass `directed`.
    fn default_mode() -> GraphMode {
        GraphMode::Undirected
    }
}

/// Generic implementation of `AlgoProcedure` for any `GraphAlgoAdapter`.
pub struct GenericAlgoProcedure<A: GraphAlgoAdapter> {
    _marker: PhantomData<A>,
}

impl<A: GraphAlgoAdapter> GenericAlgoProcedure<A> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A: GraphAlgoAdapter> Default for GenericAlgoProcedure<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: GraphAlgoAdapter> AlgoProcedure for GenericAlgoProcedure<A> {
    fn name(&self) -> &str {
        A::NAME
    }

    fn signature(&self) -> ProcedureSignature {
        let mut args = vec![("vertexCount", ValueType::Int), ("edges", ValueType::List)];
        let mut optional_args = Vec::new();

        for (name, ty, default) in A::specific_args() {
            if let Some(def) = default {
                optional_args.push((name, ty, def));
            } else {
                args.push((name, ty));
            }
        }
        optional_args.push((
            "directed",
            ValueType::Bool,
            json!(A::default_mode() == GraphMode::Directed),
        ));

        ProcedureSignature {
            args,
            optional_args,
            yields: A::yields(),
        }
    }

    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let signature = self.signature();
        let args = signature.validate_args(args)?;

        // Standard args (0 and 1), `directed` is always last
        let vertex_count = usize_arg(&args, 0, "vertexCount")?;
        let directed = args.last().and_then(Value::as_bool).unwrap_or(false);
        let mode = if directed {
            GraphMode::Directed
        } else {
            GraphMode::Undirected
        };

        let edges = args[1]
            .as_array()
            .ok_or_else(|| anyhow!("Argument 'edges' must be a list"))?;
        ctx.config.limits.check_edges(edges.len())?;

        // 1. Build graph
        let mut graph = Graph::with_limits(vertex_count, mode, ctx.config.limits)?;
        for (i, pair) in edges.iter().enumerate() {
            let (u, v) = edge_pair(pair)
                .ok_or_else(|| anyhow!("Edge {} must be a pair of integers, got {}", i, pair))?;
            graph.add_edge(u, v)?;
        }

        // 2. Run algorithm
        let specific_args = &args[2..args.len() - 1];
        let config = A::to_config(specific_args, &graph)?;
        let result = A::Algo::run(&graph, config)?;

        // 3. Map results
        A::map_result(&graph, result)
    }
}

fn edge_pair(value: &Value) -> Option<(i64, i64)> {
    match value.as_array()?.as_slice() {
        [u, v] => Some((u.as_i64()?, v.as_i64()?)),
        _ => None,
    }
}
