// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! algo.bfs procedure implementation.

use crate::algo::Graph;
use crate::algo::algorithms::{Algorithm, Bfs, BfsConfig};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::{AlgoResultRow, ValueType, usize_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct BfsAdapter;

impl GraphAlgoAdapter for BfsAdapter {
    const NAME: &'static str = "algo.bfs";
    type Algo = Bfs;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![("source", ValueType::Int, None)]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("vertex", ValueType::Int), ("distance", ValueType::Int)]
    }

    fn to_config(args: &[Value], graph: &Graph) -> Result<BfsConfig> {
        let source = usize_arg(args, 0, "source")?;
        Ok(BfsConfig {
            source: graph.vertex(source as i64)?,
        })
    }

    fn map_result(
        graph: &Graph,
        result: <Self::Algo as Algorithm>::Result,
    ) -> Result<Vec<AlgoResultRow>> {
        Ok(graph
            .vertices()
            .map(|v| AlgoResultRow {
                values: vec![
                    json!(v.as_u32()),
                    result.distance(v).map_or(json!(-1), |d| json!(d)),
                ],
            })
            .collect())
    }
}

pub type BfsProcedure = GenericAlgoProcedure<BfsAdapter>;
