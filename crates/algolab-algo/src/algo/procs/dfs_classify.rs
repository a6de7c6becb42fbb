// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! algo.dfsClassify procedure implementation.

use crate::algo::Graph;
use crate::algo::algorithms::{Algorithm, DfsClassification, DfsClassificationConfig};
use crate::algo::procedure_template::{GenericAlgoProcedure, GraphAlgoAdapter};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use crate::algo::report::ClassificationReport;
use anyhow::Result;
use serde_json::{Value, json};

pub struct DfsClassifyAdapter;

impl GraphAlgoAdapter for DfsClassifyAdapter {
    const NAME: &'static str = "algo.dfsClassify";
    type Algo = DfsClassification;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![
            ("edgeId", ValueType::Int),
            ("from", ValueType::Int),
            ("to", ValueType::Int),
            ("kind", ValueType::String),
            ("cycleWitness", ValueType::Bool),
        ]
    }

    fn to_config(_args: &[Value], _graph: &Graph) -> Result<DfsClassificationConfig> {
        Ok(DfsClassificationConfig::default())
    }

    fn map_result(
        graph: &Graph,
        result: <Self::Algo as Algorithm>::Result,
    ) -> Result<Vec<AlgoResultRow>> {
        let report = ClassificationReport::build(graph, &result)?;
        let witness = report.cycle.map(|w| w.edge);

        Ok(report
            .lines
            .iter()
            .map(|line| AlgoResultRow {
                values: vec![
                    json!(line.edge.index()),
                    json!(line.from.as_u32()),
                    json!(line.to.as_u32()),
                    json!(line.kind.code()),
                    json!(Some(line.edge) == witness),
                ],
            })
            .collect())
    }
}

pub type DfsClassifyProcedure = GenericAlgoProcedure<DfsClassifyAdapter>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::procedures::{AlgoContext, AlgoProcedure};

    #[test]
    fn test_triangle_rows() {
        let proc = DfsClassifyProcedure::default();
        let rows = proc
            .execute(
                &AlgoContext::default(),
                vec![json!(3), json!([[1, 2], [2, 3], [3, 1]])],
            )
            .unwrap();

        let kinds: Vec<&str> = rows.iter().map(|r| r.values[3].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["TE", "TE", "BE"]);
        assert_eq!(rows[2].values[4], json!(true));
        assert_eq!(rows[0].values[4], json!(false));
    }

    #[test]
    fn test_directed_flag() {
        let proc = DfsClassifyProcedure::default();
        let rows = proc
            .execute(
                &AlgoContext::default(),
                vec![json!(3), json!([[1, 2], [2, 3], [1, 3]]), json!(true)],
            )
            .unwrap();
        assert_eq!(rows[2].values[3], json!("FE"));
    }

    #[test]
    fn test_invalid_edges() {
        let proc = DfsClassifyProcedure::default();
        let ctx = AlgoContext::default();
        assert!(
            proc.execute(&ctx, vec![json!(2), json!([[1, 3]])])
                .is_err()
        );
        assert!(
            proc.execute(&ctx, vec![json!(2), json!([[1]])])
                .is_err()
        );
    }
}
