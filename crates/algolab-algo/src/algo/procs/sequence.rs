// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! algo.lcs, algo.maxSubarray, algo.prefixSum and algo.suffixSum procedures.

use crate::algo::procedures::{
    AlgoContext, AlgoProcedure, AlgoResultRow, ProcedureSignature, ValueType, int_list_arg,
    usize_arg,
};
use crate::algo::sequence::{PrefixSums, SuffixSums, lcs, max_subarray};
use anyhow::{Result, anyhow};
use serde_json::{Value, json};

pub struct LcsProcedure;

impl AlgoProcedure for LcsProcedure {
    fn name(&self) -> &str {
        "algo.lcs"
    }

    fn signature(&self) -> ProcedureSignature {
        ProcedureSignature {
            args: vec![("x", ValueType::String), ("y", ValueType::String)],
            optional_args: Vec::new(),
            yields: vec![("length", ValueType::Int), ("lcs", ValueType::String)],
        }
    }

    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let args = self.signature().validate_args(args)?;
        let x = args[0].as_str().unwrap_or_default();
        let y = args[1].as_str().unwrap_or_default();
        ctx.config.limits.check_sequence_len(x.chars().count())?;
        ctx.config.limits.check_sequence_len(y.chars().count())?;

        let result = lcs(x, y);
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.length), json!(result.subsequence)],
        }])
    }
}

pub struct MaxSubarrayProcedure;

impl AlgoProcedure for MaxSubarrayProcedure {
    fn name(&self) -> &str {
        "algo.maxSubarray"
    }

    fn signature(&self) -> ProcedureSignature {
        ProcedureSignature {
            args: vec![("values", ValueType::List)],
            optional_args: Vec::new(),
            yields: vec![
                ("sum", ValueType::Int),
                ("start", ValueType::Int),
                ("end", ValueType::Int),
            ],
        }
    }

    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let args = self.signature().validate_args(args)?;
        let values = int_list_arg(&args, 0, "values")?;
        ctx.config.limits.check_values(values.len())?;

        let best = max_subarray(&values)?.ok_or_else(|| anyhow!("Argument 'values' is empty"))?;
        Ok(vec![AlgoResultRow {
            values: vec![json!(best.sum), json!(best.start), json!(best.end)],
        }])
    }
}

fn range_signature() -> ProcedureSignature {
    ProcedureSignature {
        args: vec![
            ("values", ValueType::List),
            ("left", ValueType::Int),
            ("right", ValueType::Int),
        ],
        optional_args: Vec::new(),
        yields: vec![("sum", ValueType::Int)],
    }
}

fn range_args(ctx: &AlgoContext, args: Vec<Value>) -> Result<(Vec<i64>, usize, usize)> {
    let args = range_signature().validate_args(args)?;
    let values = int_list_arg(&args, 0, "values")?;
    ctx.config.limits.check_values(values.len())?;
    Ok((
        values,
        usize_arg(&args, 1, "left")?,
        usize_arg(&args, 2, "right")?,
    ))
}

pub struct PrefixSumProcedure;

impl AlgoProcedure for PrefixSumProcedure {
    fn name(&self) -> &str {
        "algo.prefixSum"
    }

    fn signature(&self) -> ProcedureSignature {
        range_signature()
    }

    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let (values, left, right) = range_args(ctx, args)?;
        let sum = PrefixSums::new(&values)?.range_sum(left, right)?;
        Ok(vec![AlgoResultRow {
            values: vec![json!(sum)],
        }])
    }
}

pub struct SuffixSumProcedure;

impl AlgoProcedure for SuffixSumProcedure {
    fn name(&self) -> &str {
        "algo.suffixSum"
    }

    fn signature(&self) -> ProcedureSignature {
        range_signature()
    }

    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let (values, left, right) = range_args(ctx, args)?;
        let sum = SuffixSums::new(&values)?.range_sum(left, right)?;
        Ok(vec![AlgoResultRow {
            values: vec![json!(sum)],
        }])
    }
}
