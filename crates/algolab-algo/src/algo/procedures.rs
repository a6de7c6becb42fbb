// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Algorithm procedure interface.
//!
//! Procedures are registered with `AlgorithmRegistry` and invoked by name
//! with JSON arguments, e.g. `algo.lcs("ABCBDAB", "BDCABA")`.

use algolab_common::LabConfig;
use anyhow::{Result, anyhow};
use serde::Serialize;
use serde_json::Value;

/// Procedure signature for documentation and validation.
#[derive(Debug, Clone)]
pub struct ProcedureSignature {
    /// Required arguments: (name, type)
    pub args: Vec<(&'static str, ValueType)>,
    /// Optional arguments: (name, type, default)
    pub optional_args: Vec<(&'static str, ValueType, Value)>,
    /// Output columns: (name, type)
    pub yields: Vec<(&'static str, ValueType)>,
}

impl ProcedureSignature {
    /// Validate arguments against signature and fill defaults for optional args.
    pub fn validate_args(&self, mut args: Vec<Value>) -> Result<Vec<Value>> {
        let req_count = self.args.len();
        let total_count = req_count + self.optional_args.len();

        if args.len() < req_count {
            return Err(anyhow!(
                "Too few arguments. Expected at least {}, got {}",
                req_count,
                args.len()
            ));
        }

        if args.len() > total_count {
            return Err(anyhow!(
                "Too many arguments. Expected at most {}, got {}",
                total_count,
                args.len()
            ));
        }

        for (i, (name, ty)) in self.args.iter().enumerate() {
            if !ty.matches(&args[i]) {
                return Err(anyhow!(
                    "Invalid type for argument '{}'. Expected {:?}, got {}",
                    name,
                    ty,
                    args[i]
                ));
            }
        }

        for (i, (name, ty, default)) in self.optional_args.iter().enumerate() {
            let idx = req_count + i;
            if idx < args.len() {
                if !ty.matches(&args[idx]) {
                    return Err(anyhow!(
                        "Invalid type for optional argument '{}'. Expected {:?}, got {}",
                        name,
                        ty,
                        args[idx]
                    ));
                }
            } else {
                args.push(default.clone());
            }
        }

        Ok(args)
    }

    /// Human-readable form: `name(arg :: TYPE, [opt :: TYPE = default]) :: (col, ..)`.
    pub fn describe(&self, name: &str) -> String {
        let mut params: Vec<String> = self
            .args
            .iter()
            .map(|(n, ty)| format!("{} :: {:?}", n, ty))
            .collect();
        params.extend(
            self.optional_args
                .iter()
                .map(|(n, ty, d)| format!("[{} :: {:?} = {}]", n, ty, d)),
        );
        let yields: Vec<&str> = self.yields.iter().map(|(n, _)| *n).collect();
        format!("{}({}) :: ({})", name, params.join(", "), yields.join(", "))
    }
}

/// Value types for procedure signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    String,
    Bool,
    List,
    Any,
}

impl ValueType {
    pub fn matches(&self, val: &Value) -> bool {
        match self {
            ValueType::Int => val.is_i64() || val.is_u64(),
            ValueType::String => val.is_string(),
            ValueType::Bool => val.is_boolean(),
            ValueType::List => val.is_array(),
            ValueType::Any => true,
        }
    }
}

/// Result row from algorithm execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AlgoResultRow {
    /// Column values in order matching `yields`.
    pub values: Vec<Value>,
}

/// Trait for algorithm procedures.
pub trait AlgoProcedure: Send + Sync {
    /// Procedure name (e.g., "algo.dfsClassify").
    fn name(&self) -> &str;

    /// Procedure signature for validation and documentation.
    fn signature(&self) -> ProcedureSignature;

    /// Execute the procedure with given arguments.
    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>>;
}

/// Execution context for algorithm procedures.
#[derive(Debug, Clone, Default)]
pub struct AlgoContext {
    pub config: LabConfig,
}

impl AlgoContext {
    pub fn new(config: LabConfig) -> Self {
        Self { config }
    }
}

/// Reads an integer argument, rejecting negatives.
pub(crate) fn usize_arg(args: &[Value], idx: usize, name: &str) -> Result<usize> {
    args.get(idx)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .ok_or_else(|| anyhow!("Argument '{}' must be a non-negative integer", name))
}

/// Reads a list of integers.
pub(crate) fn int_list_arg(args: &[Value], idx: usize, name: &str) -> Result<Vec<i64>> {
    let list = args
        .get(idx)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Argument '{}' must be a list", name))?;
    list.iter()
        .map(|v| {
            v.as_i64()
                .ok_or_else(|| anyhow!("Argument '{}' must contain only integers, got {}", name, v))
        })
        .collect()
}
