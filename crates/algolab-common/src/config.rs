// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::{LabError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bounds on the size of accepted input.
///
/// Containers are sized dynamically; these limits only exist so that a
/// typo such as `1000000000` vertices fails fast instead of allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum vertex count for graph exercises (default: 1M)
    pub max_vertices: usize,

    /// Maximum edge count for graph exercises (default: 10M)
    pub max_edges: usize,

    /// Maximum length of each LCS input string (default: 10k)
    pub max_sequence_len: usize,

    /// Maximum number of values for array exercises (default: 10M)
    pub max_values: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_vertices: 1_000_000,
            max_edges: 10_000_000,
            max_sequence_len: 10_000,
            max_values: 10_000_000,
        }
    }
}

impl InputLimits {
    pub fn check_vertices(&self, actual: usize) -> Result<()> {
        check("vertices", self.max_vertices, actual)
    }

    pub fn check_edges(&self, actual: usize) -> Result<()> {
        check("edges", self.max_edges, actual)
    }

    pub fn check_sequence_len(&self, actual: usize) -> Result<()> {
        check("sequence characters", self.max_sequence_len, actual)
    }

    pub fn check_values(&self, actual: usize) -> Result<()> {
        check("values", self.max_values, actual)
    }
}

fn check(what: &'static str, limit: usize, actual: usize) -> Result<()> {
    if actual > limit {
        return Err(LabError::LimitExceeded {
            what,
            limit,
            actual,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub limits: InputLimits,

    /// Print step-by-step traces for every exercise (default: false)
    pub trace: bool,
}

impl LabConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw).map_err(|e| LabError::InvalidArgument {
            arg: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
