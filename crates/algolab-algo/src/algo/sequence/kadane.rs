// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Kadane's maximum subarray.
//!
//! At each index the running sum either extends the current subarray or
//! restarts at the current element: `here = max(v, here + v)`.

use algolab_common::{LabError, Result};
use serde::Serialize;
use std::fmt;

/// Maximum-sum contiguous range, inclusive indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxSubarray {
    pub sum: i64,
    pub start: usize,
    pub end: usize,
}

impl MaxSubarray {
    pub fn slice<'a>(&self, values: &'a [i64]) -> &'a [i64] {
        &values[self.start..=self.end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KadaneDecision {
    Extend,
    StartFresh,
}

impl fmt::Display for KadaneDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KadaneDecision::Extend => f.write_str("extend"),
            KadaneDecision::StartFresh => f.write_str("start fresh"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KadaneStep {
    pub index: usize,
    pub value: i64,
    pub decision: KadaneDecision,
    pub max_ending_here: i64,
    pub max_so_far: i64,
}

/// Maximum subarray sum, `None` for empty input.
pub fn max_subarray_sum(values: &[i64]) -> Result<Option<i64>> {
    Ok(max_subarray(values)?.map(|m| m.sum))
}

/// Maximum subarray with its range. Ties keep the earliest range.
pub fn max_subarray(values: &[i64]) -> Result<Option<MaxSubarray>> {
    let steps = kadane_trace(values)?;
    let mut best: Option<MaxSubarray> = None;
    let mut start = 0;

    for step in &steps {
        if step.decision == KadaneDecision::StartFresh {
            start = step.index;
        }
        if best.is_none_or(|b| step.max_ending_here > b.sum) {
            best = Some(MaxSubarray {
                sum: step.max_ending_here,
                start,
                end: step.index,
            });
        }
    }

    Ok(best)
}

/// One step per element with the decision taken.
///
/// Fails with `Overflow` when a running sum exceeds `i64::MAX`; the maximum
/// subarray sum is then not representable either.
pub fn kadane_trace(values: &[i64]) -> Result<Vec<KadaneStep>> {
    let mut steps = Vec::with_capacity(values.len());
    let mut here = 0i64;
    let mut so_far = i64::MIN;

    for (index, &value) in values.iter().enumerate() {
        // A negative running sum can only lower `value`
        let decision = if here < 0 {
            here = value;
            KadaneDecision::StartFresh
        } else {
            let extended = here.checked_add(value).ok_or(LabError::Overflow {
                what: "maximum subarray sum",
            })?;
            if value > extended {
                here = value;
                KadaneDecision::StartFresh
            } else {
                here = extended;
                KadaneDecision::Extend
            }
        };
        so_far = so_far.max(here);
        steps.push(KadaneStep {
            index,
            value,
            decision,
            max_ending_here: here,
            max_so_far: so_far,
        });
    }

    Ok(steps)
}
