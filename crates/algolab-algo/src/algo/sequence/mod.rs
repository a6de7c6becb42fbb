// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Sequence exercises: LCS, maximum subarray and range sums.

mod kadane;
pub use kadane::{
    KadaneDecision, KadaneStep, MaxSubarray, kadane_trace, max_subarray, max_subarray_sum,
};

mod lcs;
pub use lcs::{LcsResult, is_subsequence, lcs};

mod range_sum;
pub use range_sum::{BuildStep, PrefixSums, SuffixSums};
