// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Procedure implementations for the registered algorithms.

mod dfs_classify;
pub use dfs_classify::DfsClassifyProcedure;

mod bfs;
pub use bfs::BfsProcedure;

mod sequence;
pub use sequence::{LcsProcedure, MaxSubarrayProcedure, PrefixSumProcedure, SuffixSumProcedure};
