// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::{Graph, GraphMode};

pub fn build_test_graph(vertex_count: usize, edges: &[(i64, i64)], mode: GraphMode) -> Graph {
    Graph::from_edges(vertex_count, mode, edges.iter().copied())
        .expect("Test edge out of vertex range")
}
