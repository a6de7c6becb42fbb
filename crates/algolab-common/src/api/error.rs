// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LabError {
    /// Vertex id outside `[1, vertex_count]`
    #[error("Vertex {vertex} is out of range: expected 1..={vertex_count}")]
    InvalidVertexIndex { vertex: i64, vertex_count: usize },

    /// Token could not be parsed as the expected value
    #[error("Malformed input on line {line}: expected {expected}, got '{found}'")]
    MalformedInput {
        expected: String,
        found: String,
        line: usize,
    },

    /// Input stream ended before all required values were read
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    /// Edge record missing or left unclassified after a traversal
    #[error("Edge {edge} has no classification")]
    EdgeNotFound { edge: usize },

    #[error("Invalid range [{left}, {right}] for {len} values")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("Too many {what}: limit is {limit}, got {actual}")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// A sum left the `i64` range
    #[error("Arithmetic overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabError>;
