// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::Serialize;
use std::fmt;

/// Vertex identifier as seen by users: 1-based, in `[1, V]`.
///
/// Algorithms keep their per-vertex state in dense arrays indexed by
/// [`VertexId::slot`], which is `id - 1`. Ids are only built through
/// [`VertexId::new`] or from a slot, so `0` never appears.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex id.
    ///
    /// # Panics
    ///
    /// Panics on `0`, which is never a valid vertex label.
    pub fn new(id: u32) -> Self {
        assert!(id != 0, "VertexId is 1-based, got 0");
        Self(id)
    }

    /// Vertex id for a dense slot (`slot + 1`).
    #[inline]
    pub fn from_slot(slot: u32) -> Self {
        Self(slot + 1)
    }

    /// Dense array index for this vertex.
    #[inline]
    pub fn slot(&self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge record index, in insertion order (0-based).
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
