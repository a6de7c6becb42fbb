// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

pub mod io {
    pub mod tokens;
}

// Re-exports for convenience
pub use api::error::{LabError, Result};
pub use config::{InputLimits, LabConfig};
pub use core::id::{EdgeId, VertexId};
pub use io::tokens::TokenReader;
