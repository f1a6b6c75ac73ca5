//! Error types for grid generation.

use thiserror::Error;

/// Errors produced by grid mesh generation.
///
/// Every variant is a configuration error: generation itself is a
/// deterministic pure computation, so a failure always points at the caller's
/// inputs and is surfaced eagerly, before any buffers are allocated. The host
/// decides whether to abort, skip, or substitute defaults.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The per-side vertex count is below the 2x2 minimum needed to form one
    /// quad. Anything smaller also divides by zero in UV parameterization.
    #[error("side vertex count must be at least 2, got {0}")]
    SideVertexCountTooSmall(u32),

    /// A grid size component is negative or non-finite.
    #[error("grid size must have finite, non-negative components, got {width}x{height}")]
    InvalidSize {
        /// Requested world-space width.
        width: f32,
        /// Requested world-space height.
        height: f32,
    },
}

/// Convenience alias for grid generation results.
pub type GridResult<T> = Result<T, GridError>;
