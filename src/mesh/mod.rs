//! CPU-side mesh types and generation.
//!
//! This module provides the grid generator and its data structures:
//!
//! - [`Vertex`] - `#[repr(C)]` vertex record (position, normal, UV, color, tangent)
//! - [`Mesh`] - owned vertex/index buffers with name and bounding volumes
//! - [`GridSpec`] / [`generate_grid`] - flat-grid generation
//! - [`recompute_normals`] / [`recompute_tangents`] - attribute derivation passes

mod attributes;
mod data;
mod generators;
mod vertex;

pub use attributes::{recompute_normals, recompute_tangents};
pub use data::Mesh;
pub use generators::{generate_grid, GridSpec};
pub use vertex::Vertex;
