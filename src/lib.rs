//! # gridmesh
//!
//! Procedural flat-grid mesh generation.
//!
//! Given a world-space extent and a per-side vertex count, [`generate_grid`]
//! produces a triangulated plane centered at the origin in the XZ plane:
//! interleaved vertices (position, normal, UV, color, tangent), a `u32`
//! triangle index list, and bounding volumes derived from the final
//! positions. Normals and tangents are recomputed from the triangle
//! geometry rather than left as constants.
//!
//! Generation is a pure function: no instance state, no I/O, same spec in,
//! bit-identical buffers out. Hosts that want the result attached to their
//! own objects go through the sink traits in [`host`].
//!
//! ```
//! use glam::Vec2;
//! use gridmesh::{generate_grid, GridSpec};
//!
//! let mesh = generate_grid(&GridSpec::new(Vec2::new(10.0, 10.0), 32))?;
//! assert_eq!(mesh.vertex_count(), 32 * 32);
//! # Ok::<(), gridmesh::GridError>(())
//! ```

pub mod bounds;
pub mod error;
pub mod host;
pub mod mesh;

pub use bounds::{Aabb, BoundingSphere};
pub use error::{GridError, GridResult};
pub use host::{generate_into, MaterialHandle, MaterialSink, MeshSink};
pub use mesh::{generate_grid, recompute_normals, recompute_tangents, GridSpec, Mesh, Vertex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
