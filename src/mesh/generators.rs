//! Mesh generators.
//!
//! [`generate_grid`] produces a flat, triangulated plane from a [`GridSpec`]:
//! a square lattice of vertices centered at the origin in the XZ plane, with
//! normals, tangents, and bounding volumes recomputed from the final
//! geometry.

use glam::{Vec2, Vec3, Vec4};

use crate::bounds::{Aabb, BoundingSphere};
use crate::error::{GridError, GridResult};

use super::attributes::{recompute_normals, recompute_tangents};
use super::data::Mesh;
use super::vertex::Vertex;

/// Configuration for flat-grid generation.
///
/// `size` is the world-space extent of the plane; `side_vertex_count` is the
/// number of vertices along each axis, so the grid always has square vertex
/// topology while the extent may be rectangular. Defaults to a 1x1 plane
/// with 4 vertices per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// World-space width (x) and height (z) of the plane.
    pub size: Vec2,
    /// Vertices per side; at least 2 are needed to form one quad.
    pub side_vertex_count: u32,
}

impl GridSpec {
    /// Create a spec with the given extent and per-side vertex count.
    pub fn new(size: Vec2, side_vertex_count: u32) -> Self {
        Self {
            size,
            side_vertex_count,
        }
    }

    /// Returns this spec with a different world-space size.
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Returns this spec with a different per-side vertex count.
    #[must_use]
    pub fn with_side_vertex_count(mut self, side_vertex_count: u32) -> Self {
        self.side_vertex_count = side_vertex_count;
        self
    }

    /// Check that this spec describes a generatable grid.
    ///
    /// Fails when `side_vertex_count < 2` or when a size component is
    /// negative or non-finite. Zero extents are accepted; they produce a
    /// degenerate but well-formed mesh.
    pub fn validate(&self) -> GridResult<()> {
        if self.side_vertex_count < 2 {
            return Err(GridError::SideVertexCountTooSmall(self.side_vertex_count));
        }
        if !self.size.x.is_finite()
            || !self.size.y.is_finite()
            || self.size.x < 0.0
            || self.size.y < 0.0
        {
            return Err(GridError::InvalidSize {
                width: self.size.x,
                height: self.size.y,
            });
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: Vec2::ONE,
            side_vertex_count: 4,
        }
    }
}

/// Generate a flat grid mesh.
///
/// The plane lies in the XZ plane, centered at the origin, with +Y as the
/// surface normal direction. Vertices are laid out row-major (z-rows outer,
/// x inner); UVs run from `(0, 0)` at the `-x/-z` corner to `(1, 1)` at the
/// `+x/+z` corner. Each quad cell emits two triangles wound
/// counter-clockwise seen from +Y, so front faces point up.
///
/// The per-vertex color channel encodes the horizontal parametric coordinate
/// in red with alpha 1; it is a visualization aid carried through unchanged.
///
/// Generation is deterministic: the same spec always produces bit-identical
/// buffers. Each call allocates fresh buffers and returns an owned [`Mesh`],
/// so concurrent calls share no state.
///
/// # Errors
///
/// Returns [`GridError`] when the spec fails [`GridSpec::validate`]; no
/// buffers are allocated in that case.
pub fn generate_grid(spec: &GridSpec) -> GridResult<Mesh> {
    spec.validate()?;

    let n = spec.side_vertex_count as usize;
    let denom = (spec.side_vertex_count - 1) as f32;

    let mut vertices = Vec::with_capacity(n * n);
    for y in 0..n {
        let vf = y as f32 / denom;
        let world_z = spec.size.y * (vf - 0.5);
        for x in 0..n {
            let uf = x as f32 / denom;
            vertices.push(Vertex {
                position: Vec3::new(spec.size.x * (uf - 0.5), 0.0, world_z),
                // Placeholder; replaced by the recompute pass below.
                normal: Vec3::Y,
                uv: Vec2::new(uf, vf),
                color: Vec4::new(uf, 0.0, 0.0, 1.0),
                tangent: Vec4::new(1.0, 0.0, 0.0, 1.0),
            });
        }
    }

    let quads = n - 1;
    let mut indices = Vec::with_capacity(quads * quads * 6);
    for y in 0..quads {
        for x in 0..quads {
            let i0 = (y * n + x) as u32;
            let i1 = i0 + 1;
            let i2 = i0 + n as u32;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[
                i0, i2, i1, // CCW from +Y
                i1, i2, i3,
            ]);
        }
    }

    recompute_normals(&mut vertices, &indices);
    recompute_tangents(&mut vertices, &indices);

    let aabb = Aabb::from_points(vertices.iter().map(|v| v.position));
    let sphere = BoundingSphere::enclosing(aabb.center(), vertices.iter().map(|v| v.position));

    log::debug!(
        "generated grid: {}x{} vertices, {} triangles, extent {}x{}",
        n,
        n,
        indices.len() / 3,
        spec.size.x,
        spec.size.y
    );

    Ok(Mesh::new("grid", vertices, indices, aabb, sphere))
}
