//! The mesh aggregate returned by generators.

use crate::bounds::{Aabb, BoundingSphere};

use super::vertex::Vertex;

/// A generated triangle mesh with derived bounding volumes.
///
/// A `Mesh` is immutable once built: generators assemble the buffers, run
/// their post-processing passes, and hand the finished aggregate to the
/// caller. Regeneration replaces the whole value rather than patching it in
/// place, so a host never observes a half-updated mesh.
#[derive(Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    name: String,
    aabb: Aabb,
    sphere: BoundingSphere,
}

impl Mesh {
    pub(crate) fn new(
        name: impl Into<String>,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        aabb: Aabb,
        sphere: BoundingSphere,
    ) -> Self {
        Self {
            vertices,
            indices,
            name: name.into(),
            aabb,
            sphere,
        }
    }

    /// Returns this mesh with a different name/tag.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the mesh name/tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the vertex buffer.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the triangle index buffer (triangle list, three indices per face).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the axis-aligned bounding box over all vertex positions.
    pub fn bounds(&self) -> Aabb {
        self.aabb
    }

    /// Get the bounding sphere over all vertex positions.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.sphere
    }

    /// Calculate vertex count.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Calculate index count.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Calculate triangle count.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get vertex data as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("name", &self.name)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.indices.len())
            .field("bounds", &self.aabb)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3, Vec4};

    use super::*;

    fn test_mesh() -> Mesh {
        let v = Vertex {
            position: Vec3::ZERO,
            normal: Vec3::Y,
            uv: Vec2::ZERO,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            tangent: Vec4::new(1.0, 0.0, 0.0, 1.0),
        };
        Mesh::new(
            "test",
            vec![v; 3],
            vec![0, 1, 2],
            Aabb::ZERO,
            BoundingSphere::ZERO,
        )
    }

    #[test]
    fn counts() {
        let mesh = test_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn byte_views() {
        let mesh = test_mesh();
        assert_eq!(mesh.vertex_bytes().len(), 3 * 64);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn rename() {
        let mesh = test_mesh().with_name("ground");
        assert_eq!(mesh.name(), "ground");
    }
}
