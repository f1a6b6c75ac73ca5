//! Vertex format for generated meshes.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// Standard vertex with position, normal, UV, color, and tangent.
///
/// The layout is `#[repr(C)]` with only `f32` fields (64 bytes, no padding),
/// so a whole vertex buffer can be handed to a GPU upload path as raw bytes
/// via [`bytemuck`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Texture coordinates in `[0, 1]²`.
    pub uv: Vec2,
    /// Per-vertex RGBA color.
    pub color: Vec4,
    /// Tangent direction in `xyz`, handedness sign in `w`.
    pub tangent: Vec4,
}
