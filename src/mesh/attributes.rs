//! Recomputed vertex attributes: normals and tangents.
//!
//! Generators fill normals and tangents with placeholder constants during the
//! vertex pass and rely on these passes to replace them with values derived
//! from the final triangle geometry. Both passes are exposed so callers can
//! re-derive attributes after transforming buffers of their own.

use glam::Vec3;

use super::vertex::Vertex;

/// Recompute per-vertex normals from triangle geometry.
///
/// Accumulates each face's cross-product normal into its three corner
/// vertices and normalizes per vertex, so the contribution of each face is
/// weighted by its area. Vertices touched only by degenerate faces keep
/// their current normal, which keeps every stored normal unit length.
///
/// Indices must be in range for `vertices`; trailing indices that do not
/// form a full triangle are ignored.
pub fn recompute_normals(vertices: &mut [Vertex], indices: &[u32]) {
    let mut accumulated = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let p0 = vertices[i0].position;
        let p1 = vertices[i1].position;
        let p2 = vertices[i2].position;

        let face_normal = (p1 - p0).cross(p2 - p0);
        accumulated[i0] += face_normal;
        accumulated[i1] += face_normal;
        accumulated[i2] += face_normal;
    }

    for (vertex, n) in vertices.iter_mut().zip(accumulated) {
        if let Some(unit) = n.try_normalize() {
            vertex.normal = unit;
        }
    }
}

/// Recompute per-vertex tangents from positions, UVs, and normals.
///
/// Per-triangle UV-gradient accumulation followed by Gram-Schmidt
/// orthogonalization against the vertex normal; `w` carries the handedness
/// sign of the UV basis. Triangles with a degenerate UV mapping contribute
/// nothing, and vertices with no usable accumulation keep their current
/// tangent.
///
/// Call after [`recompute_normals`] so the orthogonalization uses the final
/// normals.
pub fn recompute_tangents(vertices: &mut [Vertex], indices: &[u32]) {
    let mut tan = vec![Vec3::ZERO; vertices.len()];
    let mut bitan = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let p0 = vertices[i0].position;
        let e1 = vertices[i1].position - p0;
        let e2 = vertices[i2].position - p0;

        let uv0 = vertices[i0].uv;
        let d1 = vertices[i1].uv - uv0;
        let d2 = vertices[i2].uv - uv0;

        // Signed UV area; zero means the mapping gives no tangent direction.
        let denom = d1.x * d2.y - d2.x * d1.y;
        if denom.abs() < 1e-12 {
            continue;
        }
        let r = 1.0 / denom;
        let t = (e1 * d2.y - e2 * d1.y) * r;
        let b = (e2 * d1.x - e1 * d2.x) * r;

        for &i in &[i0, i1, i2] {
            tan[i] += t;
            bitan[i] += b;
        }
    }

    for (i, vertex) in vertices.iter_mut().enumerate() {
        let n = vertex.normal;
        let t = tan[i];
        let Some(tangent) = (t - n * n.dot(t)).try_normalize() else {
            continue;
        };
        let handedness = if n.cross(tangent).dot(bitan[i]) < 0.0 {
            -1.0
        } else {
            1.0
        };
        vertex.tangent = tangent.extend(handedness);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec4};

    use super::*;

    fn vertex(position: Vec3, uv: Vec2) -> Vertex {
        Vertex {
            position,
            normal: Vec3::Y,
            uv,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            tangent: Vec4::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn normals_of_single_upward_triangle() {
        // Counter-clockwise seen from +Y
        let mut vertices = vec![
            vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 1.0)),
            vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0)),
        ];
        recompute_normals(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert!((v.normal - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn normals_are_area_weighted_across_shared_vertices() {
        // Two triangles sharing the edge v0-v1: a face in the XZ plane (+Y)
        // and a face twice its area in the XY plane (+Z). The shared
        // vertices lean toward the larger face.
        let mut vertices = vec![
            vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0)),
            vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 1.0)),
            vertex(Vec3::new(0.0, 2.0, 0.0), Vec2::new(0.0, 1.0)),
        ];
        recompute_normals(&mut vertices, &[0, 2, 1, 0, 1, 3]);

        let expected = (Vec3::Y + 2.0 * Vec3::Z).normalize();
        assert!((vertices[0].normal - expected).length() < 1e-6);
        assert!((vertices[1].normal - expected).length() < 1e-6);
        // Unshared corners keep their single face's normal
        assert!((vertices[2].normal - Vec3::Y).length() < 1e-6);
        assert!((vertices[3].normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn degenerate_face_keeps_placeholder_normal() {
        let mut vertices = vec![
            vertex(Vec3::ZERO, Vec2::new(0.0, 0.0)),
            vertex(Vec3::ZERO, Vec2::new(1.0, 0.0)),
            vertex(Vec3::ZERO, Vec2::new(0.0, 1.0)),
        ];
        recompute_normals(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert_eq!(v.normal, Vec3::Y);
        }
    }

    #[test]
    fn tangents_follow_the_u_direction() {
        // XZ-plane triangle with u increasing along +X and v along +Z.
        let mut vertices = vec![
            vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.0, 0.0)),
            vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 1.0)),
            vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::new(1.0, 0.0)),
        ];
        recompute_normals(&mut vertices, &[0, 1, 2]);
        recompute_tangents(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert!((v.tangent.truncate() - Vec3::X).length() < 1e-6);
            assert_eq!(v.tangent.w, -1.0);
        }
    }

    #[test]
    fn degenerate_uvs_keep_placeholder_tangent() {
        // All three corners share one UV, so the UV area is zero.
        let mut vertices = vec![
            vertex(Vec3::new(0.0, 0.0, 0.0), Vec2::ZERO),
            vertex(Vec3::new(0.0, 0.0, 1.0), Vec2::ZERO),
            vertex(Vec3::new(1.0, 0.0, 0.0), Vec2::ZERO),
        ];
        recompute_tangents(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert_eq!(v.tangent, Vec4::new(1.0, 0.0, 0.0, 1.0));
        }
    }
}
