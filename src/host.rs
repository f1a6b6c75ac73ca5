//! Host attachment glue.
//!
//! The generator itself knows nothing about scene objects or renderers. A
//! host that wants a grid attached to one of its objects implements the sink
//! traits here and calls [`generate_into`]; the mesh is moved into the host
//! and the optional material handle is forwarded alongside it.

use crate::error::GridResult;
use crate::mesh::{generate_grid, GridSpec, Mesh};

/// Opaque handle to a host-side material.
///
/// Never interpreted by this crate; it is passed through to the host's
/// [`MaterialSink`] unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

impl MaterialHandle {
    /// Creates a new material handle from a raw id.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Receiver for a generated mesh.
///
/// Implemented by the host object that owns the mesh slot. Takes the mesh by
/// value: generation hands off ownership and never looks back.
pub trait MeshSink {
    /// Accept a freshly generated mesh, replacing any previous one.
    fn set_mesh(&mut self, mesh: Mesh);
}

/// Receiver for a material assignment.
pub trait MaterialSink {
    /// Accept a material handle for subsequent rendering of the mesh.
    fn set_material(&mut self, material: MaterialHandle);
}

/// Generate a grid and attach it to a host.
///
/// Builds the mesh from `spec`, moves it into `mesh_sink`, then forwards
/// `material` to `material_sink` only when it is `Some`. `None` leaves the
/// host's existing or default material untouched.
///
/// # Errors
///
/// Propagates the generator's validation error; neither sink is touched in
/// that case.
pub fn generate_into(
    spec: &GridSpec,
    mesh_sink: &mut impl MeshSink,
    material_sink: &mut impl MaterialSink,
    material: Option<MaterialHandle>,
) -> GridResult<()> {
    let mesh = generate_grid(spec)?;
    mesh_sink.set_mesh(mesh);
    if let Some(material) = material {
        material_sink.set_material(material);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        mesh: Option<Mesh>,
        material: Option<MaterialHandle>,
    }

    impl MeshSink for FakeHost {
        fn set_mesh(&mut self, mesh: Mesh) {
            self.mesh = Some(mesh);
        }
    }

    impl MaterialSink for FakeHost {
        fn set_material(&mut self, material: MaterialHandle) {
            self.material = Some(material);
        }
    }

    #[test]
    fn attaches_mesh_and_material() {
        let spec = GridSpec::new(Vec2::ONE, 3);
        let (mut mesh_half, mut material_half) = (FakeHost::default(), FakeHost::default());
        generate_into(
            &spec,
            &mut mesh_half,
            &mut material_half,
            Some(MaterialHandle::new(7)),
        )
        .unwrap();

        assert_eq!(mesh_half.mesh.unwrap().vertex_count(), 9);
        assert_eq!(material_half.material, Some(MaterialHandle::new(7)));
    }

    #[test]
    fn none_material_leaves_sink_untouched() {
        let mut host = FakeHost::default();
        host.material = Some(MaterialHandle::new(1));
        let spec = GridSpec::default();
        let mut mesh_half = FakeHost::default();
        generate_into(&spec, &mut mesh_half, &mut host, None).unwrap();

        assert!(mesh_half.mesh.is_some());
        assert_eq!(host.material, Some(MaterialHandle::new(1)));
    }

    #[test]
    fn invalid_spec_touches_no_sink() {
        let mut host = FakeHost::default();
        let spec = GridSpec::new(Vec2::ONE, 1);
        let mut material_half = FakeHost::default();
        let err = generate_into(
            &spec,
            &mut host,
            &mut material_half,
            Some(MaterialHandle::new(3)),
        );

        assert!(err.is_err());
        assert!(host.mesh.is_none());
        assert!(material_half.material.is_none());
    }
}
