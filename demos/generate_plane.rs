//! Generate a grid plane and attach it to a toy host.
//!
//! Run with:
//!   cargo run --example generate_plane
//!   cargo run --example generate_plane -- --width 20 --height 10 --vertices 64
//!   RUST_LOG=debug cargo run --example generate_plane

use clap::Parser;
use glam::Vec2;
use gridmesh::{generate_into, GridSpec, MaterialHandle, MaterialSink, Mesh, MeshSink};

#[derive(Parser, Debug)]
#[command(about = "Generate a flat grid mesh and print its stats")]
struct Args {
    /// World-space width of the plane
    #[arg(long, default_value_t = 10.0)]
    width: f32,

    /// World-space height of the plane
    #[arg(long, default_value_t = 10.0)]
    height: f32,

    /// Vertices per side (minimum 2)
    #[arg(long, default_value_t = 32)]
    vertices: u32,

    /// Material id to assign; omit to keep the host's default
    #[arg(long)]
    material: Option<u64>,
}

/// Stand-in for a scene object with mesh and material slots.
#[derive(Default)]
struct GroundPlane {
    mesh: Option<Mesh>,
    material: Option<MaterialHandle>,
}

impl MeshSink for GroundPlane {
    fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = Some(mesh);
    }
}

impl MaterialSink for GroundPlane {
    fn set_material(&mut self, material: MaterialHandle) {
        self.material = Some(material);
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let spec = GridSpec::new(Vec2::new(args.width, args.height), args.vertices);

    let mut mesh_slot = GroundPlane::default();
    let mut material_slot = GroundPlane::default();
    let material = args.material.map(MaterialHandle::new);

    if let Err(err) = generate_into(&spec, &mut mesh_slot, &mut material_slot, material) {
        log::error!("grid generation failed: {err}");
        std::process::exit(1);
    }

    let mesh = mesh_slot.mesh.expect("mesh was just attached");
    println!("mesh:       {:?}", mesh);
    println!("vertices:   {}", mesh.vertex_count());
    println!("triangles:  {}", mesh.triangle_count());
    println!(
        "gpu upload: {} vertex bytes, {} index bytes",
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len()
    );
    println!(
        "bounds:     min {:?}, max {:?}, sphere r = {:.3}",
        mesh.bounds().min,
        mesh.bounds().max,
        mesh.bounding_sphere().radius
    );
    match material_slot.material {
        Some(handle) => println!("material:   #{}", handle.id()),
        None => println!("material:   host default"),
    }
}
