//! Mesh assets: the CPU-side mesh format, procedural icospheres, and loading
//! meshes from RON files.

mod icosphere;
mod loader;
mod mesh;

pub use icosphere::generate_icosphere;
pub use loader::{AssetError, load_mesh_file, load_model};
pub use mesh::{MeshData, MeshError};
