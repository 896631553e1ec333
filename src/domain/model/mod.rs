//! Domain model types

pub mod material;
pub mod room;

pub use material::{Material, MaterialCatalog};
pub use room::{RaftSpec, RoomGeometry, SurfaceSpec};
