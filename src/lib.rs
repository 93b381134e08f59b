pub mod error;
pub mod geometry;
pub mod math;
pub mod part;
pub mod tessellation;

pub use error::{PanelMeshError, Result};
pub use part::NamedGeometryPart;
