pub mod surface;

pub use surface::{ConicalFrustum, PlacedSurface, SphereSegment, Surface, SurfaceDomain, Torus};
