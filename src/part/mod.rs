mod named_part;

pub use named_part::NamedGeometryPart;
