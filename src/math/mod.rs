/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type, used for body-frame scaling.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 3D rotation type.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative threshold on `|d1 x d2| / (|d1| * |d2|)` below which the two
/// diagonals of a panel are treated as parallel.
pub const PANEL_DEGENERACY_TOLERANCE: f64 = 1e-12;
