use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point3, Rotation3, Vector3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A surface placed in a body frame by scaling, rotation and offset.
///
/// `P'(a, b) = offset + rotation * (scaling * P(a, b))`
///
/// The parameter domain is the inner surface's domain. A mirroring scaling
/// matrix (negative determinant) or an explicit [`PlacedSurface::reversed`]
/// flips the orientation of every generated panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSurface<S> {
    inner: S,
    offset: Vector3,
    rotation: Rotation3,
    scaling: Matrix3,
    reversed: bool,
}

impl<S: Surface> PlacedSurface<S> {
    /// Wraps `inner` with the identity placement.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            offset: Vector3::zeros(),
            rotation: Rotation3::identity(),
            scaling: Matrix3::identity(),
            reversed: false,
        }
    }

    /// Sets the translation applied after rotation.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the rotation applied after scaling.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the rotation to `angle` radians about `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis has zero length.
    pub fn with_rotation_about(mut self, axis: Vector3, angle: f64) -> Result<Self> {
        let axis = Unit::try_new(axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        self.rotation = Rotation3::from_axis_angle(&axis, angle);
        Ok(self)
    }

    /// Sets the scaling matrix applied first.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfiguration`] if the matrix is singular.
    pub fn with_scaling(mut self, scaling: Matrix3) -> Result<Self> {
        if scaling.determinant().abs() < TOLERANCE {
            return Err(GeometryError::InvalidConfiguration(
                "scaling matrix must be non-singular".into(),
            )
            .into());
        }
        self.scaling = scaling;
        Ok(self)
    }

    /// Flips the orientation of meshes built from this surface.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    /// Returns the wrapped surface.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the offset.
    #[must_use]
    pub fn offset(&self) -> &Vector3 {
        &self.offset
    }
}

impl<S: Surface> Surface for PlacedSurface<S> {
    fn evaluate(&self, independent: f64, dependent: f64) -> Result<Point3> {
        let p = self.inner.evaluate(independent, dependent)?;
        Ok(Point3::from(
            self.offset + self.rotation * (self.scaling * p.coords),
        ))
    }

    fn domain(&self) -> SurfaceDomain {
        self.inner.domain()
    }

    fn reverses_orientation(&self) -> bool {
        let mirrored = self.scaling.determinant() < 0.0;
        self.inner.reverses_orientation() ^ self.reversed ^ mirrored
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::SphereSegment;
    use std::f64::consts::FRAC_PI_2;

    fn unit_sphere() -> SphereSegment {
        SphereSegment::full(1.0).unwrap()
    }

    #[test]
    fn identity_placement_matches_inner() {
        let placed = PlacedSurface::new(unit_sphere());
        let a = placed.evaluate(1.0, 2.0).unwrap();
        let b = unit_sphere().evaluate(1.0, 2.0).unwrap();
        assert!((a - b).norm() < TOLERANCE);
        assert!(!placed.reverses_orientation());
        assert_eq!(placed.domain(), unit_sphere().domain());
    }

    #[test]
    fn offset_moves_points() {
        let placed = PlacedSurface::new(unit_sphere()).with_offset(Vector3::new(1.0, 2.0, 3.0));
        let p = placed.evaluate(0.0, 0.0).unwrap();
        assert!((p - Point3::new(1.0, 2.0, 4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn rotation_then_offset() {
        let placed = PlacedSurface::new(unit_sphere())
            .with_rotation_about(Vector3::y(), FRAC_PI_2)
            .unwrap()
            .with_offset(Vector3::new(0.0, 0.0, 5.0));
        // North pole (0, 0, 1) rotates onto +x.
        let p = placed.evaluate(0.0, 0.0).unwrap();
        assert!((p - Point3::new(1.0, 0.0, 5.0)).norm() < 1e-9);
    }

    #[test]
    fn scaling_stretches_sphere_into_ellipsoid() {
        let placed = PlacedSurface::new(unit_sphere())
            .with_scaling(Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, 3.0)))
            .unwrap();
        let p = placed.evaluate(0.0, 0.0).unwrap();
        assert!((p - Point3::new(0.0, 0.0, 3.0)).norm() < TOLERANCE);
    }

    #[test]
    fn zero_axis_and_singular_scaling_rejected() {
        assert!(PlacedSurface::new(unit_sphere())
            .with_rotation_about(Vector3::zeros(), 1.0)
            .is_err());
        assert!(PlacedSurface::new(unit_sphere())
            .with_scaling(Matrix3::zeros())
            .is_err());
    }

    #[test]
    fn orientation_flags_compose() {
        let reversed = PlacedSurface::new(unit_sphere()).reversed();
        assert!(reversed.reverses_orientation());
        assert!(!reversed.clone().reversed().reverses_orientation());

        let mirrored = PlacedSurface::new(unit_sphere())
            .with_scaling(Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, 1.0)))
            .unwrap();
        assert!(mirrored.reverses_orientation());
        assert!(!mirrored.reversed().reverses_orientation());
    }
}
