use std::f64::consts::{PI, TAU};

use crate::error::Result;
use crate::math::Point3;

use super::{check_angle_range, check_positive, Surface, SurfaceDomain};

/// A segment of a sphere centered at the body-frame origin.
///
/// `P(zenith, azimuth) = r * (sin(zenith) * cos(azimuth), sin(zenith) * sin(azimuth), cos(zenith))`
///
/// Parameters: `zenith` in `[min_zenith, max_zenith]` within `[0, pi]` (independent),
/// `azimuth` in `[min_azimuth, max_azimuth]` within `[0, 2*pi]` (dependent).
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSegment {
    radius: f64,
    minimum_zenith_angle: f64,
    maximum_zenith_angle: f64,
    minimum_azimuth_angle: f64,
    maximum_azimuth_angle: f64,
}

impl SphereSegment {
    /// Creates a new sphere segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, an angle bound lies
    /// outside its valid range, or a minimum exceeds its maximum.
    pub fn new(
        radius: f64,
        minimum_zenith_angle: f64,
        maximum_zenith_angle: f64,
        minimum_azimuth_angle: f64,
        maximum_azimuth_angle: f64,
    ) -> Result<Self> {
        check_positive("sphere radius", radius)?;
        check_angle_range("zenith", minimum_zenith_angle, maximum_zenith_angle, PI)?;
        check_angle_range("azimuth", minimum_azimuth_angle, maximum_azimuth_angle, TAU)?;
        Ok(Self {
            radius,
            minimum_zenith_angle,
            maximum_zenith_angle,
            minimum_azimuth_angle,
            maximum_azimuth_angle,
        })
    }

    /// Creates a full sphere: zenith `[0, pi]`, azimuth `[0, 2*pi]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn full(radius: f64) -> Result<Self> {
        Self::new(radius, 0.0, PI, 0.0, TAU)
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the `(minimum, maximum)` zenith angles.
    #[must_use]
    pub fn zenith_angles(&self) -> (f64, f64) {
        (self.minimum_zenith_angle, self.maximum_zenith_angle)
    }

    /// Returns the `(minimum, maximum)` azimuth angles.
    #[must_use]
    pub fn azimuth_angles(&self) -> (f64, f64) {
        (self.minimum_azimuth_angle, self.maximum_azimuth_angle)
    }

    /// Sets the radius. On error the segment is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_positive("sphere radius", radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Sets both zenith bounds at once. On error the segment is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound lies outside `[0, pi]` or `minimum > maximum`.
    pub fn set_zenith_angles(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_angle_range("zenith", minimum, maximum, PI)?;
        self.minimum_zenith_angle = minimum;
        self.maximum_zenith_angle = maximum;
        Ok(())
    }

    /// Sets both azimuth bounds at once. On error the segment is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound lies outside `[0, 2*pi]` or `minimum > maximum`.
    pub fn set_azimuth_angles(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_angle_range("azimuth", minimum, maximum, TAU)?;
        self.minimum_azimuth_angle = minimum;
        self.maximum_azimuth_angle = maximum;
        Ok(())
    }

    /// Analytic area of the segment: `r^2 * (cos(z_min) - cos(z_max)) * (a_max - a_min)`.
    #[must_use]
    pub fn analytic_area(&self) -> f64 {
        self.radius
            * self.radius
            * (self.minimum_zenith_angle.cos() - self.maximum_zenith_angle.cos())
            * (self.maximum_azimuth_angle - self.minimum_azimuth_angle)
    }
}

impl Surface for SphereSegment {
    fn evaluate(&self, zenith: f64, azimuth: f64) -> Result<Point3> {
        self.domain().check(("zenith", "azimuth"), zenith, azimuth)?;
        let sz = zenith.sin();
        Ok(Point3::new(
            self.radius * sz * azimuth.cos(),
            self.radius * sz * azimuth.sin(),
            self.radius * zenith.cos(),
        ))
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain {
            independent_min: self.minimum_zenith_angle,
            independent_max: self.maximum_zenith_angle,
            dependent_min: self.minimum_azimuth_angle,
            dependent_max: self.maximum_azimuth_angle,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, PanelMeshError};
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn evaluate_north_pole() {
        let s = SphereSegment::full(2.0).unwrap();
        let p = s.evaluate(0.0, 1.3).unwrap();
        assert!((p - Point3::new(0.0, 0.0, 2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_south_pole() {
        let s = SphereSegment::full(2.0).unwrap();
        let p = s.evaluate(PI, 0.0).unwrap();
        assert!((p - Point3::new(0.0, 0.0, -2.0)).norm() < 1e-9);
    }

    #[test]
    fn evaluate_equator() {
        let s = SphereSegment::full(1.0).unwrap();
        let p = s.evaluate(FRAC_PI_2, FRAC_PI_2).unwrap();
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn points_lie_on_sphere() {
        let s = SphereSegment::full(3.5).unwrap();
        for &(z, a) in &[(0.1, 0.2), (1.0, 4.0), (2.9, 6.0), (FRAC_PI_2, PI)] {
            let p = s.evaluate(z, a).unwrap();
            assert_abs_diff_eq!(p.coords.norm(), 3.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn seam_points_coincide() {
        let s = SphereSegment::full(1.0).unwrap();
        let a = s.evaluate(1.0, 0.0).unwrap();
        let b = s.evaluate(1.0, TAU).unwrap();
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn domain_ranges() {
        let s = SphereSegment::new(1.0, 0.2, 1.2, 0.5, 3.0).unwrap();
        let d = s.domain();
        assert!((d.independent_min() - 0.2).abs() < TOLERANCE);
        assert!((d.independent_max() - 1.2).abs() < TOLERANCE);
        assert!((d.dependent_min() - 0.5).abs() < TOLERANCE);
        assert!((d.dependent_max() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn out_of_domain_evaluation_fails() {
        let s = SphereSegment::new(1.0, 0.0, FRAC_PI_2, 0.0, PI).unwrap();
        let err = s.evaluate(2.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PanelMeshError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "zenith",
                ..
            })
        ));
        assert!(s.evaluate(1.0, 4.0).is_err());
    }

    #[test]
    fn invalid_configuration() {
        assert!(SphereSegment::full(0.0).is_err());
        assert!(SphereSegment::full(-1.0).is_err());
        assert!(SphereSegment::new(1.0, 0.0, 4.0, 0.0, TAU).is_err());
        assert!(SphereSegment::new(1.0, 0.0, PI, -0.5, TAU).is_err());
        assert!(SphereSegment::new(1.0, 2.0, 1.0, 0.0, TAU).is_err());
    }

    #[test]
    fn failed_setter_leaves_segment_unchanged() {
        let mut s = SphereSegment::full(2.0).unwrap();
        assert!(s.set_radius(-3.0).is_err());
        assert!(s.set_zenith_angles(1.0, 0.5).is_err());
        assert!(s.set_azimuth_angles(0.0, 7.0).is_err());
        assert_eq!(s, SphereSegment::full(2.0).unwrap());

        s.set_radius(3.0).unwrap();
        s.set_zenith_angles(0.0, FRAC_PI_2).unwrap();
        s.set_azimuth_angles(0.0, PI).unwrap();
        assert!((s.radius() - 3.0).abs() < TOLERANCE);
        assert_eq!(s.zenith_angles(), (0.0, FRAC_PI_2));
        assert_eq!(s.azimuth_angles(), (0.0, PI));
    }

    #[test]
    fn analytic_area_of_full_sphere() {
        let s = SphereSegment::full(2.0).unwrap();
        assert_abs_diff_eq!(s.analytic_area(), 16.0 * PI, epsilon = 1e-12);
    }
}
