use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

use super::{check_angle_range, check_positive, Surface, SurfaceDomain};

/// The lateral surface of a conical frustum, extending from the `z = 0` plane
/// along the negative z-axis.
///
/// `P(s, azimuth) = (rho * cos(azimuth), rho * sin(azimuth), -s)` with
/// `rho = start_radius + s * tan(half_angle)`.
///
/// Parameters: `s` in `[0, length]` (independent), `azimuth` in
/// `[min_azimuth, max_azimuth]` within `[0, 2*pi]` (dependent). A positive
/// half-angle widens the frustum away from the start plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicalFrustum {
    start_radius: f64,
    length: f64,
    half_angle: f64,
    minimum_azimuth_angle: f64,
    maximum_azimuth_angle: f64,
}

impl ConicalFrustum {
    /// Creates a new conical frustum.
    ///
    /// # Errors
    ///
    /// Returns an error if the start radius or length is non-positive, the
    /// half-angle is outside `(-pi/2, pi/2)`, the end radius would be negative,
    /// or the azimuth range is invalid.
    pub fn new(
        start_radius: f64,
        length: f64,
        half_angle: f64,
        minimum_azimuth_angle: f64,
        maximum_azimuth_angle: f64,
    ) -> Result<Self> {
        check_shape(start_radius, length, half_angle)?;
        check_angle_range("azimuth", minimum_azimuth_angle, maximum_azimuth_angle, TAU)?;
        Ok(Self {
            start_radius,
            length,
            half_angle,
            minimum_azimuth_angle,
            maximum_azimuth_angle,
        })
    }

    /// Creates a frustum closed around the full azimuth range.
    ///
    /// # Errors
    ///
    /// See [`ConicalFrustum::new`].
    pub fn full(start_radius: f64, length: f64, half_angle: f64) -> Result<Self> {
        Self::new(start_radius, length, half_angle, 0.0, TAU)
    }

    /// Returns the radius at `s = 0`.
    #[must_use]
    pub fn start_radius(&self) -> f64 {
        self.start_radius
    }

    /// Returns the radius at `s = length`.
    #[must_use]
    pub fn end_radius(&self) -> f64 {
        self.start_radius + self.length * self.half_angle.tan()
    }

    /// Returns the axial length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the cone half-angle in radians.
    #[must_use]
    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }

    /// Sets the start radius, length and half-angle together.
    /// On error the frustum is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`ConicalFrustum::new`].
    pub fn set_shape(&mut self, start_radius: f64, length: f64, half_angle: f64) -> Result<()> {
        check_shape(start_radius, length, half_angle)?;
        self.start_radius = start_radius;
        self.length = length;
        self.half_angle = half_angle;
        Ok(())
    }

    /// Sets both azimuth bounds. On error the frustum is left unchanged.
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

    /// Analytic lateral area: `(r0 + r1) / 2 * slant * (a_max - a_min)`.
    #[must_use]
    pub fn analytic_area(&self) -> f64 {
        let r1 = self.end_radius();
        let slant = self.length.hypot(r1 - self.start_radius);
        0.5 * (self.start_radius + r1)
            * slant
            * (self.maximum_azimuth_angle - self.minimum_azimuth_angle)
    }
}

fn check_shape(start_radius: f64, length: f64, half_angle: f64) -> Result<()> {
    check_positive("frustum start radius", start_radius)?;
    check_positive("frustum length", length)?;
    if !half_angle.is_finite() || half_angle.abs() >= FRAC_PI_2 - TOLERANCE {
        return Err(GeometryError::InvalidConfiguration(format!(
            "frustum half-angle must be in (-pi/2, pi/2), got {half_angle}"
        ))
        .into());
    }
    if start_radius + length * half_angle.tan() < 0.0 {
        return Err(GeometryError::InvalidConfiguration(
            "frustum end radius must not be negative".into(),
        )
        .into());
    }
    Ok(())
}

impl Surface for ConicalFrustum {
    fn evaluate(&self, s: f64, azimuth: f64) -> Result<Point3> {
        self.domain().check(("axial distance", "azimuth"), s, azimuth)?;
        let rho = self.start_radius + s * self.half_angle.tan();
        Ok(Point3::new(rho * azimuth.cos(), rho * azimuth.sin(), -s))
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain {
            independent_min: 0.0,
            independent_max: self.length,
            dependent_min: self.minimum_azimuth_angle,
            dependent_max: self.maximum_azimuth_angle,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn evaluate_start_and_end_rings() {
        let f = ConicalFrustum::full(1.0, 2.0, 0.3).unwrap();
        let start = f.evaluate(0.0, 0.0).unwrap();
        assert!((start - Point3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);

        let end = f.evaluate(2.0, 0.0).unwrap();
        assert_abs_diff_eq!(end.x, f.end_radius(), epsilon = 1e-12);
        assert_abs_diff_eq!(end.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn narrowing_frustum_may_close_to_apex() {
        let half_angle = -(1.0_f64).atan();
        let f = ConicalFrustum::full(1.0, 1.0, half_angle).unwrap();
        assert_abs_diff_eq!(f.end_radius(), 0.0, epsilon = 1e-12);
        assert!(ConicalFrustum::full(1.0, 1.5, half_angle).is_err());
    }

    #[test]
    fn cylinder_area() {
        let f = ConicalFrustum::full(2.0, 3.0, 0.0).unwrap();
        assert_abs_diff_eq!(f.analytic_area(), 2.0 * PI * 2.0 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_configuration() {
        assert!(ConicalFrustum::full(0.0, 1.0, 0.1).is_err());
        assert!(ConicalFrustum::full(1.0, 0.0, 0.1).is_err());
        assert!(ConicalFrustum::full(1.0, 1.0, FRAC_PI_2).is_err());
        assert!(ConicalFrustum::new(1.0, 1.0, 0.1, 1.0, 0.5).is_err());
    }

    #[test]
    fn failed_setter_leaves_frustum_unchanged() {
        let mut f = ConicalFrustum::full(1.0, 2.0, 0.3).unwrap();
        assert!(f.set_shape(1.0, -2.0, 0.3).is_err());
        assert!(f.set_azimuth_angles(0.0, 8.0).is_err());
        assert_eq!(f, ConicalFrustum::full(1.0, 2.0, 0.3).unwrap());
    }
}
