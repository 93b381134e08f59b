use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{check_angle_range, check_positive, Surface, SurfaceDomain};

/// A (segment of a) torus centered at the body-frame origin, symmetric about the z-axis.
///
/// `P(u, v) = ((R + r*cos(v)) * cos(u), (R + r*cos(v)) * sin(u), r*sin(v))`
///
/// `u` is the major circumferential angle (independent), `v` the minor
/// circumferential angle around the tube (dependent). Both lie within `[0, 2*pi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Torus {
    major_radius: f64,
    minor_radius: f64,
    minimum_major_angle: f64,
    maximum_major_angle: f64,
    minimum_minor_angle: f64,
    maximum_minor_angle: f64,
}

impl Torus {
    /// Creates a torus segment.
    ///
    /// # Arguments
    ///
    /// * `major_radius` - Distance from center to tube center (must be positive)
    /// * `minor_radius` - Tube radius (must be positive, must be less than major radius)
    /// * `major_angles` - `(min, max)` major circumferential angle
    /// * `minor_angles` - `(min, max)` minor circumferential angle
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive, minor >= major, or an
    /// angle range is invalid.
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        major_angles: (f64, f64),
        minor_angles: (f64, f64),
    ) -> Result<Self> {
        check_radii(major_radius, minor_radius)?;
        check_angle_range("major circumferential", major_angles.0, major_angles.1, TAU)?;
        check_angle_range("minor circumferential", minor_angles.0, minor_angles.1, TAU)?;
        Ok(Self {
            major_radius,
            minor_radius,
            minimum_major_angle: major_angles.0,
            maximum_major_angle: major_angles.1,
            minimum_minor_angle: minor_angles.0,
            maximum_minor_angle: minor_angles.1,
        })
    }

    /// Creates a closed torus.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive or minor >= major.
    pub fn full(major_radius: f64, minor_radius: f64) -> Result<Self> {
        Self::new(major_radius, minor_radius, (0.0, TAU), (0.0, TAU))
    }

    /// Returns the major radius.
    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor (tube) radius.
    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Sets both radii. On error the torus is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive or minor >= major.
    pub fn set_radii(&mut self, major_radius: f64, minor_radius: f64) -> Result<()> {
        check_radii(major_radius, minor_radius)?;
        self.major_radius = major_radius;
        self.minor_radius = minor_radius;
        Ok(())
    }

    /// Analytic area of the segment; `4 * pi^2 * R * r` for a closed torus.
    #[must_use]
    pub fn analytic_area(&self) -> f64 {
        let du = self.maximum_major_angle - self.minimum_major_angle;
        // Integral of (R + r cos v) r dv over [v_min, v_max], times du.
        let radial = self.major_radius * (self.maximum_minor_angle - self.minimum_minor_angle)
            + self.minor_radius * (self.maximum_minor_angle.sin() - self.minimum_minor_angle.sin());
        du * self.minor_radius * radial
    }
}

fn check_radii(major_radius: f64, minor_radius: f64) -> Result<()> {
    check_positive("torus major radius", major_radius)?;
    check_positive("torus minor radius", minor_radius)?;
    if minor_radius >= major_radius {
        return Err(GeometryError::InvalidConfiguration(
            "torus minor radius must be less than major radius".into(),
        )
        .into());
    }
    Ok(())
}

impl Surface for Torus {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        self.domain().check(("major angle", "minor angle"), u, v)?;
        let ring = self.major_radius + self.minor_radius * v.cos();
        Ok(Point3::new(
            ring * u.cos(),
            ring * u.sin(),
            self.minor_radius * v.sin(),
        ))
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain {
            independent_min: self.minimum_major_angle,
            independent_max: self.maximum_major_angle,
            dependent_min: self.minimum_minor_angle,
            dependent_max: self.maximum_minor_angle,
        }
    }
}
