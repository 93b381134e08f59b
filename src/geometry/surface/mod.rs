mod conical_frustum;
mod placement;
mod sphere_segment;
mod torus;

pub use conical_frustum::ConicalFrustum;
pub use placement::PlacedSurface;
pub use sphere_segment::SphereSegment;
pub use torus::Torus;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

/// Parameter domain for a surface.
///
/// A closed rectangle `[independent_min, independent_max] x [dependent_min, dependent_max]`.
/// Rows of a sampled grid follow the independent variable, columns the dependent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    independent_min: f64,
    independent_max: f64,
    dependent_min: f64,
    dependent_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfiguration`] if a bound is not finite
    /// or a minimum exceeds its maximum.
    pub fn new(
        independent_min: f64,
        independent_max: f64,
        dependent_min: f64,
        dependent_max: f64,
    ) -> Result<Self> {
        check_interval("independent", independent_min, independent_max)?;
        check_interval("dependent", dependent_min, dependent_max)?;
        Ok(Self {
            independent_min,
            independent_max,
            dependent_min,
            dependent_max,
        })
    }

    /// Start of the independent parameter range.
    #[must_use]
    pub fn independent_min(&self) -> f64 {
        self.independent_min
    }

    /// End of the independent parameter range.
    #[must_use]
    pub fn independent_max(&self) -> f64 {
        self.independent_max
    }

    /// Start of the dependent parameter range.
    #[must_use]
    pub fn dependent_min(&self) -> f64 {
        self.dependent_min
    }

    /// End of the dependent parameter range.
    #[must_use]
    pub fn dependent_max(&self) -> f64 {
        self.dependent_max
    }

    /// Returns `true` if `(independent, dependent)` lies inside the domain,
    /// allowing [`TOLERANCE`] of slack on every bound.
    #[must_use]
    pub fn contains(&self, independent: f64, dependent: f64) -> bool {
        in_interval(independent, self.independent_min, self.independent_max)
            && in_interval(dependent, self.dependent_min, self.dependent_max)
    }

    /// Checks that `(independent, dependent)` lies inside the domain.
    ///
    /// `names` labels the two parameters in the error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for the first offending parameter.
    pub fn check(
        &self,
        names: (&'static str, &'static str),
        independent: f64,
        dependent: f64,
    ) -> Result<()> {
        if !in_interval(independent, self.independent_min, self.independent_max) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: names.0,
                value: independent,
                min: self.independent_min,
                max: self.independent_max,
            }
            .into());
        }
        if !in_interval(dependent, self.dependent_min, self.dependent_max) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: names.1,
                value: dependent,
                min: self.dependent_min,
                max: self.dependent_max,
            }
            .into());
        }
        Ok(())
    }
}

/// Trait for parametric surfaces in 3D space.
///
/// Implementors orient their parameters so that the direction of increasing
/// independent variable crossed with the direction of increasing dependent
/// variable points out of the enclosed solid.
pub trait Surface {
    /// Evaluates the surface at `(independent, dependent)`, returning the 3D point
    /// in the body-fixed frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are outside [`Surface::domain`].
    fn evaluate(&self, independent: f64, dependent: f64) -> Result<Point3>;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;

    /// Returns `true` if meshes of this surface must flip their panel orientation.
    fn reverses_orientation(&self) -> bool {
        false
    }
}

fn in_interval(value: f64, min: f64, max: f64) -> bool {
    value >= min - TOLERANCE && value <= max + TOLERANCE
}

fn check_interval(axis: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GeometryError::InvalidConfiguration(format!(
            "{axis} bounds must be finite, got [{min}, {max}]"
        ))
        .into());
    }
    if min > max {
        return Err(GeometryError::InvalidConfiguration(format!(
            "{axis} minimum {min} exceeds maximum {max}"
        ))
        .into());
    }
    Ok(())
}

/// Validates an angular range `[min, max]` against `[0, upper]`.
pub(crate) fn check_angle_range(name: &str, min: f64, max: f64, upper: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GeometryError::InvalidConfiguration(format!(
            "{name} angles must be finite, got [{min}, {max}]"
        ))
        .into());
    }
    if min < -TOLERANCE || max > upper + TOLERANCE {
        return Err(GeometryError::InvalidConfiguration(format!(
            "{name} angles [{min}, {max}] must lie within [0, {upper}]"
        ))
        .into());
    }
    if min > max {
        return Err(GeometryError::InvalidConfiguration(format!(
            "minimum {name} angle {min} exceeds maximum {max}"
        ))
        .into());
    }
    Ok(())
}

/// Validates that a length-like shape parameter is finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < TOLERANCE {
        return Err(GeometryError::InvalidConfiguration(format!(
            "{name} must be positive, got {value}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PanelMeshError;
    use std::f64::consts::PI;

    #[test]
    fn domain_accepts_equal_bounds() {
        let d = SurfaceDomain::new(1.0, 1.0, 0.0, 2.0).unwrap();
        assert!(d.contains(1.0, 0.5));
        assert!(!d.contains(1.1, 0.5));
    }

    #[test]
    fn domain_rejects_inverted_bounds() {
        let r = SurfaceDomain::new(2.0, 1.0, 0.0, 1.0);
        assert!(matches!(
            r,
            Err(PanelMeshError::Geometry(GeometryError::InvalidConfiguration(_)))
        ));
        assert!(SurfaceDomain::new(0.0, 1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn contains_allows_rounding_slack() {
        let d = SurfaceDomain::new(0.0, 1.0, 0.0, 1.0).unwrap();
        assert!(d.contains(1.0 + TOLERANCE * 0.5, -TOLERANCE * 0.5));
        assert!(!d.contains(1.0 + 1e-6, 0.0));
    }

    #[test]
    fn check_names_offending_parameter() {
        let d = SurfaceDomain::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let err = d.check(("zenith", "azimuth"), 0.5, 3.0).unwrap_err();
        match err {
            PanelMeshError::Geometry(GeometryError::ParameterOutOfRange {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "azimuth");
                assert!((value - 3.0).abs() < TOLERANCE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn angle_range_validation() {
        assert!(check_angle_range("zenith", 0.0, PI, PI).is_ok());
        assert!(check_angle_range("zenith", -0.1, 1.0, PI).is_err());
        assert!(check_angle_range("zenith", 0.0, 4.0, PI).is_err());
        assert!(check_angle_range("zenith", 1.0, 0.5, PI).is_err());
    }
}
