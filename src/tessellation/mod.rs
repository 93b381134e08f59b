mod grid;
mod mesh;
mod panel;

pub use grid::{Grid, SurfaceMeshBuilder};
pub use mesh::QuadrilateralMesh;
pub use panel::{Panel, PanelCorners, PanelGeometry};

use crate::error::{MeshError, Result};

/// Sampling resolution of a structured panel mesh.
///
/// `number_of_lines` samples the independent variable (grid rows),
/// `number_of_points` the dependent variable (grid columns). Both are at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshResolution {
    number_of_lines: usize,
    number_of_points: usize,
}

impl MeshResolution {
    /// Creates a new resolution.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidResolution`] if either count is below 2.
    pub fn new(number_of_lines: usize, number_of_points: usize) -> Result<Self> {
        if number_of_lines < 2 || number_of_points < 2 {
            return Err(MeshError::InvalidResolution {
                number_of_lines,
                number_of_points,
            }
            .into());
        }
        Ok(Self {
            number_of_lines,
            number_of_points,
        })
    }

    /// Number of samples along the independent variable.
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Number of samples along the dependent variable.
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    /// Number of panels, `(lines - 1) * (points - 1)`.
    #[must_use]
    pub fn number_of_panels(&self) -> usize {
        (self.number_of_lines - 1) * (self.number_of_points - 1)
    }
}

impl Default for MeshResolution {
    fn default() -> Self {
        Self {
            number_of_lines: 21,
            number_of_points: 21,
        }
    }
}
