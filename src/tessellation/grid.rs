use crate::error::{MeshError, Result};
use crate::geometry::surface::Surface;
use crate::math::Point3;

use super::MeshResolution;

/// A structured grid of surface points, stored row-major.
///
/// Row `i` samples the independent variable, column `j` the dependent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    number_of_lines: usize,
    number_of_points: usize,
    points: Vec<Point3>,
}

impl Grid {
    /// Number of rows (samples of the independent variable).
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Number of columns (samples of the dependent variable).
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    /// Returns the point at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] if the index is outside the grid.
    pub fn point(&self, row: usize, col: usize) -> Result<&Point3> {
        if row >= self.number_of_lines || col >= self.number_of_points {
            return Err(MeshError::IndexOutOfRange {
                row,
                col,
                rows: self.number_of_lines,
                cols: self.number_of_points,
            }
            .into());
        }
        Ok(&self.points[row * self.number_of_points + col])
    }

    /// Iterates over the grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Point3]> {
        self.points.chunks_exact(self.number_of_points)
    }

    /// Unchecked lookup for indices already known to be in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> &Point3 {
        &self.points[row * self.number_of_points + col]
    }
}

/// Samples a surface on a uniform grid spanning its full domain.
pub struct SurfaceMeshBuilder {
    resolution: MeshResolution,
}

impl SurfaceMeshBuilder {
    /// Creates a new `SurfaceMeshBuilder` operation.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidResolution`] if either count is below 2.
    pub fn new(number_of_lines: usize, number_of_points: usize) -> Result<Self> {
        Ok(Self::with_resolution(MeshResolution::new(
            number_of_lines,
            number_of_points,
        )?))
    }

    /// Creates a builder from an already validated resolution.
    #[must_use]
    pub fn with_resolution(resolution: MeshResolution) -> Self {
        Self { resolution }
    }

    /// Executes the sampling, returning the grid.
    ///
    /// `grid[row][col] = surface.evaluate(min_i + row * step_i, min_d + col * step_d)`,
    /// with the last row and column pinned to the exact domain maxima. When the
    /// surface reverses orientation the dependent axis is sampled from its
    /// maximum down to its minimum instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to evaluate a sample.
    pub fn execute<S: Surface + ?Sized>(&self, surface: &S) -> Result<Grid> {
        let lines = self.resolution.number_of_lines();
        let points = self.resolution.number_of_points();
        let domain = surface.domain();
        let reversed = surface.reverses_orientation();

        let mut samples = Vec::with_capacity(lines * points);
        for row in 0..lines {
            let independent =
                sample(domain.independent_min(), domain.independent_max(), row, lines);
            for col in 0..points {
                let index = if reversed { points - 1 - col } else { col };
                let dependent =
                    sample(domain.dependent_min(), domain.dependent_max(), index, points);
                samples.push(surface.evaluate(independent, dependent)?);
            }
        }

        Ok(Grid {
            number_of_lines: lines,
            number_of_points: points,
            points: samples,
        })
    }
}

/// Value of sample `index` of `count` uniform samples over `[min, max]`.
#[allow(clippy::cast_precision_loss)]
fn sample(min: f64, max: f64, index: usize, count: usize) -> f64 {
    if index + 1 == count {
        return max;
    }
    let step = (max - min) / (count - 1) as f64;
    min + index as f64 * step
}
