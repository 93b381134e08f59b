use tracing::{debug, trace, warn};

use crate::error::{MeshError, Result};
use crate::geometry::surface::Surface;

use super::{Grid, MeshResolution, Panel, PanelCorners, PanelGeometry, SurfaceMeshBuilder};

/// An immutable quadrilateral panel mesh of a surface.
///
/// Panels are stored row-major over `[0, lines - 2] x [0, points - 2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrilateralMesh {
    grid: Grid,
    panels: Vec<Panel>,
    total_area: f64,
    degenerate_panel_count: usize,
}

impl QuadrilateralMesh {
    /// Samples `surface` at `resolution` and computes every panel.
    ///
    /// Degenerate panels do not fail the build; they contribute zero area.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to evaluate a sample.
    pub fn build<S: Surface + ?Sized>(surface: &S, resolution: MeshResolution) -> Result<Self> {
        let grid = SurfaceMeshBuilder::with_resolution(resolution).execute(surface)?;

        let rows = grid.number_of_lines() - 1;
        let cols = grid.number_of_points() - 1;
        let mut panels = Vec::with_capacity(rows * cols);
        let mut total_area = 0.0;
        let mut degenerate_panel_count = 0;
        for row in 0..rows {
            for col in 0..cols {
                let corners = PanelCorners {
                    p00: *grid.at(row, col),
                    p10: *grid.at(row + 1, col),
                    p01: *grid.at(row, col + 1),
                    p11: *grid.at(row + 1, col + 1),
                };
                let panel = PanelGeometry::new(row, col, corners).execute();
                if panel.is_degenerate() {
                    trace!(row, col, "degenerate panel");
                    degenerate_panel_count += 1;
                }
                total_area += panel.area();
                panels.push(panel);
            }
        }

        if degenerate_panel_count * 2 >= panels.len() {
            warn!(
                degenerate = degenerate_panel_count,
                panels = panels.len(),
                "degenerate panels dominate the mesh"
            );
        }
        debug!(
            lines = resolution.number_of_lines(),
            points = resolution.number_of_points(),
            panels = panels.len(),
            total_area,
            "built quadrilateral mesh"
        );

        Ok(Self {
            grid,
            panels,
            total_area,
            degenerate_panel_count,
        })
    }

    /// Returns the sampled grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.grid.number_of_lines()
    }

    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.grid.number_of_points()
    }

    /// Number of panel rows, `lines - 1`.
    #[must_use]
    pub fn panel_rows(&self) -> usize {
        self.grid.number_of_lines() - 1
    }

    /// Number of panel columns, `points - 1`.
    #[must_use]
    pub fn panel_cols(&self) -> usize {
        self.grid.number_of_points() - 1
    }

    /// Sum of all panel areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    #[must_use]
    pub fn degenerate_panel_count(&self) -> usize {
        self.degenerate_panel_count
    }

    /// Returns the panel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] unless `row <= lines - 2` and `col <= points - 2`.
    pub fn panel(&self, row: usize, col: usize) -> Result<&Panel> {
        let rows = self.panel_rows();
        let cols = self.panel_cols();
        if row >= rows || col >= cols {
            return Err(MeshError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            }
            .into());
        }
        Ok(&self.panels[row * cols + col])
    }

    /// Iterates over all panels in row-major order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }
}
