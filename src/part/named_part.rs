use std::sync::Arc;

use tracing::debug;

use crate::error::{MeshError, PanelMeshError, Result};
use crate::geometry::surface::Surface;
use crate::math::{Point3, Vector3};
use crate::tessellation::{MeshResolution, Panel, QuadrilateralMesh};

/// A named, panelled part of a vehicle geometry.
///
/// The mesh is held as an immutable [`QuadrilateralMesh`] snapshot. [`set_mesh`]
/// builds a complete replacement before swapping it in, so a failed rebuild
/// keeps the previous mesh and a partially built mesh is never observable.
/// Readers on other threads should take a [`snapshot`] and query that; the
/// part itself needs external synchronization to be mutated while shared.
///
/// [`set_mesh`]: NamedGeometryPart::set_mesh
/// [`snapshot`]: NamedGeometryPart::snapshot
#[derive(Debug, Clone, Default)]
pub struct NamedGeometryPart {
    name: String,
    mesh: Option<Arc<QuadrilateralMesh>>,
}

impl NamedGeometryPart {
    /// Creates an unnamed part with no mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a part with the given name and no mesh.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name. Has no effect on the mesh.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Meshes `surface` with `number_of_lines` samples of its independent
    /// variable and `number_of_points` samples of its dependent variable,
    /// replacing any previous mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidResolution`] if either count is below 2, or
    /// the surface's evaluation error. The previous mesh is kept on error.
    pub fn set_mesh<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        number_of_lines: usize,
        number_of_points: usize,
    ) -> Result<()> {
        let resolution = MeshResolution::new(number_of_lines, number_of_points)?;
        self.set_mesh_with(surface, resolution)
    }

    /// Meshes `surface` at `resolution`, replacing any previous mesh.
    ///
    /// # Errors
    ///
    /// Returns the surface's evaluation error. The previous mesh is kept on error.
    pub fn set_mesh_with<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        resolution: MeshResolution,
    ) -> Result<()> {
        let mesh = QuadrilateralMesh::build(surface, resolution)?;
        debug!(
            part = %self.name,
            total_area = mesh.total_area(),
            degenerate = mesh.degenerate_panel_count(),
            "mesh set"
        );
        self.mesh = Some(Arc::new(mesh));
        Ok(())
    }

    /// Returns `true` once a mesh has been set.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.mesh.is_some()
    }

    /// Returns a shared handle to the current mesh.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<QuadrilateralMesh>> {
        self.mesh.clone()
    }

    /// Total surface area, `0.0` before a mesh is set.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.mesh.as_ref().map_or(0.0, |m| m.total_area())
    }

    /// Number of lines the mesh was built with, `0` before a mesh is set.
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.mesh.as_ref().map_or(0, |m| m.number_of_lines())
    }

    /// Number of points per line the mesh was built with, `0` before a mesh is set.
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.mesh.as_ref().map_or(0, |m| m.number_of_points())
    }

    #[must_use]
    pub fn number_of_panels(&self) -> usize {
        self.mesh
            .as_ref()
            .map_or(0, |m| m.panel_rows() * m.panel_cols())
    }

    /// Returns the panel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] unless `row <= lines - 2` and
    /// `col <= points - 2`, or if no mesh has been set.
    pub fn panel(&self, row: usize, col: usize) -> Result<&Panel> {
        match &self.mesh {
            Some(mesh) => mesh.panel(row, col),
            None => Err(unbuilt(row, col)),
        }
    }

    /// Returns the centroid of panel `(row, col)`.
    ///
    /// # Errors
    ///
    /// See [`NamedGeometryPart::panel`].
    pub fn panel_centroid(&self, row: usize, col: usize) -> Result<Point3> {
        Ok(*self.panel(row, col)?.centroid())
    }

    /// Returns the outward unit normal of panel `(row, col)`; zero for a
    /// degenerate panel.
    ///
    /// # Errors
    ///
    /// See [`NamedGeometryPart::panel`].
    pub fn panel_surface_normal(&self, row: usize, col: usize) -> Result<Vector3> {
        Ok(*self.panel(row, col)?.normal())
    }

    /// Returns the area of panel `(row, col)`.
    ///
    /// # Errors
    ///
    /// See [`NamedGeometryPart::panel`].
    pub fn panel_area(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.panel(row, col)?.area())
    }

    /// Returns the grid point at `(row, col)`, with `row < lines` and `col < points`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] outside the grid or before a mesh is set.
    pub fn mesh_point(&self, row: usize, col: usize) -> Result<Point3> {
        match &self.mesh {
            Some(mesh) => mesh.grid().point(row, col).copied(),
            None => Err(unbuilt(row, col)),
        }
    }

    /// Iterates over all panels in row-major order; empty before a mesh is set.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.mesh.iter().flat_map(|m| m.panels())
    }
}

fn unbuilt(row: usize, col: usize) -> PanelMeshError {
    MeshError::IndexOutOfRange {
        row,
        col,
        rows: 0,
        cols: 0,
    }
    .into()
}
