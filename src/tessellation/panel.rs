use crate::error::{MeshError, Result};
use crate::math::{Point3, Vector3, PANEL_DEGENERACY_TOLERANCE};

/// The four corner points of a quadrilateral panel.
///
/// The first index is the row offset, the second the column offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelCorners {
    pub p00: Point3,
    pub p10: Point3,
    pub p01: Point3,
    pub p11: Point3,
}

/// A quadrilateral panel with its derived geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    row: usize,
    col: usize,
    corners: PanelCorners,
    centroid: Point3,
    normal: Vector3,
    area: f64,
    degenerate: bool,
}

impl Panel {
    /// Row index of the panel.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index of the panel.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn corners(&self) -> &PanelCorners {
        &self.corners
    }

    /// Arithmetic mean of the four corners.
    #[must_use]
    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }

    /// Outward unit normal, or the zero vector for a degenerate panel.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Panel area, zero for a degenerate panel.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Returns `true` if the panel diagonals are parallel (e.g. collapsed at a pole).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Computes centroid, normal and area of the panel at `(row, col)`.
///
/// Normal and area both come from the diagonal cross product
/// `(P11 - P00) x (P01 - P10)`: the area is half its magnitude, which is exact
/// for planar quadrilaterals and an approximation for warped ones.
pub struct PanelGeometry {
    row: usize,
    col: usize,
    corners: PanelCorners,
}

impl PanelGeometry {
    /// Creates a new `PanelGeometry` computation.
    #[must_use]
    pub fn new(row: usize, col: usize, corners: PanelCorners) -> Self {
        Self { row, col, corners }
    }

    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let c = &self.corners;
        Point3::from((c.p00.coords + c.p10.coords + c.p01.coords + c.p11.coords) / 4.0)
    }

    /// The unnormalized diagonal cross product.
    #[must_use]
    pub fn diagonal_cross(&self) -> Vector3 {
        let c = &self.corners;
        (c.p11 - c.p00).cross(&(c.p01 - c.p10))
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.diagonal_cross().norm()
    }

    /// Returns the unit normal.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegeneratePanel`] if the diagonals are parallel or
    /// of zero length.
    pub fn unit_normal(&self) -> Result<Vector3> {
        let c = &self.corners;
        let cross = self.diagonal_cross();
        let scale = (c.p11 - c.p00).norm() * (c.p01 - c.p10).norm();
        let len = cross.norm();
        if len <= PANEL_DEGENERACY_TOLERANCE * scale {
            return Err(MeshError::DegeneratePanel {
                row: self.row,
                col: self.col,
            }
            .into());
        }
        Ok(cross / len)
    }

    /// Executes the computation. Degenerate panels are kept with zero area
    /// and a zero normal.
    #[must_use]
    pub fn execute(&self) -> Panel {
        let centroid = self.centroid();
        let (normal, area, degenerate) = match self.unit_normal() {
            Ok(normal) => (normal, self.area(), false),
            Err(_) => (Vector3::zeros(), 0.0, true),
        };
        Panel {
            row: self.row,
            col: self.col,
            corners: self.corners,
            centroid,
            normal,
            area,
            degenerate,
        }
    }
}
