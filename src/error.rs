use thiserror::Error;

/// Top-level error type for the panel meshing engine.
#[derive(Debug, Error)]
pub enum PanelMeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to surface configuration and evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid surface configuration: {0}")]
    InvalidConfiguration(String),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to grid sampling and panel queries.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(
        "mesh resolution {number_of_lines} x {number_of_points} is invalid, both must be at least 2"
    )]
    InvalidResolution {
        number_of_lines: usize,
        number_of_points: usize,
    },

    #[error("index ({row}, {col}) is out of range for a {rows} x {cols} array")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("panel ({row}, {col}) is degenerate")]
    DegeneratePanel { row: usize, col: usize },
}

/// Convenience type alias for results using [`PanelMeshError`].
pub type Result<T> = std::result::Result<T, PanelMeshError>;
