use thiserror::Error;

/// Top-level error type for mesh construction and animation.
#[derive(Debug, Error)]
pub enum ZigmeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Coarse classification of a [`ZigmeshError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad geometric parameters or mismatched inputs.
    InvalidArgument,
    /// The request exceeds a configured resource bound.
    ResourceExceeded,
    /// A collaborator (e.g. a renderer) failed.
    Failed,
}

impl ZigmeshError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(_) | Self::Operation(OperationError::InvalidArgument(_)) => {
                ErrorKind::InvalidArgument
            }
            Self::Operation(OperationError::ResourceExceeded { .. }) => {
                ErrorKind::ResourceExceeded
            }
            Self::Operation(OperationError::Failed(_)) => ErrorKind::Failed,
        }
    }
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to construction and update operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{requested} levels requested, limit is {limit}")]
    ResourceExceeded { requested: usize, limit: usize },

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`ZigmeshError`].
pub type Result<T> = std::result::Result<T, ZigmeshError>;
