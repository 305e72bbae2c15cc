use thiserror::Error;

/// Errors that can occur while building or emitting Ziggurat tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("math domain error at layer {layer}: ln argument {argument} is outside (0, 1)")]
    Domain { layer: usize, argument: f64 },

    #[error("table invariant violated at index {index}: {reason}")]
    Invariant { index: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
