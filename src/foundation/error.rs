/// Convenience result type used across animator5d.
pub type AnimatorResult<T> = Result<T, AnimatorError>;

/// Top-level error taxonomy used by the renderer.
///
/// Every variant is fatal at the point it is raised; nothing in the crate retries.
#[derive(thiserror::Error, Debug)]
pub enum AnimatorError {
    /// A configured field name does not exist in the dataset.
    #[error("field not found: '{field}' is not a column of the dataset")]
    FieldNotFound {
        /// The missing column name.
        field: String,
    },

    /// The dataset is empty or its weights cannot be normalized.
    #[error("degenerate data: {0}")]
    DegenerateData(String),

    /// The frame encoder is missing or failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid user-provided options or dataset shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// The render was cancelled between frames.
    #[error("rendering aborted after {frames_written} frame(s)")]
    Cancelled {
        /// Frames fully written to disk before the cancellation was observed.
        frames_written: u32,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimatorError {
    /// Build an [`AnimatorError::FieldNotFound`] value.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Build an [`AnimatorError::DegenerateData`] value.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateData(msg.into())
    }

    /// Build an [`AnimatorError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build an [`AnimatorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
