use thiserror::Error;

/// Contract violations rejected by the engine before any mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LifeError {
    #[error("grid extent {rows}x{cols} must be positive in both dimensions")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
    #[error("probability {probability} must be between 0.0 and 1.0")]
    InvalidArgument { probability: f64 },
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = LifeError::OutOfBounds {
            row: -1,
            col: 3,
            rows: 36,
            cols: 36,
        };
        assert_eq!(err.to_string(), "cell (-1, 3) is outside the 36x36 grid");

        let err = LifeError::InvalidArgument { probability: 1.5 };
        assert_eq!(err.to_string(), "probability 1.5 must be between 0.0 and 1.0");
    }
}
