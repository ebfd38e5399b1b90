use std::fmt;

/// Errors raised while building or seeding a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A seed pattern does not fit inside the grid
    SizeMismatch {
        pattern_rows: usize,
        pattern_cols: usize,
        height: usize,
        width: usize,
    },
    /// Zero width or height, or a cell count that does not fit in memory
    InvalidDimensions { width: usize, height: usize },
    /// A pattern row holds unknown markers or is too long
    ///
    /// `line` is 1-based.
    MalformedInput { line: usize, reason: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                pattern_rows,
                pattern_cols,
                height,
                width,
            } => write!(
                f,
                "pattern of {}x{} (cols x rows) does not fit in a {}x{} grid",
                pattern_cols, pattern_rows, width, height
            ),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "malformed pattern row {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for GridError {}
