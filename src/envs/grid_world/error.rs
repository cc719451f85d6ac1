use thiserror::Error;

/// Malformed configuration. None of these are recoverable at runtime; the
/// caller has to fix its input.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("marker '{marker}' not found in layout")]
    NotFound { marker: char },

    #[error("invalid grid value '{value}' at ({row}, {col})")]
    InvalidGridValue { value: char, row: usize, col: usize },

    #[error("layout is empty")]
    EmptyLayout,

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("layout is {actual_rows}x{actual_cols} but {rows}x{cols} was requested")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("state numbering needs a square layout, got {rows}x{cols}")]
    NonSquareLayout { rows: usize, cols: usize },

    #[error("action set is empty")]
    NoActions,

    #[error("start marker appears {count} times, expected once")]
    DuplicateStart { count: usize },

    #[error("malformed transitions: {0}")]
    MalformedTransitions(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
