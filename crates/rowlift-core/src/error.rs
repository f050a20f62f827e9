use thiserror::Error;

/// Failures from host-side row bookkeeping. Gesture validity problems are
/// not errors; they cancel the gesture silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
