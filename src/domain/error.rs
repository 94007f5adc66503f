use super::FaceId;
use std::fmt;

/// Errors raised while constructing a [`TileGrid`](super::TileGrid).
/// Both are configuration mistakes; there is nothing to retry at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// `rows * columns` is zero, odd, or not `2 * face_count`
    InvalidGridSize {
        rows: usize,
        columns: usize,
        face_count: usize,
    },
    /// An explicit face list carries a face other than exactly twice
    UnpairedFace { face: FaceId, count: usize },
    /// An explicit face list uses the number reserved for the tile back
    ReservedFace,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidGridSize {
                rows,
                columns,
                face_count,
            } => write!(
                f,
                "invalid grid size: {rows}x{columns} tiles cannot hold {face_count} pairs"
            ),
            GridError::UnpairedFace { face, count } => {
                write!(f, "{face} appears {count} times, expected exactly 2")
            }
            GridError::ReservedFace => write!(f, "{} is reserved for the tile back", FaceId::BACK),
        }
    }
}

impl std::error::Error for GridError {}
