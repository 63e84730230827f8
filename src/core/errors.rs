use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("could not read map file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed map at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("maze is unsolvable")]
    Unsolvable,
    #[error("invalid input: {0}")]
    Input(String),
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
