//! Error types shared by the graph algorithms in this crate.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for min-cut operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a graph or estimating its minimum cut.
#[derive(Error, Debug)]
pub enum Error {
    /// At least one contraction trial is required
    #[error("invalid trial count {0}: at least one trial is required")]
    InvalidTrialCount(usize),

    /// A cut needs two non-empty sides
    #[error("graph has {0} vertices; a cut needs at least 2")]
    TooFewVertices(usize),

    /// Adjacency or degree table does not have one entry per vertex
    #[error("expected {expected} vertices, got {adjacency} adjacency lists and {degree} degrees")]
    ShapeMismatch {
        expected: usize,
        adjacency: usize,
        degree: usize,
    },

    /// Adjacency entry references a vertex outside `[0, n)`
    #[error("vertex {neighbor} listed as neighbor of {vertex} is out of range for {n} vertices")]
    VertexOutOfRange {
        vertex: usize,
        neighbor: usize,
        n: usize,
    },

    /// A vertex lists itself as a neighbor
    #[error("vertex {0} has a self-loop")]
    SelfLoop(usize),

    /// Declared degree disagrees with the adjacency list length
    #[error("vertex {vertex} declares degree {declared} but lists {actual} neighbors")]
    DegreeMismatch {
        vertex: usize,
        declared: usize,
        actual: usize,
    },

    /// Edge listed a different number of times on each endpoint
    #[error("edge ({0}, {1}) is not listed symmetrically")]
    AsymmetricEdge(usize, usize),

    /// Declared edge count violates the handshake invariant
    #[error("declared {declared} edges but degrees sum to {degree_sum}")]
    EdgeCountMismatch { declared: usize, degree_sum: usize },

    /// Malformed adjacency-list input
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Failure reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Working copy of the graph could not be allocated
    #[error("failed to allocate working graph: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidTrialCount(0).to_string(),
            "invalid trial count 0: at least one trial is required"
        );
        assert_eq!(
            Error::parse(3, "bad token").to_string(),
            "line 3: bad token"
        );
        let err = Error::VertexOutOfRange {
            vertex: 1,
            neighbor: 7,
            n: 4,
        };
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
