use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cluster {cluster} is out of range (cluster count {count})")]
    OutOfRange { cluster: usize, count: usize },

    #[error("leaves are locked once the first cluster has been merged")]
    LeavesLocked,

    #[error("cluster {0} cannot be merged with itself")]
    SelfMerge(usize),

    #[error("cluster {0} has already been merged into another cluster")]
    AlreadyMerged(usize),

    #[error("tree has no leaves")]
    EmptyTree,

    #[error("tree has {roots} unmerged clusters, expected a single root")]
    Unmerged { roots: usize },

    #[error("roi bitfield has {actual} entries, expected {expected}")]
    RoiLength { expected: usize, actual: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TreeError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        TreeError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
