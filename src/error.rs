use std::path::PathBuf;

/// A robber line that names a tile or resource we cannot read.
///
/// Both tokens are kept verbatim so the offending line can be found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown resource {resource:?} (tile token {tile:?})")]
    UnknownResource { tile: String, resource: String },

    #[error("unreadable tile number {tile:?} (resource token {resource:?})")]
    BadTile { tile: String, resource: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("malformed robber line {line_no}: {source}")]
    MalformedRobberLine {
        line_no: usize,
        #[source]
        source: ParseError,
    },

    /// Same as `MalformedRobberLine`, numbered by game log message
    /// rather than by line of the input file.
    #[error("malformed robber message {message_no}: {source}")]
    MalformedRobberMessage {
        message_no: usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to open roll log {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read roll log")]
    Io(#[from] std::io::Error),
}

impl AnalyzeError {
    /// Renumbers a robber error for input that was split into messages
    pub fn into_message(self) -> Self {
        match self {
            AnalyzeError::MalformedRobberLine { line_no, source } => {
                AnalyzeError::MalformedRobberMessage {
                    message_no: line_no,
                    source,
                }
            }
            other => other,
        }
    }
}
