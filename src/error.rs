use std::path::PathBuf;

/// Invalid graph handed to a graph constructor or to the search engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// the same vertex is listed twice by the graph
    #[error("vertex {0} is listed more than once")]
    DuplicateVertex(String),

    /// a vertex is adjacent to itself
    #[error("vertex {0} is adjacent to itself")]
    SelfLoop(String),

    /// u sees v but v does not see u
    #[error("adjacency is not symmetric between {u} and {v}")]
    AsymmetricAdjacency {
        /// vertex reporting the edge
        u: String,
        /// vertex missing the edge
        v: String,
    },

    /// an edge refers to a vertex the graph does not contain
    #[error("unknown vertex {0}")]
    UnknownVertex(String),
}

/// Failure while loading a graph definition file.
#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    /// the path is missing or is a directory
    #[error("path does not lead to a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// only `.txt` graph definitions are read
    #[error("unsupported file type (expected .txt): {}", .0.display())]
    UnsupportedExtension(PathBuf),

    /// the file exists but could not be read
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        /// file being read
        path: PathBuf,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// a non-ignored line appears before `%Vertices%`
    #[error("line {line}: graph definition must start with %Vertices%")]
    ContentBeforeVertices {
        /// 1-based line number
        line: usize,
    },

    /// `%Vertices%` reopened once connections started
    #[error("line {line}: vertices declared after connections")]
    VerticesAfterConnections {
        /// 1-based line number
        line: usize,
    },

    /// token does not split into exactly two names on `-`
    #[error("line {line}: malformed connection definition {token:?}")]
    MalformedConnection {
        /// 1-based line number
        line: usize,
        /// offending token
        token: String,
    },

    /// edge endpoint was never declared
    #[error("line {line}: connection refers to undeclared vertex {name:?}")]
    UnknownVertex {
        /// 1-based line number
        line: usize,
        /// vertex name
        name: String,
    },

    /// edge from a vertex to itself
    #[error("line {line}: vertex {name:?} connected to itself")]
    SelfLoop {
        /// 1-based line number
        line: usize,
        /// vertex name
        name: String,
    },

    /// the file ends before any %Connections% marker
    #[error("graph definition file malformed: missing %Connections% section")]
    MissingConnections,
}

/// Failure while exporting results of the command line tool.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// the output file could not be written
    #[error("couldn't write {path}: {source}")]
    Io {
        /// output file
        path: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },

    /// serde_json failure
    #[error("couldn't serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
