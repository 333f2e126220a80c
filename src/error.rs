use thiserror::Error;

/// Errors that can occur while parsing a recipe
#[derive(Error, Debug)]
pub enum ParseError {
    /// The string entry point was given nothing to parse
    #[error("recipe string must not be empty")]
    EmptyInput,

    /// A `>>` line without a `key: value` pair
    #[error("line {line}: invalid metadata: {content}")]
    InvalidMetadata { line: usize, content: String },

    /// A `[-` with no matching `-]` on the same line
    #[error("line {line}: unterminated block comment")]
    UnterminatedBlockComment { line: usize },

    /// Front matter that is not valid YAML
    #[error("line {line}: decoding yaml front matter: {source}")]
    FrontMatter {
        line: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// Front matter that is valid YAML but not a mapping
    #[error("line {line}: invalid front matter: {message}")]
    InvalidFrontMatter { line: usize, message: String },

    /// Failed to read the recipe
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl ParseError {
    /// The 1-based line the error originates from, when it is line-scoped
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::InvalidMetadata { line, .. }
            | ParseError::UnterminatedBlockComment { line }
            | ParseError::FrontMatter { line, .. }
            | ParseError::InvalidFrontMatter { line, .. } => Some(*line),
            ParseError::EmptyInput
            | ParseError::Io(_)
            | ParseError::Config(_)
            | ParseError::Builder(_) => None,
        }
    }
}

/// A failure inside a single line, before the line number is known
#[derive(Error, Debug)]
pub enum LineError {
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    #[error("decoding yaml front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("invalid front matter: {0}")]
    InvalidFrontMatter(String),
}

impl LineError {
    /// Attach the 1-based line number the error was found on
    pub fn at(self, line: usize) -> ParseError {
        match self {
            LineError::InvalidMetadata(content) => ParseError::InvalidMetadata { line, content },
            LineError::UnterminatedBlockComment => ParseError::UnterminatedBlockComment { line },
            LineError::FrontMatter(source) => ParseError::FrontMatter { line, source },
            LineError::InvalidFrontMatter(message) => {
                ParseError::InvalidFrontMatter { line, message }
            }
        }
    }
}
