use thiserror::Error;

/// Exit code for input files that cannot be read.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for malformed input lines.
pub const EXIT_PARSE: u8 = 3;
/// Exit code for terminal/render failures.
pub const EXIT_RENDER: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// A malformed input line. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected exactly one tab between key and value, found {found}")]
    TabCount { line: usize, found: usize },

    #[error("line {line}: expected exactly one ':' in key '{key}', found {found}")]
    ColonCount { line: usize, key: String, found: usize },

    #[error("line {line}: value '{value}' is not an integer")]
    InvalidValue { line: usize, value: String },

    #[error("line {line}: unknown category '{name}' (expected Day, Hour, Month or Week Day)")]
    UnknownCategory { line: usize, name: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::TabCount { line, .. }
            | ParseError::ColonCount { line, .. }
            | ParseError::InvalidValue { line, .. }
            | ParseError::UnknownCategory { line, .. } => *line,
        }
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::new(EXIT_PARSE, format!("Malformed input: {err}"))
    }
}
