use crate::lexer::Token;

/// Fatal parse failure taxonomy. Every structural mismatch aborts the whole
/// parse; there is no recovery or resynchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Front token does not match what the current grammar state requires
    UnexpectedToken,
    /// A name position holds a non-identifier or a reserved word
    InvalidIdentifier,
    /// A condition position holds a token outside the closed condition set
    InvalidCondition,
    /// An opening/closing name pair (instruction or program) disagree
    NameMismatch,
    /// An instruction name collides with an earlier one in the same context
    DuplicateInstruction,
    /// A user instruction name equals a primitive instruction name
    ReservedName,
    /// Tokens remain after the program's closing name
    TrailingInput,
    /// Statement nesting exceeded the configured limit
    NestingTooDeep,
}

// Parse error
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub(super) fn from_token(kind: ParseErrorKind, message: String, token: &Token) -> Self {
        Self {
            kind,
            message,
            line: token.line,
            column: token.column,
        }
    }

    pub(super) fn unexpected_token(expected: &str, token: &Token) -> Self {
        Self::from_token(
            ParseErrorKind::UnexpectedToken,
            format!("Expected {}, found {}", expected, token.describe()),
            token,
        )
    }

    pub(super) fn invalid_identifier(role: &str, token: &Token) -> Self {
        Self::from_token(
            ParseErrorKind::InvalidIdentifier,
            format!("Expected identifier for {}, found {}", role, token.describe()),
            token,
        )
    }

    pub(super) fn invalid_condition(token: &Token) -> Self {
        Self::from_token(
            ParseErrorKind::InvalidCondition,
            format!("Expected condition, found {}", token.describe()),
            token,
        )
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
