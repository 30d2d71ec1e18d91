use super::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

// Parser helper methods
impl<'a> super::Parser<'a> {
    // Helper: Check recursion depth limit
    pub(super) fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        if depth >= self.limits.max_nesting_depth {
            return Err(ParseError::from_token(
                ParseErrorKind::NestingTooDeep,
                format!(
                    "Statement nesting too deep: {} levels (max {})",
                    depth, self.limits.max_nesting_depth
                ),
                self.current_token(),
            ));
        }
        Ok(())
    }

    /// Helper: Consume a specific token kind or error
    pub(super) fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        let token = self.current_token();
        if token.kind != kind {
            return Err(ParseError::unexpected_token(expected, token));
        }
        self.advance();
        Ok(())
    }

    /// Helper: Consume an identifier token, returning its text.
    /// `role` names the position for the error message (program name,
    /// instruction name, ...).
    pub(super) fn consume_identifier(&mut self, role: &str) -> Result<String, ParseError> {
        let token = self.current_token();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::invalid_identifier(role, token));
        }
        let name = token.lexeme.clone();
        self.advance();
        Ok(name)
    }

    /// Helper: Advance to the next token
    pub(super) fn advance(&mut self) {
        self.current = (self.current + 1).min(self.tokens.len());
    }

    /// Helper: peek current token kind
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.tokens.peek_kind(self.current)
    }

    pub(super) fn peek_kind_is(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    // Helper: Get current token
    pub(super) fn current_token(&self) -> &Token {
        self.tokens.get(self.current)
    }
}
