// Parser module - splits parser into logical components
mod error;
mod helpers;
mod program;
mod statements;

// Public exports
pub use error::{ParseError, ParseErrorKind};

use crate::ast::Program;
use crate::lexer::Tokens;
use crate::limits::CompilerLimits;

// Parser structure
pub struct Parser<'a> {
    tokens: &'a Tokens,
    current: usize,
    limits: CompilerLimits,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a Tokens, limits: CompilerLimits) -> Self {
        Self {
            tokens,
            current: 0,
            limits,
        }
    }

    // Main parsing entry point
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.parse_program()
    }
}

// Public API function
pub fn parse(tokens: &Tokens, limits: CompilerLimits) -> Result<Program, ParseError> {
    let parser = Parser::new(tokens, limits);
    parser.parse()
}
