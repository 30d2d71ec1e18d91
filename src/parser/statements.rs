use super::{ParseError, Parser};
use crate::ast::{Block, Condition, Statement};
use crate::lexer::TokenKind;

// Recursive statement parsing methods.
//
// `parse_statement` and `parse_block` are mutually recursive: IF and WHILE
// call back into `parse_block` for their nested bodies. A block never
// consumes its own terminator (END, ELSE, or end of input); the enclosing
// construct checks and consumes it.
impl<'a> Parser<'a> {
    /// Parse a single statement: IF, WHILE, or a bare identifier call
    pub(super) fn parse_statement(&mut self, depth: usize) -> Result<Statement, ParseError> {
        self.check_depth(depth)?;

        let token = self.current_token();
        match token.kind {
            TokenKind::If => self.parse_if(depth + 1),
            TokenKind::While => self.parse_while(depth + 1),
            TokenKind::Identifier => Ok(self.parse_call()),
            _ => Err(ParseError::unexpected_token(
                "IF, WHILE, or an instruction name",
                token,
            )),
        }
    }

    /// Parse statements into a Block until the front token is a block
    /// terminator. The terminator itself is left in the stream.
    pub(super) fn parse_block(&mut self, depth: usize) -> Result<Block, ParseError> {
        self.check_depth(depth)?;

        let mut block = Block::new();
        loop {
            match self.peek_kind() {
                TokenKind::End | TokenKind::Else | TokenKind::Eof => break,
                _ => block.push(self.parse_statement(depth + 1)?),
            }
        }
        Ok(block)
    }

    /// IF <condition> THEN <block> [ELSE <block>] END IF
    fn parse_if(&mut self, depth: usize) -> Result<Statement, ParseError> {
        self.consume(TokenKind::If, "IF")?;

        let condition = self.parse_condition()?;
        self.consume(TokenKind::Then, "THEN")?;

        let then_block = self.parse_block(depth + 1)?;

        // ELSE is the sole discriminator between If and IfElse
        if self.peek_kind_is(TokenKind::Else) {
            self.advance();
            let else_block = self.parse_block(depth + 1)?;
            self.consume(TokenKind::End, "END")?;
            self.consume(TokenKind::If, "IF")?;
            Ok(Statement::IfElse {
                condition,
                then_block,
                else_block,
            })
        } else {
            self.consume(TokenKind::End, "END")?;
            self.consume(TokenKind::If, "IF")?;
            Ok(Statement::If {
                condition,
                then_block,
            })
        }
    }

    /// WHILE <condition> DO <block> END WHILE
    fn parse_while(&mut self, depth: usize) -> Result<Statement, ParseError> {
        self.consume(TokenKind::While, "WHILE")?;

        let condition = self.parse_condition()?;
        self.consume(TokenKind::Do, "DO")?;

        let body = self.parse_block(depth + 1)?;

        self.consume(TokenKind::End, "END")?;
        self.consume(TokenKind::While, "WHILE")?;
        Ok(Statement::While { condition, body })
    }

    /// A bare identifier is itself a complete call statement
    fn parse_call(&mut self) -> Statement {
        let name = self.current_token().lexeme.clone();
        self.advance();
        Statement::Call(name)
    }

    /// Validate the front token against the closed condition set
    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let token = self.current_token();
        let condition = Condition::from_name(&token.lexeme)
            .ok_or_else(|| ParseError::invalid_condition(token))?;
        self.advance();
        Ok(condition)
    }
}
