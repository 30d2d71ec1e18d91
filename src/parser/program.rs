use super::error::{ParseError, ParseErrorKind};
use super::Parser;
use crate::ast::{Block, Program};
use crate::lexer::{self, TokenKind};

// Program-level parsing: the PROGRAM ... IS ... BEGIN ... END shell.
//
// Grammar: PROGRAM <name> IS { <instruction> } BEGIN <block> END <name>
// where <instruction> is INSTRUCTION <name> IS <block> END <name>.
// The grammar is LL(1): each state has exactly one legal continuation and
// any other token is a fatal error with no backtracking.
impl<'a> Parser<'a> {
    pub(super) fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.consume(TokenKind::Program, "PROGRAM")?;
        let name = self.consume_identifier("program name")?;
        self.consume(TokenKind::Is, "IS")?;

        let mut context = std::collections::BTreeMap::new();
        while self.peek_kind_is(TokenKind::Instruction) {
            let name_token = self.tokens.get(self.current + 1).clone();
            let (instruction_name, body) = self.parse_instruction()?;

            if context.contains_key(&instruction_name) {
                return Err(ParseError::from_token(
                    ParseErrorKind::DuplicateInstruction,
                    format!("Duplicate instruction name: '{}'", instruction_name),
                    &name_token,
                ));
            }
            context.insert(instruction_name, body);
        }

        self.consume(TokenKind::Begin, "BEGIN")?;
        let body = self.parse_block(0)?;
        self.consume(TokenKind::End, "END")?;

        let closing_token = self.current_token().clone();
        let closing_name = self.consume_identifier("program closing name")?;
        if closing_name != name {
            return Err(ParseError::from_token(
                ParseErrorKind::NameMismatch,
                format!(
                    "Program name mismatch: expected '{}', found '{}'",
                    name, closing_name
                ),
                &closing_token,
            ));
        }

        // Only the end-of-input sentinel may remain
        if !self.peek_kind_is(TokenKind::Eof) {
            return Err(ParseError::from_token(
                ParseErrorKind::TrailingInput,
                format!(
                    "Unexpected input after program end: {}",
                    self.current_token().describe()
                ),
                self.current_token(),
            ));
        }

        Ok(Program {
            name,
            context,
            body,
        })
    }

    /// INSTRUCTION <name> IS <block> END <name>
    fn parse_instruction(&mut self) -> Result<(String, Block), ParseError> {
        self.consume(TokenKind::Instruction, "INSTRUCTION")?;

        let name_token = self.current_token().clone();
        let name = self.consume_identifier("instruction name")?;
        if lexer::is_primitive(&name) {
            return Err(ParseError::from_token(
                ParseErrorKind::ReservedName,
                format!(
                    "Instruction name cannot be a primitive instruction: '{}'",
                    name
                ),
                &name_token,
            ));
        }

        self.consume(TokenKind::Is, "IS")?;
        let body = self.parse_block(0)?;
        self.consume(TokenKind::End, "END")?;

        let closing_token = self.current_token().clone();
        let closing_name = self.consume_identifier("instruction closing name")?;
        if closing_name != name {
            return Err(ParseError::from_token(
                ParseErrorKind::NameMismatch,
                format!(
                    "Instruction name mismatch: expected '{}', found '{}'",
                    name, closing_name
                ),
                &closing_token,
            ));
        }

        Ok((name, body))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{parse, ParseError, ParseErrorKind};
    use crate::ast::Program;
    use crate::lexer::lex;
    use crate::limits::CompilerLimits;

    fn to_program(source: &str) -> Result<Program, ParseError> {
        let tokens = lex(source, &CompilerLimits::default()).unwrap();
        parse(&tokens, CompilerLimits::default())
    }

    fn to_program_string(source: &str) -> Result<String, ParseError> {
        Ok(to_program(source)?.tree_string())
    }

    #[test]
    fn test_empty_program() {
        let program = to_program("PROGRAM Test IS BEGIN END Test").unwrap();
        assert_eq!(program.name, "Test");
        assert!(program.context.is_empty());
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_program_with_body() {
        let tree = to_program_string(
            "PROGRAM Test IS BEGIN IF next-is-wall THEN turn-left ELSE move END IF END Test",
        )
        .unwrap();

        let expected = "\
Program 'Test'
  Body
    Block
      IfElse 'next-is-wall'
        Block
          Call 'turn-left'
        Block
          Call 'move'
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_program_with_instructions() {
        let tree = to_program_string(
            "PROGRAM Virus IS \
             INSTRUCTION wander IS move turn-left END wander \
             INSTRUCTION attack IS WHILE next-is-enemy DO infect END WHILE END attack \
             BEGIN wander attack END Virus",
        )
        .unwrap();

        let expected = "\
Program 'Virus'
  Instruction 'attack'
    Block
      While 'next-is-enemy'
        Block
          Call 'infect'
  Instruction 'wander'
    Block
      Call 'move'
      Call 'turn-left'
  Body
    Block
      Call 'wander'
      Call 'attack'
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_missing_program_keyword() {
        let err = to_program("BEGIN END Test").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_invalid_program_name() {
        let err = to_program("PROGRAM 2bad IS BEGIN END 2bad").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIdentifier);
    }

    #[test]
    fn test_program_name_mismatch() {
        let err = to_program("PROGRAM X IS BEGIN END Y").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NameMismatch);
    }

    #[test]
    fn test_instruction_name_mismatch() {
        let err =
            to_program("PROGRAM X IS INSTRUCTION foo IS move END bar BEGIN END X").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NameMismatch);
    }

    #[test]
    fn test_duplicate_instruction_is_rejected() {
        let err = to_program(
            "PROGRAM X IS \
             INSTRUCTION foo IS move END foo \
             INSTRUCTION foo IS infect END foo \
             BEGIN END X",
        )
        .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateInstruction);
    }

    #[test]
    fn test_primitive_shadowing_is_rejected() {
        let err =
            to_program("PROGRAM X IS INSTRUCTION move IS skip END move BEGIN END X").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ReservedName);

        // The unhyphenated spelling is reserved too
        let err = to_program("PROGRAM X IS INSTRUCTION turnleft IS skip END turnleft BEGIN END X")
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ReservedName);
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let err = to_program("PROGRAM X IS BEGIN END X move").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingInput);
    }

    #[test]
    fn test_unterminated_program() {
        let err = to_program("PROGRAM X IS BEGIN move").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_error_position_reported() {
        let err = to_program("PROGRAM X IS\nBEGIN\nTHEN\nEND X").unwrap_err();
        assert_eq!((err.line, err.column), (3, 1));
    }
}
