use std::iter::Peekable;
use std::str::CharIndices;

use crate::ast::Condition;

// Token types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords (10 total)
    Program,
    Is,
    Instruction,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,

    // A legal BL identifier (instruction or condition name)
    Identifier,

    // A word that is neither a keyword nor a legal identifier
    Error,

    // End-of-input sentinel, always the last token in a stream
    Eof,
}

/// BL keywords in their exact surface spelling.
pub const KEYWORDS: [&str; 10] = [
    "PROGRAM",
    "IS",
    "INSTRUCTION",
    "BEGIN",
    "END",
    "IF",
    "THEN",
    "ELSE",
    "WHILE",
    "DO",
];

/// Primitive instruction names reserved by the language. Both the hyphenated
/// surface spellings and the unhyphenated variants are reserved.
pub const PRIMITIVES: [&str; 7] = [
    "move",
    "turn-left",
    "turnleft",
    "turn-right",
    "turnright",
    "infect",
    "skip",
];

/// Returns true iff `word` is a BL keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true iff `word` is a legal BL identifier: an ASCII letter
/// followed by letters, digits, or hyphens, and not a keyword.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let head_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    head_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !is_keyword(word)
}

/// Returns true iff `word` names a member of the closed condition set.
pub fn is_condition(word: &str) -> bool {
    Condition::from_name(word).is_some()
}

/// Returns true iff `word` names a primitive instruction.
pub fn is_primitive(word: &str) -> bool {
    PRIMITIVES.contains(&word)
}

fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "PROGRAM" => Some(TokenKind::Program),
        "IS" => Some(TokenKind::Is),
        "INSTRUCTION" => Some(TokenKind::Instruction),
        "BEGIN" => Some(TokenKind::Begin),
        "END" => Some(TokenKind::End),
        "IF" => Some(TokenKind::If),
        "THEN" => Some(TokenKind::Then),
        "ELSE" => Some(TokenKind::Else),
        "WHILE" => Some(TokenKind::While),
        "DO" => Some(TokenKind::Do),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,   // 1-indexed
    pub column: usize, // 1-indexed
}

impl Token {
    /// Rendering of this token for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// An ordered, front-consumable token stream. Indexing past the end yields
/// the final token, which is always the `Eof` sentinel.
#[derive(Debug, Clone)]
pub struct Tokens {
    pub list: Vec<Token>,
}

impl Tokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { list: tokens }
    }

    pub fn peek_kind(&self, index: usize) -> TokenKind {
        match self.list.get(index) {
            Some(token) => token.kind,
            _ => TokenKind::Eof,
        }
    }

    pub fn get(&self, index: usize) -> &Token {
        self.list.get(index).unwrap_or(self.list.last().unwrap())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub pos: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Lexical error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

// Lexer

pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
    limits: &'a crate::limits::CompilerLimits,
    token_count: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(
        source: &'a str,
        limits: &'a crate::limits::CompilerLimits,
    ) -> Result<Self, LexError> {
        // Check input size limit
        if source.len() > limits.max_input_size {
            return Err(LexError {
                message: format!(
                    "Input too large: {} bytes (max: {} bytes)",
                    source.len(),
                    limits.max_input_size
                ),
                line: 1,
                column: 1,
                pos: 0,
            });
        }

        Ok(Self {
            chars: source.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
            limits,
            token_count: 0,
        })
    }

    // Character navigation methods

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn consume_char(&mut self) -> Option<char> {
        if let Some((pos, ch)) = self.chars.next() {
            self.pos = pos + ch.len_utf8();

            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }

            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.consume_char();
            } else {
                break;
            }
        }
    }

    // Main tokenization method

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        // Check token count limit before creating new token
        if self.token_count >= self.limits.max_token_count {
            return Err(LexError {
                message: format!(
                    "Token limit exceeded: {} tokens (max: {})",
                    self.token_count, self.limits.max_token_count
                ),
                line: self.line,
                column: self.column,
                pos: self.pos,
            });
        }

        self.skip_whitespace();

        let start_line = self.line;
        let start_column = self.column;

        // A BL token is a maximal run of non-whitespace characters
        let mut word = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            self.consume_char();
        }

        let kind = if word.is_empty() {
            TokenKind::Eof
        } else if let Some(kind) = keyword_kind(&word) {
            kind
        } else if is_identifier(&word) {
            if word.len() > self.limits.max_identifier_length {
                return Err(LexError {
                    message: format!(
                        "Identifier too long: {} bytes (max: {})",
                        word.len(),
                        self.limits.max_identifier_length
                    ),
                    line: start_line,
                    column: start_column,
                    pos: self.pos,
                });
            }
            TokenKind::Identifier
        } else {
            TokenKind::Error
        };

        self.token_count += 1;

        Ok(Token {
            kind,
            lexeme: word,
            line: start_line,
            column: start_column,
        })
    }
}

/// Tokenize `source` into a stream ending with the `Eof` sentinel.
pub fn lex(
    source: &str,
    limits: &crate::limits::CompilerLimits,
) -> Result<Tokens, LexError> {
    let mut lexer = Lexer::new(source, limits)?;
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(Tokens::new(tokens))
}
