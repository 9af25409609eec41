//! Lexical scanning of version and version range strings.
//!
//! The scanner makes a single pass over the input and produces a stream of
//! offset-tagged tokens terminated by [`TokenKind::EndOfInput`]. It knows
//! nothing about grammar: a `+` is always lexed as [`TokenKind::Plus`] and
//! the parsers decide from grammatical position whether it separates build
//! metadata or stands for "any component".

use std::fmt;

use crate::error::ParseError;

/// A single lexical unit of a version or range string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A run of ASCII digits, kept verbatim so the parser can reject
    /// leading zeros and convert without width limits.
    Number(String),
    /// A run of letters, digits, and hyphens that is not purely digits.
    Identifier(String),
    Dot,
    Hyphen,
    Plus,
    Comma,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Star,
    Caret,
    Less,
    Greater,
    Equals,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(digits) => write!(f, "number \"{digits}\""),
            TokenKind::Identifier(text) => write!(f, "identifier \"{text}\""),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Hyphen => write!(f, "'-'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::OpenBracket => write!(f, "'['"),
            TokenKind::CloseBracket => write!(f, "']'"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Caret => write!(f, "'^'"),
            TokenKind::Less => write!(f, "'<'"),
            TokenKind::Greater => write!(f, "'>'"),
            TokenKind::Equals => write!(f, "'='"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token together with its starting byte offset in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
    // Set once a pre-release or build metadata separator has been
    // consumed; hyphens then belong to identifier runs instead of
    // standing alone. Range punctuation resets it because a fresh
    // version atom may follow.
    in_suffix: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        let start = input.len() - input.trim_start().len();
        let end = input.trim_end().len();
        Tokenizer {
            input,
            pos: start.min(end),
            end,
            in_suffix: false,
        }
    }

    fn current(&self) -> Option<char> {
        self.input[self.pos..self.end].chars().next()
    }

    fn is_run_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || (c == '-' && self.in_suffix)
    }

    fn read_run(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.current() {
            if self.is_run_char(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let text = &self.input[start..self.pos];
        if text.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Number(text.to_owned())
        } else {
            TokenKind::Identifier(text.to_owned())
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let c = match self.current() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::EndOfInput,
                    offset,
                })
            }
        };

        let kind = match c {
            _ if self.is_run_char(c) => self.read_run(),
            '-' => {
                self.pos += 1;
                self.in_suffix = true;
                TokenKind::Hyphen
            }
            '+' => {
                self.pos += 1;
                self.in_suffix = true;
                TokenKind::Plus
            }
            '.' => {
                self.pos += 1;
                TokenKind::Dot
            }
            ',' | '[' | ']' | '(' | ')' | '*' | '^' | '<' | '>' | '=' => {
                self.pos += 1;
                self.in_suffix = false;
                match c {
                    ',' => TokenKind::Comma,
                    '[' => TokenKind::OpenBracket,
                    ']' => TokenKind::CloseBracket,
                    '(' => TokenKind::OpenParen,
                    ')' => TokenKind::CloseParen,
                    '*' => TokenKind::Star,
                    '^' => TokenKind::Caret,
                    '<' => TokenKind::Less,
                    '>' => TokenKind::Greater,
                    _ => TokenKind::Equals,
                }
            }
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{c}'"),
                    self.input,
                    offset,
                ))
            }
        };

        Ok(Token { kind, offset })
    }
}

/// Scans the whole input into a token stream terminated by
/// [`TokenKind::EndOfInput`]. Surrounding whitespace is ignored; interior
/// whitespace and characters outside the grammar fail with a positioned
/// error.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// A cursor over a token stream, shared by both parsers.
pub(crate) struct TokenCursor<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub(crate) fn new(input: &'a str) -> Result<Self, ParseError> {
        let tokens = tokenize(input)?;
        Ok(TokenCursor {
            input,
            tokens,
            pos: 0,
        })
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consumes and returns the current token. The terminating
    /// [`TokenKind::EndOfInput`] is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::EndOfInput {
            self.pos += 1;
        }
        token
    }

    /// An error reporting what was expected versus the current token.
    pub(crate) fn expected(&self, what: &str) -> ParseError {
        let current = self.current();
        ParseError::new(
            format!("expected {what}, found {}", current.kind),
            self.input,
            current.offset,
        )
    }

    /// An error at the current token's offset.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.input, self.current().offset)
    }

    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        if self.current().kind == TokenKind::EndOfInput {
            Ok(())
        } else {
            Err(self.expected("end of input"))
        }
    }
}
