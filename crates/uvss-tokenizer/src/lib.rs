//! Lexer for UVSS source text.
//!
//! Every token owns the trivia in front of it and the trivia after it up to the
//! end of its line, so the text of a token stream concatenates back to the
//! input exactly.

mod cursor;

use cursor::Cursor;
use text_size::{TextLen as _, TextRange, TextSize};
use uvss_errors::{Diagnostic, DiagnosticCode, Diagnostics};
pub use uvss_syntax::SyntaxKind;
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{Trivia, TriviaPiece, TriviaPieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub leading: Trivia,
    pub kind: SyntaxKind,
    /// Range of the token text, trivia excluded.
    pub range: TextRange,
    pub trailing: Trivia,
}

impl Token {
    /// Start of the leading trivia.
    pub fn full_start(&self) -> TextSize {
        self.range.start() - self.leading.len()
    }

    /// End of the trailing trivia.
    pub fn full_end(&self) -> TextSize {
        self.range.end() + self.trailing.len()
    }
}

/// The whole token stream of a text, ending in exactly one `EOF`.
#[derive(Debug)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

pub fn tokenize(text: &str) -> Tokenized {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::with_capacity(text.len() / 4);
    loop {
        let token = tokenizer.next_token();
        let is_eof = token.kind == EOF;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Tokenized { tokens, diagnostics: tokenizer.finish() }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TriviaPosition {
    Leading,
    Trailing,
}

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    trivia_pieces: Vec<TriviaPiece>,
    diagnostics: Diagnostics,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: Cursor::new(text),
            trivia_pieces: Vec::with_capacity(4),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn finish(self) -> Diagnostics {
        self.diagnostics
    }

    fn offset(&self) -> TextSize {
        self.text.text_len() - self.cursor.len()
    }

    /// Range covered since the last `reset_pos_within_token`.
    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    /// Lexes the next token. Once the input is exhausted this keeps returning
    /// an empty `EOF` token.
    pub fn next_token(&mut self) -> Token {
        self.trivia(TriviaPosition::Leading);
        let trailing_start = self.trivia_pieces.len();
        let (kind, range) = self.syntax_kind();
        if kind != EOF {
            self.trivia(TriviaPosition::Trailing);
        }

        let (leading, trailing) = self.trivia_pieces.split_at(trailing_start);
        let leading = Trivia::new(leading);
        let trailing = Trivia::new(trailing);

        self.trivia_pieces.clear();
        Token { leading, kind, range, trailing }
    }

    fn trivia(&mut self, position: TriviaPosition) {
        loop {
            let kind = match self.cursor.peek() {
                _ if self.cursor.is_eof() => break,
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| c != '\n' && c != '\r');
                    TriviaPieceKind::SingleLineComment
                }
                '/' if self.cursor.second() == '*' => {
                    self.multi_line_comment();
                    TriviaPieceKind::MultiLineComment
                }
                '\n' | '\r' if position == TriviaPosition::Trailing => break,
                '\n' => {
                    self.cursor.advance();
                    TriviaPieceKind::EndOfLine
                }
                '\r' => {
                    self.cursor.advance();
                    if self.cursor.matches('\n') {
                        self.cursor.advance();
                    }
                    TriviaPieceKind::EndOfLine
                }
                c if c.is_whitespace() => {
                    self.cursor.advance_while(|c| c.is_whitespace() && c != '\n' && c != '\r');
                    TriviaPieceKind::Whitespace
                }
                _ => break,
            };

            self.trivia_pieces.push(TriviaPiece::new(kind, self.cursor.pos_within_token()));
            self.cursor.reset_pos_within_token();
        }
    }

    fn multi_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match self.cursor.advance() {
                '*' if self.cursor.matches('/') => {
                    self.cursor.advance();
                    return;
                }
                _ if self.cursor.is_eof() => break,
                _ => {}
            }
        }
        self.diagnostics.push(Diagnostic::error(
            DiagnosticCode::UnterminatedComment,
            "unterminated multi-line comment",
            self.range(),
        ));
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        if self.cursor.is_eof() {
            return (EOF, TextRange::empty(self.offset()));
        }

        let kind = match self.cursor.advance() {
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            ':' => COLON,
            ';' => SEMICOLON,
            ',' => COMMA,
            '.' => PERIOD,
            '#' => HASH,
            '@' => AT_SIGN,
            '*' => ASTERISK,
            '!' => EXCLAMATION_MARK,
            '|' => PIPE,
            '+' => PLUS,
            '/' => SLASH,
            '%' => PERCENT,
            '=' => EQUALS,
            '-' if self.cursor.peek().is_ascii_digit() => self.number(),
            '-' => MINUS,
            '<' => match self.cursor.peek() {
                '>' => self.bump(NOT_EQUALS),
                '=' => self.bump(LESS_THAN_EQUALS),
                _ => LESS_THAN,
            },
            '>' => match self.cursor.peek() {
                '>' => self.bump(GREATER_THAN_GREATER_THAN),
                '?' => self.bump(GREATER_THAN_QUESTION_MARK),
                '=' => self.bump(GREATER_THAN_EQUALS),
                _ => GREATER_THAN,
            },
            '0'..='9' => self.number(),
            'A'..='Z' | 'a'..='z' | '_' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                SyntaxKind::from_keyword(self.text()).unwrap_or(IDENTIFIER)
            }
            quote @ ('"' | '\'') => self.string(quote),
            c => {
                self.diagnostics.push(Diagnostic::error(
                    DiagnosticCode::UnknownCharacter,
                    format!("unknown character {c:?}"),
                    self.range(),
                ));
                UNKNOWN
            }
        };

        let range = self.range();
        self.cursor.reset_pos_within_token();

        (kind, range)
    }

    fn bump(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.cursor.advance();
        kind
    }

    fn number(&mut self) -> SyntaxKind {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }
        NUMBER
    }

    /// Strings never span lines; an unterminated one stops at the line end.
    fn string(&mut self, quote: char) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                _ if self.cursor.is_eof() => break,
                '\n' | '\r' => break,
                '\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.peek(), '\n' | '\r') {
                        self.cursor.advance();
                    }
                }
                c => {
                    self.cursor.advance();
                    if c == quote {
                        return STRING;
                    }
                }
            }
        }

        self.diagnostics.push(Diagnostic::error(
            DiagnosticCode::UnterminatedString,
            "unterminated string",
            self.range(),
        ));
        STRING
    }
}
