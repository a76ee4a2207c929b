use std::fmt;

use logos::Logos;

use crate::{ast::Position, error::LexError};

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords match regardless of ASCII case, so `NONE` and `None` both lex
/// as [`Token::None`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `0.25` or `128.0`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens such as `'func_detail'`, stored without quotes.
    #[regex(r"'[^']*'", parse_string)]
    String(String),
    /// Identifier tokens; names such as `offset` or `max`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `none`
    #[token("none", ignore(ascii_case))]
    None,
    /// `and`
    #[token("and", ignore(ascii_case))]
    And,
    /// `or`
    #[token("or", ignore(ascii_case))]
    Or,
    /// `if`
    #[token("if", ignore(ascii_case))]
    If,
    /// `else`
    #[token("else", ignore(ascii_case))]
    Else,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`, only valid in assignment batches.
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// Line breaks only move the position forward.
    #[token("\n", newline)]
    NewLine,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}'"),
            Self::String(s) => write!(f, "string '{s}'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::None => write!(f, "'none'"),
            Self::And => write!(f, "'and'"),
            Self::Or => write!(f, "'or'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::Dot => write!(f, "'.'"),
            Self::Comma => write!(f, "','"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Question => write!(f, "'?'"),
            Self::Colon => write!(f, "':'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Assign => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Bang => write!(f, "'!'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Greater => write!(f, "'>'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::DoubleAmpersand => write!(f, "'&&'"),
            Self::DoublePipe => write!(f, "'||'"),
            Self::NewLine => write!(f, "line break"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be given a [`Position`].
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    /// Accounts for line breaks inside a multi-line string literal whose
    /// text begins at byte offset `text_start`.
    fn skip_lines(&mut self, text: &str, text_start: usize) {
        if let Some(last_newline) = text.rfind('\n') {
            self.line += text.matches('\n').count();
            self.line_start = text_start + last_newline + 1;
        }
    }
}

/// Selects which tokens [`tokenize`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// A single expression: a lone `=` is an incomplete `==`.
    Expression,
    /// An assignment batch: a lone `=` is the assignment token.
    Assignments,
}

/// Converts source text into tokens paired with their positions.
///
/// Keywords (`none`, `and`, `or`, `if`, `else`) are recognized
/// case-insensitively; every other word is an identifier.
///
/// # Errors
/// Fails at the first unterminated string, lone `=`/`&`/`|`, or unknown
/// character. There is no recovery.
///
/// # Example
/// ```
/// use mapscript::interpreter::lexer::{LexMode, Token, tokenize};
///
/// let tokens = tokenize("x AND 'a b'", LexMode::Expression).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::And,
///                 Token::String("a b".to_string())]);
///
/// assert!(tokenize("1 & 2", LexMode::Expression).is_err());
/// ```
pub fn tokenize(source: &str, mode: LexMode) -> LexResult<Vec<(Token, Position)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let position = position_of(source, &lexer.extras, start);

        match token {
            Ok(Token::Assign) if mode == LexMode::Expression => {
                return Err(LexError::IncompleteOperator { found: '=',
                                                          expected: "==",
                                                          position });
            },
            Ok(token) => {
                if let Token::String(text) = &token {
                    lexer.extras.skip_lines(text, start + 1);
                }
                tokens.push((token, position));
            },
            Err(()) => return Err(classify_error(&source[start..], position)),
        }
    }

    Ok(tokens)
}

/// Whether `name` is exactly one identifier token, i.e. something a variable
/// could be bound to and referenced by.
///
/// # Example
/// ```
/// use mapscript::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("index"));
/// assert!(!is_identifier("1bad"));
/// assert!(!is_identifier("none"));
/// assert!(!is_identifier("a b"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    matches!(tokenize(name, LexMode::Expression).as_deref(),
             Ok([(Token::Identifier(_), _)]))
}

/// Turns a failed match into the matching [`LexError`], based on the
/// character the failure starts at.
fn classify_error(rest: &str, position: Position) -> LexError {
    match rest.chars().next() {
        Some('\'') => LexError::UnterminatedString { position },
        Some('=') => LexError::IncompleteOperator { found: '=',
                                                    expected: "==",
                                                    position },
        Some('&') => LexError::IncompleteOperator { found: '&',
                                                    expected: "&&",
                                                    position },
        Some('|') => LexError::IncompleteOperator { found: '|',
                                                    expected: "||",
                                                    position },
        Some(character) => LexError::UnexpectedCharacter { character,
                                                           position },
        None => LexError::UnexpectedCharacter { character: '\0',
                                                position },
    }
}

/// Computes the position of byte offset `start`, counting characters (not
/// bytes) from the beginning of the current line.
fn position_of(source: &str, extras: &LexerExtras, start: usize) -> Position {
    let offset = source.get(extras.line_start..start)
                       .map_or(0, |line| line.chars().count());
    Position::new(extras.line, offset)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Advances the line counter and skips the line break.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}
