//! Token types for the definition-file lexer.

use std::fmt;

use crate::Span;

/// Token kinds of the definition language.
///
/// Literal and identifier tokens keep their value in [`Token::text`];
/// the kind only classifies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Identifier: `vec3`, `f32`, `read_write`
    Identifier,
    /// Integer literal, optionally negative: `42`, `-7`
    Integer,
    /// Float literal, optionally negative: `1.5`, `-123.456`
    Float,
    /// Double-quoted string literal, quotes included in the text
    String,

    // Keywords
    /// `match`
    Match,
    /// `fn`
    Function,
    /// `op`
    Operator,
    /// `ctor`
    Constructor,
    /// `conv`
    Converter,
    /// `type`
    Type,
    /// `enum`
    Enum,
    /// `import`
    Import,

    // Punctuation
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `{`
    Lbrace,
    /// `}`
    Rbrace,
    /// `(`
    Lparen,
    /// `)`
    Rparen,
    /// `[`
    Lbracket,
    /// `]`
    Rbracket,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `<<`
    Shl,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `>>`
    Shr,
    /// `->`
    Arrow,
    /// `|`
    Or,
    /// `||`
    OrOr,
    /// `&`
    And,
    /// `&&`
    AndAnd,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    NotEqual,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Xor,
    /// `~`
    Complement,
    /// `@`
    Attr,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Match => "`match`",
            TokenKind::Function => "`fn`",
            TokenKind::Operator => "`op`",
            TokenKind::Constructor => "`ctor`",
            TokenKind::Converter => "`conv`",
            TokenKind::Type => "`type`",
            TokenKind::Enum => "`enum`",
            TokenKind::Import => "`import`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Lbrace => "`{`",
            TokenKind::Rbrace => "`}`",
            TokenKind::Lparen => "`(`",
            TokenKind::Rparen => "`)`",
            TokenKind::Lbracket => "`[`",
            TokenKind::Rbracket => "`]`",
            TokenKind::Lt => "`<`",
            TokenKind::Le => "`<=`",
            TokenKind::Shl => "`<<`",
            TokenKind::Gt => "`>`",
            TokenKind::Ge => "`>=`",
            TokenKind::Shr => "`>>`",
            TokenKind::Arrow => "`->`",
            TokenKind::Or => "`|`",
            TokenKind::OrOr => "`||`",
            TokenKind::And => "`&`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::Equal => "`=`",
            TokenKind::EqualEqual => "`==`",
            TokenKind::Bang => "`!`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Divide => "`/`",
            TokenKind::Modulo => "`%`",
            TokenKind::Xor => "`^`",
            TokenKind::Complement => "`~`",
            TokenKind::Attr => "`@`",
        }
    }

    /// Is this a keyword token?
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Match
                | TokenKind::Function
                | TokenKind::Operator
                | TokenKind::Constructor
                | TokenKind::Converter
                | TokenKind::Type
                | TokenKind::Enum
                | TokenKind::Import
        )
    }

    /// Can this token name an operator intrinsic (`op + ...`, `op << ...`)?
    pub fn is_operator_symbol(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Shl
                | TokenKind::Gt
                | TokenKind::Ge
                | TokenKind::Shr
                | TokenKind::Or
                | TokenKind::OrOr
                | TokenKind::And
                | TokenKind::AndAnd
                | TokenKind::EqualEqual
                | TokenKind::Bang
                | TokenKind::NotEqual
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::Xor
                | TokenKind::Complement
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its matched text and span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// The unquoted contents of a string token.
    ///
    /// Returns the text unchanged for any other kind.
    pub fn unquoted(&self) -> &'src str {
        if self.kind == TokenKind::String && self.text.len() >= 2 {
            &self.text[1..self.text.len() - 1]
        } else {
            self.text
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.text, self.span)
    }
}

#[cfg(test)]
mod tests;
