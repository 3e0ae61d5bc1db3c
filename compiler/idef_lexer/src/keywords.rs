//! Keyword resolution.
//!
//! Applied after a maximal identifier run has been scanned, so an identifier
//! that merely starts with a keyword (`operation`, `types`, `enumerate`) is
//! never split.

use idef_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns `None` for ordinary identifiers. Keywords are 2-6 bytes long,
/// which rejects most identifiers before any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "op" => Some(TokenKind::Operator),
            _ => None,
        },
        4 => match text {
            "ctor" => Some(TokenKind::Constructor),
            "conv" => Some(TokenKind::Converter),
            "type" => Some(TokenKind::Type),
            "enum" => Some(TokenKind::Enum),
            _ => None,
        },
        5 => match text {
            "match" => Some(TokenKind::Match),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
