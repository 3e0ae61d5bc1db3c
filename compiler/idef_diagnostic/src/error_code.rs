//! Stable codes for every diagnostic the compiler emits.
//!
//! The leading digit names the stage that reports the code: `E0` lexer,
//! `E1` parser, `E2` resolver, `E3` table builder and permuter, `E9` driver.

use std::fmt;

macro_rules! error_codes {
    ($($code:ident => $description:literal,)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $(
                #[doc = $description]
                $code,
            )*
        }

        const ALL: &[ErrorCode] = &[$(ErrorCode::$code),*];

        impl ErrorCode {
            /// `"E2001"` for [`ErrorCode::E2001`].
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => stringify!($code),)*
                }
            }

            /// One-line summary, lowercase and without trailing period.
            pub fn description(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => $description,)*
                }
            }
        }
    };
}

error_codes! {
    E0001 => "unterminated string literal",
    E0002 => "unrecognized character",

    E1001 => "unexpected token",
    E1002 => "expected identifier",
    E1003 => "expected declaration",
    E1004 => "invalid attribute argument",

    E2001 => "unresolved name",
    E2002 => "duplicate declaration",
    E2003 => "name refers to an entity of the wrong kind",
    E2004 => "matcher mixes types and enum entries",
    E2005 => "ambiguous matcher option",
    E2006 => "wrong number of template arguments",
    E2007 => "unknown or malformed attribute",
    E2008 => "operator has an unsupported number of parameters",
    E2009 => "matcher options may not be templated",

    E3001 => "overload admits no permutations",
    E3002 => "degenerate matcher",
    E3003 => "return type is not pinned by the template arguments",
    E3004 => "template parameter cannot be enumerated",
    E3005 => "type position left without a value during instantiation",

    E9001 => "imported file could not be loaded",
}

impl ErrorCode {
    /// Lexer and parser codes. These abort the file; nothing after them runs.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self.as_str().get(..2), Some("E0" | "E1"))
    }

    pub fn parse(code: &str) -> Option<ErrorCode> {
        ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
