//! Attribute parsing: `@name` and `@name(value, ...)`.

use idef_diagnostic::ErrorCode;
use idef_ir::{Attribute, AttributeValue, Attributes, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse zero or more attributes.
    pub(crate) fn parse_attributes(&mut self) -> Result<Attributes, ParseError> {
        let mut attributes = Attributes::new();
        while self.cursor.check(TokenKind::Attr) {
            let attr = self
                .parse_attribute()
                .map_err(|e| e.with_context(ErrorContext::Attribute))?;
            attributes.0.push(attr);
        }
        Ok(attributes)
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let start = self.cursor.expect(TokenKind::Attr)?;
        let (name, _) = self.cursor.expect_ident()?;
        let mut values = Vec::new();
        if self.cursor.eat(TokenKind::Lparen) {
            if !self.cursor.check(TokenKind::Rparen) {
                loop {
                    values.push(self.parse_attribute_value()?);
                    if !self.cursor.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.cursor.expect(TokenKind::Rparen)?;
        }
        Ok(Attribute {
            span: self.span_from(start),
            name: name.to_string(),
            values,
        })
    }

    fn parse_attribute_value(&mut self) -> Result<AttributeValue, ParseError> {
        let Some(token) = self.cursor.current().copied() else {
            return Err(self.cursor.unexpected("attribute value"));
        };
        let value = match token.kind {
            TokenKind::Identifier => AttributeValue::Identifier(token.text.to_string()),
            TokenKind::String => AttributeValue::String(token.unquoted().to_string()),
            TokenKind::Integer => {
                let value = token.text.parse::<i64>().map_err(|_| {
                    ParseError::new(
                        ErrorCode::E1004,
                        format!("integer `{}` is out of range", token.text),
                        token.span,
                    )
                })?;
                AttributeValue::Integer(value)
            }
            TokenKind::Float => {
                let value = token.text.parse::<f64>().map_err(|_| {
                    ParseError::new(
                        ErrorCode::E1004,
                        format!("invalid float `{}`", token.text),
                        token.span,
                    )
                })?;
                AttributeValue::float(value)
            }
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "expected identifier, string or number as attribute value, found {}",
                        self.cursor.found()
                    ),
                    token.span,
                ))
            }
        };
        self.cursor.advance();
        Ok(value)
    }
}
