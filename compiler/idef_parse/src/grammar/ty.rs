//! Templated names and template parameter lists.

use idef_ir::{Span, TemplateParam, TemplatedName, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// `name` or `name<arg, ...>`, recursively.
    pub(crate) fn parse_templated_name(&mut self) -> Result<TemplatedName, ParseError> {
        let (name, start) = self
            .cursor
            .expect_ident()
            .map_err(|e| e.with_context(ErrorContext::TemplatedName))?;
        self.finish_templated_name(None, name.to_string(), start)
    }

    /// A template argument: a templated name or `enum.entry`.
    fn parse_template_arg(&mut self) -> Result<TemplatedName, ParseError> {
        let (first, start) = self
            .cursor
            .expect_ident()
            .map_err(|e| e.with_context(ErrorContext::TemplatedName))?;
        if !self.cursor.eat(TokenKind::Dot) {
            return self.finish_templated_name(None, first.to_string(), start);
        }
        let (entry, _) = self
            .cursor
            .expect_ident()
            .map_err(|e| e.with_context(ErrorContext::TemplatedName))?;
        self.finish_templated_name(Some(first.to_string()), entry.to_string(), start)
    }

    fn finish_templated_name(
        &mut self,
        qualifier: Option<String>,
        name: String,
        start: Span,
    ) -> Result<TemplatedName, ParseError> {
        let mut template_args = Vec::new();
        if self.cursor.eat(TokenKind::Lt) {
            loop {
                template_args.push(self.parse_template_arg()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor
                .expect_closing_angle()
                .map_err(|e| e.with_context(ErrorContext::TemplatedName))?;
        }
        Ok(TemplatedName {
            span: self.span_from(start),
            qualifier,
            name,
            template_args,
        })
    }

    /// Template parameters between `open` and `close`, if `open` is next.
    ///
    /// Returns an empty list when the opening delimiter is absent.
    pub(crate) fn parse_template_params(
        &mut self,
        open: TokenKind,
        close: TokenKind,
    ) -> Result<Vec<TemplateParam>, ParseError> {
        if !self.cursor.eat(open) {
            return Ok(Vec::new());
        }
        self.parse_template_param_list(close)
            .map_err(|e| e.with_context(ErrorContext::TemplateParams))
    }

    fn parse_template_param_list(
        &mut self,
        close: TokenKind,
    ) -> Result<Vec<TemplateParam>, ParseError> {
        let mut params = Vec::new();
        if !self.cursor.check(close) {
            loop {
                params.push(self.parse_template_param()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        if close == TokenKind::Gt {
            self.cursor.expect_closing_angle()?;
        } else {
            self.cursor.expect(close)?;
        }
        Ok(params)
    }

    fn parse_template_param(&mut self) -> Result<TemplateParam, ParseError> {
        let (name, start) = self.cursor.expect_ident()?;
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_templated_name()?)
        } else {
            None
        };
        Ok(TemplateParam {
            span: self.span_from(start),
            name: name.to_string(),
            ty,
        })
    }
}
