//! Top-level declarations and imports.

use idef_diagnostic::ErrorCode;
use idef_ir::{
    Attributes, EnumDecl, EnumEntry, File, Import, IntrinsicDecl, IntrinsicKind, MatcherDecl,
    MatcherOption, MemberName, Parameter, Span, TokenKind, TypeDecl,
};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse a whole file.
    pub(crate) fn parse_file(&mut self) -> Result<File, ParseError> {
        let mut file = File::new();
        while !self.cursor.is_at_end() {
            if self.cursor.check(TokenKind::Import) {
                let import = self
                    .parse_import()
                    .map_err(|e| e.with_context(ErrorContext::Import))?;
                file.imports.push(import);
            } else {
                self.parse_declaration(&mut file)?;
            }
            self.cursor.eat(TokenKind::Semicolon);
        }
        Ok(file)
    }

    fn parse_import(&mut self) -> Result<Import, ParseError> {
        let start = self.cursor.expect(TokenKind::Import)?;
        let path = match self.cursor.current() {
            Some(token) if token.kind == TokenKind::String => token.unquoted().to_string(),
            _ => return Err(self.cursor.unexpected("import path string")),
        };
        self.cursor.advance();
        Ok(Import {
            span: self.span_from(start),
            path,
        })
    }

    /// Attributes followed by one declaration, appended to `file`.
    fn parse_declaration(&mut self, file: &mut File) -> Result<(), ParseError> {
        let start = self.cursor.current_span();
        let attributes = self.parse_attributes()?;
        match self.cursor.current_kind() {
            Some(TokenKind::Enum) => {
                let decl = self
                    .parse_enum(start, attributes)
                    .map_err(|e| e.with_context(ErrorContext::EnumDecl))?;
                file.enums.push(decl);
            }
            Some(TokenKind::Type) => {
                let decl = self
                    .parse_type(start, attributes)
                    .map_err(|e| e.with_context(ErrorContext::TypeDecl))?;
                file.types.push(decl);
            }
            Some(TokenKind::Match) => {
                let decl = self
                    .parse_matcher(start, attributes)
                    .map_err(|e| e.with_context(ErrorContext::MatcherDecl))?;
                file.matchers.push(decl);
            }
            Some(
                kind @ (TokenKind::Function
                | TokenKind::Operator
                | TokenKind::Constructor
                | TokenKind::Converter),
            ) => {
                let kind = match kind {
                    TokenKind::Operator => IntrinsicKind::Operator,
                    TokenKind::Constructor => IntrinsicKind::Constructor,
                    TokenKind::Converter => IntrinsicKind::Converter,
                    _ => IntrinsicKind::Builtin,
                };
                let decl = self
                    .parse_intrinsic(start, kind, attributes)
                    .map_err(|e| e.with_context(ErrorContext::IntrinsicDecl))?;
                file.intrinsics.push(decl);
            }
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1003,
                    format!("expected declaration, found {}", self.cursor.found()),
                    self.cursor.current_span(),
                )
                .with_help(
                    "declarations start with `enum`, `type`, `match`, `fn`, `op`, `ctor` or `conv`",
                ));
            }
        }
        Ok(())
    }

    fn parse_enum(&mut self, start: Span, attributes: Attributes) -> Result<EnumDecl, ParseError> {
        self.cursor.expect(TokenKind::Enum)?;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Lbrace)?;
        let mut entries = Vec::new();
        while !self.cursor.check(TokenKind::Rbrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected(TokenKind::Rbrace.display_name()));
            }
            let entry_start = self.cursor.current_span();
            let entry_attributes = self.parse_attributes()?;
            let (entry_name, _) = self.cursor.expect_ident()?;
            entries.push(EnumEntry {
                span: self.span_from(entry_start),
                name: entry_name.to_string(),
                attributes: entry_attributes,
            });
        }
        self.cursor.expect(TokenKind::Rbrace)?;
        Ok(EnumDecl {
            span: self.span_from(start),
            name: name.to_string(),
            attributes,
            entries,
        })
    }

    fn parse_type(&mut self, start: Span, attributes: Attributes) -> Result<TypeDecl, ParseError> {
        self.cursor.expect(TokenKind::Type)?;
        let (name, _) = self.cursor.expect_ident()?;
        let template_params = self.parse_template_params(TokenKind::Lt, TokenKind::Gt)?;
        Ok(TypeDecl {
            span: self.span_from(start),
            name: name.to_string(),
            attributes,
            template_params,
        })
    }

    fn parse_matcher(
        &mut self,
        start: Span,
        attributes: Attributes,
    ) -> Result<MatcherDecl, ParseError> {
        self.cursor.expect(TokenKind::Match)?;
        let (name, _) = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Colon)?;
        let mut options = vec![self.parse_matcher_option()?];
        while self.cursor.eat(TokenKind::Or) {
            options.push(self.parse_matcher_option()?);
        }
        Ok(MatcherDecl {
            span: self.span_from(start),
            name: name.to_string(),
            attributes,
            options,
        })
    }

    /// `enum.entry` or a templated name.
    fn parse_matcher_option(&mut self) -> Result<MatcherOption, ParseError> {
        if self.cursor.check(TokenKind::Identifier)
            && self.cursor.peek_next_kind() == Some(TokenKind::Dot)
        {
            let (owner, start) = self.cursor.expect_ident()?;
            self.cursor.expect(TokenKind::Dot)?;
            let (member, _) = self.cursor.expect_ident()?;
            return Ok(MatcherOption::Member(MemberName {
                span: self.span_from(start),
                owner: owner.to_string(),
                member: member.to_string(),
            }));
        }
        Ok(MatcherOption::Type(self.parse_templated_name()?))
    }

    fn parse_intrinsic(
        &mut self,
        start: Span,
        kind: IntrinsicKind,
        attributes: Attributes,
    ) -> Result<IntrinsicDecl, ParseError> {
        self.cursor.advance();
        let name = self.parse_intrinsic_name(kind)?;
        let explicit_template_params = self.parse_template_params(TokenKind::Lt, TokenKind::Gt)?;
        let implicit_template_params =
            self.parse_template_params(TokenKind::Lbracket, TokenKind::Rbracket)?;
        let parameters = self
            .parse_parameters()
            .map_err(|e| e.with_context(ErrorContext::Parameters))?;
        let return_type = if self.cursor.eat(TokenKind::Arrow) {
            Some(self.parse_templated_name()?)
        } else {
            None
        };
        Ok(IntrinsicDecl {
            span: self.span_from(start),
            kind,
            name,
            attributes,
            explicit_template_params,
            implicit_template_params,
            parameters,
            return_type,
        })
    }

    /// An identifier, or for `op` declarations an operator symbol.
    fn parse_intrinsic_name(&mut self, kind: IntrinsicKind) -> Result<String, ParseError> {
        if kind == IntrinsicKind::Operator {
            if let Some(token) = self.cursor.current() {
                if token.kind.is_operator_symbol() {
                    let name = token.text.to_string();
                    self.cursor.advance();
                    return Ok(name);
                }
            }
        }
        let (name, _) = self.cursor.expect_ident()?;
        Ok(name.to_string())
    }

    /// `( [param { , param }] )`
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.cursor.expect(TokenKind::Lparen)?;
        let mut parameters = Vec::new();
        if !self.cursor.check(TokenKind::Rparen) {
            loop {
                parameters.push(self.parse_parameter()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::Rparen)?;
        Ok(parameters)
    }

    /// `{ attribute } [ name : ] templated_name`
    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let start = self.cursor.current_span();
        let attributes = self.parse_attributes()?;
        let name = if self.cursor.check(TokenKind::Identifier)
            && self.cursor.peek_next_kind() == Some(TokenKind::Colon)
        {
            let (name, _) = self.cursor.expect_ident()?;
            self.cursor.expect(TokenKind::Colon)?;
            Some(name.to_string())
        } else {
            None
        };
        let ty = self.parse_templated_name()?;
        Ok(Parameter {
            span: self.span_from(start),
            attributes,
            name,
            ty,
        })
    }
}
