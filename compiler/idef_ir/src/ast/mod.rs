//! AST of a definition file.
//!
//! Built once by the parser and never mutated after resolution begins.
//! Names are plain owned strings; every node carries the span it was
//! parsed from.
//!
//! Grammar (informal):
//!
//! ```text
//! file       = { import | decl } .
//! import     = "import" string [ ";" ] .
//! decl       = { attribute } ( enum | type | matcher | intrinsic ) [ ";" ] .
//! enum       = "enum" ident "{" { { attribute } ident } "}" .
//! type       = "type" ident [ "<" template_params ">" ] .
//! matcher    = "match" ident ":" option { "|" option } .
//! option     = templated_name | ident "." ident .
//! intrinsic  = ( "fn" | "op" | "ctor" | "conv" ) name
//!              [ "<" template_params ">" ] [ "[" template_params "]" ]
//!              "(" [ param { "," param } ] ")" [ "->" templated_name ] .
//! param      = { attribute } [ ident ":" ] templated_name .
//! ```

mod attr;

use std::fmt;

pub use attr::{Attribute, AttributeValue, Attributes};

use crate::Span;

/// A parsed definition file.
///
/// Declarations keep their source order within each list.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct File {
    pub imports: Vec<Import>,
    pub enums: Vec<EnumDecl>,
    pub types: Vec<TypeDecl>,
    pub matchers: Vec<MatcherDecl>,
    pub intrinsics: Vec<IntrinsicDecl>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the declarations of `other` after this file's declarations.
    ///
    /// Imports of `other` are dropped: the driver follows imports itself
    /// before merging.
    pub fn merge(&mut self, other: File) {
        let File {
            imports: _,
            enums,
            types,
            matchers,
            intrinsics,
        } = other;
        self.enums.extend(enums);
        self.types.extend(types);
        self.matchers.extend(matchers);
        self.intrinsics.extend(intrinsics);
    }

    /// Total number of declarations (imports excluded).
    pub fn declaration_count(&self) -> usize {
        self.enums.len() + self.types.len() + self.matchers.len() + self.intrinsics.len()
    }
}

/// `import "path"`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Import {
    pub span: Span,
    pub path: String,
}

/// `enum name { entries }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumDecl {
    pub span: Span,
    pub name: String,
    pub attributes: Attributes,
    pub entries: Vec<EnumEntry>,
}

/// One entry of an enum declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumEntry {
    pub span: Span,
    pub name: String,
    pub attributes: Attributes,
}

/// `type name<params>`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDecl {
    pub span: Span,
    pub name: String,
    pub attributes: Attributes,
    pub template_params: Vec<TemplateParam>,
}

/// `match name: option | option ...`
///
/// The parser keeps the options in source order without classifying them;
/// the resolver decides whether the matcher is a type or an enum matcher
/// and rejects mixtures.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatcherDecl {
    pub span: Span,
    pub name: String,
    pub attributes: Attributes,
    pub options: Vec<MatcherOption>,
}

/// One alternative of a matcher.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatcherOption {
    /// A (possibly templated) type name, or a bare enum entry name.
    Type(TemplatedName),
    /// An explicitly qualified enum entry: `access.read`.
    Member(MemberName),
}

impl MatcherOption {
    pub fn span(&self) -> Span {
        match self {
            MatcherOption::Type(name) => name.span,
            MatcherOption::Member(member) => member.span,
        }
    }
}

impl fmt::Display for MatcherOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherOption::Type(name) => write!(f, "{name}"),
            MatcherOption::Member(member) => write!(f, "{member}"),
        }
    }
}

/// `enum_name.entry_name`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberName {
    pub span: Span,
    pub owner: String,
    pub member: String,
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.member)
    }
}

/// Kind of intrinsic, selected by the declaring keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntrinsicKind {
    /// `fn`
    Builtin,
    /// `op`
    Operator,
    /// `ctor`
    Constructor,
    /// `conv`
    Converter,
}

impl IntrinsicKind {
    pub fn keyword(self) -> &'static str {
        match self {
            IntrinsicKind::Builtin => "fn",
            IntrinsicKind::Operator => "op",
            IntrinsicKind::Constructor => "ctor",
            IntrinsicKind::Converter => "conv",
        }
    }
}

/// `fn|op|ctor|conv name<explicit>[implicit](params) -> return`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntrinsicDecl {
    pub span: Span,
    pub kind: IntrinsicKind,
    pub name: String,
    pub attributes: Attributes,
    pub explicit_template_params: Vec<TemplateParam>,
    pub implicit_template_params: Vec<TemplateParam>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TemplatedName>,
}

impl fmt::Display for IntrinsicDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.name)?;
        if !self.explicit_template_params.is_empty() {
            f.write_str("<")?;
            write_list(f, &self.explicit_template_params)?;
            f.write_str(">")?;
        }
        if !self.implicit_template_params.is_empty() {
            f.write_str("[")?;
            write_list(f, &self.implicit_template_params)?;
            f.write_str("]")?;
        }
        f.write_str("(")?;
        write_list(f, &self.parameters)?;
        f.write_str(")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

/// One intrinsic parameter: `[attrs] [name:] type`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parameter {
    pub span: Span,
    pub attributes: Attributes,
    pub name: Option<String>,
    pub ty: TemplatedName,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in &self.attributes {
            write!(f, "{attr} ")?;
        }
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "{}", self.ty)
    }
}

/// `name` or `name: constraint`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TemplateParam {
    pub span: Span,
    pub name: String,
    pub ty: Option<TemplatedName>,
}

impl fmt::Display for TemplateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{}: {ty}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// `name`, `name<arg, arg<...>>` or, as an argument, `enum.entry`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TemplatedName {
    pub span: Span,
    /// `access` in `access.read`.
    pub qualifier: Option<String>,
    pub name: String,
    pub template_args: Vec<TemplatedName>,
}

impl TemplatedName {
    /// A name without template arguments.
    pub fn plain(span: Span, name: impl Into<String>) -> Self {
        TemplatedName {
            span,
            qualifier: None,
            name: name.into(),
            template_args: Vec::new(),
        }
    }
}

impl fmt::Display for TemplatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{qualifier}.")?;
        }
        f.write_str(&self.name)?;
        if !self.template_args.is_empty() {
            f.write_str("<")?;
            write_list(f, &self.template_args)?;
            f.write_str(">")?;
        }
        Ok(())
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
