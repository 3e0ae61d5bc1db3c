//! Types, type matchers, and template parameters.

use idef_ir::Span;

use crate::{EnumId, EnumMatcherId, FullyQualifiedName, Sem, TypeId, TypeMatcherId};

/// A resolved `type` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    pub id: TypeId,
    pub name: String,
    pub span: Span,
    pub template_params: Vec<TemplateParam>,
    /// From `@precedence(N)`; zero when absent. Higher sorts first.
    pub precedence: i64,
    /// From `@display("...")`, with `{Param}` placeholders.
    pub display_format: Option<String>,
}

impl Type {
    pub fn is_templated(&self) -> bool {
        !self.template_params.is_empty()
    }

    /// Human-facing name of an instantiation with the given argument text.
    ///
    /// Without a `@display` format this is `name<args>`.
    pub fn display_name(&self, args: &[String]) -> String {
        if let Some(format) = &self.display_format {
            let mut out = format.clone();
            for (param, arg) in self.template_params.iter().zip(args) {
                out = out.replace(&format!("{{{}}}", param.name), arg);
            }
            return out;
        }
        if args.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, args.join(", "))
        }
    }
}

/// A `match` declaration whose options are types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeMatcher {
    pub id: TypeMatcherId,
    pub name: String,
    pub span: Span,
    /// Admitted types, in the order the matcher lists them, without duplicates.
    pub types: Vec<TypeId>,
}

impl TypeMatcher {
    /// Admitted types by descending precedence; ties keep listing order.
    pub fn precedence_sorted_types(&self, sem: &Sem) -> Vec<TypeId> {
        let mut types = self.types.clone();
        types.sort_by_key(|&id| std::cmp::Reverse(sem.ty(id).precedence));
        types
    }
}

/// A named, kind-tagged template parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateParam {
    pub name: String,
    pub span: Span,
    pub kind: TemplateParamKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateParamKind {
    /// Binds a type. `None` admits any non-templated type.
    Type(Option<TypeConstraint>),
    /// Binds an entry of an enum.
    Enum(EnumConstraint),
    /// Binds a number supplied by the caller; never enumerated.
    Number,
}

impl TemplateParamKind {
    pub fn describe(&self) -> &'static str {
        match self {
            TemplateParamKind::Type(_) => "type",
            TemplateParamKind::Enum(_) => "enum",
            TemplateParamKind::Number => "number",
        }
    }

    /// The enum this parameter ranges over, for enum parameters.
    pub fn enum_id(&self, sem: &Sem) -> Option<EnumId> {
        match self {
            TemplateParamKind::Enum(EnumConstraint::Enum(id)) => Some(*id),
            TemplateParamKind::Enum(EnumConstraint::Matcher(id)) => {
                Some(sem.enum_matcher(*id).enum_id)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeConstraint {
    /// `T: f32` or `T: vec3<f32>`: exactly one type.
    Type(FullyQualifiedName),
    /// `T: fiu32`
    Matcher(TypeMatcherId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumConstraint {
    /// `E: access`: every entry of the enum.
    Enum(EnumId),
    /// `E: read_write`: the entries an enum matcher admits.
    Matcher(EnumMatcherId),
}
