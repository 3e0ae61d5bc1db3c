//! Templated names and template parameter lists.
//!
//! Scoping: the template parameters of the enclosing declaration shadow
//! globals, globals shadow the builtin `num`, and a name found nowhere
//! else is tried as a bare enum entry.

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::{ast, Span, TemplatedName};

use super::{Global, Resolver};
use crate::{
    EnumConstraint, EnumEntryId, EnumId, FullyQualifiedName, Target, TemplateParam,
    TemplateParamKind, TypeConstraint, TypeId,
};

/// Name of the builtin number constraint.
const NUM: &str = "num";

/// What a name position accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Expect {
    Type,
    /// An entry, optionally of one particular enum.
    Enum(Option<EnumId>),
    Number,
}

impl Expect {
    fn for_param(kind: &TemplateParamKind, resolver: &Resolver) -> Self {
        match kind {
            TemplateParamKind::Type(_) => Expect::Type,
            TemplateParamKind::Enum(_) => Expect::Enum(kind.enum_id(&resolver.sem)),
            TemplateParamKind::Number => Expect::Number,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Expect::Type => "a type",
            Expect::Enum(_) => "an enum entry",
            Expect::Number => "a number",
        }
    }
}

/// Result of looking a bare name up in scope.
enum Found {
    Param(usize),
    Global(Global),
    Num,
    Entry(EnumEntryId),
}

impl Resolver {
    /// Parameter kinds without reporting anything.
    ///
    /// Used to seed type parameters before constraints are fully resolved.
    pub(super) fn template_param_kinds(&self, decls: &[ast::TemplateParam]) -> Vec<TemplateParam> {
        decls
            .iter()
            .map(|decl| {
                let kind = match decl.ty.as_ref().map(|ty| self.globals.get(&ty.name)) {
                    Some(Some(&(Global::Enum(id), _))) => {
                        TemplateParamKind::Enum(EnumConstraint::Enum(id))
                    }
                    Some(Some(&(Global::EnumMatcher(id), _))) => {
                        TemplateParamKind::Enum(EnumConstraint::Matcher(id))
                    }
                    Some(None) if decl.ty.as_ref().is_some_and(|ty| ty.name == NUM) => {
                        TemplateParamKind::Number
                    }
                    _ => TemplateParamKind::Type(None),
                };
                TemplateParam {
                    name: decl.name.clone(),
                    span: decl.span,
                    kind,
                }
            })
            .collect()
    }

    /// Resolve a template parameter list, reporting every problem.
    pub(super) fn resolve_template_params(
        &mut self,
        decls: &[ast::TemplateParam],
    ) -> Vec<TemplateParam> {
        let mut params: Vec<TemplateParam> = Vec::with_capacity(decls.len());
        for decl in decls {
            if let Some(previous) = params.iter().find(|p| p.name == decl.name) {
                let previous_span = previous.span;
                self.error(
                    Diagnostic::error(ErrorCode::E2002)
                        .with_message(format!(
                            "template parameter `{}` is declared more than once",
                            decl.name
                        ))
                        .with_label(decl.span, "redeclared here")
                        .with_secondary_label(previous_span, "first declared here"),
                );
            }
            let kind = match &decl.ty {
                None => TemplateParamKind::Type(None),
                Some(constraint) => self
                    .resolve_constraint(constraint)
                    .unwrap_or(TemplateParamKind::Type(None)),
            };
            params.push(TemplateParam {
                name: decl.name.clone(),
                span: decl.span,
                kind,
            });
        }
        params
    }

    /// `T: <constraint>`. Constraints are always global names.
    fn resolve_constraint(&mut self, constraint: &TemplatedName) -> Option<TemplateParamKind> {
        if constraint.qualifier.is_some() {
            return self.not_a_constraint(constraint);
        }
        let found = self.lookup(&constraint.name, constraint.span, &[], None)?;
        let kind = match found {
            Found::Global(Global::Type(_)) => {
                let fqn = self.resolve_name(constraint, &[], Expect::Type)?;
                return Some(TemplateParamKind::Type(Some(TypeConstraint::Type(fqn))));
            }
            Found::Global(Global::TypeMatcher(id)) => {
                TemplateParamKind::Type(Some(TypeConstraint::Matcher(id)))
            }
            Found::Global(Global::Enum(id)) => TemplateParamKind::Enum(EnumConstraint::Enum(id)),
            Found::Global(Global::EnumMatcher(id)) => {
                TemplateParamKind::Enum(EnumConstraint::Matcher(id))
            }
            Found::Num => TemplateParamKind::Number,
            Found::Param(_) | Found::Entry(_) => return self.not_a_constraint(constraint),
        };
        self.check_no_args(constraint)?;
        Some(kind)
    }

    fn not_a_constraint(&mut self, constraint: &TemplatedName) -> Option<TemplateParamKind> {
        self.error(
            Diagnostic::error(ErrorCode::E2003)
                .with_message(format!("`{constraint}` cannot constrain a template parameter"))
                .with_label(constraint.span, "expected a type, matcher, enum or `num`"),
        );
        None
    }

    /// `prefer` picks among same-named entries of different enums.
    fn lookup(
        &mut self,
        name: &str,
        span: Span,
        params: &[TemplateParam],
        prefer: Option<EnumId>,
    ) -> Option<Found> {
        if let Some(index) = params.iter().position(|p| p.name == name) {
            return Some(Found::Param(index));
        }
        if let Some(&(global, _)) = self.globals.get(name) {
            return Some(Found::Global(global));
        }
        if name == NUM {
            return Some(Found::Num);
        }
        self.lookup_entry(name, span, prefer).map(Found::Entry)
    }

    /// Resolve `name` in the scope of `params`, where `expect` is accepted.
    pub(super) fn resolve_name(
        &mut self,
        name: &TemplatedName,
        params: &[TemplateParam],
        expect: Expect,
    ) -> Option<FullyQualifiedName> {
        let prefer = match expect {
            Expect::Enum(want) => want,
            Expect::Type | Expect::Number => None,
        };
        let found = match &name.qualifier {
            Some(owner) => Found::Entry(self.resolve_member(owner, &name.name, name.span)?),
            None => self.lookup(&name.name, name.span, params, prefer)?,
        };
        let target = match (found, expect) {
            (Found::Param(index), _) => {
                let param_expect = Expect::for_param(&params[index].kind, self);
                if !compatible(param_expect, expect) {
                    let what = format!("{} template parameter", params[index].kind.describe());
                    return self.kind_mismatch(name, expect, &what);
                }
                Target::TemplateParam(index)
            }
            (Found::Global(Global::Type(id)), Expect::Type) => {
                return self.resolve_type_args(name, params, id);
            }
            (Found::Global(Global::TypeMatcher(id)), Expect::Type) => Target::TypeMatcher(id),
            (Found::Global(Global::EnumMatcher(id)), Expect::Enum(want)) => {
                let owner = self.sem.enum_matcher(id).enum_id;
                if want.is_some_and(|want| want != owner) {
                    return self.wrong_enum(name, want, owner);
                }
                Target::EnumMatcher(id)
            }
            (Found::Entry(id), Expect::Enum(want)) => {
                if want.is_some_and(|want| want != id.owner) {
                    return self.wrong_enum(name, want, id.owner);
                }
                Target::EnumEntry(id)
            }
            (Found::Global(global), _) => return self.kind_mismatch(name, expect, global.describe()),
            (Found::Num, _) => {
                return self.kind_mismatch(name, expect, "the builtin number constraint")
            }
            (Found::Entry(_), _) => return self.kind_mismatch(name, expect, "enum entry"),
        };
        self.check_no_args(name)?;
        Some(FullyQualifiedName::new(name.span, target))
    }

    /// `type<args>`: argument count and kinds follow the type's parameters.
    fn resolve_type_args(
        &mut self,
        name: &TemplatedName,
        params: &[TemplateParam],
        id: TypeId,
    ) -> Option<FullyQualifiedName> {
        let expected: Vec<Expect> = self
            .sem
            .ty(id)
            .template_params
            .iter()
            .map(|p| Expect::for_param(&p.kind, self))
            .collect();
        if name.template_args.len() != expected.len() {
            self.error(
                Diagnostic::error(ErrorCode::E2006)
                    .with_message(format!(
                        "type `{}` takes {} template argument(s) but {} were given",
                        name.name,
                        expected.len(),
                        name.template_args.len()
                    ))
                    .with_label(name.span, "wrong number of template arguments")
                    .with_secondary_label(self.sem.ty(id).span, "type declared here"),
            );
            return None;
        }
        let mut args = Vec::with_capacity(name.template_args.len());
        let mut ok = true;
        for (arg, expect) in name.template_args.iter().zip(expected) {
            match self.resolve_name(arg, params, expect) {
                Some(fqn) => args.push(fqn),
                None => ok = false,
            }
        }
        ok.then(|| FullyQualifiedName::new(name.span, Target::Type(id)).with_args(args))
    }

    fn check_no_args(&mut self, name: &TemplatedName) -> Option<()> {
        if name.template_args.is_empty() {
            return Some(());
        }
        self.error(
            Diagnostic::error(ErrorCode::E2006)
                .with_message(format!("`{}` does not take template arguments", name.name))
                .with_label(name.span, "unexpected template arguments"),
        );
        None
    }

    fn kind_mismatch(
        &mut self,
        name: &TemplatedName,
        expect: Expect,
        found: &str,
    ) -> Option<FullyQualifiedName> {
        self.error(
            Diagnostic::error(ErrorCode::E2003)
                .with_message(format!(
                    "expected {}, found {found} `{}`",
                    expect.describe(),
                    name.name
                ))
                .with_label(name.span, format!("expected {}", expect.describe())),
        );
        None
    }

    fn wrong_enum(
        &mut self,
        name: &TemplatedName,
        want: Option<EnumId>,
        found: EnumId,
    ) -> Option<FullyQualifiedName> {
        let want = want.map_or("?", |id| self.sem.enum_def(id).name.as_str());
        let diagnostic = Diagnostic::error(ErrorCode::E2003)
            .with_message(format!(
                "expected an entry of enum `{want}`, found `{}` of enum `{}`",
                name.name,
                self.sem.enum_def(found).name
            ))
            .with_label(name.span, format!("expected `{want}`"));
        self.error(diagnostic);
        None
    }
}

/// Can a parameter of kind `param` fill a position expecting `expect`?
fn compatible(param: Expect, expect: Expect) -> bool {
    match (param, expect) {
        (Expect::Type, Expect::Type) | (Expect::Number, Expect::Number) => true,
        (Expect::Enum(have), Expect::Enum(want)) => want.is_none() || have == want,
        _ => false,
    }
}
