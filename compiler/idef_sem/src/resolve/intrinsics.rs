//! Pass 4: intrinsics and overloads.

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::{ast, IntrinsicKind};

use super::attrs;
use super::names::Expect;
use super::Resolver;
use crate::{Intrinsic, IntrinsicGroup, IntrinsicId, Overload, OverloadId, OverloadParameter, Stages};

impl Resolver {
    pub(super) fn resolve_intrinsics(&mut self, decls: &[ast::IntrinsicDecl]) {
        for decl in decls {
            self.resolve_intrinsic(decl);
        }
    }

    fn resolve_intrinsic(&mut self, decl: &ast::IntrinsicDecl) {
        let Some(group) = self.intrinsic_group(decl) else {
            return;
        };
        self.check_attributes(&decl.attributes, attrs::INTRINSIC, decl.kind.keyword());

        let explicit_template_count = decl.explicit_template_params.len();
        let template_decls: Vec<ast::TemplateParam> = decl
            .explicit_template_params
            .iter()
            .chain(&decl.implicit_template_params)
            .cloned()
            .collect();
        let template_params = self.resolve_template_params(&template_decls);

        let mut ok = true;
        let mut parameters = Vec::with_capacity(decl.parameters.len());
        for param in &decl.parameters {
            self.check_attributes(&param.attributes, attrs::PARAMETER, "parameter");
            match self.resolve_name(&param.ty, &template_params, Expect::Type) {
                Some(ty) => parameters.push(OverloadParameter {
                    name: param.name.clone(),
                    span: param.span,
                    ty,
                    is_const: param.attributes.has("const"),
                }),
                None => ok = false,
            }
        }
        let return_type = match &decl.return_type {
            Some(ret) => match self.resolve_name(ret, &template_params, Expect::Type) {
                Some(fqn) => Some(fqn),
                None => {
                    ok = false;
                    None
                }
            },
            None => None,
        };
        if !ok {
            return;
        }

        let stages = self.stages(decl);
        let const_eval = decl.attributes.get("const").map(|attr| {
            attr.values
                .first()
                .and_then(|v| v.as_str())
                .unwrap_or(&decl.name)
                .to_string()
        });
        let deprecated = decl.attributes.has("deprecated").then(|| {
            attrs::text(&decl.attributes, "deprecated")
                .unwrap_or_default()
                .to_string()
        });
        let intrinsic = self.intrinsic_id(group, &decl.name);
        let id = OverloadId::next(&self.sem.overloads);
        tracing::trace!(name = %decl.name, %group, overload = id.raw(), "overload");
        self.sem.overloads.push(Overload {
            id,
            span: decl.span,
            intrinsic,
            description: decl.to_string(),
            template_params,
            explicit_template_count,
            parameters,
            return_type,
            stages,
            must_use: decl.attributes.has("must_use"),
            const_eval,
            deprecated,
        });
        self.sem.intrinsics[intrinsic.index()].overloads.push(id);
    }

    /// The group a declaration belongs to; operators split by arity.
    fn intrinsic_group(&mut self, decl: &ast::IntrinsicDecl) -> Option<IntrinsicGroup> {
        match decl.kind {
            IntrinsicKind::Builtin => Some(IntrinsicGroup::Builtin),
            IntrinsicKind::Constructor => Some(IntrinsicGroup::Constructor),
            IntrinsicKind::Converter => Some(IntrinsicGroup::Converter),
            IntrinsicKind::Operator => match decl.parameters.len() {
                1 => Some(IntrinsicGroup::UnaryOperator),
                2 => Some(IntrinsicGroup::BinaryOperator),
                n => {
                    self.error(
                        Diagnostic::error(ErrorCode::E2008)
                            .with_message(format!(
                                "operator `{}` has {n} parameters",
                                decl.name
                            ))
                            .with_label(decl.span, "operators take one or two parameters"),
                    );
                    None
                }
            },
        }
    }

    /// Find or create the intrinsic named `name` in `group`.
    fn intrinsic_id(&mut self, group: IntrinsicGroup, name: &str) -> IntrinsicId {
        if let Some(existing) = self
            .sem
            .intrinsics
            .iter()
            .find(|i| i.group == group && i.name == name)
        {
            return existing.id;
        }
        let id = IntrinsicId::next(&self.sem.intrinsics);
        self.sem.intrinsics.push(Intrinsic {
            id,
            name: name.to_string(),
            group,
            overloads: Vec::new(),
        });
        id
    }

    /// `@stage(...)`, defaulting to every stage.
    fn stages(&mut self, decl: &ast::IntrinsicDecl) -> Stages {
        let Some(attr) = decl.attributes.get("stage") else {
            return Stages::default();
        };
        let mut stages = Stages::empty();
        for value in &attr.values {
            let Some(name) = value.as_str() else {
                continue;
            };
            match Stages::from_stage_name(name) {
                Some(stage) => stages |= stage,
                None => self.error(
                    Diagnostic::error(ErrorCode::E2007)
                        .with_message(format!("unknown shader stage `{name}`"))
                        .with_label(attr.span, "in this attribute")
                        .with_note("expected `vertex`, `fragment` or `compute`"),
                ),
            }
        }
        if stages.is_empty() {
            Stages::default()
        } else {
            stages
        }
    }
}
