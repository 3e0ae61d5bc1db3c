//! Overload permutation.
//!
//! A [`Permuter`] expands one (possibly templated) overload into every
//! concrete signature its constraints admit.
//!
//! Enumeration dimensions, outermost first:
//! - each template parameter, in signature order (explicit then implicit)
//! - each matcher named directly in a parameter type, left to right
//!
//! Type parameters range over their matcher's types by descending
//! precedence; enum parameters over admissible entries in canonical order.
//! Number parameters contribute a single symbolic value: the caller
//! supplies the number. Permutations whose descriptions coincide (two
//! matcher options naming the same concrete type) collapse to the first.

use std::fmt::Write as _;

use idef_ir::Span;
use idef_sem::{
    EnumConstraint, EnumEntryId, FullyQualifiedName, IntrinsicGroup, Overload, OverloadId, Sem,
    Stages, Target, TemplateParam, TemplateParamKind, TypeConstraint, TypeId, TypeMatcherId,
};
use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::PermuteError;

/// Knobs for [`Permuter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermuterConfig {
    /// Whether an unconstrained type parameter ranges over every
    /// non-templated type. When off, such a parameter is an error.
    pub default_universe: bool,
}

impl Default for PermuterConfig {
    fn default() -> Self {
        PermuterConfig {
            default_universe: true,
        }
    }
}

/// A concrete template argument or parameter type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConcreteArg {
    Type { ty: TypeId, args: Vec<ConcreteArg> },
    Entry(EnumEntryId),
    /// A number parameter, left symbolic under its parameter name.
    Number(String),
}

impl ConcreteArg {
    fn plain(ty: TypeId) -> Self {
        ConcreteArg::Type {
            ty,
            args: Vec::new(),
        }
    }

    /// Canonical text: `vec<N, f32>`.
    pub fn render(&self, sem: &Sem) -> String {
        let mut out = String::new();
        self.render_into(sem, &mut out);
        out
    }

    fn render_into(&self, sem: &Sem, out: &mut String) {
        match self {
            ConcreteArg::Type { ty, args } => {
                out.push_str(&sem.ty(*ty).name);
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.render_into(sem, out);
                    }
                    out.push('>');
                }
            }
            ConcreteArg::Entry(id) => out.push_str(&sem.entry(*id).name),
            ConcreteArg::Number(name) => out.push_str(name),
        }
    }

    /// Human-facing text, honouring `@display` formats.
    pub fn display_name(&self, sem: &Sem) -> String {
        match self {
            ConcreteArg::Type { ty, args } => {
                let args: Vec<String> = args.iter().map(|a| a.display_name(sem)).collect();
                sem.ty(*ty).display_name(&args)
            }
            ConcreteArg::Entry(_) | ConcreteArg::Number(_) => self.render(sem),
        }
    }
}

/// One template parameter bound to a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateBinding {
    pub name: String,
    pub value: ConcreteArg,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PermutedParameter {
    pub name: Option<String>,
    pub ty: ConcreteArg,
    pub is_const: bool,
}

/// One concrete instantiation of an overload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    pub overload: OverloadId,
    pub intrinsic: String,
    pub group: IntrinsicGroup,
    /// Every template parameter, in signature order.
    pub template_args: Vec<TemplateBinding>,
    pub parameters: Vec<PermutedParameter>,
    pub return_type: Option<ConcreteArg>,
    pub stages: Stages,
    pub must_use: bool,
    /// Canonical signature text, unique within one overload's permutations.
    pub description: String,
}

/// Expands overloads of one [`Sem`].
#[derive(Clone, Copy, Debug)]
pub struct Permuter<'s> {
    sem: &'s Sem,
    config: PermuterConfig,
}

/// Values of one enumeration dimension.
type Dimension = SmallVec<[ConcreteArg; 4]>;

impl<'s> Permuter<'s> {
    pub fn new(sem: &'s Sem) -> Self {
        Self::with_config(sem, PermuterConfig::default())
    }

    pub fn with_config(sem: &'s Sem, config: PermuterConfig) -> Self {
        Permuter { sem, config }
    }

    pub fn sem(&self) -> &'s Sem {
        self.sem
    }

    /// Every distinct permutation of `overload`, in enumeration order.
    ///
    /// Deterministic: the same `Sem` always yields the same list.
    #[tracing::instrument(level = "debug", skip_all, fields(overload = %overload.description))]
    pub fn permute(&self, overload: &Overload) -> Result<Vec<Permutation>, PermuteError> {
        if let Some(ret) = &overload.return_type {
            if ret.contains_matcher() {
                return Err(PermuteError::UnpinnedReturn {
                    overload: overload.description.clone(),
                    span: ret.span,
                });
            }
        }

        let mut dimensions: Vec<Dimension> = Vec::new();
        for param in &overload.template_params {
            dimensions.push(self.param_values(overload, param)?);
        }
        let param_dims = dimensions.len();
        for param in &overload.parameters {
            self.push_matcher_dimensions(overload, &param.ty, &mut dimensions)?;
        }

        if dimensions.iter().any(SmallVec::is_empty) {
            return Err(PermuteError::NoPermutations {
                overload: overload.description.clone(),
                span: overload.span,
            });
        }

        let intrinsic = self.sem.intrinsic(overload.intrinsic);
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut permutations = Vec::new();
        let mut cursor = vec![0usize; dimensions.len()];
        loop {
            let values: Vec<&ConcreteArg> = cursor
                .iter()
                .zip(&dimensions)
                .map(|(&i, dim)| &dim[i])
                .collect();
            let (bindings, matchers) = values.split_at(param_dims);
            let permutation =
                self.instantiate(overload, intrinsic.name.as_str(), bindings, matchers)?;
            if seen.insert(permutation.description.clone()) {
                tracing::trace!(description = %permutation.description, "permutation");
                permutations.push(permutation);
            }
            if !advance(&mut cursor, &dimensions) {
                break;
            }
        }
        tracing::debug!(count = permutations.len(), "permuted");
        Ok(permutations)
    }

    fn param_values(
        &self,
        overload: &Overload,
        param: &TemplateParam,
    ) -> Result<Dimension, PermuteError> {
        match &param.kind {
            TemplateParamKind::Type(None) => {
                if !self.config.default_universe {
                    return Err(PermuteError::Unenumerable {
                        overload: overload.description.clone(),
                        param: param.name.clone(),
                        span: param.span,
                    });
                }
                Ok(self.sem.plain_types().map(|t| ConcreteArg::plain(t.id)).collect())
            }
            TemplateParamKind::Type(Some(TypeConstraint::Matcher(id))) => {
                self.type_matcher_values(overload, *id, param.span)
            }
            TemplateParamKind::Type(Some(TypeConstraint::Type(fqn))) => {
                self.constraint_values(overload, param, fqn)
            }
            TemplateParamKind::Enum(EnumConstraint::Enum(id)) => Ok(self
                .sem
                .enum_def(*id)
                .canonical_entries()
                .map(|e| ConcreteArg::Entry(e.id))
                .collect()),
            TemplateParamKind::Enum(EnumConstraint::Matcher(id)) => Ok(self
                .sem
                .enum_matcher(*id)
                .canonical_entries(self.sem)
                .into_iter()
                .map(|e| ConcreteArg::Entry(e.id))
                .collect()),
            TemplateParamKind::Number => {
                Ok(smallvec![ConcreteArg::Number(param.name.clone())])
            }
        }
    }

    /// Push one dimension per matcher named directly in `ty`, pre-order.
    fn push_matcher_dimensions(
        &self,
        overload: &Overload,
        ty: &FullyQualifiedName,
        dimensions: &mut Vec<Dimension>,
    ) -> Result<(), PermuteError> {
        let mut result = Ok(());
        ty.walk(&mut |name| {
            if result.is_ok() {
                match self.matcher_values(overload, name) {
                    Some(Ok(values)) => dimensions.push(values),
                    Some(Err(e)) => result = Err(e),
                    None => {}
                }
            }
        });
        result
    }

    /// Every type a templated constraint such as `ptr<rw, f32>` admits.
    ///
    /// Matchers inside the constraint are expanded in place, so the
    /// parameter stays a single dimension. Duplicate types keep the first.
    fn constraint_values(
        &self,
        overload: &Overload,
        param: &TemplateParam,
        constraint: &FullyQualifiedName,
    ) -> Result<Dimension, PermuteError> {
        let mut inner: Vec<Dimension> = Vec::new();
        self.push_matcher_dimensions(overload, constraint, &mut inner)?;
        let mut values = Dimension::new();
        if inner.iter().any(SmallVec::is_empty) {
            return Ok(values);
        }
        let mut cursor = vec![0usize; inner.len()];
        loop {
            let picked: Vec<&ConcreteArg> =
                cursor.iter().zip(&inner).map(|(&i, dim)| &dim[i]).collect();
            let value = self
                .substitute(constraint, &[], &mut picked.iter())
                .ok_or_else(|| PermuteError::Unenumerable {
                    overload: overload.description.clone(),
                    param: param.name.clone(),
                    span: param.span,
                })?;
            if !values.contains(&value) {
                values.push(value);
            }
            if !advance(&mut cursor, &inner) {
                break;
            }
        }
        Ok(values)
    }

    /// Values for a direct matcher reference, or `None` for other names.
    fn matcher_values(
        &self,
        overload: &Overload,
        name: &FullyQualifiedName,
    ) -> Option<Result<Dimension, PermuteError>> {
        match name.target {
            Target::TypeMatcher(id) => Some(self.type_matcher_values(overload, id, name.span)),
            Target::EnumMatcher(id) => Some(Ok(self
                .sem
                .enum_matcher(id)
                .canonical_entries(self.sem)
                .into_iter()
                .map(|e| ConcreteArg::Entry(e.id))
                .collect())),
            _ => None,
        }
    }

    fn type_matcher_values(
        &self,
        overload: &Overload,
        id: TypeMatcherId,
        span: Span,
    ) -> Result<Dimension, PermuteError> {
        let matcher = self.sem.type_matcher(id);
        let types = matcher.precedence_sorted_types(self.sem);
        if let Some(templated) = types.iter().find(|&&t| self.sem.ty(t).is_templated()) {
            return Err(PermuteError::DegenerateMatcher {
                overload: overload.description.clone(),
                matcher: matcher.name.clone(),
                ty: self.sem.ty(*templated).name.clone(),
                span,
            });
        }
        Ok(types.into_iter().map(ConcreteArg::plain).collect())
    }

    /// Replace template parameter references with `bindings` and direct
    /// matcher references with successive `matchers` values.
    ///
    /// `None` when a matcher appears with no value left to fill it.
    fn substitute(
        &self,
        name: &FullyQualifiedName,
        bindings: &[&ConcreteArg],
        matchers: &mut std::slice::Iter<'_, &ConcreteArg>,
    ) -> Option<ConcreteArg> {
        Some(match name.target {
            Target::Type(ty) => {
                let mut args = Vec::with_capacity(name.template_args.len());
                for arg in &name.template_args {
                    args.push(self.substitute(arg, bindings, matchers)?);
                }
                ConcreteArg::Type { ty, args }
            }
            Target::EnumEntry(id) => ConcreteArg::Entry(id),
            Target::TemplateParam(index) => (*bindings.get(index)?).clone(),
            Target::TypeMatcher(_) | Target::EnumMatcher(_) => (*matchers.next()?).clone(),
        })
    }

    fn instantiate(
        &self,
        overload: &Overload,
        intrinsic: &str,
        bindings: &[&ConcreteArg],
        matchers: &[&ConcreteArg],
    ) -> Result<Permutation, PermuteError> {
        let unfilled = |span| PermuteError::Unfilled {
            overload: overload.description.clone(),
            span,
        };
        let mut matcher_values = matchers.iter();
        let parameters = overload
            .parameters
            .iter()
            .map(|param| {
                let ty = self
                    .substitute(&param.ty, bindings, &mut matcher_values)
                    .ok_or_else(|| unfilled(param.ty.span))?;
                Ok(PermutedParameter {
                    name: param.name.clone(),
                    ty,
                    is_const: param.is_const,
                })
            })
            .collect::<Result<Vec<_>, PermuteError>>()?;
        let return_type = match &overload.return_type {
            Some(ret) => Some(
                self.substitute(ret, bindings, &mut [].iter())
                    .ok_or_else(|| unfilled(ret.span))?,
            ),
            None => None,
        };
        let template_args: Vec<TemplateBinding> = overload
            .template_params
            .iter()
            .zip(bindings)
            .map(|(param, value)| TemplateBinding {
                name: param.name.clone(),
                value: (*value).clone(),
            })
            .collect();
        let group = self.sem.intrinsic(overload.intrinsic).group;
        let description = describe(
            self.sem,
            group,
            intrinsic,
            &template_args[..overload.explicit_template_count.min(template_args.len())],
            &parameters,
            return_type.as_ref(),
        );
        Ok(Permutation {
            overload: overload.id,
            intrinsic: intrinsic.to_string(),
            group,
            template_args,
            parameters,
            return_type,
            stages: overload.stages,
            must_use: overload.must_use,
            description,
        })
    }
}

/// `fn name<explicit>(a: T, U) -> R`
fn describe(
    sem: &Sem,
    group: IntrinsicGroup,
    intrinsic: &str,
    explicit: &[TemplateBinding],
    parameters: &[PermutedParameter],
    return_type: Option<&ConcreteArg>,
) -> String {
    let mut out = format!("{} {intrinsic}", group.keyword());
    if !explicit.is_empty() {
        let args: Vec<String> = explicit.iter().map(|b| b.value.render(sem)).collect();
        let _ = write!(out, "<{}>", args.join(", "));
    }
    out.push('(');
    for (i, param) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(name) = &param.name {
            let _ = write!(out, "{name}: ");
        }
        out.push_str(&param.ty.render(sem));
    }
    out.push(')');
    if let Some(ret) = return_type {
        let _ = write!(out, " -> {}", ret.render(sem));
    }
    out
}

/// Step an odometer over `dimensions`, last dimension fastest.
///
/// Returns `false` once every combination has been visited.
fn advance(cursor: &mut [usize], dimensions: &[Dimension]) -> bool {
    for (slot, dim) in cursor.iter_mut().zip(dimensions).rev() {
        *slot += 1;
        if *slot < dim.len() {
            return true;
        }
        *slot = 0;
    }
    false
}
