//! Fully qualified names: the resolved form of a templated name.

use std::fmt;

use idef_ir::Span;

use crate::{EnumEntryId, EnumMatcherId, Sem, TemplateParam, TypeId, TypeMatcherId};

/// What a resolved name refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Type(TypeId),
    TypeMatcher(TypeMatcherId),
    EnumMatcher(EnumMatcherId),
    EnumEntry(EnumEntryId),
    /// Index into the enclosing declaration's template parameter list.
    TemplateParam(usize),
}

/// A resolved name plus its resolved template arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FullyQualifiedName {
    pub span: Span,
    pub target: Target,
    pub template_args: Vec<FullyQualifiedName>,
}

impl FullyQualifiedName {
    pub fn new(span: Span, target: Target) -> Self {
        FullyQualifiedName {
            span,
            target,
            template_args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<FullyQualifiedName>) -> Self {
        self.template_args = args;
        self
    }

    /// Pre-order walk over this name and all nested arguments.
    pub fn walk(&self, f: &mut impl FnMut(&FullyQualifiedName)) {
        f(self);
        for arg in &self.template_args {
            arg.walk(f);
        }
    }

    /// Does this name or any argument refer to a matcher directly?
    pub fn contains_matcher(&self) -> bool {
        let mut found = false;
        self.walk(&mut |n| {
            found |= matches!(n.target, Target::TypeMatcher(_) | Target::EnumMatcher(_));
        });
        found
    }

    /// Render the name using `sem` for globals and `params` for template
    /// parameter references.
    pub fn display<'a>(&'a self, sem: &'a Sem, params: &'a [TemplateParam]) -> FqnDisplay<'a> {
        FqnDisplay {
            name: self,
            sem,
            params,
        }
    }
}

/// [`fmt::Display`] adapter returned by [`FullyQualifiedName::display`].
pub struct FqnDisplay<'a> {
    name: &'a FullyQualifiedName,
    sem: &'a Sem,
    params: &'a [TemplateParam],
}

impl fmt::Display for FqnDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.target {
            Target::Type(id) => f.write_str(&self.sem.ty(id).name)?,
            Target::TypeMatcher(id) => f.write_str(&self.sem.type_matcher(id).name)?,
            Target::EnumMatcher(id) => f.write_str(&self.sem.enum_matcher(id).name)?,
            Target::EnumEntry(id) => f.write_str(&self.sem.entry(id).name)?,
            Target::TemplateParam(index) => match self.params.get(index) {
                Some(param) => f.write_str(&param.name)?,
                None => write!(f, "${index}")?,
            },
        }
        if !self.name.template_args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.name.template_args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg.display(self.sem, self.params))?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
