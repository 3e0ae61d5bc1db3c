//! Intrinsics and their overloads.

use std::fmt;

use bitflags::bitflags;
use idef_ir::Span;

use crate::{FullyQualifiedName, IntrinsicId, OverloadId, TemplateParam};

bitflags! {
    /// Shader stages an overload may be called from.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Stages: u8 {
        const VERTEX = 1 << 0;
        const FRAGMENT = 1 << 1;
        const COMPUTE = 1 << 2;
    }
}

impl Stages {
    /// Parse one stage name as written in `@stage(...)`.
    pub fn from_stage_name(name: &str) -> Option<Stages> {
        match name {
            "vertex" => Some(Stages::VERTEX),
            "fragment" => Some(Stages::FRAGMENT),
            "compute" => Some(Stages::COMPUTE),
            _ => None,
        }
    }
}

impl Default for Stages {
    fn default() -> Self {
        Stages::all()
    }
}

impl fmt::Display for Stages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Stages::VERTEX, "vertex"),
            (Stages::FRAGMENT, "fragment"),
            (Stages::COMPUTE, "compute"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();
        f.write_str(&names.join(" | "))
    }
}

/// The table an intrinsic lands in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntrinsicGroup {
    Builtin,
    UnaryOperator,
    BinaryOperator,
    Constructor,
    Converter,
}

impl IntrinsicGroup {
    pub const ALL: [IntrinsicGroup; 5] = [
        IntrinsicGroup::Builtin,
        IntrinsicGroup::UnaryOperator,
        IntrinsicGroup::BinaryOperator,
        IntrinsicGroup::Constructor,
        IntrinsicGroup::Converter,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            IntrinsicGroup::Builtin => "fn",
            IntrinsicGroup::UnaryOperator | IntrinsicGroup::BinaryOperator => "op",
            IntrinsicGroup::Constructor => "ctor",
            IntrinsicGroup::Converter => "conv",
        }
    }
}

impl fmt::Display for IntrinsicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntrinsicGroup::Builtin => "builtin",
            IntrinsicGroup::UnaryOperator => "unary operator",
            IntrinsicGroup::BinaryOperator => "binary operator",
            IntrinsicGroup::Constructor => "constructor",
            IntrinsicGroup::Converter => "converter",
        })
    }
}

/// All overloads sharing one name within one group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Intrinsic {
    pub id: IntrinsicId,
    pub name: String,
    pub group: IntrinsicGroup,
    /// Overloads in declaration order.
    pub overloads: Vec<OverloadId>,
}

/// One declared signature of an intrinsic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Overload {
    pub id: OverloadId,
    pub span: Span,
    pub intrinsic: IntrinsicId,
    /// The declaration as written, used to name the overload in errors.
    pub description: String,
    /// Explicit parameters first, then implicit ones.
    pub template_params: Vec<TemplateParam>,
    pub explicit_template_count: usize,
    pub parameters: Vec<OverloadParameter>,
    pub return_type: Option<FullyQualifiedName>,
    pub stages: Stages,
    pub must_use: bool,
    /// Name of the constant-evaluation function from `@const`.
    pub const_eval: Option<String>,
    /// Message from `@deprecated`; empty when given without one.
    pub deprecated: Option<String>,
}

impl Overload {
    pub fn explicit_template_params(&self) -> &[TemplateParam] {
        &self.template_params[..self.explicit_template_count]
    }

    pub fn implicit_template_params(&self) -> &[TemplateParam] {
        &self.template_params[self.explicit_template_count..]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverloadParameter {
    pub name: Option<String>,
    pub span: Span,
    pub ty: FullyQualifiedName,
    /// Marked `@const`: the argument must be a compile-time constant.
    pub is_const: bool,
}
