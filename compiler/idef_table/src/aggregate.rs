//! Corpus-wide aggregates over every overload.

use idef_sem::{Sem, TemplateParamKind};
use rustc_hash::FxHashSet;

/// Sizes the generated resolver needs up front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aggregates {
    /// Most type template parameters on any one overload.
    pub max_template_types: usize,
    /// Most enum and number template parameters on any one overload.
    pub max_template_numbers: usize,
    /// Most template parameters of any kind on any one overload.
    pub max_templates: usize,
    /// Every declared parameter name, sorted, without duplicates.
    pub unique_parameter_names: Vec<String>,
}

impl Aggregates {
    pub fn of(sem: &Sem) -> Self {
        let mut aggregates = Aggregates::default();
        let mut names: FxHashSet<&str> = FxHashSet::default();
        for overload in sem.overloads() {
            let types = overload
                .template_params
                .iter()
                .filter(|p| matches!(p.kind, TemplateParamKind::Type(_)))
                .count();
            let total = overload.template_params.len();
            aggregates.max_template_types = aggregates.max_template_types.max(types);
            aggregates.max_template_numbers = aggregates.max_template_numbers.max(total - types);
            aggregates.max_templates = aggregates.max_templates.max(total);
            names.extend(overload.parameters.iter().filter_map(|p| p.name.as_deref()));
        }
        let mut names: Vec<String> = names.into_iter().map(str::to_string).collect();
        names.sort_unstable();
        aggregates.unique_parameter_names = names;
        aggregates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idef_ir::FileId;
    use pretty_assertions::assert_eq;

    #[test]
    fn maxima_and_names() {
        let sem = idef_sem::parse_and_resolve(
            "enum access { read write }
             type f32
             type vec<N: num, T>
             fn a<T>(value: T, x: f32)
             fn b<T, U>[N: num, A: access](x: vec<N, T>, y: U, value: f32)
             fn c(f32)",
            FileId::new(1),
        )
        .unwrap();
        let aggregates = Aggregates::of(&sem);
        assert_eq!(aggregates.max_template_types, 2);
        assert_eq!(aggregates.max_template_numbers, 2);
        assert_eq!(aggregates.max_templates, 4);
        assert_eq!(aggregates.unique_parameter_names, vec!["value", "x", "y"]);
    }

    #[test]
    fn empty_sem() {
        assert_eq!(Aggregates::of(&Sem::default()), Aggregates::default());
    }
}
