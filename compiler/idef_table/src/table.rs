//! The intrinsic table: every overload encoded as indices into shared,
//! compacted arrays.
//!
//! # Layout
//!
//! Type matcher slots:
//! - one per template type index, up to [`Aggregates::max_template_types`]
//! - one per declared type
//! - one per type matcher
//!
//! Number matcher slots:
//! - one per template number index, up to [`Aggregates::max_template_numbers`]
//! - one per enum matcher
//! - one per enum (whole-enum constraints)
//! - one per enum entry named directly as a template argument
//!
//! A resolved name flattens pre-order into matcher indices:
//! `A<B<C>, D>` becomes `A, B, C, D`. Each index selects from the type or
//! number list depending on the position it fills. Matcher-index sequences,
//! template records, parameter records and overload records are each
//! compacted through their own [`Lut`].

use idef_sem::{
    EnumConstraint, EnumEntryId, FullyQualifiedName, IntrinsicGroup, Overload, Sem, Target,
    TemplateParamKind, TypeConstraint,
};
use rustc_hash::FxHashMap;

use crate::lut::{Lut, SequenceId};
use crate::{Aggregates, BuildError, Permuter, PermuterConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlotKind {
    TemplateType,
    Type,
    TypeMatcher,
    TemplateNumber,
    EnumMatcher,
    Enum,
    EnumEntry,
}

/// One entry of a matcher list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatcherSlot {
    pub kind: SlotKind,
    pub name: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TemplateKind {
    Type,
    Number,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemplateRecord {
    pub name: String,
    pub kind: TemplateKind,
    /// Offset of the constraint's matcher indices; `None` when unconstrained.
    pub matcher_indices: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterRecord {
    pub name: Option<String>,
    pub matcher_indices: Option<u32>,
    pub is_const: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OverloadRecord {
    pub num_parameters: u32,
    pub num_explicit_templates: u32,
    pub num_templates: u32,
    pub templates_offset: Option<u32>,
    pub parameters_offset: Option<u32>,
    pub return_matcher_indices: Option<u32>,
    /// [`idef_sem::Stages`] bits.
    pub stages: u8,
    pub must_use: bool,
    pub is_deprecated: bool,
    pub const_eval: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntrinsicRecord {
    pub name: String,
    /// Declared signature of each overload, in declaration order.
    pub overload_descriptions: Vec<String>,
    pub num_overloads: u32,
    pub overloads_offset: Option<u32>,
}

/// Everything the generated overload resolver is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntrinsicTable {
    pub type_matchers: Vec<MatcherSlot>,
    pub number_matchers: Vec<MatcherSlot>,
    pub matcher_indices: Vec<u32>,
    pub templates: Vec<TemplateRecord>,
    pub parameters: Vec<ParameterRecord>,
    pub overloads: Vec<OverloadRecord>,
    pub builtins: Vec<IntrinsicRecord>,
    pub unary_operators: Vec<IntrinsicRecord>,
    pub binary_operators: Vec<IntrinsicRecord>,
    pub constructors: Vec<IntrinsicRecord>,
    pub converters: Vec<IntrinsicRecord>,
    pub aggregates: Aggregates,
}

impl IntrinsicTable {
    pub fn group(&self, group: IntrinsicGroup) -> &[IntrinsicRecord] {
        match group {
            IntrinsicGroup::Builtin => &self.builtins,
            IntrinsicGroup::UnaryOperator => &self.unary_operators,
            IntrinsicGroup::BinaryOperator => &self.binary_operators,
            IntrinsicGroup::Constructor => &self.constructors,
            IntrinsicGroup::Converter => &self.converters,
        }
    }

    fn group_mut(&mut self, group: IntrinsicGroup) -> &mut Vec<IntrinsicRecord> {
        match group {
            IntrinsicGroup::Builtin => &mut self.builtins,
            IntrinsicGroup::UnaryOperator => &mut self.unary_operators,
            IntrinsicGroup::BinaryOperator => &mut self.binary_operators,
            IntrinsicGroup::Constructor => &mut self.constructors,
            IntrinsicGroup::Converter => &mut self.converters,
        }
    }

    /// The matcher indices starting at `offset`, `len` long.
    pub fn indices(&self, offset: Option<u32>, len: usize) -> &[u32] {
        match offset {
            Some(offset) => {
                let start = offset as usize;
                self.matcher_indices.get(start..start + len).unwrap_or(&[])
            }
            None => &[],
        }
    }
}

/// Build the table with the default [`PermuterConfig`].
pub fn build_table(sem: &Sem) -> Result<IntrinsicTable, Vec<BuildError>> {
    build_table_with(sem, PermuterConfig::default())
}

/// Build the table, first checking every overload admits a permutation.
///
/// Failures are collected across all overloads; no partial table is
/// returned.
#[tracing::instrument(level = "debug", skip_all, fields(overloads = sem.overloads().len()))]
pub fn build_table_with(
    sem: &Sem,
    config: PermuterConfig,
) -> Result<IntrinsicTable, Vec<BuildError>> {
    let permuter = Permuter::with_config(sem, config);
    let errors: Vec<BuildError> = sem
        .overloads()
        .iter()
        .filter_map(|overload| permuter.permute(overload).err())
        .map(BuildError::from)
        .collect();
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "table build failed");
        return Err(errors);
    }
    Ok(TableBuilder::new(sem).build())
}

/// Saturating `usize` to `u32` for table fields.
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Overload data gathered before any LUT is compacted.
struct PendingOverload {
    group: IntrinsicGroup,
    intrinsic: usize,
    templates: Vec<(String, TemplateKind, Option<SequenceId>)>,
    parameters: Vec<(Option<String>, bool, Option<SequenceId>)>,
    return_type: Option<SequenceId>,
    record: OverloadRecord,
}

struct TableBuilder<'s> {
    sem: &'s Sem,
    aggregates: Aggregates,
    type_base: u32,
    type_matcher_base: u32,
    enum_matcher_base: u32,
    enum_base: u32,
    entry_base: u32,
    /// Entries named directly, in first-encounter order.
    entry_slots: FxHashMap<EnumEntryId, u32>,
    entry_order: Vec<EnumEntryId>,
    matcher_indices: Lut<u32>,
}

impl<'s> TableBuilder<'s> {
    fn new(sem: &'s Sem) -> Self {
        let aggregates = Aggregates::of(sem);
        let type_base = to_u32(aggregates.max_template_types);
        let type_matcher_base = type_base + to_u32(sem.types().len());
        let enum_matcher_base = to_u32(aggregates.max_template_numbers);
        let enum_base = enum_matcher_base + to_u32(sem.enum_matchers().len());
        let entry_base = enum_base + to_u32(sem.enums().len());
        TableBuilder {
            sem,
            aggregates,
            type_base,
            type_matcher_base,
            enum_matcher_base,
            enum_base,
            entry_base,
            entry_slots: FxHashMap::default(),
            entry_order: Vec::new(),
            matcher_indices: Lut::new(),
        }
    }

    fn build(mut self) -> IntrinsicTable {
        let sem = self.sem;
        let mut intrinsic_names: Vec<(IntrinsicGroup, String, Vec<String>)> = Vec::new();
        let mut pending: Vec<PendingOverload> = Vec::new();
        for group in IntrinsicGroup::ALL {
            for intrinsic in sem.intrinsics_in(group) {
                let index = intrinsic_names.len();
                let descriptions = sem
                    .overloads_of(intrinsic)
                    .map(|o| o.description.clone())
                    .collect();
                intrinsic_names.push((group, intrinsic.name.clone(), descriptions));
                for overload in sem.overloads_of(intrinsic) {
                    let overload = self.pending_overload(group, index, overload);
                    pending.push(overload);
                }
            }
        }

        let mut table = IntrinsicTable {
            type_matchers: self.type_matcher_slots(),
            number_matchers: self.number_matcher_slots(),
            aggregates: self.aggregates.clone(),
            ..IntrinsicTable::default()
        };

        let indices = self.matcher_indices.compact();
        let mut templates = Lut::new();
        let mut parameters = Lut::new();
        let sequences: Vec<(Option<SequenceId>, Option<SequenceId>)> = pending
            .iter()
            .map(|p| {
                let t = templates.add(p.templates.iter().map(|(name, kind, m)| TemplateRecord {
                    name: name.clone(),
                    kind: *kind,
                    matcher_indices: indices.index_of(*m),
                }));
                let params =
                    parameters.add(p.parameters.iter().map(|(name, is_const, m)| {
                        ParameterRecord {
                            name: name.clone(),
                            matcher_indices: indices.index_of(*m),
                            is_const: *is_const,
                        }
                    }));
                (t, params)
            })
            .collect();
        let templates = templates.compact();
        let parameters = parameters.compact();

        let mut overloads = Lut::new();
        let mut per_intrinsic: Vec<Vec<OverloadRecord>> = vec![Vec::new(); intrinsic_names.len()];
        for (p, (t, params)) in pending.into_iter().zip(sequences) {
            let mut record = p.record;
            record.templates_offset = templates.index_of(t);
            record.parameters_offset = parameters.index_of(params);
            record.return_matcher_indices = indices.index_of(p.return_type);
            per_intrinsic[p.intrinsic].push(record);
        }
        let overload_ids: Vec<Option<SequenceId>> = per_intrinsic
            .into_iter()
            .map(|records| overloads.add(records))
            .collect();
        let overloads = overloads.compact();

        for ((group, name, descriptions), id) in intrinsic_names.into_iter().zip(overload_ids) {
            table.group_mut(group).push(IntrinsicRecord {
                name,
                num_overloads: to_u32(descriptions.len()),
                overload_descriptions: descriptions,
                overloads_offset: overloads.index_of(id),
            });
        }
        table.matcher_indices = indices.into_items();
        table.templates = templates.into_items();
        table.parameters = parameters.into_items();
        table.overloads = overloads.into_items();
        tracing::debug!(
            matcher_indices = table.matcher_indices.len(),
            templates = table.templates.len(),
            parameters = table.parameters.len(),
            overloads = table.overloads.len(),
            "table built"
        );
        table
    }

    fn pending_overload(
        &mut self,
        group: IntrinsicGroup,
        intrinsic: usize,
        overload: &Overload,
    ) -> PendingOverload {
        // Slot of each template parameter within its kind's template list.
        let mut local = Vec::with_capacity(overload.template_params.len());
        let (mut types, mut numbers) = (0u32, 0u32);
        for param in &overload.template_params {
            if matches!(param.kind, TemplateParamKind::Type(_)) {
                local.push(types);
                types += 1;
            } else {
                local.push(numbers);
                numbers += 1;
            }
        }

        let templates = overload
            .template_params
            .iter()
            .map(|param| {
                let (kind, indices) = match &param.kind {
                    TemplateParamKind::Type(None) => (TemplateKind::Type, Vec::new()),
                    TemplateParamKind::Type(Some(TypeConstraint::Matcher(id))) => {
                        (TemplateKind::Type, vec![self.type_matcher_base + id.raw()])
                    }
                    TemplateParamKind::Type(Some(TypeConstraint::Type(fqn))) => {
                        (TemplateKind::Type, self.flatten(fqn, &local))
                    }
                    TemplateParamKind::Enum(EnumConstraint::Enum(id)) => {
                        (TemplateKind::Number, vec![self.enum_base + id.raw()])
                    }
                    TemplateParamKind::Enum(EnumConstraint::Matcher(id)) => {
                        (TemplateKind::Number, vec![self.enum_matcher_base + id.raw()])
                    }
                    TemplateParamKind::Number => (TemplateKind::Number, Vec::new()),
                };
                (param.name.clone(), kind, self.matcher_indices.add(indices))
            })
            .collect();
        let parameters = overload
            .parameters
            .iter()
            .map(|param| {
                let indices = self.flatten(&param.ty, &local);
                (param.name.clone(), param.is_const, self.matcher_indices.add(indices))
            })
            .collect();
        let return_type = overload.return_type.as_ref().and_then(|ret| {
            let indices = self.flatten(ret, &local);
            self.matcher_indices.add(indices)
        });

        PendingOverload {
            group,
            intrinsic,
            templates,
            parameters,
            return_type,
            record: OverloadRecord {
                num_parameters: to_u32(overload.parameters.len()),
                num_explicit_templates: to_u32(overload.explicit_template_count),
                num_templates: to_u32(overload.template_params.len()),
                templates_offset: None,
                parameters_offset: None,
                return_matcher_indices: None,
                stages: overload.stages.bits(),
                must_use: overload.must_use,
                is_deprecated: overload.deprecated.is_some(),
                const_eval: overload.const_eval.clone(),
            },
        }
    }

    /// Pre-order matcher indices of `name`.
    fn flatten(&mut self, name: &FullyQualifiedName, local: &[u32]) -> Vec<u32> {
        let mut out = Vec::new();
        self.flatten_into(name, local, &mut out);
        out
    }

    fn flatten_into(&mut self, name: &FullyQualifiedName, local: &[u32], out: &mut Vec<u32>) {
        let index = match name.target {
            Target::Type(id) => self.type_base + id.raw(),
            Target::TypeMatcher(id) => self.type_matcher_base + id.raw(),
            Target::EnumMatcher(id) => self.enum_matcher_base + id.raw(),
            Target::EnumEntry(id) => self.entry_slot(id),
            Target::TemplateParam(i) => local.get(i).copied().unwrap_or(u32::MAX),
        };
        out.push(index);
        for arg in &name.template_args {
            self.flatten_into(arg, local, out);
        }
    }

    fn entry_slot(&mut self, id: EnumEntryId) -> u32 {
        if let Some(&slot) = self.entry_slots.get(&id) {
            return slot;
        }
        let slot = self.entry_base + to_u32(self.entry_order.len());
        self.entry_slots.insert(id, slot);
        self.entry_order.push(id);
        slot
    }

    fn type_matcher_slots(&self) -> Vec<MatcherSlot> {
        let sem = self.sem;
        let templates = (0..self.aggregates.max_template_types).map(|i| MatcherSlot {
            kind: SlotKind::TemplateType,
            name: format!("template type {i}"),
        });
        let types = sem.types().iter().map(|ty| {
            let params: Vec<String> = ty.template_params.iter().map(|p| p.name.clone()).collect();
            MatcherSlot {
                kind: SlotKind::Type,
                name: ty.display_name(&params),
            }
        });
        let matchers = sem.type_matchers().iter().map(|m| MatcherSlot {
            kind: SlotKind::TypeMatcher,
            name: m.name.clone(),
        });
        templates.chain(types).chain(matchers).collect()
    }

    fn number_matcher_slots(&self) -> Vec<MatcherSlot> {
        let sem = self.sem;
        let templates = (0..self.aggregates.max_template_numbers).map(|i| MatcherSlot {
            kind: SlotKind::TemplateNumber,
            name: format!("template number {i}"),
        });
        let matchers = sem.enum_matchers().iter().map(|m| MatcherSlot {
            kind: SlotKind::EnumMatcher,
            name: m.name.clone(),
        });
        let enums = sem.enums().iter().map(|e| MatcherSlot {
            kind: SlotKind::Enum,
            name: e.name.clone(),
        });
        let entries = self.entry_order.iter().map(|&id| MatcherSlot {
            kind: SlotKind::EnumEntry,
            name: format!("{}.{}", sem.enum_def(id.owner).name, sem.entry(id).name),
        });
        templates.chain(matchers).chain(enums).chain(entries).collect()
    }
}
