//! Passes 1 to 3: enums, types and matchers.

use idef_diagnostic::{unresolved_name, Diagnostic, ErrorCode};
use idef_ir::{ast, MatcherOption, Span};

use super::attrs;
use super::{Global, Resolver};
use crate::{
    Enum, EnumEntry, EnumEntryId, EnumId, EnumMatcher, EnumMatcherId, Type, TypeId, TypeMatcher,
    TypeMatcherId,
};

/// What one matcher option resolved to.
enum OptionTarget {
    Type(TypeId),
    Entry(EnumEntryId),
}

impl Resolver {
    /// Pass 1: create every enum with its entries.
    pub(super) fn declare_enums(&mut self, decls: &[ast::EnumDecl]) {
        for decl in decls {
            let id = EnumId::next(&self.sem.enums);
            self.check_attributes(&decl.attributes, attrs::NONE, "enum");
            let mut entries: Vec<EnumEntry> = Vec::with_capacity(decl.entries.len());
            for entry in &decl.entries {
                self.check_attributes(&entry.attributes, attrs::ENUM_ENTRY, "enum entry");
                if let Some(previous) = entries.iter().find(|e| e.name == entry.name) {
                    let previous_span = previous.span;
                    self.error(
                        Diagnostic::error(ErrorCode::E2002)
                            .with_message(format!(
                                "enum `{}` has more than one entry named `{}`",
                                decl.name, entry.name
                            ))
                            .with_label(entry.span, "redeclared here")
                            .with_secondary_label(previous_span, "first declared here"),
                    );
                    continue;
                }
                let index = u32::try_from(entries.len()).unwrap_or(u32::MAX);
                let entry_id = EnumEntryId::new(id, index);
                self.entries
                    .entry(entry.name.clone())
                    .or_default()
                    .push(entry_id);
                entries.push(EnumEntry {
                    id: entry_id,
                    name: entry.name.clone(),
                    span: entry.span,
                    is_internal: entry.attributes.has("internal"),
                });
            }
            self.declare_global(&decl.name, decl.span, Global::Enum(id));
            self.sem.enums.push(Enum {
                id,
                name: decl.name.clone(),
                span: decl.span,
                entries,
            });
        }
    }

    /// Pass 2a: register every type name. Template parameters come in pass 3.
    pub(super) fn declare_types(&mut self, decls: &[ast::TypeDecl]) {
        for decl in decls {
            let id = TypeId::next(&self.sem.types);
            self.declare_global(&decl.name, decl.span, Global::Type(id));
            self.sem.types.push(Type {
                id,
                name: decl.name.clone(),
                span: decl.span,
                template_params: Vec::new(),
                precedence: 0,
                display_format: None,
            });
        }
    }

    /// Pass 2b: classify each matcher as a type or enum matcher.
    pub(super) fn declare_matchers(&mut self, decls: &[ast::MatcherDecl]) {
        for decl in decls {
            self.check_attributes(&decl.attributes, attrs::NONE, "matcher");
            let targets: Vec<(OptionTarget, Span)> = decl
                .options
                .iter()
                .filter_map(|option| {
                    self.resolve_matcher_option(option)
                        .map(|target| (target, option.span()))
                })
                .collect();
            if targets.len() != decl.options.len() {
                continue;
            }
            let global = match self.classify_matcher(decl, &targets) {
                Some(MatcherKind::Types(types)) => {
                    let id = TypeMatcherId::next(&self.sem.type_matchers);
                    self.sem.type_matchers.push(TypeMatcher {
                        id,
                        name: decl.name.clone(),
                        span: decl.span,
                        types,
                    });
                    Global::TypeMatcher(id)
                }
                Some(MatcherKind::Entries(enum_id, entries)) => {
                    let id = EnumMatcherId::next(&self.sem.enum_matchers);
                    self.sem.enum_matchers.push(EnumMatcher {
                        id,
                        name: decl.name.clone(),
                        span: decl.span,
                        enum_id,
                        entries,
                    });
                    Global::EnumMatcher(id)
                }
                None => continue,
            };
            self.declare_global(&decl.name, decl.span, global);
        }
    }

    fn resolve_matcher_option(&mut self, option: &MatcherOption) -> Option<OptionTarget> {
        match option {
            MatcherOption::Member(member) => self
                .resolve_member(&member.owner, &member.member, member.span)
                .map(OptionTarget::Entry),
            MatcherOption::Type(name) => {
                if !name.template_args.is_empty() {
                    self.error(
                        Diagnostic::error(ErrorCode::E2009)
                            .with_message(format!("matcher option `{name}` has template arguments"))
                            .with_label(name.span, "matcher options must be plain names"),
                    );
                    return None;
                }
                match self.globals.get(&name.name).copied() {
                    Some((Global::Type(id), _)) => Some(OptionTarget::Type(id)),
                    Some((other, _)) => {
                        self.error(
                            Diagnostic::error(ErrorCode::E2003)
                                .with_message(format!(
                                    "expected a type or enum entry, found {} `{}`",
                                    other.describe(),
                                    name.name
                                ))
                                .with_label(name.span, "not a matcher option"),
                        );
                        None
                    }
                    None => self
                        .lookup_entry(&name.name, name.span, None)
                        .map(OptionTarget::Entry),
                }
            }
        }
    }

    /// `owner.member`: an explicitly qualified enum entry.
    pub(super) fn resolve_member(
        &mut self,
        owner: &str,
        member: &str,
        span: Span,
    ) -> Option<EnumEntryId> {
        let Some(&(Global::Enum(enum_id), _)) = self.globals.get(owner) else {
            self.error(unresolved_name(span, "enum", owner));
            return None;
        };
        match self.sem.enum_def(enum_id).find_entry(member) {
            Some(entry) => Some(entry.id),
            None => {
                self.error(
                    unresolved_name(span, "enum entry", member)
                        .with_note(format!("enum `{owner}` has no such entry")),
                );
                None
            }
        }
    }

    /// Look up a bare enum entry name across every enum.
    ///
    /// When the position expects an entry of `prefer`, entries of that enum
    /// win over same-named entries of other enums. Reports unresolved and
    /// ambiguous names.
    pub(super) fn lookup_entry(
        &mut self,
        name: &str,
        span: Span,
        prefer: Option<EnumId>,
    ) -> Option<EnumEntryId> {
        let all = self.entries.get(name).cloned().unwrap_or_default();
        let preferred: Vec<EnumEntryId> = all
            .iter()
            .copied()
            .filter(|id| Some(id.owner) == prefer)
            .collect();
        let candidates = if preferred.is_empty() { all } else { preferred };
        match candidates.as_slice() {
            [id] => Some(*id),
            [] => {
                self.error(unresolved_name(span, "name", name));
                None
            }
            _ => {
                let owners: Vec<String> = candidates
                    .iter()
                    .map(|id| format!("`{}.{name}`", self.sem.enum_def(id.owner).name))
                    .collect();
                self.error(
                    Diagnostic::error(ErrorCode::E2005)
                        .with_message(format!("`{name}` is an entry of more than one enum"))
                        .with_label(span, "ambiguous")
                        .with_note(format!("qualify it as one of {}", owners.join(", "))),
                );
                None
            }
        }
    }

    fn classify_matcher(
        &mut self,
        decl: &ast::MatcherDecl,
        targets: &[(OptionTarget, Span)],
    ) -> Option<MatcherKind> {
        let mut types = Vec::new();
        let mut entries: Vec<EnumEntryId> = Vec::new();
        let mut first_type: Option<Span> = None;
        let mut first_entry: Option<(EnumEntryId, Span)> = None;
        for (target, span) in targets {
            match *target {
                OptionTarget::Type(id) => {
                    first_type.get_or_insert(*span);
                    if !types.contains(&id) {
                        types.push(id);
                    }
                }
                OptionTarget::Entry(id) => {
                    let (first, first_span) = *first_entry.get_or_insert((id, *span));
                    if first.owner != id.owner {
                        let expected = &self.sem.enum_def(first.owner).name;
                        let found = &self.sem.enum_def(id.owner).name;
                        let diagnostic = Diagnostic::error(ErrorCode::E2004)
                            .with_message(format!(
                                "matcher `{}` mixes entries of enums `{expected}` and `{found}`",
                                decl.name
                            ))
                            .with_label(*span, format!("entry of `{found}`"))
                            .with_secondary_label(first_span, format!("entry of `{expected}`"));
                        self.error(diagnostic);
                        return None;
                    }
                    if !entries.contains(&id) {
                        entries.push(id);
                    }
                }
            }
        }
        match (first_type, first_entry) {
            (Some(type_span), Some((_, entry_span))) => {
                self.error(
                    Diagnostic::error(ErrorCode::E2004)
                        .with_message(format!(
                            "matcher `{}` mixes types and enum entries",
                            decl.name
                        ))
                        .with_label(entry_span, "enum entry")
                        .with_secondary_label(type_span, "type"),
                );
                None
            }
            (_, Some((first, _))) => Some(MatcherKind::Entries(first.owner, entries)),
            _ => Some(MatcherKind::Types(types)),
        }
    }

    /// Pass 3: type template parameters and attributes.
    ///
    /// Parameter kinds of every type are settled first so that a
    /// constraint may name any type regardless of declaration order.
    pub(super) fn resolve_types(&mut self, decls: &[ast::TypeDecl]) {
        for (index, decl) in decls.iter().enumerate() {
            let params = self.template_param_kinds(&decl.template_params);
            self.sem.types[index].template_params = params;
        }
        for (index, decl) in decls.iter().enumerate() {
            self.check_attributes(&decl.attributes, attrs::TYPE, "type");
            let params = self.resolve_template_params(&decl.template_params);
            let ty = &mut self.sem.types[index];
            ty.template_params = params;
            ty.precedence = attrs::integer(&decl.attributes, "precedence").unwrap_or(0);
            ty.display_format = attrs::text(&decl.attributes, "display").map(str::to_string);
        }
    }
}

enum MatcherKind {
    Types(Vec<TypeId>),
    Entries(EnumId, Vec<EnumEntryId>),
}
