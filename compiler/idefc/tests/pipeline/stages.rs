use idef_sem::{IntrinsicGroup, Stages};
use pretty_assertions::assert_eq;

use super::common::{core, core_cache};

#[test]
fn model_shape() {
    let cache = core_cache();
    let sem = cache.sem(core()).unwrap();
    assert_eq!(sem.enums().len(), 3);
    assert_eq!(sem.types().len(), 6);
    assert_eq!(sem.type_matchers().len(), 3);
    assert_eq!(sem.enum_matchers().len(), 2);
    assert_eq!(sem.overloads().len(), 9);

    let space = sem.find_enum("address_space").unwrap();
    let public: Vec<&str> = space.public_entries().map(|e| e.name.as_str()).collect();
    assert_eq!(public, vec!["function", "private", "workgroup", "storage"]);

    let scalar = sem.find_type_matcher("scalar").unwrap();
    let sorted: Vec<&str> = scalar
        .precedence_sorted_types(&sem)
        .into_iter()
        .map(|t| sem.ty(t).name.as_str())
        .collect();
    assert_eq!(sorted, vec!["f32", "i32", "u32", "bool"]);
}

#[test]
fn every_overload_expands() {
    let cache = core_cache();
    let permutations = cache.permutations(core()).unwrap();
    let descriptions: Vec<&str> = permutations.iter().map(|p| p.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "fn abs(f32) -> f32",
            "fn abs(i32) -> i32",
            "fn abs(u32) -> u32",
            "fn abs(vec<N, f32>) -> vec<N, f32>",
            "fn abs(vec<N, i32>) -> vec<N, i32>",
            "fn abs(vec<N, u32>) -> vec<N, u32>",
            "fn select(f: f32, t: f32, cond: bool) -> f32",
            "fn select(f: i32, t: i32, cond: bool) -> i32",
            "fn select(f: u32, t: u32, cond: bool) -> u32",
            "fn select(f: bool, t: bool, cond: bool) -> bool",
            "fn dpdx(f32) -> f32",
            "fn load(p: ptr<function, f32, read>) -> f32",
            "fn load(p: ptr<function, f32, read_write>) -> f32",
            "fn load(p: ptr<private, f32, read>) -> f32",
            "fn load(p: ptr<private, f32, read_write>) -> f32",
            "op !(bool) -> bool",
            "op +(f32, f32) -> f32",
            "op +(i32, i32) -> i32",
            "op +(u32, u32) -> u32",
            "ctor i32() -> i32",
            "conv f32(f32) -> f32",
            "conv f32(i32) -> f32",
        ]
    );

    let dpdx = permutations.iter().find(|p| p.intrinsic == "dpdx").unwrap();
    assert_eq!(dpdx.stages, Stages::FRAGMENT);
    let select = permutations.iter().find(|p| p.intrinsic == "select").unwrap();
    assert!(select.must_use);
}

#[test]
fn display_formats_apply_to_display_names() {
    let cache = core_cache();
    let sem = cache.sem(core()).unwrap();
    let permutations = cache.permutations(core()).unwrap();
    let vec_abs = &permutations[3];
    let param = &vec_abs.parameters[0].ty;
    assert_eq!(param.render(&sem), "vec<N, f32>");
    assert_eq!(param.display_name(&sem), "vecN<f32>");
}

#[test]
fn table_layout() {
    let cache = core_cache();
    let table = cache.table(core()).unwrap();

    let names: Vec<&str> = table.builtins.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["abs", "select", "dpdx", "load"]);
    assert_eq!(table.builtins[0].num_overloads, 2);
    assert_eq!(table.group(IntrinsicGroup::UnaryOperator)[0].name, "!");
    assert_eq!(table.group(IntrinsicGroup::BinaryOperator)[0].name, "+");
    assert_eq!(table.group(IntrinsicGroup::Constructor)[0].name, "i32");
    assert_eq!(table.group(IntrinsicGroup::Converter)[0].name, "f32");

    let types: Vec<&str> = table.type_matchers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "template type 0",
            "f32",
            "i32",
            "u32",
            "bool",
            "vecN<T>",
            "ptr<S, T, A>",
            "scalar",
            "fiu32",
            "fi32",
        ]
    );
    let numbers: Vec<&str> = table.number_matchers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        numbers,
        vec![
            "template number 0",
            "template number 1",
            "readable",
            "function_private",
            "access",
            "address_space",
            "texel_format",
        ]
    );

    let load = &table.builtins[3];
    let record = &table.overloads[load.overloads_offset.unwrap() as usize];
    assert_eq!(record.num_templates, 2);
    let param = &table.parameters[record.parameters_offset.unwrap() as usize];
    assert_eq!(table.indices(param.matcher_indices, 4), &[6, 0, 1, 1]);

    let negate = &table.unary_operators[0];
    let record = &table.overloads[negate.overloads_offset.unwrap() as usize];
    assert_eq!(record.const_eval.as_deref(), Some("!"));
}

#[test]
fn aggregates() {
    let cache = core_cache();
    let table = cache.table(core()).unwrap();
    assert_eq!(table.aggregates.max_template_types, 1);
    assert_eq!(table.aggregates.max_template_numbers, 2);
    assert_eq!(table.aggregates.max_templates, 2);
    assert_eq!(table.aggregates.unique_parameter_names, vec!["cond", "f", "p", "t"]);
}

#[test]
fn separate_runs_agree() {
    let first = core_cache().permutations(core()).unwrap();
    let second = core_cache().permutations(core()).unwrap();
    assert_eq!(first, second);
    assert_eq!(core_cache().table(core()).unwrap(), core_cache().table(core()).unwrap());
}
