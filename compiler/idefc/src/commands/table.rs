//! The `table` command: build the intrinsic table and print its shape.

use std::path::Path;
use std::process::ExitCode;

use idef_sem::IntrinsicGroup;

use super::{cache, report};

pub fn table_file(path: &str) -> ExitCode {
    let cache = cache();
    let table = match cache.table(Path::new(path)) {
        Ok(table) => table,
        Err(diagnostics) => return cache.with_session(|session| report(session, &diagnostics)),
    };
    println!("{path}:");
    println!("  type matchers:    {}", table.type_matchers.len());
    println!("  number matchers:  {}", table.number_matchers.len());
    println!("  matcher indices:  {}", table.matcher_indices.len());
    println!("  templates:        {}", table.templates.len());
    println!("  parameters:       {}", table.parameters.len());
    println!("  overloads:        {}", table.overloads.len());
    for group in IntrinsicGroup::ALL {
        let records = table.group(group);
        let overloads: u32 = records.iter().map(|r| r.num_overloads).sum();
        println!("  {group}s: {} ({overloads} overloads)", records.len());
    }
    let aggregates = &table.aggregates;
    println!(
        "  max templates: {} ({} types, {} numbers)",
        aggregates.max_templates, aggregates.max_template_types, aggregates.max_template_numbers
    );
    println!("  parameter names: {}", aggregates.unique_parameter_names.join(", "));
    ExitCode::SUCCESS
}
