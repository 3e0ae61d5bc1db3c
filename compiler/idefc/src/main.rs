//! `idefc`: check, inspect and expand intrinsic definition files.

use std::process::ExitCode;

use idefc::commands::{check_file, lex_file, permute_file, table_file};

fn main() -> ExitCode {
    idefc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    let Some(path) = args.get(2) else {
        if matches!(command, "help" | "--help" | "-h") {
            print_usage();
            return ExitCode::SUCCESS;
        }
        eprintln!("Usage: idefc {command} <file.def>");
        return ExitCode::FAILURE;
    };

    match command {
        "check" => check_file(path),
        "table" => table_file(path),
        "permute" => permute_file(path, args.get(3).map(String::as_str)),
        "lex" => lex_file(path),
        _ => {
            eprintln!("error: unknown command `{command}`");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("idefc - intrinsic definition compiler");
    eprintln!();
    eprintln!("Usage: idefc <command> <file.def> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check <file>               Resolve a file and its imports");
    eprintln!("  table <file>               Build the intrinsic table and print its shape");
    eprintln!("  permute <file> [name]      Print concrete signatures, optionally of one intrinsic");
    eprintln!("  lex <file>                 Print the token stream");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=idef_table=debug) to enable logging.");
}
