/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * License:
 * This file is part of the Brewin interpreter project.
 *
 * Brewin is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::error::Error;
use std::fs;
use std::process;

use clap::Parser;

use brewin::diagnostics::DiagnosticPrinter;
use brewin::Interpreter;

/// Command-line interface for the Brewin interpreter.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the Brewin source file.
    file: std::path::PathBuf,

    /// Print the parsed program as JSON and exit without running it.
    #[arg(long)]
    dump_ast: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let source = fs::read_to_string(&args.file)?;
    let file_name = args.file.display().to_string();

    if args.dump_ast {
        match brewin::parser::parse_program(&source) {
            Ok(program) => println!("{}", serde_json::to_string_pretty(&program)?),
            Err(error) => {
                DiagnosticPrinter::new(file_name, source).print(&error);
                process::exit(1);
            }
        }
        return Ok(());
    }

    let mut interpreter = Interpreter::new();
    if let Err(error) = interpreter.run(&source) {
        DiagnosticPrinter::new(file_name, source).print(&error);
        process::exit(1);
    }

    Ok(())
}
