//! The Lambda interpreter CLI.
//!
//! Positional arguments are include-file base-names; each becomes an
//! `#include "<name>"` line fed to an initial stream-driven session.
//! `--run` appends the single expression `Main` to that stream, and
//! `--interactive` hands the loaded bindings to a REPL afterwards.
//!
//! Evaluation and include failures are diagnostics on stderr, never exit
//! codes; the process exits 0 on normal termination.

use std::io;

use clap::Parser;

use lambda_interp::{Interpreter, StreamHost};
use lambda_repl::{run_repl, ReplConfig};

#[derive(Parser)]
#[command(name = "lambdai", version, about = "Interpreter for the Lambda expression language")]
struct Cli {
    /// Files to include before anything else (base-names; `.lambda` is
    /// appended)
    files: Vec<String>,

    /// Start an interactive session after processing includes
    #[arg(short = 'i', long, overrides_with = "interactive")]
    interactive: bool,

    /// Evaluate the expression `Main` after processing includes
    #[arg(short = 'r', long, overrides_with = "run")]
    run: bool,
}

fn main() {
    let cli = Cli::parse();

    let instructions = instruction_stream(&cli.files, cli.run);
    let host = StreamHost::stdio(io::Cursor::new(instructions.into_bytes()));
    let mut loader = Interpreter::new(host);
    let bindings = loader.run();
    let includes = loader.includes().clone();

    if cli.interactive {
        if let Err(err) = run_repl(ReplConfig::default(), bindings, includes) {
            eprintln!("error: {err}");
        }
    }
}

/// Translate the command line into interpreter input.
fn instruction_stream(files: &[String], run_main: bool) -> String {
    let mut instructions = String::new();
    for file in files {
        instructions.push_str(&format!("#include \"{file}\"\n"));
    }
    if run_main {
        instructions.push_str("Main\n");
    }
    instructions
}
