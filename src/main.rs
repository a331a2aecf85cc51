// ABOUTME: Command-line harness for the slisp interpreter

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use slisp::config;
use slisp::Interpreter;
use std::path::PathBuf;
use std::process::ExitCode;

/// S-expression interpreter producing values and 2-D graphics primitives
#[derive(Parser, Debug)]
#[command(name = "slisp")]
#[command(version = config::VERSION)]
#[command(about = "An S-expression interpreter for 2-D graphical scenes")]
struct CliArgs {
    /// Evaluate a program given on the command line
    #[arg(short = 'e', long = "eval", value_name = "PROGRAM", conflicts_with = "script")]
    program: Option<String>,

    /// Script file to evaluate as one program (optional - if not provided, starts the REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let mut interpreter = Interpreter::new();

    if let Some(program) = args.program {
        return run_program(&mut interpreter, &program);
    }

    if let Some(path) = args.script {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error: cannot read file {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
        return run_program(&mut interpreter, &contents);
    }

    repl(&mut interpreter)
}

/// Evaluate one program and print the parenthesised result on stdout.
fn run_program(interpreter: &mut Interpreter, source: &str) -> ExitCode {
    match interpreter.run(source) {
        Ok(result) => {
            println!("({})", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Interactive loop: one program per line, state persisting across lines.
/// Errors go to stderr and do not end the session.
fn repl(interpreter: &mut Interpreter) -> ExitCode {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> = match Editor::with_config(config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: failed to initialize the REPL: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // History from previous sessions, if any
    let _ = rl.load_history(config::HISTORY_FILE);

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }

                match interpreter.run(line) {
                    Ok(result) => println!("({})", result),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the current line but keeps the session
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
    ExitCode::SUCCESS
}
