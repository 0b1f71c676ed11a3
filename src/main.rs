use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use expreval::get_result;

/// Evaluates arithmetic and logical expressions, one per line, with
/// variables shared across the whole run.
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
struct Cli {
    /// Inline expressions, evaluated in order after any script file.
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// A script file whose lines are evaluated before the inline
    /// expressions.
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut source = String::new();
    if let Some(path) = &cli.script {
        match fs::read_to_string(path) {
            Ok(text) => source.push_str(&text),
            Err(e) => {
                eprintln!("Cannot read script '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    }
    for expression in &cli.expressions {
        source.push('\n');
        source.push_str(expression);
    }

    match get_result(&source, false) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
