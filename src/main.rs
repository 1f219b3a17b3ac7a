use std::io::{self, Write};

use clap::Parser;
use numeval::evaluate;

/// numeval is an easy to use command-line evaluator for arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression and exits; without it, numeval asks for one
    /// expression interactively.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Interactive use is single-shot: one prompt, one expression, one
    // result, exit code 0 either way. Batch use exits 1 on failure.
    let (expression, batch) = match args.expression {
        Some(expression) => (expression, true),
        None => (read_expression(), false),
    };

    match evaluate(expression.trim()) {
        Ok(result) => println!("Result: {result}"),
        Err(e) => {
            eprintln!("{e}");
            if batch {
                std::process::exit(1);
            }
        },
    }
}

/// Prompts for a single expression on standard input.
fn read_expression() -> String {
    print!("Enter an expression: ");
    io::stdout().flush().unwrap_or_else(|_| {
                            eprintln!("Failed to write the prompt to standard output.");
                            std::process::exit(1);
                        });

    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap_or_else(|_| {
                                        eprintln!("Failed to read an expression from standard input.");
                                        std::process::exit(1);
                                    });
    line
}
