mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use golden_calculator::interpreter;
use golden_calculator::statistics::sample_standard_deviation;
use log::info;
use std::io;
use std::io::BufRead;
use std::process;

/// Evaluates scientific calculator expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a single expression, e.g. "2 ^ 3 ^ 2" or "3√8"
    Eval {
        /// The expression to evaluate
        expression: String,

        /// Also print the expression in postfix notation
        #[clap(long)]
        postfix: bool,
    },
    /// Evaluates one expression per line of standard input
    Repl,
    /// Prints the sample standard deviation of the numbers on standard input
    Deviation,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match arguments.command {
        Command::Eval {
            expression,
            postfix,
        } => {
            if !evaluate(&expression, postfix) {
                process::exit(1);
            }
        }
        Command::Repl => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    evaluate(&line, false);
                }
            }
        }
        Command::Deviation => {
            let numbers = display::read_numbers(io::stdin().lock())?;
            info!("Read {} numbers", numbers.len());
            println!("{}", sample_standard_deviation(&numbers)?);
        }
    }
    Ok(())
}

/// Prints the result of the expression, returning whether it had one.
fn evaluate(expression: &str, show_postfix: bool) -> bool {
    let expression = display::normalize_glyphs(expression);
    if show_postfix {
        if let Ok(postfix_tokens) = interpreter::to_postfix(&expression) {
            println!("{}", interpreter::tokens_to_string(&postfix_tokens));
        }
    }
    let result = interpreter::evaluate(&expression);
    println!("{}", display::render(&result));
    result.is_ok()
}
