//! calc CLI - command-line calculator and REPL
//!
//! This is a thin wrapper around calc-core that builds the executable.
//! Two modes:
//!
//! ```bash
//! # One-shot calculation
//! calc 5 + 3
//! calc 10 / 2
//!
//! # Interactive REPL
//! calc --interactive
//! calc
//! ```

mod repl;

use calc_core::evaluator::evaluate;
use calc_core::interpreter::Interpreter;
use calc_core::parser::Expression;
use clap::{CommandFactory, Parser};

/// Command-line calculator - basic arithmetic over double-precision numbers
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First number
    #[arg(allow_negative_numbers = true)]
    a: Option<f64>,

    /// Operation to perform (+, -, *, /, add, subtract, multiply, divide)
    operation: Option<String>,

    /// Second number
    #[arg(allow_negative_numbers = true)]
    b: Option<f64>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.interactive {
        return repl::run_repl();
    }

    let (Some(a), Some(operation), Some(b)) = (cli.a, cli.operation.clone(), cli.b) else {
        // No calculation given: fall into the REPL, matching no-argument use
        if cli.a.is_none() && cli.operation.is_none() && cli.b.is_none() {
            return repl::run_repl();
        }
        // Partial arguments are a usage error
        Cli::command().print_help()?;
        std::process::exit(2);
    };

    let expr = Expression { lhs: a, op: operation, rhs: b };
    let mut interp = Interpreter::new();

    match evaluate(&expr, &mut interp) {
        Ok(result) => {
            println!("{} {} {} = {}", expr.lhs, expr.op, expr.rhs, result);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
