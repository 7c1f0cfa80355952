// Interactive REPL using editline

use calc_core::evaluator::evaluate_line;
use calc_core::interpreter::Interpreter;
use calc_core::value::RuntimeError;
use editline::{LineEditor, terminals::StdioTerminal};
use std::io::Write;

pub fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("calc v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Enter calculations in the format: <number> <operation> <number>");
    println!("Supported operations: + - * / (or add, subtract, multiply, divide)");
    println!("Type `quit` or press Ctrl-D to exit");
    println!();

    let mut interp = Interpreter::new();

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match evaluate_line(trimmed, &mut interp) {
                    Ok(result) => {
                        println!("Result: {}", result);
                    }
                    Err(RuntimeError::QuitRequested) => {
                        println!("Goodbye!");
                        break;
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                    }
                }
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
