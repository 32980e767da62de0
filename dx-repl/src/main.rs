use ariadne::Source;
use dx_compute::{Expr, Variable};
use dx_error::Error;
use dx_parser::parse;
use rustyline::{error::ReadlineError, DefaultEditor};

/// Parses the expression and differentiates it with respect to `wrt`, returning both trees.
fn parse_differentiate(input: &str, wrt: &str) -> Result<(Expr, Expr), Error> {
    let expr = parse(input)?;
    let derivative = expr.differentiate(&Variable::new(wrt.trim()))?;
    Ok((expr, derivative))
}

/// Differentiates the input, printing the result or reporting the error to stderr.
fn differentiate(input: &str, wrt: &str) {
    match parse_differentiate(input, wrt) {
        Ok((expr, derivative)) => {
            println!("Input parsed as: {}", expr);
            println!("Result: {}", derivative);
        },
        Err(err) => {
            if let Err(io_err) = err.build_report("input").eprint(("input", Source::from(input))) {
                eprintln!("{}", io_err);
            }
        },
    }
}

/// Prints what an expression can be made of.
fn print_help() {
    println!("Available functions: sqrt, log, log10, exp, sin, cos, tan, sec, cosec, cot");
    println!("Available variables: x, y, z");
    println!("Available constants: e, pi");
    println!("Leave a space after a binary minus: write `2 - 1`, not `2 -1`");
}

/// Asks for an expression and a variable, then differentiates.
fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
    let input = rl.readline("Differentiate: ")?;
    if input.trim().is_empty() {
        return Ok(());
    }
    rl.add_history_entry(&input)?;

    let wrt = rl.readline("with respect to: ")?;
    differentiate(&input, &wrt);
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let (Some(input), Some(wrt)) = (args.next(), args.next()) {
        differentiate(&input, &wrt);
        return;
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    print_help();
    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}
