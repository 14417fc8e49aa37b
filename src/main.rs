//! Command-line driver: times one parallel multiply of two generated
//! matrices and prints them when they are small enough to read.

use std::env;
use std::process;

use parmul::error::{DriverError, Result};
use parmul::matrix::init::fill_operands;
use parmul::matrix::try_alloc;
use parmul::multiply_parallel;
use parmul::timer::Stopwatch;

/// Grids are only printed below this dimension; anything larger is noise.
const PRINT_LIMIT: usize = 9;

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(err) = run(&args) {
        println!("{err}");
        process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        let program = args.first().map(String::as_str).unwrap_or("parmul");
        return Err(DriverError::Usage {
            program: program.to_string(),
        });
    }

    let size = parse_positive(&args[1])?;
    let threads = parse_positive(&args[2])?;

    println!("Matrix multiplication, rows split across threads");
    println!("Matrix size: {size} x {size}");
    println!("Threads: {threads}");

    let mut a = try_alloc(size)?;
    let mut b = try_alloc(size)?;
    let mut c = try_alloc(size)?;

    fill_operands(&mut a, &mut b);
    print_matrix(&a, size);
    print_matrix(&b, size);

    let watch = Stopwatch::start();
    multiply_parallel(&a, &b, &mut c, size, threads);
    let elapsed = watch.stop();
    println!("Execution time: {:9} microseconds", elapsed.as_micros());

    print_matrix(&c, size);
    Ok(())
}

/// Parses a positive integer argument. Zero, negative, and non-numeric
/// input are all rejected the same way.
fn parse_positive(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(DriverError::InvalidArgument),
    }
}

/// Prints a row-major grid, one row per line, with a trailing banner.
/// Skipped entirely for matrices of dimension `PRINT_LIMIT` and up.
fn print_matrix(matrix: &[usize], d: usize) {
    if d >= PRINT_LIMIT {
        return;
    }

    println!("\nMatrix contents:");
    for row in matrix.chunks(d) {
        let cells: Vec<String> = row.iter().map(|value| value.to_string()).collect();
        println!("{}", cells.join(" "));
    }
    println!("**-----------------------------**");
}
