//! # factorial
//!
//! Demo consumer of the exsig error signal.
//!
//! Usage:
//!   factorial <numbers>...
//!
//! Examples:
//!   factorial 10
//!   factorial -- -1 100 10
//!
//! Negative input raises EINVAL with a custom message; arithmetic overflow
//! raises EOVERFLOW with the platform description alone. Either way the
//! caller observes the signal, prints the message, and clears it before the
//! next computation.

use clap::Parser;
use nix::errno::Errno;

#[derive(Parser)]
#[command(name = "factorial")]
#[command(about = "Compute factorials, reporting failures through the exsig signal")]
struct Cli {
    /// Numbers to compute the factorial of
    #[arg(required = true, allow_negative_numbers = true)]
    numbers: Vec<i64>,
}

/// Checked factorial. Raises into the ambient signal and returns `Err` on
/// negative input or overflow.
fn factorial(num: i64) -> exsig::Result<i64> {
    if num < 0 {
        return Err(exsig::raise!(
            Errno::EINVAL as i32,
            "Number must be larger than zero"
        ));
    }
    let mut result: i64 = 1;
    for i in 2..=num {
        result = match result.checked_mul(i) {
            Some(value) => value,
            None => return Err(exsig::raise!(Errno::EOVERFLOW as i32)),
        };
    }
    Ok(result)
}

fn main() {
    let cli = Cli::parse();

    for num in cli.numbers {
        match factorial(num) {
            Ok(value) => println!("{}! = {}", num, value),
            Err(_) => {
                // The signal carries the details; report and clear before
                // the next computation so no stale error leaks into it.
                if exsig::is_set() {
                    eprintln!("{}! failed: {}", num, exsig::message());
                    exsig::clear();
                }
            }
        }
    }
}
