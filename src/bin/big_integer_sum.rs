use std::process::ExitCode;

use big_integer::{BigInteger, FormatError};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "big_integer_sum",
    about = "Adds two arbitrary-precision decimal integers and prints the sum"
)]
struct Args {
    /// Left operand, a decimal integer in [+-][000]123456789 form.
    lhs: String,

    /// Right operand, in the same form.
    rhs: String,
}

fn run(args: &Args) -> Result<BigInteger, FormatError> {
    let lhs: BigInteger = args.lhs.parse()?;
    let rhs: BigInteger = args.rhs.parse()?;
    Ok(lhs + rhs)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(sum) => {
            println!("{}", sum);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
