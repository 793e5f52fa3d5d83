//! Command-line front end for numlist.
//!
//! Every operand is either a decimal number or `@PATH`, which reads the number
//! from the first line of a file. Malformed operands become empty numbers.
//!
//! # Usage
//!
//! ```sh
//! numlist show 00123
//! numlist convert 123 --base 3
//! numlist add 999 @other.txt --output sum.txt
//! numlist sort 3142 --descending
//! numlist shift left 42 --count 2
//! numlist swap 123 0 2
//! ```
//!
//! Set `RUST_LOG=debug` to see conversion and file handling details.

use std::{
    convert::Infallible,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
};

use clap::{Parser, Subcommand, ValueEnum};
use numlist_core::{Base, DecimalText as _, DigitList, add, parse_decimal};
use numlist_io::SaveError;

/// A number given on the command line.
#[derive(Debug, Clone)]
enum Source {
    Inline(String),
    File(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.strip_prefix('@') {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Inline(s.to_owned()),
        })
    }
}

impl Source {
    fn load(&self) -> DigitList {
        match self {
            Self::Inline(text) => parse_decimal(text),
            Self::File(path) => numlist_io::load(path),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Left,
    Right,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the digits, base and decimal value of a number.
    Show {
        /// Decimal number or @PATH.
        number: Source,
    },
    /// Convert a number to another base.
    Convert {
        /// Decimal number or @PATH.
        number: Source,
        /// Target base (2-255).
        #[arg(short, long, value_name = "BASE", default_value_t = Base::TERNARY)]
        base: Base,
    },
    /// Add two numbers.
    Add {
        /// Left operand: decimal number or @PATH.
        lhs: Source,
        /// Right operand: decimal number or @PATH.
        rhs: Source,
    },
    /// Sort the digits of a number.
    Sort {
        /// Decimal number or @PATH.
        number: Source,
        /// Sort from largest to smallest digit.
        #[arg(short, long)]
        descending: bool,
    },
    /// Shift a number by whole digits.
    Shift {
        /// Shift direction.
        direction: Direction,
        /// Decimal number or @PATH.
        number: Source,
        /// Number of digit positions to shift.
        #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
        count: usize,
    },
    /// Exchange two digits of a number.
    Swap {
        /// Decimal number or @PATH.
        number: Source,
        /// First digit index (0 is the most significant digit).
        i: usize,
        /// Second digit index.
        j: usize,
    },
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Write the decimal result to a file.
    #[arg(short, long, value_name = "PATH", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    #[from]
    Save(SaveError),
    #[display("failed to print result: {_0}")]
    #[from]
    Print(io::Error),
    #[display("cannot swap digits {i} and {j} of a {len}-digit number")]
    SwapOutOfRange { i: usize, j: usize, len: usize },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Executes the command, printing its report to `out`, and returns the
/// resulting number.
fn run<W>(cli: Cli, out: &mut W) -> Result<DigitList, CliError>
where
    W: Write,
{
    let result = match cli.command {
        Command::Show { number } => {
            let list = number.load();
            print_report(out, &list)?;
            list
        }
        Command::Convert { number, base } => {
            let converted = number.load().convert_base(base);
            print_report(out, &converted)?;
            converted
        }
        Command::Add { lhs, rhs } => {
            let sum = add(&lhs.load(), &rhs.load());
            writeln!(out, "{}", sum.to_decimal_text())?;
            sum
        }
        Command::Sort { number, descending } => {
            let mut list = number.load();
            if descending {
                list.sort_descending();
            } else {
                list.sort_ascending();
            }
            writeln!(out, "{list}")?;
            list
        }
        Command::Shift {
            direction,
            number,
            count,
        } => {
            let mut list = number.load();
            for _ in 0..count {
                match direction {
                    Direction::Left => list.shift_left(),
                    Direction::Right => list.shift_right(),
                }
            }
            writeln!(out, "{list}")?;
            list
        }
        Command::Swap { number, i, j } => {
            let mut list = number.load();
            if !list.swap(i, j) {
                return Err(CliError::SwapOutOfRange {
                    i,
                    j,
                    len: list.len(),
                });
            }
            writeln!(out, "{list}")?;
            list
        }
    };

    if let Some(path) = &cli.output {
        numlist_io::save(&result, path)?;
        log::info!("wrote result to {}", path.display());
    }
    Ok(result)
}

fn print_report<W>(out: &mut W, list: &DigitList) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Digits: {list}")?;
    writeln!(out, "Base: {}", list.base())?;
    writeln!(out, "Decimal: {}", list.to_decimal_text())
}
