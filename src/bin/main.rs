use std::cmp::Ordering;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use enum_map::EnumMap;

use exact_rational::{Rational, RationalResult, RoundMode};

/// Exact arithmetic on fractions of arbitrary size integers.
#[derive(Parser)]
#[command(name = "rational", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a binary operation, e.g. `eval 1/3 + 1/6`
    Eval {
        /// Left operand, `N` or `N/D`
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of `+ - * / %`
        #[arg(value_enum)]
        op: Operator,
        /// Right operand, `N` or `N/D`
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Round to an integer, in one mode or in all of them
    Round {
        /// Value to round, `N` or `N/D`
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Rounding mode, all modes when absent
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },
    /// Print `<`, `=` or `>`
    Compare {
        /// Left operand, `N` or `N/D`
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Right operand, `N` or `N/D`
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Operator {
    #[value(name = "+")]
    Add,
    #[value(name = "-")]
    Sub,
    #[value(name = "*")]
    Mul,
    #[value(name = "/")]
    Div,
    #[value(name = "%")]
    Rem,
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    Floor,
    Ceiling,
    Trunc,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl From<Mode> for RoundMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Floor => RoundMode::Floor,
            Mode::Ceiling => RoundMode::Ceiling,
            Mode::Trunc => RoundMode::Trunc,
            Mode::HalfUp => RoundMode::HalfUp,
            Mode::HalfDown => RoundMode::HalfDown,
            Mode::HalfEven => RoundMode::HalfEven,
        }
    }
}

fn evaluate(lhs: &Rational, op: Operator, rhs: &Rational) -> RationalResult<Rational> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => lhs.checked_div(rhs),
        Operator::Rem => lhs.modulo(rhs),
    }
}

fn run(command: Command) -> RationalResult<()> {
    match command {
        Command::Eval { lhs, op, rhs } => {
            let result = evaluate(&lhs.parse()?, op, &rhs.parse()?)?;
            println!("{}", result);
        },
        Command::Round { value, mode } => {
            let value: Rational = value.parse()?;
            match mode {
                Some(mode) => println!("{}", value.to_integer(mode.into())),
                None => {
                    let rounded = EnumMap::from_fn(|mode| value.to_integer(mode));
                    for (mode, integer) in &rounded {
                        println!("{:?}\t{}", mode, integer);
                    }
                },
            }
        },
        Command::Compare { lhs, rhs } => {
            let (lhs, rhs): (Rational, Rational) = (lhs.parse()?, rhs.parse()?);
            let symbol = match lhs.cmp(&rhs) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{}", symbol);
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli.command) {
        eprintln!("{}", error);
        exit(1);
    }
}
