//! # Command line
//!
//! Demonstrates the library: a fixed set of checks, evaluating a single operation and printing
//! canonical forms.
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use num::BigInt;

use rationals::{DivBy, Error, Rational, RationalBig};

#[derive(Parser)]
#[clap(name = "rationals", version, about = "Exact arithmetic on arbitrary precision fractions")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the demonstration checks, one line per check.
    Demo,
    /// Apply an operator to two values, such as `1/2 + 1/3`.
    Eval {
        #[clap(allow_hyphen_values = true)]
        lhs: String,
        /// One of `+`, `-`, `*`, `/` and `cmp`.
        #[clap(allow_hyphen_values = true)]
        operator: Operator,
        #[clap(allow_hyphen_values = true)]
        rhs: String,
        /// Also print a floating point approximation.
        #[clap(long)]
        approximate: bool,
    },
    /// Print the lowest terms form of each value.
    Normalize {
        #[clap(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Also print a floating point approximation.
        #[clap(long)]
        approximate: bool,
    },
}

#[derive(Clone, Copy, Debug)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "cmp" => Ok(Operator::Compare),
            other => Err(format!("unknown operator {:?}", other)),
        }
    }
}

fn main() {
    env_logger::init();

    match run(Args::parse().command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(2);
        }
    }
}

/// Returns whether all checks passed.
fn run(command: Command) -> Result<bool, Error> {
    match command {
        Command::Demo => demo(),
        Command::Eval { lhs, operator, rhs, approximate } => {
            let lhs = lhs.parse::<RationalBig>()?;
            let rhs = rhs.parse::<RationalBig>()?;
            match operator {
                Operator::Compare => println!("{:?}", lhs.cmp(&rhs)),
                Operator::Add => print_value(&(lhs + rhs), approximate),
                Operator::Subtract => print_value(&(lhs - rhs), approximate),
                Operator::Multiply => print_value(&(lhs * rhs), approximate),
                Operator::Divide => print_value(&lhs.checked_div(&rhs)?, approximate),
            }
            Ok(true)
        }
        Command::Normalize { values, approximate } => {
            let values = values
                .iter()
                .map(|value| value.parse::<RationalBig>())
                .collect::<Result<Vec<_>, _>>()?;
            if approximate {
                for value in &values {
                    print_value(value, true);
                }
            } else {
                println!("{}", values.iter().join("\n"));
            }
            Ok(true)
        }
    }
}

fn print_value(value: &RationalBig, approximate: bool) {
    if approximate {
        println!("{} ~ {}", value, value.approximate());
    } else {
        println!("{}", value);
    }
}

fn demo() -> Result<bool, Error> {
    let half = 1_i32.div_by(2)?;
    let third = 1_i32.div_by(3)?;
    let two_thirds = 2_i32.div_by(3)?;

    let checks = vec![
        ("1/2 + 1/3 == 5/6", &half + &third == 5_i32.div_by(6)?),
        ("1/2 - 1/3 == 1/6", &half - &third == 1_i32.div_by(6)?),
        ("1/2 * 1/3 == 1/6", &half * &third == 1_i32.div_by(6)?),
        ("1/2 / 1/3 == 3/2", half.checked_div(&third)? == 3_i32.div_by(2)?),
        ("-(1/2) == -1/2", -&half == (-1_i32).div_by(2)?),
        ("2/1 formats as 2", 2_i32.div_by(1)?.to_string() == "2"),
        ("-2/4 formats as -1/2", (-2_i32).div_by(4)?.to_string() == "-1/2"),
        ("117/1098 formats as 13/122", "117/1098".parse::<RationalBig>()?.to_string() == "13/122"),
        ("1/2 < 2/3", half < two_thirds),
        ("1/2 in 1/3..=2/3", (third.clone()..=two_thirds.clone()).contains(&half)),
        ("2000000000/4000000000 == 1/2", 2_000_000_000_i64.div_by(4_000_000_000)? == half),
        ("40 digit ratio == 1/2", wide()?.div_by(wide()? * BigInt::from(2))? == half),
    ];

    for (description, passed) in &checks {
        println!("{}: {}", description, passed);
    }

    Ok(checks.iter().all(|&(_, passed)| passed))
}

/// A 39 digit integer, far beyond 64 bits.
fn wide() -> Result<BigInt, Error> {
    let value = "912016490186296920119201192141970416029".parse::<RationalBig>()?;
    Ok(value.numerator().clone())
}

#[cfg(test)]
mod test {
    use num::BigInt;

    use crate::{demo, wide};

    #[test]
    fn wide_value() {
        let expected = "912016490186296920119201192141970416029".parse::<BigInt>().unwrap();
        assert_eq!(wide(), Ok(expected));
    }

    #[test]
    fn all_checks_pass() {
        assert_eq!(demo(), Ok(true));
    }
}
