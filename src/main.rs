//! CLI boundary for the float field converter

use std::num::ParseIntError;
use std::process;
use std::str::FromStr;

use clap::Parser;
use either::Either;
use log::debug;

use floatconv::{compose, decompose, ConvertError, FloatParts, Format};

/// Convert a decimal value to its IEEE-754 fields, or a field triple
/// back to its decimal value.
#[derive(Debug, Parser)]
#[command(version, about, arg_required_else_help = true)]
struct Cli {
    /// Bit width of the target format
    #[arg(
        short = 'f',
        long = "format",
        value_name = "32|64",
        default_value = "32",
        value_parser = Format::from_width
    )]
    format: Format,

    /// A decimal value, or a <sign> <exponent> <fraction> triple
    #[arg(value_name = "VALUE", num_args = 1..=3, allow_negative_numbers = true)]
    values: Vec<String>,
}

fn parse_float(literal: &str) -> Result<f64, ConvertError> {
    literal
        .trim()
        .parse()
        .map_err(|source| ConvertError::MalformedFloat {
            literal: literal.to_string(),
            source,
        })
}

fn parse_int<T>(literal: &str) -> Result<T, ConvertError>
where
    T: FromStr<Err = ParseIntError>,
{
    literal
        .trim()
        .parse()
        .map_err(|source| ConvertError::MalformedInt {
            literal: literal.to_string(),
            source,
        })
}

/// One positional selects decompose mode, three select compose mode.
/// Everything is parsed into typed values before any conversion runs.
fn classify(values: &[String]) -> Result<Either<f64, FloatParts>, ConvertError> {
    match values {
        [value] => parse_float(value).map(Either::Left),
        [sign, exp, sig] => Ok(Either::Right(FloatParts {
            sign: parse_int(sign)?,
            exp: parse_int(exp)?,
            sig: parse_int(sig)?,
        })),
        _ => Err(ConvertError::WrongArgCount(values.len())),
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    match classify(&cli.values)? {
        Either::Left(value) => {
            let parts = decompose(value, cli.format)?;
            println!("sign: {} exp: {} frac: {}", parts.sign, parts.exp, parts.sig);
            println!("{}", compose(parts, cli.format)?);
        }
        Either::Right(parts) => {
            println!("got {}, {}, {}", parts.sign, parts.exp, parts.sig);
            println!("{}", compose(parts, cli.format)?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("request: {:?}", cli);
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
