//! Conversion error types

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("only 32 and 64 are supported for format, got {0:?}")]
    UnsupportedFormat(String),

    #[error("sign can only be -1 or 1, got {0}")]
    InvalidSign(i32),

    #[error("value must be finite, got {0}")]
    NotFinite(f64),

    #[error("malformed numeric literal {literal:?}")]
    MalformedFloat {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("malformed integer literal {literal:?}")]
    MalformedInt {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected <value> or <sign> <exponent> <fraction>, got {0} arguments")]
    WrongArgCount(usize),
}
