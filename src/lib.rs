mod error;
mod format;

pub use error::ConvertError;
pub use format::Format;

use log::debug;

/// A decimal value split into its stored IEEE-754 fields.
///
/// `exp` carries the biased exponent field and `sig` the fraction bits.
/// Field widths are bounded by the chosen [`Format`], but out-of-range
/// fields are a caller error and are not rejected here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatParts {
    pub sign: i32,
    pub exp: u32,
    pub sig: u64,
}

/// Splits a finite decimal value into sign, biased exponent and
/// fraction fields.
///
/// The fraction is quantized to the format's width with round-half-up.
/// Values below the normalized range are clamped at the format's
/// minimum exponent instead of being encoded as true subnormals.
pub fn decompose(value: f64, format: Format) -> Result<FloatParts, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NotFinite(value));
    }

    // Zero keeps the all-zero pattern. Positive and negative zero are
    // conflated, as are true zero and an all-zero subnormal.
    if value == 0.0 {
        return Ok(FloatParts {
            sign: 1,
            exp: 0,
            sig: 0,
        });
    }

    let sign = if value < 0.0 { -1 } else { 1 };
    let mut mag = value.abs();

    let mut exp = mag.log2().floor() as i32;
    if exp < format.min_exp() {
        exp = format.min_exp();
    }

    mag /= 2f64.powi(exp);
    if mag < 1.0 {
        // log2 can land one above the true exponent just below a power
        // of two, and clamped values never reach 1.0 at all. Shift the
        // exponent down and keep the quotient as the fraction source.
        exp -= 1;
    } else {
        mag -= 1.0;
    }
    debug!("quantizing fraction {} at exponent {}", mag, exp);

    let sig = (mag * (1u64 << format.sig_width()) as f64 + 0.5).floor() as u64;
    let exp = (exp + format.bias()) as u32;

    Ok(FloatParts { sign, exp, sig })
}

/// Rebuilds the decimal value encoded by a field triple.
///
/// A biased exponent of 0 denotes a denormalized significand with no
/// hidden bit. [`decompose`] only emits that for values clamped below
/// the normalized range, but hand-supplied fields may carry it freely.
pub fn compose(parts: FloatParts, format: Format) -> Result<f64, ConvertError> {
    let FloatParts { sign, exp, sig } = parts;
    if sign as i64 * sign as i64 != 1 {
        return Err(ConvertError::InvalidSign(sign));
    }

    let leading = if exp == 0 { 0.0 } else { 1.0 };
    let unbiased = exp as i64 - (format.bias() as i64 - 1) - leading as i64;
    let significand = leading + sig as f64 / (1u64 << format.sig_width()) as f64;
    debug!("significand {} scaled by 2^{}", significand, unbiased);

    Ok(sign as f64 * significand * 2f64.powi(unbiased as i32))
}
