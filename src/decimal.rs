//! Arbitrary-precision decimal numbers.
//!
//! TOON's `Decimal` value case must losslessly round-trip any finite-decimal
//! literal written in source text — `1.5000`, `0.000001`, `1e-3` all need to
//! survive a decode/encode cycle without drifting through binary-float
//! imprecision. [`Decimal`] stores an unscaled [`BigInt`] mantissa and a
//! fractional-digit count (`scale`); the represented value is
//! `mantissa * 10^-scale`. The representation is normalized on construction
//! (trailing zero digits folded into the scale) so that two decimals
//! comparing equal also render identically.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;

/// An arbitrary-precision, finite decimal value: `mantissa * 10^-scale`.
///
/// There is no NaN and no infinity representable in this type; non-finite
/// floats are normalized to [`crate::Value::Null`] before they ever reach a
/// `Decimal` (see the host-language serializer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

impl Decimal {
    /// Builds a decimal from an unscaled mantissa and a fractional-digit
    /// count, normalizing away trailing zero digits in the mantissa.
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        let mut d = Decimal { mantissa, scale };
        d.normalize();
        d
    }

    /// Parses the canonical numeric token grammar used by the primitive
    /// parser: an optional sign, an integer part, an optional fractional
    /// part, and an optional exponent. `int_digits` and `frac_digits` are
    /// ASCII-digit-only strings (no sign, no dot); `exponent` is the signed
    /// value following `e`/`E`, if any.
    pub fn from_parts(negative: bool, int_digits: &str, frac_digits: &str, exponent: i64) -> Self {
        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        if digits.is_empty() {
            digits.push('0');
        }
        let mut mantissa: BigInt = digits.parse().unwrap_or_else(|_| BigInt::zero());
        if negative {
            mantissa = -mantissa;
        }
        // value = digits * 10^-frac_len * 10^exponent = digits * 10^-(frac_len - exponent)
        let scale_signed = frac_digits.len() as i64 - exponent;
        if scale_signed >= 0 {
            Decimal::new(mantissa, scale_signed as u32)
        } else {
            // Exponent pushes the point further right than we have digits for;
            // materialize the extra zeros into the mantissa and use scale 0.
            let shift = (-scale_signed) as u32;
            let ten = BigInt::from(10u32);
            for _ in 0..shift {
                mantissa *= &ten;
            }
            Decimal::new(mantissa, 0)
        }
    }

    /// Builds a decimal from a finite `f64` via its shortest round-tripping
    /// decimal text representation (Rust's `Display` for `f64` never emits
    /// scientific notation, so this is a plain mantissa/scale split).
    ///
    /// Returns `None` for NaN or infinite input; callers are expected to
    /// normalize those to `Value::Null` instead of calling this.
    pub fn from_f64(v: f64) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }
        let text = format!("{v}");
        let negative = text.starts_with('-');
        let unsigned = text.strip_prefix('-').unwrap_or(&text);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };
        Some(Decimal::from_parts(negative, int_part, frac_part, 0))
    }

    fn normalize(&mut self) {
        if self.mantissa.is_zero() {
            self.scale = 0;
            return;
        }
        let ten = BigInt::from(10u32);
        while self.scale > 0 {
            let r = &self.mantissa % &ten;
            if r.is_zero() {
                self.mantissa /= &ten;
                self.scale -= 1;
            } else {
                break;
            }
        }
    }

    /// Whether this decimal represents zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// The number of digits after the decimal point in the normalized form.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Converts to `f64`. Lossy for mantissas beyond `f64`'s precision; used
    /// only by the host-language serde wrapper's `deserialize_f64` path.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }
        let negative = self.mantissa.is_negative();
        let digits = self.mantissa.magnitude().to_str_radix(10);
        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{:0>width$}", digits, width = scale + 1)
        } else {
            digits
        };
        let split_at = padded.len() - scale;
        let (int_part, frac_part) = padded.split_at(split_at);
        if negative {
            write!(f, "-{int_part}.{frac_part}")
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_stripped() {
        let d = Decimal::from_parts(false, "1", "5000", 0);
        assert_eq!(d.to_string(), "1.5");
    }

    #[test]
    fn exponent_shifts_scale() {
        let d = Decimal::from_parts(false, "1", "", -3);
        assert_eq!(d.to_string(), "0.001");
    }

    #[test]
    fn very_small_magnitude_stays_plain() {
        let d = Decimal::from_parts(false, "0", "000001", 0);
        assert_eq!(d.to_string(), "0.000001");
    }

    #[test]
    fn negative_zero_normalizes() {
        let d = Decimal::from_parts(true, "0", "0", 0);
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn integral_value_has_no_dot() {
        let d = Decimal::from_parts(false, "1", "50", 2);
        assert_eq!(d.to_string(), "150");
    }
}
