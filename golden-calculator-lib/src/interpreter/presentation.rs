use std::fmt;
use std::fmt::Formatter;

/// Results with a larger magnitude are shown in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e10;
const DECIMAL_PLACES: i32 = 7;

/// How a calculated value is shown to the user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Presentation {
    Integer(i64),
    /// Already rounded to seven decimal places.
    Decimal(f64),
    Scientific(f64),
}

/// Chooses the presentation of a final result.
///
/// # Examples
///
/// ```
/// use golden_calculator::interpreter::presentation::{present, Presentation};
///
/// assert_eq!(present(120.0), Presentation::Integer(120));
/// assert_eq!(present(1.0 / 3.0).to_string(), "0.3333333");
/// assert_eq!(present(2f64.powi(40)).to_string(), "1.10e+12");
/// ```
pub fn present(value: f64) -> Presentation {
    if value.abs() > SCIENTIFIC_THRESHOLD {
        Presentation::Scientific(value)
    } else if value.fract() == 0.0 {
        Presentation::Integer(value as i64)
    } else {
        Presentation::Decimal(round_to_decimal_places(value, DECIMAL_PLACES))
    }
}

fn round_to_decimal_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (value * scale).round() / scale;
    // Avoid showing "-0" for tiny negative values.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Presentation {
    /// The value as it is shown, e.g. rounded for decimals.
    pub fn value(&self) -> f64 {
        match *self {
            Presentation::Integer(value) => value as f64,
            Presentation::Decimal(value) | Presentation::Scientific(value) => value,
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Presentation::Integer(value) => write!(f, "{}", value),
            Presentation::Decimal(value) => write!(f, "{}", value),
            Presentation::Scientific(value) => {
                let formatted = format!("{:.2e}", value);
                match formatted.split_once('e') {
                    Some((mantissa, exponent)) => {
                        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
                        let sign = if exponent < 0 { '-' } else { '+' };
                        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
                    }
                    None => f.write_str(&formatted),
                }
            }
        }
    }
}
