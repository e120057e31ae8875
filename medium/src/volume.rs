//! Batch volume input handling.
//!
//! Volume text is read the way a form field is: leading whitespace is
//! skipped, the longest numeric prefix is used and anything after it is
//! ignored. Text without a numeric prefix reads as zero.

use std::fmt;

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::preceded,
    IResult, Parser,
};
use tracing::{debug, warn};

use crate::recipe::DEFAULT_VOLUME;
use crate::util::shortest_decimal;

type Res<T, U> = IResult<T, U, nom::error::Error<T>>;

/// `[+-]digits[.digits][e[+-]digits]` or `[+-].digits[e[+-]digits]`
fn decimal(input: &str) -> Res<&str, &str> {
    recognize((
        opt(one_of("+-")),
        alt((
            recognize((digit1, opt((char('.'), digit0)))),
            recognize((char('.'), digit1)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

/// Read a volume in liters from free-form text.
///
/// Returns 0 when the text has no numeric prefix or the number does not fit
/// in a finite `f64`. The sign is preserved; use [`Volume::new`] to clamp.
///
/// ```
/// use medium::volume::parse_volume;
///
/// assert_eq!(parse_volume("250"), 250.0);
/// assert_eq!(parse_volume(" 2.5L"), 2.5);
/// assert_eq!(parse_volume("abc"), 0.0);
/// ```
pub fn parse_volume(input: &str) -> f64 {
    let parsed = preceded(multispace0, decimal)
        .parse(input)
        .ok()
        .and_then(|(_, number)| number.parse::<f64>().ok());
    match parsed {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            warn!(input, value = v, "volume out of range, using 0");
            0.0
        }
        None => {
            debug!(input, "volume not a number, using 0");
            0.0
        }
    }
}

/// A batch volume in liters, never negative
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Volume(f64);

impl Volume {
    /// Negative and non-finite volumes clamp to zero.
    pub fn new(liters: f64) -> Volume {
        if liters.is_nan() || liters.is_infinite() {
            warn!(liters, "non-finite volume clamped to 0");
            return Volume(0.0);
        }
        if liters < 0.0 {
            warn!(liters, "negative volume clamped to 0");
            return Volume(0.0);
        }
        // -0.0 would print as "-0"
        if liters == 0.0 {
            return Volume(0.0);
        }
        Volume(liters)
    }

    /// [`parse_volume`] followed by clamping.
    pub fn parse(input: &str) -> Volume {
        Volume::new(parse_volume(input))
    }

    pub fn liters(&self) -> f64 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(DEFAULT_VOLUME)
    }
}

impl From<f64> for Volume {
    fn from(liters: f64) -> Self {
        Volume::new(liters)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&shortest_decimal(self.0))
    }
}
