// crates/fr_core/src/fraction.rs
//
// Fraction value type. Construction rejects a zero numerator or denominator;
// accessors return the stored pair verbatim. Arithmetic works in i128 so the
// intermediate sum/difference/product never wraps, reduces, normalizes the
// sign onto the numerator, and only then narrows back to i64.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::FractionError;

/// Immutable (numerator, denominator) pair; neither field is zero.
///
/// Values built with [`Fraction::new`] are kept exactly as given (unreduced,
/// signs untouched). Results of [`reduce`](Fraction::reduce) and of every
/// arithmetic operation are in lowest terms with a positive denominator, so
/// structural equality on those results is value equality.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFraction"))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Unvalidated wire shape; deserialization goes through `Fraction::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;
    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

/// Greatest common divisor of `|a|` and `|b|` (recursive Euclid).
///
/// `gcd(a, 0) == |a|`; otherwise `gcd(a, b) == gcd(b, a % b)`. The result is
/// unsigned so `gcd(i64::MIN, 0)` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    // |a| and |b| fit in u64, so the result fits too.
    gcd_u128(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as u64
}

fn gcd_u128(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd_u128(b, a % b)
    }
}

/// Reduce a wide pair to lowest terms, sign on the numerator, then narrow.
fn reduced(num: i128, den: i128) -> Result<Fraction, FractionError> {
    if num == 0 || den == 0 {
        return Err(FractionError::InvalidFraction);
    }
    let g = i128::try_from(gcd_u128(num.unsigned_abs(), den.unsigned_abs()))
        .map_err(|_| FractionError::Overflow)?;
    let (mut n, mut d) = (num / g, den / g);
    if d < 0 {
        n = n.checked_neg().ok_or(FractionError::Overflow)?;
        d = d.checked_neg().ok_or(FractionError::Overflow)?;
    }
    let n = i64::try_from(n).map_err(|_| FractionError::Overflow)?;
    let d = i64::try_from(d).map_err(|_| FractionError::Overflow)?;
    Fraction::new(n, d)
}

impl Fraction {
    /// Create a fraction from two non-zero integers, stored unreduced.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if numerator == 0 || denominator == 0 {
            return Err(FractionError::InvalidFraction);
        }
        Ok(Self { numerator, denominator })
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// GCD of this fraction's own numerator and denominator.
    pub fn gcd(&self) -> u64 {
        gcd(self.numerator, self.denominator)
    }

    /// Lowest-terms form with a positive denominator.
    ///
    /// Idempotent. Fails with `Overflow` only when sign normalization would
    /// leave `i64` (e.g. `1 / i64::MIN`).
    pub fn reduce(&self) -> Result<Self, FractionError> {
        reduced(self.numerator as i128, self.denominator as i128)
    }

    /// Swap numerator and denominator.
    pub fn reciprocal(&self) -> Result<Self, FractionError> {
        Self::new(self.denominator, self.numerator)
    }

    /// Sum of two fractions sharing a denominator, reduced.
    pub fn add(&self, other: &Self) -> Result<Self, FractionError> {
        let den = self.common_denominator(other)?;
        reduced(self.numerator as i128 + other.numerator as i128, den as i128)
    }

    /// Difference of two fractions sharing a denominator, reduced.
    pub fn subtract(&self, other: &Self) -> Result<Self, FractionError> {
        let den = self.common_denominator(other)?;
        reduced(self.numerator as i128 - other.numerator as i128, den as i128)
    }

    /// Product of two fractions, reduced. No denominator precondition.
    pub fn multiply(&self, other: &Self) -> Result<Self, FractionError> {
        reduced(
            self.numerator as i128 * other.numerator as i128,
            self.denominator as i128 * other.denominator as i128,
        )
    }

    /// Quotient: multiply by the reciprocal of `other`, reduced.
    pub fn divide(&self, other: &Self) -> Result<Self, FractionError> {
        // Guard only: `other` came through `new`, so its numerator is non-zero.
        let reciprocal = other.reciprocal()?;
        self.multiply(&reciprocal)?.reduce()
    }

    fn common_denominator(&self, other: &Self) -> Result<i64, FractionError> {
        if self.denominator != other.denominator {
            return Err(FractionError::IncompatibleDenominator {
                left: self.denominator,
                right: other.denominator,
            });
        }
        Ok(self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction: [{}/{}]", self.numerator, self.denominator)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;
    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(f: Fraction) -> Self {
        (f.numerator, f.denominator)
    }
}
