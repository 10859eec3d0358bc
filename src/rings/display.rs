use super::PolyRing;
use crate::math::{center_lift, utils::low_word};
use crypto_bigint::U256;
use std::fmt;
use std::marker::PhantomData;

/// Truncated view of a ring element: the first and last `precision`
/// coefficients in centered form.
pub struct CompactPolyDisplay<'a, P, const DEGREE: usize> {
    poly: &'a P,
    precision: usize,
    _ring: PhantomData<[(); DEGREE]>,
}

impl<'a, P, const DEGREE: usize> CompactPolyDisplay<'a, P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    pub fn new(poly: &'a P, precision: usize) -> Self {
        Self {
            poly,
            precision,
            _ring: PhantomData,
        }
    }
}

fn write_centered(f: &mut fmt::Formatter<'_>, is_negative: bool, magnitude: &U256) -> fmt::Result {
    let sign = if is_negative { "-" } else { "" };
    if magnitude.bits() <= 64 {
        write!(f, "{sign}{}", low_word(magnitude))
    } else {
        write!(f, "{sign}0x{magnitude:x}")
    }
}

impl<P, const DEGREE: usize> fmt::Display for CompactPolyDisplay<'_, P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = P::modulus_u256(self.poly.context());
        let coeffs = self.poly.coefficients_u256();
        let n = self.precision;

        write!(f, "Poly<{DEGREE}>[")?;
        let shown: Vec<usize> = if DEGREE <= 2 * n {
            (0..DEGREE).collect()
        } else {
            (0..n).chain(DEGREE - n..DEGREE).collect()
        };
        for (k, &i) in shown.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            if DEGREE > 2 * n && k == n {
                write!(f, "..., ")?;
            }
            let (neg, magnitude) = center_lift(&coeffs[i], &q);
            write_centered(f, neg, &magnitude)?;
        }
        write!(f, "]")
    }
}
