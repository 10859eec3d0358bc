use crypto_bigint::{NonZero, U256};

/// Wraps a non-zero `U256`, `None` for zero.
pub fn non_zero_u256(value: U256) -> Option<NonZero<U256>> {
    Option::from(NonZero::new(value))
}

/// Reduces a signed integer into `[0, q)`.
///
/// `q` must be below `2^63`.
pub fn signed_to_residue_u64(x: i64, q: u64) -> u64 {
    x.rem_euclid(q as i64) as u64
}

/// Reduces a signed integer into `[0, q)` for a multiprecision modulus.
pub fn signed_to_residue_u256(x: i64, q: &NonZero<U256>) -> U256 {
    let magnitude = U256::from_u64(x.unsigned_abs()).rem(q);
    if x >= 0 || magnitude == U256::ZERO {
        magnitude
    } else {
        q.wrapping_sub(&magnitude)
    }
}

/// Centered lift of `c` in `[0, q)` to `(-q/2, q/2]`, as `(is_negative, |value|)`.
pub fn center_lift(c: &U256, q: &NonZero<U256>) -> (bool, U256) {
    let q_val: &U256 = q;
    let half = *q_val >> 1;
    if *c > half {
        (true, q_val.wrapping_sub(c))
    } else {
        (false, *c)
    }
}

/// Reduces a centered value (sign + magnitude) modulo a native modulus `t`.
pub fn reduce_centered_mod(is_negative: bool, magnitude: &U256, t: u64) -> u64 {
    let Some(t_nz) = non_zero_u256(U256::from_u64(t)) else {
        return 0;
    };
    let r = low_word(&magnitude.rem(&t_nz));
    if is_negative && r != 0 { t - r } else { r }
}

/// Computes `round(t * c / q) mod t` for `c` in `[0, q)`.
///
/// The caller guarantees `t * q < 2^255`.
pub fn scale_and_round(c: &U256, t: u64, q: &NonZero<U256>) -> u64 {
    let q_val: &U256 = q;
    let numerator = c
        .wrapping_mul(&U256::from_u64(t))
        .wrapping_add(&(*q_val >> 1));
    let (quotient, _) = numerator.div_rem(q);
    let rounded = low_word(&quotient);
    if rounded >= t { rounded - t } else { rounded }
}

/// Lowest 64-bit limb of `value`.
pub fn low_word(value: &U256) -> u64 {
    value.as_words()[0]
}
