use crate::math::{
    gaussian_coefficients, signed_to_residue_u256, sparse_ternary_coefficients,
    ternary_coefficients,
};
use crate::{PolyRing, PolySampler};
use crypto_bigint::{NonZero, U256};
use rand::Rng;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

/// Bit width bound on multiprecision moduli. Leaves headroom for `t * c`
/// products during BFV decryption.
pub const BIGINT_MODULUS_BITS: u32 = 191;

/// Multiprecision polynomial with `U256` coefficients in `[0, modulus)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BigIntPoly<const DEGREE: usize> {
    coeffs: [U256; DEGREE],
    modulus: NonZero<U256>,
}

impl<const DEGREE: usize> BigIntPoly<DEGREE> {
    pub fn with_modulus(modulus: NonZero<U256>) -> Self {
        Self {
            coeffs: [U256::ZERO; DEGREE],
            modulus,
        }
    }

    pub fn coefficients(&self) -> &[U256; DEGREE] {
        &self.coeffs
    }

    pub fn modulus(&self) -> NonZero<U256> {
        self.modulus
    }
}

impl<const DEGREE: usize> PolyRing<DEGREE> for BigIntPoly<DEGREE> {
    type Context = NonZero<U256>;

    const MAX_MODULUS_BITS: u32 = BIGINT_MODULUS_BITS;

    fn zero(context: &Self::Context) -> Self {
        Self::with_modulus(*context)
    }

    fn from_coeffs(coeffs: &[i64], context: &Self::Context) -> Self {
        let mut poly = Self::zero(context);
        for (dst, &src) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = signed_to_residue_u256(src, context);
        }
        poly
    }

    fn from_u256_coeffs(coeffs: &[U256], context: &Self::Context) -> Self {
        let mut poly = Self::zero(context);
        for (dst, src) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = src.rem(context); // Ensure coefficient is in range
        }
        poly
    }

    fn coefficients_u256(&self) -> [U256; DEGREE] {
        self.coeffs
    }

    fn context(&self) -> &Self::Context {
        &self.modulus
    }

    fn modulus_u256(context: &Self::Context) -> NonZero<U256> {
        *context
    }

    fn scalar_mul_assign(&mut self, scalar: &U256) {
        let reduced = scalar.rem(&self.modulus);
        for coeff in &mut self.coeffs {
            *coeff = coeff.mul_mod(&reduced, &self.modulus);
        }
    }
}

impl<const DEGREE: usize> AddAssign<&Self> for BigIntPoly<DEGREE> {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot add polynomials with different moduli"
        );

        for i in 0..DEGREE {
            self.coeffs[i] = self.coeffs[i].add_mod(&rhs.coeffs[i], &self.modulus);
        }
    }
}

impl<const DEGREE: usize> SubAssign<&Self> for BigIntPoly<DEGREE> {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot subtract polynomials with different moduli"
        );

        for i in 0..DEGREE {
            self.coeffs[i] = self.coeffs[i].sub_mod(&rhs.coeffs[i], &self.modulus);
        }
    }
}

impl<const DEGREE: usize> MulAssign<&Self> for BigIntPoly<DEGREE> {
    fn mul_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot multiply polynomials with different moduli"
        );

        // Schoolbook polynomial multiplication in Z[X]/(X^DEGREE + 1)
        let mut result = [U256::ZERO; DEGREE];

        for i in 0..DEGREE {
            for j in 0..DEGREE {
                let product = self.coeffs[i].mul_mod(&rhs.coeffs[j], &self.modulus);

                if i + j < DEGREE {
                    result[i + j] = result[i + j].add_mod(&product, &self.modulus);
                } else {
                    // Wrap around with negation due to X^DEGREE = -1
                    let wrapped = (i + j) - DEGREE;
                    result[wrapped] = result[wrapped].sub_mod(&product, &self.modulus);
                }
            }
        }

        self.coeffs = result;
    }
}

impl<const DEGREE: usize> Neg for BigIntPoly<DEGREE> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for coeff in &mut self.coeffs {
            *coeff = U256::ZERO.sub_mod(coeff, &self.modulus);
        }
        self
    }
}

impl<const DEGREE: usize> PolySampler<DEGREE> for BigIntPoly<DEGREE> {
    fn sample_uniform<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self {
        // Rejection sampling below the largest multiple of q in 2^256.
        let q: &U256 = context;
        let limit = U256::MAX.wrapping_sub(&U256::MAX.rem(context));
        let mut coeffs = [U256::ZERO; DEGREE];

        for coeff in &mut coeffs {
            loop {
                let words = [
                    rng.random::<u64>(),
                    rng.random::<u64>(),
                    rng.random::<u64>(),
                    rng.random::<u64>(),
                ];
                let candidate = U256::from_words(words);
                if candidate < limit || limit == U256::ZERO {
                    *coeff = candidate.rem(context);
                    break;
                }
            }
            debug_assert!(*coeff < *q);
        }

        Self {
            coeffs,
            modulus: *context,
        }
    }

    fn sample_gaussian<R: Rng + ?Sized>(
        std_dev: f64,
        context: &Self::Context,
        rng: &mut R,
    ) -> Self {
        let coeffs = gaussian_coefficients::<DEGREE, R>(std_dev, rng);
        Self::from_coeffs(&coeffs, context)
    }

    fn sample_ternary<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self {
        let coeffs = ternary_coefficients::<DEGREE, R>(rng);
        Self::from_coeffs(&coeffs, context)
    }

    fn sample_sparse_ternary<R: Rng + ?Sized>(
        hamming_weight: usize,
        context: &Self::Context,
        rng: &mut R,
    ) -> Self {
        let coeffs = sparse_ternary_coefficients::<DEGREE, R>(hamming_weight, rng);
        Self::from_coeffs(&coeffs, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::non_zero_u256;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn modulus() -> NonZero<U256> {
        // 2^127 - 1
        non_zero_u256((U256::ONE << 127u32).wrapping_sub(&U256::ONE)).unwrap()
    }

    #[test]
    fn negacyclic_wraparound() {
        let q = modulus();
        let mut x3 = BigIntPoly::<4>::from_coeffs(&[0, 0, 0, 1], &q);
        let x = BigIntPoly::<4>::from_coeffs(&[0, 1, 0, 0], &q);
        x3 *= &x;
        assert_eq!(x3, BigIntPoly::<4>::from_coeffs(&[-1, 0, 0, 0], &q));
    }

    #[test]
    fn negation_is_additive_inverse() {
        let q = modulus();
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let a = BigIntPoly::<8>::sample_uniform(&q, &mut rng);
        let mut sum = a.clone();
        sum += &(-a);
        assert_eq!(sum, BigIntPoly::<8>::zero(&q));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let q = modulus();
        let a = BigIntPoly::<4>::from_coeffs(&[3, -5, 7, -11], &q);
        let mut tripled = a.clone();
        tripled.scalar_mul_assign(&U256::from_u64(3));
        let mut expected = a.clone();
        expected += &a;
        expected += &a;
        assert_eq!(tripled, expected);
    }

    #[test]
    fn uniform_samples_are_reduced_and_distinct() {
        let q = modulus();
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let a = BigIntPoly::<16>::sample_uniform(&q, &mut rng);
        let b = BigIntPoly::<16>::sample_uniform(&q, &mut rng);
        let q_val: &U256 = &q;
        assert!(a.coefficients().iter().all(|c| c < q_val));
        assert_ne!(a, b);
    }

    #[test]
    fn sparse_ternary_has_exact_weight() {
        let q = modulus();
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let s = BigIntPoly::<32>::sample_sparse_ternary(5, &q, &mut rng);
        let non_zero = s.coefficients().iter().filter(|c| **c != U256::ZERO).count();
        assert_eq!(non_zero, 5);
    }
}
