use crate::math::{
    gaussian_coefficients, signed_to_residue_u64, sparse_ternary_coefficients,
    ternary_coefficients, uniform_coefficients, utils::low_word,
};
use crate::{PolyRing, PolySampler};
use crypto_bigint::{NonZero, U256};
use rand::Rng;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

/// Largest native modulus (exclusive). Keeps sums of two residues in `u64`.
pub const NATIVE_MODULUS_LIMIT: u64 = 1 << 62;

/// Single-word polynomial, coefficients in `[0, modulus)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativePoly<const DEGREE: usize> {
    coeffs: [u64; DEGREE],
    modulus: u64,
}

impl<const DEGREE: usize> NativePoly<DEGREE> {
    /// Creates a polynomial from residues, reducing each one mod `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is not in `[2, 2^62)`.
    pub fn from_residues(residues: &[u64], modulus: u64) -> Self {
        assert!(
            (2..NATIVE_MODULUS_LIMIT).contains(&modulus),
            "NativePoly: modulus {modulus} out of range"
        );
        let mut coeffs = [0u64; DEGREE];
        for (dst, &src) in coeffs.iter_mut().zip(residues) {
            *dst = src % modulus;
        }
        Self { coeffs, modulus }
    }

    pub fn coeffs(&self) -> &[u64; DEGREE] {
        &self.coeffs
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Coefficients lifted to `(-q/2, q/2]`.
    pub fn to_centered_coeffs(&self) -> [i64; DEGREE] {
        let half = self.modulus / 2;
        self.coeffs.map(|c| {
            if c > half {
                -((self.modulus - c) as i64)
            } else {
                c as i64
            }
        })
    }

    /// Infinity norm of the centered representative.
    pub fn centered_norm(&self) -> u64 {
        self.to_centered_coeffs()
            .iter()
            .map(|c| c.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

impl<const DEGREE: usize> PolyRing<DEGREE> for NativePoly<DEGREE> {
    type Context = u64; // Just the modulus for the native backend

    const MAX_MODULUS_BITS: u32 = 62;

    fn zero(context: &Self::Context) -> Self {
        Self::from_residues(&[], *context)
    }

    fn from_coeffs(coeffs: &[i64], context: &Self::Context) -> Self {
        let mut poly = Self::zero(context);
        for (dst, &src) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = signed_to_residue_u64(src, *context);
        }
        poly
    }

    fn from_u256_coeffs(coeffs: &[U256], context: &Self::Context) -> Self {
        let modulus = Self::modulus_u256(context);
        let mut poly = Self::zero(context);
        for (dst, src) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = low_word(&src.rem(&modulus));
        }
        poly
    }

    fn coefficients_u256(&self) -> [U256; DEGREE] {
        self.coeffs.map(U256::from_u64)
    }

    fn context(&self) -> &Self::Context {
        &self.modulus
    }

    fn modulus_u256(context: &Self::Context) -> NonZero<U256> {
        NonZero::<U256>::from_u64(
            std::num::NonZeroU64::new(*context).unwrap_or(std::num::NonZeroU64::MIN),
        )
    }

    fn scalar_mul_assign(&mut self, scalar: &U256) {
        let reduced = low_word(&scalar.rem(&Self::modulus_u256(&self.modulus)));
        let q = self.modulus as u128;
        for coeff in &mut self.coeffs {
            *coeff = ((*coeff as u128 * reduced as u128) % q) as u64;
        }
    }
}

impl<const DEGREE: usize> AddAssign<&Self> for NativePoly<DEGREE> {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot add polynomials with different moduli"
        );
        for (a, &b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a = (*a + b) % self.modulus;
        }
    }
}

impl<const DEGREE: usize> SubAssign<&Self> for NativePoly<DEGREE> {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot subtract polynomials with different moduli"
        );
        for (a, &b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a = (*a + self.modulus - b) % self.modulus;
        }
    }
}

impl<const DEGREE: usize> MulAssign<&Self> for NativePoly<DEGREE> {
    fn mul_assign(&mut self, rhs: &Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "Cannot multiply polynomials with different moduli"
        );
        // Schoolbook multiplication with X^DEGREE + 1 reduction
        let q = self.modulus as u128;
        let mut result = [0u128; DEGREE];

        for i in 0..DEGREE {
            for j in 0..DEGREE {
                let product = (self.coeffs[i] as u128 * rhs.coeffs[j] as u128) % q;
                let pos = i + j;
                if pos < DEGREE {
                    result[pos] = (result[pos] + product) % q;
                } else {
                    // X^DEGREE = -1, so X^(DEGREE+k) = -X^k
                    let wrapped = pos - DEGREE;
                    result[wrapped] = (result[wrapped] + q - product) % q;
                }
            }
        }

        self.coeffs = result.map(|x| x as u64);
    }
}

impl<const DEGREE: usize> Neg for NativePoly<DEGREE> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for coeff in &mut self.coeffs {
            *coeff = (self.modulus - *coeff) % self.modulus;
        }
        self
    }
}

impl<const DEGREE: usize> PolySampler<DEGREE> for NativePoly<DEGREE> {
    fn sample_uniform<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self {
        let coeffs = uniform_coefficients::<DEGREE, R>(*context, rng);
        Self::from_residues(&coeffs, *context)
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
