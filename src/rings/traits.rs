use crypto_bigint::{NonZero, U256};
use rand::Rng;
use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

/// Negacyclic polynomial ring `Z_q[X]/(X^DEGREE + 1)`.
///
/// All PKE operations work on this trait; coefficients cross the trait
/// boundary as canonical residues widened to `U256` so callers can lift them
/// regardless of the backing integer type.
pub trait PolyRing<const DEGREE: usize>:
    Clone
    + Debug
    + PartialEq
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Neg<Output = Self>
{
    type Context: Clone + Debug + PartialEq;

    /// Largest admissible bit length of the modulus.
    const MAX_MODULUS_BITS: u32;

    fn zero(context: &Self::Context) -> Self;
    fn from_coeffs(coeffs: &[i64], context: &Self::Context) -> Self;
    /// Builds an element from residues, reducing each one mod q.
    fn from_u256_coeffs(coeffs: &[U256], context: &Self::Context) -> Self;
    fn coefficients_u256(&self) -> [U256; DEGREE];

    fn context(&self) -> &Self::Context;
    fn modulus_u256(context: &Self::Context) -> NonZero<U256>;

    fn scalar_mul_assign(&mut self, scalar: &U256);
}

// Samplers consumed by key generation and encryption.
pub trait PolySampler<const DEGREE: usize>: PolyRing<DEGREE> {
    fn sample_uniform<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self;
    fn sample_gaussian<R: Rng + ?Sized>(
        std_dev: f64,
        context: &Self::Context,
        rng: &mut R,
    ) -> Self;
    fn sample_ternary<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self;
    fn sample_sparse_ternary<R: Rng + ?Sized>(
        hamming_weight: usize,
        context: &Self::Context,
        rng: &mut R,
    ) -> Self;
}
