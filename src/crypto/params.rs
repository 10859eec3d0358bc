//! Scheme parameter context shared by keys and ciphertexts.

use super::errors::{PkeError, PkeResult};
use crate::PolyRing;
use crate::math::non_zero_u256;
use crypto_bigint::{NonZero, U256};

/// Distribution of the secret key coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKeyDist {
    /// Every coefficient uniform in `{-1, 0, 1}`.
    UniformTernary,
    /// Exactly `hamming_weight` coefficients in `{-1, 1}`, the rest zero.
    SparseTernary { hamming_weight: usize },
}

/// Parameter context: ring, plaintext modulus and noise distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoParams<P, const DEGREE: usize>
where
    P: PolyRing<DEGREE>,
{
    ring: P::Context,
    plaintext_modulus: u64,
    error_std_dev: f64,
    secret_key_dist: SecretKeyDist,
    sparse_hamming_weight: usize,
}

impl<P, const DEGREE: usize> CryptoParams<P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    /// Creates a validated parameter context.
    pub fn new(
        ring: P::Context,
        plaintext_modulus: u64,
        error_std_dev: f64,
        secret_key_dist: SecretKeyDist,
        sparse_hamming_weight: usize,
    ) -> PkeResult<Self> {
        let params = Self {
            ring,
            plaintext_modulus,
            error_std_dev,
            secret_key_dist,
            sparse_hamming_weight,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> PkeResult<()> {
        if DEGREE < 2 || !DEGREE.is_power_of_two() {
            return Err(PkeError::invalid_parameter(format!(
                "ring dimension {DEGREE} must be a power of two >= 2"
            )));
        }

        let q = P::modulus_u256(&self.ring);
        let q_bits = q.bits();
        if q_bits < 2 || q_bits > P::MAX_MODULUS_BITS {
            return Err(PkeError::invalid_parameter(format!(
                "ciphertext modulus must have between 2 and {} bits, got {q_bits}",
                P::MAX_MODULUS_BITS
            )));
        }

        let t = U256::from_u64(self.plaintext_modulus);
        if self.plaintext_modulus < 2 || self.plaintext_modulus >= crate::NATIVE_MODULUS_LIMIT
        {
            return Err(PkeError::invalid_parameter(format!(
                "plaintext modulus {} out of range [2, 2^62)",
                self.plaintext_modulus
            )));
        }
        let q_val: &U256 = &q;
        if t >= *q_val {
            return Err(PkeError::invalid_parameter(
                "plaintext modulus must be smaller than the ciphertext modulus",
            ));
        }

        if !(self.error_std_dev.is_finite() && self.error_std_dev > 0.0) {
            return Err(PkeError::invalid_parameter(format!(
                "error standard deviation must be finite and positive, got {}",
                self.error_std_dev
            )));
        }

        check_hamming_weight::<DEGREE>(self.sparse_hamming_weight)?;
        if let SecretKeyDist::SparseTernary { hamming_weight } = self.secret_key_dist {
            check_hamming_weight::<DEGREE>(hamming_weight)?;
        }
        Ok(())
    }

    pub fn ring_context(&self) -> &P::Context {
        &self.ring
    }

    pub fn ciphertext_modulus(&self) -> NonZero<U256> {
        P::modulus_u256(&self.ring)
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.plaintext_modulus
    }

    pub fn error_std_dev(&self) -> f64 {
        self.error_std_dev
    }

    pub fn secret_key_dist(&self) -> SecretKeyDist {
        self.secret_key_dist
    }

    /// Hamming weight used when a sparse secret is requested.
    pub fn sparse_hamming_weight(&self) -> usize {
        self.sparse_hamming_weight
    }

    pub fn ring_dimension(&self) -> usize {
        DEGREE
    }

    /// `floor(q / t)`, the BFV plaintext scaling factor.
    pub fn delta(&self) -> U256 {
        let q = self.ciphertext_modulus();
        match non_zero_u256(U256::from_u64(self.plaintext_modulus)) {
            Some(t) => q.div_rem(&t).0,
            None => U256::ZERO,
        }
    }

    /// Whether elements built under `other` share this ring.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.ring == other.ring
    }

    /// Errors unless `element` lives in this context's ring.
    pub(crate) fn check_element(&self, element: &P, what: &str) -> PkeResult<()> {
        if element.context() == &self.ring {
            Ok(())
        } else {
            Err(PkeError::context_mismatch(format!(
                "{what} does not belong to the parameter ring"
            )))
        }
    }
}

fn check_hamming_weight<const DEGREE: usize>(hamming_weight: usize) -> PkeResult<()> {
    if hamming_weight == 0 || hamming_weight > DEGREE {
        Err(PkeError::invalid_parameter(format!(
            "hamming weight {hamming_weight} must be in 1..={DEGREE}"
        )))
    } else {
        Ok(())
    }
}
