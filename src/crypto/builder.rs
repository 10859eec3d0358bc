use super::errors::{PkeError, PkeResult};
use super::params::{CryptoParams, SecretKeyDist};
use crate::math::non_zero_u256;
use crate::rings::{BigIntPoly, NativePoly};
use crypto_bigint::U256;
use log::debug;

const DEFAULT_PLAINTEXT_MODULUS: u64 = 65537;
const DEFAULT_ERROR_STD_DEV: f64 = 3.19;

pub struct CryptoParamsBuilder<const DEGREE: usize> {
    plaintext_modulus: Option<u64>,
    error_std_dev: Option<f64>,
    secret_key_dist: Option<SecretKeyDist>,
    sparse_hamming_weight: Option<usize>,
}

impl<const DEGREE: usize> Default for CryptoParamsBuilder<DEGREE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEGREE: usize> CryptoParamsBuilder<DEGREE> {
    pub fn new() -> Self {
        Self {
            plaintext_modulus: None,
            error_std_dev: None,
            secret_key_dist: None,
            sparse_hamming_weight: None,
        }
    }

    pub fn plaintext_modulus(mut self, t: u64) -> Self {
        self.plaintext_modulus = Some(t);
        self
    }

    pub fn error_std_dev(mut self, std_dev: f64) -> Self {
        self.error_std_dev = Some(std_dev);
        self
    }

    pub fn secret_key_dist(mut self, dist: SecretKeyDist) -> Self {
        self.secret_key_dist = Some(dist);
        self
    }

    pub fn sparse_hamming_weight(mut self, weight: usize) -> Self {
        self.sparse_hamming_weight = Some(weight);
        self
    }

    fn finish<P>(self, ring: P::Context) -> PkeResult<CryptoParams<P, DEGREE>>
    where
        P: crate::PolyRing<DEGREE>,
    {
        let plaintext_modulus = self.plaintext_modulus.unwrap_or(DEFAULT_PLAINTEXT_MODULUS);
        let error_std_dev = self.error_std_dev.unwrap_or(DEFAULT_ERROR_STD_DEV);
        let secret_key_dist = self.secret_key_dist.unwrap_or(SecretKeyDist::UniformTernary);
        let sparse_hamming_weight = self
            .sparse_hamming_weight
            .unwrap_or_else(|| (DEGREE / 2).clamp(1, 64));

        let params = CryptoParams::new(
            ring,
            plaintext_modulus,
            error_std_dev,
            secret_key_dist,
            sparse_hamming_weight,
        )?;
        debug!(
            "built params: N={DEGREE}, t={plaintext_modulus}, sigma={error_std_dev}, \
             secret={secret_key_dist:?}, sparse_h={sparse_hamming_weight}"
        );
        Ok(params)
    }

    pub fn build_native(self, modulus: u64) -> PkeResult<CryptoParams<NativePoly<DEGREE>, DEGREE>> {
        if !(2..crate::NATIVE_MODULUS_LIMIT).contains(&modulus) {
            return Err(PkeError::invalid_parameter(format!(
                "native modulus {modulus} out of range [2, 2^62)"
            )));
        }
        self.finish::<NativePoly<DEGREE>>(modulus)
    }

    pub fn build_bigint(self, modulus: U256) -> PkeResult<CryptoParams<BigIntPoly<DEGREE>, DEGREE>> {
        let modulus = non_zero_u256(modulus)
            .ok_or_else(|| PkeError::invalid_parameter("ciphertext modulus must be non-zero"))?;
        self.finish::<BigIntPoly<DEGREE>>(modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_the_builder() {
        let params = CryptoParamsBuilder::<16>::new()
            .build_native((1 << 50) - 27)
            .unwrap();
        assert_eq!(params.plaintext_modulus(), DEFAULT_PLAINTEXT_MODULUS);
        assert_eq!(params.error_std_dev(), DEFAULT_ERROR_STD_DEV);
        assert_eq!(params.secret_key_dist(), SecretKeyDist::UniformTernary);
        assert_eq!(params.sparse_hamming_weight(), 8);
    }

    #[test]
    fn overrides_are_applied() {
        let params = CryptoParamsBuilder::<256>::new()
            .plaintext_modulus(257)
            .error_std_dev(2.0)
            .secret_key_dist(SecretKeyDist::SparseTernary { hamming_weight: 32 })
            .build_bigint(U256::ONE << 100u32)
            .unwrap();
        assert_eq!(params.plaintext_modulus(), 257);
        assert_eq!(params.error_std_dev(), 2.0);
        assert_eq!(params.sparse_hamming_weight(), 64);
        assert_eq!(
            params.secret_key_dist(),
            SecretKeyDist::SparseTernary { hamming_weight: 32 }
        );
    }

    #[test]
    fn rejects_out_of_range_moduli() {
        assert!(CryptoParamsBuilder::<16>::new().build_native(1 << 62).is_err());
        assert!(CryptoParamsBuilder::<16>::new().build_native(0).is_err());
        assert!(CryptoParamsBuilder::<16>::new().build_bigint(U256::ZERO).is_err());
    }
}
