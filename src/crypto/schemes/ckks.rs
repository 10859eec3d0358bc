//! CKKS: approximate arithmetic, the decrypted element keeps its noise.
//!
//! Scaling and decoding belong to the encoder; this layer only hands back
//! `m + e` over the ciphertext modulus.
use crate::ciphertext::Ciphertext;
use crate::crypto::pke::{PkeScheme, ensure_same_ring};
use crate::crypto::{DecryptResult, PkeError, PkeResult};
use crate::keys::PrivateKey;
use crate::math::utils::low_word;
use crate::rings::{BigIntPoly, NativePoly, Representation};
use crate::{PolyRing, PolySampler};
use log::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ckks;

const CKKS_OUTPUTS: &[Representation] = &[Representation::Native, Representation::BigInt];

impl<P, const DEGREE: usize> PkeScheme<P, DEGREE> for Ckks
where
    P: PolySampler<DEGREE>,
{
    fn name(&self) -> &'static str {
        "CKKS"
    }

    fn supported_outputs(&self) -> &'static [Representation] {
        CKKS_OUTPUTS
    }

    /// Only available while the ciphertext modulus fits a native word.
    fn decrypt_native(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut NativePoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        let params = ciphertext.params();
        ensure_same_ring(params, private_key.params(), "ciphertext and private key rings differ")?;

        let q = params.ciphertext_modulus();
        if q.bits() > 62 {
            return Err(PkeError::Unsupported {
                scheme: "CKKS",
                representation: Representation::Native,
            });
        }
        let q_native = low_word(&q);

        let noisy = self.decrypt_core(ciphertext.elements(), private_key)?;
        *plaintext = NativePoly::from_u256_coeffs(&noisy.coefficients_u256(), &q_native);

        trace!("CKKS: decrypted {} elements to NativePoly", ciphertext.len());
        Ok(DecryptResult::new(DEGREE))
    }

    fn decrypt_bigint(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut BigIntPoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        let params = ciphertext.params();
        ensure_same_ring(params, private_key.params(), "ciphertext and private key rings differ")?;

        let noisy = self.decrypt_core(ciphertext.elements(), private_key)?;
        let q = params.ciphertext_modulus();
        *plaintext = BigIntPoly::from_u256_coeffs(&noisy.coefficients_u256(), &q);

        trace!("CKKS: decrypted {} elements to BigIntPoly", ciphertext.len());
        Ok(DecryptResult::new(DEGREE))
    }
}
