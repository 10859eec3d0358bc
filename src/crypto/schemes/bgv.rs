//! BGV: errors scaled by the plaintext modulus, message in the low digits.
use crate::ciphertext::Ciphertext;
use crate::crypto::pke::{PkeScheme, ensure_same_ring};
use crate::crypto::{CryptoParams, DecryptResult, PkeResult};
use crate::keys::PrivateKey;
use crate::math::{center_lift, reduce_centered_mod};
use crate::rings::{NativePoly, Representation};
use crate::{PolyRing, PolySampler};
use crypto_bigint::U256;
use log::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bgv;

impl<P, const DEGREE: usize> PkeScheme<P, DEGREE> for Bgv
where
    P: PolySampler<DEGREE>,
{
    fn name(&self) -> &'static str {
        "BGV"
    }

    fn supported_outputs(&self) -> &'static [Representation] {
        &[Representation::Native]
    }

    fn noise_scale(&self, params: &CryptoParams<P, DEGREE>) -> U256 {
        U256::from_u64(params.plaintext_modulus())
    }

    fn decrypt_native(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut NativePoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        let params = ciphertext.params();
        ensure_same_ring(params, private_key.params(), "ciphertext and private key rings differ")?;

        let noisy = self.decrypt_core(ciphertext.elements(), private_key)?;
        let q = params.ciphertext_modulus();
        let t = params.plaintext_modulus();
        let residues = noisy.coefficients_u256().map(|c| {
            let (is_negative, magnitude) = center_lift(&c, &q);
            reduce_centered_mod(is_negative, &magnitude, t)
        });
        *plaintext = NativePoly::from_residues(&residues, t);

        trace!("BGV: decrypted {} elements", ciphertext.len());
        Ok(DecryptResult::with_scaling_factor(
            DEGREE,
            ciphertext.scaling_factor_int(),
        ))
    }
}
