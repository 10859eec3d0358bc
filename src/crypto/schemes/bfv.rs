//! BFV: message scaled by `delta = floor(q / t)` into the high digits.
use crate::ciphertext::Ciphertext;
use crate::crypto::pke::{PkeScheme, ensure_same_ring};
use crate::crypto::{CryptoParams, DecryptResult, PkeResult};
use crate::keys::PrivateKey;
use crate::math::{center_lift, reduce_centered_mod, scale_and_round};
use crate::rings::{NativePoly, Representation};
use crate::{PolyRing, PolySampler};
use crypto_bigint::U256;
use log::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfv;

impl<P, const DEGREE: usize> PkeScheme<P, DEGREE> for Bfv
where
    P: PolySampler<DEGREE>,
{
    fn name(&self) -> &'static str {
        "BFV"
    }

    fn supported_outputs(&self) -> &'static [Representation] {
        &[Representation::Native]
    }

    fn embed_plaintext(&self, plaintext: P, params: &CryptoParams<P, DEGREE>) -> PkeResult<P> {
        // Reduce to [0, t) before scaling so a centered input lands on the same residue.
        let q = params.ciphertext_modulus();
        let t = params.plaintext_modulus();
        let reduced = plaintext.coefficients_u256().map(|c| {
            let (is_negative, magnitude) = center_lift(&c, &q);
            U256::from_u64(reduce_centered_mod(is_negative, &magnitude, t))
        });
        let mut scaled = P::from_u256_coeffs(&reduced, params.ring_context());
        scaled.scalar_mul_assign(&params.delta());
        Ok(scaled)
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
        let residues = noisy
            .coefficients_u256()
            .map(|c| scale_and_round(&c, t, &q));
        *plaintext = NativePoly::from_residues(&residues, t);

        trace!("BFV: decrypted {} elements", ciphertext.len());
        Ok(DecryptResult::new(DEGREE))
    }
}
