use super::builder::CryptoParamsBuilder;
use super::pke::{DecryptTarget, PkeScheme, ensure_same_ring};
use super::schemes::SchemeVariant;
use super::{CryptoParams, DecryptResult, PkeResult};
use crate::PolySampler;
use crate::ciphertext::{Ciphertext, KeyTag};
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use crate::rings::{BigIntPoly, CompactPolyDisplay, NativePoly};
use log::trace;
use rand::{CryptoRng, Rng};
use std::sync::Arc;

/// Key to draw a fresh zero encryption under.
#[derive(Debug)]
pub enum ZeroKey<'a, P, const DEGREE: usize>
where
    P: PolySampler<DEGREE>,
{
    Public(&'a PublicKey<P, DEGREE>),
    Private(&'a PrivateKey<P, DEGREE>),
}

/// A scheme bound to one parameter context.
#[derive(Debug, Clone)]
pub struct PkeEngine<P, const DEGREE: usize>
where
    P: PolySampler<DEGREE>,
{
    params: Arc<CryptoParams<P, DEGREE>>,
    scheme: SchemeVariant,
}

impl<P, const DEGREE: usize> PkeEngine<P, DEGREE>
where
    P: PolySampler<DEGREE>,
{
    pub fn builder() -> CryptoParamsBuilder<DEGREE> {
        CryptoParamsBuilder::new()
    }

    pub fn new(params: CryptoParams<P, DEGREE>, scheme: SchemeVariant) -> Self {
        Self::with_shared_params(Arc::new(params), scheme)
    }

    pub fn with_shared_params(params: Arc<CryptoParams<P, DEGREE>>, scheme: SchemeVariant) -> Self {
        Self { params, scheme }
    }

    pub fn params(&self) -> &Arc<CryptoParams<P, DEGREE>> {
        &self.params
    }

    pub fn scheme(&self) -> SchemeVariant {
        self.scheme
    }

    pub fn key_gen<R>(&self, make_sparse: bool, rng: &mut R) -> PkeResult<KeyPair<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        self.scheme.key_gen(&self.params, make_sparse, rng)
    }

    pub fn encrypt_public<R>(
        &self,
        plaintext: P,
        public_key: &PublicKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        ensure_same_ring(&self.params, public_key.params(), "public key ring differs from engine")?;
        self.scheme.encrypt_with_public_key(plaintext, public_key, rng)
    }

    pub fn encrypt_private<R>(
        &self,
        plaintext: P,
        private_key: &PrivateKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        ensure_same_ring(&self.params, private_key.params(), "private key ring differs from engine")?;
        self.scheme.encrypt_with_private_key(plaintext, private_key, rng)
    }

    /// Fresh encryption of zero as a full ciphertext.
    pub fn encrypt_zero<R>(
        &self,
        key: ZeroKey<'_, P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let (elements, key_tag) = match key {
            ZeroKey::Public(pk) => (
                self.scheme.encrypt_zero_core_public(pk, &self.params, rng)?,
                KeyTag::Public,
            ),
            ZeroKey::Private(sk) => (
                self.scheme.encrypt_zero_core_private(sk, &self.params, rng)?,
                KeyTag::Private,
            ),
        };
        Ciphertext::new(elements, self.params.clone(), key_tag)
    }

    /// Plaintext plus noise, before any scheme-specific rounding.
    pub fn decrypt_core(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
    ) -> PkeResult<P> {
        ensure_same_ring(&self.params, ciphertext.params(), "ciphertext ring differs from engine")?;
        let noisy = self.scheme.decrypt_core(ciphertext.elements(), private_key)?;
        trace!("decrypt core: {}", CompactPolyDisplay::<_, DEGREE>::new(&noisy, 4));
        Ok(noisy)
    }

    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        target: DecryptTarget<'_, DEGREE>,
    ) -> PkeResult<DecryptResult> {
        ensure_same_ring(&self.params, ciphertext.params(), "ciphertext ring differs from engine")?;
        self.scheme.decrypt(ciphertext, private_key, target)
    }

    pub fn decrypt_native(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut NativePoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        self.decrypt(ciphertext, private_key, DecryptTarget::Native(plaintext))
    }

    pub fn decrypt_bigint(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut BigIntPoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        self.decrypt(ciphertext, private_key, DecryptTarget::BigInt(plaintext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PolyRing;
    use crate::crypto::PkeError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const Q: u64 = (1 << 50) - 27;
    type Poly = NativePoly<16>;

    fn engine(scheme: SchemeVariant) -> PkeEngine<Poly, 16> {
        let params = PkeEngine::<Poly, 16>::builder()
            .plaintext_modulus(257)
            .build_native(Q)
            .unwrap();
        PkeEngine::new(params, scheme)
    }

    #[test]
    fn bgv_engine_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let engine = engine(SchemeVariant::bgv());
        let keys = engine.key_gen(false, &mut rng).unwrap();
        let m = Poly::from_coeffs(&[1, 2, 3, 256, 128], &Q);

        let ct = engine
            .encrypt_public(m, keys.public_key(), &mut rng)
            .unwrap();
        let mut out = Poly::zero(&257);
        let result = engine
            .decrypt_native(&ct, keys.private_key(), &mut out)
            .unwrap();
        assert!(result.is_valid);
        assert_eq!(out, Poly::from_residues(&[1, 2, 3, 256, 128], 257));
    }

    #[test]
    fn zero_encryptions_decrypt_to_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let engine = engine(SchemeVariant::bfv());
        let keys = engine.key_gen(true, &mut rng).unwrap();

        for key in [
            ZeroKey::Public(keys.public_key()),
            ZeroKey::Private(keys.private_key()),
        ] {
            let ct = engine.encrypt_zero(key, &mut rng).unwrap();
            let mut out = Poly::from_residues(&[9; 16], 257);
            engine
                .decrypt_native(&ct, keys.private_key(), &mut out)
                .unwrap();
            assert_eq!(out, Poly::zero(&257));
        }
    }

    #[test]
    fn foreign_keys_are_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let engine = engine(SchemeVariant::ckks());
        let other = PkeEngine::new(
            CryptoParamsBuilder::<16>::new().build_native(Q - 2).unwrap(),
            SchemeVariant::ckks(),
        );
        let foreign = other.key_gen(false, &mut rng).unwrap();
        let m = Poly::from_coeffs(&[5], &Q);
        let err = engine
            .encrypt_public(m, foreign.public_key(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, PkeError::ContextMismatch { .. }));
    }

    #[test]
    fn bigint_target_follows_scheme_support() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let engine = engine(SchemeVariant::bgv());
        let keys = engine.key_gen(false, &mut rng).unwrap();
        let ct = engine
            .encrypt_private(Poly::from_coeffs(&[1], &Q), keys.private_key(), &mut rng)
            .unwrap();

        let q_big = crate::math::non_zero_u256(crypto_bigint::U256::from_u64(Q)).unwrap();
        let mut out = BigIntPoly::<16>::zero(&q_big);
        let err = engine
            .decrypt_bigint(&ct, keys.private_key(), &mut out)
            .unwrap_err();
        assert!(matches!(err, PkeError::Unsupported { scheme: "BGV", .. }));
        assert_eq!(out, BigIntPoly::<16>::zero(&q_big));
    }
}
