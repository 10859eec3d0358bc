//! Concrete scheme variants, selected at construction time.
pub mod bfv;
pub mod bgv;
pub mod ckks;

pub use bfv::Bfv;
pub use bgv::Bgv;
pub use ckks::Ckks;

use super::pke::{DecryptTarget, PkeScheme};
use super::{CryptoParams, DecryptResult, PkeResult};
use crate::ciphertext::Ciphertext;
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use crate::rings::{BigIntPoly, NativePoly, Representation};
use crate::PolySampler;
use crypto_bigint::U256;
use rand::{CryptoRng, Rng};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeVariant {
    Bgv(Bgv),
    Bfv(Bfv),
    Ckks(Ckks),
}

impl SchemeVariant {
    pub fn bgv() -> Self {
        Self::Bgv(Bgv)
    }

    pub fn bfv() -> Self {
        Self::Bfv(Bfv)
    }

    pub fn ckks() -> Self {
        Self::Ckks(Ckks)
    }
}

macro_rules! dispatch {
    ($self:ident, $scheme:ident => $call:expr) => {
        match $self {
            SchemeVariant::Bgv($scheme) => $call,
            SchemeVariant::Bfv($scheme) => $call,
            SchemeVariant::Ckks($scheme) => $call,
        }
    };
}

impl<P, const DEGREE: usize> PkeScheme<P, DEGREE> for SchemeVariant
where
    P: PolySampler<DEGREE>,
{
    fn name(&self) -> &'static str {
        dispatch!(self, s => PkeScheme::<P, DEGREE>::name(s))
    }

    fn supported_outputs(&self) -> &'static [Representation] {
        dispatch!(self, s => PkeScheme::<P, DEGREE>::supported_outputs(s))
    }

    fn noise_scale(&self, params: &CryptoParams<P, DEGREE>) -> U256 {
        dispatch!(self, s => s.noise_scale(params))
    }

    fn embed_plaintext(&self, plaintext: P, params: &CryptoParams<P, DEGREE>) -> PkeResult<P> {
        dispatch!(self, s => s.embed_plaintext(plaintext, params))
    }

    fn key_gen<R>(
        &self,
        params: &Arc<CryptoParams<P, DEGREE>>,
        make_sparse: bool,
        rng: &mut R,
    ) -> PkeResult<KeyPair<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        dispatch!(self, s => s.key_gen(params, make_sparse, rng))
    }

    fn encrypt_zero_core_private<R>(
        &self,
        private_key: &PrivateKey<P, DEGREE>,
        params: &Arc<CryptoParams<P, DEGREE>>,
        rng: &mut R,
    ) -> PkeResult<Vec<P>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        dispatch!(self, s => s.encrypt_zero_core_private(private_key, params, rng))
    }

    fn encrypt_zero_core_public<R>(
        &self,
        public_key: &PublicKey<P, DEGREE>,
        params: &Arc<CryptoParams<P, DEGREE>>,
        rng: &mut R,
    ) -> PkeResult<Vec<P>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        dispatch!(self, s => s.encrypt_zero_core_public(public_key, params, rng))
    }

    fn encrypt_with_private_key<R>(
        &self,
        plaintext: P,
        private_key: &PrivateKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        dispatch!(self, s => s.encrypt_with_private_key(plaintext, private_key, rng))
    }

    fn encrypt_with_public_key<R>(
        &self,
        plaintext: P,
        public_key: &PublicKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        dispatch!(self, s => s.encrypt_with_public_key(plaintext, public_key, rng))
    }

    fn decrypt_core(&self, elements: &[P], private_key: &PrivateKey<P, DEGREE>) -> PkeResult<P> {
        dispatch!(self, s => s.decrypt_core(elements, private_key))
    }

    fn decrypt_native(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut NativePoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        dispatch!(self, s => s.decrypt_native(ciphertext, private_key, plaintext))
    }

    fn decrypt_bigint(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        plaintext: &mut BigIntPoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        dispatch!(self, s => s.decrypt_bigint(ciphertext, private_key, plaintext))
    }

    fn decrypt(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        target: DecryptTarget<'_, DEGREE>,
    ) -> PkeResult<DecryptResult> {
        dispatch!(self, s => s.decrypt(ciphertext, private_key, target))
    }
}
