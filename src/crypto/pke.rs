//! The public-key encryption contract shared by every RLWE scheme variant.
//!
//! Conventions (all schemes):
//! - secret key `s` small, public key `(b, a)` with `b = -(a * s) + ns * e`
//! - ciphertext `(c0, c1, ...)` decrypts through
//!   `c0 + c1 * s + c2 * s^2 + ...` (see [`PkeScheme::decrypt_core`])
//!
//! `ns` is the scheme's noise scale: 1, or the plaintext modulus for BGV.
//!
//! Randomness is drawn from the caller's RNG on every call; nothing here
//! caches samples or holds mutable state.
use super::errors::{PkeError, PkeResult};
use super::params::{CryptoParams, SecretKeyDist};
use super::results::DecryptResult;
use crate::ciphertext::{Ciphertext, KeyTag};
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use crate::rings::{BigIntPoly, NativePoly, Representation};
use crate::{PolyRing, PolySampler};
use crypto_bigint::U256;
use log::{debug, trace, warn};
use rand::{CryptoRng, Rng};
use std::sync::Arc;

/// Caller-owned output slot for a decrypted plaintext.
#[derive(Debug)]
pub enum DecryptTarget<'a, const DEGREE: usize> {
    Native(&'a mut NativePoly<DEGREE>),
    BigInt(&'a mut BigIntPoly<DEGREE>),
}

impl<const DEGREE: usize> DecryptTarget<'_, DEGREE> {
    pub fn representation(&self) -> Representation {
        match self {
            Self::Native(_) => Representation::Native,
            Self::BigInt(_) => Representation::BigInt,
        }
    }
}

/// Errors unless both parameter contexts describe the same ring.
pub fn ensure_same_ring<P, const DEGREE: usize>(
    lhs: &CryptoParams<P, DEGREE>,
    rhs: &CryptoParams<P, DEGREE>,
    what: &str,
) -> PkeResult<()>
where
    P: PolyRing<DEGREE>,
{
    if lhs.is_compatible(rhs) {
        Ok(())
    } else {
        Err(PkeError::context_mismatch(what.to_string()))
    }
}

fn sample_secret_like<P, R, const DEGREE: usize>(
    dist: SecretKeyDist,
    context: &P::Context,
    rng: &mut R,
) -> P
where
    P: PolySampler<DEGREE>,
    R: Rng + ?Sized,
{
    match dist {
        SecretKeyDist::UniformTernary => P::sample_ternary(context, rng),
        SecretKeyDist::SparseTernary { hamming_weight } => {
            P::sample_sparse_ternary(hamming_weight, context, rng)
        }
    }
}

pub trait PkeScheme<P, const DEGREE: usize>
where
    P: PolySampler<DEGREE>,
{
    fn name(&self) -> &'static str;

    /// Plaintext representations this scheme can decrypt into.
    fn supported_outputs(&self) -> &'static [Representation] {
        &[]
    }

    fn supports(&self, representation: Representation) -> bool {
        self.supported_outputs().contains(&representation)
    }

    /// Multiplier applied to every fresh error term.
    fn noise_scale(&self, _params: &CryptoParams<P, DEGREE>) -> U256 {
        U256::ONE
    }

    /// Maps a plaintext element to the value added to `c0`. The element is
    /// owned; implementations may rewrite it freely.
    fn embed_plaintext(&self, plaintext: P, _params: &CryptoParams<P, DEGREE>) -> PkeResult<P> {
        Ok(plaintext)
    }

    /// Generates a fresh key pair.
    ///
    /// `make_sparse` forces a sparse ternary secret with the params' sparse
    /// hamming weight; it never changes the key pair shape.
    fn key_gen<R>(
        &self,
        params: &Arc<CryptoParams<P, DEGREE>>,
        make_sparse: bool,
        rng: &mut R,
    ) -> PkeResult<KeyPair<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        params.validate()?;
        let context = params.ring_context();

        let dist = if make_sparse {
            SecretKeyDist::SparseTernary {
                hamming_weight: params.sparse_hamming_weight(),
            }
        } else {
            params.secret_key_dist()
        };
        let s: P = sample_secret_like(dist, context, rng);

        let a = P::sample_uniform(context, rng);
        let mut e = P::sample_gaussian(params.error_std_dev(), context, rng);
        e.scalar_mul_assign(&self.noise_scale(params));

        // b = -(a * s) + ns * e
        let mut a_times_s = a.clone();
        a_times_s *= &s;
        let mut b = -a_times_s;
        b += &e;

        debug!("{}: generated key pair (N={DEGREE}, secret={dist:?})", self.name());
        let private_key = PrivateKey::new(s, params.clone())?;
        let public_key = PublicKey::new(b, a, params.clone())?;
        KeyPair::new(public_key, private_key)
    }

    /// Fresh encryption of zero under a private key: `(-(a * s) + ns * e, a)`.
    fn encrypt_zero_core_private<R>(
        &self,
        private_key: &PrivateKey<P, DEGREE>,
        params: &Arc<CryptoParams<P, DEGREE>>,
        rng: &mut R,
    ) -> PkeResult<Vec<P>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        ensure_same_ring(private_key.params(), params, "private key ring differs from params")?;
        let context = params.ring_context();

        let a = P::sample_uniform(context, rng);
        let mut e = P::sample_gaussian(params.error_std_dev(), context, rng);
        e.scalar_mul_assign(&self.noise_scale(params));

        let mut a_times_s = a.clone();
        a_times_s *= private_key.secret();
        let mut b = -a_times_s;
        b += &e;

        Ok(vec![b, a])
    }

    /// Fresh encryption of zero under a public key:
    /// `(b * v + ns * e0, a * v + ns * e1)` with ephemeral ternary `v`.
    fn encrypt_zero_core_public<R>(
        &self,
        public_key: &PublicKey<P, DEGREE>,
        params: &Arc<CryptoParams<P, DEGREE>>,
        rng: &mut R,
    ) -> PkeResult<Vec<P>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        ensure_same_ring(public_key.params(), params, "public key ring differs from params")?;
        let context = params.ring_context();
        let noise_scale = self.noise_scale(params);

        let v: P = sample_secret_like(params.secret_key_dist(), context, rng);
        let mut e0 = P::sample_gaussian(params.error_std_dev(), context, rng);
        let mut e1 = P::sample_gaussian(params.error_std_dev(), context, rng);
        e0.scalar_mul_assign(&noise_scale);
        e1.scalar_mul_assign(&noise_scale);

        let mut c0 = public_key.b().clone();
        c0 *= &v;
        c0 += &e0;

        let mut c1 = public_key.a().clone();
        c1 *= &v;
        c1 += &e1;

        Ok(vec![c0, c1])
    }

    /// Symmetric encryption under the secret key.
    fn encrypt_with_private_key<R>(
        &self,
        plaintext: P,
        private_key: &PrivateKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let params = private_key.params();
        params.check_element(&plaintext, "plaintext")?;

        let mut elements = self.encrypt_zero_core_private(private_key, params, rng)?;
        let embedded = self.embed_plaintext(plaintext, params)?;
        elements[0] += &embedded;

        trace!("{}: encrypted under private key", self.name());
        Ciphertext::new(elements, params.clone(), KeyTag::Private)
    }

    /// Standard public-key encryption.
    fn encrypt_with_public_key<R>(
        &self,
        plaintext: P,
        public_key: &PublicKey<P, DEGREE>,
        rng: &mut R,
    ) -> PkeResult<Ciphertext<P, DEGREE>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let params = public_key.params();
        params.check_element(&plaintext, "plaintext")?;

        let mut elements = self.encrypt_zero_core_public(public_key, params, rng)?;
        let embedded = self.embed_plaintext(plaintext, params)?;
        elements[0] += &embedded;

        trace!("{}: encrypted under public key", self.name());
        Ciphertext::new(elements, params.clone(), KeyTag::Public)
    }

    /// Raw `c0 + c1 * s + c2 * s^2 + ...`: plaintext plus noise, no rounding.
    ///
    /// Every decryption goes through here.
    fn decrypt_core(&self, elements: &[P], private_key: &PrivateKey<P, DEGREE>) -> PkeResult<P> {
        let (c0, rest) = match elements.split_first() {
            Some((c0, rest)) if !rest.is_empty() => (c0, rest),
            _ => {
                return Err(PkeError::InvalidCiphertext {
                    message: format!("expected at least 2 elements, got {}", elements.len()),
                });
            }
        };
        let params = private_key.params();
        for element in elements {
            params.check_element(element, "ciphertext element")?;
        }

        let s = private_key.secret();
        let mut result = c0.clone();
        let mut s_power = s.clone();
        for (i, ci) in rest.iter().enumerate() {
            if i > 0 {
                s_power *= s;
            }
            let mut term = ci.clone();
            term *= &s_power;
            result += &term;
        }
        Ok(result)
    }

    /// Decrypts into a [`NativePoly`]. Unsupported unless overridden.
    fn decrypt_native(
        &self,
        _ciphertext: &Ciphertext<P, DEGREE>,
        _private_key: &PrivateKey<P, DEGREE>,
        _plaintext: &mut NativePoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        Err(PkeError::Unsupported {
            scheme: self.name(),
            representation: Representation::Native,
        })
    }

    /// Decrypts into a [`BigIntPoly`]. Unsupported unless overridden.
    fn decrypt_bigint(
        &self,
        _ciphertext: &Ciphertext<P, DEGREE>,
        _private_key: &PrivateKey<P, DEGREE>,
        _plaintext: &mut BigIntPoly<DEGREE>,
    ) -> PkeResult<DecryptResult> {
        Err(PkeError::Unsupported {
            scheme: self.name(),
            representation: Representation::BigInt,
        })
    }

    /// Checks the capability first, then dispatches to the matching override.
    /// The output slot is untouched on error.
    fn decrypt(
        &self,
        ciphertext: &Ciphertext<P, DEGREE>,
        private_key: &PrivateKey<P, DEGREE>,
        target: DecryptTarget<'_, DEGREE>,
    ) -> PkeResult<DecryptResult> {
        let representation = target.representation();
        if !self.supports(representation) {
            warn!("{}: decryption to {representation} requested", self.name());
            return Err(PkeError::Unsupported {
                scheme: self.name(),
                representation,
            });
        }
        ensure_same_ring(
            ciphertext.params(),
            private_key.params(),
            "ciphertext and private key rings differ",
        )?;
        match target {
            DecryptTarget::Native(out) => self.decrypt_native(ciphertext, private_key, out),
            DecryptTarget::BigInt(out) => self.decrypt_bigint(ciphertext, private_key, out),
        }
    }
}
