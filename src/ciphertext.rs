//! RLWE ciphertexts.
//!
//! A ciphertext is an ordered sequence of ring elements `(c0, c1, ...)`
//! satisfying `c0 + c1*s + c2*s^2 + ... ≈ plaintext` (mod noise), plus the
//! parameter context it was produced under.
use crate::PolyRing;
use crate::crypto::{CryptoParams, PkeError, PkeResult};
use std::sync::Arc;

/// Which kind of key produced a ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTag {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ciphertext<P, const DEGREE: usize>
where
    P: PolyRing<DEGREE>,
{
    elements: Vec<P>,
    params: Arc<CryptoParams<P, DEGREE>>,
    key_tag: KeyTag,
    scaling_factor_int: u64,
}

impl<P, const DEGREE: usize> Ciphertext<P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    /// Builds a ciphertext from at least two elements of the params ring.
    pub fn new(
        elements: Vec<P>,
        params: Arc<CryptoParams<P, DEGREE>>,
        key_tag: KeyTag,
    ) -> PkeResult<Self> {
        if elements.len() < 2 {
            return Err(PkeError::InvalidCiphertext {
                message: format!("expected at least 2 elements, got {}", elements.len()),
            });
        }
        for element in &elements {
            params.check_element(element, "ciphertext element")?;
        }
        Ok(Self {
            elements,
            params,
            key_tag,
            scaling_factor_int: 1,
        })
    }

    /// Sets the integer scaling factor carried as metadata.
    pub fn with_scaling_factor_int(mut self, scaling_factor_int: u64) -> Self {
        self.scaling_factor_int = scaling_factor_int;
        self
    }

    pub fn elements(&self) -> &[P] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<P> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn params(&self) -> &Arc<CryptoParams<P, DEGREE>> {
        &self.params
    }

    pub fn key_tag(&self) -> KeyTag {
        self.key_tag
    }

    pub fn scaling_factor_int(&self) -> u64 {
        self.scaling_factor_int
    }
}
