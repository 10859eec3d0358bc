use crate::PolyRing;
use crate::crypto::{CryptoParams, PkeResult};
use std::sync::Arc;

/// RLWE public key `(b, a)` with `b = -(a * s) + ns * e`.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey<P, const DEGREE: usize>
where
    P: PolyRing<DEGREE>,
{
    /// "b" component: b = -(a * s) + ns * e
    b: P,
    /// "a" component: uniformly random
    a: P,
    params: Arc<CryptoParams<P, DEGREE>>,
}

impl<P, const DEGREE: usize> PublicKey<P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    pub fn new(b: P, a: P, params: Arc<CryptoParams<P, DEGREE>>) -> PkeResult<Self> {
        params.check_element(&b, "public key element b")?;
        params.check_element(&a, "public key element a")?;
        Ok(Self { b, a, params })
    }

    pub fn b(&self) -> &P {
        &self.b
    }

    pub fn a(&self) -> &P {
        &self.a
    }

    pub fn params(&self) -> &Arc<CryptoParams<P, DEGREE>> {
        &self.params
    }
}
