//! Private key: the secret ring element `s`, small (ternary) coefficients.
use crate::PolyRing;
use crate::crypto::{CryptoParams, PkeResult};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct PrivateKey<P, const DEGREE: usize>
where
    P: PolyRing<DEGREE>,
{
    s: P,
    params: Arc<CryptoParams<P, DEGREE>>,
}

impl<P, const DEGREE: usize> PrivateKey<P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    /// Wraps an existing secret element. Fails if `s` is not in the params ring.
    pub fn new(s: P, params: Arc<CryptoParams<P, DEGREE>>) -> PkeResult<Self> {
        params.check_element(&s, "secret element")?;
        Ok(Self { s, params })
    }

    pub fn secret(&self) -> &P {
        &self.s
    }

    pub fn params(&self) -> &Arc<CryptoParams<P, DEGREE>> {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{CryptoParamsBuilder, PkeError};
    use crate::rings::NativePoly;

    #[test]
    fn rejects_secret_from_another_ring() {
        let params = Arc::new(CryptoParamsBuilder::<8>::new().build_native(1 << 40).unwrap());
        let foreign = NativePoly::<8>::from_coeffs(&[1, -1], &((1 << 40) + 1));
        let err = PrivateKey::new(foreign, params.clone()).unwrap_err();
        assert!(matches!(err, PkeError::ContextMismatch { .. }));

        let own = NativePoly::<8>::from_coeffs(&[1, -1], &(1 << 40));
        let sk = PrivateKey::new(own.clone(), params).unwrap();
        assert_eq!(sk.secret(), &own);
    }
}
