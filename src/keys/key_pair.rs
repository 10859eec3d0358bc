use super::{PrivateKey, PublicKey};
use crate::PolyRing;
use crate::crypto::{PkeError, PkeResult};

/// A public key and the private key it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPair<P, const DEGREE: usize>
where
    P: PolyRing<DEGREE>,
{
    public_key: PublicKey<P, DEGREE>,
    private_key: PrivateKey<P, DEGREE>,
}

impl<P, const DEGREE: usize> KeyPair<P, DEGREE>
where
    P: PolyRing<DEGREE>,
{
    /// Binds two keys. Both must share the same parameter context.
    pub fn new(
        public_key: PublicKey<P, DEGREE>,
        private_key: PrivateKey<P, DEGREE>,
    ) -> PkeResult<Self> {
        let pair = Self {
            public_key,
            private_key,
        };
        if pair.is_good() {
            Ok(pair)
        } else {
            Err(PkeError::context_mismatch(
                "public and private key were built under different params",
            ))
        }
    }

    /// Whether both halves share one parameter context.
    pub fn is_good(&self) -> bool {
        self.public_key.params() == self.private_key.params()
    }

    pub fn public_key(&self) -> &PublicKey<P, DEGREE> {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey<P, DEGREE> {
        &self.private_key
    }

    pub fn into_parts(self) -> (PublicKey<P, DEGREE>, PrivateKey<P, DEGREE>) {
        (self.public_key, self.private_key)
    }
}
