pub mod ciphertext;
pub mod crypto;
pub mod keys;
pub mod math;
pub mod rings;

pub use ciphertext::{Ciphertext, KeyTag};
pub use crypto::{
    Bfv, Bgv, Ckks, CryptoParams, CryptoParamsBuilder, DecryptResult, DecryptTarget,
    EncryptResult, PkeEngine, PkeError, PkeResult, PkeScheme, SchemeVariant, SecretKeyDist,
};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use rings::backends::{BIGINT_MODULUS_BITS, NATIVE_MODULUS_LIMIT};
pub use rings::{BigIntPoly, NativePoly, PolyRing, PolySampler, Representation};
