//! Parameters, the scheme contract and its concrete variants.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod params;
pub mod pke;
pub mod results;
pub mod schemes;

pub use builder::CryptoParamsBuilder;
pub use engine::{PkeEngine, ZeroKey};
pub use errors::{PkeError, PkeResult};
pub use params::{CryptoParams, SecretKeyDist};
pub use pke::{DecryptTarget, PkeScheme, ensure_same_ring};
pub use results::{DecryptResult, EncryptResult};
pub use schemes::{Bfv, Bgv, Ckks, SchemeVariant};
