pub mod backends;
pub mod display;
pub mod traits;

pub use backends::{BigIntPoly, NativePoly};
pub use display::CompactPolyDisplay;
pub use traits::{PolyRing, PolySampler};

use std::fmt;

/// Concrete ring representations a decrypted plaintext can be written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// [`NativePoly`]: single machine-word modulus.
    Native,
    /// [`BigIntPoly`]: multiprecision modulus.
    BigInt,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "NativePoly"),
            Self::BigInt => write!(f, "BigIntPoly"),
        }
    }
}
