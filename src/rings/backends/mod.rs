pub mod bigint;
pub mod native;

pub use bigint::{BIGINT_MODULUS_BITS, BigIntPoly};
pub use native::{NATIVE_MODULUS_LIMIT, NativePoly};
