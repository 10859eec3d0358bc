pub mod key_pair;
pub mod private_key;
pub mod public_key;

pub use key_pair::KeyPair;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
