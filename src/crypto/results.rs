//! Status carriers for encryption and decryption.
//!
//! An invalid result always has its other fields at their defaults (zero
//! length, unit scaling factor). `is_valid` concerns arithmetic completion
//! only; it says nothing about whether the right key was used.

/// Outcome of embedding a plaintext for encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptResult {
    /// Whether the encryption was successful.
    pub is_valid: bool,
    /// Count of plaintext bytes that were encrypted.
    pub num_bytes_encrypted: usize,
}

impl EncryptResult {
    pub fn new(num_bytes_encrypted: usize) -> Self {
        Self {
            is_valid: true,
            num_bytes_encrypted,
        }
    }
}

impl Default for EncryptResult {
    fn default() -> Self {
        Self {
            is_valid: false,
            num_bytes_encrypted: 0,
        }
    }
}

/// Outcome of a decryption.
///
/// Intended to eventually carry padding information so a decoder can strip
/// it, acting as a simple checksum over the recovered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptResult {
    /// Whether the decryption arithmetic completed.
    pub is_valid: bool,
    /// Length of the decrypted plaintext message.
    pub message_length: usize,
    /// Scaling factor the caller applies when interpreting the plaintext
    /// (BGV flexible-auto rescaling). 1 for schemes that do not rescale.
    pub scaling_factor_int: u64,
}

impl DecryptResult {
    pub fn new(message_length: usize) -> Self {
        Self::with_scaling_factor(message_length, 1)
    }

    pub fn with_scaling_factor(message_length: usize, scaling_factor_int: u64) -> Self {
        Self {
            is_valid: true,
            message_length,
            scaling_factor_int,
        }
    }
}

impl Default for DecryptResult {
    fn default() -> Self {
        Self {
            is_valid: false,
            message_length: 0,
            scaling_factor_int: 1,
        }
    }
}
