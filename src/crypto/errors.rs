use crate::rings::Representation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkeError {
    /// The parameter context is unusable. Fatal to the calling operation.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The scheme does not implement the requested plaintext representation.
    #[error("Decryption to {representation} is not supported by {scheme}")]
    Unsupported {
        scheme: &'static str,
        representation: Representation,
    },

    /// Key, ciphertext or params belong to different ring contexts.
    #[error("Parameter context mismatch: {message}")]
    ContextMismatch { message: String },

    #[error("Invalid ciphertext: {message}")]
    InvalidCiphertext { message: String },
}

impl PkeError {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub(crate) fn context_mismatch(message: impl Into<String>) -> Self {
        Self::ContextMismatch {
            message: message.into(),
        }
    }

    /// Whether this is a configuration/unsupported-operation error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::Unsupported { .. })
    }
}

pub type PkeResult<T> = Result<T, PkeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_names_representation() {
        let err = PkeError::Unsupported {
            scheme: "BGV",
            representation: Representation::BigInt,
        };
        assert_eq!(
            err.to_string(),
            "Decryption to BigIntPoly is not supported by BGV"
        );
        assert!(err.is_config_error());
        assert!(!PkeError::context_mismatch("x").is_config_error());
    }
}
