use thiserror::Error;

/// Credential verification failures
///
/// Unknown user and wrong password deliberately share one variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token issuance failures
///
/// Messages never include key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssuerError {
    #[error("Invalid signing configuration: {reason}")]
    InvalidSigningConfig { reason: String },

    #[error("Failed to encode token: {message}")]
    Encoding { message: String },

    #[error("Token expiry is out of the representable time range")]
    ExpiryOutOfRange,
}

impl IssuerError {
    pub fn invalid_signing_config(reason: impl Into<String>) -> Self {
        Self::InvalidSigningConfig {
            reason: reason.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_invalid_signing_config_message() {
        let error = IssuerError::invalid_signing_config("key is empty");
        assert_eq!(
            error.to_string(),
            "Invalid signing configuration: key is empty"
        );
    }
}
