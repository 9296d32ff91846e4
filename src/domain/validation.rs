//! Validation pipeline for inbound chirps.
//!
//! Runs, in order: JSON decoding, the length limit, then the moderation
//! filter. A failing step stops the pipeline, so an over-length chirp is never
//! censored or handed to persistence.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::moderation::censor;

/// Maximum chirp length, counted in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Reasons a chirp payload is rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid JSON in request body")]
    MalformedInput,
    #[error("Chirp is too long")]
    TooLong,
}

/// Raw chirp as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct ChirpSubmission {
    pub body: String,
}

/// Chirp that passed validation; `body` is already censored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedChirp {
    pub body: String,
}

impl ChirpSubmission {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Applies the length limit and the moderation filter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if the body exceeds
    /// [`MAX_CHIRP_LENGTH`] characters.
    pub fn validate(self) -> Result<AcceptedChirp, ValidationError> {
        if self.body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(ValidationError::TooLong);
        }

        Ok(AcceptedChirp {
            body: censor(&self.body),
        })
    }
}

/// Decodes a JSON request body.
///
/// # Errors
///
/// Any syntax or type mismatch yields [`ValidationError::MalformedInput`].
pub fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, ValidationError> {
    serde_json::from_slice(raw).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed request body");
        ValidationError::MalformedInput
    })
}

/// Runs the full pipeline on a raw `{"body": "..."}` payload.
///
/// # Errors
///
/// See [`decode_json`] and [`ChirpSubmission::validate`].
pub fn validate(raw: &[u8]) -> Result<AcceptedChirp, ValidationError> {
    decode_json::<ChirpSubmission>(raw)?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(body: &str) -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({ "body": body })).unwrap()
    }

    #[test]
    fn test_accepts_exactly_max_length() {
        let body = "a".repeat(MAX_CHIRP_LENGTH);
        let accepted = validate(&payload(&body)).unwrap();
        assert_eq!(accepted.body, body);
    }

    #[test]
    fn test_rejects_one_over_max_length() {
        let body = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert_eq!(validate(&payload(&body)), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        // 140 two-byte characters: 280 bytes, still within the limit.
        let body = "é".repeat(MAX_CHIRP_LENGTH);
        assert!(validate(&payload(&body)).is_ok());
    }

    #[test]
    fn test_over_length_is_rejected_regardless_of_content() {
        let body = "kerfuffle ".repeat(20);
        assert_eq!(
            ChirpSubmission::new(body).validate(),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn test_accepted_body_is_censored() {
        let accepted = validate(&payload("This is a kerfuffle opinion")).unwrap();
        assert_eq!(accepted.body, "This is a **** opinion");
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        assert_eq!(
            validate(br#"{"body": 5}"#),
            Err(ValidationError::MalformedInput)
        );
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        assert_eq!(
            validate(br#"{"body": "hel"#),
            Err(ValidationError::MalformedInput)
        );
        assert_eq!(validate(b""), Err(ValidationError::MalformedInput));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        assert_eq!(
            validate(br#"{"text": "hello"}"#),
            Err(ValidationError::MalformedInput)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MalformedInput.to_string(),
            "Invalid JSON in request body"
        );
        assert_eq!(ValidationError::TooLong.to_string(), "Chirp is too long");
    }
}
