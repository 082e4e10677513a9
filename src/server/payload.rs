//! Request and response payload types for the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Body of an add-relation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymPair {
    pub word: String,
    pub synonym: String,
}

/// Payload carried by every response: the relevant synonym list plus a
/// human-readable status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseData {
    pub synonyms: Vec<String>,
    pub message: String,
}

/// Top-level response envelope, `{"data": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub data: ResponseData,
}

impl ResponseEnvelope {
    /// Build an envelope from a synonym list and a message.
    pub fn new<S: Into<String>>(synonyms: Vec<String>, message: S) -> Self {
        ResponseEnvelope {
            data: ResponseData {
                synonyms,
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serializes_under_data_key() {
        let envelope = ResponseEnvelope::new(vec!["vehicle".to_string()], "ok");
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"data":{"synonyms":["vehicle"],"message":"ok"}}"#);
    }

    #[test]
    fn test_pair_deserializes() {
        let pair: SynonymPair =
            serde_json::from_str(r#"{"word":"car","synonym":"vehicle"}"#).unwrap();
        assert_eq!(pair.word, "car");
        assert_eq!(pair.synonym, "vehicle");
    }
}
