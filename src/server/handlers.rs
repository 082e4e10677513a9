//! HTTP handlers for the synonym API.
//!
//! Every handler answers with the same `{"data": {synonyms, message}}`
//! envelope, success or not; only the status code and message vary. Conflict
//! responses include the word's current synonym list so clients can see the
//! state that caused the rejection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::config::messages;
use crate::error::ThesaurusError;
use crate::server::payload::{ResponseEnvelope, SynonymPair};
use crate::service::SynonymService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: SynonymService,
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /api/synonyms/add`
///
/// 200 with the updated list on success; 409 for a self-synonym or an
/// already-existing relation; 422 for malformed tokens.
pub async fn add_synonym(
    State(state): State<AppState>,
    Json(pair): Json<SynonymPair>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    match state.service.add(&pair.word, &pair.synonym) {
        Ok(synonyms) => (
            StatusCode::OK,
            Json(ResponseEnvelope::new(
                synonyms,
                messages::SYNONYM_SUCCESSFULLY_ADDED,
            )),
        ),
        Err(ThesaurusError::SelfSynonym(_)) => conflict(
            &state.service,
            &pair.word,
            messages::WORD_AND_SYNONYM_CANT_BE_SAME,
        ),
        Err(ThesaurusError::DuplicateSynonym(_)) => {
            conflict(&state.service, &pair.word, messages::SYNONYM_ALREADY_ADDED)
        }
        Err(error) => unprocessable(error),
    }
}

/// `GET /api/synonyms/get/{word}`
///
/// Always 200 for a well-formed token. An unknown word is not an error; it
/// is distinguished from a populated list only by the message.
pub async fn get_synonyms(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    match state.service.relations(&word) {
        Ok(synonyms) => {
            let message = if synonyms.is_empty() {
                messages::SYNONYMS_LIST_EMPTY
            } else {
                messages::SYNONYMS_SUCCESSFULLY_RETURNED
            };
            (StatusCode::OK, Json(ResponseEnvelope::new(synonyms, message)))
        }
        Err(error) => unprocessable(error),
    }
}

/// `DELETE /api/synonyms/delete/{word}/{synonym}`
///
/// 200 with the updated list on success; 404 when the relation does not
/// exist; 422 for malformed tokens.
pub async fn delete_synonym(
    State(state): State<AppState>,
    Path((word, synonym)): Path<(String, String)>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    match state.service.remove(&word, &synonym) {
        Ok(synonyms) => (
            StatusCode::OK,
            Json(ResponseEnvelope::new(
                synonyms,
                messages::SYNONYM_SUCCESSFULLY_DELETED,
            )),
        ),
        Err(ThesaurusError::SynonymNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ResponseEnvelope::new(
                Vec::new(),
                messages::synonym_doesnt_exist(&synonym),
            )),
        ),
        Err(error) => unprocessable(error),
    }
}

/// 409 response carrying the word's current synonyms.
fn conflict(
    service: &SynonymService,
    word: &str,
    message: &str,
) -> (StatusCode, Json<ResponseEnvelope>) {
    let synonyms = service.relations(word).unwrap_or_default();
    (
        StatusCode::CONFLICT,
        Json(ResponseEnvelope::new(synonyms, message)),
    )
}

/// 422 response for malformed input, echoing the validation detail.
fn unprocessable(error: ThesaurusError) -> (StatusCode, Json<ResponseEnvelope>) {
    let message = match error {
        ThesaurusError::InvalidToken(detail) => detail,
        _ => messages::UNPROCESSABLE_DATA.to_string(),
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ResponseEnvelope::new(Vec::new(), message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> AppState {
        AppState {
            service: SynonymService::new(),
        }
    }

    fn pair(word: &str, synonym: &str) -> Json<SynonymPair> {
        Json(SynonymPair {
            word: word.to_string(),
            synonym: synonym.to_string(),
        })
    }

    #[tokio::test]
    async fn test_add_returns_ok_and_updated_list() {
        let state = sample_state();
        let (status, Json(envelope)) =
            add_synonym(State(state), pair("car", "vehicle")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.data.synonyms, vec!["vehicle"]);
        assert_eq!(envelope.data.message, messages::SYNONYM_SUCCESSFULLY_ADDED);
    }

    #[tokio::test]
    async fn test_add_same_word_and_synonym_conflicts() {
        let state = sample_state();
        let (status, Json(envelope)) = add_synonym(State(state), pair("car", "car")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(envelope.data.synonyms.is_empty());
        assert_eq!(
            envelope.data.message,
            messages::WORD_AND_SYNONYM_CANT_BE_SAME
        );
    }

    #[tokio::test]
    async fn test_add_duplicate_conflicts_with_current_list() {
        let state = sample_state();
        add_synonym(State(state.clone()), pair("car", "machine")).await;
        let (status, Json(envelope)) =
            add_synonym(State(state), pair("car", "machine")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(envelope.data.synonyms, vec!["machine"]);
        assert_eq!(envelope.data.message, messages::SYNONYM_ALREADY_ADDED);
    }

    #[tokio::test]
    async fn test_add_invalid_token_is_unprocessable() {
        let state = sample_state();
        let (status, Json(envelope)) =
            add_synonym(State(state), pair("car99", "vehicle")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(envelope.data.synonyms.is_empty());
        assert!(envelope.data.message.contains("non-alphabetic"));
    }

    #[tokio::test]
    async fn test_get_unknown_word_is_ok_with_empty_list() {
        let state = sample_state();
        let (status, Json(envelope)) =
            get_synonyms(State(state), Path("plane".to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(envelope.data.synonyms.is_empty());
        assert_eq!(envelope.data.message, messages::SYNONYMS_LIST_EMPTY);
    }

    #[tokio::test]
    async fn test_delete_unknown_relation_is_not_found() {
        let state = sample_state();
        let (status, Json(envelope)) = delete_synonym(
            State(state),
            Path(("car".to_string(), "vehicle".to_string())),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            envelope.data.message,
            messages::synonym_doesnt_exist("vehicle")
        );
    }
}
