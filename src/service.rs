//! The validating service layer over a shared synonym graph.
//!
//! [`SynonymService`] is the collaborator that owns every business rule the
//! graph itself does not enforce: token normalization and validation,
//! self-synonym and duplicate-relation rejection, and the existence check
//! before a delete. The graph underneath only ever sees structurally valid
//! operations.
//!
//! One service instance wraps one process-wide graph behind a reader-writer
//! lock: mutations take the write lock for their whole check-then-mutate
//! sequence, so a BFS merge always observes a consistent snapshot, and reads
//! never see a half-applied merge.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::analysis::{normalize, validate_token};
use crate::error::{Result, ThesaurusError};
use crate::graph::SynonymGraph;

/// Shared, thread-safe handle to the synonym store.
///
/// Cheap to clone; all clones operate on the same underlying graph.
///
/// # Examples
///
/// ```
/// use thesaurus::service::SynonymService;
///
/// let service = SynonymService::new();
/// service.add("car", "vehicle").unwrap();
/// assert_eq!(service.relations("car").unwrap(), vec!["vehicle"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynonymService {
    graph: Arc<RwLock<SynonymGraph>>,
}

impl SynonymService {
    /// Create a service around a fresh, empty graph.
    pub fn new() -> Self {
        SynonymService {
            graph: Arc::new(RwLock::new(SynonymGraph::new())),
        }
    }

    /// Relate `word` and `synonym` and return the updated synonym list of
    /// `word`, most recent first.
    ///
    /// Rejects equal tokens with [`ThesaurusError::SelfSynonym`] and an
    /// already-existing relation with [`ThesaurusError::DuplicateSynonym`].
    /// The precondition check and the merge run under one write lock.
    pub fn add(&self, word: &str, synonym: &str) -> Result<Vec<String>> {
        let word = prepare_token(word)?;
        let synonym = prepare_token(synonym)?;

        if word == synonym {
            warn!(%word, "rejected self synonym");
            return Err(ThesaurusError::self_synonym(format!(
                "'{word}' cannot be its own synonym"
            )));
        }

        let mut graph = self.graph.write();
        if graph.has_synonym(&word, &synonym) {
            warn!(%word, %synonym, "rejected duplicate synonym");
            return Err(ThesaurusError::duplicate_synonym(format!(
                "'{word}' and '{synonym}' are already related"
            )));
        }

        graph.add_synonym(&word, &synonym);
        info!(%word, %synonym, "synonym added");
        Ok(graph.search_synonyms(&word))
    }

    /// List the synonyms of `word`, most recent first.
    ///
    /// An unknown word yields an empty list, not an error.
    pub fn relations(&self, word: &str) -> Result<Vec<String>> {
        let word = prepare_token(word)?;
        Ok(self.graph.read().search_synonyms(&word))
    }

    /// Check whether `word` and `synonym` are currently related.
    pub fn contains(&self, word: &str, synonym: &str) -> Result<bool> {
        let word = prepare_token(word)?;
        let synonym = prepare_token(synonym)?;
        Ok(self.graph.read().has_synonym(&word, &synonym))
    }

    /// Remove the relation between `word` and `synonym` and return the
    /// updated synonym list of `word`.
    ///
    /// A relation that does not exist is [`ThesaurusError::SynonymNotFound`]
    /// and leaves the graph untouched. Removal deletes the one direct edge
    /// only; the surrounding closure is never re-split (see
    /// [`SynonymGraph::delete_synonym`]).
    pub fn remove(&self, word: &str, synonym: &str) -> Result<Vec<String>> {
        let word = prepare_token(word)?;
        let synonym = prepare_token(synonym)?;

        let mut graph = self.graph.write();
        if !graph.has_synonym(&word, &synonym) {
            warn!(%word, %synonym, "rejected delete of unknown relation");
            return Err(ThesaurusError::not_found(format!(
                "'{word}' and '{synonym}' are not related"
            )));
        }

        graph.delete_synonym(&word, &synonym);
        info!(%word, %synonym, "synonym deleted");
        Ok(graph.search_synonyms(&word))
    }
}

/// Normalize a raw input and validate its shape.
fn prepare_token(raw: &str) -> Result<String> {
    let token = normalize(raw);
    validate_token(&token)?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_updated_list() {
        let service = SynonymService::new();
        assert_eq!(service.add("car", "vehicle").unwrap(), vec!["vehicle"]);
        assert_eq!(
            service.add("car", "automobile").unwrap(),
            vec!["automobile", "vehicle"]
        );
    }

    #[test]
    fn test_add_normalizes_inputs() {
        let service = SynonymService::new();
        service.add("  Car ", "VEHICLE").unwrap();
        assert!(service.contains("car", "vehicle").unwrap());
        assert!(service.contains("CAR", " vehicle ").unwrap());
    }

    #[test]
    fn test_add_rejects_self_synonym() {
        let service = SynonymService::new();
        let error = service.add("car", "Car").unwrap_err();
        assert!(matches!(error, ThesaurusError::SelfSynonym(_)));
        assert!(service.relations("car").unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_relation() {
        let service = SynonymService::new();
        service.add("car", "vehicle").unwrap();
        let error = service.add("car", "vehicle").unwrap_err();
        assert!(matches!(error, ThesaurusError::DuplicateSynonym(_)));
        // Transitive edges count as existing relations too.
        service.add("vehicle", "automobile").unwrap();
        let error = service.add("car", "automobile").unwrap_err();
        assert!(matches!(error, ThesaurusError::DuplicateSynonym(_)));
    }

    #[test]
    fn test_add_rejects_malformed_tokens() {
        let service = SynonymService::new();
        assert!(matches!(
            service.add("car2", "vehicle"),
            Err(ThesaurusError::InvalidToken(_))
        ));
        assert!(matches!(
            service.add("car", "x"),
            Err(ThesaurusError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_remove_requires_existing_relation() {
        let service = SynonymService::new();
        let error = service.remove("car", "vehicle").unwrap_err();
        assert!(matches!(error, ThesaurusError::SynonymNotFound(_)));

        service.add("car", "vehicle").unwrap();
        assert!(service.remove("car", "vehicle").unwrap().is_empty());
        assert!(!service.contains("car", "vehicle").unwrap());
    }

    #[test]
    fn test_clones_share_one_graph() {
        let service = SynonymService::new();
        let other = service.clone();
        service.add("car", "vehicle").unwrap();
        assert!(other.contains("vehicle", "car").unwrap());
    }
}
