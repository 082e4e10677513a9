//! The synonym relation store.
//!
//! An undirected, unweighted adjacency map over normalized word tokens.
//! Every edge is stored twice (once per endpoint), and adding an edge merges
//! the two endpoints' synonym groups by materializing the full transitive
//! closure as direct edges. Reads never traverse: membership and listing are
//! plain lookups because the closure is flattened at write time.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

/// In-memory synonym graph with eager transitive-closure maintenance.
///
/// Keys are normalized tokens; values are insertion-ordered, duplicate-free
/// neighbor lists. The symmetry invariant holds at all times: `b` appears in
/// `a`'s neighbor list exactly when `a` appears in `b`'s.
///
/// The structure performs no validation of its own. Callers are expected to
/// normalize tokens and to reject self-relations and duplicate relations
/// before mutating; see the service layer.
///
/// # Behavior
///
/// - `add_synonym` merges two synonym groups into one: every member of one
///   group becomes a mutual direct neighbor of every member of the other.
///   Re-adding an edge inside an existing group only links the two named
///   endpoints back into it; other deleted pairs are not resurrected.
/// - `delete_synonym` removes exactly one edge and never re-derives the
///   closure. Removing the sole bridge between two formerly independent
///   groups leaves all other pairwise edges intact: once merged, tokens stay
///   linked unless explicitly unlinked pair by pair.
/// - Tokens are never purged. A token whose last edge is deleted remains a
///   key with an empty neighbor list.
///
/// # Examples
///
/// ```
/// use thesaurus::graph::SynonymGraph;
///
/// let mut graph = SynonymGraph::new();
/// graph.add_synonym("car", "vehicle");
/// graph.add_synonym("car", "automobile");
///
/// assert!(graph.has_synonym("vehicle", "automobile"));
/// assert_eq!(graph.search_synonyms("car"), vec!["automobile", "vehicle"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynonymGraph {
    adjacency: AHashMap<String, Vec<String>>,
}

impl SynonymGraph {
    /// Create an empty synonym graph.
    pub fn new() -> Self {
        SynonymGraph {
            adjacency: AHashMap::new(),
        }
    }

    /// Relate `word` and `synonym`, merging their synonym groups.
    ///
    /// Ensures both tokens exist, collects each endpoint's group with a
    /// breadth-first walk over the current edges, then inserts the direct
    /// edge. When the two groups are disjoint they are cross-linked so every
    /// member of one is a mutual direct neighbor of every member of the
    /// other. When the endpoints already share a group (reachable through
    /// other edges after a pairwise delete), only edges incident to the two
    /// endpoints are added: pairs deleted elsewhere in the group stay
    /// deleted. All insertions are idempotent, so repeating an add changes
    /// nothing.
    pub fn add_synonym(&mut self, word: &str, synonym: &str) {
        self.add_word(word);
        self.add_word(synonym);

        // Group membership is snapshotted before any edge is inserted.
        let left = self.collect_group(word);
        let right = self.collect_group(synonym);
        // Groups are connected components, so they are either identical as
        // sets or disjoint.
        let same_group = right.iter().any(|member| member == word);

        self.add_edge(word, synonym);
        self.add_edge(synonym, word);

        if same_group {
            for member in &right {
                if member != word {
                    self.add_edge(word, member);
                    self.add_edge(member, word);
                }
            }
            for member in &left {
                if member != synonym {
                    self.add_edge(synonym, member);
                    self.add_edge(member, synonym);
                }
            }
        } else {
            for x in &left {
                for y in &right {
                    if x != y {
                        self.add_edge(x, y);
                        self.add_edge(y, x);
                    }
                }
            }
        }
    }

    /// Remove the direct edge between `word` and `synonym`, both directions.
    ///
    /// This deliberately does NOT re-split the transitive closure. Other
    /// members of the formerly merged group keep whatever direct edges they
    /// independently hold, including edges to both endpoints. A no-op when
    /// either token is unknown.
    pub fn delete_synonym(&mut self, word: &str, synonym: &str) {
        if self.adjacency.contains_key(word) && self.adjacency.contains_key(synonym) {
            self.remove_edge(word, synonym);
            self.remove_edge(synonym, word);
        }
    }

    /// Check whether `synonym` is a direct neighbor of `word`.
    ///
    /// The closure is flattened at write time, so this single lookup answers
    /// transitive synonymy as well. Returns `false` for an unknown word.
    pub fn has_synonym(&self, word: &str, synonym: &str) -> bool {
        match self.adjacency.get(word) {
            Some(neighbors) => neighbors.iter().any(|n| n == synonym),
            None => false,
        }
    }

    /// List the synonyms of `word`, most recently added first.
    ///
    /// Returns an empty vector when the word is unknown or has no neighbors.
    /// The reverse insertion ordering is part of the contract.
    pub fn search_synonyms(&self, word: &str) -> Vec<String> {
        match self.adjacency.get(word) {
            Some(neighbors) if !neighbors.is_empty() => {
                neighbors.iter().rev().cloned().collect()
            }
            _ => Vec::new(),
        }
    }

    /// Number of tokens ever introduced to the graph.
    pub fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    fn add_word(&mut self, word: &str) {
        if !self.adjacency.contains_key(word) {
            self.adjacency.insert(word.to_string(), Vec::new());
        }
    }

    fn add_edge(&mut self, word: &str, synonym: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(word) {
            if !neighbors.iter().any(|n| n == synonym) {
                neighbors.push(synonym.to_string());
            }
        }
    }

    fn remove_edge(&mut self, word: &str, synonym: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(word) {
            if let Some(index) = neighbors.iter().position(|n| n == synonym) {
                neighbors.remove(index);
            }
        }
    }

    /// Collect the synonym group of `start`: every token reachable from it
    /// over the current edges, `start` included, in breadth-first order.
    ///
    /// The visited set bounds the walk to one visit per token, so the cost is
    /// linear in the size of the group.
    fn collect_group(&self, start: &str) -> Vec<String> {
        let mut visited = AHashSet::new();
        visited.insert(start.to_string());

        let mut members = vec![start.to_string()];
        let mut queue = VecDeque::new();
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = self.adjacency.get(&current) {
                for adjacent in neighbors {
                    if visited.insert(adjacent.clone()) {
                        members.push(adjacent.clone());
                        queue.push_back(adjacent.clone());
                    }
                }
            }
        }

        members
    }
}
