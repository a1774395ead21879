use std::sync::Arc;

use tracing::instrument;

use crate::errors::{FieldViolation, SearchError, ValidationError};
use crate::store::PersonStore;
use crate::structs::person::Person;

pub struct SearchMatcher {
    store: Arc<dyn PersonStore + Send + Sync>,
}

impl SearchMatcher {
    pub fn new(store: Arc<dyn PersonStore + Send + Sync>) -> Self {
        SearchMatcher { store }
    }

    /// Case-insensitive substring search over nickname, name and stack
    /// entries, in creation order. An unmatched term yields an empty
    /// vec; a blank term or zero limit is a query error.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str, limit: usize) -> Result<Vec<Person>, SearchError> {
        let mut violations = Vec::new();
        if term.trim().is_empty() {
            violations.push(FieldViolation::new("t", "must not be empty"));
        }
        if limit == 0 {
            violations.push(FieldViolation::new("limit", "must be positive"));
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations }.into());
        }

        Ok(self.store.search(term, limit).await?)
    }
}

/// The matching rule evaluated per record by the in-memory store.
/// `needle` must already be lowercased.
pub(crate) fn matches_term(person: &Person, needle: &str) -> bool {
    person.nickname.to_lowercase().contains(needle)
        || person.name.to_lowercase().contains(needle)
        || person
            .stacks
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .any(|stack| stack.to_lowercase().contains(needle))
}
