use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::search;
use crate::store::PersonStore;
use crate::structs::input::NewPerson;
use crate::structs::person::Person;

/// Process-local store used by the test suite and for embedded runs.
/// Records are kept in insertion order; reads share the lock, the
/// uniqueness check and insert happen under a single write guard.
#[derive(Default)]
pub struct InMemoryPersonStore {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn create(&self, input: NewPerson) -> Result<Person, StoreError> {
        let mut people = self.people.write().await;
        if people.iter().any(|person| person.nickname == input.nickname) {
            return Err(StoreError::Conflict {
                nickname: input.nickname,
            });
        }

        let person = Person {
            id: Uuid::now_v7(),
            nickname: input.nickname,
            name: input.name,
            birth_date: input.birth_date,
            stacks: input.stacks,
        };
        people.push(person.clone());
        Ok(person)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Person, StoreError> {
        self.people
            .read()
            .await
            .iter()
            .find(|person| person.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Person>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .people
            .read()
            .await
            .iter()
            .filter(|person| search::matches_term(person, &needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.people.read().await.len() as u64)
    }
}
