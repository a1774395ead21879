use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::structs::input::NewPerson;
use crate::structs::person::Person;

pub mod memory;
pub mod mongo;

pub use memory::InMemoryPersonStore;
pub use mongo::MongoPersonStore;

/// Sole owner of persisted person records. `create` is atomic with
/// respect to the nickname uniqueness check: of two concurrent calls
/// with the same nickname, exactly one succeeds.
#[async_trait]
pub trait PersonStore {
    async fn create(&self, input: NewPerson) -> Result<Person, StoreError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Person, StoreError>;
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Person>, StoreError>;
    async fn count(&self) -> Result<u64, StoreError>;
}

pub type DynPersonStore = Arc<dyn PersonStore + Send + Sync>;
