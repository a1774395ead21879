use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Regex};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{bson, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::store::PersonStore;
use crate::structs::input::NewPerson;
use crate::structs::person::Person;

const COLLECTION_NAME: &str = "people";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Storage shape of a person record. Ids are UUIDv7, so `_id` ascending
/// is creation order.
#[derive(Debug, Deserialize, Serialize)]
struct PersonDocument {
    #[serde(rename = "_id")]
    id: bson::Uuid,
    nickname: String,
    name: String,
    birth_date: NaiveDate,
    stacks: Option<Vec<String>>,
}

impl PersonDocument {
    fn new(id: Uuid, input: NewPerson) -> Self {
        PersonDocument {
            id: bson::Uuid::from_uuid_1(id),
            nickname: input.nickname,
            name: input.name,
            birth_date: input.birth_date,
            stacks: input.stacks,
        }
    }
}

impl From<PersonDocument> for Person {
    fn from(document: PersonDocument) -> Self {
        Person {
            id: document.id.to_uuid_1(),
            nickname: document.nickname,
            name: document.name,
            birth_date: document.birth_date,
            stacks: document.stacks,
        }
    }
}

pub struct MongoPersonStore {
    people: Collection<PersonDocument>,
}

impl MongoPersonStore {
    /// Binds to the `people` collection and ensures the unique nickname
    /// index exists; the index is what makes concurrent creates of one
    /// nickname resolve to a single winner.
    pub async fn new(database: Database) -> Result<Self, StoreError> {
        let people = database.collection(COLLECTION_NAME);

        let unique_nickname = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        people.create_index(unique_nickname, None).await?;

        Ok(MongoPersonStore { people })
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn case_insensitive(pattern: &str) -> Regex {
    Regex {
        pattern: String::from(pattern),
        options: String::from("i"),
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    #[instrument(skip(self, input), fields(nickname = %input.nickname))]
    async fn create(&self, input: NewPerson) -> Result<Person, StoreError> {
        let document = PersonDocument::new(Uuid::now_v7(), input);

        match self.people.insert_one(&document, None).await {
            Ok(_) => Ok(Person::from(document)),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::Conflict {
                nickname: document.nickname,
            }),
            Err(err) => {
                error!("insert failed: {err}");
                Err(err.into())
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> Result<Person, StoreError> {
        let filter = doc! { "_id": bson::Uuid::from_uuid_1(id) };

        match self.people.find_one(filter, None).await? {
            Some(document) => Ok(Person::from(document)),
            None => Err(StoreError::NotFound { id }),
        }
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Person>, StoreError> {
        // Escaped so the user term matches as a plain substring.
        let pattern = regex::escape(term);
        let filter = doc! {
            "$or": [
                { "nickname": case_insensitive(&pattern) },
                { "name": case_insensitive(&pattern) },
                { "stacks": { "$in": [case_insensitive(&pattern)] } },
            ]
        };
        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .limit(limit as i64)
            .build();

        let cursor = self.people.find(filter, options).await?;
        let documents: Vec<PersonDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Person::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.people.count_documents(None, None).await?)
    }
}
