use chrono::NaiveDate;
use uuid::Uuid;

use people_registry::configuration::get_static_configuration;
use people_registry::errors::StoreError;
use people_registry::get_database_connection;
use people_registry::store::{MongoPersonStore, PersonStore};
use people_registry::structs::input::NewPerson;

async fn get_test_store() -> MongoPersonStore {
    let mut test_config = get_static_configuration().expect("failed to load configs");
    test_config.database.database_name = format!("test-{}", ulid::Ulid::new());

    let database = get_database_connection(test_config.database)
        .await
        .expect("failed to connect to mongodb");

    MongoPersonStore::new(database)
        .await
        .expect("failed to initialize the store")
}

fn new_person(nickname: &str) -> NewPerson {
    NewPerson {
        nickname: String::from(nickname),
        name: String::from("João Silva"),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        stacks: Some(vec![String::from("java"), String::from("go")]),
    }
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn created_people_can_be_fetched_back() {
    let store = get_test_store().await;

    let created = store.create(new_person("joaosilva")).await.unwrap();
    let fetched = store.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn a_taken_nickname_is_a_conflict() {
    let store = get_test_store().await;
    store.create(new_person("joaosilva")).await.unwrap();

    let error = store.create(new_person("joaosilva")).await.unwrap_err();

    assert!(matches!(
        error,
        StoreError::Conflict { nickname } if nickname == "joaosilva"
    ));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn concurrent_creates_of_one_nickname_yield_one_success() {
    let store = get_test_store().await;

    let (left, right) = tokio::join!(
        store.create(new_person("joaosilva")),
        store.create(new_person("joaosilva")),
    );

    assert_eq!(left.is_ok() as u8 + right.is_ok() as u8, 1);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn search_matches_substrings_in_any_field() {
    let store = get_test_store().await;
    let created = store.create(new_person("joaosilva")).await.unwrap();

    for term in ["SILVA", "joao", "jav"] {
        let found = store.search(term, 10).await.unwrap();
        assert!(
            found.iter().any(|person| person.id == created.id),
            "term {term:?} should match"
        );
    }

    let found = store.search("cobol", 10).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn search_treats_regex_metacharacters_literally() {
    let store = get_test_store().await;
    store.create(new_person("joaosilva")).await.unwrap();

    let found = store.search(".*", 10).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
#[ignore = "needs a running mongod"]
async fn an_unknown_id_is_not_found() {
    let store = get_test_store().await;

    let missing = Uuid::new_v4();
    let error = store.get_by_id(missing).await.unwrap_err();

    assert!(matches!(error, StoreError::NotFound { id } if id == missing));
}
