use chrono::NaiveDate;
use serde::Deserialize;

/// Unvalidated creation payload, as deserialized off the wire. Field
/// presence is checked by the validation layer, not the deserializer.
#[derive(Debug, Default, Deserialize)]
pub struct RawPersonInput {
    #[serde(default, rename(deserialize = "apelido"))]
    pub nickname: Option<String>,
    #[serde(default, rename(deserialize = "nome"))]
    pub name: Option<String>,
    #[serde(default, rename(deserialize = "nascimento"))]
    pub birth_date: Option<String>,
    #[serde(default, rename(deserialize = "stack"))]
    pub stacks: Option<Vec<String>>,
}

/// A creation payload that already passed validation. Only values of
/// this type reach the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPerson {
    pub nickname: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub stacks: Option<Vec<String>>,
}
