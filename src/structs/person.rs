use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Person {
    pub id: Uuid,
    #[serde(rename(serialize = "apelido"))]
    pub nickname: String,
    #[serde(rename(serialize = "nome"))]
    pub name: String,
    #[serde(rename(serialize = "nascimento"))]
    pub birth_date: NaiveDate,
    #[serde(rename(serialize = "stack"))]
    pub stacks: Option<Vec<String>>,
}
