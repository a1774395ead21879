use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::configuration::DatabaseConfiguration;

pub mod configuration;
pub mod errors;
pub mod search;
pub mod store;
pub mod structs;
pub mod telemetry;
pub mod validation;

pub async fn get_database_connection(
    database_config: DatabaseConfiguration,
) -> Result<Database, mongodb::error::Error> {
    let client_options = ClientOptions::parse(database_config.connection_string()).await?;
    let client = Client::with_options(client_options)?;
    Ok(client.database(&database_config.database_name))
}
