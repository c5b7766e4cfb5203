use crate::config::Config;
use axum_helpers::SessionAuth;
use mongodb::{Client, Database};

/// Shared state built once at startup.
///
/// `Client` and `Database` are handles onto one connection pool; cloning
/// them is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
    pub auth: SessionAuth,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        let auth = SessionAuth::new(&config.jwt);

        Self {
            config,
            mongo_client,
            db,
            auth,
        }
    }
}
