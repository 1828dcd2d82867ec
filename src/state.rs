use std::sync::Arc;

use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};

use crate::config::Config;
use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct AppState {
    pub sdb: Surreal<Any>,
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn init(config: Config) -> Result<Self> {
        let sdb = connect(&config.db_endpoint).await?;
        sdb.signin(Root {
            username: &config.db_username,
            password: &config.db_password,
        })
        .await?;
        sdb.use_ns(&config.db_namespace)
            .use_db(&config.db_database)
            .await?;

        Ok(Self {
            sdb,
            http: reqwest::Client::new(),
            config: Arc::new(config),
        })
    }
}
