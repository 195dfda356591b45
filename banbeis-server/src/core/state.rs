use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::{DbService, seed};

/// Server state — shared by every request handler
///
/// Holds the configuration and the embedded database handle. The
/// handle is cheap to clone; repositories take their own copy per
/// request.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state
    ///
    /// In order:
    /// 1. working directory layout (database/, logs/)
    /// 2. embedded database at `WORK_DIR/database`
    /// 3. one-time geographic reference seed
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be opened — without a store
    /// there is nothing to serve.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_dir())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        seed::run(&db, Path::new(&config.seed_dir))
            .await
            .expect("Failed to seed reference data");

        Self::new(config.clone(), db)
    }

    /// Get a database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
