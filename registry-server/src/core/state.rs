//! Server State
//!
//! [`ServerState`] holds every shared service. Cloning is cheap (all `Arc`s),
//! so it is handed to axum as router state.
//!
//! | Field | Type | Meaning |
//! |-------|------|---------|
//! | config | Config | immutable configuration |
//! | store | Arc<dyn EmployeeStore> | record store |
//! | registration | RegistrationService | registration pipeline |
//! | roster | RosterHub | live listing fan-out |

use std::sync::Arc;

use crate::auth::CurrentOwner;
use crate::core::{Config, Result, StoreBackend};
use crate::db::DbService;
use crate::db::repository::{
    EmployeeStore, MemoryEmployeeRepository, Scope, SqliteEmployeeRepository,
};
use crate::live::{RosterAction, RosterHub};
use crate::services::{EmployeeNumberGenerator, RegistrationService};

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn EmployeeStore>,
    pub registration: RegistrationService,
    pub roster: RosterHub,
}

impl ServerState {
    /// Assemble state around an existing store
    pub fn new(
        config: Config,
        store: Arc<dyn EmployeeStore>,
        numbers: Arc<dyn EmployeeNumberGenerator>,
    ) -> Self {
        let registration = RegistrationService::new(store.clone(), numbers);
        Self {
            config,
            store,
            registration,
            roster: RosterHub::new(),
        }
    }

    /// Build state from configuration, opening the configured store
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn EmployeeStore> = match config.store_backend {
            StoreBackend::Sqlite => {
                let db = DbService::new(&config.database_file()).await?;
                Arc::new(SqliteEmployeeRepository::new(db.pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; records are lost on restart");
                Arc::new(MemoryEmployeeRepository::new())
            }
        };

        tracing::info!(
            backend = store.backend(),
            app_id = %config.app_id,
            number_strategy = config.number_strategy.as_str(),
            "Server state initialized"
        );

        Ok(Self::new(
            config.clone(),
            store,
            Arc::new(config.number_strategy),
        ))
    }

    /// Collection the given owner reads and writes
    pub fn scope_for(&self, owner: &CurrentOwner) -> Scope {
        Scope::new(self.config.app_id.clone(), owner.user_id.clone())
    }

    /// Notify live listings of a mutation in `scope`
    pub fn broadcast_roster(&self, scope: &Scope, action: RosterAction, id: i64) -> u64 {
        self.roster.publish(scope, action, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::NumberStrategy;

    #[tokio::test]
    async fn test_initialize_memory_backend() {
        let config = Config::in_memory("test-app");
        let state = ServerState::initialize(&config).await.unwrap();
        assert_eq!(state.store.backend(), "memory");

        let scope = state.scope_for(&CurrentOwner::anonymous("anonymous"));
        assert_eq!(
            scope.collection_path(),
            "artifacts/test-app/users/anonymous/employees"
        );
    }

    #[tokio::test]
    async fn test_initialize_sqlite_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::in_memory("test-app");
        config.store_backend = StoreBackend::Sqlite;
        config.database_path = Some(dir.path().join("reg.db").to_string_lossy().into_owned());
        config.number_strategy = NumberStrategy::RandomSuffix;

        let state = ServerState::initialize(&config).await.unwrap();
        assert_eq!(state.store.backend(), "sqlite");
        state.store.ping().await.unwrap();
    }
}
