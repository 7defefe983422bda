use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::{GardenConfig, StorageBackend},
    journal::JournalStore,
    log_error, log_info,
    storage::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore},
};

const ENABLE_LOGS: bool = true;

/// Build the configured backend and load the journal from it.
pub fn open_garden(config: &GardenConfig) -> Result<JournalStore> {
    log_info!(
        "Kidney Garden starting up ({:?} storage in {})",
        config.backend,
        config.data_dir.display()
    );

    let storage = open_storage(config).inspect_err(|err| {
        log_error!("Failed to open {:?} storage: {err:#}", config.backend);
    })?;

    JournalStore::open(storage, config.storage_key.clone())
}

pub fn open_storage(config: &GardenConfig) -> Result<Arc<dyn KeyValueStore>> {
    let storage: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::Json => Arc::new(JsonFileStore::new(config.data_dir.clone())?),
        StorageBackend::Sqlite => Arc::new(SqliteStore::new(config.sqlite_path())?),
    };
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkSize, HealthData};

    fn config_in(dir: &std::path::Path, backend: StorageBackend) -> GardenConfig {
        crate::init_logging(true);
        GardenConfig {
            data_dir: dir.to_path_buf(),
            backend,
            ..GardenConfig::default()
        }
    }

    #[test]
    fn file_backed_gardens_survive_reopen() {
        for backend in [StorageBackend::Json, StorageBackend::Sqlite] {
            let tmp = tempfile::tempdir().unwrap();
            let config = config_in(tmp.path(), backend);

            let mut journal = open_garden(&config).unwrap();
            journal.add_drink(DrinkSize::Small).unwrap();
            drop(journal);

            let reopened = open_garden(&config).unwrap();
            assert_eq!(reopened.data().drinks, 6, "{backend:?}");
        }
    }

    #[test]
    fn memory_garden_starts_fresh_each_time() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path(), StorageBackend::Memory);

        let mut journal = open_garden(&config).unwrap();
        journal.add_salty_meal().unwrap();

        let reopened = open_garden(&config).unwrap();
        assert_eq!(reopened.data(), &HealthData::default());
    }
}
