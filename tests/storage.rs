#[cfg(test)]
mod tests {
    use blokk::libs::block::TimeBlock;
    use blokk::libs::data_storage::DataStorage;
    use blokk::libs::storage::{BlockStore, BLOCKS_FILE_NAME};
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests share the HOME environment variable, so they must not overlap.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StorageTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            StorageTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn template() -> Vec<TimeBlock> {
        vec![
            TimeBlock::new("Work", "09:00", "11:00", "#4F46E5"),
            TimeBlock::new("Rest", "13:00", "14:00", "#10B981"),
        ]
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_without_stored_collection_is_empty(_ctx: &mut StorageTestContext) {
        let store = BlockStore::new().unwrap();
        assert!(store.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_round_trip(_ctx: &mut StorageTestContext) {
        let store = BlockStore::new().unwrap();
        let blocks = template();

        store.save(&blocks).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, blocks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_previous_collection(_ctx: &mut StorageTestContext) {
        let store = BlockStore::new().unwrap();

        store.save(&template()).unwrap();
        let replacement = vec![TimeBlock::new("Study", "19:00", "20:00", "#F59E0B")];
        store.save(&replacement).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Study");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_corrupt_storage_degrades_to_empty(_ctx: &mut StorageTestContext) {
        let path = DataStorage::new().get_path(BLOCKS_FILE_NAME).unwrap();
        fs::write(&path, "{not valid json").unwrap();

        let store = BlockStore::new().unwrap();
        assert!(store.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_failed_save_keeps_previous_collection_visible(_ctx: &mut StorageTestContext) {
        let store = BlockStore::new().unwrap();
        store.save(&template()).unwrap();

        // No temp file may be left behind after a successful save.
        let path = DataStorage::new().get_path(BLOCKS_FILE_NAME).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(store.load().len(), 2);
    }
}
