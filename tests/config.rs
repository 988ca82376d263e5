#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use workweek::libs::config::{Config, SummaryConfig, CONFIG_FILE_NAME};
    use workweek::libs::data_storage::DataStorage;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home for each test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.summary().daily_target_hours, 8);
        assert!(!config.summary().include_inactive_projects);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            summary: Some(SummaryConfig {
                daily_target_hours: 6,
                include_inactive_projects: true,
            }),
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_summary_section(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"summary": {"daily_target_hours": 7}}"#).unwrap();
        let summary = Config::read().unwrap().summary();
        assert_eq!(summary.daily_target_hours, 7);
        assert!(!summary.include_inactive_projects);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::read().is_err());
    }
}
